use crate::domain::common::{EntityKind, FacetDef, ListRecord, SearchField};
use crate::enums::{FacetValue, NotificationStatus, RecipientGroup};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broadcast message to drivers and/or customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub recipient: RecipientGroup,
    pub status: NotificationStatus,
    /// Send time, or the planned time for scheduled ones
    pub sent_at: DateTime<Utc>,
    #[serde(rename = "recipients_count")]
    pub recipients_count: u32,
}

impl ListRecord for Notification {
    const KIND: EntityKind = EntityKind::Notification;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::ignore_case("title", &self.title),
            SearchField::ignore_case("message", &self.message),
        ]
    }

    fn facet_value(&self, facet: &str) -> Option<&'static str> {
        match facet {
            "status" => Some(self.status.code()),
            _ => None,
        }
    }

    fn numeric_value(&self, field: &str) -> Option<f64> {
        match field {
            "recipients_count" => Some(f64::from(self.recipients_count)),
            _ => None,
        }
    }

    fn facets() -> Vec<FacetDef> {
        // recipient is not a facet: its "all" code collides with the no-filter selection
        vec![FacetDef::of::<NotificationStatus>("status")]
    }
}
