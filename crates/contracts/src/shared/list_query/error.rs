use crate::domain::common::EntityKind;
use thiserror::Error;

/// Errors of record lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: EntityKind, id: String },
}

impl QueryError {
    pub fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        QueryError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
