use crate::enums::PromoType;
use crate::shared::list_query::aggregate::percent_of;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tariff for one vehicle type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareSetting {
    pub id: String,
    pub vehicle_type: String,
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub waiting_charges: f64,
    pub minimum_fare: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub id: String,
    pub code: String,
    pub discount: f64,
    #[serde(rename = "type")]
    pub promo_type: PromoType,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub usage_limit: u32,
    pub used: u32,
    pub active: bool,
}

impl PromoCode {
    /// Share of the usage limit already consumed; 0 for a zero limit
    pub fn usage_percent(&self) -> u32 {
        percent_of(f64::from(self.used), f64::from(self.usage_limit))
    }

    /// "20%" or "₹100"
    pub fn discount_label(&self) -> String {
        match self.promo_type {
            PromoType::Percentage => format!("{}%", self.discount),
            PromoType::Fixed => format!("₹{}", self.discount),
        }
    }
}

/// On/off switches of the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureToggles {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub auto_assignment: bool,
    pub maintenance_mode: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            auto_assignment: true,
            maintenance_mode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    #[serde(default)]
    pub fares: Vec<FareSetting>,
    #[serde(default)]
    pub promo_codes: Vec<PromoCode>,
    #[serde(default)]
    pub toggles: FeatureToggles,
}

/// Tab of the settings page that is saved as one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    General,
    Fares,
    Promos,
    Notifications,
    System,
}

impl SettingsSection {
    pub fn display_name(&self) -> &'static str {
        match self {
            SettingsSection::General => "General",
            SettingsSection::Fares => "Fare",
            SettingsSection::Promos => "Promo code",
            SettingsSection::Notifications => "Notification",
            SettingsSection::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Could not save {0} settings: {1}")]
    SaveFailed(&'static str, String),
}

/// Persists a settings section
pub trait SettingsSink {
    fn save(&self, section: SettingsSection, settings: &PlatformSettings) -> Result<(), SettingsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promo(used: u32, limit: u32) -> PromoCode {
        PromoCode {
            id: "P001".into(),
            code: "NEWYEAR2024".into(),
            discount: 20.0,
            promo_type: PromoType::Percentage,
            valid_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            usage_limit: limit,
            used,
            active: true,
        }
    }

    #[test]
    fn test_usage_percent() {
        assert_eq!(promo(245, 1000).usage_percent(), 25);
        assert_eq!(promo(89, 500).usage_percent(), 18);
        assert_eq!(promo(3, 0).usage_percent(), 0);
    }

    #[test]
    fn test_discount_label() {
        assert_eq!(promo(0, 10).discount_label(), "20%");
        let mut fixed = promo(0, 10);
        fixed.promo_type = PromoType::Fixed;
        fixed.discount = 100.0;
        assert_eq!(fixed.discount_label(), "₹100");
    }

    #[test]
    fn test_default_toggles() {
        let t = FeatureToggles::default();
        assert!(t.email_notifications && t.auto_assignment);
        assert!(!t.sms_notifications && !t.maintenance_mode);
    }
}
