use serde::{Deserialize, Serialize};

/// How a promo code discount is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoType {
    Percentage,
    Fixed,
}

impl PromoType {
    pub fn code(&self) -> &'static str {
        match self {
            PromoType::Percentage => "percentage",
            PromoType::Fixed => "fixed",
        }
    }
}
