pub mod booking_status;
pub mod customer_status;
pub mod driver_status;
pub mod notification;
pub mod payment;
pub mod promo_type;
pub mod tone;
pub mod vehicle_status;

pub use booking_status::BookingStatus;
pub use customer_status::CustomerStatus;
pub use driver_status::{DocumentsStatus, DriverStatus};
pub use notification::{NotificationStatus, RecipientGroup};
pub use payment::{PaymentMethod, PaymentStatus};
pub use promo_type::PromoType;
pub use tone::Tone;
pub use vehicle_status::VehicleStatus;

/// Closed set of values a record can be faceted by.
///
/// `code` is the wire value used in sample data and in facet selections;
/// it is compared case-sensitively.
pub trait FacetValue: Copy + Sized + 'static {
    /// All variants in display order
    fn all() -> &'static [Self];

    fn code(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn tone(&self) -> Tone;

    /// CSS classes of the badge showing this value
    fn badge_class(&self) -> &'static str {
        self.tone().badge_class()
    }

    /// Parse from a wire code
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }
}
