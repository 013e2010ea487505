pub mod aggregate;

pub use aggregate::{
    FareSetting, FeatureToggles, PlatformSettings, PromoCode, SettingsError, SettingsSection,
    SettingsSink,
};
