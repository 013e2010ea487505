use contracts::domain::a007_platform_settings::{
    FeatureToggles, PlatformSettings, SettingsError, SettingsSection, SettingsSink,
};
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the settings page
#[derive(Clone)]
pub struct SettingsViewModel {
    pub settings: RwSignal<PlatformSettings>,
    pub error: RwSignal<Option<String>>,
    sink: Arc<dyn SettingsSink + Send + Sync>,
}

impl SettingsViewModel {
    pub fn new(settings: PlatformSettings, sink: Arc<dyn SettingsSink + Send + Sync>) -> Self {
        Self {
            settings: RwSignal::new(settings),
            error: RwSignal::new(None),
            sink,
        }
    }

    pub fn toggles(&self) -> FeatureToggles {
        self.settings.with(|s| s.toggles)
    }

    pub fn set_email_notifications(&self, on: bool) {
        self.settings.update(|s| s.toggles.email_notifications = on);
    }

    pub fn set_sms_notifications(&self, on: bool) {
        self.settings.update(|s| s.toggles.sms_notifications = on);
    }

    pub fn set_auto_assignment(&self, on: bool) {
        self.settings.update(|s| s.toggles.auto_assignment = on);
    }

    pub fn set_maintenance_mode(&self, on: bool) {
        if on {
            log::warn!("Maintenance mode enabled");
        }
        self.settings.update(|s| s.toggles.maintenance_mode = on);
    }

    /// Saves one tab. Returns the confirmation text for the toast.
    pub fn save(&self, section: SettingsSection) -> Result<String, SettingsError> {
        let result = self.settings.with(|s| self.sink.save(section, s));
        match result {
            Ok(()) => {
                self.error.set(None);
                Ok(format!("{} settings saved successfully", section.display_name()))
            }
            Err(e) => {
                log::error!("{}", e);
                self.error.set(Some(e.to_string()));
                Err(e)
            }
        }
    }
}
