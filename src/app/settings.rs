//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and the popup renderer consume the same source of truth.

use super::state::AppState;

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Boolean toggle; reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Cycle { label, .. } => label,
        }
    }

    /// Current value as shown in the popup.
    pub fn value(&self, state: &AppState) -> String {
        match self {
            Self::Toggle { get, .. } => (if get(state) { "ON" } else { "OFF" }).to_string(),
            Self::Cycle { value, .. } => value(state),
        }
    }

    pub fn activate(&self, state: &mut AppState) {
        match self {
            Self::Toggle { get, set, .. } => {
                let current = get(state);
                set(state, !current);
            }
            Self::Cycle { cycle, .. } => cycle(state),
        }
    }
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Cycle {
        label: "Device Profile",
        value: |s| s.config.active_profile().label().to_string(),
        cycle: |s| {
            let next = s.config.active_profile().next();
            match s.config.select_profile(next) {
                Ok(pull) => {
                    s.remount(pull);
                    s.status_message = Some(format!(
                        "Profile: {next} (max pull {}, decay {})",
                        pull.max_pull_distance(),
                        pull.decay_rate()
                    ));
                    persist(s);
                }
                Err(e) => s.status_message = Some(format!("Profile {next} not applied: {e}")),
            }
        },
    },
    SettingsItem::Toggle {
        label: "Debug HUD",
        get: |s| s.config.show_hud,
        set: set_hud,
    },
];

/// Show or hide the debug HUD and remember the choice.
pub fn set_hud(state: &mut AppState, visible: bool) {
    state.config.show_hud = visible;
    persist(state);
}

fn persist(state: &mut AppState) {
    if let Err(e) = state.config.save() {
        tracing::warn!("saving config failed: {e:#}");
        state.status_message = Some(format!("Could not save config: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::document::Document;
    use crate::config::AppConfig;
    use crate::core::{Profile, PullConfig};

    #[test]
    fn toggle_reports_state() {
        let state = AppState::new(
            Document::from_text("t", "x"),
            AppConfig::default(),
            PullConfig::default(),
        );
        let hud = &SETTINGS_ITEMS[1];
        assert_eq!(hud.label(), "Debug HUD");
        assert_eq!(hud.value(&state), "OFF");
        assert_eq!(SETTINGS_ITEMS[0].value(&state), Profile::Default.label());
    }

    #[test]
    fn invalid_profile_cycle_keeps_current_engine_and_profile() {
        let mut config = AppConfig::default();
        config.decay_rate = Some(1.5);
        let mut state = AppState::new(Document::from_text("t", "x"), config, PullConfig::default());

        SETTINGS_ITEMS[0].activate(&mut state);

        assert_eq!(state.config.profile, Profile::Default);
        assert_eq!(SETTINGS_ITEMS[0].value(&state), "default");
        assert_eq!(state.engine.config().max_pull_distance(), 300.0);
        let status = state.status_message.unwrap_or_default();
        assert!(status.contains("not applied"), "{status}");
    }
}
