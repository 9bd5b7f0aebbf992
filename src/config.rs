//! User configuration: pull tuning, input scaling and keybindings, persisted to disk.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/elastic-pull/config.toml` (default
//! `~/.config/elastic-pull/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{ConfigError, Profile, PullConfig};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    ToggleHud,
    OpenSettings,
    Quit,
}

impl Action {
    pub const ALL: &'static [Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::Top,
        Action::Bottom,
        Action::ToggleHud,
        Action::OpenSettings,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::ToggleHud => "toggle_hud",
            Action::OpenSettings => "open_settings",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding (key code + modifiers).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    const MASK: KeyModifiers = KeyModifiers::CONTROL
        .union(KeyModifiers::ALT)
        .union(KeyModifiers::SHIFT);

    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mut mask = Self::MASK;
        // Shift is implied by the character itself for punctuation like '?'.
        if matches!(self.code, KeyCode::Char(c) if !c.is_ascii_alphabetic()) {
            mask.remove(KeyModifiers::SHIFT);
        }
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    fn to_config_string(&self) -> String {
        let mut s = String::new();
        for (flag, prefix) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(prefix);
            }
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Shift+Up"`, `"q"`, `"PageDown"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Command-line tuning for this run only.  Layered over the file settings and
/// never written back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionOverrides {
    pub profile: Option<Profile>,
    pub max_pull_distance: Option<f64>,
    pub damping_factor: Option<f64>,
    pub decay_rate: Option<f64>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Preset the pull tuning starts from.
    pub profile: Profile,
    /// Per-field overrides on top of the profile.
    pub max_pull_distance: Option<f64>,
    pub damping_factor: Option<f64>,
    pub decay_rate: Option<f64>,
    /// Pull units per terminal row.
    pub px_per_row: f64,
    /// Pull units per mouse-wheel notch.
    pub wheel_delta: f64,
    /// Rows scrolled natively per wheel notch.
    pub wheel_rows: usize,
    pub show_hud: bool,
    pub session: SessionOverrides,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            profile: Profile::default(),
            max_pull_distance: None,
            damping_factor: None,
            decay_rate: None,
            px_per_row: 16.0,
            wheel_delta: 50.0,
            wheel_rows: 3,
            show_hud: false,
            session: SessionOverrides::default(),
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(Action::ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(Action::ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Action::PageUp, vec![KeyBind::new(PageUp, n)]);
        m.insert(Action::PageDown, vec![KeyBind::new(PageDown, n), KeyBind::new(Char(' '), n)]);
        m.insert(Action::Top, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(
            Action::Bottom,
            vec![KeyBind::new(End, n), KeyBind::new(Char('G'), KeyModifiers::SHIFT)],
        );
        m.insert(Action::ToggleHud, vec![KeyBind::new(Char('h'), n)]);
        m.insert(Action::OpenSettings, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Action::Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action bound to a key event; the binding with the most
    /// modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    /// The profile in effect: the command line's, else the saved one.
    pub fn active_profile(&self) -> Profile {
        self.session.profile.unwrap_or(self.profile)
    }

    /// Resolve the engine configuration for the active profile.
    pub fn pull_config(&self) -> Result<PullConfig, ConfigError> {
        self.pull_config_for(self.active_profile())
    }

    /// Profile values, then file overrides, then session overrides.
    pub fn pull_config_for(&self, profile: Profile) -> Result<PullConfig, ConfigError> {
        let base = profile.config();
        let session = &self.session;
        PullConfig::new(
            session
                .max_pull_distance
                .or(self.max_pull_distance)
                .unwrap_or(base.max_pull_distance()),
            session
                .damping_factor
                .or(self.damping_factor)
                .unwrap_or(base.damping_factor()),
            session
                .decay_rate
                .or(self.decay_rate)
                .unwrap_or(base.decay_rate()),
        )
    }

    /// Switch to `profile` if it resolves to a valid configuration.  On error
    /// nothing changes.
    pub fn select_profile(&mut self, profile: Profile) -> Result<PullConfig, ConfigError> {
        let pull = self.pull_config_for(profile)?;
        self.profile = profile;
        self.session.profile = None;
        Ok(pull)
    }

    /// Drop every tuning override, file and session alike, keeping the
    /// profile choice.
    pub fn clear_overrides(&mut self) {
        self.max_pull_distance = None;
        self.damping_factor = None;
        self.decay_rate = None;
        self.session = SessionOverrides {
            profile: self.session.profile,
            ..SessionOverrides::default()
        };
    }

    /// One-line summary for the status bar.
    pub fn status_bar_hint(&self) -> String {
        let first = |action: Action| {
            self.bindings
                .get(&action)
                .and_then(|b| b.first())
                .map(KeyBind::to_config_string)
                .unwrap_or_else(|| "?".into())
        };
        format!(
            "wheel/drag past an edge to pull | {}: hud | {}: settings | {}: quit",
            first(Action::ToggleHud),
            first(Action::OpenSettings),
            first(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.  Lines that fail to
    /// parse are skipped and described in the returned warnings.
    pub fn load() -> (Self, Vec<String>) {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_config(&contents),
            Err(_) => (Self::default(), Vec::new()),
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    fn parse_config(s: &str) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            let number = || value.parse::<f64>().ok().filter(|v| v.is_finite());
            let invalid = || format!("line {}: invalid {key} `{value}`", lineno + 1);

            match key {
                "profile" => match value.parse::<Profile>() {
                    Ok(p) => config.profile = p,
                    Err(e) => warnings.push(format!("line {}: {e}", lineno + 1)),
                },
                "max_pull_distance" => match number() {
                    Some(v) => config.max_pull_distance = Some(v),
                    None => warnings.push(invalid()),
                },
                "damping_factor" => match number() {
                    Some(v) => config.damping_factor = Some(v),
                    None => warnings.push(invalid()),
                },
                "decay_rate" => match number() {
                    Some(v) => config.decay_rate = Some(v),
                    None => warnings.push(invalid()),
                },
                "px_per_row" => match number().filter(|v| *v >= 1.0) {
                    Some(v) => config.px_per_row = v,
                    None => warnings.push(invalid()),
                },
                "wheel_delta" => match number().filter(|v| *v > 0.0) {
                    Some(v) => config.wheel_delta = v,
                    None => warnings.push(invalid()),
                },
                "wheel_rows" => match value.parse::<usize>() {
                    // Keep this bounded for predictable UX.
                    Ok(v) => config.wheel_rows = v.clamp(1, 20),
                    Err(_) => warnings.push(invalid()),
                },
                "show_hud" => match value {
                    "true" => config.show_hud = true,
                    "false" => config.show_hud = false,
                    _ => warnings.push(invalid()),
                },
                _ => {
                    let Some(action) = Action::from_config_key(key) else {
                        warnings.push(format!("line {}: unknown key `{key}`", lineno + 1));
                        continue;
                    };
                    let parsed: Vec<KeyBind> = value
                        .split(',')
                        .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                        .collect();
                    if parsed.is_empty() {
                        warnings.push(invalid());
                    } else {
                        config.bindings.insert(action, parsed);
                    }
                }
            }
        }

        (config, warnings)
    }

    fn serialise(&self) -> String {
        let opt = |v: Option<f64>| v.map(|v| v.to_string());
        let mut lines = vec![
            "# elastic-pull configuration".to_string(),
            String::new(),
            "# Pull tuning (profile: default, standard, constrained)".to_string(),
            format!("profile = {}", self.profile),
        ];
        for (key, value) in [
            ("max_pull_distance", opt(self.max_pull_distance)),
            ("damping_factor", opt(self.damping_factor)),
            ("decay_rate", opt(self.decay_rate)),
        ] {
            if let Some(v) = value {
                lines.push(format!("{key} = {v}"));
            }
        }
        lines.extend([
            String::new(),
            "# Input scaling".to_string(),
            format!("px_per_row = {}", self.px_per_row),
            format!("wheel_delta = {}", self.wheel_delta),
            format!("wheel_rows = {}", self.wheel_rows),
            format!("show_hud = {}", self.show_hud),
            String::new(),
            "# Key bindings: action = Key1, Key2 (prefixes Ctrl+, Alt+, Shift+)".to_string(),
        ]);

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(KeyBind::to_config_string).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/elastic-pull/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("elastic-pull").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parses_tuning_and_bindings() {
        let (c, warnings) = AppConfig::parse_config(
            "# comment\n[pull]\nprofile = constrained\ndecay_rate = 0.9\nwheel_rows = 99\nquit = Ctrl+x, F10\n",
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(c.profile, Profile::Constrained);
        assert_eq!(c.wheel_rows, 20);
        let pull = c.pull_config().unwrap();
        assert_eq!(pull.max_pull_distance(), 200.0);
        assert_eq!(pull.decay_rate(), 0.9);
        assert_eq!(
            c.match_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(c.match_key(key(KeyCode::F(10), KeyModifiers::NONE)), Some(Action::Quit));
        assert_eq!(c.match_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn bad_values_warn_and_keep_defaults() {
        let (c, warnings) = AppConfig::parse_config(
            "profile = tablet\nmax_pull_distance = lots\nbogus = 1\nquit = Hyper+q\n",
        );
        assert_eq!(warnings.len(), 4);
        assert_eq!(c.profile, Profile::Default);
        assert_eq!(c.max_pull_distance, None);
        assert_eq!(c.bindings, AppConfig::default_bindings());
    }

    #[test]
    fn out_of_range_override_surfaces_as_config_error() {
        let (c, _) = AppConfig::parse_config("decay_rate = 1.5\n");
        assert_eq!(c.pull_config(), Err(ConfigError::DecayRate(1.5)));
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut c = AppConfig::default();
        c.profile = Profile::Standard;
        c.damping_factor = Some(2.0);
        c.show_hud = true;
        let (back, warnings) = AppConfig::parse_config(&c.serialise());
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(back.profile, Profile::Standard);
        assert_eq!(back.damping_factor, Some(2.0));
        assert!(back.show_hud);
        assert_eq!(back.bindings, c.bindings);
    }

    #[test]
    fn garbage_hud_flag_warns() {
        let (c, warnings) = AppConfig::parse_config("show_hud = yes\n");
        assert_eq!(warnings, vec!["line 1: invalid show_hud `yes`".to_string()]);
        assert!(!c.show_hud);
        let (c, warnings) = AppConfig::parse_config("show_hud = true\n");
        assert!(warnings.is_empty());
        assert!(c.show_hud);
    }

    #[test]
    fn session_overrides_win_but_are_not_saved() {
        let mut c = AppConfig::default();
        c.decay_rate = Some(0.9);
        c.session = SessionOverrides {
            profile: Some(Profile::Standard),
            max_pull_distance: Some(120.0),
            decay_rate: Some(0.7),
            ..SessionOverrides::default()
        };
        assert_eq!(c.active_profile(), Profile::Standard);
        let pull = c.pull_config().unwrap();
        assert_eq!(pull.max_pull_distance(), 120.0);
        assert_eq!(pull.decay_rate(), 0.7);

        let text = c.serialise();
        assert!(text.contains("profile = default"));
        assert!(text.contains("decay_rate = 0.9"));
        assert!(!text.contains("120"));
        assert!(!text.contains("0.7"));
    }

    #[test]
    fn invalid_profile_selection_changes_nothing() {
        let mut c = AppConfig::default();
        c.decay_rate = Some(1.5);
        assert_eq!(
            c.select_profile(Profile::Standard),
            Err(ConfigError::DecayRate(1.5))
        );
        assert_eq!(c.profile, Profile::Default);

        c.clear_overrides();
        assert_eq!(c.decay_rate, None);
        let pull = c.select_profile(Profile::Standard).unwrap();
        assert_eq!(c.profile, Profile::Standard);
        assert_eq!(pull.max_pull_distance(), 800.0);
    }

    #[test]
    fn selecting_a_profile_replaces_the_session_one() {
        let mut c = AppConfig::default();
        c.session.profile = Some(Profile::Constrained);
        c.select_profile(Profile::Default).unwrap();
        assert_eq!(c.session.profile, None);
        assert_eq!(c.active_profile(), Profile::Default);
    }

    #[test]
    fn shift_is_compared_for_letters_only() {
        let c = AppConfig::default();
        assert_eq!(
            c.match_key(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(Action::Bottom)
        );
        assert_eq!(c.match_key(key(KeyCode::Char('G'), KeyModifiers::NONE)), None);
        assert_eq!(
            c.match_key(key(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(Action::OpenSettings)
        );
    }
}
