//! Engine configuration and device profiles.
//!
//! A [`PullConfig`] is fixed for the lifetime of an engine.  Construction
//! validates every field, so a config that exists always yields a
//! terminating return animation (`decay_rate` strictly inside `(0, 1)`).

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MAX_PULL_DISTANCE: f64 = 300.0;
pub const DEFAULT_DAMPING_FACTOR: f64 = 1.2;
pub const DEFAULT_DECAY_RATE: f64 = 0.85;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_pull_distance must be a finite number above 0 (got {0})")]
    MaxPullDistance(f64),
    #[error("damping_factor must be a finite number above 0 (got {0})")]
    DampingFactor(f64),
    #[error("decay_rate must lie strictly between 0 and 1 (got {0})")]
    DecayRate(f64),
    #[error("unknown profile `{0}` (expected default, standard or constrained)")]
    UnknownProfile(String),
}

/// Tuning for the pull interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullConfig {
    max_pull_distance: f64,
    damping_factor: f64,
    decay_rate: f64,
}

impl PullConfig {
    pub fn new(
        max_pull_distance: f64,
        damping_factor: f64,
        decay_rate: f64,
    ) -> Result<Self, ConfigError> {
        if !max_pull_distance.is_finite() || max_pull_distance <= 0.0 {
            return Err(ConfigError::MaxPullDistance(max_pull_distance));
        }
        if !damping_factor.is_finite() || damping_factor <= 0.0 {
            return Err(ConfigError::DampingFactor(damping_factor));
        }
        if !decay_rate.is_finite() || decay_rate <= 0.0 || decay_rate >= 1.0 {
            return Err(ConfigError::DecayRate(decay_rate));
        }
        Ok(Self {
            max_pull_distance,
            damping_factor,
            decay_rate,
        })
    }

    pub fn max_pull_distance(&self) -> f64 {
        self.max_pull_distance
    }

    pub fn damping_factor(&self) -> f64 {
        self.damping_factor
    }

    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            max_pull_distance: DEFAULT_MAX_PULL_DISTANCE,
            damping_factor: DEFAULT_DAMPING_FACTOR,
            decay_rate: DEFAULT_DECAY_RATE,
        }
    }
}

// ───────────────────────────────────────── profiles ──────────

/// Named presets chosen by whoever knows about the device.
///
/// `Standard` suits capable desktop browsers (long pull, slow settle);
/// `Constrained` suits Safari and low-memory devices, where every repaint is
/// expensive, so the pull is short and the settle quick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Default,
    Standard,
    Constrained,
}

impl Profile {
    pub const ALL: &'static [Profile] = &[Profile::Default, Profile::Standard, Profile::Constrained];

    pub fn label(self) -> &'static str {
        match self {
            Profile::Default => "default",
            Profile::Standard => "standard",
            Profile::Constrained => "constrained",
        }
    }

    pub fn config(self) -> PullConfig {
        match self {
            Profile::Default => PullConfig::default(),
            Profile::Standard => PullConfig {
                max_pull_distance: 800.0,
                damping_factor: DEFAULT_DAMPING_FACTOR,
                decay_rate: 0.92,
            },
            Profile::Constrained => PullConfig {
                max_pull_distance: 200.0,
                damping_factor: DEFAULT_DAMPING_FACTOR,
                decay_rate: 0.85,
            },
        }
    }

    /// The profile after this one, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Profile::Default),
            "standard" | "desktop" => Ok(Profile::Standard),
            "constrained" | "safari" | "low-memory" => Ok(Profile::Constrained),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = PullConfig::default();
        assert_eq!(c.max_pull_distance(), 300.0);
        assert_eq!(c.damping_factor(), 1.2);
        assert_eq!(c.decay_rate(), 0.85);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            PullConfig::new(0.0, 1.2, 0.85),
            Err(ConfigError::MaxPullDistance(0.0))
        );
        assert_eq!(
            PullConfig::new(300.0, -1.0, 0.85),
            Err(ConfigError::DampingFactor(-1.0))
        );
        assert_eq!(
            PullConfig::new(300.0, 1.2, 1.0),
            Err(ConfigError::DecayRate(1.0))
        );
        assert_eq!(
            PullConfig::new(300.0, 1.2, 0.0),
            Err(ConfigError::DecayRate(0.0))
        );
        assert!(PullConfig::new(f64::INFINITY, 1.2, 0.5).is_err());
        assert!(PullConfig::new(300.0, 1.2, f64::NAN).is_err());
    }

    #[test]
    fn profiles_produce_valid_configs() {
        for profile in Profile::ALL {
            let c = profile.config();
            assert!(PullConfig::new(c.max_pull_distance(), c.damping_factor(), c.decay_rate()).is_ok());
        }
        assert_eq!(Profile::Standard.config().max_pull_distance(), 800.0);
        assert_eq!(Profile::Constrained.config().max_pull_distance(), 200.0);
    }

    #[test]
    fn profile_parsing_and_cycling() {
        assert_eq!("Safari".parse::<Profile>(), Ok(Profile::Constrained));
        assert_eq!(" standard ".parse::<Profile>(), Ok(Profile::Standard));
        assert!(matches!(
            "tablet".parse::<Profile>(),
            Err(ConfigError::UnknownProfile(_))
        ));
        assert_eq!(Profile::Constrained.next(), Profile::Default);
        assert_eq!(Profile::Default.next(), Profile::Standard);
    }
}
