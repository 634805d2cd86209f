//! Game settings
//!
//! Loaded from a JSON document. Every key is optional and falls back to the
//! default for that key.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::RemovalPolicy;

/// Error loading settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "malformed settings: {e}"),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: i32,
    pub field_height: i32,

    // === Timing ===
    /// Tick period in milliseconds
    pub tick_ms: u32,

    // === Simulation ===
    /// RNG seed for spawning
    pub seed: u64,
    /// One spawn per this many ticks on average (0 disables spawning)
    pub spawn_odds: u32,
    pub removal_policy: RemovalPolicy,

    // === Headless demo ===
    /// Tick limit for the native demo run
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_ms: TICK_MS,
            seed: 0,
            spawn_odds: SPAWN_ODDS,
            removal_policy: RemovalPolicy::Stable,
            demo_ticks: 30_000,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the game loop cannot run with. Narrow fields are fine;
    /// spawning and player movement clamp for them.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_ms == 0 {
            return Err(SettingsError::Invalid("tick_ms must be positive"));
        }
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(SettingsError::Invalid("field dimensions must be positive"));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_field() {
        let settings = Settings::default();
        assert_eq!(settings.field_width, 640);
        assert_eq!(settings.field_height, 480);
        assert_eq!(settings.tick_ms, 20);
        assert_eq!(settings.spawn_odds, 12);
        assert_eq!(settings.removal_policy, RemovalPolicy::Stable);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{"seed": 42, "removal_policy": "skip_after_removal"}"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.removal_policy, RemovalPolicy::SkipAfterRemoval);
        assert_eq!(settings.field_width, 640);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            seed: 9,
            field_width: 320,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_zero_tick() {
        let err = Settings::from_json(r#"{"tick_ms": 0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_narrow_field_accepted() {
        assert!(Settings::from_json(r#"{"field_width": 12}"#).is_ok());
        assert!(Settings::from_json(r#"{"field_width": 0}"#).is_err());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        for json in [
            r#"{"field_width": -5}"#,
            r#"{"field_height": 0}"#,
            r#"{"field_height": -480}"#,
        ] {
            let err = Settings::from_json(json).unwrap_err();
            assert!(matches!(err, SettingsError::Invalid(_)), "{json}");
        }
        let settings = Settings::from_json(r#"{"spawn_odds": 0}"#).unwrap();
        assert_eq!(settings.spawn_odds, 0);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/falling-shapes.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
