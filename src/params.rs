/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationConfig value that the control panel
 * edits and hands to the frame driver. A config is never shared mutably with
 * the simulation: every edit produces a whole new value, and the driver
 * compares it against the previous one to decide what has to be reconciled.
 */

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;
use crate::theme::Theme;

/// How fish react to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// The pointer is food: fish seek it.
    #[default]
    Attract,
    /// The pointer is a predator: fish flee it.
    Repel,
    /// Fish ignore the pointer.
    Idle,
}

impl InteractionMode {
    pub const ALL: [InteractionMode; 3] = [
        InteractionMode::Attract,
        InteractionMode::Repel,
        InteractionMode::Idle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Attract => "Feed",
            InteractionMode::Repel => "Scare",
            InteractionMode::Idle => "Watch",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            InteractionMode::Attract => "Fish flock to your cursor.",
            InteractionMode::Repel => "Fish swim away from danger.",
            InteractionMode::Idle => "Fish swim peacefully.",
        }
    }
}

/// Largest fish or jellyfish count the world will build.
pub const MAX_POPULATION: usize = 10_000;

// Parameters for the simulation that can be adjusted via UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    #[serde(deserialize_with = "deserialize_count")]
    pub fish_count: usize,
    #[serde(deserialize_with = "deserialize_count")]
    pub jellyfish_count: usize,
    pub interaction_mode: InteractionMode,
    pub base_speed: f32,
    pub theme: Theme,
    pub show_debug: bool,
    // Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fish_count: 80,
            jellyfish_count: 6,
            interaction_mode: InteractionMode::Attract,
            base_speed: 2.0,
            theme: Theme::DeepOcean,
            show_debug: false,
            seed: None,
        }
    }
}

/// What differs between two configuration snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigChanges {
    pub fish_count_changed: bool,
    pub base_speed_changed: bool,
    pub mode_changed: bool,
    pub theme_changed: bool,
    pub any_changed: bool,
}

impl ConfigChanges {
    // The reconciler only cares about population size and speed
    pub fn needs_reconcile(&self) -> bool {
        self.fish_count_changed || self.base_speed_changed
    }
}

impl SimulationConfig {
    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_speed.is_finite() || self.base_speed <= 0.0 {
            return Err(ConfigError::Invalid("base_speed must be a positive number"));
        }
        if self.fish_count > MAX_POPULATION {
            return Err(ConfigError::Invalid("fish_count exceeds the population limit"));
        }
        if self.jellyfish_count > MAX_POPULATION {
            return Err(ConfigError::Invalid("jellyfish_count exceeds the population limit"));
        }
        Ok(())
    }

    // Compare against a previous snapshot
    pub fn detect_changes(&self, previous: &SimulationConfig) -> ConfigChanges {
        ConfigChanges {
            fish_count_changed: self.fish_count != previous.fish_count,
            base_speed_changed: self.base_speed != previous.base_speed,
            mode_changed: self.interaction_mode != previous.interaction_mode,
            theme_changed: self.theme != previous.theme,
            any_changed: self != previous,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn fish_count_range() -> std::ops::RangeInclusive<usize> {
        10..=300
    }

    pub fn base_speed_range() -> std::ops::RangeInclusive<f32> {
        0.5..=5.0
    }

    pub const BASE_SPEED_STEP: f64 = 0.1;
}

/// Convert a raw requested count into a usable one. Negative, NaN and
/// infinite requests all mean "none"; huge ones stop at MAX_POPULATION.
pub fn sanitize_count(raw: f64) -> usize {
    if raw.is_finite() && raw > 0.0 {
        raw.floor().min(MAX_POPULATION as f64) as usize
    } else {
        0
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(sanitize_count(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_scene() {
        let config = SimulationConfig::default();
        assert_eq!(config.fish_count, 80);
        assert_eq!(config.jellyfish_count, 6);
        assert_eq!(config.interaction_mode, InteractionMode::Attract);
        assert_eq!(config.base_speed, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json(r#"{ "fish_count": 120, "interaction_mode": "repel" }"#).unwrap();
        assert_eq!(config.fish_count, 120);
        assert_eq!(config.interaction_mode, InteractionMode::Repel);
        assert_eq!(config.jellyfish_count, 6);
    }

    #[test]
    fn negative_counts_become_zero() {
        let config = SimulationConfig::from_json(r#"{ "fish_count": -12, "jellyfish_count": 3.7 }"#).unwrap();
        assert_eq!(config.fish_count, 0);
        assert_eq!(config.jellyfish_count, 3);
        assert_eq!(sanitize_count(f64::NAN), 0);
        assert_eq!(sanitize_count(f64::INFINITY), 0);
    }

    #[test]
    fn oversized_counts_are_capped_or_rejected() {
        let config = SimulationConfig::from_json(r#"{ "fish_count": 1e30, "jellyfish_count": 20000 }"#).unwrap();
        assert_eq!(config.fish_count, MAX_POPULATION);
        assert_eq!(config.jellyfish_count, MAX_POPULATION);

        let too_many = SimulationConfig { fish_count: usize::MAX, ..SimulationConfig::default() };
        assert!(matches!(too_many.validate(), Err(ConfigError::Invalid(_))));
        let too_many = SimulationConfig { jellyfish_count: MAX_POPULATION + 1, ..SimulationConfig::default() };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let err = SimulationConfig::from_json(r#"{ "base_speed": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimulationConfig::from_json("{ fish_count: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimulationConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn change_detection_separates_concerns() {
        let base = SimulationConfig::default();

        let themed = SimulationConfig { theme: Theme::DreamyPink, ..base.clone() };
        let changes = themed.detect_changes(&base);
        assert!(changes.theme_changed && changes.any_changed);
        assert!(!changes.needs_reconcile());

        let faster = SimulationConfig { base_speed: 3.5, ..base.clone() };
        assert!(faster.detect_changes(&base).needs_reconcile());

        assert_eq!(base.detect_changes(&base), ConfigChanges::default());
    }
}
