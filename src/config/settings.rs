//! Configuration settings for the simulation runner

use crate::game_of_life::{LifeLikeRule, ParseOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub autoplay: AutoplayConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub generations: usize,
    pub rule: LifeLikeRule,
    /// Center loaded patterns inside the configured grid
    #[serde(default = "default_center")]
    pub center: bool,
}

fn default_center() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Fixed generator seed; `None` draws from the thread-local generator
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoplayConfig {
    pub speed: Speed,
}

/// Autoplay speed selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    /// Delay between generations
    pub fn interval(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(1000),
            Speed::Medium => Duration::from_millis(500),
            Speed::Fast => Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 24,
                cols: 48,
                generations: 10,
                rule: LifeLikeRule::classic(),
                center: default_center(),
            },
            seed: SeedConfig::default(),
            autoplay: AutoplayConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize settings")
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.rows == 0 || self.simulation.cols == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.simulation.rows,
                self.simulation.cols
            );
        }

        Ok(())
    }

    /// Parse options that fit patterns into the configured grid
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            rows: Some(self.simulation.rows),
            cols: Some(self.simulation.cols),
            center: self.simulation.center,
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.simulation.cols = cols;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(rule) = cli_overrides.rule {
            self.simulation.rule = rule;
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.seed.rng_seed = Some(rng_seed);
        }
        if let Some(speed) = cli_overrides.speed {
            self.autoplay.speed = speed;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub generations: Option<usize>,
    pub rule: Option<LifeLikeRule>,
    pub rng_seed: Option<u64>,
    pub speed: Option<Speed>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_round_trip() {
        let settings = Settings::default();
        let yaml = settings.to_yaml().unwrap();
        assert!(yaml.contains("B3/S23"));
        assert!(yaml.contains("speed: medium"));

        let back: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_from_file_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "simulation:\n  rows: 10\n  cols: 12\n  generations: 3\n  rule: B36/S23\n"
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.simulation.rows, 10);
        assert_eq!(settings.simulation.rule, LifeLikeRule::high_life());
        assert!(settings.simulation.center);
        assert_eq!(settings.autoplay.speed, Speed::Medium);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert_eq!(settings.seed.rng_seed, None);
    }

    #[test]
    fn test_center_can_be_disabled() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "simulation:\n  rows: 10\n  cols: 12\n  generations: 3\n  rule: B3/S23\n  center: false\n"
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert!(!settings.simulation.center);
        assert!(!settings.parse_options().center);
    }

    #[test]
    fn test_invalid_settings() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "simulation:\n  rows: 0\n  cols: 12\n  generations: 3\n  rule: B3/S23\n"
        )
        .unwrap();
        assert!(Settings::from_file(file.path()).is_err());

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "simulation:\n  rows: 4\n  cols: 4\n  generations: 3\n  rule: nonsense\n"
        )
        .unwrap();
        assert!(Settings::from_file(file.path()).is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            rows: Some(5),
            generations: Some(99),
            rng_seed: Some(7),
            speed: Some(Speed::Fast),
            ..CliOverrides::default()
        });

        assert_eq!(settings.simulation.rows, 5);
        assert_eq!(settings.simulation.cols, 48);
        assert_eq!(settings.simulation.generations, 99);
        assert_eq!(settings.seed.rng_seed, Some(7));
        assert_eq!(settings.autoplay.speed, Speed::Fast);
    }

    #[test]
    fn test_speed_intervals_are_ordered() {
        assert!(Speed::Slow.interval() > Speed::Medium.interval());
        assert!(Speed::Medium.interval() > Speed::Fast.interval());
    }
}
