use crate::error::{SignSenseError, SsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of points in one hand landmark frame (wrist + 4 joints x 5 fingers).
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Tip must be this much farther from the wrist than its pip to count as extended.
/// Tuned for coordinates normalized to [0, 1]; the most sensitive knob in the system.
pub const DEFAULT_EXTENSION_MARGIN: f64 = 0.04;

/// Thumb tip / index tip closer than this is a pinch.
pub const DEFAULT_PINCH_THRESHOLD: f64 = 0.06;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    #[arg(long, default_value_t = DEFAULT_EXTENSION_MARGIN)]
    pub extension_margin: f64,

    #[arg(long, default_value_t = DEFAULT_PINCH_THRESHOLD)]
    pub pinch_threshold: f64,

    // Frames shorter than this never reach the rule table
    #[arg(long, default_value_t = HAND_LANDMARK_COUNT)]
    pub min_landmarks: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            extension_margin: DEFAULT_EXTENSION_MARGIN,
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
            min_landmarks: HAND_LANDMARK_COUNT,
        }
    }
}

impl ClassifierConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SignSenseError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SsResult<()> {
        if !self.extension_margin.is_finite() || self.extension_margin < 0.0 {
            return Err(SignSenseError::Config(format!(
                "extension_margin must be a non-negative number, got {}",
                self.extension_margin
            )));
        }
        if !self.pinch_threshold.is_finite() || self.pinch_threshold < 0.0 {
            return Err(SignSenseError::Config(format!(
                "pinch_threshold must be a non-negative number, got {}",
                self.pinch_threshold
            )));
        }
        if self.min_landmarks < HAND_LANDMARK_COUNT {
            return Err(SignSenseError::Config(format!(
                "min_landmarks must be at least {}, got {}",
                HAND_LANDMARK_COUNT, self.min_landmarks
            )));
        }
        Ok(())
    }

    /// Overwrites fields with values the user typed on the command line.
    /// Clap defaults are ignored so file values survive.
    pub fn merge_from_cli(&mut self, cli: &ClassifierConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(extension_margin);
        update_if_present!(pinch_threshold);
        update_if_present!(min_landmarks);
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, default_value_t = 5000)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
