use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_CHART_TITLE: &str = "Percentage spent by category";
pub const DEFAULT_BAR_MARKER: char = 'o';

/// Presentation settings for the spend chart.
///
/// The defaults reproduce the canonical chart layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub marker: char,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.into(),
            marker: DEFAULT_BAR_MARKER,
        }
    }
}

impl ChartConfig {
    /// Parses a JSON document; missing fields fall back to their defaults.
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.contains('\n') {
            return Err(ConfigError::Invalid(
                "chart title must fit on a single line".into(),
            ));
        }
        if self.marker.is_whitespace() {
            return Err(ConfigError::Invalid(
                "bar marker must be a visible character".into(),
            ));
        }
        Ok(())
    }
}
