//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_width == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_width must be > 0".into(),
            ));
        }
        if self.limits.max_height == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_height must be > 0".into(),
            ));
        }
        if self.processing.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.supported_formats must not be empty".into(),
            ));
        }
        if self.output.suffix.is_empty() && self.output.dir.is_none() && !self.output.overwrite {
            return Err(ConfigError::ValidationError(
                "output.suffix must not be empty unless an output dir or overwrite is set".into(),
            ));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "logging.level must be a valid level, got {other:?}"
                )));
            }
        }
        Ok(())
    }
}
