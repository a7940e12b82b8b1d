//! Text input configuration
//!
//! Built once at construction, either field-by-field through
//! [`TextInputConfig::builder`] or from a YAML document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::editable::InputType;

/// Default undo depth
pub const DEFAULT_UNDO_LEVELS: usize = 50;

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Immutable settings of a text input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextInputConfig {
    pub input_type: InputType,

    /// Maximum length in code points (None = unlimited)
    pub max_length: Option<usize>,

    /// Initial buffer content
    pub default_value: String,

    /// Shown by the renderer while the buffer is empty
    pub placeholder: String,

    /// Mask character for password fields
    pub password_char: char,

    /// Caret blink half-period in seconds
    pub caret_blink_rate: f32,

    pub disabled: bool,

    /// Undo depth (None disables the undo log)
    pub undo_levels: Option<usize>,

    /// Report undo/redo on an empty stack as an error instead of a no-op
    pub strict_undo: bool,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            input_type: InputType::Text,
            max_length: None,
            default_value: String::new(),
            placeholder: String::new(),
            password_char: '●',
            caret_blink_rate: 0.5,
            disabled: false,
            undo_levels: Some(DEFAULT_UNDO_LEVELS),
            strict_undo: false,
        }
    }
}

impl TextInputConfig {
    pub fn builder() -> TextInputConfigBuilder {
        TextInputConfigBuilder::default()
    }

    /// Parse a YAML document; missing fields take their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load config from a YAML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!("Loaded text input config from {}", path.display());
        Ok(config)
    }

    /// Load config from a YAML file, or return defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Field-by-field override of [`TextInputConfig::default`]
#[derive(Debug, Clone, Default)]
pub struct TextInputConfigBuilder {
    config: TextInputConfig,
}

impl TextInputConfigBuilder {
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.config.input_type = input_type;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = Some(max_length);
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.config.default_value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    pub fn password_char(mut self, ch: char) -> Self {
        self.config.password_char = ch;
        self
    }

    pub fn caret_blink_rate(mut self, seconds: f32) -> Self {
        self.config.caret_blink_rate = seconds;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn undo_levels(mut self, levels: Option<usize>) -> Self {
        self.config.undo_levels = levels;
        self
    }

    pub fn strict_undo(mut self, strict: bool) -> Self {
        self.config.strict_undo = strict;
        self
    }

    pub fn build(self) -> TextInputConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TextInputConfig::default();
        assert_eq!(config.input_type, InputType::Text);
        assert_eq!(config.max_length, None);
        assert_eq!(config.password_char, '●');
        assert_eq!(config.undo_levels, Some(DEFAULT_UNDO_LEVELS));
        assert!(!config.strict_undo);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TextInputConfig::builder()
            .input_type(InputType::Password)
            .max_length(8)
            .password_char('*')
            .undo_levels(None)
            .build();
        assert_eq!(config.input_type, InputType::Password);
        assert_eq!(config.max_length, Some(8));
        assert_eq!(config.password_char, '*');
        assert_eq!(config.undo_levels, None);
        assert_eq!(config.caret_blink_rate, 0.5);
    }

    #[test]
    fn test_yaml_partial() {
        let config = TextInputConfig::from_yaml_str(
            "input_type: numeric\nmax_length: 4\nplaceholder: \"0000\"\n",
        )
        .unwrap();
        assert_eq!(config.input_type, InputType::Numeric);
        assert_eq!(config.max_length, Some(4));
        assert_eq!(config.placeholder, "0000");
        assert_eq!(config.undo_levels, Some(DEFAULT_UNDO_LEVELS));
    }

    #[test]
    fn test_yaml_null_undo_levels_disables_undo() {
        let config = TextInputConfig::from_yaml_str("undo_levels: ~\n").unwrap();
        assert_eq!(config.undo_levels, None);
    }

    #[test]
    fn test_yaml_parse_error() {
        let err = TextInputConfig::from_yaml_str("max_length: [1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
