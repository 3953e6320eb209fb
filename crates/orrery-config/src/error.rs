//! Configuration error types.

use std::fmt;

/// Errors that can occur when loading, saving, parsing, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// One or more settings are out of range. Every violation is reported.
    #[error("invalid config: {0}")]
    Invalid(Violations),
}

/// A single out-of-range setting.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigViolation {
    /// Dotted path of the offending setting, e.g. `scene.star_density`.
    pub field: &'static str,
    /// Human-readable description of the accepted range.
    pub message: String,
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All violations found by a validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations(pub Vec<ConfigViolation>);

impl Violations {
    /// Record a violation for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(ConfigViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether any violation was recorded against `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigViolation> {
        self.0.iter()
    }

    /// `Ok(())` when empty, otherwise [`ConfigError::Invalid`] carrying every violation.
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self))
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
