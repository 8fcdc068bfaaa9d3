//! Error handling module for MagForge
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Domain modules define their own focused error enums (transition, parameter,
//! suitability) which all convert into [`MagForgeError`].

use crate::parameters::ParameterError;
use crate::session::TransitionError;
use crate::suitability::SuitabilityError;
use thiserror::Error;

/// Main error type for MagForge
#[derive(Error, Debug)]
pub enum MagForgeError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preset/configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wizard state machine rejected a transition
    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),

    /// A parameter could not be set
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Strict suitability lookup failed
    #[error("Suitability error: {0}")]
    Suitability(#[from] SuitabilityError),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for MagForge operations
pub type Result<T> = std::result::Result<T, MagForgeError>;

impl MagForgeError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentKind, WizardStep};

    #[test]
    fn test_error_display() {
        let err = MagForgeError::config("unknown component 'choke'");
        assert_eq!(err.to_string(), "Configuration error: unknown component 'choke'");

        let err = MagForgeError::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal error: raw mode unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MagForgeError = io_err.into();
        assert!(matches!(err, MagForgeError::Io(_)));
    }

    #[test]
    fn test_transition_error_conversion() {
        let err: MagForgeError = TransitionError::WrongStep {
            expected: WizardStep::Topology,
            actual: WizardStep::Component,
        }
        .into();
        assert!(matches!(err, MagForgeError::Transition(_)));
        assert!(err.to_string().starts_with("Transition error:"));
    }

    #[test]
    fn test_suitability_error_conversion() {
        let err: MagForgeError = SuitabilityError::UnknownPairing {
            component: ComponentKind::Inductor,
            topology: "sepic".to_string(),
        }
        .into();
        assert!(matches!(err, MagForgeError::Suitability(_)));
        assert!(err.to_string().contains("sepic"));
    }
}
