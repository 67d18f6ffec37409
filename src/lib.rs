pub mod assemble;
pub mod compile;
pub mod geometry;
pub mod script;
pub mod surfaces;

use thiserror::Error;

/// Errors raised while translating a surface into a journal sequence.
///
/// Translation is deterministic and pure, so every failure is permanent:
/// a surface that cannot be represented is reported with its id and kind,
/// never downgraded to an approximate boolean sequence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TranslateError {
    #[error("surface {surface_id} ({kind}): unsupported geometry: {reason}")]
    UnsupportedGeometry {
        surface_id: u32,
        kind: &'static str,
        reason: String,
    },

    #[error("surface {surface_id} ({kind}): invalid configuration: {reason}")]
    Configuration {
        surface_id: u32,
        kind: &'static str,
        reason: String,
    },
}

impl TranslateError {
    pub fn unsupported(surface_id: u32, kind: &'static str, reason: impl Into<String>) -> Self {
        Self::UnsupportedGeometry {
            surface_id,
            kind,
            reason: reason.into(),
        }
    }

    pub fn configuration(surface_id: u32, kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            surface_id,
            kind,
            reason: reason.into(),
        }
    }
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

pub fn version() -> &'static str {
    "0.1.0"
}
