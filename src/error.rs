//! Error types for the styled QR rendering pipeline.

use thiserror::Error;

/// Result type alias using [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;

/// A structured validation detail, attached to the [`RenderError`]
/// variants that can localize their cause to a config field.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorDetail {
    /// Dotted field path, e.g. `"centerpiece.size_fraction"`.
    pub field_path: Option<String>,
    /// The offending value, stringified.
    pub offending_value: Option<String>,
    /// A suggested fix, if one can be computed.
    pub suggestion: Option<String>,
}

impl ErrorDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.offending_value = Some(value.into());
        self
    }

    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Errors that can occur while validating a configuration or rendering
/// a QR bit matrix into styled SVG.
///
/// Validation errors (config, intent, composition) always surface to
/// the caller before any SVG bytes are produced. Shape/geometry faults
/// reaching C4/C5 are reported as `InternalInconsistency` because C7/C9
/// should have caught the upstream cause already; no partial SVG is
/// ever returned.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The supplied bit matrix is inconsistent with the declared version.
    #[error("invalid matrix: {message}")]
    InvalidMatrix { message: String },

    /// A configuration value violates its own field constraints.
    #[error("invalid config: {message}")]
    ConfigInvalid { message: String, detail: ErrorDetail },

    /// Legacy flat-keyword config conflicts with structured config.
    #[error("conflicting config keys: {message}")]
    ConfigConflict { message: String, detail: ErrorDetail },

    /// An intent requested a feature the registry does not support and
    /// no fallback is permitted (strict mode).
    #[error("unsupported intent: {message}")]
    UnsupportedIntent { message: String, detail: ErrorDetail },

    /// A requested centerpiece reserve exceeds the ECC-indexed safe cap
    /// and strict mode disallows shrinking it.
    #[error("unsafe reserve area: {message}")]
    UnsafeReserve { message: String, detail: ErrorDetail },

    /// Foreground/background contrast falls below the declared
    /// accessibility target and strict mode disallows auto-adjustment.
    #[error("insufficient contrast: {message}")]
    ContrastError { message: String, detail: ErrorDetail },

    /// A shape renderer received out-of-contract parameters. Should be
    /// unreachable once C7/C9 validation has run.
    #[error("shape parameter error: {message}")]
    ShapeParamError { message: String, detail: ErrorDetail },

    /// An invariant that upstream validation should have guaranteed was
    /// violated anyway. Always fatal.
    #[error("internal inconsistency: {message}")]
    InternalInconsistency { message: String },
}

impl RenderError {
    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>, detail: ErrorDetail) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
            detail,
        }
    }

    pub fn config_conflict(message: impl Into<String>, detail: ErrorDetail) -> Self {
        Self::ConfigConflict {
            message: message.into(),
            detail,
        }
    }

    pub fn unsupported_intent(message: impl Into<String>, detail: ErrorDetail) -> Self {
        Self::UnsupportedIntent {
            message: message.into(),
            detail,
        }
    }

    pub fn unsafe_reserve(message: impl Into<String>, detail: ErrorDetail) -> Self {
        Self::UnsafeReserve {
            message: message.into(),
            detail,
        }
    }

    pub fn contrast_error(message: impl Into<String>, detail: ErrorDetail) -> Self {
        Self::ContrastError {
            message: message.into(),
            detail,
        }
    }

    pub fn shape_param_error(message: impl Into<String>, detail: ErrorDetail) -> Self {
        Self::ShapeParamError {
            message: message.into(),
            detail,
        }
    }

    pub fn internal_inconsistency(message: impl Into<String>) -> Self {
        Self::InternalInconsistency {
            message: message.into(),
        }
    }
}
