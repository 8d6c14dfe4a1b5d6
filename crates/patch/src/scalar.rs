//! Custom scalar decoding.
//!
//! Most fields are filled by structural coercion through `serde`. A field
//! whose type implements [`CustomScalar`] is instead decoded by the type
//! itself. Which path a field takes is fixed when its descriptor is declared,
//! see [`FieldKind`](crate::FieldKind).

use serde_json::Value;

use crate::error::PatchError;

/// A field type that decodes itself from an untyped raw value.
pub trait CustomScalar: Sized {
    /// Type name reported in [`PatchError::TypeMismatch`].
    const NAME: &'static str;

    fn decode(raw: &Value) -> Result<Self, DecodeError>;
}

/// `null` clears an optional scalar; anything else decodes as `T`.
impl<T: CustomScalar> CustomScalar for Option<T> {
    const NAME: &'static str = T::NAME;

    fn decode(raw: &Value) -> Result<Self, DecodeError> {
        match raw {
            Value::Null => Ok(None),
            other => T::decode(other).map(Some),
        }
    }
}

/// Failure reported by [`CustomScalar::decode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The raw value is of a JSON kind the scalar never accepts.
    #[error("unexpected {found} value")]
    UnexpectedKind { found: &'static str },

    /// The raw value has an accepted kind but its content is invalid.
    #[error("{0}")]
    Invalid(String),
}

impl DecodeError {
    #[must_use]
    pub fn unexpected(raw: &Value) -> Self {
        Self::UnexpectedKind {
            found: value_kind(raw),
        }
    }

    #[must_use]
    pub fn invalid(cause: impl std::fmt::Display) -> Self {
        Self::Invalid(cause.to_string())
    }

    pub(crate) fn into_patch_error(self, field: &str, scalar: &'static str) -> PatchError {
        match self {
            Self::UnexpectedKind { .. } => PatchError::type_mismatch(field, scalar),
            Self::Invalid(cause) => PatchError::DecodeFailed {
                field: field.to_string(),
                cause,
            },
        }
    }
}

/// Short name of a JSON value's kind, for error messages.
#[must_use]
pub fn value_kind(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
