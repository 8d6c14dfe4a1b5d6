/// Errors produced while merging a patch onto an entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` expects a value of type {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("field `{field}` could not be decoded: {cause}")]
    DecodeFailed { field: String, cause: String },
}

impl PatchError {
    #[must_use]
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Wire name (or dotted path, for nested fields) the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::UnknownField(field)
            | Self::TypeMismatch { field, .. }
            | Self::DecodeFailed { field, .. } => field,
        }
    }

    /// Prefix the field path with the wire name of the enclosing field.
    pub(crate) fn nested_under(self, parent: &str) -> Self {
        match self {
            Self::UnknownField(field) => Self::UnknownField(format!("{parent}.{field}")),
            Self::TypeMismatch { field, expected } => Self::TypeMismatch {
                field: format!("{parent}.{field}"),
                expected,
            },
            Self::DecodeFailed { field, cause } => Self::DecodeFailed {
                field: format!("{parent}.{field}"),
                cause,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
