//! Field descriptor tables and the merge routine.

use {serde_json::Value, tracing::debug};

use crate::{
    error::{PatchError, Result},
    scalar::DecodeError,
};

/// Wire field name to raw value, as sent by a client.
pub type PatchRequest = serde_json::Map<String, Value>;

/// An entity type with a static table of patchable fields.
///
/// Implement through [`patchable!`](crate::patchable) rather than by hand.
pub trait Patchable: Clone + 'static {
    fn fields() -> &'static [FieldDescriptor<Self>];

    /// Look up a field by its wire name.
    fn field(wire_name: &str) -> Option<&'static FieldDescriptor<Self>> {
        Self::fields().iter().find(|f| f.wire_name == wire_name)
    }
}

/// One patchable field of `T`.
pub struct FieldDescriptor<T: 'static> {
    pub wire_name: &'static str,
    pub kind: FieldKind<T>,
}

/// How a raw value reaches the field.
pub enum FieldKind<T: 'static> {
    /// Structural coercion through `serde`.
    Plain {
        expected: &'static str,
        set: fn(&mut T, &Value) -> serde_json::Result<()>,
    },
    /// The field type implements [`CustomScalar`](crate::CustomScalar).
    Custom {
        scalar: &'static str,
        set: fn(&mut T, &Value) -> std::result::Result<(), DecodeError>,
    },
    /// The field is itself [`Patchable`]; a mapping is merged recursively.
    Nested {
        apply: fn(&mut T, &PatchRequest) -> Result<()>,
    },
}

impl<T> FieldDescriptor<T> {
    /// Run the field's custom decoder, if it has one.
    ///
    /// Returns `None` for plain and nested fields so the caller falls back to
    /// generic handling.
    pub fn try_custom_decode(
        &self,
        target: &mut T,
        raw: &Value,
    ) -> Option<std::result::Result<(), DecodeError>> {
        match self.kind {
            FieldKind::Custom { set, .. } => Some(set(target, raw)),
            FieldKind::Plain { .. } | FieldKind::Nested { .. } => None,
        }
    }

    /// Assign `raw` to this field of `target`.
    pub fn apply(&self, target: &mut T, raw: &Value) -> Result<()> {
        if let Some(decoded) = self.try_custom_decode(target, raw) {
            return decoded.map_err(|e| e.into_patch_error(self.wire_name, self.expected()));
        }
        match self.kind {
            FieldKind::Plain { expected, set } => set(target, raw).map_err(|e| {
                debug!(field = self.wire_name, error = %e, "coercion failed");
                PatchError::type_mismatch(self.wire_name, expected)
            }),
            FieldKind::Nested { apply } => {
                let Value::Object(changes) = raw else {
                    return Err(PatchError::type_mismatch(self.wire_name, "object"));
                };
                apply(target, changes).map_err(|e| e.nested_under(self.wire_name))
            },
            // decoded above
            FieldKind::Custom { .. } => Ok(()),
        }
    }

    /// Type name reported when a value does not fit this field.
    #[must_use]
    pub fn expected(&self) -> &'static str {
        match self.kind {
            FieldKind::Plain { expected, .. } => expected,
            FieldKind::Custom { scalar, .. } => scalar,
            FieldKind::Nested { .. } => "object",
        }
    }
}

/// Merge `changes` onto `target`.
///
/// Only fields named in `changes` are written. Every key is resolved before
/// any value is decoded, and decoding runs against a staged copy, so on error
/// `target` is left exactly as it was.
pub fn apply_patch<T: Patchable>(changes: &PatchRequest, target: &mut T) -> Result<()> {
    let mut resolved = Vec::with_capacity(changes.len());
    for (name, raw) in changes {
        let field = T::field(name).ok_or_else(|| PatchError::UnknownField(name.clone()))?;
        resolved.push((field, raw));
    }

    if resolved.is_empty() {
        return Ok(());
    }

    let mut staged = target.clone();
    for (field, raw) in resolved {
        field.apply(&mut staged, raw)?;
    }
    *target = staged;
    Ok(())
}
