//! Partial-update engine for typed entities.
//!
//! A client mutation arrives as a map of wire field names to raw JSON values.
//! [`apply_patch`] merges that map onto an existing entity, touching only the
//! named fields. Each entity type declares its patchable fields once with the
//! [`patchable!`] macro, which builds a static table of [`FieldDescriptor`]s
//! mapping wire names to typed setters. No runtime reflection is involved.
//!
//! Field types that need more than structural coercion (timestamps carried
//! as strings, for instance) implement [`CustomScalar`] and are marked
//! `#[scalar]` in the table.

pub mod engine;
pub mod error;
mod macros;
pub mod scalar;

pub use {
    engine::{FieldDescriptor, FieldKind, PatchRequest, Patchable, apply_patch},
    error::{PatchError, Result},
    scalar::{CustomScalar, DecodeError, value_kind},
};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::{self, Value};
}
