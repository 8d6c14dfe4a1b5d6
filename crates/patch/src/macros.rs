/// Declare the patchable fields of an entity type.
///
/// Each entry maps a wire name to a struct field and its type. Plain entries
/// are coerced with `serde` and may name the type clients see with a trailing
/// `as "Int"`, used in type-mismatch errors (the Rust type otherwise); `#[scalar]` entries go through the type's
/// [`CustomScalar`](crate::CustomScalar) decoder; `#[nested]` entries must
/// themselves be [`Patchable`](crate::Patchable) and are merged recursively.
///
/// ```ignore
/// vidgraph_patch::patchable! {
///     User {
///         "name" => name: String,
///         "age" => age: Option<i32> as "Int",
///         #[nested] "profile" => profile: Profile,
///         #[scalar] "createdAt" => created_at: Timestamp,
///     }
/// }
/// ```
///
/// Fields left out of the table are not patchable; naming one in a request
/// is an unknown-field error.
#[macro_export]
macro_rules! patchable {
    (@expected $fty:ty) => {
        stringify!($fty)
    };
    (@expected $fty:ty, $expected:literal) => {
        $expected
    };
    (@field [] [$($expected:literal)?] $ty:ty, $wire:literal, $field:ident, $fty:ty) => {
        $crate::FieldDescriptor {
            wire_name: $wire,
            kind: $crate::FieldKind::Plain {
                expected: $crate::patchable!(@expected $fty $(, $expected)?),
                set: |target: &mut $ty, raw: &$crate::__private::Value| {
                    target.$field = $crate::__private::serde_json::from_value::<$fty>(raw.clone())?;
                    Ok(())
                },
            },
        }
    };
    (@field [scalar] [] $ty:ty, $wire:literal, $field:ident, $fty:ty) => {
        $crate::FieldDescriptor {
            wire_name: $wire,
            kind: $crate::FieldKind::Custom {
                scalar: <$fty as $crate::CustomScalar>::NAME,
                set: |target: &mut $ty, raw: &$crate::__private::Value| {
                    target.$field = <$fty as $crate::CustomScalar>::decode(raw)?;
                    Ok(())
                },
            },
        }
    };
    (@field [nested] [] $ty:ty, $wire:literal, $field:ident, $fty:ty) => {
        $crate::FieldDescriptor {
            wire_name: $wire,
            kind: $crate::FieldKind::Nested {
                apply: |target: &mut $ty, changes: &$crate::PatchRequest| {
                    $crate::apply_patch::<$fty>(changes, &mut target.$field)
                },
            },
        }
    };
    ($ty:ty {
        $( $(#[$kind:ident])? $wire:literal => $field:ident : $fty:ty $(as $expected:literal)? ),* $(,)?
    }) => {
        impl $crate::Patchable for $ty {
            fn fields() -> &'static [$crate::FieldDescriptor<Self>] {
                const FIELDS: &[$crate::FieldDescriptor<$ty>] = &[
                    $( $crate::patchable!(@field [$($kind)?] [$($expected)?] $ty, $wire, $field, $fty) ),*
                ];
                FIELDS
            }
        }
    };
}
