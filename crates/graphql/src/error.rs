//! Error mapping from manager and patch errors to GraphQL errors.
//!
//! Every error keeps its display message and gains an `extensions.code`
//! clients can branch on.

use {
    async_graphql::ErrorExtensions,
    serde_json::Value,
    vidgraph_patch::{PatchError, PatchRequest, value_kind},
    vidgraph_service_traits::{ServiceError, ServiceResult},
};

use crate::scalars::Json;

/// Machine-readable code for a service error.
#[must_use]
pub fn error_code(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::NotFound { .. } => "NOT_FOUND",
        ServiceError::Validation { .. } => "VALIDATION",
        ServiceError::Conflict { .. } => "CONFLICT",
        ServiceError::Patch(PatchError::UnknownField(_)) => "UNKNOWN_FIELD",
        ServiceError::Patch(PatchError::TypeMismatch { .. }) => "TYPE_MISMATCH",
        ServiceError::Patch(PatchError::DecodeFailed { .. }) => "DECODE_FAILED",
        ServiceError::Message { .. } => "INTERNAL",
    }
}

/// Convert a service error into an `async_graphql::Error`.
pub fn gql_err(err: ServiceError) -> async_graphql::Error {
    let code = error_code(&err);
    let field = match &err {
        ServiceError::Patch(patch) => Some(patch.field().to_string()),
        _ => None,
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| {
        ext.set("code", code);
        if let Some(field) = field {
            ext.set("field", field);
        }
    })
}

/// Convert a `ServiceResult` into the GraphQL output type.
pub fn from_service<T, U: From<T>>(result: ServiceResult<T>) -> async_graphql::Result<U> {
    result.map(U::from).map_err(gql_err)
}

/// Convert a list result element-wise.
pub fn from_service_list<T, U: From<T>>(
    result: ServiceResult<Vec<T>>,
) -> async_graphql::Result<Vec<U>> {
    result
        .map(|items| items.into_iter().map(U::from).collect())
        .map_err(gql_err)
}

/// Unwrap a `changes` argument into a patch request.
///
/// Anything other than an object is a type mismatch on `changes` itself.
pub fn patch_request(changes: Json) -> async_graphql::Result<PatchRequest> {
    match changes.0 {
        Value::Object(map) => Ok(map),
        other => {
            let found = value_kind(&other);
            Err(
                gql_err(PatchError::type_mismatch("changes", "object").into())
                    .extend_with(|_, ext| ext.set("found", found)),
            )
        },
    }
}
