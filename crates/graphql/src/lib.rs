//! GraphQL API for vidgraph.
//!
//! Exposes queries and mutations over users and videos. Resolvers call the
//! entity managers in the [`Services`](vidgraph_service_traits::Services)
//! bundle directly; updates go through the generic patch path in
//! [`vidgraph_service_traits::dispatch`].
//!
//! This crate only defines the schema, types and resolvers. Serving it over
//! HTTP is left to the embedding application.

pub mod context;
pub mod error;
pub mod mutations;
pub mod queries;
pub mod scalars;
pub mod schema;
pub mod types;

pub use schema::{SchemaOptions, VidgraphSchema, build_schema, build_schema_with};

/// Borrow the service bundle from a resolver context.
#[macro_export]
macro_rules! services {
    ($ctx:expr) => {
        &$ctx
            .data::<std::sync::Arc<$crate::context::GqlContext>>()?
            .services
    };
}
