//! GraphQL request context.

use std::sync::Arc;

use vidgraph_service_traits::Services;

/// Context injected into every GraphQL resolver via `Context::data()`.
pub struct GqlContext {
    /// Entity managers shared by all resolvers.
    pub services: Arc<Services>,
}
