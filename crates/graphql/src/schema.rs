//! Schema construction and type alias.

use std::sync::Arc;

use {
    async_graphql::{EmptySubscription, Schema},
    vidgraph_service_traits::Services,
};

use crate::{context::GqlContext, mutations::MutationRoot, queries::QueryRoot};

/// The full vidgraph GraphQL schema type.
pub type VidgraphSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Execution limits applied to the schema.
#[derive(Debug, Clone)]
pub struct SchemaOptions {
    pub introspection: bool,
    pub max_depth: Option<usize>,
    pub max_complexity: Option<usize>,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            introspection: true,
            max_depth: None,
            max_complexity: None,
        }
    }
}

/// Build the schema with default options.
pub fn build_schema(services: Arc<Services>) -> VidgraphSchema {
    build_schema_with(services, &SchemaOptions::default())
}

/// Build the schema over a services bundle.
pub fn build_schema_with(services: Arc<Services>, options: &SchemaOptions) -> VidgraphSchema {
    let ctx = Arc::new(GqlContext { services });

    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(ctx);
    if let Some(depth) = options.max_depth {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = options.max_complexity {
        builder = builder.limit_complexity(complexity);
    }
    if !options.introspection {
        builder = builder.disable_introspection();
    }
    builder.finish()
}
