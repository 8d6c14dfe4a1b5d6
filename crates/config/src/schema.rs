use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VidgraphConfig {
    pub graphql: GraphqlConfig,
    pub store: StoreConfig,
}

/// Limits applied when the GraphQL schema is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphqlConfig {
    /// Serve `__schema` / `__type` introspection. Defaults to true.
    pub introspection: bool,
    /// Maximum selection depth of a query. Unlimited when unset.
    pub max_depth: Option<usize>,
    /// Maximum query complexity. Unlimited when unset.
    pub max_complexity: Option<usize>,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            introspection: true,
            max_depth: None,
            max_complexity: None,
        }
    }
}

/// In-memory store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file with initial users and videos.
    pub seed_path: Option<PathBuf>,
}
