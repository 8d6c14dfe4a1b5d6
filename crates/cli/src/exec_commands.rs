use std::path::Path;

use {
    anyhow::{Context, Result},
    async_graphql::{Request, Variables},
    tracing::{debug, warn},
    vidgraph_config::VidgraphConfig,
    vidgraph_graphql::{SchemaOptions, VidgraphSchema, build_schema_with},
    vidgraph_store::{InMemoryStore, Seed},
};

fn schema_options(config: &VidgraphConfig) -> SchemaOptions {
    SchemaOptions {
        introspection: config.graphql.introspection,
        max_depth: config.graphql.max_depth,
        max_complexity: config.graphql.max_complexity,
    }
}

async fn build_store(config: &VidgraphConfig) -> Result<InMemoryStore> {
    match &config.store.seed_path {
        Some(path) => {
            debug!(path = %path.display(), "loading seed");
            Ok(InMemoryStore::from_seed(Seed::load(path)?).await?)
        },
        None => Ok(InMemoryStore::new()),
    }
}

async fn build(config: &VidgraphConfig) -> Result<VidgraphSchema> {
    let store = build_store(config).await?;
    Ok(build_schema_with(store.services(), &schema_options(config)))
}

pub fn print_schema(config: &VidgraphConfig) {
    let schema = build_schema_with(InMemoryStore::new().services(), &schema_options(config));
    println!("{}", schema.sdl());
}

fn read_query(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("failed to read query from stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn build_request(source: String, variables: Option<&str>, operation: Option<&str>) -> Result<Request> {
    let mut request = Request::new(source);
    if let Some(raw) = variables {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("--variables is not valid JSON")?;
        anyhow::ensure!(value.is_object(), "--variables must be a JSON object");
        request = request.variables(Variables::from_json(value));
    }
    if let Some(name) = operation {
        request = request.operation_name(name);
    }
    Ok(request)
}

/// Run one document and print the JSON response. Returns `false` when the
/// response carries errors.
pub async fn exec(
    config: &VidgraphConfig,
    query: &Path,
    variables: Option<&str>,
    operation: Option<&str>,
) -> Result<bool> {
    let request = build_request(read_query(query)?, variables, operation)?;
    let schema = build(config).await?;
    let response = schema.execute(request).await;

    let ok = response.errors.is_empty();
    if !ok {
        warn!(errors = response.errors.len(), "document returned errors");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(ok)
}
