//! Configuration loading and validation.
//!
//! Config files: `vidgraph.toml`, `vidgraph.yaml`, `vidgraph.yml` or
//! `vidgraph.json`. Searched in `./` then `~/.config/vidgraph/`.

pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    loader::{config_dir, discover_and_load, find_config_file, load_config},
    schema::{GraphqlConfig, StoreConfig, VidgraphConfig},
    validate::{Diagnostic, Severity, ValidationResult, validate_file, validate_str},
};
