//! Configuration validation.
//!
//! Detects unknown or misspelled keys and values that would make the schema
//! unusable, and reports them as diagnostics instead of failing hard.

use std::{collections::HashMap, path::Path};

use serde_json::Value;

use crate::{
    loader::{parse_config, parse_config_value},
    schema::VidgraphConfig,
};

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Category: "syntax", "unknown-field", "value"
    pub category: &'static str,
    /// Dotted path, e.g. "graphql.max_dept"
    pub path: String,
    pub message: String,
}

/// Result of validating a configuration file.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
    pub config_path: Option<std::path::PathBuf>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Expected shape of the config, mirroring `schema.rs`.
enum KnownKeys {
    Struct(HashMap<&'static str, KnownKeys>),
    Leaf,
}

fn build_schema_map() -> KnownKeys {
    use KnownKeys::{Leaf, Struct};

    Struct(HashMap::from([
        (
            "graphql",
            Struct(HashMap::from([
                ("introspection", Leaf),
                ("max_depth", Leaf),
                ("max_complexity", Leaf),
            ])),
        ),
        ("store", Struct(HashMap::from([("seed_path", Leaf)]))),
    ]))
}

fn check_unknown(value: &Value, known: &KnownKeys, prefix: &str, out: &mut Vec<Diagnostic>) {
    let (Value::Object(map), KnownKeys::Struct(fields)) = (value, known) else {
        return;
    };
    for (key, child) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match fields.get(key.as_str()) {
            Some(expected) => check_unknown(child, expected, &path, out),
            None => out.push(Diagnostic {
                severity: Severity::Warning,
                category: "unknown-field",
                path,
                message: format!("unknown field `{key}`"),
            }),
        }
    }
}

fn check_values(config: &VidgraphConfig, out: &mut Vec<Diagnostic>) {
    let limits = [
        ("graphql.max_depth", config.graphql.max_depth),
        ("graphql.max_complexity", config.graphql.max_complexity),
    ];
    for (path, limit) in limits {
        if limit == Some(0) {
            out.push(Diagnostic {
                severity: Severity::Error,
                category: "value",
                path: path.into(),
                message: "a limit of 0 rejects every query".into(),
            });
        }
    }
    if let Some(seed) = &config.store.seed_path
        && !seed.exists()
    {
        out.push(Diagnostic {
            severity: Severity::Warning,
            category: "value",
            path: "store.seed_path".into(),
            message: format!("seed file {} does not exist", seed.display()),
        });
    }
}

/// Validate raw config text as if it had been read from `path`.
#[must_use]
pub fn validate_str(raw: &str, path: &Path) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    match parse_config_value(raw, path) {
        Ok(value) => check_unknown(&value, &build_schema_map(), "", &mut diagnostics),
        Err(e) => {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                category: "syntax",
                path: String::new(),
                message: e.to_string(),
            });
            return diagnostics;
        },
    }

    match parse_config(raw, path) {
        Ok(config) => check_values(&config, &mut diagnostics),
        Err(e) => diagnostics.push(Diagnostic {
            severity: Severity::Error,
            category: "value",
            path: String::new(),
            message: e.to_string(),
        }),
    }

    diagnostics
}

/// Validate the config file at `path`.
pub fn validate_file(path: &Path) -> ValidationResult {
    let diagnostics = match std::fs::read_to_string(path) {
        Ok(raw) => validate_str(&raw, path),
        Err(e) => vec![Diagnostic {
            severity: Severity::Error,
            category: "syntax",
            path: String::new(),
            message: format!("failed to read {}: {e}", path.display()),
        }],
    };
    ValidationResult {
        diagnostics,
        config_path: Some(path.to_path_buf()),
    }
}
