//! Parameter and override files.
//!
//! ```text
//! params.json:    [{ "id": "uuid_1", "name": "WIDTH", "value": "8", "scope": "component" }]
//! overrides.json: { "uuid_1": "16" }
//! ```
//!
//! `name` and `scope` are optional; scope defaults to `component`.

use std::collections::BTreeMap;
use std::path::Path;

use kx_eval::{DocumentResolver, Parameter, ScopeKind};
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Deserialize)]
struct ParameterRecord {
    id: String,
    #[serde(default)]
    name: String,
    value: String,
    #[serde(default)]
    scope: Option<String>,
}

/// Build a document resolver from a parameter file's contents.
pub fn parse_parameters(json: &str, origin: &str) -> Result<DocumentResolver, CliError> {
    let records: Vec<ParameterRecord> = serde_json::from_str(json).map_err(|source| CliError::Json {
        origin: origin.to_owned(),
        source,
    })?;

    let mut document = DocumentResolver::new();
    for record in records {
        let scope = match record.scope.as_deref() {
            None => ScopeKind::default(),
            Some(name) => {
                ScopeKind::from_name(name).ok_or_else(|| CliError::UnknownScope(name.to_owned()))?
            }
        };
        document.insert(scope, Parameter::new(record.id, record.name, record.value));
    }
    Ok(document)
}

/// Parse an override file's contents. Ids come back sorted.
pub fn parse_overrides(json: &str, origin: &str) -> Result<Vec<(String, String)>, CliError> {
    let overrides: BTreeMap<String, String> =
        serde_json::from_str(json).map_err(|source| CliError::Json {
            origin: origin.to_owned(),
            source,
        })?;
    Ok(overrides.into_iter().collect())
}

pub fn load_parameters(path: &Path) -> Result<DocumentResolver, CliError> {
    parse_parameters(&read_file(path)?, &path.display().to_string())
}

pub fn load_overrides(path: &Path) -> Result<Vec<(String, String)>, CliError> {
    parse_overrides(&read_file(path)?, &path.display().to_string())
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })
}
