pub mod filesystem;

use crate::error::{MatchmeterError, Result};
use crate::types::connection::{Connection, ConnectionInput};
use filesystem::list_json_files;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

pub fn load_connections(path: &Path) -> Result<Vec<Connection>> {
    let connections = load_records::<Connection>(path)?;
    info!(count = connections.len(), path = %path.display(), "loaded connections");
    Ok(connections)
}

pub fn load_inputs(path: &Path) -> Result<Vec<ConnectionInput>> {
    load_records(path)
}

pub fn find_connection<'a>(connections: &'a [Connection], id: &str) -> Result<&'a Connection> {
    connections
        .iter()
        .find(|connection| connection.id == id)
        .ok_or_else(|| MatchmeterError::ConnectionNotFound(id.to_string()))
}

/// Reads one file, or every `*.json` file below a directory.
fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(MatchmeterError::PathNotFound(path.display().to_string()));
    }
    let files: Vec<PathBuf> = if path.is_dir() {
        list_json_files(path)
    } else {
        vec![path.to_path_buf()]
    };

    let mut records = Vec::new();
    for file in &files {
        debug!(file = %file.display(), "reading snapshot");
        let content = std::fs::read_to_string(file)?;
        let parsed: OneOrMany<T> = serde_json::from_str(&content).map_err(|e| {
            MatchmeterError::SnapshotParse(format!("{}: {}", file.display(), e))
        })?;
        match parsed {
            OneOrMany::Many(many) => records.extend(many),
            OneOrMany::One(one) => records.push(one),
        }
    }
    Ok(records)
}
