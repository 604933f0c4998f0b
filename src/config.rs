//! Workspace file handling for cpp-builder.
//! A workspace file lists the folders of a multi-root workspace; each folder
//! becomes a candidate scaffold target.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One `folders` entry of a workspace file. Display names are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WorkspaceFolder {
    pub path: String,
}

/// Parsed workspace file. Unknown keys such as `settings` are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct WorkspaceFile {
    #[serde(default)]
    pub folders: Vec<WorkspaceFolder>,
}

/// Parses workspace file content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_workspace_file(content: &str) -> Result<WorkspaceFile> {
    match serde_json::from_str(content) {
        Ok(workspace) => Ok(workspace),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid workspace file format: {}", e))),
    }
}

/// Loads a workspace file and returns its folders as paths, resolving
/// relative entries against the directory holding the file.
///
/// # Arguments
/// * `workspace_path` - Path to the workspace file
///
/// # Returns
/// * `Result<Vec<String>>` - Folder paths in declaration order
///
/// # Errors
/// * `Error::ConfigError` if the file is missing or malformed
pub fn load_workspace_folders<P: AsRef<Path>>(workspace_path: P) -> Result<Vec<String>> {
    let workspace_path = workspace_path.as_ref();
    if !workspace_path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid workspace path: {}",
            workspace_path.display()
        )));
    }

    debug!("Loading workspace from {}", workspace_path.display());
    let content = std::fs::read_to_string(workspace_path)?;
    let workspace = parse_workspace_file(&content)?;

    let base = workspace_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok(workspace
        .folders
        .into_iter()
        .map(|folder| {
            let path = PathBuf::from(&folder.path);
            if path.is_absolute() {
                folder.path
            } else {
                base.join(path).display().to_string()
            }
        })
        .collect())
}
