//! Candidate directory discovery and target selection.

use std::path::PathBuf;

use log::debug;

use crate::config::load_workspace_folders;
use crate::error::{Error, Result};
use crate::project::normalize_path;
use crate::prompt::Prompter;

/// Source of directories the user may scaffold into.
pub trait WorkspaceProvider {
    fn candidate_directories(&self) -> Result<Vec<String>>;
}

/// Fixed list of folders, gathered from the command line and an optional workspace file.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    folders: Vec<String>,
}

impl Workspace {
    pub fn new(folders: Vec<String>) -> Self {
        Self { folders }
    }

    /// Command-line folders first, then the workspace file's folders. Every folder
    /// is made absolute, and folders resolving to the same path are listed once.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the workspace file is missing or malformed
    /// * `Error::IoError` if a relative folder needs the unreadable working directory
    pub fn from_sources(folders: Vec<String>, workspace_file: Option<PathBuf>) -> Result<Self> {
        let mut all = folders;
        if let Some(path) = workspace_file {
            all.extend(load_workspace_folders(path)?);
        }

        let mut unique: Vec<PathBuf> = Vec::with_capacity(all.len());
        for folder in &all {
            let path = normalize_path(folder)?;
            if !unique.contains(&path) {
                unique.push(path);
            }
        }
        Ok(Self::new(
            unique
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
        ))
    }
}

impl WorkspaceProvider for Workspace {
    fn candidate_directories(&self) -> Result<Vec<String>> {
        Ok(self.folders.clone())
    }
}

/// Picks the directory to scaffold into: the single candidate, or the one the user selects.
///
/// # Errors
/// * `Error::NoWorkspaceError` if there are no candidates
/// * `Error::SelectionCancelled` if the user dismisses the picker
/// * `Error::PromptError` if the selection prompt fails
/// * `Error::IoError` if a relative candidate needs the unreadable working directory
pub fn resolve_target(provider: &dyn WorkspaceProvider, prompt: &dyn Prompter) -> Result<PathBuf> {
    let candidates = provider.candidate_directories()?;

    let chosen = match candidates.len() {
        0 => return Err(Error::NoWorkspaceError),
        1 => &candidates[0],
        _ => prompt
            .select("Select the folder to scaffold", &candidates)?
            .and_then(|index| candidates.get(index))
            .ok_or(Error::SelectionCancelled)?,
    };

    debug!("Resolved target folder '{}'", chosen);
    normalize_path(chosen)
}
