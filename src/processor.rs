//! Scaffold orchestration.
//! Resolves the target folder, renders the project and writes it under the
//! overwrite-protection policy.

use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::error::{Error, Result};
use crate::project::{ProjectContext, Variant};
use crate::prompt::Prompter;
use crate::renderer::{render_project, TemplateFile, TemplateRenderer};
use crate::storage::Storage;
use crate::workspace::{resolve_target, WorkspaceProvider};

/// What happened to each file of a finished scaffold.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub root: PathBuf,
    pub project_name: String,
    pub written: Vec<PathBuf>,
    /// Protected files the user chose to keep.
    pub skipped: Vec<PathBuf>,
    /// Directories and files that could not be created.
    pub failed: Vec<PathBuf>,
}

impl Summary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Terminal state of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No candidate folder existed; nothing was written.
    NoWorkspace,
    /// The folder selection was cancelled; nothing was written.
    Cancelled,
    /// The chosen folder could not be turned into a project; nothing was written.
    InvalidTarget,
    Done(Summary),
}

/// Result of a single file write decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Written,
    Skipped,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileAction::Written => write!(f, "Written"),
            FileAction::Skipped => write!(f, "Skipped"),
        }
    }
}

/// Main orchestrator. Holds only borrowed collaborators, so concurrent
/// scaffolds share nothing but the filesystem.
pub struct Scaffolder<'a> {
    engine: &'a dyn TemplateRenderer,
    prompt: &'a dyn Prompter,
    workspace: &'a dyn WorkspaceProvider,
    storage: &'a dyn Storage,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        prompt: &'a dyn Prompter,
        workspace: &'a dyn WorkspaceProvider,
        storage: &'a dyn Storage,
    ) -> Self {
        Self {
            engine,
            prompt,
            workspace,
            storage,
        }
    }

    /// Generates the `variant` project in a folder chosen through the workspace provider.
    ///
    /// Missing workspaces, cancelled selections, unusable folders, declined overwrites
    /// and storage failures are handled here and reflected in the returned [`Outcome`].
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if an embedded template fails to render
    pub fn scaffold(&self, variant: Variant) -> Result<Outcome> {
        let root = match resolve_target(self.workspace, self.prompt) {
            Ok(root) => root,
            Err(Error::SelectionCancelled) => {
                debug!("Folder selection cancelled");
                return Ok(Outcome::Cancelled);
            }
            Err(Error::NoWorkspaceError) => {
                self.prompt.report_error(&Error::NoWorkspaceError.to_string());
                return Ok(Outcome::NoWorkspace);
            }
            Err(e) => {
                error!("{}", e);
                self.prompt.report_error(&e.to_string());
                return Ok(Outcome::InvalidTarget);
            }
        };

        let project = match ProjectContext::new(&root, variant) {
            Ok(project) => project,
            Err(e) => {
                error!("{}", e);
                self.prompt.report_error(&e.to_string());
                return Ok(Outcome::InvalidTarget);
            }
        };
        debug!(
            "Scaffolding {} project '{}' in {}",
            variant,
            project.project_name(),
            root.display()
        );
        let rendered = render_project(self.engine, &project)?;

        let mut summary = Summary {
            root: root.clone(),
            project_name: project.project_name().to_string(),
            ..Summary::default()
        };

        for dir in &rendered.directories {
            let target = root.join(dir);
            debug!("Creating directory: {}", target.display());
            if let Err(e) = self.storage.create_dir_all(&target) {
                error!("Failed to create '{}': {}", target.display(), e);
                summary.failed.push(target);
            }
        }

        for file in &rendered.files {
            let target = root.join(&file.relative_path);
            match self.write_file(&target, file) {
                Ok(FileAction::Written) => summary.written.push(target),
                Ok(FileAction::Skipped) => summary.skipped.push(target),
                Err(e) => {
                    error!("Failed to write '{}': {}", target.display(), e);
                    summary.failed.push(target);
                }
            }
        }

        if summary.has_failures() {
            self.prompt.report_error(&format!(
                "{} of the generated files could not be written, run with --verbose for details",
                summary.failed.len()
            ));
        }

        Ok(Outcome::Done(summary))
    }

    /// Writes one rendered file, asking before replacing an existing protected file.
    fn write_file(&self, target: &Path, file: &TemplateFile) -> Result<FileAction> {
        if file.protected && self.storage.exists(target) {
            let message = format!(
                "{} already exists. Do you want to override?",
                target.display()
            );
            if self.prompt.confirm(&message)? != Some(true) {
                let declined = Error::WriteDeclined {
                    path: target.to_path_buf(),
                };
                info!("{}", declined);
                return Ok(FileAction::Skipped);
            }
        }

        debug!("Writing file: {}", target.display());
        self.storage.write(target, &file.content)?;
        Ok(FileAction::Written)
    }
}
