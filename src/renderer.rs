//! Template rendering for cpp-builder.
//! Turns a [`ProjectContext`] into the ordered list of files to write, using
//! payloads embedded at compile time and rendered with MiniJinja.
use std::path::PathBuf;

use minijinja::Environment;

use crate::constants::{
    ASSETS_DIR, BUILD_FILE, INCLUDE_DIR, LAUNCH_FILE, MAIN_SOURCE_FILE, MAIN_TEST_FILE,
    PROPERTIES_FILE, README_FILE, SRC_DIR, STYLE_FILE, TASKS_FILE, TESTS_DIR, VSCODE_DIR,
};
use crate::error::Result;
use crate::project::{ProjectContext, TemplateContext, Variant};

const PROPERTIES_TEMPLATE: &str = include_str!("templates/c_cpp_properties.json.j2");
const TASKS_TEMPLATE: &str = include_str!("templates/tasks.json.j2");
const LAUNCH_TEMPLATE: &str = include_str!("templates/launch.json.j2");
const MAIN_SOURCE_TEMPLATE: &str = include_str!("templates/main.cpp.j2");
const BUILD_TEMPLATE: &str = include_str!("templates/CMakeLists.txt.j2");
const STYLE_TEMPLATE: &str = include_str!("templates/clang-format.j2");
const TEST_BUILD_TEMPLATE: &str = include_str!("templates/tests_CMakeLists.txt.j2");
const MAIN_TEST_TEMPLATE: &str = include_str!("templates/main_test.cpp.j2");
const INCLUDE_README_TEMPLATE: &str = include_str!("templates/include_README.md.j2");
const ASSETS_README_TEMPLATE: &str = include_str!("templates/assets_README.md.j2");

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Values available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &TemplateContext<'_>) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that keeps trailing newlines and strips block-tag lines.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or fails to render
    fn render(&self, template: &str, context: &TemplateContext<'_>) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

/// A rendered file, ready to be written under the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    pub content: String,
    /// Whether the file may carry user edits and needs confirmation before overwrite.
    pub protected: bool,
}

/// Directories and files for one project, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProject {
    pub directories: Vec<PathBuf>,
    pub files: Vec<TemplateFile>,
}

struct FileEntry {
    path: PathBuf,
    template: &'static str,
    protected: bool,
}

impl FileEntry {
    fn new(path: PathBuf, template: &'static str, protected: bool) -> Self {
        Self {
            path,
            template,
            protected,
        }
    }
}

fn vscode(file: &str) -> PathBuf {
    PathBuf::from(VSCODE_DIR).join(file)
}

fn file_entries(variant: Variant) -> Vec<FileEntry> {
    match variant {
        Variant::Basic => vec![
            FileEntry::new(vscode(PROPERTIES_FILE), PROPERTIES_TEMPLATE, false),
            FileEntry::new(vscode(LAUNCH_FILE), LAUNCH_TEMPLATE, false),
            FileEntry::new(vscode(TASKS_FILE), TASKS_TEMPLATE, false),
            FileEntry::new(
                PathBuf::from(MAIN_SOURCE_FILE),
                MAIN_SOURCE_TEMPLATE,
                true,
            ),
            FileEntry::new(PathBuf::from(BUILD_FILE), BUILD_TEMPLATE, true),
            FileEntry::new(PathBuf::from(STYLE_FILE), STYLE_TEMPLATE, true),
        ],
        Variant::WithTests => vec![
            FileEntry::new(vscode(PROPERTIES_FILE), PROPERTIES_TEMPLATE, false),
            FileEntry::new(vscode(TASKS_FILE), TASKS_TEMPLATE, false),
            FileEntry::new(vscode(LAUNCH_FILE), LAUNCH_TEMPLATE, false),
            FileEntry::new(
                PathBuf::from(TESTS_DIR).join(BUILD_FILE),
                TEST_BUILD_TEMPLATE,
                false,
            ),
            FileEntry::new(
                PathBuf::from(TESTS_DIR).join(MAIN_TEST_FILE),
                MAIN_TEST_TEMPLATE,
                false,
            ),
            FileEntry::new(
                PathBuf::from(INCLUDE_DIR).join(README_FILE),
                INCLUDE_README_TEMPLATE,
                false,
            ),
            FileEntry::new(
                PathBuf::from(ASSETS_DIR).join(README_FILE),
                ASSETS_README_TEMPLATE,
                false,
            ),
            FileEntry::new(
                PathBuf::from(SRC_DIR).join(MAIN_SOURCE_FILE),
                MAIN_SOURCE_TEMPLATE,
                true,
            ),
            FileEntry::new(PathBuf::from(BUILD_FILE), BUILD_TEMPLATE, true),
            FileEntry::new(PathBuf::from(STYLE_FILE), STYLE_TEMPLATE, true),
        ],
    }
}

/// Renders every directory and file for the project.
///
/// Pure: identical contexts produce identical output, and nothing touches the filesystem.
///
/// # Errors
/// * `Error::MinijinjaError` if an embedded template fails to render
pub fn render_project(
    engine: &dyn TemplateRenderer,
    project: &ProjectContext,
) -> Result<RenderedProject> {
    let variant = project.variant();
    let context = project.template_context();

    let directories = variant.directories().iter().map(PathBuf::from).collect();
    let files = file_entries(variant)
        .into_iter()
        .map(|entry| {
            Ok(TemplateFile {
                content: engine.render(entry.template, &context)?,
                relative_path: entry.path,
                protected: entry.protected,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RenderedProject { directories, files })
}
