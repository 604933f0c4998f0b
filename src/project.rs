//! Per-invocation project description derived from the chosen directory.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::constants::{
    ASSETS_DIR, DEFAULT_CXX_STANDARD, INCLUDE_DIR, SRC_DIR, TESTS_DIR, VSCODE_DIR,
};
use crate::error::{Error, Result};

/// Shape of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Single `main.cpp` next to the build descriptor.
    Basic,
    /// `src/`, `include/`, `assets/` layout with a GoogleTest target in `tests/`.
    WithTests,
}

impl Variant {
    pub fn from_flag(with_tests: bool) -> Self {
        if with_tests {
            Variant::WithTests
        } else {
            Variant::Basic
        }
    }

    pub fn has_tests(&self) -> bool {
        matches!(self, Variant::WithTests)
    }

    /// Directories created under the project root, in creation order.
    pub fn directories(&self) -> &'static [&'static str] {
        match self {
            Variant::Basic => &[VSCODE_DIR],
            Variant::WithTests => &[VSCODE_DIR, TESTS_DIR, SRC_DIR, INCLUDE_DIR, ASSETS_DIR],
        }
    }

    /// Language standard pinned in the build and style files.
    pub fn cxx_standard(&self) -> u8 {
        match self {
            Variant::Basic | Variant::WithTests => DEFAULT_CXX_STANDARD,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Basic => write!(f, "basic"),
            Variant::WithTests => write!(f, "with tests"),
        }
    }
}

/// Replaces every `-` with `_` so the name is usable as a CMake target.
pub fn sanitize_project_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Strips the extra leading separator of drive-addressed paths (`/c:/work`)
/// when `windows` is set. Other paths are returned untouched.
pub fn strip_drive_prefix(raw: &str, windows: bool) -> &str {
    if !windows {
        return raw;
    }
    let bytes = raw.as_bytes();
    if bytes.len() >= 3
        && bytes[0] == b'/'
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b':'
    {
        &raw[1..]
    } else {
        raw
    }
}

/// Joins a relative `path` onto `base` and folds `.` and `..` components,
/// without touching the filesystem.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Turns a candidate directory string into an absolute filesystem path for the
/// current platform. Relative candidates resolve against the working directory.
///
/// # Errors
/// * `Error::IoError` if the working directory is needed but cannot be read
pub fn normalize_path(raw: &str) -> Result<PathBuf> {
    let path = Path::new(strip_drive_prefix(raw, cfg!(windows)));
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir()?
    };
    Ok(absolutize(path, &base))
}

/// Everything the renderer needs to know about the project being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    root: PathBuf,
    project_name: String,
    variant: Variant,
}

impl ProjectContext {
    /// Derives the project name from the final segment of `root`.
    ///
    /// # Errors
    /// * `Error::InvalidProjectPath` if `root` has no usable final segment
    pub fn new<P: AsRef<Path>>(root: P, variant: Variant) -> Result<Self> {
        let root = root.as_ref();
        let project_name = root
            .file_name()
            .map(|name| sanitize_project_name(&name.to_string_lossy()))
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::InvalidProjectPath {
                path: root.to_path_buf(),
            })?;

        Ok(Self {
            root: root.to_path_buf(),
            project_name,
            variant,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Values exposed to the templates.
    pub fn template_context(&self) -> TemplateContext<'_> {
        TemplateContext {
            project_name: &self.project_name,
            with_tests: self.variant.has_tests(),
            cxx_standard: self.variant.cxx_standard(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    pub project_name: &'a str,
    pub with_tests: bool,
    pub cxx_standard: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_drive_prefix_only_on_windows() {
        assert_eq!(strip_drive_prefix("/c:/work/app", true), "c:/work/app");
        assert_eq!(strip_drive_prefix("/C:/work/app", true), "C:/work/app");
        assert_eq!(strip_drive_prefix("/c:/work/app", false), "/c:/work/app");
    }

    #[test]
    fn test_strip_drive_prefix_keeps_plain_paths() {
        assert_eq!(strip_drive_prefix("/work/app", true), "/work/app");
        assert_eq!(strip_drive_prefix("c:/work", true), "c:/work");
        assert_eq!(strip_drive_prefix("/", true), "/");
        assert_eq!(strip_drive_prefix("", true), "");
    }

    #[test]
    fn test_absolutize_relative_paths() {
        let base = Path::new("/work/my-proj");
        assert_eq!(absolutize(Path::new("."), base), PathBuf::from("/work/my-proj"));
        assert_eq!(absolutize(Path::new("./"), base), PathBuf::from("/work/my-proj"));
        assert_eq!(absolutize(Path::new(".."), base), PathBuf::from("/work"));
        assert_eq!(
            absolutize(Path::new("../other-app"), base),
            PathBuf::from("/work/other-app")
        );
    }

    #[test]
    fn test_absolutize_absolute_paths() {
        let base = Path::new("/ignored");
        assert_eq!(
            absolutize(Path::new("/work/a/./b/../c"), base),
            PathBuf::from("/work/a/c")
        );
        assert_eq!(absolutize(Path::new("/.."), base), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_path_is_absolute() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(normalize_path(".").unwrap(), absolutize(&cwd, Path::new("")));
        assert!(normalize_path("some-app").unwrap().is_absolute());
        assert_eq!(normalize_path("/work/app").unwrap(), PathBuf::from("/work/app"));
    }

    #[test]
    fn test_variant_directories() {
        assert_eq!(Variant::Basic.directories(), &[".vscode"]);
        assert_eq!(
            Variant::WithTests.directories(),
            &[".vscode", "tests", "src", "include", "assets"]
        );
    }
}
