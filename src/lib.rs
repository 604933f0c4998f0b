//! cpp-builder generates starter files for CMake-based C++ projects:
//! VS Code build, debug and IntelliSense configuration, a hello-world source,
//! a `.clang-format` style file and optionally a GoogleTest harness.

/// Command-line interface module
pub mod cli;

/// Workspace file loading (JSON or YAML)
pub mod config;

/// Generated file and directory names
pub mod constants;

/// Error types and handling
pub mod error;

pub mod logger;

/// Scaffold orchestration and the overwrite-protection policy
pub mod processor;

/// Project name derivation and variants
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Embedded templates and their rendering
pub mod renderer;

pub mod storage;

/// Candidate folder discovery and target selection
pub mod workspace;
