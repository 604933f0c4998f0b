//! Command-line interface implementation for cpp-builder.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for cpp-builder.
#[derive(Parser, Debug)]
#[command(author, version, about = "cpp-builder: CMake project scaffolding with VS Code configuration", long_about = None)]
pub struct Args {
    /// Folders the project may be generated in; a picker is shown when there are several
    #[arg(value_name = "FOLDER")]
    pub folders: Vec<String>,

    /// Workspace file whose folders are offered as additional targets
    #[arg(short, long, value_name = "FILE")]
    pub workspace: Option<PathBuf>,

    /// Generate the src/include/assets layout with a GoogleTest target
    #[arg(short = 't', long)]
    pub with_tests: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
