//! cpp-builder's entry point.
//! Parses arguments, wires the terminal collaborators into the scaffolder
//! and reports what was written.

use cpp_builder::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{FileAction, Outcome, Scaffolder},
    project::Variant,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    storage::FileSystemStorage,
    workspace::Workspace,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => default_error_handler(err),
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects candidate folders from arguments and the workspace file
/// 2. Resolves the target folder, prompting when there are several
/// 3. Renders the selected variant
/// 4. Writes files, confirming before replacing protected ones
///
/// # Returns
/// * `Result<bool>` - `false` when there was no usable folder to scaffold into
fn run(args: Args) -> Result<bool> {
    let engine = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();
    let storage = FileSystemStorage::new();
    let workspace = Workspace::from_sources(args.folders, args.workspace)?;

    let scaffolder = Scaffolder::new(&engine, &prompt, &workspace, &storage);

    match scaffolder.scaffold(Variant::from_flag(args.with_tests))? {
        // Already reported to the user by the scaffolder.
        Outcome::NoWorkspace | Outcome::InvalidTarget => Ok(false),
        Outcome::Cancelled => Ok(true),
        Outcome::Done(summary) => {
            for path in &summary.written {
                println!("{}: '{}'", FileAction::Written, path.display());
            }
            for path in &summary.skipped {
                println!("{}: '{}'", FileAction::Skipped, path.display());
            }
            println!(
                "Project '{}' generated in {}.",
                summary.project_name,
                summary.root.display()
            );
            Ok(true)
        }
    }
}
