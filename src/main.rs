//! model-deletedir: structure-checked removal of model directories
//!
//! Thin entry point: parse arguments, run the deleter once.

use std::path::Path;
use std::process::ExitCode;

use model_deletedir::cli::CliArgs;
use model_deletedir::deleter::{Deleter, Outcome};
use model_deletedir::error::DeleteDirError;
use model_deletedir::target::TargetResolver;
use model_deletedir::tree::RealFileSystem;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("model-deletedir: {}", e);
            if e.is_usage_error() {
                eprintln!("Usage: model-deletedir [OPTIONS] <PATH>");
            }
            e.exit_code().into()
        }
    }
}

/// Main execution logic
fn run() -> Result<(), DeleteDirError> {
    let args = CliArgs::parse_args();
    let path = args.path.as_deref().ok_or(DeleteDirError::MissingArgument)?;

    let cwd = std::env::current_dir()?;
    let Some(target) = TargetResolver::resolve(&cwd, path) else {
        // An empty argument cannot name an existing directory
        report(path, &Outcome::Missing, args.verbose);
        return Ok(());
    };

    let outcome = Deleter::new(&RealFileSystem)
        .dry_run(args.dry_run)
        .run(&target)?;

    report(path, &outcome, args.verbose);
    Ok(())
}

/// Print the outcome; only dry runs report without --verbose
fn report(path: &Path, outcome: &Outcome, verbose: bool) {
    match outcome {
        Outcome::WouldRemove(_) => println!("would remove: {}", path.display()),
        _ if !verbose => {}
        Outcome::Removed(_) => println!("removed: {}", path.display()),
        Outcome::Missing => {
            eprintln!(
                "model-deletedir: '{}' does not exist, nothing to remove",
                path.display()
            )
        }
        Outcome::Refused { kind, reason } => eprintln!(
            "model-deletedir: not removing '{}': not a valid {}: {}",
            path.display(),
            kind,
            reason
        ),
    }
}
