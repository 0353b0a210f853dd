//! Path Guard - Claude Code file-edit security hook entry point.

use path_guard::decision::Decision;
use path_guard::input::InputError;
use path_guard::output::format_response;

use std::io::{self, Read};
use std::process::ExitCode;

use thiserror::Error;

/// Anything that can go wrong before a decision exists.
///
/// Every variant maps to allow: this hook fails open, preferring a
/// missed block over breaking the caller's tool pipeline.
#[derive(Debug, Error)]
enum GuardError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),

    #[error(transparent)]
    Input(#[from] InputError),
}

fn run() -> Result<Decision, GuardError> {
    let mut payload = String::new();
    io::stdin().read_to_string(&mut payload)?;
    Ok(path_guard::evaluate(&payload)?)
}

fn main() -> ExitCode {
    // Fail-open: any error collapses to allow, with no diagnostic.
    let decision = run().unwrap_or_else(|_| Decision::allow());

    match &decision {
        Decision::Allow => ExitCode::SUCCESS,
        Decision::Block(_) => {
            if let Some(msg) = format_response(&decision) {
                println!("{msg}");
            }
            ExitCode::from(2)
        }
    }
}
