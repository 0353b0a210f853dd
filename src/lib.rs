//! Path Guard - Claude Code file-edit security hook.
//!
//! A PreToolUse hook that blocks edits to protected files (`.env`
//! variants, credential stores, private keys). Reads one hook payload
//! from stdin and reports the decision via exit code: 0 to allow,
//! 2 to block.
//!
//! The hook is fail-open: malformed input or any internal error
//! results in an allow, never a crash or a spurious block.

pub mod decision;
pub mod input;
pub mod output;
pub mod rules;

pub use decision::Decision;
pub use input::{HookInput, InputError};
pub use output::format_response;
pub use rules::check_path;

/// Evaluate one raw hook payload and return the decision.
///
/// This is the full guard pipeline minus process I/O: parse the JSON,
/// extract the target path, check it against the denylists. An `Err`
/// here means the payload was unparsable; callers enforcing the
/// fail-open contract map it to [`Decision::Allow`].
pub fn evaluate(payload: &str) -> Result<Decision, InputError> {
    let input = HookInput::parse(payload)?;
    Ok(check_path(input.file_path()))
}
