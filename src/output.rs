//! Response formatting for hook output.

use crate::decision::Decision;

/// Format a decision as the one-line diagnostic for stdout.
///
/// Allow produces no output at all.
pub fn format_response(decision: &Decision) -> Option<String> {
    match decision {
        Decision::Allow => None,
        Decision::Block(info) => Some(format!("BLOCKED: {}", info.reason)),
    }
}
