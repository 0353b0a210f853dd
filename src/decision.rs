//! Decision types for hook responses.

/// The result of checking a proposed file edit.
#[derive(Debug, Clone)]
pub enum Decision {
    /// Allow the edit to proceed.
    Allow,
    /// Block the edit with a reason.
    Block(BlockInfo),
}

/// Information about why an edit was blocked.
#[derive(Debug, Clone)]
pub struct BlockInfo {
    /// The denylist that triggered the block.
    pub rule: String,
    /// Human-readable reason, shown to the caller verbatim.
    pub reason: String,
}

impl BlockInfo {
    pub fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

impl Decision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Decision::Allow
    }

    /// Create a block decision.
    pub fn block(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Block(BlockInfo::new(rule, reason))
    }

    /// Check if this is a block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// Get the block info if blocked.
    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow() {
        let d = Decision::allow();
        assert!(!d.is_blocked());
        assert!(d.block_info().is_none());
    }

    #[test]
    fn test_block() {
        let d = Decision::block("protected_file", "Cannot edit protected file: .env");
        assert!(d.is_blocked());
        let info = d.block_info().unwrap();
        assert_eq!(info.rule, "protected_file");
        assert_eq!(info.reason, "Cannot edit protected file: .env");
    }
}
