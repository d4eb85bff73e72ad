// Tue Oct 13 2026 - Alex

use crate::pattern::{Flags, GroupKey};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid pattern {pattern:?}: {reason}")]
    Syntax { pattern: String, reason: String },
    #[error("Cannot use flags ({flags:?}) with a compiled pattern")]
    FlagConflict { flags: Flags },
    #[error("Offset {offset} out of range for text of length {len}")]
    Range { offset: usize, len: usize },
    #[error("No such group: {0}")]
    GroupLookup(GroupKey),
    #[error("Engine failure for pattern {pattern:?}: {reason}")]
    Engine { pattern: String, reason: String },
    #[error("Unknown flag bits: {0:#x}")]
    UnknownFlags(u32),
    #[error("Invalid flag letter: {0:?}")]
    InvalidFlag(char),
    #[error("Invalid engine config: {0}")]
    Config(String),
}

impl PatternError {
    /// True for failures caused by the caller's arguments rather than the
    /// pattern or the engine.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            PatternError::FlagConflict { .. }
                | PatternError::Range { .. }
                | PatternError::GroupLookup(_)
        )
    }
}
