pub mod block;
pub mod check;
pub mod list;
pub mod remove;
pub mod trust;

use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// How a successfully executed command ends.
///
/// Failures are `Err` and map to exit code 2 at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Proceed (exit 0)
    Success,
    /// Refuse activation (exit 1)
    Refused,
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success => 0,
            CommandResult::Refused => 1,
        }
    }
}

impl From<crate::trust::Verdict> for CommandResult {
    fn from(verdict: crate::trust::Verdict) -> Self {
        match verdict {
            crate::trust::Verdict::Trusted => CommandResult::Success,
            crate::trust::Verdict::Blocked | crate::trust::Verdict::Declined => {
                CommandResult::Refused
            }
        }
    }
}
