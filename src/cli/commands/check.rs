use super::{CommandHandler, CommandResult};
use crate::io::CanonicalPath;
use crate::trust::{decide, Prompt, TerminalPrompt, TrustStore, Verdict};
use crate::Result;
use std::path::PathBuf;

/// Handler for the `check` command
pub struct CheckCommand {
    pub venv_path: PathBuf,
    pub store_file: PathBuf,
}

impl CommandHandler for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        self.execute_with(&mut TerminalPrompt::stdio())
    }

    fn name(&self) -> &'static str {
        "check"
    }
}

impl CheckCommand {
    /// Create new check command
    pub fn new(venv_path: PathBuf, store_file: PathBuf) -> Self {
        Self {
            venv_path,
            store_file,
        }
    }

    /// Run the check, asking `prompt` if the venv is unknown
    pub fn execute_with(&self, prompt: &mut dyn Prompt) -> Result<CommandResult> {
        let path = CanonicalPath::resolve(&self.venv_path)?;
        let mut store = TrustStore::load(&self.store_file);

        let decision = decide(&path, &mut store, &self.store_file, prompt)?;
        if decision.answered {
            match decision.verdict {
                Verdict::Trusted => println!("✓ Added to trusted list"),
                Verdict::Blocked => println!("✗ Added to blocked list (won't ask again)"),
                Verdict::Declined => println!("– Skipped (will ask again next time)"),
            }
        }

        Ok(decision.verdict.into())
    }
}
