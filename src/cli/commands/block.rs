use super::{CommandHandler, CommandResult};
use crate::io::CanonicalPath;
use crate::trust::TrustStore;
use crate::Result;
use std::path::PathBuf;

/// Handler for the `block` command
pub struct BlockCommand {
    pub venv_path: PathBuf,
    pub store_file: PathBuf,
}

impl CommandHandler for BlockCommand {
    fn execute(&self) -> Result<CommandResult> {
        let path = CanonicalPath::resolve(&self.venv_path)?;
        let mut store = TrustStore::load(&self.store_file);

        if store.block(&path) {
            store.save(&self.store_file)?;
            println!("✗ Blocked: {}", path);
        } else {
            println!("Already blocked: {}", path);
        }

        // Blocking succeeded; exit 1 is reserved for `check` refusals
        Ok(CommandResult::Success)
    }

    fn name(&self) -> &'static str {
        "block"
    }
}

impl BlockCommand {
    /// Create new block command
    pub fn new(venv_path: PathBuf, store_file: PathBuf) -> Self {
        Self {
            venv_path,
            store_file,
        }
    }
}
