use super::{CommandHandler, CommandResult};
use crate::io::CanonicalPath;
use crate::trust::TrustStore;
use crate::Result;
use std::path::PathBuf;

/// Handler for the `remove` command
pub struct RemoveCommand {
    pub venv_path: PathBuf,
    pub store_file: PathBuf,
}

impl CommandHandler for RemoveCommand {
    fn execute(&self) -> Result<CommandResult> {
        let path = CanonicalPath::resolve(&self.venv_path)?;
        let mut store = TrustStore::load(&self.store_file);

        if store.remove(&path) {
            store.save(&self.store_file)?;
            println!("Removed: {}", path);
        } else {
            println!("Not found in any list: {}", path);
        }

        Ok(CommandResult::Success)
    }

    fn name(&self) -> &'static str {
        "remove"
    }
}

impl RemoveCommand {
    /// Create new remove command
    pub fn new(venv_path: PathBuf, store_file: PathBuf) -> Self {
        Self {
            venv_path,
            store_file,
        }
    }
}
