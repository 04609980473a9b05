use super::{CommandHandler, CommandResult};
use crate::io::CanonicalPath;
use crate::trust::TrustStore;
use crate::Result;
use std::path::PathBuf;

/// Handler for the `trust` command
pub struct TrustCommand {
    pub venv_path: PathBuf,
    pub store_file: PathBuf,
}

impl CommandHandler for TrustCommand {
    fn execute(&self) -> Result<CommandResult> {
        let path = CanonicalPath::resolve(&self.venv_path)?;
        let mut store = TrustStore::load(&self.store_file);

        if store.trust(&path) {
            store.save(&self.store_file)?;
            println!("✓ Trusted: {}", path);
        } else {
            println!("Already trusted: {}", path);
        }

        Ok(CommandResult::Success)
    }

    fn name(&self) -> &'static str {
        "trust"
    }
}

impl TrustCommand {
    /// Create new trust command
    pub fn new(venv_path: PathBuf, store_file: PathBuf) -> Self {
        Self {
            venv_path,
            store_file,
        }
    }
}
