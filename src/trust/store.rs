//! Persisted trusted/blocked path sets
//!
//! The store is a JSON document of the form
//! `{ "trusted": [...], "blocked": [...] }`. It is read once per invocation and
//! rewritten in full whenever a mutation changes it.

use crate::io::CanonicalPath;
use crate::{Result, VenvSecurityError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Trusted and blocked virtualenv paths.
///
/// After any mutation completes, no path is in both sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustStore {
    #[serde(default)]
    trusted: BTreeSet<String>,

    #[serde(default)]
    blocked: BTreeSet<String>,
}

impl TrustStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from `file`.
    ///
    /// Never fails: a missing, unreadable, or malformed file yields an empty
    /// store. Prior decisions in a corrupted file are forgotten.
    pub fn load(file: &Path) -> Self {
        if !file.exists() {
            debug!("No trust store at {}, starting empty", file.display());
            return Self::new();
        }

        let contents = match fs::read_to_string(file) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read trust store {}: {}", file.display(), e);
                return Self::new();
            }
        };

        match serde_json::from_str::<TrustStore>(&contents) {
            Ok(store) => {
                debug!(
                    trusted = store.trusted.len(),
                    blocked = store.blocked.len(),
                    "Loaded trust store from {}",
                    file.display()
                );
                store
            }
            Err(e) => {
                warn!(
                    "Trust store {} is malformed, treating as empty: {}",
                    file.display(),
                    e
                );
                Self::new()
            }
        }
    }

    /// Write the store to `file`, creating missing parent directories first.
    pub fn save(&self, file: &Path) -> Result<()> {
        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| VenvSecurityError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut content = self.to_json()?;
        content.push('\n');
        fs::write(file, content).map_err(|source| VenvSecurityError::Write {
            path: file.to_path_buf(),
            source,
        })?;

        info!(
            trusted = self.trusted.len(),
            blocked = self.blocked.len(),
            "Saved trust store to {}",
            file.display()
        );
        Ok(())
    }

    /// Pretty-printed JSON document, both arrays sorted
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_trusted(&self, path: &CanonicalPath) -> bool {
        self.trusted.contains(path.as_str())
    }

    pub fn is_blocked(&self, path: &CanonicalPath) -> bool {
        self.blocked.contains(path.as_str())
    }

    /// Mark `path` trusted. Returns whether the store changed.
    pub fn trust(&mut self, path: &CanonicalPath) -> bool {
        let unblocked = self.blocked.remove(path.as_str());
        let added = self.trusted.insert(path.as_str().to_owned());
        unblocked || added
    }

    /// Mark `path` blocked. Returns whether the store changed.
    pub fn block(&mut self, path: &CanonicalPath) -> bool {
        let untrusted = self.trusted.remove(path.as_str());
        let added = self.blocked.insert(path.as_str().to_owned());
        untrusted || added
    }

    /// Forget any decision about `path`. Returns whether anything was removed.
    pub fn remove(&mut self, path: &CanonicalPath) -> bool {
        let untrusted = self.trusted.remove(path.as_str());
        let unblocked = self.blocked.remove(path.as_str());
        untrusted || unblocked
    }

    /// Trusted paths in lexicographic order
    pub fn trusted(&self) -> impl Iterator<Item = &str> {
        self.trusted.iter().map(String::as_str)
    }

    /// Blocked paths in lexicographic order
    pub fn blocked(&self) -> impl Iterator<Item = &str> {
        self.blocked.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.trusted.is_empty() && self.blocked.is_empty()
    }
}
