use crate::{Result, VenvSecurityError};
use directories::BaseDirs;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Directory under `~/.config` holding the trust store
pub const CONFIG_DIR_NAME: &str = "zsh-safe-venv-auto";

/// Trust store file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the trust store location
pub const CONFIG_ENV_VAR: &str = "VENV_SECURITY_CONFIG";

/// Path management for the trust store file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Directory created on first save
    pub config_dir: PathBuf,
    /// The JSON document holding trusted/blocked paths
    pub config_file: PathBuf,
}

impl ConfigPaths {
    /// Default per-user location: `~/.config/zsh-safe-venv-auto/config.json`
    pub fn new() -> Result<Self> {
        Ok(Self::for_home(&home_dir()?))
    }

    /// Paths rooted at an explicit home directory
    pub fn for_home(home: &Path) -> Self {
        let config_dir = home.join(".config").join(CONFIG_DIR_NAME);
        let config_file = config_dir.join(CONFIG_FILE_NAME);
        Self {
            config_dir,
            config_file,
        }
    }

    /// Paths for an explicitly chosen store file
    pub fn for_file(config_file: PathBuf) -> Self {
        let config_dir = match config_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            config_dir,
            config_file,
        }
    }

    /// Use the override when given (from `--config` or the environment), the
    /// per-user default otherwise
    pub fn resolve(override_file: Option<PathBuf>) -> Result<Self> {
        match override_file {
            Some(file) => {
                debug!("Using trust store override: {}", file.display());
                Ok(Self::for_file(file))
            }
            None => Self::new(),
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    if let Some(dirs) = BaseDirs::new() {
        return Ok(dirs.home_dir().to_path_buf());
    }

    // Fallback when the platform lookup fails (e.g. no passwd entry)
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Err(VenvSecurityError::Config(
            "Could not determine home directory".to_string(),
        )),
    }
}

/// An absolute, symlink-resolved, normalized path used as the key for every
/// trust decision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Resolve a user-supplied path against the current working directory.
    ///
    /// The path does not need to exist.
    pub fn resolve(input: impl AsRef<Path>) -> Result<Self> {
        let input = input.as_ref();
        let base = std::env::current_dir().map_err(|source| VenvSecurityError::Path {
            path: input.to_path_buf(),
            source,
        })?;
        let canonical = Self::resolve_from(input, &base)?;
        debug!("Resolved {} -> {}", input.display(), canonical);
        Ok(canonical)
    }

    /// Resolve `input` with relative paths taken from `base`.
    ///
    /// Every component is resolved through the filesystem when it exists, so
    /// symlinks are followed before `..` is applied. Missing components are
    /// kept lexically; a later `..` can land back on disk.
    ///
    /// Paths that are not valid UTF-8 are rejected: the store keys are JSON
    /// strings and a lossy conversion would let two directories share a key.
    pub fn resolve_from(input: &Path, base: &Path) -> Result<Self> {
        let joined = if input.is_absolute() {
            input.to_path_buf()
        } else {
            base.join(input)
        };

        let mut resolved = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(name) => {
                    resolved.push(name);
                    if let Ok(real) = std::fs::canonicalize(&resolved) {
                        resolved = real;
                    }
                }
            }
        }

        match resolved.into_os_string().into_string() {
            Ok(canonical) => Ok(CanonicalPath(canonical)),
            Err(raw) => Err(VenvSecurityError::NonUtf8Path {
                path: PathBuf::from(raw),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
