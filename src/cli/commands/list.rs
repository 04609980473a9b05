use super::{CommandHandler, CommandResult};
use crate::trust::TrustStore;
use crate::Result;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Handler for the `list` command
pub struct ListCommand {
    pub json: bool,
    pub store_file: PathBuf,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let store = TrustStore::load(&self.store_file);

        if self.json {
            println!("{}", store.to_json()?);
        } else {
            print!("{}", render(&store));
        }

        Ok(CommandResult::Success)
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    /// Create new list command
    pub fn new(json: bool, store_file: PathBuf) -> Self {
        Self { json, store_file }
    }
}

/// Human-readable listing of both sets, each sorted
pub fn render(store: &TrustStore) -> String {
    let mut out = String::new();
    section(&mut out, "Trusted venvs:", '✓', store.trusted());
    out.push('\n');
    section(&mut out, "Blocked venvs:", '✗', store.blocked());
    out
}

fn section<'a>(out: &mut String, title: &str, marker: char, paths: impl Iterator<Item = &'a str>) {
    out.push_str(title);
    out.push('\n');

    let mut any = false;
    for path in paths {
        any = true;
        let _ = writeln!(out, " {} {}", marker, path);
    }
    if !any {
        out.push_str(" (none)\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::CanonicalPath;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn test_render_empty_store() {
        assert_eq!(
            render(&TrustStore::new()),
            "Trusted venvs:\n (none)\n\nBlocked venvs:\n (none)\n"
        );
    }

    #[test]
    fn test_render_sorted_sections() {
        let mut store = TrustStore::new();
        for p in ["/nonexistent/zeta", "/nonexistent/alpha"] {
            store.trust(&CanonicalPath::resolve_from(Path::new(p), Path::new("/")).unwrap());
        }
        store.block(
            &CanonicalPath::resolve_from(Path::new("/nonexistent/evil"), Path::new("/")).unwrap(),
        );

        assert_eq!(
            render(&store),
            "Trusted venvs:\n ✓ /nonexistent/alpha\n ✓ /nonexistent/zeta\n\n\
             Blocked venvs:\n ✗ /nonexistent/evil\n"
        );
    }
}
