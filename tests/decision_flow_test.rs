//! Decision procedure against a real store file, with scripted prompt input

use anyhow::Result;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use venv_security::io::CanonicalPath;
use venv_security::trust::{decide, Prompt, PromptResponse, TrustStore, Verdict};

/// Replays canned responses and counts how often it was asked
struct ScriptedPrompt {
    responses: VecDeque<PromptResponse>,
    asked: usize,
}

impl ScriptedPrompt {
    fn answering(responses: &[&str]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|r| PromptResponse::Line(r.to_string()))
                .collect(),
            asked: 0,
        }
    }

    fn silent() -> Self {
        Self::answering(&[])
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, _path: &CanonicalPath) -> PromptResponse {
        self.asked += 1;
        self.responses
            .pop_front()
            .unwrap_or(PromptResponse::Unavailable)
    }
}

struct Fixture {
    _temp: TempDir,
    store_file: std::path::PathBuf,
    venv: CanonicalPath,
}

fn fixture() -> Result<Fixture> {
    let temp = TempDir::new()?;
    let root = temp.path().canonicalize()?;
    fs::create_dir_all(root.join("proj/.venv"))?;

    Ok(Fixture {
        store_file: root.join("config/config.json"),
        venv: CanonicalPath::resolve_from(Path::new("proj/.venv"), &root)?,
        _temp: temp,
    })
}

/// One invocation: fresh load, decide, discard
fn check(fx: &Fixture, prompt: &mut ScriptedPrompt) -> Result<Verdict> {
    let mut store = TrustStore::load(&fx.store_file);
    Ok(decide(&fx.venv, &mut store, &fx.store_file, prompt)?.verdict)
}

#[test]
fn test_yes_is_remembered() -> Result<()> {
    let fx = fixture()?;

    let mut prompt = ScriptedPrompt::answering(&["y"]);
    assert_eq!(check(&fx, &mut prompt)?, Verdict::Trusted);
    assert_eq!(prompt.asked, 1);

    let mut prompt = ScriptedPrompt::silent();
    assert_eq!(check(&fx, &mut prompt)?, Verdict::Trusted);
    assert_eq!(prompt.asked, 0, "known path must not prompt");

    let store = TrustStore::load(&fx.store_file);
    assert!(store.is_trusted(&fx.venv));
    Ok(())
}

#[test]
fn test_block_is_remembered() -> Result<()> {
    let fx = fixture()?;

    let mut prompt = ScriptedPrompt::answering(&["BLOCK"]);
    assert_eq!(check(&fx, &mut prompt)?, Verdict::Blocked);

    let mut prompt = ScriptedPrompt::silent();
    assert_eq!(check(&fx, &mut prompt)?, Verdict::Blocked);
    assert_eq!(prompt.asked, 0);
    Ok(())
}

#[test]
fn test_skip_asks_again() -> Result<()> {
    let fx = fixture()?;

    let mut prompt = ScriptedPrompt::answering(&[""]);
    assert_eq!(check(&fx, &mut prompt)?, Verdict::Declined);
    assert!(!fx.store_file.exists(), "a skip must not persist anything");

    let mut prompt = ScriptedPrompt::answering(&["nope"]);
    assert_eq!(check(&fx, &mut prompt)?, Verdict::Declined);
    assert_eq!(prompt.asked, 1, "still unknown, so asked again");
    Ok(())
}

#[test]
fn test_unavailable_input_declines() -> Result<()> {
    let fx = fixture()?;

    let mut prompt = ScriptedPrompt::silent();
    let mut store = TrustStore::load(&fx.store_file);
    let decision = decide(&fx.venv, &mut store, &fx.store_file, &mut prompt)?;
    assert_eq!(decision.verdict, Verdict::Declined);
    assert!(decision.prompted);
    assert!(!decision.answered, "no line arrived");
    assert_eq!(prompt.asked, 1);
    assert!(!fx.store_file.exists());
    Ok(())
}

#[test]
fn test_empty_line_counts_as_answered() -> Result<()> {
    let fx = fixture()?;

    let mut prompt = ScriptedPrompt::answering(&[""]);
    let mut store = TrustStore::load(&fx.store_file);
    let decision = decide(&fx.venv, &mut store, &fx.store_file, &mut prompt)?;
    assert_eq!(decision.verdict, Verdict::Declined);
    assert!(decision.answered);
    Ok(())
}

#[test]
fn test_decision_keeps_other_entries() -> Result<()> {
    let fx = fixture()?;
    let other = CanonicalPath::resolve_from(Path::new("/nonexistent/other"), Path::new("/"))?;

    let mut store = TrustStore::new();
    store.block(&other);
    store.save(&fx.store_file)?;

    let mut prompt = ScriptedPrompt::answering(&["yes"]);
    assert_eq!(check(&fx, &mut prompt)?, Verdict::Trusted);

    let store = TrustStore::load(&fx.store_file);
    assert!(store.is_blocked(&other));
    assert!(store.is_trusted(&fx.venv));
    Ok(())
}

#[test]
fn test_relative_and_absolute_share_verdict() -> Result<()> {
    let fx = fixture()?;
    let mut prompt = ScriptedPrompt::answering(&["y"]);
    check(&fx, &mut prompt)?;

    let absolute = CanonicalPath::resolve_from(Path::new(fx.venv.as_str()), Path::new("/"))?;
    let store = TrustStore::load(&fx.store_file);
    assert!(store.is_trusted(&absolute));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unwritable_store_is_an_error() -> Result<()> {
    let fx = fixture()?;
    let parent = fx.store_file.parent().unwrap();
    // The config directory is a regular file, so it cannot be created
    fs::write(parent, "")?;

    let mut store = TrustStore::load(&fx.store_file);
    let mut prompt = ScriptedPrompt::answering(&["y"]);
    let result = decide(&fx.venv, &mut store, &fx.store_file, &mut prompt);
    assert!(result.is_err(), "an unrecorded trust must not report success");
    Ok(())
}
