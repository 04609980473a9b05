//! Trust verdicts for virtualenv paths
//!
//! Known paths are answered from the store. Unknown paths are put to the
//! user once; a "yes" or "block" answer is persisted before the verdict is
//! returned, anything else leaves the path unknown.

use super::prompt::{Prompt, PromptResponse};
use super::store::TrustStore;
use crate::io::CanonicalPath;
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of evaluating a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Activate the environment
    Trusted,
    /// Never activate; will not ask again
    Blocked,
    /// Not activated this time; will ask again
    Declined,
}

impl Verdict {
    /// Exit code the activation hook branches on
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Trusted => 0,
            Verdict::Blocked | Verdict::Declined => 1,
        }
    }
}

/// A user's answer to the trust prompt, after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Trust,
    Block,
    Skip,
}

impl Answer {
    /// `y`/`yes` trusts, `b`/`block` blocks, anything else (including no
    /// input at all) skips. Case and surrounding whitespace are ignored.
    pub fn classify(response: &PromptResponse) -> Self {
        let PromptResponse::Line(line) = response else {
            return Answer::Skip;
        };

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => Answer::Trust,
            "b" | "block" => Answer::Block,
            _ => Answer::Skip,
        }
    }
}

/// Result of [`decide`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub verdict: Verdict,
    /// Whether the user was asked
    pub prompted: bool,
    /// Whether the prompt got a line back, as opposed to EOF or Ctrl-C
    pub answered: bool,
}

/// Evaluate `path`, asking through `prompt` only when the store has no
/// decision for it. A new decision is saved to `store_file` before returning.
pub fn decide(
    path: &CanonicalPath,
    store: &mut TrustStore,
    store_file: &Path,
    prompt: &mut dyn Prompt,
) -> Result<Decision> {
    if store.is_trusted(path) {
        debug!("{} is trusted", path);
        return Ok(Decision {
            verdict: Verdict::Trusted,
            prompted: false,
            answered: false,
        });
    }

    if store.is_blocked(path) {
        debug!("{} is blocked", path);
        return Ok(Decision {
            verdict: Verdict::Blocked,
            prompted: false,
            answered: false,
        });
    }

    let response = prompt.ask(path);
    let answered = matches!(response, PromptResponse::Line(_));
    let verdict = match Answer::classify(&response) {
        Answer::Trust => {
            store.trust(path);
            store.save(store_file)?;
            info!("Trusted {} from prompt", path);
            Verdict::Trusted
        }
        Answer::Block => {
            store.block(path);
            store.save(store_file)?;
            info!("Blocked {} from prompt", path);
            Verdict::Blocked
        }
        Answer::Skip => {
            debug!("No decision recorded for {}", path);
            Verdict::Declined
        }
    };

    Ok(Decision {
        verdict,
        prompted: true,
        answered,
    })
}
