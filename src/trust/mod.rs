//! Trust state for virtualenv directories
//!
//! - [`store`]: the persisted trusted/blocked sets
//! - [`prompt`]: asking the user about an unknown path
//! - [`decision`]: turning the two into a [`Verdict`]

pub mod decision;
pub mod prompt;
pub mod store;

pub use decision::{decide, Answer, Decision, Verdict};
pub use prompt::{Prompt, PromptResponse, TerminalPrompt};
pub use store::TrustStore;
