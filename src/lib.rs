//! venv-security: a persistent trust gate for automatic virtualenv activation.
//!
//! A shell hook calls `venv-security check <venv>` before activating an
//! environment and branches on the exit code: 0 proceed, 1 refuse, 2 error.

pub mod cli;
pub mod error;
pub mod io;
pub mod trust;

pub use error::{Result, VenvSecurityError};
