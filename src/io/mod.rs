pub mod paths;

pub use paths::{CanonicalPath, ConfigPaths};
