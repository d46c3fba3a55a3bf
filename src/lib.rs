pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ui;
pub mod version;

pub use domain::{SuffixPolicy, Version, VersionBump};
pub use error::{Result, SemverError};
pub use version::{bump_major, bump_minor, bump_patch, bump_prerel, is_valid, parse};
