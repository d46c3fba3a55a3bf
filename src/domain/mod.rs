//! Domain logic - the version model and its bump rules, free of any I/O

pub mod prerelease;
pub mod version;

pub use prerelease::PreRelease;
pub use version::{is_valid, SuffixPolicy, Version, VersionBump};
