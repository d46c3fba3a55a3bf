//! User interface module - rendering of results and diagnostics.
//!
//! - `formatter` - Pure rendering functions plus the stderr reporters

pub mod formatter;

pub use formatter::{display_boundary_warning, display_error, render_version};
