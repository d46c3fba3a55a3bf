//! Command dispatch
//!
//! Maps each `Command` variant onto the library operations. Nothing here
//! prints; the caller writes `Outcome::output` to stdout and reports the
//! warnings.

use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::cli::{BumpCommand, Command};
use crate::config::Config;
use crate::domain::{SuffixPolicy, Version};
use crate::error::Result;
use crate::ui::render_version;
use crate::version;

/// Result of a dispatched command
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Text for stdout
    pub output: String,

    /// Non-fatal issues to report on stderr
    pub warnings: Vec<BoundaryWarning>,

    /// False when the command ran but the answer is negative (`validate`)
    pub success: bool,
}

impl Outcome {
    fn ok(output: String, warnings: Vec<BoundaryWarning>) -> Self {
        Outcome {
            output,
            warnings,
            success: true,
        }
    }
}

/// Run a command against the loaded configuration.
///
/// Invalid versions surface as `Err(SemverError::InvalidVersion)` for `parse`
/// and `bump`; `validate` turns them into an unsuccessful `Outcome` instead.
pub fn run(command: &Command, config: &Config) -> Result<Outcome> {
    debug!(?command, "dispatching");
    match command {
        Command::Parse { input, format } => {
            let parsed = version::parse(input)?;
            let mut output = config.output.clone();
            if let Some(format) = format {
                output.format = *format;
            }
            let warnings = BoundaryWarning::check_canonical(input, &parsed)
                .into_iter()
                .collect();
            Ok(Outcome::ok(render_version(&parsed, &output)?, warnings))
        }
        Command::Bump { target } => bump(target, config),
        Command::Validate { input } => {
            let valid = version::is_valid(input);
            Ok(Outcome {
                output: if valid { "valid" } else { "invalid" }.to_string(),
                warnings: Vec::new(),
                success: valid,
            })
        }
    }
}

fn bump(target: &BumpCommand, config: &Config) -> Result<Outcome> {
    let args = target.args();
    let policy = if args.clear_suffixes {
        SuffixPolicy::Clear
    } else {
        config.bump.suffix_policy()
    };
    debug!(kind = ?target.kind(), ?policy, "bumping {}", args.input);

    let parsed = Version::parse(&args.input)?;
    let mut warnings: Vec<BoundaryWarning> =
        BoundaryWarning::check_canonical(&args.input, &parsed)
            .into_iter()
            .collect();

    let bumped = parsed.clone().bump(target.kind(), policy)?;
    warnings.extend(BoundaryWarning::check_cleared(&parsed, &bumped));

    Ok(Outcome::ok(bumped.to_string(), warnings))
}
