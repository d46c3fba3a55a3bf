use anyhow::Result;
use clap::Parser;

use semver_bump::cli::{dispatch, Cli};
use semver_bump::{config, logging, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    // Load configuration
    let config = match config::load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let outcome = match dispatch::run(&cli.command, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }
    println!("{}", outcome.output);

    if !outcome.success {
        std::process::exit(1);
    }

    Ok(())
}
