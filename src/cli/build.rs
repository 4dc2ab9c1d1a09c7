//! Build command handler.

use crate::config::AppConfig;
use crate::pipeline::{ensure_valid_config, exit_codes, load_repository, site_context};
use crate::site::build_site;
use anyhow::Result;

/// Run the build command
pub fn run_build(config: &AppConfig, quiet: bool) -> Result<i32> {
    ensure_valid_config(config)?;

    let repo = load_repository(config)?;
    let summary = build_site(&repo, &site_context(config), &config.output.directory)?;

    if !quiet {
        eprintln!(
            "Zbudowano {} stron ({} kategorii, {} firm) w {}",
            summary.pages,
            summary.categories,
            summary.companies,
            summary.output_dir.display()
        );
    }
    for key in &summary.skipped {
        eprintln!("Pominięto: {key}");
    }
    Ok(exit_codes::SUCCESS)
}
