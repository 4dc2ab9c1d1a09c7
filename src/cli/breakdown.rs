//! Breakdown command handler.
//!
//! Runs the fallback calculator on an ad-hoc score and badge set.

use super::OutputOptions;
use crate::model::{Badge, TOTAL_POINTS};
use crate::pipeline::{OutputFormat, exit_codes, write_output};
use crate::scoring::calculate_breakdown;
use anyhow::{Context, Result};

/// Run the breakdown command
pub fn run_breakdown(score: u32, badges: &[String], output: &OutputOptions) -> Result<i32> {
    if score > TOTAL_POINTS {
        tracing::warn!("Score {} is above {}; clamping", score, TOTAL_POINTS);
    }
    let badges: Vec<Badge> = badges.iter().map(|b| Badge::new(b.as_str())).collect();
    for badge in badges.iter().filter(|b| b.criterion().is_none()) {
        tracing::info!("Badge '{}' does not vouch for any criterion", badge);
    }

    let breakdown = calculate_breakdown(score, &badges);
    let content = match output.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&breakdown).context("failed to serialize breakdown")?
        }
        OutputFormat::Text => output.reporter().breakdown(&breakdown),
    };
    write_output(&content, &output.target)?;
    Ok(exit_codes::SUCCESS)
}
