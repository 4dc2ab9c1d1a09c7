//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the logic for one subcommand and returns the
//! process exit code.

mod breakdown;
mod build;
mod category;
mod company;
mod serve;
mod validate;

pub use breakdown::run_breakdown;
pub use build::run_build;
pub use category::run_category;
pub use company::run_company;
pub use serve::run_serve;
pub use validate::run_validate;

use crate::pipeline::{OutputFormat, OutputTarget, should_use_color};
use crate::render::console::ConsoleReporter;

/// Output settings shared by the inspection commands.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub target: OutputTarget,
    pub no_color: bool,
}

impl OutputOptions {
    #[must_use]
    pub const fn stdout(format: OutputFormat) -> Self {
        Self {
            format,
            target: OutputTarget::Stdout,
            no_color: false,
        }
    }

    fn reporter(&self) -> ConsoleReporter {
        if should_use_color(self.no_color, &self.target) {
            ConsoleReporter::new()
        } else {
            ConsoleReporter::new().no_color()
        }
    }
}
