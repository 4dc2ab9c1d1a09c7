//! Serve command handler.

use crate::config::AppConfig;
use crate::pipeline::{ensure_valid_config, exit_codes, load_repository, site_context};
use crate::site::PreviewServer;
use anyhow::Result;

/// Run the serve command; blocks until the listener stops.
pub fn run_serve(config: &AppConfig) -> Result<i32> {
    ensure_valid_config(config)?;

    let repo = load_repository(config)?;
    let ctx = site_context(config);
    let server = PreviewServer::bind(&config.server.bind)?;

    match server.local_addr() {
        Some(addr) => eprintln!("Podgląd dostępny pod http://{addr}/"),
        None => eprintln!("Podgląd uruchomiony na {}", config.server.bind),
    }
    server.run(&repo, &ctx)?;
    Ok(exit_codes::SUCCESS)
}
