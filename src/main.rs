//! czy-polska-firma: static directory site with a demonstration Polishness index.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use czy_polska_firma::{
    cli::{self, OutputOptions},
    config::{AppConfig, ConfigPreset},
    pipeline::{OutputFormat, OutputTarget, exit_codes},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "czy-polska-firma")]
#[command(version)]
#[command(about = "Build, preview and inspect the CzyPolskaFirma directory", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Category or company not found
    2  Validation issues found
    3  Error occurred

EXAMPLES:
    # Render the site into public/
    czy-polska-firma build

    # Preview locally with absolute share links
    czy-polska-firma serve --preset preview

    # Inspect one profile as JSON
    czy-polska-firma company murator -f json

    # Try the fallback calculator
    czy-polska-firma breakdown --score 85 --badge polski_kapital")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start from a named preset (default, preview, production)
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Replacement categories document
    #[arg(long, global = true, env = "CZY_POLSKA_FIRMA_CATEGORIES")]
    categories: Option<PathBuf>,

    /// Replacement company profiles document
    #[arg(long, global = true, env = "CZY_POLSKA_FIRMA_COMPANIES")]
    companies: Option<PathBuf>,

    /// Public origin for absolute share links
    #[arg(long, global = true)]
    origin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Output flags shared by the inspection commands
#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the whole site into a directory
    Build {
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Serve the site over HTTP for local preview
    Serve {
        /// Socket address to listen on
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Show a company profile, its breakdown and Polish alternatives
    Company {
        /// Company id
        id: String,

        #[command(flatten)]
        output: OutputArgs,

        /// Copy the profile link to the clipboard
        #[arg(long)]
        copy_link: bool,
    },

    /// List the companies in a category
    Category {
        /// Category slug
        slug: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Derive a breakdown from a score and badges
    Breakdown {
        /// Overall score (clamped to 100)
        #[arg(short, long)]
        score: u32,

        /// Badge tag; repeat for several
        #[arg(short, long = "badge")]
        badges: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check configuration and data documents for problems
    Validate {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .czy-polska-firma.yaml in the current directory
    Init,
}

impl Cli {
    fn output_options(&self, args: &OutputArgs) -> OutputOptions {
        OutputOptions {
            format: args.format,
            target: OutputTarget::from_option(args.output_file.clone()),
            no_color: self.no_color,
        }
    }

    /// Effective configuration: preset, then file, then flags.
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut overrides = match &self.preset {
            Some(name) => AppConfig::from_preset(
                ConfigPreset::from_name(name)
                    .with_context(|| format!("unknown preset '{name}'"))?,
            ),
            None => AppConfig::default(),
        };
        if let Some(origin) = &self.origin {
            overrides.site.origin = Some(origin.clone());
        }
        if let Some(path) = &self.categories {
            overrides.data.categories = Some(path.clone());
        }
        if let Some(path) = &self.companies {
            overrides.data.companies = Some(path.clone());
        }
        overrides.output.no_color |= self.no_color;

        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(self.config.as_deref(), &overrides);
        if let Some(path) = loaded_from {
            tracing::debug!("Loaded config from {}", path.display());
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = cli.resolve_config()?;

    match &cli.command {
        Commands::Build { out } => {
            if let Some(dir) = out {
                config.output.directory = dir.clone();
            }
            cli::run_build(&config, cli.quiet)
        }

        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind.clone();
            }
            cli::run_serve(&config)
        }

        Commands::Company {
            id,
            output,
            copy_link,
        } => cli::run_company(&config, id, &cli.output_options(output), *copy_link),

        Commands::Category { slug, output } => {
            cli::run_category(&config, slug, &cli.output_options(output))
        }

        Commands::Breakdown {
            score,
            badges,
            output,
        } => cli::run_breakdown(*score, badges, &cli.output_options(output)),

        Commands::Validate { output } => cli::run_validate(&config, &cli.output_options(output)),

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "czy-polska-firma", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = czy_polska_firma::config::generate_json_schema()
                .context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (_, loaded_from) =
                    czy_polska_firma::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    czy_polska_firma::config::user_config_dir().map(|p| p.display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".czy-polska-firma.yaml",
                    ".czy-polska-firma.yml",
                    "czy-polska-firma.yaml",
                    "czy-polska-firma.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match czy_polska_firma::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".czy-polska-firma.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = czy_polska_firma::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
