//! Wallie - terminal rendition of the sign-up screen
//!
//! Mounts a navigation container whose only route is the Sign Up screen and
//! runs it in the terminal until the user quits.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use wallie::branding::{APP_BINARY_NAME, APP_DESCRIPTION, APP_DISPLAY_NAME};
use wallie::config::{Config, ThemeMode};
use wallie::logging::{self, LogTarget};

/// Theme selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Auto,
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::Auto,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// Wallie - terminal rendition of the sign-up screen
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured theme mode
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Print the mounted view tree as JSON and exit
    #[arg(long)]
    print_tree: bool,

    /// Write a default configuration file (to --config if given) and exit
    #[arg(long, conflicts_with = "print_tree")]
    init_config: bool,

    /// Log level or filter directive (takes precedence over RUST_LOG and the config file)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        // An explicit path must exist and be valid
        return Config::load_from(path);
    }

    Ok(Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e:#}");
        eprintln!("Using default configuration.");
        Config::default()
    }))
}

/// Writes the default configuration, with any `--theme` override applied.
fn init_config(cli: &Cli) -> Result<()> {
    let mut config = Config::default();
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme.into();
    }

    let path = match &cli.config {
        Some(path) => {
            config.save_to(path)?;
            path.clone()
        }
        None => {
            config.save()?;
            Config::config_file_path()?
        }
    };

    println!("Configuration written to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        return init_config(&cli);
    }

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme.into();
    }

    let target = if cli.print_tree {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    if let Err(e) = logging::init(&config.logging, cli.log_level.as_deref(), target) {
        eprintln!("Warning: Logging disabled: {e:#}");
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        binary = APP_BINARY_NAME,
        "Starting {APP_DISPLAY_NAME}"
    );

    if cli.print_tree {
        println!("{}", wallie::app::render_tree_json(&config)?);
        return Ok(());
    }

    wallie::app::run(&config)
}
