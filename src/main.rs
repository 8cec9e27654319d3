use clap::Parser;
use droidtools::shell::split_assignment;
use droidtools::{Config, Shell, ToolRegistry};
use miette::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// droidtools - interactive shell for Android app analysis tools
#[derive(Parser, Debug)]
#[command(name = "droidtools")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preload a parameter into the environment (can be specified multiple times)
    #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    env: Vec<(String, String)>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    split_assignment(s)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("droidtools v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let tools = ToolRegistry::with_default_tools(&config.layout.default_database);

    Shell::new(&config, tools).run()
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        // Try to load from the working directory
        Config::from_default_locations(Path::new("."))?
    };

    // Override with CLI arguments
    for (key, value) in &cli.env {
        config.env.insert(key.clone(), value.clone());
    }

    Ok(config)
}
