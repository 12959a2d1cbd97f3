use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use theming_helper::{Config, ThemeSetting};

const THEME_ENV: &str = "THEME";

/// Resolve a theme mode token to dark or light.
#[derive(Parser, Debug)]
#[command(name = "theming-helper", version)]
struct Cli {
    /// Mode token to parse. Anything other than "light" resolves to dark.
    token: Option<String>,

    /// Read the mode from this TOML file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/**
 * Reads $THEME, treating an empty value as unset.
 */
fn theme_env() -> Option<String> {
    std::env::var(THEME_ENV)
        .ok()
        .filter(|token| !token.is_empty())
}

fn resolve(cli: &Cli, env_token: Option<String>) -> Result<ThemeSetting, Box<dyn Error>> {
    if let Some(token) = cli.token.as_deref() {
        log::info!("Using theme token from arguments");
        return Ok(ThemeSetting::from_string(Some(token)));
    }

    if let Some(token) = env_token {
        log::info!("Using theme token from ${THEME_ENV}");
        return Ok(ThemeSetting::from_string(Some(&token)));
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    Ok(config.setting())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let setting = resolve(&cli, theme_env())?;
    println!("{}", setting.current());
    Ok(())
}
