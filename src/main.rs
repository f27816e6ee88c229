use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixsign::models::{
    resolve_params, resolve_source, AppConfig, SourceConfig, CONFIG_FILE_VAR, DOMAIN_VAR,
    TOKEN_VAR,
};
use pixsign::services::UrlSigner;

#[derive(Parser)]
#[command(name = "pixsign")]
#[command(about = "Pixsign - signed URLs for remote image-processing services")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a path hosted on the service's own domain
    Sign {
        /// Server-relative image path (e.g. /images/jets.png)
        path: String,

        #[command(flatten)]
        options: SigningOptions,
    },
    /// Sign a proxy URL that has the service fetch an external image
    Proxy {
        /// Absolute external image URL
        url: String,

        #[command(flatten)]
        options: SigningOptions,
    },
    /// Check the signature of a previously signed URL
    Verify {
        /// Signed URL
        url: String,

        /// Named source from the config file
        #[arg(long)]
        source: Option<String>,
    },
}

#[derive(Args)]
struct SigningOptions {
    /// Transformation parameter as key=value (repeatable)
    #[arg(short, long = "param")]
    params: Vec<String>,

    /// Named parameter preset from the config file
    #[arg(long)]
    preset: Option<String>,

    /// Named source from the config file
    #[arg(long)]
    source: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixsign=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Sign { path, options }) => run_sign_command(&path, &options, false),
        Some(Commands::Proxy { url, options }) => run_sign_command(&url, &options, true),
        Some(Commands::Verify { url, source }) => run_verify_command(&url, source.as_deref()),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Sign a path (or proxy an external URL) and print the result
fn run_sign_command(target: &str, options: &SigningOptions, proxy: bool) -> anyhow::Result<()> {
    let config = load_config()?;
    let source = resolve_source(config.as_ref(), options.source.as_deref(), env_lookup)?;
    let params = resolve_params(config.as_ref(), options.preset.as_deref(), &options.params)?;
    let signer = UrlSigner::new(source)?;

    let url = if proxy {
        signer.proxy(target, params.as_ref())?
    } else {
        signer.sign(target, params.as_ref())?
    };

    println!("{url}");
    Ok(())
}

fn run_verify_command(url: &str, source_name: Option<&str>) -> anyhow::Result<()> {
    let config = load_config()?;
    let source = resolve_source(config.as_ref(), source_name, env_lookup)?;
    let signer = UrlSigner::new(source)?;

    signer.verify(url)?;
    println!("valid");
    Ok(())
}

/// Show configured source and available commands
fn run_status_command() {
    println!("Pixsign - signed URLs for remote image-processing services\n");

    println!("Configuration:");
    match std::env::var(CONFIG_FILE_VAR) {
        Ok(path) => match AppConfig::load(&PathBuf::from(&path)) {
            Ok(config) => {
                println!("  Config:  {path}");
                let mut names: Vec<&String> = config.sources.keys().collect();
                names.sort();
                for name in names {
                    let marker = if config.default_source.as_deref() == Some(name.as_str()) {
                        " (default)"
                    } else {
                        ""
                    };
                    println!("  Source:  {name}{marker} -> {}", config.sources[name].domain);
                }
                if !config.presets.is_empty() {
                    let mut presets: Vec<&String> = config.presets.keys().collect();
                    presets.sort();
                    let presets: Vec<&str> = presets.into_iter().map(String::as_str).collect();
                    println!("  Presets: {}", presets.join(", "));
                }
            }
            Err(e) => println!("  Config:  {path} (error: {e})"),
        },
        Err(_) => match SourceConfig::from_env() {
            Ok(source) => println!("  Source:  {} (from {DOMAIN_VAR})", source.domain),
            Err(e) => println!("  Source:  not configured ({e})"),
        },
    }

    let token_state = if std::env::var(TOKEN_VAR).map_or(false, |t| !t.is_empty()) {
        "set"
    } else {
        "unset"
    };
    println!("  {TOKEN_VAR}: {token_state}");

    println!("\nCommands:");
    println!("  pixsign sign <PATH>    Sign a path on the service domain");
    println!("  pixsign proxy <URL>    Sign a proxy URL for an external image");
    println!("  pixsign verify <URL>   Check a signed URL");
    println!("\nRun 'pixsign --help' for more details.");
}

fn load_config() -> anyhow::Result<Option<AppConfig>> {
    match std::env::var(CONFIG_FILE_VAR).ok().map(PathBuf::from) {
        Some(path) => {
            let config = AppConfig::load(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
