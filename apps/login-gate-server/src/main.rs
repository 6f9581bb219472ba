//! Login gate server
//!
//! Wires the login gate to its backend directory and configured backends,
//! then answers login checks for the transport layer.

mod config;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use login_gate::{BackendDirectory, LoginGateLocalClient, Service};
use login_gate_sdk::{LoginGateClient, LoginGateError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat, LoggingConfig};

const EXIT_REJECTED: u8 = 1;
const EXIT_UNAVAILABLE: u8 = 2;

/// Login gate server - delegates logins to the live backend
#[derive(Parser)]
#[command(name = "login-gate-server", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config/login-gate.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a login; the secret is read from the first line of stdin
    Authenticate {
        /// User to authenticate
        username: String,
    },

    /// Print the server identity artifact
    Identity,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_UNAVAILABLE)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let cfg = AppConfig::load(&cli.config)?;
    init_logging(&cfg.logging)?;

    let identity = cfg
        .login_gate
        .load_identity()
        .context("failed to load identity artifact")?;

    let directory = BackendDirectory::new(cfg.login_gate.vendor.clone());
    let gate = Service::new(identity, &directory)?;
    let client: Arc<dyn LoginGateClient> = Arc::new(LoginGateLocalClient::new(gate));

    #[cfg(feature = "static-login")]
    let static_login = static_login_plugin::StaticLoginPlugin::default();
    #[cfg(feature = "static-login")]
    if let Some(plugin_cfg) = &cfg.static_login_plugin {
        static_login.init(plugin_cfg, &directory)?;
    }
    #[cfg(not(feature = "static-login"))]
    if cfg.static_login_plugin.is_some() {
        tracing::warn!("`static_login_plugin` is configured but the plugin is not compiled in");
    }

    if directory.selected().is_none() {
        tracing::warn!(
            vendor = %directory.vendor(),
            "No login backend bound, logins will be refused as unavailable"
        );
    }

    let code = match cli.command {
        Commands::Authenticate { username } => {
            let secret = read_secret().await?;
            authenticate(client.as_ref(), &username, &secret).await?
        }
        Commands::Identity => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(client.identity_artifact().as_bytes())?;
            stdout.flush()?;
            ExitCode::SUCCESS
        }
    };

    #[cfg(feature = "static-login")]
    static_login.stop(&directory);

    Ok(code)
}

async fn authenticate(
    client: &dyn LoginGateClient,
    username: &str,
    secret: &str,
) -> anyhow::Result<ExitCode> {
    match client.authenticate(username, secret).await {
        Ok(true) => {
            println!("accepted");
            Ok(ExitCode::SUCCESS)
        }
        Ok(false) => {
            println!("rejected");
            Ok(ExitCode::from(EXIT_REJECTED))
        }
        Err(LoginGateError::Unavailable) => {
            println!("unavailable");
            Ok(ExitCode::from(EXIT_UNAVAILABLE))
        }
        Err(e) => Err(e.into()),
    }
}

/// First line of stdin without the line terminator. Empty input is an empty secret.
async fn read_secret() -> anyhow::Result<String> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let line = lines
        .next_line()
        .await
        .context("failed to read secret from stdin")?;
    Ok(line.unwrap_or_default())
}

fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level)
            .with_context(|| format!("invalid log filter '{}'", cfg.level))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
