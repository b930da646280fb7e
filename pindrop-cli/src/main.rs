//! Pindrop CLI
//!
//! Command-line client for the Pindrop content-addressed pin storage
//! service. Authorize with `pindrop auth`, then fetch, link, and open
//! pinned content through your gateway.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pindrop_core::config::ApiConfig;
use pindrop_core::types::NetworkMode;
use pindrop_gateway::{
    authorize, configure_gateway, AccessLinkIssuer, ApiClient, CommandLauncher, LinkOpener,
    NetworkResolver, DEFAULT_LINK_LIFETIME_SECONDS,
};
use pindrop_store::{GatewayStore, SettingsStore, TokenStore};

/// Pindrop - CLI for content-addressed pin storage
#[derive(Parser)]
#[command(name = "pindrop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authorize the CLI with your Pindrop token
    #[command(alias = "a")]
    Auth {
        /// Your Pindrop token (prompted for when omitted)
        token: Option<String>,
        /// Automatically select the first gateway without prompting
        #[arg(short, long)]
        default: bool,
    },

    /// Interact with your gateways
    #[command(alias = "gw")]
    Gateways {
        #[command(subcommand)]
        command: GatewayCommands,
    },

    /// Adjust persisted CLI settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum GatewayCommands {
    /// Set the gateway domain used by the CLI
    #[command(alias = "s")]
    Set {
        /// Gateway domain; omitted means pick from your account's gateways
        domain: Option<String>,
        /// Automatically select the first gateway without prompting
        #[arg(short, long)]
        default: bool,
    },

    /// Open a file in the browser
    #[command(alias = "o")]
    Open {
        /// CID of the file
        cid: String,
        /// Network (public or private); uses the configured default if unset
        #[arg(long, alias = "net", default_value = "")]
        network: String,
    },

    /// Print a gateway link for a public file or a temporary access link for a private one
    #[command(alias = "l")]
    Link {
        /// CID of the file
        cid: String,
        /// Seconds the link stays valid (private network only)
        seconds: Option<i64>,
        /// Network (public or private); uses the configured default if unset
        #[arg(long, alias = "net", default_value = "")]
        network: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set the default network used when --network is not passed
    Network {
        /// public or private
        mode: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "pindrop_gateway=debug,pindrop_store=debug,info"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Auth { token, default } => cmd_auth(token, default).await,
        Commands::Gateways { command } => match command {
            GatewayCommands::Set { domain, default } => cmd_gateways_set(domain, default).await,
            GatewayCommands::Open { cid, network } => cmd_gateways_open(&cid, &network).await,
            GatewayCommands::Link {
                cid,
                seconds,
                network,
            } => cmd_gateways_link(&cid, seconds, &network).await,
        },
        Commands::Config { command } => match command {
            ConfigCommands::Network { mode } => cmd_config_network(&mode),
        },
    }
}

/// Authorize the CLI and pick a gateway
async fn cmd_auth(token: Option<String>, use_default: bool) -> Result<()> {
    let config = ApiConfig::from_env();
    let tokens = TokenStore::open_default()?;
    let gateways = GatewayStore::open_default()?;

    match authorize(&config, &tokens, &gateways, token, use_default)
        .await
        .context("Authorization failed")?
    {
        Some(domain) => {
            println!("{}", "Authentication successful!".green().bold());
            println!("{} {}", "Gateway saved:".green(), domain);
        }
        None => {
            println!("{}", "Authentication successful!".green().bold());
            println!("{}", "Gateway selection cancelled; run 'pindrop gateways set' later.".yellow());
        }
    }

    Ok(())
}

/// Set the gateway domain, directly or from the account listing
async fn cmd_gateways_set(domain: Option<String>, use_default: bool) -> Result<()> {
    let config = ApiConfig::from_env();
    let store = GatewayStore::open_default()?;
    let api = ApiClient::new(config, TokenStore::open_default()?);

    let spinner = if domain.is_none() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message("Fetching your gateways...");
        Some(pb)
    } else {
        None
    };

    let saved = configure_gateway(&api, &store, domain, use_default).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match saved.context("Problem setting the gateway")? {
        Some(domain) => println!("{} {}", "Gateway saved:".green().bold(), domain),
        None => println!("{}", "Selection cancelled, gateway unchanged.".yellow()),
    }

    Ok(())
}

/// Open a CID in the browser
async fn cmd_gateways_open(cid: &str, network: &str) -> Result<()> {
    let config = ApiConfig::from_env();
    let settings = SettingsStore::open_default()?;
    let resolver =
        NetworkResolver::from_settings(&settings).context("Problem reading the default network")?;
    let issuer = AccessLinkIssuer::new(
        ApiClient::new(config, TokenStore::open_default()?),
        GatewayStore::open_default()?,
    );
    let opener = LinkOpener::new(resolver, issuer, CommandLauncher::new());

    let url = opener
        .open_for_browsing(cid, network, None)
        .await
        .context("Problem opening the URL")?;

    println!("{} {}", "Opening URL:".cyan().bold(), url);
    Ok(())
}

/// Print a direct or signed link for a CID
async fn cmd_gateways_link(cid: &str, seconds: Option<i64>, network: &str) -> Result<()> {
    let config = ApiConfig::from_env();
    let settings = SettingsStore::open_default()?;
    let resolver =
        NetworkResolver::from_settings(&settings).context("Problem reading the default network")?;
    let mode = resolver.resolve(network)?;

    let issuer = AccessLinkIssuer::new(
        ApiClient::new(config, TokenStore::open_default()?),
        GatewayStore::open_default()?,
    );

    let outcome = issuer
        .issue(cid, seconds.unwrap_or(DEFAULT_LINK_LIFETIME_SECONDS), mode)
        .await
        .context("Problem creating the link")?;

    println!("{outcome}");
    Ok(())
}

/// Persist the default network setting
fn cmd_config_network(mode: &str) -> Result<()> {
    let mode = NetworkMode::parse(mode)?;
    let settings = SettingsStore::open_default()?;
    settings.set_default_network(mode)?;

    println!("{} {}", "Default network set to".green(), mode);
    Ok(())
}
