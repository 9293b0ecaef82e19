//! Polymarket prompt generator entry point.

use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use polymarket_prompt::api::{create_router, AppState};
use polymarket_prompt::config::Config;
use polymarket_prompt::market::extract_slug;
use polymarket_prompt::metrics;
use polymarket_prompt::prompt::{PromptGenerator, PromptTemplate};
use polymarket_prompt::utils::shutdown_signal;

/// Polymarket prompt generator.
#[derive(Parser, Debug)]
#[command(name = "polymarket-prompt")]
#[command(about = "Build an LLM analysis prompt from a Polymarket event URL")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Polymarket event URL (shorthand for `prompt <URL>`).
    url: Option<String>,

    /// Leave per-market volume out of the prompt.
    #[arg(long)]
    no_volume: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the prompt for an event URL.
    Prompt {
        /// Polymarket event URL.
        url: String,

        /// Leave per-market volume out of the prompt.
        #[arg(long)]
        no_volume: bool,
    },

    /// Print the slug extracted from an event URL.
    Slug {
        /// Polymarket event URL.
        url: String,
    },

    /// Serve prompts over HTTP.
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging; stdout is reserved for the prompt
    let filter = if args.verbose {
        EnvFilter::new("polymarket_prompt=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match args.command {
        Some(Command::Prompt { url, no_volume }) => cmd_prompt(&url, no_volume).await,
        Some(Command::Slug { url }) => cmd_slug(&url),
        Some(Command::Serve { port }) => cmd_serve(port).await,
        Some(Command::CheckConfig) => cmd_check_config(),
        None => match args.url {
            Some(url) => cmd_prompt(&url, args.no_volume).await,
            None => {
                use clap::CommandFactory;
                Args::command().print_help()?;
                Ok(())
            }
        },
    }
}

/// Load and validate configuration.
fn load_config() -> anyhow::Result<Config> {
    Config::load_validated().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e.into()
    })
}

/// Build the generator described by config.
fn build_generator(config: &Config) -> anyhow::Result<PromptGenerator> {
    PromptGenerator::from_config(config).context("failed to load prompt template")
}

/// Print the prompt for one event URL.
async fn cmd_prompt(url: &str, no_volume: bool) -> anyhow::Result<()> {
    let config = load_config()?;
    let generator = build_generator(&config)?;

    let include_volume = config.include_volume && !no_volume;
    let prompt = generator.generate(url, include_volume).await;

    println!("{}", prompt);
    Ok(())
}

/// Print the slug for one event URL.
fn cmd_slug(url: &str) -> anyhow::Result<()> {
    let slug = extract_slug(url)?;
    println!("{}", slug);
    Ok(())
}

/// Run the HTTP server.
async fn cmd_serve(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = load_config()?;
    let port = port_override.unwrap_or(config.port);

    let handle = metrics::install_prometheus().context("failed to install metrics recorder")?;
    let generator = build_generator(&config)?;

    let state = AppState::new(generator, config.include_volume).with_metrics(handle);
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("POLYMARKET PROMPT - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Load prompt template
    print!("Loading prompt template... ");
    let template = match PromptTemplate::from_config(&config) {
        Ok(t) => {
            println!("OK");
            t
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Prompt template load failed"));
        }
    };

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Events Endpoint: {}", config.events_url());
    println!("  Include Volume: {}", config.include_volume);
    println!(
        "  Template: {}",
        if template.is_builtin() { "built-in" } else { "custom" }
    );
    if let Some(path) = &config.prompt_preamble_path {
        println!("  Preamble File: {}", path.display());
    }
    if let Some(path) = &config.prompt_instructions_path {
        println!("  Instructions File: {}", path.display());
    }
    println!("  Server Port: {}", config.port);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
