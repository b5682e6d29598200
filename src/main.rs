//! APM demo API entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use apm_demo_api::api::{create_router, openapi, AppState};
use apm_demo_api::config::Config;
use apm_demo_api::metrics;
use apm_demo_api::utils::{bind_listener, shutdown_signal};

/// Simulated APM telemetry API.
#[derive(Parser, Debug)]
#[command(name = "apm-demo-api")]
#[command(about = "Serves simulated monitoring telemetry for the APM dashboard demo")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Address to bind (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Address to bind (overrides HOST).
        #[arg(long)]
        host: Option<String>,

        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so LOG_JSON and RUST_LOG apply
    let config = Config::load();
    let (log_level, log_json) = match &config {
        Ok(c) => (c.rust_log.clone(), c.log_json),
        Err(_) => ("info".to_string(), false),
    };

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("apm_demo_api=debug,info")
    } else {
        EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    // Initialize metrics
    metrics::init_metrics();

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(config),
        Some(Command::Openapi) => cmd_openapi(config),
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await,
        None => cmd_serve(config, args.host, args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("APM DEMO API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Name: {} {}", config.app_name, config.app_version);
    println!("  Listen: {}:{}", config.host, config.port);
    match config.metrics_port {
        Some(port) => println!("  Metrics: {}:{}", config.host, port),
        None => println!("  Metrics: Disabled"),
    }
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document as pretty JSON.
fn cmd_openapi(config: Config) -> anyhow::Result<()> {
    println!("{}", openapi::to_pretty_json(&config.identity())?);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    // Override with CLI args if provided
    if let Some(host) = host_override {
        config.host = host;
    }
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Serving as {} {}", config.app_name, config.app_version);

    if let Some(addr) = config.metrics_addr()? {
        metrics::install_exporter(addr)?;
        info!("Prometheus exporter listening on {}", addr);
    }

    // Create app state
    let app_state = AppState::new(config.identity());

    // Start HTTP server
    let addr = config.bind_addr()?;
    let listener = bind_listener(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
