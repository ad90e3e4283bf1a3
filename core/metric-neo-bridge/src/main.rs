//! metric-neo payload inspector
//!
//! Hydrates a backend payload the same way the frontend does and prints the
//! result as JSON. Useful for checking what the backend actually emits.
//!
//! Usage:
//!   metric-neo-inspect --operation SessionLoadSession response.json
//!   metric-neo-inspect --entity Profile --strict < profile.json
//!   metric-neo-inspect --catalog

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use metric_neo_bridge::{BridgeConfig, HydrationPolicy, Operation, normalize};
use metric_neo_model::catalog;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "metric-neo-inspect")]
#[command(about = "Hydrate a metric-neo backend payload and print the result")]
struct Args {
    /// Payload file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Treat the payload as the envelope of this operation (binding name)
    #[arg(short, long, conflicts_with_all = ["entity", "catalog"])]
    operation: Option<Operation>,

    /// Treat the payload as a bare entity (or list) of this type
    #[arg(short, long, conflicts_with = "catalog")]
    entity: Option<String>,

    /// Print the entity catalog and exit
    #[arg(long)]
    catalog: bool,

    /// Fail on missing required fields instead of defaulting them
    #[arg(long)]
    strict: bool,

    /// Path to bridge.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.catalog {
        println!("{}", serde_json::to_string_pretty(catalog::all())?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => BridgeConfig::load_from(path),
        None => BridgeConfig::load(),
    };
    if args.strict {
        config.policy = HydrationPolicy::Strict;
    }
    let hydrator = config.hydrator();
    debug!(policy = ?hydrator.policy(), "hydrator ready");

    let text = read_input(args.input.as_ref())?;
    let value = normalize(text).context("payload is not well-formed JSON")?;

    let output = if let Some(operation) = args.operation {
        info!(%operation, "hydrating envelope");
        let outcome = operation.hydrate(&hydrator, &value)?;
        serde_json::to_value(&outcome)?
    } else if let Some(entity) = args.entity.as_deref() {
        let Some(descriptor) = catalog::lookup(entity) else {
            bail!("unknown entity type: {entity}");
        };
        info!(entity, "hydrating entity");
        hydrator.hydrate(&value, descriptor)?.to_value()
    } else {
        bail!("one of --operation, --entity or --catalog is required");
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
