use clap::Parser;
use frontdesk::{Registry, Shell, ShellOptions, config};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "frontdesk", version, about = "In-memory hotel front desk console")]
struct Args {
    /// TOML config file (eg: "frontdesk.toml")
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML room list replacing the default five rooms
    #[arg(long)]
    inventory: Option<PathBuf>,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Log filter directive, overridden by RUST_LOG (eg: "debug")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => config::Config::load(path)?,
        None => config::Config::default(),
    };
    let mut cfg = cfg.with_env()?;
    if args.no_color {
        cfg.color = false;
    }
    if let Some(path) = args.inventory {
        cfg.inventory = Some(path);
    }
    if let Some(level) = args.log_level {
        cfg.log_level = level;
    }

    init_tracing(&cfg.log_level)?;

    let registry = match &cfg.inventory {
        Some(path) => Registry::with_rooms(config::load_inventory(path)?),
        None => Registry::initialized(),
    };
    tracing::info!(rooms = registry.list_rooms().count(), "front desk open");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut shell = Shell::new(registry, stdin, stdout, ShellOptions::from(&cfg));
    shell.run()?;

    tracing::info!(bookings = shell.registry().list_bookings().count(), "front desk closed");
    Ok(())
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("{e}"))?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();
    Ok(())
}
