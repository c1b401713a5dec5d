use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fab", about = "Terminal failure-analysis cookbook")]
struct Cli {
    /// Path to the cookbook CSV. Falls back to `[dataset].path` in the config.
    dataset: Option<PathBuf>,

    /// Pin the success-rate RNG to a fixed seed (reproducible gauges).
    #[arg(long)]
    seed: Option<u64>,

    /// Write debug logs to /tmp/fab-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/fab-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fab debug log started — tail -f /tmp/fab-debug.log");
    }

    let config = fab_core::config::Config::load()
        .unwrap_or_else(|_| fab_core::config::Config::defaults());

    let dataset = cli.dataset.unwrap_or_else(|| config.dataset.path.clone());

    // A table is required before any search can run; a load failure is
    // reported and the TUI never starts.
    let table = fab_core::dataset::load(&dataset)
        .with_context(|| format!("cannot load cookbook {}", dataset.display()))?;

    let dataset_name = dataset
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dataset.display().to_string());

    fab_tui::run(table, dataset_name, config, cli.seed)
}
