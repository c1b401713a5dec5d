//! fab TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use fab_core::{config::Config, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Start the TUI over a loaded table.
///
/// `seed` pins the success-rate RNG for reproducible gauges; without it the
/// RNG is seeded from the OS.
pub fn run(
    table: Table,
    dataset_name: String,
    config: Config,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let theme = theme::Theme::load_default();
    let rng = match seed {
        Some(n) => StdRng::seed_from_u64(n),
        None => StdRng::from_entropy(),
    };
    App::new(table, dataset_name, config, theme, rng).run()
}
