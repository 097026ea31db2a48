//! Application wiring.
//!
//! One invocation is one pick cycle: load config, size the window, build
//! the tmux/crossterm collaborators, run the picker, trace the outcome.
//! Cancelled and unresolved cycles are normal returns; only setup and
//! tmux failures surface as errors.

use std::env;
use std::fs::File;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::load_config;
use crate::input::CrosstermKeys;
use crate::overlay::TmuxOverlay;
use crate::panes::{window_size, TmuxPaneSource};
use crate::picker::{pick, Outcome};

pub fn run() -> Result<(), String> {
    init_tracing();

    let config = load_config(None).map_err(|err| err.to_string())?;
    let window = window_size(&config.tmux)?;

    let mut source = TmuxPaneSource::new(config.tmux.clone());
    let mut overlay = TmuxOverlay::new(window);
    let mut keys = CrosstermKeys::new(config.cancel.clone());

    match pick(&mut source, &mut overlay, &mut keys, &config)? {
        Outcome::Picked(pane) => debug!(pane = %pane.id, index = pane.index, "pane picked"),
        Outcome::Cancelled => debug!("pick cancelled"),
        Outcome::Unresolved => warn!("pick unresolved after round limit"),
    }
    Ok(())
}

/// Log to the file named by `PANEHOP_LOG`, or not at all. Stdout belongs
/// to the overlay while the picker runs.
fn init_tracing() {
    let Ok(path) = env::var("PANEHOP_LOG") else {
        return;
    };
    if path.trim().is_empty() {
        return;
    }
    let Ok(file) = File::create(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
