//! Pane model and tmux-backed enumeration.
//!
//! One `list-panes` call per pick cycle yields ids, indexes, geometry and
//! flags for every pane in the current window. Dead panes are dropped;
//! the rest are sorted by index so label assignment is stable.

use tracing::debug;

use crate::config::TmuxConfig;
use crate::picker::PaneSource;
use crate::tmux::run_tmux_expect;

/// One tmux pane, valid for the duration of a single pick cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    /// tmux pane id (`%0`, `%1`, ...), stable while the pane lives.
    pub id: String,
    /// 1-based pane index within the window.
    pub index: u32,
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    pub active: bool,
}

const LIST_PANES_FORMAT: &str = "#{pane_id}\t#{pane_index}\t#{pane_left}\t#{pane_top}\t\
#{pane_width}\t#{pane_height}\t#{pane_active}\t#{pane_dead}";

pub fn list_selectable_panes(config: &TmuxConfig) -> Result<Vec<Pane>, String> {
    let stdout = run_tmux_expect(config, &["list-panes", "-F", LIST_PANES_FORMAT])?;
    let mut panes: Vec<Pane> = stdout.lines().filter_map(parse_pane_line).collect();
    panes.sort_by_key(|pane| pane.index);
    debug!(count = panes.len(), "enumerated panes");
    Ok(panes)
}

pub fn window_size(config: &TmuxConfig) -> Result<(u16, u16), String> {
    let stdout = run_tmux_expect(
        config,
        &["display-message", "-p", "#{window_width}\t#{window_height}"],
    )?;
    let mut fields = stdout.split('\t');
    let width = fields.next().and_then(|f| f.trim().parse().ok());
    let height = fields.next().and_then(|f| f.trim().parse().ok());
    match (width, height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(format!("Unexpected window size output: '{stdout}'")),
    }
}

pub fn select_pane(config: &TmuxConfig, pane: &Pane) -> Result<(), String> {
    run_tmux_expect(config, &["select-pane", "-t", &pane.id]).map(|_| ())
}

/// Parse one `list-panes` line. Returns `None` for dead panes and for
/// lines that do not match the format (tmux version drift).
fn parse_pane_line(line: &str) -> Option<Pane> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 8 {
        return None;
    }
    if fields[7] == "1" {
        return None;
    }
    Some(Pane {
        id: fields[0].to_string(),
        index: fields[1].parse().ok()?,
        left: fields[2].parse().ok()?,
        top: fields[3].parse().ok()?,
        width: fields[4].parse().ok()?,
        height: fields[5].parse().ok()?,
        active: fields[6] == "1",
    })
}

/// tmux-backed `PaneSource`. Enumerates once and reuses the listing for
/// the rest of the cycle, so `active_pane` and `selectable_panes` agree.
pub struct TmuxPaneSource {
    config: TmuxConfig,
    cached: Option<Vec<Pane>>,
}

impl TmuxPaneSource {
    pub fn new(config: TmuxConfig) -> Self {
        Self {
            config,
            cached: None,
        }
    }

    fn panes(&mut self) -> Result<&[Pane], String> {
        if self.cached.is_none() {
            self.cached = Some(list_selectable_panes(&self.config)?);
        }
        Ok(self.cached.as_deref().unwrap_or_default())
    }
}

impl PaneSource for TmuxPaneSource {
    fn selectable_panes(&mut self) -> Result<Vec<Pane>, String> {
        self.panes().map(<[Pane]>::to_vec)
    }

    fn active_pane(&mut self) -> Result<Option<Pane>, String> {
        Ok(self.panes()?.iter().find(|pane| pane.active).cloned())
    }

    fn activate(&mut self, pane: &Pane) -> Result<(), String> {
        debug!(pane = %pane.id, "activating pane");
        select_pane(&self.config, pane)
    }
}
