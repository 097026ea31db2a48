//! Label overlay rendering.
//!
//! Draws a miniature map of the tmux window in the alternate screen: one
//! outlined region per candidate pane with its label in a small float.
//! The terminal is acquired lazily on `show` so short-circuited picks
//! never touch the screen, and released exactly once on `hide`.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Modifier, Style};
use ratatui::{Frame, Terminal};

use crate::config::OverlayConfig;
use crate::labels::Candidate;
use crate::picker::LabelOverlay;
use crate::ui::{
    centered_fixed, parse_border_type, parse_color, render_label_float, render_pane_outline,
    scale_rect,
};

pub struct TmuxOverlay {
    window: (u16, u16),
    terminal: Option<Terminal<CrosstermBackend<io::Stdout>>>,
}

impl TmuxOverlay {
    pub fn new(window: (u16, u16)) -> Self {
        Self {
            window,
            terminal: None,
        }
    }
}

impl LabelOverlay for TmuxOverlay {
    fn show(&mut self, candidates: &[Candidate], config: &OverlayConfig) -> Result<(), String> {
        if self.terminal.is_some() {
            return Ok(());
        }
        enable_raw_mode().map_err(|err| err.to_string())?;
        let mut stdout = io::stdout();
        stdout
            .execute(EnterAlternateScreen)
            .map_err(|err| err.to_string())?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| err.to_string())?;
        terminal.hide_cursor().map_err(|err| err.to_string())?;
        let window = self.window;
        terminal
            .draw(|frame| render_window_map(frame, candidates, config, window))
            .map_err(|err| err.to_string())?;
        self.terminal = Some(terminal);
        Ok(())
    }

    fn hide(&mut self) -> Result<(), String> {
        let Some(mut terminal) = self.terminal.take() else {
            return Ok(());
        };
        disable_raw_mode().map_err(|err| err.to_string())?;
        terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .map_err(|err| err.to_string())?;
        terminal.show_cursor().map_err(|err| err.to_string())?;
        Ok(())
    }
}

fn render_window_map(
    frame: &mut Frame,
    candidates: &[Candidate],
    config: &OverlayConfig,
    window: (u16, u16),
) {
    let area = frame.area();
    let background = parse_color(&config.background_hl, Color::Black);
    let text = parse_color(&config.text_hl, Color::White);
    let border = parse_border_type(&config.border_style);
    let outline_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);
    let float_style = Style::default().bg(background);
    let text_style = Style::default()
        .fg(text)
        .bg(background)
        .add_modifier(Modifier::BOLD);

    for candidate in candidates {
        let pane = &candidate.pane;
        let cell = scale_rect(
            ratatui::layout::Rect::new(pane.left, pane.top, pane.width, pane.height),
            window,
            area,
        );
        render_pane_outline(frame, cell, outline_style);

        let label = if config.show_uppercase {
            candidate.label.to_uppercase()
        } else {
            candidate.label.clone()
        };
        let float = centered_fixed(cell, config.float_width, config.float_height);
        render_label_float(frame, float, &label, text_style, float_style, border);
    }
}
