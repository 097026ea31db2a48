//! Widgets for the window map: pane outlines and label floats.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Outline a pane's region on the window map.
pub fn render_pane_outline(frame: &mut Frame, area: Rect, style: Style) {
    let block = Block::default().borders(Borders::ALL).border_style(style);
    frame.render_widget(block, area);
}

/// Draw one label float: cleared, bordered, label centered.
pub fn render_label_float(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    text_style: Style,
    float_style: Style,
    border: BorderType,
) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border)
        .style(float_style);
    let paragraph = Paragraph::new(Line::from(Span::styled(label.to_string(), text_style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
