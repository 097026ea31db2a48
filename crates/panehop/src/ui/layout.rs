//! Rect math for the window map.
//!
//! Pure functions mapping tmux pane geometry into frame areas.

use ratatui::layout::Rect;

/// Scale a rectangle given in tmux window cells into the frame area.
///
/// Edges are scaled independently so adjacent panes stay adjacent after
/// rounding; the result is clamped to the frame and never empty.
pub fn scale_rect(cell: Rect, window: (u16, u16), area: Rect) -> Rect {
    let (win_width, win_height) = window;
    if win_width == 0 || win_height == 0 || area.width == 0 || area.height == 0 {
        return Rect::new(area.x, area.y, area.width.max(1), area.height.max(1));
    }

    let scale = |value: u16, from: u16, to: u16| -> u16 {
        ((u32::from(value) * u32::from(to)) / u32::from(from)) as u16
    };

    let x0 = scale(cell.x, win_width, area.width).min(area.width.saturating_sub(1));
    let x1 = scale(cell.x.saturating_add(cell.width), win_width, area.width).min(area.width);
    let y0 = scale(cell.y, win_height, area.height).min(area.height.saturating_sub(1));
    let y1 = scale(cell.y.saturating_add(cell.height), win_height, area.height).min(area.height);

    Rect {
        x: area.x + x0,
        y: area.y + y0,
        width: (x1.saturating_sub(x0)).max(1),
        height: (y1.saturating_sub(y0)).max(1),
    }
}

/// Center a fixed-size rect inside `area`, clamping to its dimensions.
pub fn centered_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width).max(1);
    let height = height.min(area.height).max(1);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
