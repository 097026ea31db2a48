//! Pure rendering helpers.
//!
//! Rect math, config-string parsing and widget builders with no state
//! mutation and no terminal access, kept separate so the overlay drawing
//! stays testable.
//!
//! Submodules:
//! - layout: scaling pane geometry into the frame, fixed-size centering
//! - style: color and border-style parsing with safe fallbacks
//! - widgets: pane outlines and label floats

mod layout;
mod style;
mod widgets;

pub use layout::{centered_fixed, scale_rect};
pub use style::{parse_border_type, parse_color};
pub use widgets::{render_label_float, render_pane_outline};
