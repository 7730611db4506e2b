pub mod model;
pub mod view;

pub use model::{Greeting, PromptState, Rect, slot_for_direction};
pub use view::draw;

pub const SLOT_COUNT: usize = 4;
pub const CENTER_SLOT: usize = 3;

pub const BUTTON_WIDTH: f64 = 120.0;
pub const BUTTON_HEIGHT: f64 = 48.0;
pub const BUTTON_GAP: f64 = 24.0;
pub const BUTTON_CORNER_RADIUS: f64 = 10.0;
pub const BUTTON_FONT_SIZE: f64 = 18.0;
pub const MESSAGE_FONT_SIZE: f64 = 32.0;
pub const FOOTER_FONT_SIZE: f64 = 11.0;
pub const FOOTER_MARGIN: f64 = 14.0;

/// (top, left) fractional offsets of the evading control's four slots:
/// top-left, bottom-right, bottom-left, center.
pub const SLOT_OFFSETS: [(f64, f64); SLOT_COUNT] =
    [(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.5, 0.5)];
