use crate::gui::confetti::ConfettiState;
use crate::gui::prompt::{
    BUTTON_GAP, BUTTON_HEIGHT, BUTTON_WIDTH, CENTER_SLOT, SLOT_COUNT, SLOT_OFFSETS,
};
use crate::input::{Direction, Point, PointerTracker, Viewport};
use derive_more::{AsRef, Deref, Display, From, Into};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef, Default)]
pub struct Greeting(String);

impl Greeting {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Maps a classified direction to a slot in the evasion palette. Shake picks
/// uniformly at random; everything else is a fixed assignment.
pub fn slot_for_direction(direction: Direction, rng: &mut impl Rng) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
        Direction::Shake => rng.random_range(0..SLOT_COUNT),
    }
}

pub struct PromptState {
    pub slot_index: usize,
    pub greeting: Option<Greeting>,
    pub confetti_active: bool,
    pub pointer: PointerTracker,
    pub viewport: Viewport,
    pub confetti: ConfettiState,
}

impl PromptState {
    pub fn new() -> Self {
        Self {
            slot_index: CENTER_SLOT,
            greeting: None,
            confetti_active: false,
            pointer: PointerTracker::new(),
            viewport: Viewport::default(),
            confetti: ConfettiState::new(),
        }
    }

    /// Still showing the Yes/No prompt; flips to false once confirmed, for
    /// the remaining lifetime of the surface.
    pub fn is_prompting(&self) -> bool {
        self.greeting.is_none()
    }

    /// Moves the evading control to the slot the direction selects. Returns
    /// whether a visible change happened (confirmed state renders no evading
    /// control, so relocations there never need a redraw).
    pub fn relocate(&mut self, direction: Direction, rng: &mut impl Rng) -> bool {
        let new_index = slot_for_direction(direction, rng);
        let changed = new_index != self.slot_index;
        self.slot_index = new_index;
        changed && self.is_prompting()
    }

    /// Confirm transition; one-way. Returns false if already confirmed.
    pub fn confirm(&mut self, greeting: Greeting, rng: &mut impl Rng, particles: usize) -> bool {
        if !self.is_prompting() {
            return false;
        }
        self.greeting = Some(greeting);
        self.confetti_active = true;
        self.confetti.burst(self.viewport, particles, rng);
        true
    }

    pub fn finish_confetti(&mut self) {
        self.confetti_active = false;
        self.confetti.clear();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The stationary "Yes" control, anchored left of the viewport center.
    pub fn confirm_rect(&self) -> Rect {
        Rect::new(
            self.viewport.width / 2.0 - BUTTON_WIDTH - BUTTON_GAP / 2.0,
            self.viewport.height / 2.0 - BUTTON_HEIGHT / 2.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    /// The evading "No" control at its current slot. Fractional offsets are
    /// scaled so the control stays fully on-screen at the edge slots.
    pub fn evade_rect(&self) -> Rect {
        let (top, left) = SLOT_OFFSETS[self.slot_index];
        Rect::new(
            left * (self.viewport.width - BUTTON_WIDTH),
            top * (self.viewport.height - BUTTON_HEIGHT),
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }
}

impl Default for PromptState {
    fn default() -> Self {
        Self::new()
    }
}
