pub mod app;
pub mod confetti;
pub mod prompt;
pub mod theme;
