use crate::input::{Accel, Direction};

/// Events raised by the background services and bridged into the GUI.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Motion(Accel),
    Steer(Direction),
    ConfigReload,
}
