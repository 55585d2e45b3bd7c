mod clock;
mod controls;
mod vehicle;

pub use clock::FrameClock;
pub use controls::{Controls, Steer};
pub use vehicle::{START_HEIGHT, Tuning, Vehicle, lerp};
