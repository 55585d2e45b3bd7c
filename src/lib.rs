//! Mode-7 style driving demo.
//!
//! * [`sim`] integrates the vehicle's arcade kinematics once per frame.
//! * [`world`] holds the camera pose and the decoded textures.
//! * [`renderer`] casts the textured floor, fogs it and composites the
//!   vehicle sprites into a 0xAARRGGBB frame-buffer.

pub mod config;
pub mod renderer;
pub mod sim;
pub mod world;
