mod assets;
mod camera;
mod texture;

pub use assets::{Assets, BUS_FILE, ROAD_FILE, WHEEL_FILE};
pub use camera::{Camera, DEFAULT_FOV};
pub use texture::{Texture, TextureError};
