use std::path::Path;

use super::texture::{Texture, TextureError};

pub const ROAD_FILE: &str = "road.bmp";
pub const BUS_FILE: &str = "bus.bmp";
pub const WHEEL_FILE: &str = "wheel.bmp";

/// Every image the demo needs, loaded once at start-up.
pub struct Assets {
    /// Floor texture; height is guaranteed to be a power of two.
    pub road: Texture,
    /// Cab overlay, stretched over the whole screen.
    pub bus: Texture,
    /// Steering wheel, drawn rotated at the bottom centre.
    pub wheel: Texture,
}

impl Assets {
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, TextureError> {
        let dir = dir.as_ref();
        let road = Texture::from_file(dir.join(ROAD_FILE))?.require_pow2_height()?;
        let bus = Texture::from_file(dir.join(BUS_FILE))?;
        let wheel = Texture::from_file(dir.join(WHEEL_FILE))?;

        for t in [&road, &bus, &wheel] {
            log::info!("loaded texture {} ({}x{})", t.name, t.w, t.h);
        }
        Ok(Self { road, bus, wheel })
    }
}
