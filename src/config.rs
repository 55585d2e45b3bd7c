//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    renderer::{Color, Fog},
    world::DEFAULT_FOV,
};

/// Fog (and sky) colour.
pub const FOG_COLOR: Color = Color::rgb(100, 100, 100);

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "murder_bus", version, about = "Mode-7 style bus driving demo")]
pub struct Config {
    /// Directory holding road.bmp, bus.bmp and wheel.bmp.
    #[arg(long, default_value = "res")]
    pub assets: PathBuf,

    /// Frame-buffer width in pixels.
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(2..))]
    pub width: u32,

    /// Frame-buffer height in pixels.
    #[arg(long, default_value_t = 450, value_parser = clap::value_parser!(u32).range(2..))]
    pub height: u32,

    /// Frame-rate cap; 0 = uncapped.
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Exponential fog density per world unit.
    #[arg(long, default_value_t = 0.3)]
    pub fog_density: f32,

    /// Camera plane length (half field of view).
    #[arg(long, default_value_t = DEFAULT_FOV)]
    pub fov: f32,
}

impl Config {
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    pub fn fog(&self) -> Fog {
        Fog::new(FOG_COLOR, self.fog_density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo() {
        let cfg = Config::try_parse_from(["murder_bus"]).unwrap();
        assert_eq!(cfg.size(), (800, 450));
        assert_eq!(cfg.assets, PathBuf::from("res"));
        assert_eq!(cfg.fps, 60);
        assert_eq!(cfg.fog(), Fog::default());
        assert_eq!(cfg.fov, DEFAULT_FOV);
    }

    #[test]
    fn overrides_and_validation() {
        let cfg = Config::try_parse_from([
            "murder_bus",
            "--width",
            "320",
            "--height",
            "200",
            "--fog-density",
            "0.1",
            "--assets",
            "/tmp/res",
        ])
        .unwrap();
        assert_eq!(cfg.size(), (320, 200));
        assert_eq!(cfg.fog().density, 0.1);
        assert_eq!(cfg.assets, PathBuf::from("/tmp/res"));

        assert!(Config::try_parse_from(["murder_bus", "--height", "1"]).is_err());
    }
}
