use glam::vec2;

use super::{Fog, Placement, Rect};
use crate::world::{Assets, Camera, Texture};

/// One sprite and where it goes.
#[derive(Clone, Copy, Debug)]
pub struct SpriteDraw<'a> {
    pub texture: &'a Texture,
    pub placement: Placement,
}

/// Everything one frame needs, borrowed from the caller.
pub struct Scene<'a> {
    pub camera: &'a Camera,
    pub floor: &'a Texture,
    pub fog: &'a Fog,
    /// Composited in order, back to front.
    pub sprites: &'a [SpriteDraw<'a>],
}

/// Bus cab over the whole screen, then the steering wheel centred on the
/// bottom edge (its lower half hangs off-screen) turned by `steer_deg`.
pub fn cockpit(assets: &Assets, steer_deg: f32, width: usize, height: usize) -> [SpriteDraw<'_>; 2] {
    let (ww, wh) = (assets.wheel.w as f32, assets.wheel.h as f32);
    let rect = Rect::new(
        width as f32 / 2.0 - ww / 2.0,
        height as f32 - wh / 2.0,
        ww,
        wh,
    );
    [
        SpriteDraw {
            texture: &assets.bus,
            placement: Placement::FullScreen,
        },
        SpriteDraw {
            texture: &assets.wheel,
            placement: Placement::Rotated {
                rect,
                angle_deg: steer_deg,
                pivot: vec2(ww / 2.0, wh / 2.0),
            },
        },
    ]
}
