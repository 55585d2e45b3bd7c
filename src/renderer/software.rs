//! ---------------------------------------------------------------------------
//! CPU back-end
//!
//! * Fills a [`FrameBuffer`] in **0xAARRGGBB** format.
//! * Floor first (row by row, see [`floor`]), then sprites in submission
//!   order, so no depth buffer is needed.
//! ---------------------------------------------------------------------------

use crate::{
    renderer::{Argb, Color, Fog, FrameBuffer, Placement, Rect, Renderer},
    world::{Camera, Texture},
};

pub mod floor;
pub mod sprites;

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    frame: FrameBuffer,
}

impl Software {
    /// Borrow the frame being built (for inspection between draw calls).
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize, clear: Color) {
        // (re)allocate if resolution changed
        self.frame.resize(w, h);
        self.frame.fill(clear.opaque().to_argb());
    }

    fn draw_floor(&mut self, camera: &Camera, floor: &Texture, fog: &Fog) {
        floor::cast_floor(&mut self.frame, camera, floor, fog);
    }

    fn draw_sprite(&mut self, sprite: &Texture, placement: Placement) {
        match placement {
            Placement::FullScreen => {
                let rect = Rect::new(
                    0.0,
                    0.0,
                    self.frame.width() as f32,
                    self.frame.height() as f32,
                );
                sprites::blit_scaled(&mut self.frame, sprite, rect);
            }
            Placement::Scaled(rect) => sprites::blit_scaled(&mut self.frame, sprite, rect),
            Placement::Rotated {
                rect,
                angle_deg,
                pivot,
            } => sprites::blit_rotated(&mut self.frame, sprite, rect, angle_deg, pivot),
        }
    }

    fn end_frame<F, R>(&mut self, submit: F) -> R
    where
        F: FnOnce(&[Argb], usize, usize) -> R,
    {
        debug_assert_eq!(self.frame.stride(), self.frame.width());
        submit(self.frame.pixels(), self.frame.width(), self.frame.height())
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{RendererExt, Scene, SpriteDraw};
    use glam::vec2;

    const W: usize = 16;
    const H: usize = 8;

    #[test]
    fn frame_has_sky_floor_and_sprite() {
        let fog = Fog::default();
        let road = Texture::solid("road", 4, 4, Color::rgb(0, 200, 0));
        let marker = Texture::solid("marker", 1, 1, Color::rgb(255, 0, 0));
        let camera = Camera::new(vec2(0.5, 0.0), vec2(0.0, 1.0), 0.01, 0.5);
        let sprites = [SpriteDraw {
            texture: &marker,
            placement: Placement::Scaled(Rect::new(0.0, 0.0, 1.0, 1.0)),
        }];
        let scene = Scene {
            camera: &camera,
            floor: &road,
            fog: &fog,
            sprites: &sprites,
        };

        let mut sw = Software::default();
        let (len, w, h) = sw.draw_frame(W, H, &scene, |fb, w, h| (fb.len(), w, h));
        assert_eq!((len, w, h), (W * H, W, H));

        let fb = sw.frame();
        assert_eq!(fb.get(0, 0), Some(0xFF_FF0000));
        assert_eq!(fb.get(5, 1), Some(fog.color.to_argb()));
        // bottom row is close: mostly road colour, some fog
        let px = Color::from_argb(fb.get(5, H - 1).unwrap());
        assert!(px.g > px.r && px.g > 100);
    }

    #[test]
    fn begin_frame_resizes_and_clears() {
        let mut sw = Software::default();
        sw.begin_frame(4, 2, Color::rgb(1, 2, 3));
        sw.begin_frame(3, 3, Color::rgb(9, 9, 9));
        let fb = sw.frame();
        assert_eq!((fb.width(), fb.height()), (3, 3));
        assert!(fb.pixels().iter().all(|&p| p == 0xFF_090909));
    }
}
