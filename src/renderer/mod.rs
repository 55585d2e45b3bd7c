//! Rendering abstraction layer.
//!
//! *The game loop never touches a pixel buffer directly.*
//! Each frame it describes a [`Scene`] (camera, floor texture, fog and a
//! few screen-space sprites) and hands it to a type implementing
//! [`Renderer`].
//!
//! * The floor occupies the lower half of the screen; the upper half keeps
//!   the clear colour, which doubles as the sky.
//! * Sprites are composited afterwards, in order, with alpha blending.

use glam::Vec2;

use crate::world::{Camera, Texture};

pub mod color;
pub mod fog;
pub mod framebuffer;
pub mod scene;
pub mod software;

pub use color::Color;
pub use fog::Fog;
pub use framebuffer::{FrameBuffer, FrameBufferError};
pub use scene::{Scene, SpriteDraw, cockpit};
pub use software::Software;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Argb = u32;

/// Screen-space rectangle in pixels; `x, y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.w && p.y < self.y + self.h
    }
}

/// Where a sprite lands on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Stretched over the whole frame.
    FullScreen,
    /// Axis-aligned, scaled to fill `Rect`.
    Scaled(Rect),
    /// `Rect` turned clockwise by `angle_deg` about `pivot`, which is
    /// relative to the rectangle's top-left corner.
    Rotated {
        rect: Rect,
        angle_deg: f32,
        pivot: Vec2,
    },
}

/// A renderer that owns an internal frame-buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure and
/// returns whatever the closure returns.
pub trait Renderer {
    /// (Re)allocate for the requested resolution and clear to `clear`.
    fn begin_frame(&mut self, width: usize, height: usize, clear: Color);

    /// Floor-cast `floor` into the lower half of the frame.
    fn draw_floor(&mut self, camera: &Camera, floor: &Texture, fog: &Fog);

    /// Composite one sprite over what has been drawn so far.
    fn draw_sprite(&mut self, sprite: &Texture, placement: Placement);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Argb], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F, R>(&mut self, submit: F) -> R
    where
        F: FnOnce(&[Argb], usize, usize) -> R;
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F, R>(&mut self, width: usize, height: usize, scene: &Scene, submit: F) -> R
    where
        F: FnOnce(&[Argb], usize, usize) -> R,
    {
        self.begin_frame(width, height, scene.fog.color);
        self.draw_floor(scene.camera, scene.floor, scene.fog);
        for s in scene.sprites {
            self.draw_sprite(s.texture, s.placement);
        }
        self.end_frame(submit)
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
