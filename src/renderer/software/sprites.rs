//! Screen-space sprite compositing.
//!
//! Both blits walk the *destination* pixels and map each pixel centre back
//! into the source texture (nearest neighbour), so scaled or rotated
//! sprites never leave holes. Source alpha is blended source-over.

use glam::Vec2;

use crate::{
    renderer::{Color, FrameBuffer, Rect},
    world::Texture,
};

/// Clipped pixel span `[lo, hi)` covering `min..max` on an axis of `len`.
#[inline]
fn span(min: f32, max: f32, len: usize) -> (usize, usize) {
    let lo = min.floor().max(0.0) as usize;
    let hi = (max.ceil().max(0.0) as usize).min(len);
    (lo, hi)
}

/// Texel under rect-local point `local` (in `0..rect.w`, `0..rect.h`).
#[inline]
fn texel_at(tex: &Texture, rect: &Rect, local: Vec2) -> Color {
    let u = ((local.x / rect.w * tex.w as f32) as usize).min(tex.w - 1);
    let v = ((local.y / rect.h * tex.h as f32) as usize).min(tex.h - 1);
    Color::from_argb(tex.pixels[v * tex.w + u])
}

#[inline]
fn plot(fb: &mut FrameBuffer, x: usize, y: usize, src: Color) {
    if src.a == 0 {
        return;
    }
    if let Some(dst) = fb.get(x, y) {
        fb.set(x, y, src.over(Color::from_argb(dst)).to_argb());
    }
}

/// Axis-aligned copy of `tex` stretched to `dest`, clipped to the frame.
pub fn blit_scaled(fb: &mut FrameBuffer, tex: &Texture, dest: Rect) {
    if dest.w <= 0.0 || dest.h <= 0.0 || tex.w == 0 || tex.h == 0 {
        return;
    }
    let (x0, x1) = span(dest.x, dest.x + dest.w, fb.width());
    let (y0, y1) = span(dest.y, dest.y + dest.h, fb.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let centre = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if !dest.contains(centre) {
                continue;
            }
            plot(fb, x, y, texel_at(tex, &dest, centre - dest.origin()));
        }
    }
}

/// `dest` turned clockwise (y points down) by `angle_deg` about `pivot`,
/// where `pivot` is relative to the rect's top-left corner.
pub fn blit_rotated(fb: &mut FrameBuffer, tex: &Texture, dest: Rect, angle_deg: f32, pivot: Vec2) {
    if dest.w <= 0.0 || dest.h <= 0.0 || tex.w == 0 || tex.h == 0 || !angle_deg.is_finite() {
        return;
    }
    let centre = dest.origin() + pivot;
    let fwd = Vec2::from_angle(angle_deg.to_radians());
    let inv = Vec2::from_angle(-angle_deg.to_radians());

    /* screen bounding box of the rotated rect ------------------------- */
    let corners = [
        Vec2::new(dest.x, dest.y),
        Vec2::new(dest.x + dest.w, dest.y),
        Vec2::new(dest.x, dest.y + dest.h),
        Vec2::new(dest.x + dest.w, dest.y + dest.h),
    ]
    .map(|c| centre + fwd.rotate(c - centre));
    let lo = corners.iter().fold(Vec2::splat(f32::MAX), |a, &c| a.min(c));
    let hi = corners.iter().fold(Vec2::splat(f32::MIN), |a, &c| a.max(c));

    let (x0, x1) = span(lo.x, hi.x, fb.width());
    let (y0, y1) = span(lo.y, hi.y, fb.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let src = centre + inv.rotate(p - centre);
            if !dest.contains(src) {
                continue;
            }
            plot(fb, x, y, texel_at(tex, &dest, src - dest.origin()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    const A: u32 = 0xFF_AA0000;
    const B: u32 = 0xFF_00BB00;
    const C: u32 = 0xFF_0000CC;
    const D: u32 = 0xFF_DDDDDD;

    fn abcd() -> Texture {
        Texture::from_pixels("abcd", 2, 2, vec![A, B, C, D]).unwrap()
    }

    fn dump(fb: &FrameBuffer) -> Vec<u32> {
        (0..fb.height()).flat_map(|y| fb.row(y).to_vec()).collect()
    }

    #[test]
    fn scaled_blit_doubles_texels() {
        let mut fb = FrameBuffer::new(4, 4);
        blit_scaled(&mut fb, &abcd(), Rect::new(0.0, 0.0, 4.0, 4.0));
        assert_eq!(
            dump(&fb),
            vec![A, A, B, B, A, A, B, B, C, C, D, D, C, C, D, D]
        );
    }

    #[test]
    fn scaled_blit_clips_at_edges() {
        let mut fb = FrameBuffer::new(3, 3);
        blit_scaled(&mut fb, &abcd(), Rect::new(-1.0, 2.0, 2.0, 2.0));
        assert_eq!(dump(&fb), vec![0, 0, 0, 0, 0, 0, B, 0, 0]);
    }

    #[test]
    fn transparent_texels_keep_background() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.fill(0xFF_123456);
        let tex = Texture::from_pixels("hole", 2, 1, vec![0x00_FFFFFF, A]).unwrap();
        blit_scaled(&mut fb, &tex, Rect::new(0.0, 0.0, 2.0, 1.0));
        assert_eq!(dump(&fb), vec![0xFF_123456, A]);
    }

    #[test]
    fn zero_rotation_matches_scaled() {
        let rect = Rect::new(1.0, 0.0, 2.0, 2.0);
        let mut a = FrameBuffer::new(4, 3);
        let mut b = FrameBuffer::new(4, 3);
        blit_scaled(&mut a, &abcd(), rect);
        blit_rotated(&mut b, &abcd(), rect, 0.0, vec2(1.0, 1.0));
        assert_eq!(dump(&a), dump(&b));
    }

    #[test]
    fn quarter_turn_is_clockwise() {
        let mut fb = FrameBuffer::new(2, 2);
        blit_rotated(&mut fb, &abcd(), Rect::new(0.0, 0.0, 2.0, 2.0), 90.0, vec2(1.0, 1.0));
        assert_eq!(dump(&fb), vec![C, A, D, B]);
    }

    #[test]
    fn rotated_blit_off_screen_is_harmless() {
        let mut fb = FrameBuffer::new(4, 4);
        blit_rotated(&mut fb, &abcd(), Rect::new(-50.0, 90.0, 8.0, 8.0), 33.0, vec2(4.0, 4.0));
        blit_rotated(&mut fb, &abcd(), Rect::new(0.0, 0.0, 4.0, 4.0), f32::NAN, vec2(2.0, 2.0));
        assert!(dump(&fb).iter().all(|&p| p == 0));
    }
}
