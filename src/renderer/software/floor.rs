//! Per-row floor casting (Mode-7 style).
//!
//! Every screen row below the horizon sees the floor at one fixed
//! distance, so a row is an affine walk through texture space:
//!
//! ```text
//! p        = y - H/2                     rows below the horizon
//! dist     = height * H / p
//! start    = pos + dist * (dir - plane)  leftmost column
//! step     = dist * 2 * plane / W        per column
//! ```
//!
//! Columns are not wrapped; anything left or right of the texture gets
//! [`Color::FALLBACK`]. Rows wrap with `& (h - 1)`, so the texture height
//! must be a power of two.

use crate::{
    renderer::{Color, Fog, FrameBuffer},
    world::{Camera, Texture},
};

/// Distance to the floor seen by the row `p` pixels below the horizon.
/// `None` on the horizon itself, where the ray never meets the floor.
#[inline]
pub fn row_distance(cam_height: f32, screen_h: usize, p: usize) -> Option<f32> {
    (p > 0).then(|| cam_height * screen_h as f32 / p as f32)
}

/// Texture column for world `x`: `floor(w * x)`, unwrapped.
#[inline]
pub fn texel_col(x: f32, tex_w: usize) -> i32 {
    (tex_w as f32 * x).floor() as i32
}

/// Texture row for world `y`, repeating once per world unit.
///
/// `fract` keeps the sign of `y`; the bitmask then folds negative rows
/// back into range the same way two's-complement wraparound would.
#[inline]
pub fn texel_row(y: f32, tex_h: usize) -> i32 {
    ((tex_h as f32 * y.fract()).floor() as i32) & (tex_h as i32 - 1)
}

/// Overwrite rows `height/2 ..` of `fb` with the fogged floor.
/// Rows above are left as they are.
///
/// The horizon row (`p == 0`) is infinitely far away and gets the opaque
/// fog colour.
pub fn cast_floor(fb: &mut FrameBuffer, cam: &Camera, tex: &Texture, fog: &Fog) {
    let (w, h) = (fb.width(), fb.height());
    if w == 0 || h == 0 {
        return;
    }
    debug_assert!(tex.h.is_power_of_two(), "floor texture height must be 2^n");

    let half = h / 2;
    let ray0 = cam.ray_left();
    let ray1 = cam.ray_right();
    let horizon = fog.color.opaque().to_argb();

    for y in half..h {
        let row = fb.row_mut(y);
        let Some(dist) = row_distance(cam.height, h, y - half) else {
            row.fill(horizon);
            continue;
        };

        let step = dist * (ray1 - ray0) / w as f32;
        let mut floor = cam.pos + dist * ray0;

        // constant along the row
        let fog_f = fog.factor(dist);

        for px in row.iter_mut() {
            let tx = texel_col(floor.x, tex.w);
            let ty = texel_row(floor.y, tex.h);

            let texel = tex
                .sample(tx, ty)
                .map_or(Color::FALLBACK, Color::from_argb);

            *px = fog.mix(texel, fog_f).to_argb();
            floor += step;
        }
    }
}
