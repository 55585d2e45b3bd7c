// Decoded images, kept CPU-side for the software renderer.
// Everything is converted to 0xAARRGGBB on load so the hot loops never
// branch on pixel format.

use std::path::{Path, PathBuf};

use crate::renderer::{Argb, color::Color};

/// Things that can go wrong while building a texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to load `{path}`")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Pixel count does not match `w * h`, or the image is empty.
    #[error("texture `{name}` has bad dimensions {w}x{h} for {len} pixels")]
    Dimensions {
        name: String,
        w: usize,
        h: usize,
        len: usize,
    },

    /// Floor lookups wrap rows with a bitmask.
    #[error("texture `{name}` height {h} is not a power of two")]
    NotPowerOfTwo { name: String, h: usize },
}

/// CPU-side storage: 32-bit **ARGB** (0xAARRGGBB) in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Argb>,
}

impl Texture {
    pub fn from_pixels<S: Into<String>>(
        name: S,
        w: usize,
        h: usize,
        pixels: Vec<Argb>,
    ) -> Result<Self, TextureError> {
        let name = name.into();
        if w == 0 || h == 0 || pixels.len() != w * h {
            return Err(TextureError::Dimensions {
                name,
                w,
                h,
                len: pixels.len(),
            });
        }
        Ok(Self { name, w, h, pixels })
    }

    /// Single-colour texture.
    pub fn solid<S: Into<String>>(name: S, w: usize, h: usize, color: Color) -> Self {
        debug_assert!(w > 0 && h > 0, "texture must not be empty ({w}x{h})");
        Self {
            name: name.into(),
            w,
            h,
            pixels: vec![color.to_argb(); w * h],
        }
    }

    /// Decode any BMP/PNG file. Alpha is kept when the file has it,
    /// otherwise every texel is opaque.
    ///
    /// 32-bit `BI_RGB` bitmaps carry alpha in the fourth byte even though
    /// the format does not declare it; that byte is honoured unless every
    /// texel has alpha 0, in which case the bitmap is treated as opaque.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let decode_err = |source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        };
        let bytes = std::fs::read(path).map_err(|e| decode_err(image::ImageError::IoError(e)))?;
        let img = image::load_from_memory(&bytes).map_err(decode_err)?;

        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        let mut pixels: Vec<Argb> = rgba
            .pixels()
            .map(|p| Color::with_alpha(p[0], p[1], p[2], p[3]).to_argb())
            .collect();

        if let Some(alpha) = bmp_alpha(&bytes) {
            if alpha.len() == pixels.len() {
                for (px, a) in pixels.iter_mut().zip(alpha) {
                    *px = (*px & 0x00_FF_FF_FF) | (a as u32) << 24;
                }
            }
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_pixels(name, w as usize, h as usize, pixels)
    }

    /// Reject textures whose rows cannot be wrapped with `& (h - 1)`.
    pub fn require_pow2_height(self) -> Result<Self, TextureError> {
        if self.h.is_power_of_two() {
            Ok(self)
        } else {
            Err(TextureError::NotPowerOfTwo {
                name: self.name,
                h: self.h,
            })
        }
    }

    /// Bounds-checked texel fetch; negative or too-large indices give `None`.
    #[inline]
    pub fn sample(&self, x: i32, y: i32) -> Option<Argb> {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return None;
        }
        Some(self.pixels[y as usize * self.w + x as usize])
    }
}

/*──────────────────────── BMP alpha recovery ─────────────────────────*/

const BI_RGB: u32 = 0;

fn le_u16(b: &[u8], at: usize) -> Option<u16> {
    Some(u16::from_le_bytes(b.get(at..at + 2)?.try_into().ok()?))
}
fn le_u32(b: &[u8], at: usize) -> Option<u32> {
    Some(u32::from_le_bytes(b.get(at..at + 4)?.try_into().ok()?))
}

/// Alpha bytes of a 32bpp `BI_RGB` bitmap in top-down row-major order.
///
/// `None` for anything else, or when every alpha byte is 0 (plain
/// XRGB data, which must stay opaque).
fn bmp_alpha(bytes: &[u8]) -> Option<Vec<u8>> {
    if bytes.get(..2)? != b"BM" {
        return None;
    }
    let data_off = le_u32(bytes, 10)? as usize;
    let width = le_u32(bytes, 18)? as i32;
    let height = le_u32(bytes, 22)? as i32;
    let bpp = le_u16(bytes, 28)?;
    let compression = le_u32(bytes, 30)?;
    if bpp != 32 || compression != BI_RGB || width <= 0 || height == 0 {
        return None;
    }

    let (w, h) = (width as usize, height.unsigned_abs() as usize);
    let len = w.checked_mul(h)?.checked_mul(4)?;
    let data = bytes.get(data_off..data_off.checked_add(len)?)?;
    let bottom_up = height > 0;

    let mut alpha = Vec::with_capacity(w * h);
    for y in 0..h {
        let src_row = if bottom_up { h - 1 - y } else { y };
        let row = &data[src_row * w * 4..][..w * 4];
        alpha.extend(row.chunks_exact(4).map(|bgra| bgra[3]));
    }

    alpha.iter().any(|&a| a != 0).then_some(alpha)
}
