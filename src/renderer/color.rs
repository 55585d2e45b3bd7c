use super::Argb;

/// One pixel split into its four 8-bit channels.
///
/// Packed form is **0xAARRGGBB**, the layout the window expects and the
/// layout every [`Texture`](crate::world::Texture) is stored in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Opaque warm tan painted wherever the floor lookup leaves the texture.
    pub const FALLBACK: Color = Color::from_argb(0xFF_D9_A0_66);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xFF, r, g, b }
    }

    #[inline]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpack `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb(px: Argb) -> Self {
        Self {
            a: (px >> 24) as u8,
            r: (px >> 16) as u8,
            g: (px >> 8) as u8,
            b: px as u8,
        }
    }

    /// Pack into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> Argb {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[inline]
    pub const fn opaque(self) -> Self {
        Self { a: 0xFF, ..self }
    }

    /// Source-over composite of `self` onto `dst`. Result is always opaque.
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            0 => dst.opaque(),
            0xFF => self,
            a => {
                let a = a as u16;
                Color::rgb(
                    blend_channel(self.r, dst.r, a),
                    blend_channel(self.g, dst.g, a),
                    blend_channel(self.b, dst.b, a),
                )
            }
        }
    }
}

impl From<Argb> for Color {
    fn from(px: Argb) -> Self {
        Color::from_argb(px)
    }
}

impl From<Color> for Argb {
    fn from(c: Color) -> Self {
        c.to_argb()
    }
}

/// `(src * a + dst * (255 - a)) / 255` with the usual shift trick.
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let sum = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((sum + 1 + (sum >> 8)) >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_layout() {
        let c = Color::from_argb(0x80_11_22_33);
        assert_eq!(c, Color::with_alpha(0x11, 0x22, 0x33, 0x80));
        assert_eq!(c.to_argb(), 0x80_11_22_33);
        assert_eq!(Color::FALLBACK, Color::rgb(0xD9, 0xA0, 0x66));
    }

    #[test]
    fn over_respects_alpha_extremes() {
        let dst = Color::rgb(10, 20, 30);
        assert_eq!(Color::with_alpha(200, 200, 200, 0).over(dst), dst);
        assert_eq!(Color::rgb(1, 2, 3).over(dst), Color::rgb(1, 2, 3));
    }

    #[test]
    fn over_half_alpha_is_midpoint() {
        let out = Color::with_alpha(255, 0, 0, 128).over(Color::rgb(0, 0, 255));
        assert!((out.r as i32 - 128).abs() <= 1);
        assert!((out.b as i32 - 127).abs() <= 1);
        assert_eq!(out.a, 0xFF);
    }
}
