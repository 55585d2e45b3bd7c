use super::color::Color;

/// Exponential distance fog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub density: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            color: Color::rgb(100, 100, 100),
            density: 0.3,
        }
    }
}

impl Fog {
    pub fn new(color: Color, density: f32) -> Self {
        Self { color, density }
    }

    /// Weight of the fog colour at distance `d`, in `0.0..=1.0`.
    ///
    /// ```text
    /// f(d) = clamp(1 - exp(-density * d), 0, 1)
    /// ```
    /// An infinite or NaN distance is treated as "at the horizon": pure fog.
    #[inline]
    pub fn factor(&self, d: f32) -> f32 {
        let f = 1.0 - (-self.density * d).exp();
        if f.is_nan() { 1.0 } else { f.clamp(0.0, 1.0) }
    }

    /// Blend `texel` toward the fog colour for a sample `d` units away.
    /// Channels are truncated, alpha is forced opaque.
    #[inline]
    pub fn blend(&self, texel: Color, d: f32) -> Color {
        self.mix(texel, self.factor(d))
    }

    #[inline]
    pub fn mix(&self, texel: Color, f: f32) -> Color {
        let keep = 1.0 - f;
        let ch = |t: u8, fog: u8| (t as f32 * keep + fog as f32 * f) as u8;
        Color::rgb(
            ch(texel.r, self.color.r),
            ch(texel.g, self.color.g),
            ch(texel.b, self.color.b),
        )
    }
}
