use super::Argb;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FrameBufferError {
    /// Row pitch shorter than the visible width.
    #[error("stride {stride} is smaller than width {width}")]
    Stride { width: usize, stride: usize },
}

/// Row-major grid of 0xAARRGGBB pixels.
///
/// Row `y` starts at `y * stride`; only the first `width` entries of each
/// row are visible. Every accessor is bounds-checked, so nothing outside
/// this type ever does pitch arithmetic.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffer {
    pixels: Vec<Argb>,
    width: usize,
    height: usize,
    stride: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
            stride: width,
        }
    }

    pub fn with_stride(width: usize, height: usize, stride: usize) -> Result<Self, FrameBufferError> {
        if stride < width {
            return Err(FrameBufferError::Stride { width, stride });
        }
        Ok(Self {
            pixels: vec![0; stride * height],
            width,
            height,
            stride,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// (Re)allocate for a new resolution. No-op when the size is unchanged;
    /// otherwise the buffer is cleared to 0.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.stride = width;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.stride + x)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Argb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel; returns `false` (and writes nothing) when off-screen.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Argb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = px;
                true
            }
            None => false,
        }
    }

    /// Visible part of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Argb] {
        assert!(y < self.height, "row {y} out of range ({} rows)", self.height);
        let start = y * self.stride;
        &self.pixels[start..start + self.width]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Argb] {
        assert!(y < self.height, "row {y} out of range ({} rows)", self.height);
        let start = y * self.stride;
        &mut self.pixels[start..start + self.width]
    }

    pub fn fill(&mut self, px: Argb) {
        self.pixels.fill(px);
    }

    /// Raw storage, `stride` pixels per row, for handing to the window.
    #[inline]
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut fb = FrameBuffer::new(4, 3);
        assert!(fb.set(3, 2, 0xFF_00FF00));
        assert!(!fb.set(4, 0, 1));
        assert!(!fb.set(0, 3, 1));
        assert_eq!(fb.get(3, 2), Some(0xFF_00FF00));
        assert_eq!(fb.get(4, 2), None);
    }

    #[test]
    fn stride_padding_is_not_visible() {
        let mut fb = FrameBuffer::with_stride(2, 2, 3).unwrap();
        fb.row_mut(1).fill(7);
        assert_eq!(fb.pixels(), &[0, 0, 0, 7, 7, 0]);
        assert_eq!(fb.row(1), &[7, 7]);
    }

    #[test]
    fn resize_keeps_or_clears() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.fill(5);
        fb.resize(2, 2);
        assert!(fb.pixels().iter().all(|&p| p == 5));
        fb.resize(3, 1);
        assert_eq!(fb.pixels(), &[0, 0, 0]);
        assert_eq!((fb.width(), fb.height(), fb.stride()), (3, 1, 3));
    }

    #[test]
    fn short_stride_fails() {
        assert_eq!(
            FrameBuffer::with_stride(4, 1, 2).unwrap_err(),
            FrameBufferError::Stride { width: 4, stride: 2 }
        );
    }
}
