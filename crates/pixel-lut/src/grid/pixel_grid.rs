//! Row-major pixel grid.

use super::error::GridError;
use crate::color::Rgb;

/// An immutable, row-major grid of decoded RGB pixels.
///
/// The linear index of the pixel at `(x, y)` is `y * width + x`. The width
/// used for that arithmetic is always the grid's own width, whatever size the
/// target display expects.
///
/// # Example
///
/// ```
/// use pixel_lut::{PixelGrid, Rgb};
///
/// let grid = PixelGrid::new(2, 1, vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// assert_eq!(grid.index_of(1, 0), 1);
/// assert_eq!(grid.get(1, 0), Some(Rgb::new(255, 255, 255)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Build a grid from row-major pixels.
    ///
    /// Fails when either dimension is zero or when `pixels.len()` is not
    /// `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every position.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Rgb,
    ) -> Result<Self, GridError> {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Build a grid from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// A trailing partial pixel is counted as missing and trips the length
    /// check.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, GridError> {
        if bytes.len() % 3 != 0 {
            return Err(GridError::LengthMismatch {
                expected: width * height,
                actual: bytes.len() / 3,
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false; empty grids are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Linear index `y * width + x`.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index_of(x, y)).copied()
    }

    /// Iterate `(x, y, index, color)` in row-major scan order.
    pub fn scan(&self) -> impl Iterator<Item = (usize, usize, usize, Rgb)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(index, &color)| (index % width, index / width, index, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            PixelGrid::new(0, 4, Vec::new()),
            Err(GridError::Empty {
                width: 0,
                height: 4
            })
        );
        assert!(PixelGrid::new(3, 0, Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = PixelGrid::new(2, 2, vec![Rgb::default(); 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "pixel buffer length mismatch: expected 4 pixels, got 3"
        );
    }

    #[test]
    fn test_from_rgb_bytes() {
        let grid = PixelGrid::from_rgb_bytes(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.pixels(), &[Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
    }

    #[test]
    fn test_from_rgb_bytes_partial_pixel() {
        assert!(PixelGrid::from_rgb_bytes(1, 1, &[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn test_index_uses_actual_width() {
        let grid = PixelGrid::from_fn(5, 3, |_, _| Rgb::default()).unwrap();
        assert_eq!(grid.index_of(0, 1), 5);
        assert_eq!(grid.index_of(4, 2), 14);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = PixelGrid::from_fn(2, 2, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
        assert_eq!(grid.get(1, 1), Some(Rgb::new(1, 1, 0)));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_scan_is_row_major() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
        let positions: Vec<_> = grid.scan().map(|(x, y, i, _)| (x, y, i)).collect();
        assert_eq!(
            positions,
            vec![
                (0, 0, 0),
                (1, 0, 1),
                (2, 0, 2),
                (0, 1, 3),
                (1, 1, 4),
                (2, 1, 5)
            ]
        );
        for (x, y, _, color) in grid.scan() {
            assert_eq!(color, Rgb::new(x as u8, y as u8, 0));
        }
    }
}
