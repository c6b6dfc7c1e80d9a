//! Coordinate and index diagnostics for a decoded image.

use std::fmt;

use pixel_lut::{PixelGrid, Rgb};

/// Side length of each corner sample block
pub const CORNER_SIZE: usize = 3;

/// One sampled pixel with its coordinate and linear index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    pub x: usize,
    pub y: usize,
    pub index: usize,
    pub color: Rgb,
}

impl fmt::Display for PixelSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coordinate({},{}) → pixel_index = {}, RGB = ({},{},{})",
            self.x, self.y, self.index, self.color.r, self.color.g, self.color.b
        )
    }
}

/// Top-left and bottom-right corner samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerSamples {
    pub top_left: Vec<PixelSample>,
    pub bottom_right: Vec<PixelSample>,
}

/// Sample the top-left and bottom-right `size`×`size` blocks, row-major,
/// clamped to the image.
pub fn corner_samples(grid: &PixelGrid, size: usize) -> CornerSamples {
    let w = grid.width();
    let h = grid.height();
    let block = |xs: std::ops::Range<usize>, ys: std::ops::Range<usize>| {
        let mut out = Vec::new();
        for y in ys {
            for x in xs.clone() {
                if let Some(color) = grid.get(x, y) {
                    out.push(PixelSample {
                        x,
                        y,
                        index: grid.index_of(x, y),
                        color,
                    });
                }
            }
        }
        out
    };

    CornerSamples {
        top_left: block(0..size.min(w), 0..size.min(h)),
        bottom_right: block(w.saturating_sub(size)..w, h.saturating_sub(size)..h),
    }
}

impl fmt::Display for CornerSamples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Pixel Coordinate and Index Mapping ===")?;
        writeln!(f, "Top-left corner pixels:")?;
        for sample in &self.top_left {
            writeln!(f, "{sample}")?;
        }
        writeln!(f)?;
        writeln!(f, "Bottom-right corner pixels:")?;
        for sample in &self.bottom_right {
            writeln!(f, "{sample}")?;
        }
        Ok(())
    }
}

/// Image size and index-range summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSummary {
    pub width: usize,
    pub height: usize,
}

impl ImageSummary {
    pub fn from_grid(grid: &PixelGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
        }
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }

    /// Largest linear index
    pub fn max_index(&self) -> usize {
        self.total_pixels().saturating_sub(1)
    }
}

impl fmt::Display for ImageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image info:")?;
        writeln!(f, "  Size: {} x {}", self.width, self.height)?;
        writeln!(f, "  Total pixels: {}", self.total_pixels())?;
        writeln!(f, "  pixel_index range: 0 to {}", self.max_index())?;
        writeln!(f, "  Coordinate function: pixel_index = y * {} + x", self.width)?;
        write!(
            f,
            "  Coordinate range: x=[0,{}], y=[0,{}]",
            self.width.saturating_sub(1),
            self.height.saturating_sub(1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gradient(width: usize, height: usize) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap()
    }

    #[test]
    fn test_corner_samples_large_image() {
        let grid = gradient(96, 64);
        let corners = corner_samples(&grid, CORNER_SIZE);

        assert_eq!(corners.top_left.len(), 9);
        assert_eq!(corners.bottom_right.len(), 9);
        assert_eq!(
            corners.top_left[4],
            PixelSample {
                x: 1,
                y: 1,
                index: 97,
                color: Rgb::new(1, 1, 0)
            }
        );
        let last = corners.bottom_right.last().unwrap();
        assert_eq!((last.x, last.y, last.index), (95, 63, 6143));
        assert_eq!(
            (corners.bottom_right[0].x, corners.bottom_right[0].y),
            (93, 61)
        );
    }

    #[test]
    fn test_corner_samples_clamped_to_small_image() {
        let grid = gradient(2, 1);
        let corners = corner_samples(&grid, CORNER_SIZE);

        assert_eq!(corners.top_left.len(), 2);
        assert_eq!(corners.bottom_right, corners.top_left);
    }

    #[test]
    fn test_sample_display() {
        let sample = PixelSample {
            x: 2,
            y: 1,
            index: 98,
            color: Rgb::new(255, 128, 0),
        };
        assert_eq!(
            sample.to_string(),
            "Coordinate(2,1) → pixel_index = 98, RGB = (255,128,0)"
        );
    }

    #[test]
    fn test_summary() {
        let summary = ImageSummary::from_grid(&gradient(96, 64));
        assert_eq!(summary.total_pixels(), 6144);
        assert_eq!(summary.max_index(), 6143);
        assert_eq!(
            summary.to_string(),
            "Image info:\n  Size: 96 x 64\n  Total pixels: 6144\n  pixel_index range: 0 to 6143\n  \
             Coordinate function: pixel_index = y * 96 + x\n  Coordinate range: x=[0,95], y=[0,63]"
        );
    }
}
