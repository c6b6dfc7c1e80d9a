//! Grouping linear indices by quantized color.
//!
//! [`ColorGroups`] is an explicit ordered association: a `Vec` of groups in
//! first-occurrence order plus a `HashMap` from code to position in that
//! `Vec`. Iteration order never depends on hashing.

use std::collections::HashMap;

use crate::color::ColorCode;
use crate::grid::PixelGrid;

/// All linear indices of one quantized color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGroup {
    code: ColorCode,
    /// Indices in scan order. A row-major scan makes these ascending, but
    /// consumers must not rely on it.
    indices: Vec<usize>,
}

impl ColorGroup {
    #[inline]
    pub fn code(&self) -> ColorCode {
        self.code
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of pixels with this color.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false for groups built by [`ColorGroups`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Color groups in first-occurrence order.
///
/// # Example
///
/// ```
/// use pixel_lut::{ColorGroups, PixelGrid, Rgb};
///
/// let red = Rgb::new(255, 0, 0);
/// let green = Rgb::new(0, 255, 0);
/// let grid = PixelGrid::new(2, 2, vec![red, red, green, red]).unwrap();
///
/// let groups = ColorGroups::from_grid(&grid);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.get(red.quantize()).unwrap().indices(), &[0, 1, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorGroups {
    groups: Vec<ColorGroup>,
    positions: HashMap<ColorCode, usize>,
}

impl ColorGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `grid` row-major and group every index by its quantized code.
    pub fn from_grid(grid: &PixelGrid) -> Self {
        let mut groups = Self::new();
        for (_, _, index, color) in grid.scan() {
            groups.insert(ColorCode::quantize(color), index);
        }
        groups
    }

    /// Append `index` to the group for `code`, creating the group at the end
    /// on first occurrence.
    pub fn insert(&mut self, code: ColorCode, index: usize) {
        match self.positions.get(&code) {
            Some(&pos) => self.groups[pos].indices.push(index),
            None => {
                self.positions.insert(code, self.groups.len());
                self.groups.push(ColorGroup {
                    code,
                    indices: vec![index],
                });
            }
        }
    }

    /// Group for `code`, if any pixel produced it.
    pub fn get(&self, code: ColorCode) -> Option<&ColorGroup> {
        self.positions.get(&code).map(|&pos| &self.groups[pos])
    }

    /// Number of distinct codes.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorGroup> {
        self.groups.iter()
    }

    /// Codes in first-occurrence order.
    pub fn codes(&self) -> impl Iterator<Item = ColorCode> + '_ {
        self.groups.iter().map(|g| g.code)
    }
}

impl<'a> IntoIterator for &'a ColorGroups {
    type Item = &'a ColorGroup;
    type IntoIter = std::slice::Iter<'a, ColorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
