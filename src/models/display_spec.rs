use serde::Deserialize;

/// Frame size of the OLED the lookup table drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplaySpec {
    pub width: usize,
    pub height: usize,
}

/// Decoded image size differs from the display frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub expected: DisplaySpec,
    pub actual_width: usize,
    pub actual_height: usize,
}

impl std::fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid size: {}x{} (expected {}x{})",
            self.actual_width, self.actual_height, self.expected.width, self.expected.height
        )
    }
}

impl DisplaySpec {
    /// 96x64 RGB565 OLED
    pub const OLED_96X64: Self = Self {
        width: 96,
        height: 64,
    };

    /// Number of pixels per frame
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Compare decoded dimensions against this frame.
    ///
    /// A mismatch is not an error: callers warn and keep going with the
    /// decoded dimensions.
    pub fn check(&self, width: usize, height: usize) -> Option<DimensionMismatch> {
        if (width, height) == (self.width, self.height) {
            None
        } else {
            Some(DimensionMismatch {
                expected: *self,
                actual_width: width,
                actual_height: height,
            })
        }
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::OLED_96X64
    }
}
