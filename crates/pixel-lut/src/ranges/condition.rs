//! Index conditions.

/// One term of a color group's disjunction.
///
/// `Range` is inclusive on both ends and always has `low < high`; a
/// single-index run is an `Equals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Matches exactly one index
    Equals(usize),
    /// Matches `low..=high`
    Range {
        /// First matched index
        low: usize,
        /// Last matched index
        high: usize,
    },
}

impl Condition {
    /// Condition for the closed run `start..=end`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts `start <= end`.
    #[inline]
    pub fn from_run(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "run start {} > end {}", start, end);
        if start == end {
            Condition::Equals(start)
        } else {
            Condition::Range {
                low: start,
                high: end,
            }
        }
    }

    /// Lowest matched index.
    #[inline]
    pub fn start(&self) -> usize {
        match *self {
            Condition::Equals(i) => i,
            Condition::Range { low, .. } => low,
        }
    }

    /// Highest matched index.
    #[inline]
    pub fn end(&self) -> usize {
        match *self {
            Condition::Equals(i) => i,
            Condition::Range { high, .. } => high,
        }
    }

    /// Number of indices matched.
    #[inline]
    pub fn span(&self) -> usize {
        self.end() - self.start() + 1
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        match *self {
            Condition::Equals(i) => index == i,
            Condition::Range { low, high } => (low..=high).contains(&index),
        }
    }
}
