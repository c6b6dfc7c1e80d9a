//! Run-length compression of a color group's indices.
//!
//! [`compress`] sorts a group's indices and folds them into maximal runs of
//! consecutive values. Each run becomes one [`Condition`]:
//!
//! ```text
//! [3, 0, 1, 7, 8, 9]  --sort-->  [0, 1, 3, 7, 8, 9]
//!                     --fold-->  Range(0,1)  Equals(3)  Range(7,9)
//! ```
//!
//! The result is the smallest possible list of runs: two conditions are never
//! adjacent, and an isolated index is never folded into a neighbour.

mod condition;

pub use condition::Condition;

/// Compress `indices` into ascending, non-overlapping conditions whose union
/// is exactly the input set.
///
/// The input order does not matter. Duplicates are absorbed into the run that
/// already covers them. An empty input yields an empty list.
///
/// # Example
///
/// ```
/// use pixel_lut::{compress, Condition};
///
/// assert_eq!(
///     compress(&[3, 0, 1]),
///     vec![Condition::Range { low: 0, high: 1 }, Condition::Equals(3)]
/// );
/// ```
pub fn compress(indices: &[usize]) -> Vec<Condition> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let (start, end, mut conditions) =
        iter.fold((first, first, Vec::new()), |(start, end, mut out), next| {
            if next <= end + 1 {
                (start, end.max(next), out)
            } else {
                out.push(Condition::from_run(start, end));
                (next, next, out)
            }
        });
    conditions.push(Condition::from_run(start, end));
    conditions
}
