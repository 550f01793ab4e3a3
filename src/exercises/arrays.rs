use log::warn;

use crate::util::error::EmptyCollection;
use crate::util::option::OptionExtension;

/// Finds the one number missing from `numbers`, which should hold every number from `1` to
/// `numbers.len() + 1` except one, in any order.
///
/// The answer is the difference between the expected and actual sums. If that difference can't
/// be the missing number, the input wasn't as described and [`None`] is returned.
pub fn missing_number(numbers: &[u64]) -> Option<u64> {
    let n = numbers.len() as u64 + 1;
    let expected = n.checked_mul(n + 1)? / 2;

    let mut actual = 0_u64;
    for &number in numbers {
        actual = actual.checked_add(number)?;
    }

    match expected.checked_sub(actual) {
        Some(missing) if (1..=n).contains(&missing) => Some(missing),
        _ => {
            warn!("expected the numbers 1 to {n} with one missing, but they sum to {actual}");
            None
        }
    }
}

/// Returns the largest element. When several are equally large, the last is returned.
pub fn max_of<T: Ord>(numbers: &[T]) -> Result<&T, EmptyCollection> {
    numbers.iter().max().or_empty()
}

/// Returns the smallest element. When several are equally small, the first is returned.
pub fn smallest<T: Ord>(numbers: &[T]) -> Result<&T, EmptyCollection> {
    numbers.iter().min().or_empty()
}
