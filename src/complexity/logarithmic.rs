//! `O(log n)`: each step throws away a constant fraction (usually half) of what is left to search.

use std::cmp::Ordering;
use std::io::{self, Write};

use log::trace;

use super::ComplexityClass;
use crate::util::error::EmptyCollection;
use crate::util::fmt::{Listed, Nullable};

/// Searches an ascending slice for `target`, returning the index of a matching element.
///
/// If the slice holds several elements equal to `target`, any one of them may be returned. Use
/// [`first_occurrence`] to find the leftmost.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    // The search space is the half-open range low..high.
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// The recursive form of [`binary_search`]. Recursion depth is bounded by `log2(len) + 1`.
pub fn binary_search_recursive<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    search_range(items, target, 0, items.len(), 0)
}

fn search_range<T: Ord>(
    items: &[T],
    target: &T,
    low: usize,
    high: usize,
    depth: u32,
) -> Option<usize> {
    if low >= high {
        return None;
    }
    let mid = low + (high - low) / 2;
    trace!("binary search depth {depth}: range {low}..{high}, probing {mid}");

    match items[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_range(items, target, mid + 1, high, depth + 1),
        Ordering::Greater => search_range(items, target, low, mid, depth + 1),
    }
}

/// Raises `base` to `exp` by repeated squaring, returning [`None`] if the result overflows.
pub fn power(base: i64, exp: u32) -> Option<i64> {
    match exp {
        0 => Some(1),
        1 => Some(base),
        _ => {
            let half = power(base, exp / 2)?;
            let squared = half.checked_mul(half)?;
            if exp % 2 == 0 {
                Some(squared)
            } else {
                squared.checked_mul(base)
            }
        }
    }
}

/// Returns the floor of the square root of `x`, found by binary search over candidate roots.
pub fn isqrt(x: u64) -> u64 {
    if x < 2 {
        return x;
    }

    let mut low = 1_u64;
    let mut high = x / 2;
    while low <= high {
        let mid = low + (high - low) / 2;
        // u128 so that squaring any u64 candidate can't overflow.
        match (u128::from(mid) * u128::from(mid)).cmp(&u128::from(x)) {
            Ordering::Equal => return mid,
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid - 1,
        }
    }
    high
}

/// Returns the index of the leftmost element equal to `target` in an ascending slice.
pub fn first_occurrence<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();
    let mut found = None;

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                // Keep looking to the left for an earlier match.
                high = mid;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    found
}

/// Returns the index of a peak: an element that is not smaller than either of its neighbours.
///
/// Every non-empty slice has at least one peak. The search follows the slope uphill, so for a
/// strictly increasing slice the last index is returned.
pub fn find_peak<T: Ord>(items: &[T]) -> Result<usize, EmptyCollection> {
    if items.is_empty() {
        return Err(EmptyCollection);
    }

    let mut low = 0;
    let mut high = items.len() - 1;
    while low < high {
        let mid = low + (high - low) / 2;
        if items[mid] > items[mid + 1] {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    Ok(low)
}

/// Counts how many times `n` can be halved (with integer division) before it reaches 0.
///
/// For positive `n` this is `floor(log2(n)) + 1`.
pub fn count_halvings(mut n: u64) -> u32 {
    let mut count = 0;
    while n > 0 {
        n /= 2;
        count += 1;
    }
    count
}

/// Returns the minimum of an ascending slice that has been rotated by some unknown amount, such
/// as `[4, 5, 6, 7, 0, 1, 2]`.
pub fn min_in_rotated<T: Ord>(items: &[T]) -> Result<&T, EmptyCollection> {
    if items.is_empty() {
        return Err(EmptyCollection);
    }

    let mut low = 0;
    let mut high = items.len() - 1;
    while low < high {
        let mid = low + (high - low) / 2;
        if items[mid] > items[high] {
            // The rotation point, and so the minimum, is to the right of mid.
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Ok(&items[low])
}

fn floor_log2(n: u64) -> u32 {
    n.checked_ilog2().unwrap_or(0)
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== {} Logarithmic Time Examples ===\n", ComplexityClass::Logarithmic)?;

    let sorted = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];
    writeln!(out, "1. Binary Search:")?;
    writeln!(out, "   Array: {}", Listed(&sorted))?;
    writeln!(out, "   Searching for: 13")?;
    writeln!(out, "   Found at index: {}", Nullable(binary_search(&sorted, &13)))?;
    writeln!(
        out,
        "   Steps taken: ~{} (log₂({}))",
        floor_log2(sorted.len() as u64),
        sorted.len()
    )?;

    writeln!(out, "\n2. Binary Search (Recursive):")?;
    writeln!(out, "   Found 7 at index: {}", Nullable(binary_search_recursive(&sorted, &7)))?;

    writeln!(out, "\n3. Binary Exponentiation:")?;
    writeln!(out, "   2^10 = {}", Nullable(power(2, 10)))?;
    writeln!(out, "   Steps: ~{} (log₂(10))", floor_log2(10))?;

    writeln!(out, "\n4. Square Root using Binary Search:")?;
    for n in [16, 25, 36, 49, 100] {
        writeln!(out, "   √{n} = {}", isqrt(n))?;
    }

    writeln!(out, "\n5. Find First Occurrence:")?;
    let duplicated = [1, 2, 2, 2, 3, 3, 4, 4, 4, 4, 5];
    writeln!(out, "   Array: {}", Listed(&duplicated))?;
    writeln!(
        out,
        "   First occurrence of 4: index {}",
        Nullable(first_occurrence(&duplicated, &4))
    )?;

    writeln!(out, "\n6. Find Peak Element:")?;
    let mountain = [1, 3, 5, 7, 9, 8, 6, 4, 2];
    writeln!(out, "   Array: {}", Listed(&mountain))?;
    let peak = find_peak(&mountain).map_err(io::Error::other)?;
    writeln!(out, "   Peak element: {} at index {peak}", mountain[peak])?;

    writeln!(out, "\n7. Count Divisions by 2:")?;
    for n in [8, 16, 32, 64, 128, 1000] {
        writeln!(
            out,
            "   {n} can be divided {} times (log₂({n}) ≈ {})",
            count_halvings(n),
            floor_log2(n)
        )?;
    }

    writeln!(out, "\n8. Find Minimum in Rotated Sorted Array:")?;
    let rotated = [4, 5, 6, 7, 0, 1, 2];
    writeln!(out, "   Array: {}", Listed(&rotated))?;
    let min = min_in_rotated(&rotated).map_err(io::Error::other)?;
    writeln!(out, "   Minimum: {min}")?;

    writeln!(out, "\n=== All operations completed in {} time! ===", ComplexityClass::Logarithmic)?;
    writeln!(out, "Key insight: Each step eliminates half the search space!")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ODDS: [i32; 13] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];

    #[test]
    fn test_binary_search() {
        for (index, value) in ODDS.iter().enumerate() {
            assert_eq!(binary_search(&ODDS, value), Some(index));
            assert_eq!(binary_search_recursive(&ODDS, value), Some(index));
        }
        for missing in [0, 2, 14, 26] {
            assert_eq!(binary_search(&ODDS, &missing), None);
            assert_eq!(binary_search_recursive(&ODDS, &missing), None);
        }
        assert_eq!(binary_search::<i32>(&[], &1), None);
        assert_eq!(binary_search_recursive::<i32>(&[], &1), None);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2, 10), Some(1_024));
        assert_eq!(power(3, 0), Some(1));
        assert_eq!(power(-2, 3), Some(-8));
        assert_eq!(power(7, 1), Some(7));
        assert_eq!(power(2, 62), Some(1 << 62));
        assert_eq!(power(2, 63), None, "2^63 doesn't fit in an i64.");
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(99), 9);
        assert_eq!(isqrt(100), 10);
        assert_eq!(isqrt(u64::MAX), u64::from(u32::MAX));
    }

    #[test]
    fn test_first_occurrence() {
        let items = [1, 2, 2, 2, 3, 3, 4, 4, 4, 4, 5];
        assert_eq!(first_occurrence(&items, &2), Some(1));
        assert_eq!(first_occurrence(&items, &4), Some(6));
        assert_eq!(first_occurrence(&items, &5), Some(10));
        assert_eq!(first_occurrence(&items, &6), None);
    }

    #[test]
    fn test_find_peak() {
        assert_eq!(find_peak(&[1, 3, 5, 7, 9, 8, 6, 4, 2]), Ok(4));
        assert_eq!(find_peak(&[1, 2, 3]), Ok(2));
        assert_eq!(find_peak(&[3, 2, 1]), Ok(0));
        assert_eq!(find_peak(&[5]), Ok(0));
        assert_eq!(find_peak::<u8>(&[]), Err(EmptyCollection));
    }

    #[test]
    fn test_count_halvings() {
        assert_eq!(count_halvings(0), 0);
        assert_eq!(count_halvings(1), 1);
        assert_eq!(count_halvings(8), 4);
        assert_eq!(count_halvings(1_000), 10);
    }

    #[test]
    fn test_min_in_rotated() {
        assert_eq!(min_in_rotated(&[4, 5, 6, 7, 0, 1, 2]), Ok(&0));
        assert_eq!(min_in_rotated(&[1, 2, 3, 4]), Ok(&1), "An unrotated slice should work too.");
        assert_eq!(min_in_rotated(&[2, 1]), Ok(&1));
        assert_eq!(min_in_rotated::<u8>(&[]), Err(EmptyCollection));
    }

    #[test]
    fn test_demo() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Found at index: 6"));
        assert!(text.contains("Found 7 at index: 3"));
        assert!(text.contains("2^10 = 1024"));
        assert!(text.contains("√49 = 7"));
        assert!(text.contains("First occurrence of 4: index 6"));
        assert!(text.contains("Peak element: 9 at index 4"));
        assert!(text.contains("1000 can be divided 10 times (log₂(1000) ≈ 9)"));
        assert!(text.contains("Minimum: 0"));
    }
}
