//! `O(n)`: operations that visit every element a constant number of times.

use std::fmt::Display;
use std::io::{self, Write};

use super::ComplexityClass;
use crate::util::error::{EmptyCollection, TooFewElements};
use crate::util::fmt::{Listed, Nullable};

/// Returns the largest element, scanning every element once. If several elements are equally
/// large, the first is returned.
pub fn find_max<T: Ord>(items: &[T]) -> Result<&T, EmptyCollection> {
    let (first, rest) = items.split_first().ok_or(EmptyCollection)?;
    let mut max = first;
    for item in rest {
        if item > max {
            max = item;
        }
    }
    Ok(max)
}

/// Returns the smallest element. If several elements are equally small, the first is returned.
pub fn find_min<T: Ord>(items: &[T]) -> Result<&T, EmptyCollection> {
    let (first, rest) = items.split_first().ok_or(EmptyCollection)?;
    let mut min = first;
    for item in rest {
        if item < min {
            min = item;
        }
    }
    Ok(min)
}

/// Returns the index of the first element equal to `target`. Works on unsorted input, at the cost
/// of checking every element in the worst case.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    for (index, item) in items.iter().enumerate() {
        if item == target {
            return Some(index);
        }
    }
    None
}

/// Adds up every element, or returns [`None`] if the total doesn't fit in an `i64`.
pub fn sum(items: &[i64]) -> Option<i64> {
    let mut total = 0_i64;
    for &item in items {
        total = total.checked_add(item)?;
    }
    Some(total)
}

/// Returns the arithmetic mean, or `0.0` for an empty slice. The total is kept in an `i128`, so
/// the mean of any slice is defined.
pub fn average(items: &[i64]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let mut total = 0_i128;
    for &item in items {
        total += i128::from(item);
    }
    total as f64 / items.len() as f64
}

pub fn count_occurrences<T: PartialEq>(items: &[T], target: &T) -> usize {
    let mut count = 0;
    for item in items {
        if item == target {
            count += 1;
        }
    }
    count
}

/// Copies a slice into a new [`Vec`] one element at a time.
pub fn copy<T: Clone>(items: &[T]) -> Vec<T> {
    let mut copied = Vec::with_capacity(items.len());
    for item in items {
        copied.push(item.clone());
    }
    copied
}

/// Reverses a slice in place by swapping elements from both ends until the indices meet.
pub fn reverse_in_place<T>(items: &mut [T]) {
    if items.is_empty() {
        return;
    }

    let mut left = 0;
    let mut right = items.len() - 1;
    while left < right {
        items.swap(left, right);
        left += 1;
        right -= 1;
    }
}

pub fn evens(items: &[i64]) -> Vec<i64> {
    let mut found = Vec::new();
    for &item in items {
        if item % 2 == 0 {
            found.push(item);
        }
    }
    found
}

/// Builds a string such as `[1, 2, 3]`, appending each element in turn.
pub fn to_bracketed_string<T: Display>(items: &[T]) -> String {
    let mut string = String::from("[");
    for (index, item) in items.iter().enumerate() {
        string.push_str(&item.to_string());
        if index + 1 < items.len() {
            string.push_str(", ");
        }
    }
    string.push(']');
    string
}

/// Sums the two largest elements, found in a single pass. If the maximum occurs more than once, it
/// is counted twice. The sum saturates at `i64::MAX` and `i64::MIN`.
pub fn sum_of_two_largest(items: &[i64]) -> Result<i64, TooFewElements> {
    if items.len() < 2 {
        return Err(TooFewElements { required: 2, len: items.len() });
    }

    let mut first = i64::MIN;
    let mut second = i64::MIN;
    for &item in items {
        if item > first {
            second = first;
            first = item;
        } else if item > second {
            second = item;
        }
    }
    Ok(first.saturating_add(second))
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== {} Linear Time Examples ===\n", ComplexityClass::Linear)?;

    let items = [5, 2, 8, 1, 9, 3, 7, 4, 6];
    writeln!(out, "Test array: {}", Listed(&items))?;

    writeln!(out, "\n1. Finding Maximum and Minimum:")?;
    writeln!(out, "   Maximum: {}", find_max(&items).map_err(io::Error::other)?)?;
    writeln!(out, "   Minimum: {}", find_min(&items).map_err(io::Error::other)?)?;
    writeln!(out, "   Operations: O(n) - visited each element once")?;

    writeln!(out, "\n2. Linear Search:")?;
    writeln!(out, "   Searching for: 7")?;
    writeln!(out, "   Found at index: {}", Nullable(linear_search(&items, &7)))?;
    writeln!(out, "   Worst case: O(n) if element is at the end")?;

    writeln!(out, "\n3. Sum and Average:")?;
    writeln!(out, "   Sum: {}", Nullable(sum(&items)))?;
    writeln!(out, "   Average: {:.2}", average(&items))?;

    let duplicated = [1, 2, 3, 2, 4, 2, 5, 2];
    writeln!(out, "\n4. Count Occurrences:")?;
    writeln!(out, "   Array: {}", Listed(&duplicated))?;
    writeln!(out, "   Count of 2: {}", count_occurrences(&duplicated, &2))?;

    writeln!(out, "\n5. Copy Array:")?;
    let copied = copy(&items);
    writeln!(out, "   Original: {}", Listed(&items))?;
    writeln!(out, "   Copy: {}", Listed(&copied))?;

    writeln!(out, "\n6. Reverse Array:")?;
    let mut reversed = copy(&items);
    writeln!(out, "   Before: {}", Listed(&reversed))?;
    reverse_in_place(&mut reversed);
    writeln!(out, "   After: {}", Listed(&reversed))?;

    writeln!(out, "\n7. Find Even Numbers:")?;
    writeln!(out, "   Even numbers: {}", Listed(&evens(&items)))?;

    #[cfg(feature = "linked")]
    {
        use crate::collections::linked::LinkedList;

        writeln!(out, "\n8. Linked List Traversal:")?;
        let list = (1..=5).collect::<LinkedList<_>>();
        writeln!(out, "{list}")?;
        writeln!(out, "Total nodes: {}", list.iter().count())?;
    }

    writeln!(out, "\n9. Array to String:")?;
    writeln!(out, "   {}", to_bracketed_string(&items))?;

    writeln!(out, "\n10. Sum of Two Largest:")?;
    writeln!(out, "   Array: {}", Listed(&items))?;
    writeln!(
        out,
        "   Sum of two largest: {}",
        sum_of_two_largest(&items).map_err(io::Error::other)?
    )?;

    writeln!(out, "\n=== Performance Insight ===")?;
    for size in [10, 100, 1000] {
        writeln!(out, "For array of size {size}: ~{size} operations")?;
    }
    writeln!(out, "Time grows linearly with input size!")?;

    writeln!(out, "\n=== All operations completed in {} time! ===", ComplexityClass::Linear)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [i64; 9] = [5, 2, 8, 1, 9, 3, 7, 4, 6];

    #[test]
    fn test_extremes() {
        assert_eq!(find_max(&ITEMS), Ok(&9));
        assert_eq!(find_min(&ITEMS), Ok(&1));
        assert_eq!(find_max(&[-3]), Ok(&-3));
        assert_eq!(find_max::<u8>(&[]), Err(EmptyCollection));
        assert_eq!(find_min::<u8>(&[]), Err(EmptyCollection));
    }

    #[test]
    fn test_linear_search() {
        assert_eq!(linear_search(&ITEMS, &7), Some(6));
        assert_eq!(linear_search(&ITEMS, &5), Some(0));
        assert_eq!(linear_search(&ITEMS, &10), None);
        assert_eq!(linear_search(&[1, 2, 1], &1), Some(0), "The first match should be returned.");
    }

    #[test]
    fn test_sum_and_average() {
        assert_eq!(sum(&ITEMS), Some(45));
        assert_eq!(sum(&[]), Some(0));
        assert_eq!(average(&ITEMS), 5.0);
        assert_eq!(average(&[1, 2]), 1.5);
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_sum_and_average_at_the_bounds() {
        assert_eq!(sum(&[i64::MAX, 1]), None);
        assert_eq!(sum(&[i64::MIN, -1]), None);
        assert_eq!(sum(&[i64::MAX, 1, -1]), None, "Overflow part way through should not wrap.");
        assert_eq!(sum(&[i64::MAX, i64::MIN]), Some(-1));

        assert_eq!(average(&[i64::MAX, i64::MAX]), i64::MAX as f64);
        assert_eq!(average(&[i64::MIN, i64::MIN]), i64::MIN as f64);
        assert_eq!(average(&[i64::MAX, i64::MIN]), -0.5);
    }

    #[test]
    fn test_count_and_copy() {
        assert_eq!(count_occurrences(&[1, 2, 3, 2, 4, 2, 5, 2], &2), 4);
        assert_eq!(count_occurrences(&ITEMS, &10), 0);
        assert_eq!(copy(&ITEMS), ITEMS.to_vec());
        assert!(copy::<String>(&[]).is_empty());
    }

    #[test]
    fn test_reverse_in_place() {
        let mut items = ITEMS;
        reverse_in_place(&mut items);
        assert_eq!(items, [6, 4, 7, 3, 9, 1, 8, 2, 5]);

        let mut empty: [u8; 0] = [];
        reverse_in_place(&mut empty);

        let mut single = [1];
        reverse_in_place(&mut single);
        assert_eq!(single, [1]);
    }

    #[test]
    fn test_evens_and_string() {
        assert_eq!(evens(&ITEMS), [2, 8, 4, 6]);
        assert_eq!(evens(&[-2, -1, 0]), [-2, 0]);
        assert_eq!(to_bracketed_string(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(to_bracketed_string::<u8>(&[]), "[]");
    }

    #[test]
    fn test_sum_of_two_largest() {
        assert_eq!(sum_of_two_largest(&ITEMS), Ok(17));
        assert_eq!(sum_of_two_largest(&[9, 9, 1]), Ok(18), "A repeated maximum counts twice.");
        assert_eq!(sum_of_two_largest(&[-5, -7]), Ok(-12));
        assert_eq!(sum_of_two_largest(&[i64::MAX, i64::MAX]), Ok(i64::MAX));
        assert_eq!(sum_of_two_largest(&[i64::MIN, i64::MIN]), Ok(i64::MIN));
        assert_eq!(
            sum_of_two_largest(&[1]),
            Err(TooFewElements { required: 2, len: 1 })
        );
    }

    #[test]
    fn test_demo() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Maximum: 9"));
        assert!(text.contains("Found at index: 6"));
        assert!(text.contains("Average: 5.00"));
        assert!(text.contains("Count of 2: 4"));
        assert!(text.contains("After: [6, 4, 7, 3, 9, 1, 8, 2, 5]"));
        assert!(text.contains("Even numbers: [2, 8, 4, 6]"));
        assert!(text.contains("Sum of two largest: 17"));
    }

    #[cfg(feature = "linked")]
    #[test]
    fn test_demo_traversal() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1 -> 2 -> 3 -> 4 -> 5 -> null"));
        assert!(text.contains("Total nodes: 5"));
    }
}
