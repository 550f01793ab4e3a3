//! `O(n²)`: nested loops over the input, usually touching every pair of elements. Doubling the
//! input quadruples the work.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

use super::ComplexityClass;
use crate::util::error::TooFewElements;
use crate::util::fmt::Listed;

/// Sorts a slice by repeatedly swapping adjacent elements that are out of order. After pass `i`,
/// the last `i + 1` elements are in their final positions.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for pass in 0..len.saturating_sub(1) {
        for index in 0..len - pass - 1 {
            if items[index] > items[index + 1] {
                items.swap(index, index + 1);
            }
        }
    }
}

/// Sorts a slice by repeatedly selecting the smallest remaining element and swapping it to the
/// front of the unsorted region.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for start in 0..len.saturating_sub(1) {
        let mut min = start;
        for index in start + 1..len {
            if items[index] < items[min] {
                min = index;
            }
        }
        items.swap(start, min);
    }
}

/// Sorts a slice by moving each element left past every larger element before it.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for start in 1..items.len() {
        let mut index = start;
        while index > 0 && items[index - 1] > items[index] {
            items.swap(index - 1, index);
            index -= 1;
        }
    }
}

/// Returns every value that occurs more than once, each reported a single time, in the order the
/// outer loop first finds it repeated.
pub fn find_duplicates<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut duplicates = Vec::new();
    for (i, item) in items.iter().enumerate() {
        for other in &items[i + 1..] {
            if item == other && !duplicates.contains(item) {
                duplicates.push(item.clone());
            }
        }
    }
    duplicates
}

/// Returns the values of every index pair `i < j` whose elements sum to `target`.
pub fn find_pairs(items: &[i64], target: i64) -> Vec<(i64, i64)> {
    let mut pairs = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        for &second in &items[i + 1..] {
            if first.checked_add(second) == Some(target) {
                pairs.push((first, second));
            }
        }
    }
    pairs
}

pub fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    for (i, item) in items.iter().enumerate() {
        for other in &items[i + 1..] {
            if item == other {
                return true;
            }
        }
    }
    false
}

/// Returns the largest product of two elements at different indices. Products that overflow
/// saturate at the bounds of `i64`.
pub fn max_product(items: &[i64]) -> Result<i64, TooFewElements> {
    if items.len() < 2 {
        return Err(TooFewElements { required: 2, len: items.len() });
    }

    let mut max = i64::MIN;
    for (i, &first) in items.iter().enumerate() {
        for &second in &items[i + 1..] {
            max = max.max(first.saturating_mul(second));
        }
    }
    Ok(max)
}

/// Returned by [`transpose`] when the rows of a matrix don't all have the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaggedMatrix {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

impl Display for RaggedMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row {} has {} columns, but the first row has {}!",
            self.row, self.found, self.expected
        )
    }
}

impl Error for RaggedMatrix {}

/// Swaps the rows and columns of a rectangular matrix. An empty matrix transposes to an empty
/// matrix.
pub fn transpose<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>, RaggedMatrix> {
    let Some(first) = matrix.first() else {
        return Ok(Vec::new());
    };
    let cols = first.len();
    for (row, values) in matrix.iter().enumerate() {
        if values.len() != cols {
            return Err(RaggedMatrix { row, expected: cols, found: values.len() });
        }
    }

    let mut transposed = Vec::with_capacity(cols);
    for col in 0..cols {
        let mut column = Vec::with_capacity(matrix.len());
        for row in matrix {
            column.push(row[col].clone());
        }
        transposed.push(column);
    }
    Ok(transposed)
}

/// Finds the longest substring of `first` that also appears in `second` by checking every
/// substring of `first`. If there are several of the same length, the first found wins.
pub fn longest_common_substring(first: &str, second: &str) -> String {
    let chars = first.chars().collect::<Vec<_>>();
    let mut longest = String::new();
    let mut longest_len = 0;

    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            if end - start <= longest_len {
                continue;
            }
            let candidate = chars[start..end].iter().collect::<String>();
            if second.contains(&candidate) {
                longest = candidate;
                longest_len = end - start;
            }
        }
    }
    longest
}

/// Returns every contiguous, non-empty subarray, ordered by start index and then by end index.
pub fn subarrays<T>(items: &[T]) -> Vec<&[T]> {
    let mut found = Vec::with_capacity(items.len() * (items.len() + 1) / 2);
    for start in 0..items.len() {
        for end in start + 1..=items.len() {
            found.push(&items[start..end]);
        }
    }
    found
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== {} Quadratic Time Examples ===\n", ComplexityClass::Quadratic)?;

    let sorts: [(&str, fn(&mut [i32])); 3] = [
        ("1. Bubble Sort:", bubble_sort),
        ("\n2. Selection Sort:", selection_sort),
        ("\n3. Insertion Sort:", insertion_sort),
    ];
    for (title, sort) in sorts {
        let mut items = [64, 34, 25, 12, 22, 11, 90, 5];
        writeln!(out, "{title}")?;
        writeln!(out, "   Before: {}", Listed(&items))?;
        sort(&mut items);
        writeln!(out, "   After: {}", Listed(&items))?;
    }

    writeln!(out, "\n4. Find Duplicates:")?;
    let items = [1, 2, 3, 2, 4, 5, 3, 6, 7, 3];
    writeln!(out, "   Array: {}", Listed(&items))?;
    writeln!(out, "   Duplicates: {}", Listed(&find_duplicates(&items)))?;
    writeln!(out, "   Note: Better solution uses HashSet for O(n)")?;

    writeln!(out, "\n5. Find Pairs that Sum to Target:")?;
    let items = [2, 7, 11, 15, 3, 6];
    writeln!(out, "   Array: {}", Listed(&items))?;
    writeln!(out, "   Pairs that sum to 9:")?;
    for (first, second) in find_pairs(&items, 9) {
        writeln!(out, "     [{first}, {second}]")?;
    }
    writeln!(out, "   Note: Better solution uses HashMap for O(n)")?;

    writeln!(out, "\n6. Check for Duplicates:")?;
    for items in [[1, 2, 3, 4, 5], [1, 2, 3, 2, 4]] {
        writeln!(out, "   Array: {}", Listed(&items))?;
        writeln!(out, "   Has duplicates: {}", has_duplicates(&items))?;
    }

    writeln!(out, "\n7. Maximum Product of Two Numbers:")?;
    let items = [1, 2, 3, 4, 5];
    writeln!(out, "   Array: {}", Listed(&items))?;
    writeln!(out, "   Max product: {}", max_product(&items).map_err(io::Error::other)?)?;

    writeln!(out, "\n8. Transpose Matrix:")?;
    let matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
    writeln!(out, "   Original:")?;
    for row in &matrix {
        writeln!(out, "     {}", Listed(row))?;
    }
    writeln!(out, "   Transposed:")?;
    for row in transpose(&matrix).map_err(io::Error::other)? {
        writeln!(out, "     {}", Listed(&row))?;
    }

    writeln!(out, "\n9. Longest Common Substring:")?;
    let (first, second) = ("abcdef", "abcfed");
    writeln!(out, "   String 1: {first}")?;
    writeln!(out, "   String 2: {second}")?;
    writeln!(out, "   Longest common substring: {}", longest_common_substring(first, second))?;

    writeln!(out, "\n10. Print All Subarrays (small example):")?;
    writeln!(out, "All subarrays:")?;
    for subarray in subarrays(&[1, 2, 3]) {
        writeln!(out, "{}", Listed(subarray))?;
    }

    writeln!(out, "\n=== Performance Warning ===")?;
    for size in [10, 100, 1000] {
        let operations = ComplexityClass::Quadratic.estimated_operations(size).unwrap_or(0);
        writeln!(
            out,
            "For array of size {size}: ~{} operations",
            super::group_thousands(operations)
        )?;
    }
    writeln!(out, "O(n²) algorithms become very slow for large inputs!")?;
    writeln!(out, "Consider optimizing to O(n log n) or O(n) when possible.")?;

    writeln!(out, "\n=== All operations completed in {} time! ===", ComplexityClass::Quadratic)
}
