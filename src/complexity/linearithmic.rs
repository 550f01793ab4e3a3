//! `O(n log n)`: divide and conquer, where the input is split `log n` times and every level does
//! `O(n)` work. This is the best a comparison sort can do.

use std::cmp::Ordering;
use std::io::{self, Write};

use derive_more::{Display, Error, IsVariant};

use super::ComplexityClass;
use crate::util::fmt::Listed;

/// Sorts a slice with top-down merge sort. The sort is stable.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);
    merge(items, mid);
}

/// Merges the sorted halves `items[..mid]` and `items[mid..]`, returning the number of inversions
/// between them: pairs where an element of the right half is smaller than one of the left.
fn merge<T: Ord + Clone>(items: &mut [T], mid: usize) -> u64 {
    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    let mut inversions = 0;
    while i < left.len() && j < right.len() {
        // Taking from the left on ties keeps the sort stable.
        if left[i] <= right[j] {
            items[k] = left[i].clone();
            i += 1;
        } else {
            items[k] = right[j].clone();
            j += 1;
            // Everything still waiting in the left half is larger than this element.
            inversions += (left.len() - i) as u64;
        }
        k += 1;
    }

    for item in left[i..].iter().chain(&right[j..]) {
        items[k] = item.clone();
        k += 1;
    }
    inversions
}

/// Sorts a slice with quick sort, using the Lomuto partition scheme with the last element as the
/// pivot. `O(n log n)` on average, but `O(n²)` for input that is already sorted.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }

    let pivot = partition(items);
    let (left, right) = items.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

fn partition<T: Ord>(items: &mut [T]) -> usize {
    let pivot = items.len() - 1;
    let mut store = 0;
    for index in 0..pivot {
        if items[index] < items[pivot] {
            items.swap(store, index);
            store += 1;
        }
    }
    items.swap(store, pivot);
    store
}

/// Sorts a slice by building a max-heap in place and then repeatedly moving its root to the end.
/// `O(n log n)` in every case.
pub fn heap_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for index in (0..len / 2).rev() {
        sift_down(items, len, index);
    }
    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, end, 0);
    }
}

fn sift_down<T: Ord>(items: &mut [T], len: usize, mut index: usize) {
    loop {
        let mut largest = index;
        let left = 2 * index + 1;
        let right = left + 1;

        if left < len && items[left] > items[largest] {
            largest = left;
        }
        if right < len && items[right] > items[largest] {
            largest = right;
        }
        if largest == index {
            return;
        }
        items.swap(index, largest);
        index = largest;
    }
}

/// Sorts with the standard library's stable sort, a merge-based hybrid in the same family as
/// TimSort.
pub fn builtin_sort<T: Ord>(items: &mut [T]) {
    items.sort();
}

/// Returns the elements common to both slices, in ascending order.
///
/// Sorted copies of both inputs are walked with two cursors, so a value appearing `a` times in one
/// and `b` times in the other appears `min(a, b)` times in the result. The inputs are left as they
/// are.
pub fn intersection<T: Ord + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut first = first.to_vec();
    let mut second = second.to_vec();
    first.sort();
    second.sort();

    let mut common = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < first.len() && j < second.len() {
        match first[i].cmp(&second[j]) {
            Ordering::Equal => {
                common.push(first[i].clone());
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }
    common
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum KthLargestError {
    #[display("k is counted from 1, so it can't be 0!")]
    ZeroRank,
    #[display("Can't take the largest element at rank {k} from {len} elements!")]
    RankTooLarge { k: usize, len: usize },
}

/// Returns the `k`th largest element by sorting a copy of the input, where `k = 1` is the maximum.
pub fn kth_largest<T: Ord + Clone>(items: &[T], k: usize) -> Result<T, KthLargestError> {
    if k == 0 {
        return Err(KthLargestError::ZeroRank);
    }
    if k > items.len() {
        return Err(KthLargestError::RankTooLarge { k, len: items.len() });
    }

    let mut sorted = items.to_vec();
    sorted.sort();
    Ok(sorted.swap_remove(sorted.len() - k))
}

/// Counts the pairs `i < j` where `items[i] > items[j]`, by merge sorting a copy of the input and
/// totalling the inversions found at each merge.
pub fn count_inversions<T: Ord + Clone>(items: &[T]) -> u64 {
    let mut copy = items.to_vec();
    sort_counting(&mut copy)
}

fn sort_counting<T: Ord + Clone>(items: &mut [T]) -> u64 {
    if items.len() <= 1 {
        return 0;
    }

    let mid = items.len() / 2;
    let left = sort_counting(&mut items[..mid]);
    let right = sort_counting(&mut items[mid..]);
    left + right + merge(items, mid)
}

fn sort_demo(
    out: &mut impl Write,
    title: &str,
    sort: fn(&mut [i32]),
    complexity: Option<&str>,
) -> io::Result<()> {
    let mut items = [64, 34, 25, 12, 22, 11, 90, 5];
    writeln!(out, "{title}")?;
    writeln!(out, "   Before: {}", Listed(&items))?;
    sort(&mut items);
    writeln!(out, "   After: {}", Listed(&items))?;
    if let Some(complexity) = complexity {
        writeln!(out, "   Complexity: {complexity}")?;
    }
    Ok(())
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== {} Linearithmic Time Examples ===\n", ComplexityClass::Linearithmic)?;

    sort_demo(out, "1. Merge Sort:", merge_sort, Some("O(n log n) - divide and conquer"))?;
    sort_demo(
        out,
        "\n2. Quick Sort:",
        quick_sort,
        Some("O(n log n) average, O(n²) worst case"),
    )?;
    sort_demo(out, "\n3. Heap Sort:", heap_sort, Some("O(n log n) guaranteed"))?;
    sort_demo(out, "\n4. Built-in sort (stable merge sort):", builtin_sort, None)?;

    writeln!(out, "\n5. Find Intersection of Two Arrays:")?;
    let first = [1, 2, 3, 4, 5];
    let second = [3, 4, 5, 6, 7];
    writeln!(out, "   Array 1: {}", Listed(&first))?;
    writeln!(out, "   Array 2: {}", Listed(&second))?;
    writeln!(out, "   Intersection: {}", Listed(&intersection(&first, &second)))?;

    writeln!(out, "\n6. Find Kth Largest Element:")?;
    let items = [3, 2, 1, 5, 6, 4];
    writeln!(out, "   Array: {}", Listed(&items))?;
    writeln!(out, "   2nd largest: {}", kth_largest(&items, 2).map_err(io::Error::other)?)?;

    writeln!(out, "\n7. Count Inversions:")?;
    let items = [2, 4, 1, 3, 5];
    writeln!(out, "   Array: {}", Listed(&items))?;
    writeln!(out, "   Number of inversions: {}", count_inversions(&items))?;
    writeln!(out, "   (Inversions: (2,1), (4,1), (4,3))")?;

    writeln!(out, "\n=== Performance Insight ===")?;
    for size in [10, 100, 1000] {
        let operations = ComplexityClass::Linearithmic.estimated_operations(size).unwrap_or(0);
        writeln!(
            out,
            "For array of size {size}: ~{} operations",
            super::group_thousands(operations)
        )?;
    }
    writeln!(out, "Much better than O(n²) but slower than O(n)")?;

    writeln!(out, "\n=== All operations completed in {} time! ===", ComplexityClass::Linearithmic)?;
    writeln!(out, "This is the best possible complexity for comparison-based sorting!")
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSORTED: [i32; 8] = [64, 34, 25, 12, 22, 11, 90, 5];
    const SORTED: [i32; 8] = [5, 11, 12, 22, 25, 34, 64, 90];

    fn check_sort(sort: fn(&mut [i32])) {
        let mut items = UNSORTED;
        sort(&mut items);
        assert_eq!(items, SORTED);

        let mut items = [3, 1, 3, 2, 1, 3];
        sort(&mut items);
        assert_eq!(items, [1, 1, 2, 3, 3, 3], "Duplicates should survive sorting.");

        let mut items = SORTED;
        sort(&mut items);
        assert_eq!(items, SORTED);

        let mut items: [i32; 0] = [];
        sort(&mut items);

        let mut items = [1];
        sort(&mut items);
        assert_eq!(items, [1]);
    }

    #[test]
    fn test_sorts() {
        check_sort(merge_sort);
        check_sort(quick_sort);
        check_sort(heap_sort);
        check_sort(builtin_sort);
    }

    #[test]
    fn test_merge_sort_stable() {
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Keyed(u8, char);

        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut items = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        merge_sort(&mut items);
        assert_eq!(items, [Keyed(1, 'b'), Keyed(1, 'd'), Keyed(2, 'a'), Keyed(2, 'c')]);
    }

    #[test]
    fn test_intersection() {
        assert_eq!(intersection(&[1, 2, 3, 4, 5], &[3, 4, 5, 6, 7]), [3, 4, 5]);
        assert_eq!(intersection(&[5, 1, 3], &[3, 5, 9]), [3, 5]);
        assert_eq!(intersection(&[2, 2, 2, 1], &[2, 2, 3]), [2, 2]);
        assert!(intersection(&[1, 2], &[3, 4]).is_empty());
        assert!(intersection::<u8>(&[], &[1]).is_empty());
    }

    #[test]
    fn test_kth_largest() {
        let items = [3, 2, 1, 5, 6, 4];
        assert_eq!(kth_largest(&items, 1), Ok(6));
        assert_eq!(kth_largest(&items, 2), Ok(5));
        assert_eq!(kth_largest(&items, 6), Ok(1));
        assert_eq!(kth_largest(&items, 0), Err(KthLargestError::ZeroRank));
        assert_eq!(kth_largest(&items, 7), Err(KthLargestError::RankTooLarge { k: 7, len: 6 }));
        assert!(kth_largest::<u8>(&[], 1).unwrap_err().is_rank_too_large());
        assert_eq!(items, [3, 2, 1, 5, 6, 4], "The input should not be sorted in place.");
    }

    #[test]
    fn test_count_inversions() {
        let items = [2, 4, 1, 3, 5];
        assert_eq!(count_inversions(&items), 3);
        assert_eq!(items, [2, 4, 1, 3, 5]);
        assert_eq!(count_inversions(&[1, 2, 3]), 0);
        assert_eq!(count_inversions(&[3, 2, 1]), 3);
        assert_eq!(count_inversions(&[1, 1, 1]), 0, "Equal elements aren't inversions.");
        assert_eq!(count_inversions::<u8>(&[]), 0);
    }

    #[test]
    fn test_demo() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("After: [5, 11, 12, 22, 25, 34, 64, 90]").count(), 4);
        assert!(text.contains("Intersection: [3, 4, 5]"));
        assert!(text.contains("2nd largest: 5"));
        assert!(text.contains("Number of inversions: 3"));
        assert!(text.contains("For array of size 1000: ~9,965 operations"));
    }
}
