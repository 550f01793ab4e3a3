//! `O(1)`: operations whose cost doesn't depend on the size of the input.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::io::{self, Write};

use super::ComplexityClass;
use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::Nullable;
use crate::util::option::OptionExtension;

/// Returns the first element by direct index access.
pub fn first<T>(items: &[T]) -> Result<&T, EmptyCollection> {
    items.first().or_empty()
}

/// Returns the last element. The position is calculated from the stored length, not found.
pub fn last<T>(items: &[T]) -> Result<&T, EmptyCollection> {
    items.last().or_empty()
}

/// Average case `O(1)`: the key is hashed straight to its bucket.
pub fn map_lookup<'a, K, V, Q>(map: &'a HashMap<K, V>, key: &Q) -> Option<&'a V>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
{
    map.get(key)
}

pub fn set_contains<T: Hash + Eq>(set: &HashSet<T>, value: &T) -> bool {
    set.contains(value)
}

pub const fn add(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

pub const fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Swaps two elements in place.
pub fn swap<T>(items: &mut [T], i: usize, j: usize) -> Result<(), IndexOutOfBounds> {
    let len = items.len();
    for index in [i, j] {
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
    }
    items.swap(i, j);
    Ok(())
}

/// The length of a slice is stored alongside its pointer, so this never counts anything.
pub const fn size<T>(items: &[T]) -> usize {
    items.len()
}

/// The results of pushing 10, 20 and 30 and then looking at and removing one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeekAndRemove {
    pub peeked: Option<i32>,
    pub removed: Option<i32>,
}

/// Last in, first out: both ends of the operation are the top of the stack.
pub fn stack_operations() -> PeekAndRemove {
    let mut stack = Vec::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);

    PeekAndRemove {
        peeked: stack.last().copied(),
        removed: stack.pop(),
    }
}

/// First in, first out: elements are added at the back and removed from the front.
pub fn queue_operations() -> PeekAndRemove {
    let mut queue = VecDeque::new();
    queue.push_back(10);
    queue.push_back(20);
    queue.push_back(30);

    PeekAndRemove {
        peeked: queue.front().copied(),
        removed: queue.pop_front(),
    }
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== {} Constant Time Examples ===\n", ComplexityClass::Constant)?;

    let items = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    if let (Ok(first), Ok(last)) = (first(&items), last(&items)) {
        writeln!(out, "1. First element: {first}")?;
        writeln!(out, "   Last element: {last}")?;
    }

    let map = HashMap::from([("apple", 5), ("banana", 3), ("cherry", 8)]);
    writeln!(out, "\n2. HashMap get('apple'): {}", Nullable(map_lookup(&map, "apple")))?;

    let set = HashSet::from([10, 20, 30]);
    writeln!(out, "\n3. HashSet contains(20): {}", set_contains(&set, &20))?;
    writeln!(out, "   HashSet contains(99): {}", set_contains(&set, &99))?;

    let stack = stack_operations();
    writeln!(out, "\n4. Stack operations:")?;
    writeln!(out, "Top element: {}", Nullable(stack.peeked))?;
    writeln!(out, "Popped element: {}", Nullable(stack.removed))?;

    let queue = queue_operations();
    writeln!(out, "\n5. Queue operations:")?;
    writeln!(out, "Front element: {}", Nullable(queue.peeked))?;
    writeln!(out, "Removed element: {}", Nullable(queue.removed))?;

    match add(15, 27) {
        Some(sum) => writeln!(out, "\n6. Add(15, 27): {sum}")?,
        None => writeln!(out, "\n6. Add(15, 27): overflow")?,
    }
    writeln!(out, "   Is 42 even? {}", is_even(42))?;
    writeln!(out, "   Is 43 even? {}", is_even(43))?;

    let mut swapped = [10, 20, 30, 40];
    writeln!(out, "\n7. Before swap: {swapped:?}")?;
    swap(&mut swapped, 0, 3).map_err(io::Error::other)?;
    writeln!(out, "   After swap: {swapped:?}")?;

    let list = vec![1, 2, 3];
    writeln!(out, "\n8. List size: {}", size(&list))?;

    writeln!(out, "\n=== All operations completed in {} time! ===", ComplexityClass::Constant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends() {
        let items = [4, 5, 6];
        assert_eq!(first(&items), Ok(&4));
        assert_eq!(last(&items), Ok(&6));
        assert_eq!(first::<u8>(&[]), Err(EmptyCollection));
        assert_eq!(last::<u8>(&[]), Err(EmptyCollection));
    }

    #[test]
    fn test_hashed_lookups() {
        let map = HashMap::from([("apple".to_owned(), 5)]);
        assert_eq!(map_lookup(&map, "apple"), Some(&5));
        assert_eq!(map_lookup(&map, "pear"), None);

        let set = HashSet::from([10, 20, 30]);
        assert!(set_contains(&set, &20));
        assert!(!set_contains(&set, &99));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(15, 27), Some(42));
        assert_eq!(add(i64::MAX, 1), None);
        assert!(is_even(42));
        assert!(!is_even(43));
        assert!(is_even(-4));
        assert!(!is_even(-3), "Negative odd numbers leave a remainder of -1.");
    }

    #[test]
    fn test_swap() {
        let mut items = [10, 20, 30, 40];
        swap(&mut items, 0, 3).unwrap();
        assert_eq!(items, [40, 20, 30, 10]);
        assert_eq!(swap(&mut items, 1, 4), Err(IndexOutOfBounds { index: 4, len: 4 }));
        assert_eq!(items, [40, 20, 30, 10], "A failed swap should leave the slice untouched.");
    }

    #[test]
    fn test_stack_and_queue() {
        assert_eq!(stack_operations(), PeekAndRemove { peeked: Some(30), removed: Some(30) });
        assert_eq!(queue_operations(), PeekAndRemove { peeked: Some(10), removed: Some(10) });
    }

    #[test]
    fn test_demo() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. First element: 1"));
        assert!(text.contains("HashMap get('apple'): 5"));
        assert!(text.contains("After swap: [40, 20, 30, 10]"));
        assert!(text.contains("8. List size: 3"));
        assert!(text.contains("Top element: 30"));
        assert!(text.contains("Removed element: 10"));
    }
}
