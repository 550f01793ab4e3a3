use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Link, Node, seek_link, tail_link};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with links in one direction only. Each node owns the node after it, and the chain ends
/// with an empty link, which is displayed as `null`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(n)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `pop_front` | `O(1)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `remove_first` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `middle` | `O(n)` |
///
/// Without a tail pointer, anything that touches the end of the list has to walk the whole chain.
/// That is deliberate here: following `next` links one at a time is the thing being demonstrated.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the LinkedList. The length is stored rather than counted.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last element in the list, if it exists. This walks the entire
    /// list.
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        let old_head = self.head.take();
        self.head = Some(Node::boxed(value, old_head));
        self.len += 1;
    }

    /// Add the provided element to the back of the LinkedList, after walking to the last node.
    pub fn push_back(&mut self, value: T) {
        *tail_link(&mut self.head) = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.iter().nth(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.iter_mut().nth(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Inserts `value` so that it ends up at `index`, shifting every later element back by one.
    /// An `index` equal to the length appends to the list.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len;
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }

        let link = seek_link(&mut self.head, index).ok_or(IndexOutOfBounds { index, len })?;
        // The new node takes over whatever the previous node pointed to, then the previous node
        // is re-pointed at it.
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        let link = seek_link(&mut self.head, index).ok_or(IndexOutOfBounds { index, len })?;
        let node = link.take().ok_or(IndexOutOfBounds { index, len })?;

        // Skip the removed node by pointing its predecessor at its successor.
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    /// Replaces the element at `index`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    /// Reverses the list in place by re-pointing every `next` link at the node before it. No
    /// values are moved.
    pub fn reverse(&mut self) {
        let mut previous: Link<T> = None;
        let mut current = self.head.take();

        while let Some(mut node) = current {
            current = mem::replace(&mut node.next, previous);
            previous = Some(node);
        }

        self.head = previous;
    }

    /// Removes every element, leaving the list empty.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        // Unlink one node at a time so that dropping a long list doesn't recurse once per node.
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }

    /// Returns the middle element of the list, using a slow reference that moves one node at a
    /// time and a fast one that moves two. For an even length, the second of the two middle
    /// elements is returned.
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head.as_deref();
        let mut fast = self.head.as_deref();

        while let Some(node) = fast {
            let Some(after) = node.next.as_deref() else {
                break;
            };
            slow = slow.and_then(|node| node.next.as_deref());
            fast = after.next.as_deref();
        }

        slow.map(|node| &node.value)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    /// Removes the first element equal to `item` and returns it, or [`None`] if no element
    /// matches.
    pub fn remove_first(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        self.try_remove(index).ok()
    }

    /// Removes consecutive repeated elements, keeping the first of each run. On a sorted list this
    /// removes all duplicates.
    pub fn dedup(&mut self) {
        let mut removed = 0;
        let mut current = self.head.as_deref_mut();

        while let Some(node) = current {
            loop {
                match node.next.take() {
                    Some(next) if next.value == node.value => {
                        node.next = next.next;
                        removed += 1;
                    },
                    other => {
                        node.next = other;
                        break;
                    },
                }
            }
            current = node.next.as_deref_mut();
        }

        self.len -= removed;
    }
}

impl<T: Ord> LinkedList<T> {
    /// Returns the largest element in the list. If several elements are equally large, the last of
    /// them is returned.
    pub fn max(&self) -> Option<&T> {
        self.iter().max()
    }

    /// Merges two ascending lists into one ascending list by re-linking their nodes. When equal
    /// values are found, those from `first` come first.
    pub fn merge_sorted(mut first: LinkedList<T>, mut second: LinkedList<T>) -> LinkedList<T> {
        let len = first.len + second.len;
        let mut left = first.head.take();
        let mut right = second.head.take();
        first.len = 0;
        second.len = 0;

        let mut head: Link<T> = None;
        let mut tail = &mut head;

        loop {
            let next = match (left.take(), right.take()) {
                (Some(mut l), Some(mut r)) => {
                    if l.value <= r.value {
                        left = l.next.take();
                        right = Some(r);
                        l
                    } else {
                        right = r.next.take();
                        left = Some(l);
                        r
                    }
                },
                (Some(rest), None) | (None, Some(rest)) => {
                    *tail = Some(rest);
                    break;
                },
                (None, None) => break,
            };
            tail = &mut tail.insert(next).next;
        }

        LinkedList { head, len }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the end once, then keep hold of the last link while appending.
        let mut tail = tail_link(&mut self.head);
        let mut added = 0;
        for value in iter {
            tail = &mut tail.insert(Node::boxed(value, None)).next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "null")
    }
}
