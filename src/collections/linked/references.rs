//! References, aliasing and pointer-following, separated from any particular list type.
//!
//! [`Shared`] shows what it means for two handles to refer to the same value: a write through one
//! handle is visible through the other. [`NodeArena`] stores nodes whose `next` links are plain
//! [`NodeId`]s, so chains can be built, spliced and even made cyclic by hand, which is impossible
//! with the owned links of [`LinkedList`](super::LinkedList).

use std::cell::{Ref, RefCell};
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use derive_more::{Display, Error};
use log::trace;

/// A handle to a value that may have several owners. Cloning the handle copies the reference, not
/// the value.
#[derive(Debug, Default)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Shared<T> {
        Shared(Rc::new(RefCell::new(value)))
    }

    /// Replaces the referenced value, returning the old one. Every handle observes the change.
    pub fn set(&self, value: T) -> T {
        self.0.replace(value)
    }

    /// Borrows the referenced value.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed mutably through [`Shared::update`].
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    /// Returns true if both handles refer to the same value, rather than to equal values.
    pub fn same_as(&self, other: &Shared<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The number of handles referring to this value.
    pub fn handles(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl<T: Clone> Shared<T> {
    /// Returns a copy of the referenced value. Changing the copy doesn't affect any handle.
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }

    /// Creates a new, independent handle holding a copy of the value.
    pub fn deep_copy(&self) -> Shared<T> {
        Shared::new(self.get())
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

/// Identifies a node within the [`NodeArena`] that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "node{}", self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{id} does not belong to this arena!")]
pub struct UnknownNode {
    pub id: NodeId,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    next: Option<NodeId>,
}

/// A pool of nodes connected by [`NodeId`] links. Nodes are never freed: a node that is unlinked
/// stays allocated but becomes unreachable from the rest of the chain.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
}

impl<T> NodeArena<T> {
    pub const fn new() -> NodeArena<T> {
        NodeArena { slots: Vec::new() }
    }

    /// The number of nodes ever allocated, reachable or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Allocates a detached node, `[value | null]`.
    pub fn alloc(&mut self, value: T) -> NodeId {
        self.slots.push(Slot { value, next: None });
        NodeId(self.slots.len() - 1)
    }

    /// Allocates one node per value and links them in order, returning the first node.
    pub fn chain(&mut self, values: impl IntoIterator<Item = T>) -> Option<NodeId> {
        let mut head = None;
        let mut previous: Option<NodeId> = None;

        for value in values {
            let id = self.alloc(value);
            match previous {
                Some(prev) => self.slots[prev.0].next = Some(id),
                None => head = Some(id),
            }
            previous = Some(id);
        }

        head
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0).map(|slot| &slot.value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.value)
    }

    /// Follows the `next` link of `id`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.next)
    }

    /// Points the `next` link of `from` at `to`, returning what it pointed at before.
    pub fn link(&mut self, from: NodeId, to: NodeId) -> Result<Option<NodeId>, UnknownNode> {
        self.check(to)?;
        Ok(self.slot_mut(from)?.next.replace(to))
    }

    /// Clears the `next` link of `from`, returning what it pointed at before.
    pub fn unlink(&mut self, from: NodeId) -> Result<Option<NodeId>, UnknownNode> {
        Ok(self.slot_mut(from)?.next.take())
    }

    /// Allocates a node holding `value` directly after `node`. The new node is pointed at the old
    /// successor first, then `node` is pointed at the new node.
    pub fn insert_after(&mut self, node: NodeId, value: T) -> Result<NodeId, UnknownNode> {
        self.check(node)?;
        let new_node = self.alloc(value);
        let old_next = self.slots[node.0].next;
        self.slots[new_node.0].next = old_next;
        self.slots[node.0].next = Some(new_node);
        Ok(new_node)
    }

    /// Makes `node` skip its successor, returning the skipped node if there was one.
    pub fn remove_after(&mut self, node: NodeId) -> Result<Option<NodeId>, UnknownNode> {
        self.check(node)?;
        let Some(removed) = self.slots[node.0].next else {
            return Ok(None);
        };
        let after = self.slots[removed.0].next.take();
        self.slots[node.0].next = after;
        Ok(Some(removed))
    }

    /// Iterates over the chain starting at `start`, yielding each node at most once.
    pub fn walk(&self, start: NodeId) -> Walk<'_, T> {
        Walk {
            arena: self,
            next: self.slots.get(start.0).map(|_| start),
            visited: vec![false; self.slots.len()],
        }
    }

    /// Returns true if following `next` links from `start` never reaches the end of the chain.
    ///
    /// Uses Floyd's cycle detection: a slow reference moves one node per step and a fast one moves
    /// two. If there is a cycle, the fast reference eventually laps the slow one and they meet.
    pub fn has_cycle(&self, start: NodeId) -> bool {
        let mut slow = Some(start);
        let mut fast = Some(start);
        let mut steps = 0_usize;

        loop {
            fast = fast.and_then(|id| self.next(id)).and_then(|id| self.next(id));
            slow = slow.and_then(|id| self.next(id));
            steps += 1;

            match (slow, fast) {
                (_, None) => {
                    trace!("chain from {start} ends after {steps} fast steps");
                    return false;
                },
                (Some(s), Some(f)) if s == f => {
                    trace!("references met at {s} after {steps} steps");
                    return true;
                },
                _ => {},
            }
        }
    }

    fn check(&self, id: NodeId) -> Result<(), UnknownNode> {
        if id.0 < self.slots.len() { Ok(()) } else { Err(UnknownNode { id }) }
    }

    fn slot_mut(&mut self, id: NodeId) -> Result<&mut Slot<T>, UnknownNode> {
        self.slots.get_mut(id.0).ok_or(UnknownNode { id })
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> NodeArena<T> {
    /// Renders the chain from `start` as `10 -> 20 -> null`. A chain that loops back on itself is
    /// cut at the first repeated node, shown as `... (back to 10)`.
    pub fn render(&self, start: NodeId) -> String {
        let mut out = String::new();
        let mut last = None;
        for (id, value) in self.walk(start) {
            out.push_str(&format!("{value} -> "));
            last = Some(id);
        }

        match last.and_then(|id| self.next(id)).and_then(|id| self.value(id)) {
            Some(value) => out.push_str(&format!("... (back to {value})")),
            None => out.push_str("null"),
        }
        out
    }

    /// Renders a single node as `[10 | next]` or `[10 | null]`.
    pub fn describe(&self, id: NodeId) -> Option<String> {
        let slot = self.slots.get(id.0)?;
        Some(match slot.next {
            Some(_) => format!("[{} | next]", slot.value),
            None => format!("[{} | null]", slot.value),
        })
    }
}

pub struct Walk<'a, T> {
    arena: &'a NodeArena<T>,
    next: Option<NodeId>,
    visited: Vec<bool>,
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        self.visited[id.0] = true;
        self.next = self.arena.next(id).filter(|next| !self.visited[next.0]);
        Some((id, &self.arena.slots[id.0].value))
    }
}
