use std::fmt::Display;
use std::io::{self, Write};

use log::debug;

use super::{LinkedList, NodeArena, Shared};

fn show<T: Display>(out: &mut impl Write, list: &LinkedList<T>) -> io::Result<()> {
    if list.is_empty() {
        writeln!(out, "List is empty!")
    } else {
        writeln!(out, "List: {list}")
    }
}

fn show_with_size<T: Display>(out: &mut impl Write, list: &LinkedList<T>) -> io::Result<()> {
    show(out, list)?;
    writeln!(out, "   Size: {}\n", list.len())
}

fn delete(out: &mut impl Write, list: &mut LinkedList<i32>, value: i32) -> io::Result<()> {
    if list.is_empty() {
        return writeln!(out, "List is empty, nothing to delete");
    }
    match list.remove_first(&value) {
        Some(_) => writeln!(out, "Deleted {value}"),
        None => writeln!(out, "{value} not found in the list"),
    }
}

/// Walks through building, searching and editing a singly linked list, followed by the practice
/// problems (length, maximum, reversal, middle, duplicates, merging).
pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Simple Linked List Program ===\n")?;

    let mut list = LinkedList::new();

    writeln!(out, "1. Creating an empty list:")?;
    show_with_size(out, &list)?;

    writeln!(out, "2. Adding nodes at the end:")?;
    for value in [10, 20, 30] {
        list.push_back(value);
        writeln!(out, "Added {value} at the end")?;
    }
    show_with_size(out, &list)?;

    writeln!(out, "3. Adding node at the beginning:")?;
    list.push_front(5);
    writeln!(out, "Added 5 at the beginning")?;
    show_with_size(out, &list)?;

    writeln!(out, "4. Adding more nodes:")?;
    for value in [40, 50] {
        list.push_back(value);
        writeln!(out, "Added {value} at the end")?;
    }
    show_with_size(out, &list)?;

    writeln!(out, "5. Searching for values:")?;
    writeln!(out, "   Is 20 in the list? {}", list.contains(&20))?;
    writeln!(out, "   Is 100 in the list? {}\n", list.contains(&100))?;

    writeln!(out, "6. Deleting a node:")?;
    show(out, &list)?;
    delete(out, &mut list, 30)?;
    show_with_size(out, &list)?;

    writeln!(out, "7. Deleting head node:")?;
    show(out, &list)?;
    delete(out, &mut list, 5)?;
    show_with_size(out, &list)?;

    writeln!(out, "8. Adding at specific position:")?;
    show(out, &list)?;
    match list.try_insert(1, 25) {
        Ok(()) => writeln!(out, "Added 25 at index 1")?,
        Err(error) => writeln!(out, "{error}")?,
    }
    show_with_size(out, &list)?;

    writeln!(out, "9. Final list:")?;
    show_with_size(out, &list)?;

    writeln!(out, "10. Traversing node by node:")?;
    let mut count = 0;
    for value in list.iter() {
        write!(out, "{value} -> ")?;
        count += 1;
    }
    writeln!(out, "null")?;
    writeln!(out, "   Total nodes: {count}\n")?;

    debug!("list walkthrough finished with {} nodes", list.len());
    practice(out)
}

fn practice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Linked List Practice Problems ===\n")?;

    let list = LinkedList::from_iter([10, 20, 30]);
    writeln!(out, "Practice 1: Find Length")?;
    writeln!(out, "{list}")?;
    writeln!(out, "Length: {}\n", list.len())?;

    let list = LinkedList::from_iter([5, 15, 10, 25]);
    writeln!(out, "Practice 2: Find Maximum")?;
    writeln!(out, "{list}")?;
    match list.max() {
        Some(max) => writeln!(out, "Maximum: {max}\n")?,
        None => writeln!(out, "Maximum: none (empty list)\n")?,
    }

    let mut list = LinkedList::from_iter([1, 2, 3]);
    writeln!(out, "Practice 3: Reverse List")?;
    writeln!(out, "Before: {list}")?;
    list.reverse();
    writeln!(out, "After: {list}\n")?;

    let list = LinkedList::from_iter([1, 2, 3, 4, 5]);
    writeln!(out, "Practice 4: Find Middle")?;
    writeln!(out, "{list}")?;
    if let Some(middle) = list.middle() {
        writeln!(out, "Middle: {middle}\n")?;
    }

    let mut list = LinkedList::from_iter([1, 1, 2, 3, 3]);
    writeln!(out, "Practice 5: Remove Duplicates From Sorted List")?;
    writeln!(out, "Before: {list}")?;
    list.dedup();
    writeln!(out, "After: {list}\n")?;

    let first = LinkedList::from_iter([1, 3, 5]);
    let second = LinkedList::from_iter([2, 4, 6]);
    writeln!(out, "Practice 6: Merge Two Sorted Lists")?;
    writeln!(out, "First: {first}")?;
    writeln!(out, "Second: {second}")?;
    writeln!(out, "Merged: {}\n", LinkedList::merge_sorted(first, second))?;

    let mut arena = NodeArena::new();
    writeln!(out, "Practice 7: Detect a Cycle")?;
    if let Some(head) = arena.chain([1, 2, 3, 4]) {
        writeln!(out, "{}", arena.render(head))?;
        writeln!(out, "Has cycle: {}", arena.has_cycle(head))?;

        let tail = arena.walk(head).last().map(|(id, _)| id);
        if let Some(tail) = tail {
            arena.link(tail, head).map_err(io::Error::other)?;
        }
        writeln!(out, "{}", arena.render(head))?;
        writeln!(out, "Has cycle: {}", arena.has_cycle(head))?;
    }

    Ok(())
}

/// Shows how references connect nodes: building a chain, inserting into and deleting from the
/// middle of it, and the difference between copying a reference and copying a value.
pub fn references_demo(out: &mut impl Write) -> io::Result<()> {
    demonstrate_references(out)?;
    writeln!(out, "\n{}\n", "=".repeat(50))?;
    demonstrate_insertion(out)?;
    writeln!(out, "\n{}\n", "=".repeat(50))?;
    demonstrate_deletion(out)?;
    writeln!(out, "\n{}\n", "=".repeat(50))?;
    demonstrate_reference_vs_value(out)?;

    writeln!(out, "\n=== Key Concepts ===")?;
    writeln!(out, "1. A reference (like 'next') identifies another node")?;
    writeln!(out, "2. Linking node1 to node2 makes node1's 'next' refer to node2")?;
    writeln!(out, "3. 'null' means the reference doesn't refer to anything")?;
    writeln!(out, "4. Following references: 'current = current.next' moves")?;
    writeln!(out, "   to the next node in the list")?;
    writeln!(out, "5. To delete a node, make the previous node skip it by")?;
    writeln!(out, "   referring directly to the next node")
}

fn demonstrate_references(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Understanding References (Pointers) ===\n")?;

    let mut arena = NodeArena::new();
    writeln!(out, "Step 1: Creating individual nodes")?;
    let nodes = [arena.alloc(10), arena.alloc(20), arena.alloc(30)];
    for id in nodes {
        if let Some(description) = arena.describe(id) {
            writeln!(out, "{id} -> {description}")?;
        }
    }
    writeln!(out, "(Each node exists independently)\n")?;

    writeln!(out, "Step 2: Connecting nodes using references")?;
    for pair in nodes.windows(2) {
        arena.link(pair[0], pair[1]).map_err(io::Error::other)?;
    }
    for id in nodes {
        if let Some(description) = arena.describe(id) {
            match arena.next(id) {
                Some(next) => writeln!(out, "{id} -> {description} -> {next}")?,
                None => writeln!(out, "{id} -> {description}")?,
            }
        }
    }
    writeln!(out, "(Now they form a linked list!)\n")?;

    writeln!(out, "Step 3: Traversing the list using references")?;
    writeln!(out, "Starting from {}, following the 'next' references:\n", nodes[0])?;
    for (step, (id, value)) in arena.walk(nodes[0]).enumerate() {
        writeln!(out, "Step {}:", step + 1)?;
        writeln!(out, "  current points to node with value: {value}")?;
        match arena.next(id).and_then(|next| arena.value(next)) {
            Some(next) => writeln!(out, "  current.next points to: node with value {next}\n")?,
            None => writeln!(out, "  current.next points to: null\n")?,
        }
    }
    writeln!(out, "Reached the end (null)!")
}

fn demonstrate_insertion(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Inserting a Node in the Middle ===\n")?;

    let mut arena = NodeArena::new();
    let Some(head) = arena.chain([10, 20, 30]) else {
        return Ok(());
    };
    writeln!(out, "Original list: {}", arena.render(head))?;
    writeln!(out, "\nWe want to insert 15 between 10 and 20\n")?;

    writeln!(out, "Step 1: Point the new node at 20, the node after 10")?;
    writeln!(out, "Step 2: Point 10 at the new node")?;
    arena.insert_after(head, 15).map_err(io::Error::other)?;

    writeln!(out, "\nFinal list: {}", arena.render(head))
}

fn demonstrate_deletion(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Deleting a Node ===\n")?;

    let mut arena = NodeArena::new();
    let Some(head) = arena.chain([10, 20, 30]) else {
        return Ok(());
    };
    writeln!(out, "Original list: {}", arena.render(head))?;
    writeln!(out, "We want to delete node with value 20\n")?;

    writeln!(out, "Step 1: Find the node to delete and its previous node")?;
    let mut previous = None;
    for (id, value) in arena.walk(head) {
        if *value == 20 {
            break;
        }
        previous = Some(id);
    }
    let Some(previous) = previous else {
        return writeln!(out, "20 is the head node, nothing precedes it");
    };
    if let Some(value) = arena.value(previous) {
        writeln!(out, "  previous points to node with value: {value}")?;
    }

    writeln!(out, "\nStep 2: Make previous point to current's next")?;
    if let Some(removed) = arena.remove_after(previous).map_err(io::Error::other)? {
        writeln!(out, "\nResult: {}", arena.render(head))?;
        writeln!(out, "({removed} is no longer accessible from the list)")?;
    }
    Ok(())
}

fn demonstrate_reference_vs_value(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Reference vs Value Copy ===\n")?;

    let node1 = Shared::new(100);
    writeln!(out, "node1 holds {}", node1.get())?;

    writeln!(out, "\nCase 1: Copying the reference")?;
    let node3 = node1.clone();
    writeln!(out, "node3 and node1 refer to the SAME value: {}", node3.same_as(&node1))?;
    node3.set(999);
    writeln!(out, "After setting node3 to 999, node1 is also {} (same value!)", node1.get())?;

    writeln!(out, "\nCase 2: Copying the value")?;
    let node4 = node1.deep_copy();
    node4.set(5);
    writeln!(out, "After setting the copy to 5, node1 is still {}", node1.get())?;
    writeln!(out, "node1 now has {} handles", node1.handles())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(run: fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_walkthrough() {
        let text = render(|out| demo(out));

        assert!(text.contains("List is empty!"));
        assert!(text.contains("List: 5 -> 10 -> 20 -> 30 -> 40 -> 50 -> null"));
        assert!(text.contains("Is 20 in the list? true"));
        assert!(text.contains("Is 100 in the list? false"));
        assert!(text.contains("Deleted 30"));
        assert!(text.contains("List: 10 -> 25 -> 20 -> 40 -> 50 -> null"));
        assert!(text.contains("9. Final list:"));
        assert!(text.contains("10. Traversing node by node:\n10 -> 25 -> 20 -> 40 -> 50 -> null"));
        assert!(text.contains("Total nodes: 5"));
        assert!(!text.contains("11. "), "The walkthrough should stop after ten steps.");
        assert!(text.contains("After: 3 -> 2 -> 1 -> null"));
        assert!(text.contains("Merged: 1 -> 2 -> 3 -> 4 -> 5 -> 6 -> null"));
        assert!(text.contains("1 -> 2 -> 3 -> 4 -> ... (back to 1)"));
    }

    #[test]
    fn test_references_walkthrough() {
        let text = render(|out| references_demo(out));

        assert!(text.contains("node1 -> [10 | null]"));
        assert!(text.contains("node1 -> [10 | next] -> node2"));
        assert!(text.contains("Final list: 10 -> 15 -> 20 -> 30 -> null"));
        assert!(text.contains("Result: 10 -> 30 -> null"));
        assert!(text.contains("node1 is also 999"));
        assert!(text.contains("node1 is still 999"));
    }
}
