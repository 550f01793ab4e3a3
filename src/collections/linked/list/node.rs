pub(crate) type Link<T> = Option<Box<Node<T>>>;

// NOTE: Every node owns its successor, so the chain can never form a cycle and dropping the head
// releases the whole list. Cyclic chains are only possible through `references::NodeArena`.

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { value, next })
    }
}

/// Follows `next` links from `link` until reaching the empty link at the end of the chain.
pub(crate) fn tail_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Returns the link found after following `count` nodes from `link`, or [`None`] if the chain ends
/// first.
pub(crate) fn seek_link<T>(mut link: &mut Link<T>, count: usize) -> Option<&mut Link<T>> {
    for _ in 0..count {
        link = &mut link.as_mut()?.next;
    }
    Some(link)
}
