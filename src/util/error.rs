use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Returned by operations that have no meaningful answer for an empty input, such as the maximum
/// of an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty collection!")
    }
}

impl Error for EmptyCollection {}

/// Returned by pairwise operations when the input holds fewer than `required` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooFewElements {
    pub required: usize,
    pub len: usize,
}

impl Display for TooFewElements {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operation requires at least {} elements, but the collection has {}!",
            self.required, self.len
        )
    }
}

impl Error for TooFewElements {}
