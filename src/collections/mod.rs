//! Collection types written out by hand.
//!
//! # Purpose
//! The point of these types is the links between nodes rather than the storage itself: pushing,
//! inserting and deleting all come down to re-pointing a reference.

#[cfg(feature = "linked")]
pub mod linked;
