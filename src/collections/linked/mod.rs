//! Linked collection types. Primarily revolves around the singly linked [`LinkedList`], with
//! [`references`] covering the pointer concepts the list is built on.

mod demo;
pub mod list;
pub mod references;

pub use demo::{demo, references_demo};
#[doc(inline)]
pub use list::LinkedList;
#[doc(inline)]
pub use references::{NodeArena, NodeId, Shared};
