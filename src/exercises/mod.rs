//! Short interview-style exercises, each solved the straightforward way.
//!
//! ```
//! use complexity_primer::exercises::{self, EmptyCollection};
//!
//! assert_eq!(exercises::two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
//! assert_eq!(exercises::smallest::<i32>(&[]), Err(EmptyCollection));
//! ```

mod arrays;
mod demo;
mod palindrome;
mod recursion;
mod reverse;
pub mod strings;
mod tests;
mod two_sum;

pub use arrays::*;
pub use demo::demo;
pub use palindrome::*;
pub use recursion::*;
pub use reverse::*;
pub use two_sum::*;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
