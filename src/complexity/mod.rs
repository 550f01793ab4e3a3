//! Demonstrations of the common time complexity classes, from `O(1)` up to `O(n!)`.
//!
//! Each submodule holds a handful of textbook algorithms from one class as plain functions, along
//! with a `demo` function that runs them on small fixed inputs and narrates the results to a
//! writer. The [`ComplexityClass`] enum names the classes and estimates how they grow.
//!
//! ```
//! use complexity_primer::complexity::{EmptyCollection, TooFewElements, linear, logarithmic};
//!
//! assert_eq!(linear::find_max(&[3, 9, 4]), Ok(&9));
//! assert_eq!(linear::find_max::<u8>(&[]), Err(EmptyCollection));
//! assert_eq!(logarithmic::find_peak::<u8>(&[]), Err(EmptyCollection));
//! assert_eq!(
//!     linear::sum_of_two_largest(&[1]),
//!     Err(TooFewElements { required: 2, len: 1 })
//! );
//! ```

mod class;

pub use class::*;
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds, TooFewElements};

pub mod constant;
pub mod exponential;
pub mod factorial;
pub mod linear;
pub mod linearithmic;
pub mod logarithmic;
pub mod quadratic;
#[cfg(feature = "timing")]
pub mod timing;
