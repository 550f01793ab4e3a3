//! Formatting a payment amount the way four different countries write money.
//!
//! ```
//! use complexity_primer::currency::{self, Locale, Payment};
//!
//! let payment = "12324.134".parse::<Payment>().unwrap();
//! assert_eq!(currency::format(payment, Locale::Us), "$12,324.13");
//! assert_eq!(currency::format(payment, Locale::France), "12 324,13 €");
//! ```

mod error;
mod format;
mod locale;
mod payment;
mod tests;

pub use error::*;
pub use format::*;
pub use locale::*;
pub use payment::*;
