use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::num::ParseFloatError;

use derive_more::{Display, Error, From, IsVariant};

use super::Payment;

/// The amount given for a [`Payment`] was negative, too large or not a finite number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfRange {
    pub amount: f64,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Amount must be between 0 and {}, but was {}!",
            Payment::MAX,
            self.amount
        )
    }
}

impl Error for OutOfRange {}

/// The input couldn't be read as a number at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAmountError {
    pub input: String,
    pub source: ParseFloatError,
}

impl Display for ParseAmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid amount: {}!", self.input, self.source)
    }
}

impl Error for ParseAmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum CurrencyError {
    OutOfRange(OutOfRange),
    Parse(ParseAmountError),
    Io(io::Error),
    #[from(ignore)]
    #[display("No amount was given!")]
    MissingInput,
}
