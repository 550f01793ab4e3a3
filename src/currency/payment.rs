use std::fmt::{self, Display, Formatter};
use std::io::BufRead;
use std::str::FromStr;

use log::debug;

use super::{CurrencyError, OutOfRange, ParseAmountError};

/// An amount of money, known to be finite and between `0` and [`Payment::MAX`] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Payment(f64);

impl Payment {
    /// The largest accepted amount, 10⁹.
    pub const MAX: f64 = 1_000_000_000.0;

    pub fn new(amount: f64) -> Result<Payment, OutOfRange> {
        // NaN fails the range check too.
        if (0.0..=Payment::MAX).contains(&amount) {
            // -0.0 is in range but would print its sign.
            Ok(Payment(amount.abs()))
        } else {
            Err(OutOfRange { amount })
        }
    }

    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl Display for Payment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Payment {
    type Err = CurrencyError;

    /// Parses a decimal number, ignoring surrounding whitespace, and checks that it is in range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let amount = input.parse::<f64>().map_err(|source| ParseAmountError {
            input: input.to_owned(),
            source,
        })?;
        Ok(Payment::new(amount)?)
    }
}

/// Reads a [`Payment`] from the first whitespace separated word of `reader`, skipping any blank
/// lines before it. Everything after that word is left unread or ignored.
pub fn read_payment(mut reader: impl BufRead) -> Result<Payment, CurrencyError> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(CurrencyError::MissingInput);
        }

        let token = line.split_whitespace().next();
        if let Some(token) = token {
            debug!("read amount '{token}'");
            return token.parse();
        }
    }
}
