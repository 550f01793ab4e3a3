use derive_more::{Display, IsVariant};

/// The countries a [`Payment`](super::Payment) can be formatted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, IsVariant)]
pub enum Locale {
    #[display("US")]
    Us,
    India,
    China,
    France,
}

use Locale::*;

impl Locale {
    pub const ALL: [Locale; 4] = [Us, India, China, France];

    pub const fn display_name(self) -> &'static str {
        match self {
            Us => "US",
            India => "India",
            China => "China",
            France => "France",
        }
    }

    pub(crate) const fn style(self) -> Style {
        match self {
            Us => Style { prefix: "$", suffix: "", grouping: ',', decimal: '.' },
            India => Style { prefix: "Rs.", suffix: "", grouping: ',', decimal: '.' },
            China => Style { prefix: "￥", suffix: "", grouping: ',', decimal: '.' },
            France => Style { prefix: "", suffix: " €", grouping: ' ', decimal: ',' },
        }
    }
}

/// How a locale writes an amount: the currency symbol on either side of the number, what goes
/// between each group of three digits, and what separates the cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Style {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub grouping: char,
    pub decimal: char,
}
