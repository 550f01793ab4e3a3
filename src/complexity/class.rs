use std::fmt::{self, Formatter};

use derive_more::{Display, IsVariant};

/// The growth rates demonstrated by this crate, ordered from slowest-growing to fastest-growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, IsVariant)]
pub enum ComplexityClass {
    #[display("O(1)")]
    Constant,
    #[display("O(log n)")]
    Logarithmic,
    #[display("O(n)")]
    Linear,
    #[display("O(n log n)")]
    Linearithmic,
    #[display("O(n²)")]
    Quadratic,
    #[display("O(2ⁿ)")]
    Exponential,
    #[display("O(n!)")]
    Factorial,
}

use ComplexityClass::*;

impl ComplexityClass {
    pub const ALL: [ComplexityClass; 7] = [
        Constant,
        Logarithmic,
        Linear,
        Linearithmic,
        Quadratic,
        Exponential,
        Factorial,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Constant => "Constant",
            Logarithmic => "Logarithmic",
            Linear => "Linear",
            Linearithmic => "Linearithmic",
            Quadratic => "Quadratic",
            Exponential => "Exponential",
            Factorial => "Factorial",
        }
    }

    /// Returns the approximate number of basic operations an algorithm in this class performs for
    /// an input of size `n`, or [`None`] if that number doesn't fit in a `u64`.
    ///
    /// Logarithms are base 2 and rounded down, with `log(0)` taken as 0.
    pub fn estimated_operations(self, n: u64) -> Option<u64> {
        match self {
            Constant => Some(1),
            Logarithmic => Some(log2(n)),
            Linear => Some(n),
            Linearithmic => linearithmic(n),
            Quadratic => n.checked_mul(n),
            Exponential => u32::try_from(n).ok().and_then(|exp| 2_u64.checked_pow(exp)),
            Factorial => (1..=n).try_fold(1_u64, |acc, i| acc.checked_mul(i)),
        }
    }
}

fn log2(n: u64) -> u64 {
    n.checked_ilog2().map_or(0, u64::from)
}

fn linearithmic(n: u64) -> Option<u64> {
    // Computed as floor(n * log2(n)) rather than n * floor(log2(n)), which underestimates badly
    // between powers of two.
    if n < 2 {
        return Some(0);
    }
    let exact = n as f64 * (n as f64).log2();
    if exact >= u64::MAX as f64 { None } else { Some(exact.floor() as u64) }
}

/// Renders a table of estimated operation counts, one row per input size and one column per
/// class. Counts that overflow are shown as `overflow`.
pub fn growth_table<'a>(sizes: &'a [u64], classes: &'a [ComplexityClass]) -> GrowthTable<'a> {
    GrowthTable { sizes, classes }
}

/// The table built by [`growth_table`], rendered through its [`Display`](fmt::Display)
/// implementation.
#[derive(Debug, Clone, Copy)]
pub struct GrowthTable<'a> {
    sizes: &'a [u64],
    classes: &'a [ComplexityClass],
}

impl fmt::Display for GrowthTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:<11}", "Input Size")?;
        for class in self.classes {
            write!(f, "| {:<12}", class.to_string())?;
        }
        writeln!(f)?;

        write!(f, "{}", "-".repeat(11))?;
        for _ in self.classes {
            write!(f, "|{}", "-".repeat(13))?;
        }
        writeln!(f)?;

        for &size in self.sizes {
            write!(f, "{size:<11}")?;
            for class in self.classes {
                let cell = class
                    .estimated_operations(size)
                    .map_or_else(|| "overflow".to_owned(), group_thousands);
                write!(f, "| {cell:<12}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Formats an integer with `,` between every group of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
