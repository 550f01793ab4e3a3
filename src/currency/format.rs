use std::io::{self, Write};

use log::debug;

use super::{Locale, Payment};

/// Formats `payment` for `locale`, rounded to whole cents.
///
/// Rounding uses the exact binary value of the amount, with ties going to the even cent, so
/// `0.125` becomes `0.12` but `2.675` (stored as slightly less) becomes `2.67`.
pub fn format(payment: Payment, locale: Locale) -> String {
    let style = locale.style();
    // Amounts are at most 10⁹, so this is always plain positional notation.
    let fixed = format!("{:.2}", payment.amount());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut formatted = String::with_capacity(fixed.len() + whole.len() / 3 + 8);
    formatted.push_str(style.prefix);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            formatted.push(style.grouping);
        }
        formatted.push(digit);
    }
    formatted.push(style.decimal);
    formatted.push_str(cents);
    formatted.push_str(style.suffix);
    formatted
}

/// Formats `payment` for every locale, in the order of [`Locale::ALL`].
pub fn format_all(payment: Payment) -> Vec<(Locale, String)> {
    Locale::ALL
        .into_iter()
        .map(|locale| (locale, format(payment, locale)))
        .collect()
}

/// Prints `payment` formatted for each locale, one per line, as `US: $12,324.13`.
pub fn demo(out: &mut impl Write, payment: Payment) -> io::Result<()> {
    debug!("formatting payment of {payment}");
    for (locale, formatted) in format_all(payment) {
        writeln!(out, "{}: {formatted}", locale.display_name())?;
    }
    Ok(())
}
