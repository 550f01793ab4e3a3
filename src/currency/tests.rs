#![cfg(test)]

use std::error::Error;
use std::io::{self, Cursor, Read};

use super::*;

fn payment(amount: f64) -> Payment {
    Payment::new(amount).unwrap()
}

#[test]
fn test_format() {
    let amount = payment(12_324.134);
    assert_eq!(format(amount, Locale::Us), "$12,324.13");
    assert_eq!(format(amount, Locale::India), "Rs.12,324.13");
    assert_eq!(format(amount, Locale::China), "￥12,324.13");
    assert_eq!(format(amount, Locale::France), "12 324,13 €");
}

#[test]
fn test_format_small_and_large() {
    assert_eq!(format(payment(0.0), Locale::Us), "$0.00");
    assert_eq!(format(payment(5.5), Locale::France), "5,50 €");
    assert_eq!(format(payment(999.999), Locale::Us), "$1,000.00");
    assert_eq!(format(payment(1_000_000_000.0), Locale::Us), "$1,000,000,000.00");
    assert_eq!(format(payment(1_000_000_000.0), Locale::France), "1 000 000 000,00 €");
    assert_eq!(format(payment(123_456.0), Locale::China), "￥123,456.00");
}

#[test]
fn test_negative_zero() {
    let zero = "-0".parse::<Payment>().unwrap();
    assert!(zero.amount().is_sign_positive(), "Negative zero should be stored as zero.");
    assert_eq!(format(zero, Locale::Us), "$0.00");
    assert_eq!(format(zero, Locale::France), "0,00 €");
    assert_eq!(format(Payment::new(-0.0).unwrap(), Locale::India), "Rs.0.00");
}

#[test]
fn test_format_rounding() {
    assert_eq!(format(payment(0.125), Locale::Us), "$0.12", "Ties go to the even cent.");
    assert_eq!(format(payment(0.375), Locale::Us), "$0.38");
    assert_eq!(format(payment(2.675), Locale::Us), "$2.67");
    assert_eq!(format(payment(1.005), Locale::Us), "$1.00");
}

#[test]
fn test_format_all() {
    let all = format_all(payment(1_234.5));
    assert_eq!(
        all,
        [
            (Locale::Us, "$1,234.50".to_owned()),
            (Locale::India, "Rs.1,234.50".to_owned()),
            (Locale::China, "￥1,234.50".to_owned()),
            (Locale::France, "1 234,50 €".to_owned()),
        ]
    );
}

#[test]
fn test_locale() {
    assert_eq!(Locale::ALL.map(Locale::display_name), ["US", "India", "China", "France"]);
    assert_eq!(Locale::Us.to_string(), "US");
    assert_eq!(Locale::France.to_string(), "France");
    assert!(Locale::China.is_china());
}

#[test]
fn test_payment_range() {
    assert_eq!(payment(0.0).amount(), 0.0);
    assert_eq!(payment(Payment::MAX).amount(), 1e9);
    assert_eq!(Payment::new(-0.01), Err(OutOfRange { amount: -0.01 }));
    assert_eq!(Payment::new(1e9 + 1.0), Err(OutOfRange { amount: 1e9 + 1.0 }));
    assert!(Payment::new(f64::NAN).is_err());
    assert!(Payment::new(f64::INFINITY).is_err());
    assert_eq!(
        OutOfRange { amount: -1.0 }.to_string(),
        "Amount must be between 0 and 1000000000, but was -1!"
    );
}

#[test]
fn test_payment_from_str() {
    assert_eq!(" 12324.134\n".parse::<Payment>().unwrap(), payment(12_324.134));
    assert_eq!("7".parse::<Payment>().unwrap(), payment(7.0));

    let error = "twelve".parse::<Payment>().unwrap_err();
    assert!(error.is_parse());
    assert!(error.to_string().starts_with("'twelve' is not a valid amount"));

    assert!("-5".parse::<Payment>().unwrap_err().is_out_of_range());
    assert!("inf".parse::<Payment>().unwrap_err().is_out_of_range());
    assert!("NaN".parse::<Payment>().unwrap_err().is_out_of_range());
    assert!("".parse::<Payment>().unwrap_err().is_parse());
}

#[test]
fn test_parse_error_source() {
    let CurrencyError::Parse(error) = "1.2.3".parse::<Payment>().unwrap_err() else {
        panic!("Expected a parse error.");
    };
    assert_eq!(error.input, "1.2.3");
    assert!(error.source().is_some());
}

#[test]
fn test_read_payment() {
    assert_eq!(read_payment(Cursor::new("12324.134\n")).unwrap(), payment(12_324.134));
    assert_eq!(read_payment(Cursor::new("\n  \n 42 99\n")).unwrap(), payment(42.0));
    assert!(read_payment(Cursor::new("")).unwrap_err().is_missing_input());
    assert!(read_payment(Cursor::new("\n\n")).unwrap_err().is_missing_input());
    assert!(read_payment(Cursor::new("abc")).unwrap_err().is_parse());
    assert_eq!(CurrencyError::MissingInput.to_string(), "No amount was given!");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("stdin closed"))
    }
}

#[test]
fn test_read_payment_io_error() {
    let error = read_payment(io::BufReader::new(FailingReader)).unwrap_err();
    assert!(error.is_io());
    assert_eq!(error.to_string(), "stdin closed");
}

#[test]
fn test_demo() {
    let mut out = Vec::new();
    demo(&mut out, payment(12_324.134)).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "US: $12,324.13\nIndia: Rs.12,324.13\nChina: ￥12,324.13\nFrance: 12 324,13 €\n"
    );
}
