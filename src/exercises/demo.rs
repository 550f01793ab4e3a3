use std::io::{self, Write};

use super::strings::StringPair;
use super::*;
use crate::util::fmt::Listed;

fn pair(found: Option<(usize, usize)>) -> String {
    match found {
        Some((first, second)) => format!("[{first}, {second}]"),
        None => "null".to_owned(),
    }
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Two Sum ===")?;
    for (numbers, target) in [(&[2, 7, 11, 15][..], 9), (&[3, 2, 4][..], 6), (&[3, 3][..], 6)] {
        writeln!(
            out,
            "twoSum({}, {target}) => {}",
            Listed(numbers),
            pair(two_sum(numbers, target))
        )?;
    }

    writeln!(out, "\n=== Palindromes ===")?;
    for word in ["college", "madam", "cool"] {
        writeln!(out, "Is \"{word}\" a palindrome? = {}", is_palindrome(word))?;
    }
    for sentence in ["A man, a plan, a canal: Panama", "race a car", "", "a", "No 'x' in Nixon"] {
        writeln!(out, "\"{sentence}\" => {}", is_palindrome_alphanumeric(sentence))?;
    }

    writeln!(out, "\n=== Reversing ===")?;
    let mut items = [1, 2, 3, 4, 5];
    reverse_slice(&mut items);
    writeln!(out, "Reversed Array: {}", Listed(&items))?;

    let original = "Hello, World!";
    writeln!(out, "Reversed String: {}", reverse_string(original))?;
    writeln!(out, "Reversed String: {}", reverse_string_swapping(original))?;
    writeln!(out, "Reversed String: {}", reverse_string_looping(original))?;
    for sample in ["hello", "racecar", "", "a", "Interview"] {
        writeln!(out, "reverse(\"{sample}\") => {}", reverse_string(sample))?;
    }

    writeln!(out, "\n=== Arrays ===")?;
    let numbers = [1, 2, 3, 4, 6, 7, 8, 9, 10];
    match missing_number(&numbers) {
        Some(missing) => writeln!(out, "Missing number: {missing}")?,
        None => writeln!(out, "Missing number: none")?,
    }
    for numbers in [&[1, 2, 3, 4, 5][..], &[-3, -1, -7, -2][..], &[42][..], &[5, 5, 5][..]] {
        writeln!(out, "max => {}", max_of(numbers).map_err(io::Error::other)?)?;
    }
    let numbers = [5, 15, 22, 1, 15, 24];
    writeln!(out, "Smallest so far: {}", smallest(&numbers).map_err(io::Error::other)?)?;

    writeln!(out, "\n=== Recursion ===")?;
    for value in fibonacci_sequence(5) {
        writeln!(out, "{value}")?;
    }
    for value in countdown(5) {
        writeln!(out, "{value}")?;
    }

    writeln!(out, "\n=== Strings ===")?;
    let words = StringPair::new("hello", "rust");
    writeln!(out, "{}", words.total_len())?;
    writeln!(out, "{}", if words.is_lexicographically_greater() { "Yes" } else { "No" })?;
    writeln!(out, "{}", words.capitalized())
}
