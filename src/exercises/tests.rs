#![cfg(test)]

use super::strings::*;
use super::*;
use crate::util::error::EmptyCollection;

#[test]
fn test_two_sum() {
    assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
    assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)), "An element can't pair with itself.");
    assert_eq!(two_sum(&[3, 3], 6), Some((0, 1)));
    assert_eq!(two_sum(&[1, 2, 3], 7), None);
    assert_eq!(two_sum(&[], 0), None);
    assert_eq!(two_sum(&[-4, 9, 4], 0), Some((0, 2)));
    assert_eq!(two_sum(&[2, 2, 5], 7), Some((1, 2)));
    assert_eq!(two_sum(&[i64::MIN, 1], i64::MAX), None);
}

#[test]
fn test_is_palindrome() {
    assert!(is_palindrome("madam"));
    assert!(is_palindrome("abba"));
    assert!(is_palindrome(""));
    assert!(is_palindrome("x"));
    assert!(is_palindrome("été"));
    assert!(!is_palindrome("college"));
    assert!(!is_palindrome("cool"));
    assert!(!is_palindrome("Madam"), "The exact check is case sensitive.");
}

#[test]
fn test_is_palindrome_alphanumeric() {
    assert!(is_palindrome_alphanumeric("A man, a plan, a canal: Panama"));
    assert!(is_palindrome_alphanumeric("No 'x' in Nixon"));
    assert!(is_palindrome_alphanumeric(""));
    assert!(is_palindrome_alphanumeric(".,!"));
    assert!(is_palindrome_alphanumeric("a"));
    assert!(!is_palindrome_alphanumeric("race a car"));
}

#[test]
fn test_reverse() {
    let mut items = [1, 2, 3, 4, 5];
    reverse_slice(&mut items);
    assert_eq!(items, [5, 4, 3, 2, 1]);

    let mut items = [1, 2];
    reverse_slice(&mut items);
    assert_eq!(items, [2, 1]);

    let mut empty: [u8; 0] = [];
    reverse_slice(&mut empty);

    for (original, reversed) in [
        ("Hello, World!", "!dlroW ,olleH"),
        ("racecar", "racecar"),
        ("", ""),
        ("a", "a"),
        ("Interview", "weivretnI"),
        ("añb", "bña"),
    ] {
        assert_eq!(reverse_string(original), reversed);
        assert_eq!(reverse_string_swapping(original), reversed);
        assert_eq!(reverse_string_looping(original), reversed);
    }
}

#[test]
fn test_missing_number() {
    assert_eq!(missing_number(&[1, 2, 3, 4, 6, 7, 8, 9, 10]), Some(5));
    assert_eq!(missing_number(&[2, 3, 1]), Some(4));
    assert_eq!(missing_number(&[2]), Some(1));
    assert_eq!(missing_number(&[]), Some(1));
    assert_eq!(missing_number(&[1, 2, 3]), Some(4));
    assert_eq!(missing_number(&[5, 6]), None, "These can't come from 1 to 3.");
    assert_eq!(missing_number(&[u64::MAX, 1]), None);
}

#[test]
fn test_extremes() {
    assert_eq!(max_of(&[1, 2, 3, 4, 5]), Ok(&5));
    assert_eq!(max_of(&[-3, -1, -7, -2]), Ok(&-1));
    assert_eq!(max_of(&[42]), Ok(&42));
    assert_eq!(max_of::<i32>(&[]), Err(EmptyCollection));
    assert_eq!(smallest(&[5, 15, 22, 1, 15, 24]), Ok(&1));
    assert_eq!(smallest::<i32>(&[]), Err(EmptyCollection));
}

#[test]
fn test_recursion() {
    assert_eq!(fibonacci_sequence(5), [0, 1, 1, 2, 3]);
    assert!(fibonacci_sequence(0).is_empty());
    assert_eq!(fibonacci_sequence(1), [0]);
    assert_eq!(fibonacci_sequence(2), [0, 1]);
    assert_eq!(fibonacci_sequence(11)[10], 55);
    assert_eq!(countdown(5), [5, 4, 3, 2, 1]);
    assert!(countdown(0).is_empty());
}

#[test]
fn test_string_pair() {
    let words = StringPair::new("hello", "rust");
    assert_eq!(words.total_len(), 9);
    assert!(!words.is_lexicographically_greater());
    assert_eq!(words.capitalized(), "Hello Rust");

    let words = "rust hello".parse::<StringPair>().unwrap();
    assert!(words.is_lexicographically_greater());
    assert!(!StringPair::new("same", "same").is_lexicographically_greater());

    assert_eq!("one".parse::<StringPair>(), Err(MissingWord { found: 1 }));
    assert_eq!("  ".parse::<StringPair>(), Err(MissingWord { found: 0 }));
    assert_eq!(MissingWord { found: 1 }.to_string(), "Expected two words, but found 1!");
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("hello"), "Hello");
    assert_eq!(capitalize("Hello"), "Hello");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("ßig"), "SSig");
}

#[test]
fn test_demo() {
    let mut out = Vec::new();
    demo(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("twoSum([2, 7, 11, 15], 9) => [0, 1]"));
    assert!(text.contains("twoSum([3, 2, 4], 6) => [1, 2]"));
    assert!(text.contains("Is \"madam\" a palindrome? = true"));
    assert!(text.contains("\"race a car\" => false"));
    assert!(text.contains("Reversed Array: [5, 4, 3, 2, 1]"));
    assert_eq!(text.matches("Reversed String: !dlroW ,olleH").count(), 3);
    assert!(text.contains("Missing number: 5"));
    assert!(text.contains("max => -1"));
    assert!(text.contains("Smallest so far: 1"));
    assert!(text.contains("\n9\nNo\nHello Rust\n"));
}
