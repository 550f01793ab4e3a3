//! Basic string handling on a pair of words.

use std::str::FromStr;

use derive_more::{Display, Error};

/// Two words, as read from a line like `hello java`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringPair {
    pub first: String,
    pub second: String,
}

impl StringPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> StringPair {
        StringPair { first: first.into(), second: second.into() }
    }

    /// The combined length of both words, in `char`s.
    pub fn total_len(&self) -> usize {
        self.first.chars().count() + self.second.chars().count()
    }

    /// Whether the first word sorts after the second, comparing `char` by `char`.
    pub fn is_lexicographically_greater(&self) -> bool {
        self.first > self.second
    }

    /// Both words capitalized and joined with a space.
    pub fn capitalized(&self) -> String {
        format!("{} {}", capitalize(&self.first), capitalize(&self.second))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Expected two words, but found {found}!")]
pub struct MissingWord {
    pub found: usize,
}

impl FromStr for StringPair {
    type Err = MissingWord;

    /// Takes the first two whitespace separated words. Anything after them is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        match (words.next(), words.next()) {
            (Some(first), Some(second)) => Ok(StringPair::new(first, second)),
            (Some(_), None) => Err(MissingWord { found: 1 }),
            _ => Err(MissingWord { found: 0 }),
        }
    }
}

/// Uppercases the first `char` of `word`, leaving the rest alone. An empty string stays empty.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
