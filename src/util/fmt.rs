use std::fmt::{self, Display, Formatter};

/// Displays a slice as `[a, b, c]` using each item's [`Display`] implementation, so strings are
/// written without quotes.
pub struct Listed<'a, T>(pub &'a [T]);

impl<T: Display> Display for Listed<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

/// Displays a slice of slices, one `Listed` per element.
pub struct ListedNested<'a, T>(pub &'a [Vec<T>]);

impl<T: Display> Display for ListedNested<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", Listed(item))?;
        }
        write!(f, "]")
    }
}

/// Displays the contained value, or `null` when there is none.
pub struct Nullable<T>(pub Option<T>);

impl<T: Display> Display for Nullable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed() {
        assert_eq!(Listed(&["ABC", "ACB"]).to_string(), "[ABC, ACB]");
        assert_eq!(Listed::<u8>(&[]).to_string(), "[]");
        assert_eq!(ListedNested(&[vec![1], vec![], vec![1, 2]]).to_string(), "[[1], [], [1, 2]]");
        assert_eq!(Nullable(Some(3)).to_string(), "3");
        assert_eq!(Nullable::<u8>(None).to_string(), "null");
    }
}
