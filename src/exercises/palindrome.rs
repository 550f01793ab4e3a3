/// Checks whether `s` reads the same forwards and backwards, comparing every `char` exactly.
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

/// Like [`is_palindrome`], but skips anything that isn't a letter or digit and ignores case, so
/// `"A man, a plan, a canal: Panama"` is a palindrome.
pub fn is_palindrome_alphanumeric(s: &str) -> bool {
    let cleaned = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect::<Vec<_>>();
    cleaned.iter().eq(cleaned.iter().rev())
}
