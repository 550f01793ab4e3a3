/// Reverses a slice in place, swapping from both ends towards the middle.
pub fn reverse_slice<T>(items: &mut [T]) {
    let Some(mut right) = items.len().checked_sub(1) else {
        return;
    };
    let mut left = 0;
    while left < right {
        items.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Reverses the `char`s of a string.
///
/// Combining characters are reversed independently of whatever they were attached to.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// [`reverse_string`], by collecting the `char`s into a buffer and reversing it in place.
pub fn reverse_string_swapping(s: &str) -> String {
    let mut chars = s.chars().collect::<Vec<_>>();
    reverse_slice(&mut chars);
    chars.into_iter().collect()
}

/// [`reverse_string`], by walking the string backwards and appending one `char` at a time.
pub fn reverse_string_looping(s: &str) -> String {
    let mut reversed = String::with_capacity(s.len());
    let mut remaining = s;
    while let Some(last) = remaining.chars().next_back() {
        reversed.push(last);
        remaining = &remaining[..remaining.len() - last.len_utf8()];
    }
    reversed
}
