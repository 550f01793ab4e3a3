use std::collections::HashMap;

/// Finds two different indices whose values add up to `target`, in one pass.
///
/// Each value is looked up as a complement before it is remembered, so an element is never paired
/// with itself. The first pair to complete is returned, with the complement's index first. If a
/// value appears more than once before its partner, the most recent index is used.
pub fn two_sum(numbers: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen = HashMap::with_capacity(numbers.len());
    for (index, &value) in numbers.iter().enumerate() {
        if let Some(complement) = target.checked_sub(value)
            && let Some(&earlier) = seen.get(&complement)
        {
            return Some((earlier, index));
        }
        seen.insert(value, index);
    }
    None
}
