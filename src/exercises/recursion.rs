/// Returns the first `count` Fibonacci numbers, starting `0, 1`.
///
/// After the first two, each number is produced by a recursive call that carries the previous
/// two along as accumulators. Values past `u64::MAX` saturate.
pub fn fibonacci_sequence(count: usize) -> Vec<u64> {
    fn extend(a: u64, b: u64, remaining: usize, sequence: &mut Vec<u64>) {
        if remaining == 0 {
            return;
        }
        let next = a.saturating_add(b);
        sequence.push(next);
        extend(b, next, remaining - 1, sequence);
    }

    let mut sequence = Vec::with_capacity(count);
    sequence.extend([0, 1].into_iter().take(count));
    extend(0, 1, count.saturating_sub(2), &mut sequence);
    sequence
}

/// Counts down from `n` to 1, one recursive call per number.
pub fn countdown(n: u32) -> Vec<u32> {
    fn recurse(n: u32, numbers: &mut Vec<u32>) {
        if n < 1 {
            return;
        }
        numbers.push(n);
        recurse(n - 1, numbers);
    }

    let mut numbers = Vec::with_capacity(n as usize);
    recurse(n, &mut numbers);
    numbers
}
