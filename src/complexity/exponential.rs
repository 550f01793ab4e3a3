//! `O(2ⁿ)`: every step branches into two recursive calls, so one more element of input doubles the
//! work. Most of these have a polynomial alternative using memoization or dynamic programming,
//! some of which are included for comparison.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Instant;

use derive_more::Display;
use log::debug;

use super::ComplexityClass;
use crate::util::fmt::{Listed, ListedNested};

/// Returns the `n`th Fibonacci number (`fibonacci(0) = 0`, `fibonacci(1) = 1`) by naive double
/// recursion, which recomputes the same values over and over.
///
/// Results past `u64::MAX` saturate, although the call count makes any such `n` impractical.
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fibonacci(n - 1).saturating_add(fibonacci(n - 2))
}

/// The same sequence as [`fibonacci`], computed in `O(n)` by remembering every value once found.
/// Results past `u64::MAX` (from `n = 94`) saturate.
pub fn fibonacci_memo(n: u32) -> u64 {
    fn recurse(n: u32, memo: &mut HashMap<u32, u64>) -> u64 {
        if n <= 1 {
            return u64::from(n);
        }
        if let Some(&known) = memo.get(&n) {
            return known;
        }
        let value = recurse(n - 1, memo).saturating_add(recurse(n - 2, memo));
        memo.insert(n, value);
        value
    }

    recurse(n, &mut HashMap::new())
}

/// Returns all `2ⁿ` subsets of `items`. Each element is first left out and then included, so the
/// empty subset comes first and the full set last.
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn recurse<T: Clone>(items: &[T], index: usize, current: &mut Vec<T>, found: &mut Vec<Vec<T>>) {
        if index == items.len() {
            found.push(current.clone());
            return;
        }

        recurse(items, index + 1, current, found);

        current.push(items[index].clone());
        recurse(items, index + 1, current, found);
        current.pop();
    }

    let mut found = Vec::with_capacity(1 << items.len().min(16));
    recurse(items, 0, &mut Vec::new(), &mut found);
    found
}

/// A single move in the Tower of Hanoi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Move disk {disk} from {from} to {to}")]
pub struct HanoiMove {
    pub disk: u32,
    pub from: char,
    pub to: char,
}

/// Solves the Tower of Hanoi for `n` disks, returning the `2ⁿ - 1` moves that take the stack from
/// peg `from` to peg `to` using `via` as the spare.
pub fn tower_of_hanoi(n: u32, from: char, to: char, via: char) -> Vec<HanoiMove> {
    fn recurse(n: u32, from: char, to: char, via: char, moves: &mut Vec<HanoiMove>) {
        if n == 0 {
            return;
        }
        recurse(n - 1, from, via, to, moves);
        moves.push(HanoiMove { disk: n, from, to });
        recurse(n - 1, via, to, from, moves);
    }

    let mut moves = Vec::new();
    recurse(n, from, to, via, &mut moves);
    moves
}

/// Raises `base` to `exp` with one multiplication per recursive call. Compare with
/// [`logarithmic::power`](super::logarithmic::power), which halves the exponent instead.
pub fn power_naive(base: i64, exp: u32) -> Option<i64> {
    match exp {
        0 => Some(1),
        1 => Some(base),
        _ => base.checked_mul(power_naive(base, exp - 1)?),
    }
}

/// Counts the ways to make `target` from any number of each coin, where the order of the coins
/// doesn't matter. Making 0 always has exactly one way: using no coins.
///
/// Coins with a value of 0 are ignored.
pub fn coin_change_combinations(coins: &[u32], target: u32) -> u64 {
    fn recurse(coins: &[u32], target: u32, index: usize) -> u64 {
        if target == 0 {
            return 1;
        }
        let Some(&coin) = coins.get(index) else {
            return 0;
        };

        // Either use this coin again, or never use it again.
        let with = match target.checked_sub(coin) {
            Some(rest) if coin > 0 => recurse(coins, rest, index),
            _ => 0,
        };
        with + recurse(coins, target, index + 1)
    }

    recurse(coins, target, 0)
}

/// Checks whether any subset of `items` sums to exactly `target`. The empty subset sums to 0.
pub fn subset_sum(items: &[u32], target: u32) -> bool {
    if target == 0 {
        return true;
    }
    let Some((&first, rest)) = items.split_first() else {
        return false;
    };

    let with = match target.checked_sub(first) {
        Some(remaining) => subset_sum(rest, remaining),
        None => false,
    };
    with || subset_sum(rest, target)
}

/// Counts the ways to climb `n` stairs taking 1 or 2 at a time, by naive recursion.
pub fn climb_stairs(n: u32) -> u64 {
    if n <= 1 {
        return 1;
    }
    climb_stairs(n - 1).saturating_add(climb_stairs(n - 2))
}

/// The `O(n)` bottom-up version of [`climb_stairs`], keeping only the last two counts.
pub fn climb_stairs_dp(n: u32) -> u64 {
    let (mut previous, mut current) = (1_u64, 1_u64);
    for _ in 1..n {
        (previous, current) = (current, previous.saturating_add(current));
    }
    current
}

/// Returns every string of `n` binary digits, in lexicographic order.
pub fn binary_strings(n: usize) -> Vec<String> {
    fn recurse(current: &mut String, n: usize, found: &mut Vec<String>) {
        if current.len() == n {
            found.push(current.clone());
            return;
        }
        for digit in ['0', '1'] {
            current.push(digit);
            recurse(current, n, found);
            current.pop();
        }
    }

    let mut found = Vec::new();
    recurse(&mut String::with_capacity(n), n, &mut found);
    found
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== {} Exponential Time Examples ===\n", ComplexityClass::Exponential)?;
    writeln!(out, "WARNING: These algorithms are VERY SLOW for large inputs!\n")?;

    writeln!(out, "1. Naive Recursive Fibonacci:")?;
    writeln!(out, "   Calculating fibonacci(10)...")?;
    let start = Instant::now();
    let value = fibonacci(10);
    let elapsed = start.elapsed();
    writeln!(out, "   fibonacci(10) = {value}")?;
    writeln!(out, "   Time taken: {elapsed:?}")?;
    writeln!(out, "   Note: fibonacci(40) would take several seconds!")?;

    writeln!(out, "\n   Optimized Fibonacci (with memoization):")?;
    let start = Instant::now();
    let value = fibonacci_memo(40);
    let elapsed = start.elapsed();
    writeln!(out, "   fibonacci(40) = {value}")?;
    writeln!(out, "   Time taken: {elapsed:?}")?;
    writeln!(out, "   Complexity: O(n) instead of O(2ⁿ)!")?;

    writeln!(out, "\n2. Generate All Subsets:")?;
    let items = [1, 2, 3];
    let all = subsets(&items);
    writeln!(out, "   Array: {}", Listed(&items))?;
    writeln!(out, "   Number of subsets: {} (2³ = 8)", all.len())?;
    writeln!(out, "   Subsets:")?;
    for subset in &all {
        writeln!(out, "     {}", Listed(subset))?;
    }

    writeln!(out, "\n3. Tower of Hanoi (n=3):")?;
    writeln!(out, "   Steps to move 3 disks:")?;
    let moves = tower_of_hanoi(3, 'A', 'C', 'B');
    for step in &moves {
        writeln!(out, "{step}")?;
    }
    writeln!(out, "   Total moves: {} (2ⁿ - 1)", moves.len())?;

    writeln!(out, "\n4. Coin Change Combinations:")?;
    let coins = [1, 2, 5];
    writeln!(out, "   Coins: {}", Listed(&coins))?;
    writeln!(out, "   Target: 5")?;
    writeln!(out, "   Combinations: {}", coin_change_combinations(&coins, 5))?;

    writeln!(out, "\n5. Subset Sum Problem:")?;
    let items = [3, 34, 4, 12, 5, 2];
    writeln!(out, "   Array: {}", Listed(&items))?;
    writeln!(out, "   Target sum: 9")?;
    writeln!(out, "   Subset exists: {}", subset_sum(&items, 9))?;

    writeln!(out, "\n6. Climb Stairs (Naive vs Optimized):")?;
    let stairs = 10;
    let approaches: [(&str, fn(u32) -> u64); 2] =
        [("Naive", climb_stairs), ("Optimized", climb_stairs_dp)];
    for (approach, climb) in approaches {
        writeln!(out, "   {approach} approach (n={stairs}):")?;
        let start = Instant::now();
        let ways = climb(stairs);
        let elapsed = start.elapsed();
        writeln!(out, "   Ways: {ways}, Time: {elapsed:?}")?;
    }

    writeln!(out, "\n7. Generate Binary Strings:")?;
    let strings = binary_strings(3);
    writeln!(out, "   Length: 3")?;
    writeln!(out, "   Number of strings: {} (2³ = 8)", strings.len())?;
    writeln!(out, "   Strings: {}", Listed(&strings))?;
    debug!("generated subsets: {}", ListedNested(&all));

    writeln!(out, "\n=== Performance Comparison ===")?;
    writeln!(out, "Input Size | Naive O(2ⁿ) | Optimized O(n)")?;
    writeln!(out, "-----------|--------------|----------------")?;
    for n in [10, 20, 30, 40] {
        let naive = ComplexityClass::Exponential.estimated_operations(n).unwrap_or(u64::MAX);
        writeln!(
            out,
            "{:<11}| ~{:<11} | ~{n} ops",
            format!("n={n}"),
            format!("{} ops", super::group_thousands(naive))
        )?;
    }

    writeln!(out, "\n=== Key Takeaways ===")?;
    writeln!(out, "1. Exponential algorithms are VERY slow")?;
    writeln!(out, "2. Use memoization or dynamic programming to optimize")?;
    writeln!(out, "3. Consider if the problem can be solved differently")?;
    writeln!(out, "4. For large inputs, exponential algorithms are impractical")?;

    writeln!(out, "\n=== All operations demonstrate {} complexity! ===", ComplexityClass::Exponential)
}
