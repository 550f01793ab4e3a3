//! `O(n!)`: trying every ordering of the input. Only usable for a handful of elements.

use std::io::{self, Write};
use std::time::Instant;

use derive_more::{Display, Error, IsVariant};
use log::debug;

use super::ComplexityClass;
use crate::util::fmt::Listed;

/// Returns all `n!` orderings of `items`. Each position takes every unused element in index order,
/// so for sorted input the permutations come out in lexicographic order.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn recurse<T: Clone>(
        items: &[T],
        current: &mut Vec<T>,
        used: &mut [bool],
        found: &mut Vec<Vec<T>>,
    ) {
        if current.len() == items.len() {
            found.push(current.clone());
            return;
        }

        for index in 0..items.len() {
            if used[index] {
                continue;
            }
            used[index] = true;
            current.push(items[index].clone());
            recurse(items, current, used, found);
            current.pop();
            used[index] = false;
        }
    }

    let mut found = Vec::new();
    recurse(
        items,
        &mut Vec::with_capacity(items.len()),
        &mut vec![false; items.len()],
        &mut found,
    );
    found
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum TspError {
    #[display("The distance matrix must be square, but row {row} has {found} entries for {cities} cities!")]
    NotSquare { row: usize, found: usize, cities: usize },
    #[display("Start city {start} doesn't exist in a tour of {cities} cities!")]
    UnknownStart { start: usize, cities: usize },
}

/// Solves the travelling salesman problem by trying every order of visiting the other cities,
/// returning the cost of the cheapest tour that starts and ends at `start`.
///
/// `distances[a][b]` is the cost of travelling from `a` to `b`. A single city costs nothing to
/// tour.
pub fn tsp_brute_force(distances: &[Vec<u64>], start: usize) -> Result<u64, TspError> {
    let cities = distances.len();
    for (row, costs) in distances.iter().enumerate() {
        if costs.len() != cities {
            return Err(TspError::NotSquare { row, found: costs.len(), cities });
        }
    }
    if start >= cities {
        return Err(TspError::UnknownStart { start, cities });
    }

    let others = (0..cities).filter(|&city| city != start).collect::<Vec<_>>();
    if others.is_empty() {
        return Ok(0);
    }

    let mut best = u64::MAX;
    for tour in permutations(&others) {
        let mut cost = 0_u64;
        let mut from = start;
        for &to in tour.iter().chain([start].iter()) {
            cost = cost.saturating_add(distances[from][to]);
            from = to;
        }
        best = best.min(cost);
    }
    debug!("checked every tour of {cities} cities, best cost {best}");
    Ok(best)
}

/// Returns every arrangement of the characters of `word`, by swapping each remaining character
/// into the next position. Repeated characters produce repeated arrangements.
pub fn anagrams(word: &str) -> Vec<String> {
    fn recurse(chars: &mut [char], index: usize, found: &mut Vec<String>) {
        if index == chars.len() {
            found.push(chars.iter().collect());
            return;
        }

        for other in index..chars.len() {
            chars.swap(index, other);
            recurse(chars, index + 1, found);
            chars.swap(index, other);
        }
    }

    let mut chars = word.chars().collect::<Vec<_>>();
    let mut found = Vec::new();
    recurse(&mut chars, 0, &mut found);
    found
}

/// Returns every balanced string of `n` pairs of parentheses. There are Catalan(n) of them, which
/// grows more slowly than `n!` but still explosively.
pub fn parentheses(n: usize) -> Vec<String> {
    fn recurse(current: &mut String, open: usize, close: usize, n: usize, found: &mut Vec<String>) {
        if current.len() == 2 * n {
            found.push(current.clone());
            return;
        }
        if open < n {
            current.push('(');
            recurse(current, open + 1, close, n, found);
            current.pop();
        }
        if close < open {
            current.push(')');
            recurse(current, open, close + 1, n, found);
            current.pop();
        }
    }

    let mut found = Vec::new();
    recurse(&mut String::with_capacity(2 * n), 0, 0, n, &mut found);
    found
}

/// Solves the `n` queens problem by brute force: every one of the `nⁿ` ways to put one queen in
/// each row is generated, then checked. Each solution is a board of `n` rows of `.` and `Q`.
pub fn n_queens(n: usize) -> Vec<Vec<String>> {
    fn recurse(queens: &mut [usize], row: usize, found: &mut Vec<Vec<String>>) {
        if row == queens.len() {
            if is_valid(queens) {
                found.push(board(queens));
            }
            return;
        }
        for col in 0..queens.len() {
            queens[row] = col;
            recurse(queens, row + 1, found);
        }
    }

    let mut found = Vec::new();
    recurse(&mut vec![0; n], 0, &mut found);
    found
}

/// `queens[row]` is the column of the queen in that row.
fn is_valid(queens: &[usize]) -> bool {
    for (i, &first) in queens.iter().enumerate() {
        for (offset, &second) in queens[i + 1..].iter().enumerate() {
            if first == second || first.abs_diff(second) == offset + 1 {
                return false;
            }
        }
    }
    true
}

fn board(queens: &[usize]) -> Vec<String> {
    queens
        .iter()
        .map(|&col| {
            (0..queens.len())
                .map(|index| if index == col { 'Q' } else { '.' })
                .collect()
        })
        .collect()
}

/// Counts the paths from one corner of an `m` by `n` grid to the other, moving only right or down,
/// by naive recursion. A grid with no cells has no paths.
pub fn grid_paths(m: u32, n: u32) -> u64 {
    if m == 0 || n == 0 {
        return 0;
    }
    if m == 1 || n == 1 {
        return 1;
    }
    grid_paths(m - 1, n).saturating_add(grid_paths(m, n - 1))
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== {} Factorial Time Examples ===\n", ComplexityClass::Factorial)?;
    writeln!(out, "WARNING: These algorithms are EXTREMELY SLOW!")?;
    writeln!(out, "Only use for very small inputs (n <= 5-6)\n")?;

    writeln!(out, "1. Generate All Permutations:")?;
    let items = [1, 2, 3];
    let all = permutations(&items);
    writeln!(out, "   Input: {}", Listed(&items))?;
    writeln!(out, "   Number of permutations: {} (3! = 6)", all.len())?;
    writeln!(out, "   Permutations:")?;
    for permutation in &all {
        writeln!(out, "     {}", Listed(permutation))?;
    }
    writeln!(out, "   Note: For n=10, there would be 3,628,800 permutations!")?;

    writeln!(out, "\n2. Generate All Anagrams:")?;
    let arrangements = anagrams("ABC");
    writeln!(out, "   Word: ABC")?;
    writeln!(out, "   Number of anagrams: {} (3! = 6)", arrangements.len())?;
    writeln!(out, "   Anagrams: {}", Listed(&arrangements))?;

    writeln!(out, "\n3. Traveling Salesman Problem (Brute Force):")?;
    let distances = vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ];
    writeln!(out, "   Cities: {}", distances.len())?;
    writeln!(out, "   Calculating minimum cost...")?;
    let start = Instant::now();
    let cost = tsp_brute_force(&distances, 0).map_err(io::Error::other)?;
    let elapsed = start.elapsed();
    writeln!(out, "   Minimum cost: {cost}")?;
    writeln!(out, "   Time taken: {elapsed:?}")?;
    writeln!(out, "   Note: For 10 cities, this would take hours!")?;

    writeln!(out, "\n4. Generate Valid Parentheses:")?;
    let combinations = parentheses(3);
    writeln!(out, "   n = 3")?;
    writeln!(out, "   Number of combinations: {}", combinations.len())?;
    writeln!(out, "   Combinations: {}", Listed(&combinations))?;
    writeln!(out, "   Note: This is actually Catalan number, not exactly n!")?;

    writeln!(out, "\n5. N-Queens Problem (Brute Force):")?;
    writeln!(out, "   n = 4")?;
    writeln!(out, "   Finding solutions...")?;
    let start = Instant::now();
    let solutions = n_queens(4);
    let elapsed = start.elapsed();
    writeln!(out, "   Number of solutions: {}", solutions.len())?;
    writeln!(out, "   Time taken: {elapsed:?}")?;
    if let Some(first) = solutions.first() {
        writeln!(out, "   First solution:")?;
        for row in first {
            writeln!(out, "     {row}")?;
        }
    }
    writeln!(out, "   Note: For n=8, this would be extremely slow!")?;

    writeln!(out, "\n6. Count Grid Paths:")?;
    writeln!(out, "   3x3 grid: {} paths", grid_paths(3, 3))?;

    writeln!(out, "\n=== Performance Warning ===")?;
    writeln!(out, "Input Size | Operations")?;
    writeln!(out, "-----------|------------")?;
    for n in 3..=12 {
        let operations = ComplexityClass::Factorial.estimated_operations(n).unwrap_or(u64::MAX);
        writeln!(
            out,
            "{:<11}| {}",
            format!("n={n}"),
            super::group_thousands(operations)
        )?;
    }

    writeln!(out, "\n=== Key Takeaways ===")?;
    writeln!(out, "1. Factorial algorithms are THE SLOWEST")?;
    writeln!(out, "2. Only use for very small inputs (n <= 5-6)")?;
    writeln!(out, "3. Consider approximation algorithms or heuristics")?;
    writeln!(out, "4. Many problems with O(n!) brute force have better solutions")?;
    writeln!(out, "5. Examples: TSP has dynamic programming solution O(n²2ⁿ)")?;
    writeln!(out, "6. N-Queens can be solved with backtracking (much faster)")?;

    writeln!(out, "\n=== All operations demonstrate {} complexity! ===", ComplexityClass::Factorial)?;
    writeln!(out, "Avoid these algorithms for production code!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutations() {
        assert_eq!(
            permutations(&[1, 2, 3]),
            [[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]]
        );
        assert_eq!(permutations(&[0; 5]).len(), 120);
        assert_eq!(permutations::<u8>(&[]), [Vec::<u8>::new()]);
    }

    #[test]
    fn test_tsp_brute_force() {
        let distances = vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ];
        assert_eq!(tsp_brute_force(&distances, 0), Ok(80));
        assert_eq!(tsp_brute_force(&distances, 2), Ok(80), "The best cycle is the same anywhere.");
        assert_eq!(tsp_brute_force(&[vec![0]], 0), Ok(0));
        assert_eq!(
            tsp_brute_force(&distances, 4),
            Err(TspError::UnknownStart { start: 4, cities: 4 })
        );
        assert_eq!(
            tsp_brute_force(&[vec![0, 1], vec![1]], 0),
            Err(TspError::NotSquare { row: 1, found: 1, cities: 2 })
        );
        assert!(tsp_brute_force(&[], 0).unwrap_err().is_unknown_start());
    }

    #[test]
    fn test_anagrams() {
        assert_eq!(anagrams("ABC"), ["ABC", "ACB", "BAC", "BCA", "CBA", "CAB"]);
        assert_eq!(anagrams("AA"), ["AA", "AA"], "Repeated letters aren't collapsed.");
        assert_eq!(anagrams(""), [""]);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(parentheses(3), ["((()))", "(()())", "(())()", "()(())", "()()()"]);
        assert_eq!(parentheses(1), ["()"]);
        assert_eq!(parentheses(0), [""]);
        assert_eq!(parentheses(5).len(), 42);
    }

    #[test]
    fn test_n_queens() {
        assert_eq!(
            n_queens(4),
            [[".Q..", "...Q", "Q...", "..Q."], ["..Q.", "Q...", "...Q", ".Q.."]]
        );
        assert_eq!(n_queens(1), [["Q"]]);
        assert!(n_queens(2).is_empty());
        assert!(n_queens(3).is_empty());
        assert_eq!(n_queens(5).len(), 10);
    }

    #[test]
    fn test_grid_paths() {
        assert_eq!(grid_paths(3, 3), 6);
        assert_eq!(grid_paths(3, 7), 28);
        assert_eq!(grid_paths(1, 5), 1);
        assert_eq!(grid_paths(0, 5), 0);
    }

    #[test]
    fn test_demo() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Number of permutations: 6"));
        assert!(text.contains("     [3, 2, 1]\n"));
        assert!(text.contains("Anagrams: [ABC, ACB, BAC, BCA, CBA, CAB]"));
        assert!(text.contains("Minimum cost: 80"));
        assert!(text.contains("Combinations: [((())), (()()), (())(), ()(()), ()()()]"));
        assert!(text.contains("Number of solutions: 2"));
        assert!(text.contains("     .Q..\n     ...Q\n     Q...\n     ..Q.\n"));
        assert!(text.contains("n=12       | 479,001,600"));
    }
}
