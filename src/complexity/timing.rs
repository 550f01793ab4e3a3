//! Wall-clock comparison of one representative algorithm from each class, run over growing
//! inputs.
//!
//! Timings vary from run to run and machine to machine, so nothing here asserts on them. What the
//! measurements show is the shape of the growth.

use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{ComplexityClass, exponential, linear, linearithmic, logarithmic, quadratic};

/// Controls the inputs used by [`measure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    /// The array sizes to time each algorithm against.
    pub sizes: Vec<usize>,
    /// Sizes above this are skipped for the quadratic sort.
    pub quadratic_limit: usize,
    /// The values of `n` to compute naive Fibonacci numbers for.
    pub fibonacci_inputs: Vec<u32>,
    /// Seeds the random arrays, for repeatable input. When [`None`], the arrays are different
    /// every run.
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            sizes: vec![10, 100, 1_000, 10_000],
            quadratic_limit: 1_000,
            fibonacci_inputs: vec![10, 20, 30],
            seed: None,
        }
    }
}

/// A single timed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub class: ComplexityClass,
    pub algorithm: &'static str,
    /// The array size, or `n` for Fibonacci.
    pub input: usize,
    pub elapsed: Duration,
    /// The computed value, for algorithms that produce one worth showing.
    pub value: Option<u64>,
}

/// Returns `size` random values in `0..1000`.
pub fn random_array(size: usize, rng: &mut impl Rng) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(0..1_000)).collect()
}

/// Returns `0, 1, ..., size - 1`.
pub fn sorted_array(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

/// Runs `f` once, returning its result along with how long it took.
pub fn time<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = black_box(f());
    (result, start.elapsed())
}

/// Times every algorithm against every configured input, grouped by class in growth order.
pub fn measure(config: &TimingConfig) -> Vec<Measurement> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut measurements = Vec::new();
    let mut record = |class: ComplexityClass,
                      algorithm: &'static str,
                      input: usize,
                      elapsed: Duration,
                      value: Option<u64>| {
        debug!("{class} {algorithm} with input {input}: {elapsed:?}");
        measurements.push(Measurement { class, algorithm, input, elapsed, value });
    };

    for &size in &config.sizes {
        let items = random_array(size, &mut rng);
        let (_, elapsed) = time(|| items.first().copied());
        record(ComplexityClass::Constant, "array access", size, elapsed, None);
    }

    for &size in &config.sizes {
        let items = sorted_array(size);
        let target = (size / 2) as i64;
        let (_, elapsed) = time(|| logarithmic::binary_search(&items, &target));
        record(ComplexityClass::Logarithmic, "binary search", size, elapsed, None);
    }

    for &size in &config.sizes {
        let items = random_array(size, &mut rng);
        // The last element is the worst case, unless its value also appears earlier.
        let target = items.last().copied().unwrap_or_default();
        let (_, elapsed) = time(|| linear::linear_search(&items, &target));
        record(ComplexityClass::Linear, "linear search", size, elapsed, None);
    }

    for &size in &config.sizes {
        let mut items = random_array(size, &mut rng);
        let (_, elapsed) = time(|| linearithmic::merge_sort(&mut items));
        record(ComplexityClass::Linearithmic, "merge sort", size, elapsed, None);
    }

    for &size in &config.sizes {
        if size > config.quadratic_limit {
            info!("skipping bubble sort of {size} elements, above {}", config.quadratic_limit);
            continue;
        }
        let mut items = random_array(size, &mut rng);
        let (_, elapsed) = time(|| quadratic::bubble_sort(&mut items));
        record(ComplexityClass::Quadratic, "bubble sort", size, elapsed, None);
    }

    for &n in &config.fibonacci_inputs {
        let (value, elapsed) = time(|| exponential::fibonacci(n));
        record(ComplexityClass::Exponential, "naive Fibonacci", n as usize, elapsed, Some(value));
    }

    measurements
}

fn remark(class: ComplexityClass) -> &'static str {
    match class {
        ComplexityClass::Constant => "always fast!",
        ComplexityClass::Logarithmic => "very fast!",
        ComplexityClass::Linear => "proportional to size",
        ComplexityClass::Linearithmic => "efficient sorting",
        ComplexityClass::Quadratic => "gets slow quickly",
        _ => "",
    }
}

pub fn demo(out: &mut impl Write, config: &TimingConfig) -> io::Result<()> {
    writeln!(out, "=== Time Complexity Performance Comparison ===")?;

    let measurements = measure(config);
    let mut section = 0;
    let mut current = None;
    for measurement in &measurements {
        if current != Some(measurement.class) {
            current = Some(measurement.class);
            section += 1;
            writeln!(
                out,
                "\n{section}. {} - {} Time ({}):",
                measurement.class,
                measurement.class.name(),
                measurement.algorithm
            )?;
        }

        match measurement.value {
            Some(value) => writeln!(
                out,
                "   n = {:>2}: {:>12?} (fibonacci({}) = {value})",
                measurement.input, measurement.elapsed, measurement.input
            )?,
            None => writeln!(
                out,
                "   Size {:>6}: {:>12?} ({})",
                measurement.input,
                measurement.elapsed,
                remark(measurement.class)
            )?,
        }
    }

    writeln!(out, "\n=== Key Observations ===")?;
    writeln!(out, "• O(1) and O(log n): Stay fast even for large inputs")?;
    writeln!(out, "• O(n): Grows linearly - acceptable for most cases")?;
    writeln!(out, "• O(n log n): Good for sorting - scales well")?;
    writeln!(out, "• O(n²): Gets slow quickly - avoid for large inputs")?;
    writeln!(out, "• O(2ⁿ): Extremely slow - only for very small inputs")?;

    writeln!(out, "\n=== Complexity Growth Comparison ===")?;
    let sizes = config.sizes.iter().map(|&size| size as u64).collect::<Vec<_>>();
    write!(out, "{}", super::growth_table(&sizes, &ComplexityClass::ALL[..5]))?;

    writeln!(out, "\n=== Recommendations ===")?;
    writeln!(out, "✓ Use O(1) or O(log n) when possible")?;
    writeln!(out, "✓ O(n) is acceptable for most real-world problems")?;
    writeln!(out, "✓ O(n log n) is good for sorting")?;
    writeln!(out, "✗ Avoid O(n²) for large inputs")?;
    writeln!(out, "✗ Never use O(2ⁿ) or O(n!) in production code")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> TimingConfig {
        TimingConfig {
            sizes: vec![0, 10, 200],
            quadratic_limit: 100,
            fibonacci_inputs: vec![5, 15],
            seed: Some(42),
        }
    }

    #[test]
    fn test_arrays() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = random_array(500, &mut rng);
        assert_eq!(items.len(), 500);
        assert!(items.iter().all(|item| (0..1_000).contains(item)));

        let mut again = StdRng::seed_from_u64(7);
        assert_eq!(random_array(500, &mut again), items, "The same seed gives the same values.");

        assert_eq!(sorted_array(4), [0, 1, 2, 3]);
        assert!(sorted_array(0).is_empty());
    }

    #[test]
    fn test_time() {
        let (value, _) = time(|| exponential::fibonacci(20));
        assert_eq!(value, 6_765);
    }

    #[test]
    fn test_measure() {
        let measurements = measure(&small_config());

        // Three sizes for five classes, less the one quadratic size above the limit, plus two
        // Fibonacci inputs.
        assert_eq!(measurements.len(), 3 * 5 - 1 + 2);
        assert!(
            measurements.windows(2).all(|pair| pair[0].class <= pair[1].class),
            "Measurements should be grouped in growth order."
        );

        let quadratic = measurements
            .iter()
            .filter(|measurement| measurement.class.is_quadratic())
            .map(|measurement| measurement.input)
            .collect::<Vec<_>>();
        assert_eq!(quadratic, [0, 10]);

        let fibonacci = measurements
            .iter()
            .filter_map(|measurement| measurement.value)
            .collect::<Vec<_>>();
        assert_eq!(fibonacci, [5, 610]);
    }

    #[test]
    fn test_default_config() {
        let config = TimingConfig::default();
        assert_eq!(config.sizes, [10, 100, 1_000, 10_000]);
        assert_eq!(config.quadratic_limit, 1_000);
        assert_eq!(config.fibonacci_inputs, [10, 20, 30]);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_demo() {
        let mut out = Vec::new();
        demo(&mut out, &small_config()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. O(1) - Constant Time (array access):"));
        assert!(text.contains("5. O(n²) - Quadratic Time (bubble sort):"));
        assert!(text.contains("(fibonacci(15) = 610)"));
        assert!(text.contains("Input Size | O(1)"));
        assert!(!text.contains("O(2ⁿ)        |"), "The growth table stops at O(n²).");
        assert!(text.contains("✗ Never use O(2ⁿ) or O(n!) in production code"));
    }
}
