use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use derive_more::{Display, Error, From};
use log::{error, info};

#[cfg(feature = "linked")]
use complexity_primer::collections::linked;
#[cfg(feature = "timing")]
use complexity_primer::complexity::timing::{self, TimingConfig};
use complexity_primer::complexity::{
    constant, exponential, factorial, linear, linearithmic, logarithmic, quadratic,
};
use complexity_primer::currency::{self, CurrencyError, Payment};
use complexity_primer::exercises;

/// The amount formatted by `all`, which doesn't read from stdin.
const SAMPLE_PAYMENT: f64 = 12_324.134;

#[derive(Parser)]
#[command(name = "complexity-primer", version, about = "Worked examples of time complexity classes")]
struct Cli {
    /// Log more: -v for info, -vv for debug, -vvv for trace. RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// O(1): array access, hashing, stack and queue operations
    Constant,
    /// O(log n): binary search and friends
    Logarithmic,
    /// O(n): single passes over the input
    Linear,
    /// O(n log n): merge, quick and heap sort
    Linearithmic,
    /// O(n²): nested loops
    Quadratic,
    /// O(2ⁿ): branching recursion
    Exponential,
    /// O(n!): trying every ordering
    Factorial,
    /// Time one algorithm from each class against growing inputs
    #[cfg(feature = "timing")]
    Timing {
        /// Array sizes to time against
        #[arg(long, value_delimiter = ',', default_values_t = [10, 100, 1_000, 10_000])]
        sizes: Vec<usize>,
        /// Skip the quadratic sort for sizes above this
        #[arg(long, default_value_t = 1_000)]
        quadratic_limit: usize,
        /// Inputs for the naive Fibonacci
        #[arg(long, value_delimiter = ',', default_values_t = [10, 20, 30])]
        fibonacci: Vec<u32>,
        /// Seed for the random arrays
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Walk through the singly linked list
    #[cfg(feature = "linked")]
    LinkedList,
    /// Show how references behave
    #[cfg(feature = "linked")]
    References,
    /// Two sum, palindromes, reversing and more
    Exercises,
    /// Format a payment for each supported country
    Currency {
        /// The amount to format. Read from stdin when omitted.
        amount: Option<String>,
    },
    /// Run every demo, formatting a sample payment for `currency`
    All,
}

#[derive(Debug, Display, Error, From)]
enum AppError {
    Io(io::Error),
    Currency(CurrencyError),
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(default));
}

fn run(command: Command, out: &mut impl Write) -> Result<(), AppError> {
    match command {
        Command::Constant => constant::demo(out)?,
        Command::Logarithmic => logarithmic::demo(out)?,
        Command::Linear => linear::demo(out)?,
        Command::Linearithmic => linearithmic::demo(out)?,
        Command::Quadratic => quadratic::demo(out)?,
        Command::Exponential => exponential::demo(out)?,
        Command::Factorial => factorial::demo(out)?,
        #[cfg(feature = "timing")]
        Command::Timing { sizes, quadratic_limit, fibonacci, seed } => {
            let config = TimingConfig { sizes, quadratic_limit, fibonacci_inputs: fibonacci, seed };
            timing::demo(out, &config)?
        }
        #[cfg(feature = "linked")]
        Command::LinkedList => linked::demo(out)?,
        #[cfg(feature = "linked")]
        Command::References => linked::references_demo(out)?,
        Command::Exercises => exercises::demo(out)?,
        Command::Currency { amount } => {
            let payment = match amount {
                Some(amount) => amount.parse::<Payment>()?,
                None => currency::read_payment(io::stdin().lock())?,
            };
            currency::demo(out, payment)?
        }
        Command::All => run_all(out)?,
    }
    Ok(())
}

fn run_all(out: &mut impl Write) -> Result<(), AppError> {
    constant::demo(out)?;
    writeln!(out)?;
    logarithmic::demo(out)?;
    writeln!(out)?;
    linear::demo(out)?;
    writeln!(out)?;
    linearithmic::demo(out)?;
    writeln!(out)?;
    quadratic::demo(out)?;
    writeln!(out)?;
    exponential::demo(out)?;
    writeln!(out)?;
    factorial::demo(out)?;
    writeln!(out)?;

    #[cfg(feature = "timing")]
    {
        timing::demo(out, &TimingConfig::default())?;
        writeln!(out)?;
    }
    #[cfg(feature = "linked")]
    {
        linked::demo(out)?;
        writeln!(out)?;
        linked::references_demo(out)?;
        writeln!(out)?;
    }

    exercises::demo(out)?;
    writeln!(out)?;

    let payment = Payment::new(SAMPLE_PAYMENT).map_err(CurrencyError::from)?;
    currency::demo(out, payment)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(cli.command, &mut out).and_then(|()| Ok(out.flush()?));

    match result {
        Ok(()) => {
            info!("done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
