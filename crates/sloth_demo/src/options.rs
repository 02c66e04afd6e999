//! Command-line parsing for the `sloth` binary.

/// What the binary should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The full walkthrough, section by section.
    Demo,
    /// `and`/`or` truth tables with traced operands.
    Logic,
    /// `count` elements of `range(start)`.
    Range { start: i64, count: i64 },
    /// The first `count` even numbers.
    Evens { count: i64 },
    /// The first `count` primes.
    Primes { count: i64 },
    /// Usage text.
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    pub command: Command,
    /// Discard sink output (useful with `RUST_LOG` to watch only forcing logs).
    pub silent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{value}` is not a valid integer for <{argument}>")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parse the arguments following the program name.
///
/// Flags may appear anywhere; the first positional argument names the
/// command (default: `demo`).
pub fn parse_args(args: &[String]) -> Result<DemoOptions, CliError> {
    let mut silent = false;
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--silent" | "-s" => silent = true,
            "--help" | "-h" => positional.insert(0, "help"),
            other => positional.push(other),
        }
    }

    let mut rest = positional.into_iter();
    let command = match rest.next() {
        None | Some("demo") => Command::Demo,
        Some("logic") => Command::Logic,
        Some("help") => Command::Help,
        Some("range") => Command::Range {
            start: number(rest.next(), "range", "start")?,
            count: number(rest.next(), "range", "count")?,
        },
        Some("evens") => Command::Evens {
            count: number(rest.next(), "evens", "count")?,
        },
        Some("primes") => Command::Primes {
            count: number(rest.next(), "primes", "count")?,
        },
        Some(other) => return Err(CliError::UnknownCommand(other.to_owned())),
    };

    // `--help` wins over whatever else was typed.
    if command != Command::Help {
        if let Some(extra) = rest.next() {
            return Err(CliError::UnexpectedArgument(extra.to_owned()));
        }
    }

    Ok(DemoOptions { command, silent })
}

fn number(
    value: Option<&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<i64, CliError> {
    let value = value.ok_or(CliError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| CliError::InvalidNumber {
        argument,
        value: value.to_owned(),
    })
}

pub fn usage() -> &'static str {
    "Usage: sloth [--silent] <command> [args]

Commands:
  demo               Full walkthrough (default)
  logic              and/or truth tables with traced operands
  range <start> <n>  First n elements of range(start)
  evens <n>          First n even numbers (filter over range)
  primes <n>         First n primes (lazy sieve)
  help               Show this message

Options:
  -s, --silent       Discard demo output
  -h, --help         Show this message

Set RUST_LOG=sloth_core=trace to log every forcing step."
}
