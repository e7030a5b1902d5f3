//! Console adapter: argument conversion and row rendering.
//!
//! Everything in this module is pure: conversion and rendering return values
//! instead of printing, so the behavior is unit-testable. The `pascal`
//! binary owns the actual printing, the logger and the process exit code.

use colored::Colorize;
use itertools::Itertools;

use crate::combinatorics::factorial::FactorialCache;
use crate::combinatorics::row::row_factors_with;
use crate::pascal_error::PascalError;

/// What the positional arguments asked for, after tolerant conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// A single row.
    Row(u32),
    /// An inclusive range of rows, already ordered so `start <= end`.
    Range { start: u32, end: u32 },
}

/// Non-fatal notices produced while converting arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgWarning {
    /// More than two positional arguments were supplied.
    ExtraArgumentsIgnored,
    /// At least one argument was negative and its absolute value was used.
    AbsoluteValuesUsed,
}

impl ArgWarning {
    /// User-facing text, yellow like every non-fatal notice.
    pub fn message(self) -> String {
        let text = match self {
            ArgWarning::ExtraArgumentsIgnored => "Ignoring extra arguments...",
            ArgWarning::AbsoluteValuesUsed => {
                "Negative integers passed. Using absolute values..."
            }
        };
        text.yellow().to_string()
    }
}

/// Usage text, shown for an empty argument list or a `help` keyword.
pub fn usage(command: &str) -> String {
    let mut message = format!("{}\n\n", "Pascal triangle generator".green());
    message.push_str(&format!(
        "{command} <row>\t\t Show factors for target level\n\n"
    ));
    message.push_str(&format!(
        "{command} <row> <row>\t Show factors in range\n\n"
    ));
    message.push_str(&format!("{command} help\t\t Print this message\n"));
    message
}

/// Converts raw positional tokens into a [`Request`].
///
/// Only the first two tokens are considered; extras are dropped with a
/// warning. Negative values are replaced by their absolute value (again with
/// a single warning). A token that does not read as an integer in the
/// supported row range fails with [`PascalError::InvalidArgument`], before
/// any output is produced.
pub fn parse_request(args: &[String]) -> Result<(Request, Vec<ArgWarning>), PascalError> {
    let mut warnings = Vec::new();
    if args.len() > 2 {
        warnings.push(ArgWarning::ExtraArgumentsIgnored);
    }
    let mut negatives = false;
    let mut rows = Vec::with_capacity(2);
    for raw in args.iter().take(2) {
        let num: i64 = raw
            .trim()
            .parse()
            .map_err(|_| PascalError::InvalidArgument { given: raw.clone() })?;
        if num < 0 {
            negatives = true;
        }
        let row = u32::try_from(num.unsigned_abs())
            .map_err(|_| PascalError::InvalidArgument { given: raw.clone() })?;
        rows.push(row);
    }
    if negatives {
        warnings.push(ArgWarning::AbsoluteValuesUsed);
    }
    let request = match *rows.as_slice() {
        [row] => Request::Row(row),
        [a, b] => Request::Range {
            start: a.min(b),
            end: a.max(b),
        },
        _ => {
            return Err(PascalError::InvalidArgument {
                given: String::new(),
            });
        }
    };
    Ok((request, warnings))
}

/// Renders the output lines for a [`Request`].
///
/// Each line reads `"<row>:\t<factors joined by single spaces>"`. For a
/// range, row labels are left-padded with spaces to the digit width of the
/// larger endpoint so the prefixes consume the same amount of space, and one
/// factorial cache is shared across every row of the range.
pub fn render(request: Request) -> Result<Vec<String>, PascalError> {
    let mut cache = FactorialCache::new();
    match request {
        Request::Row(row) => Ok(vec![render_line(&mut cache, row, 0)?]),
        Request::Range { start, end } => {
            let label_width = end.to_string().len();
            (start..=end)
                .map(|row| render_line(&mut cache, row, label_width))
                .collect()
        }
    }
}

fn render_line(
    cache: &mut FactorialCache,
    row: u32,
    label_width: usize,
) -> Result<String, PascalError> {
    let factors = row_factors_with(cache, row)?;
    Ok(format!(
        "{row:>label_width$}:\t{}",
        factors.iter().join(" ")
    ))
}
