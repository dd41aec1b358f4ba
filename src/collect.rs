//! The corrected input collector.
//!
//! Fills a sequence one slot at a time from a line source, validating each
//! entry before advancing. The slot index is bound once per outer iteration
//! by the range iterator; every retry and failure path is expressed as
//! control flow in an inner loop, so the index has exactly one write site.

use crate::{CancelReason, CollectError, IndexTrace, Result, Sequence};
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompt written before every read.
pub const PROMPT: &str = "Give the value (or type 'quit' to cancel):";

/// Diagnostic written when the source ends at a prompt.
pub const END_OF_INPUT_NOTE: &str = "No input available (end of stream), cancelling.";

/// Tokens that cancel the whole collection, compared case-insensitively
/// after trimming.
pub const CANCEL_TOKENS: [&str; 2] = ["quit", "cancel"];

/// How one raw input line was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineOutcome {
    /// A well-formed integer for the current slot.
    Value(i64),
    /// Recoverable: emit a diagnostic and prompt the same slot again.
    Retry(RetryReason),
    /// The user asked to stop collecting.
    Cancel,
}

/// The recoverable rejection kinds. Each maps to exactly one diagnostic
/// line and never leaves the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RetryReason {
    Empty,
    NotAnInteger,
}

impl RetryReason {
    pub(crate) fn diagnostic(self) -> &'static str {
        match self {
            RetryReason::Empty => "Empty input: enter a number or type 'quit' to cancel.",
            RetryReason::NotAnInteger => "Conversion failed: try again or type 'quit' to cancel.",
        }
    }
}

/// Classify one raw line: trim surrounding whitespace, honor the cancel
/// tokens, reject empties, then parse as a base-10 integer.
pub(crate) fn classify(raw: &str) -> LineOutcome {
    let trimmed = raw.trim();
    if CANCEL_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return LineOutcome::Cancel;
    }
    if trimmed.is_empty() {
        return LineOutcome::Retry(RetryReason::Empty);
    }
    match trimmed.parse::<i64>() {
        Ok(value) => LineOutcome::Value(value),
        Err(_) => LineOutcome::Retry(RetryReason::NotAnInteger),
    }
}

/// Fill a zero-initialized sequence of `length` slots from `input`,
/// prompting on `output` before every read.
///
/// Invalid entries are absorbed by re-prompting the same slot; only
/// cancellation (a cancel token or end of stream) and genuine I/O failures
/// cross this boundary. On success every slot holds exactly one validated
/// integer, assigned in slot order.
pub fn collect<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    length: usize,
) -> Result<Sequence> {
    let mut trace = IndexTrace::new();
    collect_traced(input, output, length, &mut trace)
}

/// Same as [`collect`], recording every index assignment into `trace`.
///
/// The trace shows one write per outer pass: the advancement performed by
/// the `for` range itself. No failure path writes the index.
pub fn collect_traced<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    length: usize,
    trace: &mut IndexTrace,
) -> Result<Sequence> {
    let mut values: Sequence = vec![0; length];

    for index in 0..length {
        // The one index write for this pass.
        trace.record(index + 1, index as i64);

        loop {
            writeln!(output, "{PROMPT}")?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output, "{END_OF_INPUT_NOTE}")?;
                return Err(CollectError::Cancelled(CancelReason::EndOfInput));
            }

            match classify(&line) {
                LineOutcome::Value(value) => {
                    values[index] = value;
                    debug!(index, value, "slot filled");
                    break;
                }
                LineOutcome::Retry(reason) => {
                    writeln!(output, "{}", reason.diagnostic())?;
                    debug!(index, ?reason, "input rejected, slot retried");
                }
                LineOutcome::Cancel => {
                    debug!(index, "cancel token received");
                    return Err(CollectError::Cancelled(CancelReason::UserRequest));
                }
            }
        }
    }

    Ok(values)
}
