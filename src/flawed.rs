//! The counter-example: a fill loop that writes its own control variable
//! from a failure branch.
//!
//! Kept runnable so the demo can put the pattern on display and the tests
//! can contrast its index-write trace with the corrected collector's. Do
//! not model new code on this module.

use crate::{IndexTrace, Result, Sequence};
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompt written before every read.
pub const PROMPT: &str = "Give the value:";

/// Diagnostic written when a line fails to convert.
pub const CONVERSION_NOTE: &str = "Conversion failed, stepping the loop index back (unsafe).";

/// Fill a sequence of `length` slots, reproducing the prohibited pattern:
/// the index is incremented unconditionally at the bottom of the loop, and a
/// failed conversion decrements it from the failure branch so the two writes
/// cancel out. Every index assignment is recorded in `trace`, so a failed
/// pass shows up as two writes where the corrected collector has one.
///
/// An absent line (end of stream) converts to the integer default `0` and is
/// stored silently, so exhausted input drains the remaining slots to zeros
/// instead of stopping. There is no cancellation here; only I/O failures
/// propagate.
pub fn fill<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    length: usize,
    trace: &mut IndexTrace,
) -> Result<Sequence> {
    let mut values: Sequence = vec![0; length];
    writeln!(output, "Sequence length: {length}")?;

    // Signed index: the failure branch drives it to -1 when the very first
    // line is invalid.
    let mut index: i64 = 0;
    let mut pass = 0;

    while index < length as i64 {
        pass += 1;
        writeln!(output, "{PROMPT}")?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;

        // An absent line converts to the integer default rather than ending
        // the run.
        let attempt = if read == 0 {
            Ok(0)
        } else {
            line.trim().parse::<i64>()
        };

        match attempt {
            Ok(value) => {
                values[index as usize] = value;
                debug!(index, value, "slot filled");
            }
            Err(_) => {
                writeln!(output, "{CONVERSION_NOTE}")?;
                // Second write site for the control variable.
                index -= 1;
                trace.record(pass, index);
            }
        }

        index += 1;
        trace.record(pass, index);
    }

    Ok(values)
}
