//! The demo driver: runs the flawed example, then the corrected one.

use crate::cli::CliConfig;
use crate::collect::collect_traced;
use crate::report::report;
use crate::{flawed, IndexTrace, Result};
use console::style;
use std::io::{BufRead, Write};
use tracing::debug;

/// Heading printed before the flawed section.
pub const FLAWED_HEADING: &str =
    "Problematic example (demonstrates prohibited modification of loop control variable):";

/// Heading printed before the corrected section.
pub const CORRECTED_HEADING: &str =
    "Corrected example (follows ISO/IEC 24772-1 recommendation):";

/// Run both demonstration sections over the same source and sink.
///
/// The flawed section drains whatever it needs from the source first; the
/// corrected section continues from the next unread line. Cancellation in
/// the corrected section is caught here and reported as a message on the
/// sink, so the run still completes in order. Only genuine I/O failures
/// propagate to the caller.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, config: &CliConfig) -> Result<()> {
    let length = config.demo.length;

    writeln!(output, "{}", style(FLAWED_HEADING).bold())?;
    let mut flawed_trace = IndexTrace::new();
    let values = flawed::fill(input, output, length, &mut flawed_trace)?;
    report(output, &values)?;
    debug!(trace = %flawed_trace, "index writes in the flawed section");

    writeln!(output)?;
    writeln!(output, "{}", style(CORRECTED_HEADING).bold())?;
    let mut corrected_trace = IndexTrace::new();
    match collect_traced(input, output, length, &mut corrected_trace) {
        Ok(values) => report(output, &values)?,
        Err(err) if err.is_cancellation() => {
            writeln!(output, "Input cancelled: {err}.")?;
        }
        Err(err) => return Err(err),
    }
    debug!(trace = %corrected_trace, "index writes in the corrected section");

    Ok(())
}
