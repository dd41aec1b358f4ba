//! Write-site instrumentation for fill-loop control indices.

use itertools::Itertools;
use std::fmt;

/// One recorded assignment to a loop index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexWrite {
    /// 1-based outer-loop pass during which the write happened.
    pub pass: usize,
    /// Index value after the write.
    pub value: i64,
}

/// Append-only log of every assignment made to a fill loop's index.
///
/// The corrected collector records one write per outer pass (the advancement
/// performed by the loop itself). The flawed variant's failure branch adds a
/// second write within the same pass, which [`max_writes_per_pass`] exposes.
///
/// [`max_writes_per_pass`]: IndexTrace::max_writes_per_pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexTrace {
    writes: Vec<IndexWrite>,
}

impl IndexTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one assignment to the index.
    pub fn record(&mut self, pass: usize, value: i64) {
        self.writes.push(IndexWrite { pass, value });
    }

    /// Every write in recording order.
    pub fn writes(&self) -> &[IndexWrite] {
        &self.writes
    }

    /// Highest pass number seen.
    pub fn passes(&self) -> usize {
        self.writes.iter().map(|write| write.pass).max().unwrap_or(0)
    }

    /// Largest number of writes recorded within any single pass.
    pub fn max_writes_per_pass(&self) -> usize {
        self.writes
            .iter()
            .counts_by(|write| write.pass)
            .into_values()
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

impl fmt::Display for IndexTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .writes
            .iter()
            .map(|write| format!("pass {} -> {}", write.pass, write.value))
            .join(", ");
        write!(f, "[{rendered}]")
    }
}
