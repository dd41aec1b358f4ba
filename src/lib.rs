//! Disciplined input-collection loops, demonstrated against their flawed twin.
//!
//! This crate fills a fixed-size integer sequence from a line-oriented input
//! source in two ways. The flawed variant steps its loop index backwards from
//! a failure branch, giving the control variable a second write site (the
//! pattern ISO/IEC 24772-1, Table 1 #12 prohibits). The corrected collector
//! keeps all retry handling in an inner loop of its own, so the index is
//! written exactly once per slot and only by the outer loop's advancement.
//!
//! The `fillseq` binary runs the flawed example first, then the corrected
//! one, reading values from standard input and reporting each collected
//! value with its zero-based position. Both fill procedures record every
//! assignment made to their loop index into an [`IndexTrace`], which is how
//! the tests (and debug logging) make the write-site difference visible.

pub mod cli;
pub mod collect;
pub mod demo;
pub mod flawed;
pub mod report;
pub mod trace;

/// The fixed-length container being filled, zero-initialized at creation.
pub type Sequence = Vec<i64>;

// Error handling for collection and the surrounding tooling
pub mod error {
    use thiserror::Error;

    /// Why a collection run stopped before filling every slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CancelReason {
        /// The input source reported end-of-stream at a prompt.
        EndOfInput,
        /// The user entered one of the cancel tokens.
        UserRequest,
    }

    impl std::fmt::Display for CancelReason {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                CancelReason::EndOfInput => write!(f, "end of input"),
                CancelReason::UserRequest => write!(f, "user requested"),
            }
        }
    }

    #[derive(Error, Debug)]
    pub enum CollectError {
        /// Collection stopped before every slot was filled. Reported as a
        /// message at the top of the program, never treated as a crash.
        #[error("{0}")]
        Cancelled(CancelReason),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("configuration error: {0}")]
        Config(String),
    }

    impl CollectError {
        /// True for the cancellation conditions (user token, end of stream)
        /// as opposed to genuine I/O or configuration failures.
        pub fn is_cancellation(&self) -> bool {
            matches!(self, CollectError::Cancelled(_))
        }
    }

    pub type Result<T> = std::result::Result<T, CollectError>;
}

pub use collect::{collect, collect_traced};
pub use error::{CancelReason, CollectError, Result};
pub use report::report;
pub use trace::{IndexTrace, IndexWrite};
