//! Error types shared by the parsers, the domain assigner and the statistics.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::AssociationRule;

/// Errors raised anywhere in the library.
///
/// Every variant is fatal for the command that hits it; the binary reports the
/// message and exits with a non-zero status.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("chromosome '{0}' not found in chromosome sizes")]
    UnknownChrom(String),

    #[error("TSS of '{name}' at {tss} lies outside its chromosome (size {size})")]
    TssOutOfBounds { name: String, tss: i64, size: i64 },

    #[error("association rule must be one of oneClosest, twoClosest, basalPlusExtension: '{0}'")]
    UnknownRule(String),

    #[error("basal up/downstream options only apply to basalPlusExtension, not {0}")]
    BasalOptionsWithRule(AssociationRule),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("x must lie in [0, 1] for the incomplete beta function, got {0}")]
    XOutOfRange(f64),

    #[error("incomplete beta continued fraction did not converge (a={a}, b={b}, x={x}); a or b too large")]
    NoConvergence { a: f64, b: f64, x: f64 },

    #[error("background intervals cover zero bases; annotation weight is undefined")]
    EmptyBackground,
}

pub type Result<T> = std::result::Result<T, Error>;
