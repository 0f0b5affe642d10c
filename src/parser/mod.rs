//! Parsers for genomic file formats.

pub mod bed;
pub mod chrom_sizes;
pub mod regdom;
pub mod tss;
pub mod util;

pub use bed::parse_intervals;
pub use chrom_sizes::ChromSizes;
pub use regdom::parse_regdoms;
pub use tss::parse_tss;
