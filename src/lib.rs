//! regdom - Gene regulatory domains and region enrichment statistics.
//!
//! This library assigns every gene a regulatory domain derived from its
//! transcription start site (TSS) and its neighbors, and tests whether a set
//! of genomic regions is enriched in the domains of a term's genes.
//!
//! # Features
//!
//! - Parse TSS, chromosome-size, regulatory-domain and BED files (with gzip support)
//! - Draw domains with the `oneClosest`, `twoClosest` or `basalPlusExtension` rule
//! - Measure the fraction of a background covered by a set of domains
//! - Weight region hits by their distance to the TSS
//! - Binomial and beta p-values via the regularized incomplete beta function
//!
//! # Example
//!
//! ```ignore
//! use regdom::config::DomainConfig;
//! use regdom::domains::assign_domains;
//! use regdom::parser::{parse_intervals, parse_tss, ChromSizes};
//! use regdom::stats::{binomial_pvalue, Coverage};
//! use regdom::types::{sort_records, AssociationRule};
//! use std::path::Path;
//!
//! let mut genes = parse_tss(Path::new("genes.tss"))?;
//! sort_records(&mut genes);
//! let sizes = ChromSizes::from_file(Path::new("hg19.chrom.sizes"))?;
//! assign_domains(&mut genes, &sizes, &DomainConfig::new(AssociationRule::BasalPlusExtension))?;
//!
//! let background = parse_intervals(Path::new("antigap.bed"))?;
//! let weight = Coverage::of_domains(&genes, &background).weight()?;
//! let p = binomial_pvalue(1000, 42, weight)?;
//! ```

pub mod config;
pub mod domains;
pub mod error;
pub mod index;
pub mod output;
pub mod parser;
pub mod stats;
pub mod types;

pub use config::{DomainConfig, WeightConfig};
pub use error::{Error, Result};
pub use parser::ChromSizes;
pub use types::{AssociationRule, Interval, RegdomRecord, Strand};
