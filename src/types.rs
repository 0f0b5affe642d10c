//! Core data structures for regulatory-domain assignment.
//!
//! This module contains the gene record that carries a regulatory domain, the
//! plain intervals used for background and region files, and the association
//! rules that decide how domains are drawn.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Strand orientation for genomic features.
///
/// The derived ordering puts `Positive` before `Negative`, which is the strand
/// tie-break used when sorting records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strand {
    Positive,
    Negative,
}

/// Error type for parsing strand from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrandError;

impl fmt::Display for ParseStrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid strand: expected '+' or '-'")
    }
}

impl std::error::Error for ParseStrandError {}

impl FromStr for Strand {
    type Err = ParseStrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Positive),
            "-" => Ok(Strand::Negative),
            _ => Err(ParseStrandError),
        }
    }
}

impl Strand {
    /// Convert strand to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strand::Positive => "+",
            Strand::Negative => "-",
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A gene TSS together with its regulatory domain `[chrom_start, chrom_end)`.
///
/// Records read from a TSS file start out with `chrom_start == chrom_end == tss`
/// and receive their final coordinates from [`crate::domains::assign_domains`].
/// Records read from a regulatory-domain file already carry final coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegdomRecord {
    pub chrom: String,
    pub chrom_start: i64,
    pub chrom_end: i64,
    pub tss: i64,
    pub strand: Strand,
    pub name: String,
}

impl RegdomRecord {
    /// Create a record whose domain has not been assigned yet.
    pub fn new(chrom: String, tss: i64, strand: Strand, name: String) -> Self {
        RegdomRecord {
            chrom,
            chrom_start: tss,
            chrom_end: tss,
            tss,
            strand,
            name,
        }
    }

    /// Create a record with final domain coordinates.
    pub fn with_domain(
        chrom: String,
        chrom_start: i64,
        chrom_end: i64,
        tss: i64,
        strand: Strand,
        name: String,
    ) -> Self {
        RegdomRecord {
            chrom,
            chrom_start,
            chrom_end,
            tss,
            strand,
            name,
        }
    }

    /// Domain length in bases.
    pub fn length(&self) -> i64 {
        self.chrom_end - self.chrom_start
    }

    /// Whether `pos` falls inside the half-open domain.
    pub fn contains(&self, pos: i64) -> bool {
        self.chrom_start <= pos && pos < self.chrom_end
    }

    /// Canonical processing order: chromosome, then TSS, then strand (`+`
    /// first), then gene name.
    pub fn cmp_by_chrom_tss_strand(&self, other: &Self) -> Ordering {
        self.chrom
            .cmp(&other.chrom)
            .then(self.tss.cmp(&other.tss))
            .then(self.strand.cmp(&other.strand))
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Sort records into the order every association rule expects.
pub fn sort_records(records: &mut [RegdomRecord]) {
    records.sort_by(|a, b| a.cmp_by_chrom_tss_strand(b));
}

/// A plain genomic interval from a BED-like file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub chrom: String,
    pub start: i64,
    pub end: i64,
    pub name: Option<String>,
}

impl Interval {
    /// Create a new interval.
    pub fn new(chrom: String, start: i64, end: i64, name: Option<String>) -> Self {
        Interval {
            chrom,
            start,
            end,
            name,
        }
    }

    /// Interval length (end - start).
    pub fn length(&self) -> i64 {
        self.end - self.start
    }

    /// Get the midpoint of the interval (integer division).
    pub fn midpoint(&self) -> i64 {
        (self.start + self.end) / 2
    }

    /// Name column if present, otherwise `chrom_start_end`.
    pub fn id(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}_{}_{}", self.chrom, self.start, self.end),
        }
    }
}

/// Rule used to turn TSS positions into regulatory domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationRule {
    /// Extend to the midpoint between neighboring TSSs.
    OneClosest,
    /// Extend up to the neighboring TSSs (basal-plus-extension with empty basal windows).
    TwoClosest,
    /// Fixed strand-aware basal window, extended up to the neighbors' basal windows.
    BasalPlusExtension,
}

impl AssociationRule {
    /// Convert rule to its command-line spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssociationRule::OneClosest => "oneClosest",
            AssociationRule::TwoClosest => "twoClosest",
            AssociationRule::BasalPlusExtension => "basalPlusExtension",
        }
    }
}

impl FromStr for AssociationRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oneClosest" => Ok(AssociationRule::OneClosest),
            "twoClosest" => Ok(AssociationRule::TwoClosest),
            "basalPlusExtension" => Ok(AssociationRule::BasalPlusExtension),
            _ => Err(Error::UnknownRule(s.to_string())),
        }
    }
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
