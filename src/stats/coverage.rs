//! Annotation weight: the fraction of background bases covered by a term's
//! regulatory domains.

use log::debug;

use crate::error::{Error, Result};
use crate::index::RangeIndex;
use crate::types::{Interval, RegdomRecord};

/// Base counts over a background interval set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coverage {
    /// Sum of background interval lengths.
    pub total_bases: i64,
    /// Background bases that fall inside the indexed domains.
    pub annotated_bases: i64,
}

impl Coverage {
    /// Measure `background` against `index`.
    ///
    /// Background intervals are expected to be pairwise non-overlapping; this
    /// is not checked.
    pub fn measure(index: &RangeIndex, background: &[Interval]) -> Self {
        let mut coverage = Coverage::default();
        for interval in background {
            coverage.total_bases += interval.length();
            coverage.annotated_bases +=
                index.overlap_size(&interval.chrom, interval.start, interval.end);
        }
        debug!(
            "Background: {} bases, {} annotated",
            coverage.total_bases, coverage.annotated_bases
        );
        coverage
    }

    /// Convenience wrapper building the index from finalized domains.
    pub fn of_domains(domains: &[RegdomRecord], background: &[Interval]) -> Self {
        Self::measure(&RangeIndex::from_domains(domains), background)
    }

    /// `annotated_bases / total_bases`, in `[0, 1]`.
    pub fn weight(&self) -> Result<f64> {
        if self.total_bases == 0 {
            return Err(Error::EmptyBackground);
        }
        Ok(self.annotated_bases as f64 / self.total_bases as f64)
    }

    /// Annotation weight for a test with or without hits.
    ///
    /// Without hits the p-value is 1 whatever the weight, so an empty
    /// background gives NaN here instead of [`Error::EmptyBackground`].
    pub fn weight_for_hits(&self, has_hits: bool) -> Result<f64> {
        match self.weight() {
            Err(Error::EmptyBackground) if !has_hits => Ok(f64::NAN),
            other => other,
        }
    }
}
