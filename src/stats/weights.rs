//! Distance weighting of region hits.
//!
//! A region hitting a gene's regulatory domain is weighted by how close its
//! midpoint is to the gene's TSS: the density of `Normal(mean, sd)` at the
//! TSS-to-midpoint distance, scaled so the peak of the distribution has
//! weight 1. The summed weights are the `alpha` of the beta test.

use log::debug;
use statrs::distribution::{Continuous, Normal};

use crate::config::WeightConfig;
use crate::error::{Error, Result};
use crate::index::DomainIndex;
use crate::types::{Interval, RegdomRecord};

/// Weight of one region attributed to one gene.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionWeight {
    pub region: String,
    pub gene: String,
    pub tss: i64,
    pub weight: f64,
}

/// Totals over a weighted region set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightSummary {
    pub total_regions: u64,
    /// Regions with at least one weighted gene.
    pub hit_regions: u64,
    pub sum_of_weights: f64,
}

/// Normalized Gaussian weighting of TSS distances.
pub struct DistanceWeigher {
    dist: Normal,
    peak: f64,
    cutoff: i64,
}

impl DistanceWeigher {
    pub fn new(config: &WeightConfig) -> Result<Self> {
        config.validate()?;
        let dist = Normal::new(config.mean, config.sd)
            .map_err(|e| Error::InvalidArgument(format!("weight distribution: {}", e)))?;
        let peak = dist.pdf(config.mean);
        Ok(Self {
            dist,
            peak,
            cutoff: config.cutoff,
        })
    }

    /// Weight for a signed distance `tss - position`, or `None` beyond the cutoff.
    pub fn weight(&self, distance: i64) -> Option<f64> {
        if distance.abs() > self.cutoff {
            return None;
        }
        Some(self.dist.pdf(distance as f64) / self.peak)
    }
}

/// Weight every region against every domain that contains its midpoint.
///
/// Pairs are returned in region order, then domain start order.
pub fn weigh_regions(
    regions: &[Interval],
    domains: &[RegdomRecord],
    config: &WeightConfig,
) -> Result<(Vec<RegionWeight>, WeightSummary)> {
    let weigher = DistanceWeigher::new(config)?;
    let index = DomainIndex::new(domains);

    let mut pairs = Vec::new();
    let mut summary = WeightSummary::default();

    for region in regions {
        summary.total_regions += 1;
        let midpoint = region.midpoint();
        let mut hit = false;

        for domain in index.containing(&region.chrom, midpoint) {
            let Some(weight) = weigher.weight(domain.tss - midpoint) else {
                continue;
            };
            hit = true;
            summary.sum_of_weights += weight;
            pairs.push(RegionWeight {
                region: region.id(),
                gene: domain.name.clone(),
                tss: domain.tss,
                weight,
            });
        }

        if hit {
            summary.hit_regions += 1;
        }
    }

    debug!(
        "Weighted {} pairs over {} regions",
        pairs.len(),
        summary.total_regions
    );

    Ok((pairs, summary))
}
