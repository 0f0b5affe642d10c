//! Enrichment statistics.

pub mod beta;
pub mod coverage;
pub mod enrichment;
pub mod weights;

pub use beta::regularized_incomplete_beta;
pub use coverage::Coverage;
pub use enrichment::{beta_pvalue, binomial_pvalue, BetaParameters};
pub use weights::{weigh_regions, DistanceWeigher, RegionWeight, WeightSummary};
