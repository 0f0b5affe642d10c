//! Library-level tests for domain assignment, ordering and enrichment statistics.
//!
//! These run the public API over small hand-built gene layouts and check the
//! properties every assignment must satisfy, independent of the exact rule.

use std::cmp::Ordering;

use regdom::config::{DomainConfig, WeightConfig};
use regdom::domains::assign_domains;
use regdom::domains::basal::basal_window;
use regdom::index::RangeIndex;
use regdom::output::{format_fixed, format_scientific};
use regdom::parser::ChromSizes;
use regdom::stats::{
    beta_pvalue, binomial_pvalue, regularized_incomplete_beta, weigh_regions, Coverage,
};
use regdom::types::{sort_records, AssociationRule, Interval, RegdomRecord, Strand};
use regdom::Error;

// -------------------------------------------------------------------------
// Helper functions
// -------------------------------------------------------------------------

fn gene(chrom: &str, tss: i64, strand: Strand, name: &str) -> RegdomRecord {
    RegdomRecord::new(chrom.to_string(), tss, strand, name.to_string())
}

fn sizes(entries: &[(&str, i64)]) -> ChromSizes {
    let mut sizes = ChromSizes::new();
    for (chrom, size) in entries {
        sizes.insert(chrom.to_string(), *size);
    }
    sizes
}

fn two_gene_layout() -> Vec<RegdomRecord> {
    vec![
        gene("chr1", 1000, Strand::Positive, "GENE1"),
        gene("chr1", 5000, Strand::Negative, "GENE2"),
    ]
}

/// A handful of layouts: crowded, sparse, mixed strands, several chromosomes
/// and genes sitting on the chromosome edges.
fn layouts() -> Vec<(Vec<RegdomRecord>, ChromSizes)> {
    vec![
        (
            two_gene_layout(),
            sizes(&[("chr1", 10_000)]),
        ),
        (
            vec![
                gene("chr1", 0, Strand::Negative, "edge_left"),
                gene("chr1", 40_000, Strand::Positive, "a"),
                gene("chr1", 52_000, Strand::Negative, "b"),
                gene("chr1", 300_000, Strand::Positive, "c"),
                gene("chr1", 2_000_000, Strand::Negative, "edge_right"),
            ],
            sizes(&[("chr1", 2_000_000)]),
        ),
        (
            vec![
                gene("chr2", 500_000, Strand::Positive, "x"),
                gene("chr2", 510_000, Strand::Positive, "y"),
                gene("chr3", 10, Strand::Negative, "z"),
                gene("chr3", 7_000, Strand::Positive, "w"),
                gene("chr3", 90_000, Strand::Negative, "v"),
            ],
            sizes(&[("chr2", 3_000_000), ("chr3", 100_000)]),
        ),
        (
            vec![
                gene("chrX", 100_000, Strand::Positive, "p"),
                gene("chrX", 120_000, Strand::Negative, "q"),
                gene("chrX", 140_000, Strand::Positive, "r"),
                gene("chrX", 160_000, Strand::Negative, "s"),
            ],
            sizes(&[("chrX", 1_000_000)]),
        ),
    ]
}

fn assigned(
    mut records: Vec<RegdomRecord>,
    chrom_sizes: &ChromSizes,
    config: &DomainConfig,
) -> Vec<RegdomRecord> {
    sort_records(&mut records);
    assign_domains(&mut records, chrom_sizes, config).unwrap();
    records
}

fn all_configs() -> Vec<DomainConfig> {
    vec![
        DomainConfig::new(AssociationRule::OneClosest),
        DomainConfig::new(AssociationRule::TwoClosest),
        DomainConfig::new(AssociationRule::BasalPlusExtension),
        DomainConfig {
            rule: AssociationRule::BasalPlusExtension,
            max_extension: 15_000,
            basal_upstream: Some(2000),
            basal_downstream: Some(500),
        },
        DomainConfig {
            max_extension: 0,
            ..DomainConfig::new(AssociationRule::OneClosest)
        },
    ]
}

// -------------------------------------------------------------------------
// Ordering
// -------------------------------------------------------------------------

#[test]
fn test_ordering_chrom_then_tss_then_strand() {
    let a = gene("chr1", 100, Strand::Negative, "A");
    let b = gene("chr1", 100, Strand::Positive, "B");
    let c = gene("chr1", 50, Strand::Negative, "C");
    let d = gene("chr2", 1, Strand::Positive, "D");

    assert_eq!(b.cmp_by_chrom_tss_strand(&a), Ordering::Less);
    assert_eq!(c.cmp_by_chrom_tss_strand(&b), Ordering::Less);
    assert_eq!(a.cmp_by_chrom_tss_strand(&d), Ordering::Less);

    let mut records = vec![d.clone(), a.clone(), c.clone(), b.clone()];
    sort_records(&mut records);
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B", "A", "D"]);
}

#[test]
fn test_ordering_is_antisymmetric_and_transitive() {
    let records: Vec<RegdomRecord> = layouts().into_iter().flat_map(|(r, _)| r).collect();

    for a in &records {
        assert_eq!(a.cmp_by_chrom_tss_strand(a), Ordering::Equal);
        for b in &records {
            let ab = a.cmp_by_chrom_tss_strand(b);
            let ba = b.cmp_by_chrom_tss_strand(a);
            assert_eq!(ab, ba.reverse());
            for c in &records {
                if ab == Ordering::Less && b.cmp_by_chrom_tss_strand(c) == Ordering::Less {
                    assert_eq!(a.cmp_by_chrom_tss_strand(c), Ordering::Less);
                }
            }
        }
    }
}

#[test]
fn test_sorting_is_idempotent() {
    let mut records: Vec<RegdomRecord> = layouts().into_iter().flat_map(|(r, _)| r).collect();
    records.reverse();
    sort_records(&mut records);
    let once = records.clone();
    sort_records(&mut records);
    assert_eq!(records, once);
}

// -------------------------------------------------------------------------
// Domain assignment
// -------------------------------------------------------------------------

#[test]
fn test_one_closest_two_genes() {
    let records = assigned(
        two_gene_layout(),
        &sizes(&[("chr1", 10_000)]),
        &DomainConfig::new(AssociationRule::OneClosest),
    );
    assert_eq!((records[0].chrom_start, records[0].chrom_end), (0, 3000));
    assert_eq!((records[1].chrom_start, records[1].chrom_end), (3000, 10_000));
}

#[test]
fn test_basal_plus_extension_two_genes() {
    let chrom_sizes = sizes(&[("chr1", 10_000)]);
    let records = assigned(
        two_gene_layout(),
        &chrom_sizes,
        &DomainConfig::new(AssociationRule::BasalPlusExtension),
    );

    assert_eq!(basal_window(&records[0], 10_000, 5000, 1000), (0, 2000));
    assert_eq!(basal_window(&records[1], 10_000, 5000, 1000), (4000, 10_000));
    assert_eq!((records[0].chrom_start, records[0].chrom_end), (0, 3000));
    assert_eq!((records[1].chrom_start, records[1].chrom_end), (3000, 10_000));
}

#[test]
fn test_two_closest_ignores_basal_defaults() {
    let records = assigned(
        two_gene_layout(),
        &sizes(&[("chr1", 10_000)]),
        &DomainConfig::new(AssociationRule::TwoClosest),
    );
    // With empty basal windows the two extensions cross and are split at the TSS midpoint
    assert_eq!((records[0].chrom_start, records[0].chrom_end), (0, 3000));
    assert_eq!((records[1].chrom_start, records[1].chrom_end), (3000, 10_000));
}

#[test]
fn test_domains_are_clamped_and_contain_tss() {
    for (records, chrom_sizes) in layouts() {
        for config in all_configs() {
            for rec in assigned(records.clone(), &chrom_sizes, &config) {
                let size = chrom_sizes.get(&rec.chrom).unwrap();
                assert!(rec.chrom_start >= 0, "{rec:?}");
                assert!(rec.chrom_end <= size, "{rec:?}");
                assert!(rec.chrom_start <= rec.tss && rec.tss <= rec.chrom_end, "{rec:?}");
            }
        }
    }
}

#[test]
fn test_domains_respect_max_extension() {
    for (records, chrom_sizes) in layouts() {
        let config = DomainConfig {
            max_extension: 8000,
            ..DomainConfig::new(AssociationRule::OneClosest)
        };
        for rec in assigned(records, &chrom_sizes, &config) {
            assert!(rec.tss - rec.chrom_start <= 8000, "{rec:?}");
            assert!(rec.chrom_end - rec.tss <= 8000, "{rec:?}");
        }
    }
}

#[test]
fn test_one_closest_domains_do_not_overlap() {
    for (records, chrom_sizes) in layouts() {
        let records = assigned(
            records,
            &chrom_sizes,
            &DomainConfig::new(AssociationRule::OneClosest),
        );
        for pair in records.windows(2) {
            if pair[0].chrom == pair[1].chrom {
                assert!(pair[0].chrom_end <= pair[1].chrom_start, "{pair:?}");
            }
        }
    }
}

#[test]
fn test_basal_domains_contain_basal_window_and_do_not_overlap() {
    let windows_and_extensions = [
        (2000, 500, 1_000_000),
        (2000, 500, 11_000),
        (5000, 1000, 11_000),
        (5000, 1000, 3_000),
    ];
    for (records, chrom_sizes) in layouts() {
        for &(up, down, max_extension) in &windows_and_extensions {
            let config = DomainConfig {
                rule: AssociationRule::BasalPlusExtension,
                max_extension,
                basal_upstream: Some(up),
                basal_downstream: Some(down),
            };
            let records = assigned(records.clone(), &chrom_sizes, &config);
            let size_of = |r: &RegdomRecord| chrom_sizes.get(&r.chrom).unwrap();

            let windows: Vec<(i64, i64)> = records
                .iter()
                .map(|r| basal_window(r, size_of(r), up, down))
                .collect();

            for (rec, &(basal_start, basal_end)) in records.iter().zip(&windows) {
                assert!(rec.chrom_start <= basal_start, "{rec:?}");
                assert!(rec.chrom_end >= basal_end, "{rec:?}");
            }

            for i in 1..records.len() {
                let (pred, succ) = (&records[i - 1], &records[i]);
                let same_chrom = pred.chrom == succ.chrom;
                let basal_disjoint = windows[i - 1].1 <= windows[i].0;
                if !(same_chrom && basal_disjoint) {
                    continue;
                }

                // How far each extension reaches toward the other before any split
                let pred_reach = (pred.tss + max_extension)
                    .min(size_of(pred))
                    .min(windows[i].0)
                    .max(windows[i - 1].1);
                let succ_reach = (succ.tss - max_extension)
                    .max(0)
                    .max(windows[i - 1].1)
                    .min(windows[i].0);

                if pred_reach > succ_reach {
                    assert_eq!(
                        pred.chrom_end, succ.chrom_start,
                        "crossing extensions must meet: {pred:?} {succ:?}"
                    );
                    assert!(succ_reach <= pred.chrom_end && pred.chrom_end <= pred_reach);
                } else {
                    assert_eq!(pred.chrom_end, pred_reach, "{pred:?}");
                    assert_eq!(succ.chrom_start, succ_reach, "{succ:?}");
                }
            }
        }
    }
}

#[test]
fn test_off_center_crossing_is_fully_covered() {
    let chrom_sizes = sizes(&[("chr1", 1_000_000)]);
    let config = DomainConfig {
        rule: AssociationRule::BasalPlusExtension,
        max_extension: 11_000,
        basal_upstream: Some(5000),
        basal_downstream: Some(1000),
    };
    let records = assigned(
        vec![
            gene("chr1", 10_000, Strand::Positive, "A"),
            gene("chr1", 30_000, Strand::Positive, "B"),
        ],
        &chrom_sizes,
        &config,
    );
    assert_eq!((records[0].chrom_start, records[0].chrom_end), (0, 19_000));
    assert_eq!((records[1].chrom_start, records[1].chrom_end), (19_000, 41_000));
}

#[test]
fn test_huge_max_extension_is_clamped() {
    let chrom_sizes = sizes(&[("chr1", 10_000)]);
    for rule in [
        AssociationRule::OneClosest,
        AssociationRule::TwoClosest,
        AssociationRule::BasalPlusExtension,
    ] {
        let config = DomainConfig {
            max_extension: i64::MAX,
            ..DomainConfig::new(rule)
        };
        let records = assigned(
            vec![gene("chr1", 5000, Strand::Positive, "A")],
            &chrom_sizes,
            &config,
        );
        assert_eq!((records[0].chrom_start, records[0].chrom_end), (0, 10_000));
    }
}

#[test]
fn test_overlapping_basal_windows_are_kept() {
    let chrom_sizes = sizes(&[("chr1", 100_000)]);
    let records = assigned(
        vec![
            gene("chr1", 20_000, Strand::Positive, "near1"),
            gene("chr1", 21_000, Strand::Positive, "near2"),
        ],
        &chrom_sizes,
        &DomainConfig::new(AssociationRule::BasalPlusExtension),
    );
    // Each keeps its full basal window even though they overlap
    assert_eq!(records[0].chrom_end, 21_000);
    assert_eq!(records[1].chrom_start, 16_000);
}

#[test]
fn test_single_gene_extends_to_limits() {
    let chrom_sizes = sizes(&[("chr1", 5_000_000)]);
    let records = assigned(
        vec![gene("chr1", 2_000_000, Strand::Negative, "solo")],
        &chrom_sizes,
        &DomainConfig::new(AssociationRule::BasalPlusExtension),
    );
    assert_eq!(records[0].chrom_start, 1_000_000);
    assert_eq!(records[0].chrom_end, 3_000_000);
}

#[test]
fn test_assignment_errors() {
    let mut records = two_gene_layout();

    let err = assign_domains(
        &mut records,
        &sizes(&[("chr2", 10_000)]),
        &DomainConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnknownChrom(ref c) if c == "chr1"));

    let err = assign_domains(
        &mut records,
        &sizes(&[("chr1", 2000)]),
        &DomainConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::TssOutOfBounds { tss: 5000, .. }));

    let config = DomainConfig {
        basal_upstream: Some(100),
        ..DomainConfig::new(AssociationRule::OneClosest)
    };
    let err = assign_domains(&mut records, &sizes(&[("chr1", 10_000)]), &config).unwrap_err();
    assert!(matches!(
        err,
        Error::BasalOptionsWithRule(AssociationRule::OneClosest)
    ));
}

// -------------------------------------------------------------------------
// Coverage and statistics
// -------------------------------------------------------------------------

#[test]
fn test_coverage_of_assigned_domains() {
    let records = assigned(
        two_gene_layout(),
        &sizes(&[("chr1", 10_000)]),
        &DomainConfig::new(AssociationRule::OneClosest),
    );
    let term_genes = &records[..1];
    let background = vec![
        Interval::new("chr1".into(), 0, 4000, None),
        Interval::new("chr1".into(), 6000, 10_000, None),
    ];

    let coverage = Coverage::of_domains(term_genes, &background);
    assert_eq!(coverage.total_bases, 8000);
    assert_eq!(coverage.annotated_bases, 3000);
    assert!((coverage.weight().unwrap() - 0.375).abs() < 1e-12);

    let index = RangeIndex::from_domains(&records);
    assert_eq!(Coverage::measure(&index, &background).annotated_bases, 8000);
}

#[test]
fn test_incomplete_beta_known_values() {
    let value = regularized_incomplete_beta(2.0, 3.0, 0.5).unwrap();
    assert!((value - 0.6875).abs() < 1e-7);
    assert_eq!(format_fixed(value), "0.687500");

    // I_x(1, 1) is the uniform CDF
    for &x in &[0.1, 0.25, 0.9] {
        let v = regularized_incomplete_beta(1.0, 1.0, x).unwrap();
        assert!((v - x).abs() < 1e-7);
    }
}

#[test]
fn test_incomplete_beta_boundaries_and_symmetry() {
    for &(a, b) in &[(0.5, 0.5), (2.0, 3.0), (10.0, 1.5), (40.0, 60.0)] {
        assert_eq!(regularized_incomplete_beta(a, b, 0.0).unwrap(), 0.0);
        assert_eq!(regularized_incomplete_beta(a, b, 1.0).unwrap(), 1.0);
        for &x in &[0.05, 0.3, 0.5, 0.8] {
            let lhs = regularized_incomplete_beta(a, b, x).unwrap();
            let rhs = 1.0 - regularized_incomplete_beta(b, a, 1.0 - x).unwrap();
            assert!((lhs - rhs).abs() < 1e-6, "a={a} b={b} x={x}");
        }
    }

    assert!(matches!(
        regularized_incomplete_beta(2.0, 3.0, 1.5),
        Err(Error::XOutOfRange(_))
    ));
}

#[test]
fn test_binomial_with_no_hits_is_one() {
    let p = binomial_pvalue(100, 0, 0.2).unwrap();
    assert_eq!(format_scientific(p), "1.000000e+00");
}

#[test]
fn test_binomial_all_hits() {
    // P(X >= n) = p^n
    let p = binomial_pvalue(5, 5, 0.5).unwrap();
    assert!((p - 0.03125).abs() < 1e-7);
    assert_eq!(format_scientific(p), "3.125000e-02");
}

#[test]
fn test_beta_pvalue_decreases_with_weight() {
    let low = beta_pvalue(100, 5.0, 0.05).unwrap();
    let high = beta_pvalue(100, 20.0, 0.05).unwrap();
    assert!(high < low);
    assert_eq!(beta_pvalue(100, 0.0, 0.05).unwrap(), 1.0);
}

#[test]
fn test_weighted_hits_feed_beta_pvalue() {
    let records = assigned(
        two_gene_layout(),
        &sizes(&[("chr1", 10_000)]),
        &DomainConfig::new(AssociationRule::OneClosest),
    );
    let regions = vec![
        Interval::new("chr1".into(), 990, 1010, Some("peak1".into())),
        Interval::new("chr1".into(), 8000, 8100, Some("peak2".into())),
    ];
    let (pairs, summary) = weigh_regions(&regions, &records[..1], &WeightConfig::default()).unwrap();

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].gene, "GENE1");
    assert_eq!(summary.total_regions, 2);
    assert_eq!(summary.hit_regions, 1);

    let p = beta_pvalue(summary.total_regions, summary.sum_of_weights, 0.3).unwrap();
    assert!(p > 0.0 && p < 1.0);
}
