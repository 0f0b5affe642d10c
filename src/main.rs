//! CLI entry point for regdom.
//!
//! One subcommand per tool: `betaCDF`, `createRegulatoryDomains`,
//! `calculateBetaP`, `calculateBinomialP` and `assignWeights`. Options may be
//! given in the single-dash `-name=N` form as well as `--name N`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use regdom::config::{DomainConfig, WeightConfig, DEFAULT_MAX_EXTENSION};
use regdom::domains::assign_domains;
use regdom::index::RangeIndex;
use regdom::output::{format_fixed, format_scientific, write_regdoms, write_weights};
use regdom::parser::{parse_intervals, parse_regdoms, parse_tss, ChromSizes};
use regdom::stats::{
    beta_pvalue, binomial_pvalue, regularized_incomplete_beta, weigh_regions, BetaParameters,
    Coverage,
};
use regdom::types::{sort_records, AssociationRule};

/// Options that may be spelled with a single dash, e.g. `-maxExtension=N`.
const LONG_OPTIONS: [&str; 6] = [
    "maxExtension",
    "basalUpstream",
    "basalDownstream",
    "sd",
    "mean",
    "cutoff",
];

/// Gene regulatory domains and region enrichment statistics.
#[derive(Parser, Debug)]
#[command(name = "regdom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the regularized incomplete beta function I_x(alpha, beta)
    #[command(name = "betaCDF", allow_negative_numbers = true)]
    BetaCdf { alpha: f64, beta: f64, x: f64 },

    /// Create regulatory domains for genes from their TSS and an association rule
    #[command(name = "createRegulatoryDomains")]
    CreateRegulatoryDomains {
        /// TSS file: chrom, tss, strand, name
        tss_file: PathBuf,

        /// Chromosome sizes file: chrom, size
        chrom_sizes: PathBuf,

        /// Association rule: oneClosest, twoClosest or basalPlusExtension
        rule: String,

        /// Output regulatory domain file (BED6)
        out_file: PathBuf,

        /// Distance to extend a domain from the TSS in absence of other genes
        #[arg(long = "maxExtension", default_value_t = DEFAULT_MAX_EXTENSION, allow_negative_numbers = true)]
        max_extension: i64,

        /// Basal extension upstream (strand-aware) of the TSS [default: 5000]
        #[arg(long = "basalUpstream", allow_negative_numbers = true)]
        basal_upstream: Option<i64>,

        /// Basal extension downstream (strand-aware) of the TSS [default: 1000]
        #[arg(long = "basalDownstream", allow_negative_numbers = true)]
        basal_downstream: Option<i64>,
    },

    /// Beta p-value of enrichment for a term's regulatory domains
    #[command(name = "calculateBetaP")]
    CalculateBetaP {
        /// Regulatory domains of the term's genes (BED6)
        regdom_file: PathBuf,

        /// Valid (non-gap) genome regions, non-overlapping (BED)
        antigap_file: PathBuf,

        /// Summed weights of regions hitting the term's domains
        sum_of_weights: f64,

        /// Number of regions in the input set
        total_regions: u64,
    },

    /// Binomial p-value of enrichment for a term's regulatory domains
    #[command(name = "calculateBinomialP")]
    CalculateBinomialP {
        /// Regulatory domains of the term's genes (BED6)
        regdom_file: PathBuf,

        /// Valid (non-gap) genome regions, non-overlapping (BED)
        antigap_file: PathBuf,

        /// Number of regions in the input set
        total_regions: u64,

        /// Number of regions hitting the term's domains
        hit_regions: u64,
    },

    /// Weight regions by their distance to the TSS of each domain they hit
    #[command(name = "assignWeights")]
    AssignWeights {
        /// Regulatory domain file (BED6)
        regdom_file: PathBuf,

        /// Region file (BED, name in column 4 if present)
        regions_file: PathBuf,

        /// Output file: region, gene, tss, weight
        out_file: PathBuf,

        /// Standard deviation of the weighting distribution in bp
        #[arg(long, default_value_t = regdom::config::DEFAULT_WEIGHT_SD)]
        sd: f64,

        /// Mean of the weighting distribution in bp
        #[arg(long, default_value_t = regdom::config::DEFAULT_WEIGHT_MEAN, allow_negative_numbers = true)]
        mean: f64,

        /// Maximum region-to-TSS distance that receives a weight
        #[arg(long, default_value_t = regdom::config::DEFAULT_WEIGHT_CUTOFF)]
        cutoff: i64,
    },
}

/// Rewrite `-maxExtension=N` style options into `--maxExtension=N`.
fn preprocess_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| {
            let is_single_dash_option = arg
                .strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split('=').next().unwrap_or(rest))
                .is_some_and(|name| LONG_OPTIONS.contains(&name));
            if is_single_dash_option {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(preprocess_args(std::env::args()));

    match cli.command {
        Commands::BetaCdf { alpha, beta, x } => run_beta_cdf(alpha, beta, x),
        Commands::CreateRegulatoryDomains {
            tss_file,
            chrom_sizes,
            rule,
            out_file,
            max_extension,
            basal_upstream,
            basal_downstream,
        } => {
            let rule: AssociationRule = rule.parse()?;
            let config = DomainConfig {
                rule,
                max_extension,
                basal_upstream,
                basal_downstream,
            };
            run_create_regulatory_domains(&tss_file, &chrom_sizes, &out_file, &config)
        }
        Commands::CalculateBetaP {
            regdom_file,
            antigap_file,
            sum_of_weights,
            total_regions,
        } => run_calculate_beta_p(&regdom_file, &antigap_file, sum_of_weights, total_regions),
        Commands::CalculateBinomialP {
            regdom_file,
            antigap_file,
            total_regions,
            hit_regions,
        } => run_calculate_binomial_p(&regdom_file, &antigap_file, total_regions, hit_regions),
        Commands::AssignWeights {
            regdom_file,
            regions_file,
            out_file,
            sd,
            mean,
            cutoff,
        } => {
            let config = WeightConfig { mean, sd, cutoff };
            run_assign_weights(&regdom_file, &regions_file, &out_file, &config)
        }
    }
}

fn run_beta_cdf(alpha: f64, beta: f64, x: f64) -> Result<()> {
    let value = regularized_incomplete_beta(alpha, beta, x)?;
    println!("{}", format_fixed(value));
    Ok(())
}

fn run_create_regulatory_domains(
    tss_file: &Path,
    chrom_sizes_file: &Path,
    out_file: &Path,
    config: &DomainConfig,
) -> Result<()> {
    config.validate()?;

    eprintln!("Parsing TSS file: {}", tss_file.display());
    let mut records = parse_tss(tss_file)
        .with_context(|| format!("Failed to read TSS file {}", tss_file.display()))?;
    sort_records(&mut records);

    eprintln!("Parsing chromosome sizes: {}", chrom_sizes_file.display());
    let chrom_sizes = ChromSizes::from_file(chrom_sizes_file).with_context(|| {
        format!(
            "Failed to read chromosome sizes {}",
            chrom_sizes_file.display()
        )
    })?;

    assign_domains(&mut records, &chrom_sizes, config)?;

    eprintln!(
        "Writing {} regulatory domains to: {}",
        records.len(),
        out_file.display()
    );
    let file = File::create(out_file).context("Failed to create output file")?;
    let mut writer = BufWriter::new(file);
    write_regdoms(&mut writer, &records)?;
    writer.flush()?;

    eprintln!("Done!");
    Ok(())
}

/// Load domains and background and measure how much of the background the domains cover.
fn measure_coverage(regdom_file: &Path, antigap_file: &Path) -> Result<Coverage> {
    let regdoms = parse_regdoms(regdom_file).with_context(|| {
        format!(
            "Failed to read regulatory domains {}",
            regdom_file.display()
        )
    })?;
    let index = RangeIndex::from_domains(&regdoms);

    let antigaps = parse_intervals(antigap_file)
        .with_context(|| format!("Failed to read background {}", antigap_file.display()))?;

    Ok(Coverage::measure(&index, &antigaps))
}

fn run_calculate_beta_p(
    regdom_file: &Path,
    antigap_file: &Path,
    sum_of_weights: f64,
    total_regions: u64,
) -> Result<()> {
    let coverage = measure_coverage(regdom_file, antigap_file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "totalNonGapBases: {}", coverage.total_bases)?;
    writeln!(out, "annotatedNonGapBases: {}", coverage.annotated_bases)?;

    let weight = coverage.weight_for_hits(sum_of_weights != 0.0)?;
    let params = BetaParameters::new(total_regions, sum_of_weights, weight);
    writeln!(out, "alpha: {}", format_fixed(params.alpha))?;
    writeln!(out, "beta:  {}", format_fixed(params.beta))?;
    writeln!(out, "x:     {}", format_fixed(params.x))?;

    let p = beta_pvalue(total_regions, sum_of_weights, weight)?;
    writeln!(out, "{}", format_scientific(p))?;
    Ok(())
}

fn run_calculate_binomial_p(
    regdom_file: &Path,
    antigap_file: &Path,
    total_regions: u64,
    hit_regions: u64,
) -> Result<()> {
    let coverage = measure_coverage(regdom_file, antigap_file)?;
    let weight = coverage.weight_for_hits(hit_regions > 0)?;
    let p = binomial_pvalue(total_regions, hit_regions, weight)?;
    println!("{}", format_scientific(p));
    Ok(())
}

fn run_assign_weights(
    regdom_file: &Path,
    regions_file: &Path,
    out_file: &Path,
    config: &WeightConfig,
) -> Result<()> {
    eprintln!("Parsing regulatory domains: {}", regdom_file.display());
    let regdoms = parse_regdoms(regdom_file).with_context(|| {
        format!(
            "Failed to read regulatory domains {}",
            regdom_file.display()
        )
    })?;

    eprintln!("Parsing regions: {}", regions_file.display());
    let regions = parse_intervals(regions_file)
        .with_context(|| format!("Failed to read regions {}", regions_file.display()))?;

    let (pairs, summary) = weigh_regions(&regions, &regdoms, config)?;
    if summary.hit_regions == 0 && summary.total_regions > 0 {
        eprintln!(
            "Warning: none of {} regions fell inside a regulatory domain",
            summary.total_regions
        );
    }

    eprintln!("Writing output to: {} ({} pairs)", out_file.display(), pairs.len());
    let file = File::create(out_file).context("Failed to create output file")?;
    let mut writer = BufWriter::new(file);
    write_weights(&mut writer, &pairs)?;
    writer.flush()?;

    println!("totalRegions: {}", summary.total_regions);
    println!("hitRegions: {}", summary.hit_regions);
    println!("sumOfWeights: {}", format_fixed(summary.sum_of_weights));
    Ok(())
}
