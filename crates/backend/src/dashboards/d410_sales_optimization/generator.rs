use contracts::dashboards::d410_sales_optimization::SegmentRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catalog::Dimensions;

/// Sampling ranges, all half-open `[lo, hi)`
pub const INITIAL_SALES_RANGE: std::ops::Range<i64> = 1_000_000..15_000_000;
pub const MARGIN_RANGE: std::ops::Range<f64> = 0.05..0.30;
pub const TREND_RANGE: std::ops::Range<f64> = -0.02..0.05;
pub const CONTRIBUTION_RANGE: std::ops::Range<f64> = 0.05..0.30;

/// Build the synthetic segment table from an explicit generator.
///
/// Columns are drawn one after another (sales, margin, trend, contribution,
/// then portfolio, geography, category and brand labels), so the same seed
/// always yields the same table. Labels are drawn with replacement.
pub fn generate_segments<R: Rng>(rng: &mut R, dims: &Dimensions) -> Vec<SegmentRecord> {
    let n = dims.segments.len();

    let initial_sales: Vec<i64> = (0..n).map(|_| rng.gen_range(INITIAL_SALES_RANGE)).collect();
    let margin: Vec<f64> = (0..n).map(|_| rng.gen_range(MARGIN_RANGE)).collect();
    let trend: Vec<f64> = (0..n).map(|_| rng.gen_range(TREND_RANGE)).collect();
    let contribution = normalize(
        (0..n)
            .map(|_| rng.gen_range(CONTRIBUTION_RANGE))
            .collect(),
    );

    let portfolios = pick_column(rng, &dims.portfolios, n);
    let geographies = pick_column(rng, &dims.geographies, n);
    let categories = pick_column(rng, &dims.categories, n);
    let brands = pick_column(rng, &dims.brands, n);

    (0..n)
        .map(|i| SegmentRecord {
            portfolio: portfolios[i].clone(),
            geography: geographies[i].clone(),
            category: categories[i].clone(),
            brand: brands[i].clone(),
            segment: dims.segments[i].clone(),
            initial_sales: initial_sales[i],
            margin: margin[i],
            trend: trend[i],
            contribution: contribution[i],
        })
        .collect()
}

/// Same as [`generate_segments`] with a `StdRng` seeded from `seed`
pub fn generate_seeded(seed: u64, dims: &Dimensions) -> Vec<SegmentRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_segments(&mut rng, dims)
}

/// Scale values so they sum to 1.0
fn normalize(values: Vec<f64>) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return values;
    }
    values.into_iter().map(|v| v / total).collect()
}

/// Draw `n` labels uniformly with replacement; an empty enumeration yields empty labels
fn pick_column<R: Rng>(rng: &mut R, options: &[String], n: usize) -> Vec<String> {
    (0..n)
        .map(|_| {
            if options.is_empty() {
                String::new()
            } else {
                options[rng.gen_range(0..options.len())].clone()
            }
        })
        .collect()
}
