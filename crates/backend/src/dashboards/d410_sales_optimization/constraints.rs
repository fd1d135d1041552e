use contracts::dashboards::d410_sales_optimization::{ConstraintBounds, SegmentRecord};

/// Derived figures of one segment under the current bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstrainedSegment {
    pub max_growth_factor: f64,
    pub max_contribution: f64,
    pub max_sales: f64,
}

/// Constrain `value` to `[lo, hi]`.
///
/// Computed as `min(max(value, lo), hi)`, so it never panics: with `lo > hi`
/// every input maps to `hi`. Bound ordering is the caller's concern.
pub fn clip(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Apply trend and contribution bounds to every record, in input order.
///
/// Only the first four bounds are read; the targets feed `targets`.
pub fn apply_constraints(
    records: &[SegmentRecord],
    bounds: &ConstraintBounds,
) -> Vec<ConstrainedSegment> {
    records
        .iter()
        .map(|r| constrain_one(r, bounds))
        .collect()
}

fn constrain_one(record: &SegmentRecord, bounds: &ConstraintBounds) -> ConstrainedSegment {
    let max_growth_factor = clip(
        1.0 + record.trend,
        1.0 + bounds.trend_min,
        1.0 + bounds.trend_max,
    );
    let max_contribution = clip(
        record.contribution,
        bounds.contribution_min,
        bounds.contribution_max,
    );
    ConstrainedSegment {
        max_growth_factor,
        max_contribution,
        max_sales: record.initial_sales as f64 * max_growth_factor,
    }
}
