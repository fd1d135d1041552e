use contracts::dashboards::d410_sales_optimization::{
    ConstraintBounds, ConstraintCatalog, ConstraintField, OptimizationResponse, SegmentRecord,
    SegmentRow,
};
use thiserror::Error;

use super::aggregator::rollup_sums;
use super::catalog::slider_specs;
use super::constraints::apply_constraints;
use super::projector::{project_sales, PROJECTION_YEARS};
use super::targets::{compute_indicators, indicator_metas};

/// Rejected sidebar input
#[derive(Debug, Error, PartialEq)]
pub enum ConstraintError {
    #[error("{field:?} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: ConstraintField,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Sliders, defaults and indicator metadata for the page
pub fn constraint_catalog() -> ConstraintCatalog {
    ConstraintCatalog {
        sliders: slider_specs(),
        defaults: ConstraintBounds::default(),
        indicators: indicator_metas(),
    }
}

/// Check bounds against the slider domains.
///
/// The domains keep every min at or below its max. Only the HTTP boundary
/// calls this; `recompute` itself accepts any bounds.
pub fn validate_bounds(bounds: &ConstraintBounds) -> Result<(), ConstraintError> {
    for spec in slider_specs() {
        let value = bounds.get(spec.field);
        if !spec.accepts(value) {
            return Err(ConstraintError::OutOfRange {
                field: spec.field,
                value,
                min: spec.unit.to_bound(spec.min),
                max: spec.unit.to_bound(spec.max),
            });
        }
    }

    Ok(())
}

/// Full recompute of the derived table from the immutable base table.
///
/// Pure: the same base table and bounds always give the same response.
pub fn recompute(base: &[SegmentRecord], bounds: &ConstraintBounds) -> OptimizationResponse {
    let constrained = apply_constraints(base, bounds);
    let rollups = rollup_sums(base);

    let rows = base
        .iter()
        .zip(&constrained)
        .zip(&rollups)
        .map(|((record, c), rollup)| SegmentRow {
            record: record.clone(),
            max_growth_factor: c.max_growth_factor,
            max_contribution: c.max_contribution,
            max_sales: c.max_sales,
            brand_sales: rollup.brand_sales,
            category_sales: rollup.category_sales,
            geography_sales: rollup.geography_sales,
            portfolio_sales: rollup.portfolio_sales,
        })
        .collect();

    OptimizationResponse {
        constraints: *bounds,
        rows,
        projection: project_sales(base, &PROJECTION_YEARS),
        indicators: compute_indicators(base, &constrained, bounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_sales_optimization::catalog::Dimensions;
    use crate::dashboards::d410_sales_optimization::generator::generate_seeded;

    fn base() -> Vec<SegmentRecord> {
        generate_seeded(42, &Dimensions::acme())
    }

    #[test]
    fn test_row_count_and_order_preserved() {
        let base = base();
        let response = recompute(&base, &ConstraintBounds::default());
        assert_eq!(response.rows.len(), 8);
        for (row, record) in response.rows.iter().zip(&base) {
            assert_eq!(&row.record, record);
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let base = base();
        let bounds = ConstraintBounds {
            trend_min: -0.01,
            trend_max: 0.02,
            contribution_min: 0.08,
            contribution_max: 0.15,
            sales_target: 80_000_000,
            margin_target: 0.12,
        };
        let first = recompute(&base, &bounds);
        let second = recompute(&base, &bounds);
        assert_eq!(first.rows, second.rows);
        assert_eq!(first.projection, second.projection);
        assert_eq!(first.indicators, second.indicators);
    }

    #[test]
    fn test_default_scenario_end_to_end() {
        let base = base();
        let bounds = ConstraintBounds::default();
        let response = recompute(&base, &bounds);

        assert_eq!(response.constraints, bounds);
        for row in &response.rows {
            let r = &row.record;
            // defaults equal the trend sampling range, so nothing is clipped
            assert_eq!(row.max_growth_factor, 1.0 + r.trend);
            assert_eq!(row.max_sales, r.initial_sales as f64 * (1.0 + r.trend));
            // normalized contributions may leave [0.05, 0.30]; only those move
            if (0.05..=0.30).contains(&r.contribution) {
                assert_eq!(row.max_contribution, r.contribution);
            } else if r.contribution < 0.05 {
                assert_eq!(row.max_contribution, 0.05);
            } else {
                assert_eq!(row.max_contribution, 0.30);
            }
        }

        let contribution_sum: f64 = response.rows.iter().map(|r| r.record.contribution).sum();
        assert!((contribution_sum - 1.0).abs() < 1e-9);
        assert_eq!(response.projection.series.len(), 8);
        assert_eq!(response.indicators.len(), 4);
    }

    #[test]
    fn test_rollups_attached_to_rows() {
        let response = recompute(&base(), &ConstraintBounds::default());
        for row in &response.rows {
            let expected: i64 = response
                .rows
                .iter()
                .filter(|o| o.record.brand == row.record.brand)
                .map(|o| o.record.initial_sales)
                .sum();
            assert_eq!(row.brand_sales, expected);
        }
    }

    #[test]
    fn test_recompute_accepts_reversed_bounds() {
        let bounds = ConstraintBounds {
            trend_min: 0.05,
            trend_max: -0.02,
            ..ConstraintBounds::default()
        };
        let response = recompute(&base(), &bounds);
        assert!(response.rows.iter().all(|r| r.max_growth_factor == 1.0 + -0.02));
    }

    #[test]
    fn test_validate_defaults_ok() {
        assert_eq!(validate_bounds(&ConstraintBounds::default()), Ok(()));
    }

    #[test]
    fn test_validate_slider_edges_ok() {
        let bounds = ConstraintBounds {
            trend_min: -0.05,
            trend_max: 0.10,
            contribution_min: 0.10,
            contribution_max: 0.10,
            sales_target: 500_000_000,
            margin_target: 0.0,
        };
        assert_eq!(validate_bounds(&bounds), Ok(()));
    }

    #[test]
    fn test_validate_out_of_range() {
        let bounds = ConstraintBounds {
            sales_target: 10,
            ..ConstraintBounds::default()
        };
        assert!(matches!(
            validate_bounds(&bounds),
            Err(ConstraintError::OutOfRange {
                field: ConstraintField::SalesTarget,
                ..
            })
        ));

        let bounds = ConstraintBounds {
            margin_target: f64::INFINITY,
            ..ConstraintBounds::default()
        };
        assert!(validate_bounds(&bounds).is_err());
    }

    #[test]
    fn test_catalog_lists_all_sliders() {
        let catalog = constraint_catalog();
        assert_eq!(catalog.sliders.len(), 6);
        assert_eq!(catalog.defaults, ConstraintBounds::default());
        assert_eq!(catalog.indicators.len(), 4);
    }
}
