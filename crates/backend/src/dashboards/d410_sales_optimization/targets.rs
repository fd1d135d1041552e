use contracts::dashboards::d410_sales_optimization::{ConstraintBounds, SegmentRecord};
use contracts::shared::indicators::*;

use super::constraints::ConstrainedSegment;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn total_initial_sales() -> IndicatorId {
        IndicatorId::new("total_initial_sales")
    }
    pub fn total_max_sales() -> IndicatorId {
        IndicatorId::new("total_max_sales")
    }
    pub fn sales_gap() -> IndicatorId {
        IndicatorId::new("sales_gap")
    }
    pub fn margin_gap() -> IndicatorId {
        IndicatorId::new("margin_gap")
    }
}

/// Display metadata for the indicator cards, in display order
pub fn indicator_metas() -> Vec<IndicatorMeta> {
    let usd = || ValueFormat::Money {
        currency: "$".into(),
    };
    vec![
        IndicatorMeta {
            id: ids::total_initial_sales(),
            label: "Initial Sales".into(),
            icon: "sales".into(),
            format: usd(),
            description: Some("Sum of baseline sales over all segments".into()),
        },
        IndicatorMeta {
            id: ids::total_max_sales(),
            label: "Max Sales".into(),
            icon: "growth".into(),
            format: usd(),
            description: Some("Sum of sales after the clipped growth factor".into()),
        },
        IndicatorMeta {
            id: ids::sales_gap(),
            label: "Gap to Sales Target".into(),
            icon: "target".into(),
            format: usd(),
            description: Some("Sales target minus max sales; zero or below means met".into()),
        },
        IndicatorMeta {
            id: ids::margin_gap(),
            label: "Gap to Margin Target".into(),
            icon: "percent".into(),
            format: ValueFormat::Percent { decimals: 2 },
            description: Some(
                "Margin target minus sales-weighted margin, in percentage points".into(),
            ),
        },
    ]
}

/// Sales-weighted margin: Σ(max_sales · margin) / Σ max_sales
pub fn weighted_margin(records: &[SegmentRecord], constrained: &[ConstrainedSegment]) -> Option<f64> {
    let total: f64 = constrained.iter().map(|c| c.max_sales).sum();
    if total <= 0.0 {
        return None;
    }
    let weighted: f64 = records
        .iter()
        .zip(constrained)
        .map(|(r, c)| c.max_sales * r.margin)
        .sum();
    Some(weighted / total)
}

fn status_by_gap(gap: f64) -> IndicatorStatus {
    if gap <= 0.0 {
        IndicatorStatus::Good
    } else {
        IndicatorStatus::Bad
    }
}

fn gap_subtitle(gap: f64) -> String {
    if gap <= 0.0 {
        "Target met".to_string()
    } else {
        "Below target".to_string()
    }
}

/// Totals and gap-to-target cards for one recompute cycle.
///
/// `records` and `constrained` must be index-aligned.
pub fn compute_indicators(
    records: &[SegmentRecord],
    constrained: &[ConstrainedSegment],
    bounds: &ConstraintBounds,
) -> Vec<IndicatorValue> {
    let total_initial: f64 = records.iter().map(|r| r.initial_sales as f64).sum();
    let total_max: f64 = constrained.iter().map(|c| c.max_sales).sum();
    let sales_target = bounds.sales_target as f64;
    let sales_gap = sales_target - total_max;

    let margin_card = match weighted_margin(records, constrained) {
        Some(margin) => {
            let gap = bounds.margin_target - margin;
            IndicatorValue {
                id: ids::margin_gap(),
                value: Some(gap * 100.0),
                target: Some(bounds.margin_target * 100.0),
                status: status_by_gap(gap),
                subtitle: Some(format!(
                    "{} (weighted margin {:.2}%)",
                    gap_subtitle(gap),
                    margin * 100.0
                )),
            }
        }
        None => IndicatorValue {
            id: ids::margin_gap(),
            value: None,
            target: Some(bounds.margin_target * 100.0),
            status: IndicatorStatus::Neutral,
            subtitle: Some("No sales to weight margin by".to_string()),
        },
    };

    vec![
        IndicatorValue {
            id: ids::total_initial_sales(),
            value: Some(total_initial),
            target: None,
            status: IndicatorStatus::Neutral,
            subtitle: None,
        },
        IndicatorValue {
            id: ids::total_max_sales(),
            value: Some(total_max),
            target: Some(sales_target),
            status: if total_max >= total_initial {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Warning
            },
            subtitle: None,
        },
        IndicatorValue {
            id: ids::sales_gap(),
            value: Some(sales_gap),
            target: Some(sales_target),
            status: status_by_gap(sales_gap),
            subtitle: Some(gap_subtitle(sales_gap)),
        },
        margin_card,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(initial_sales: i64, margin: f64) -> SegmentRecord {
        SegmentRecord {
            portfolio: "Skin/Body".to_string(),
            geography: "Europe".to_string(),
            category: "Fragrance".to_string(),
            brand: "Balmain".to_string(),
            segment: "Bronzer".to_string(),
            initial_sales,
            margin,
            trend: 0.0,
            contribution: 0.5,
        }
    }

    fn constrained(max_sales: f64) -> ConstrainedSegment {
        ConstrainedSegment {
            max_growth_factor: 1.0,
            max_contribution: 0.5,
            max_sales,
        }
    }

    fn find<'a>(values: &'a [IndicatorValue], id: IndicatorId) -> &'a IndicatorValue {
        values.iter().find(|v| v.id == id).unwrap()
    }

    #[test]
    fn test_sales_gap_below_target() {
        let records = vec![record(40_000_000, 0.1), record(20_000_000, 0.2)];
        let derived = vec![constrained(42_000_000.0), constrained(21_000_000.0)];
        let bounds = ConstraintBounds::default();

        let values = compute_indicators(&records, &derived, &bounds);
        let gap = find(&values, ids::sales_gap());
        assert_eq!(gap.value, Some(37_000_000.0));
        assert_eq!(gap.status, IndicatorStatus::Bad);

        let total = find(&values, ids::total_max_sales());
        assert_eq!(total.value, Some(63_000_000.0));
        assert_eq!(total.status, IndicatorStatus::Good);
        assert_eq!(find(&values, ids::total_initial_sales()).value, Some(60_000_000.0));
    }

    #[test]
    fn test_sales_target_met() {
        let records = vec![record(60_000_000, 0.1)];
        let derived = vec![constrained(60_000_000.0)];
        let bounds = ConstraintBounds {
            sales_target: 50_000_000,
            ..ConstraintBounds::default()
        };
        let values = compute_indicators(&records, &derived, &bounds);
        let gap = find(&values, ids::sales_gap());
        assert_eq!(gap.value, Some(-10_000_000.0));
        assert_eq!(gap.status, IndicatorStatus::Good);
    }

    #[test]
    fn test_weighted_margin() {
        let records = vec![record(1, 0.10), record(1, 0.30)];
        let derived = vec![constrained(300.0), constrained(100.0)];
        let margin = weighted_margin(&records, &derived).unwrap();
        assert!((margin - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_margin_gap_in_percentage_points() {
        let records = vec![record(1, 0.10), record(1, 0.30)];
        let derived = vec![constrained(300.0), constrained(100.0)];
        let bounds = ConstraintBounds {
            margin_target: 0.20,
            ..ConstraintBounds::default()
        };
        let values = compute_indicators(&records, &derived, &bounds);
        let gap = find(&values, ids::margin_gap());
        assert!((gap.value.unwrap() - 5.0).abs() < 1e-9);
        assert_eq!(gap.status, IndicatorStatus::Bad);
    }

    #[test]
    fn test_margin_gap_without_sales() {
        let values = compute_indicators(&[], &[], &ConstraintBounds::default());
        let gap = find(&values, ids::margin_gap());
        assert_eq!(gap.value, None);
        assert_eq!(gap.status, IndicatorStatus::Neutral);
    }

    #[test]
    fn test_every_value_has_meta() {
        let metas = indicator_metas();
        let values = compute_indicators(&[], &[], &ConstraintBounds::default());
        for v in values {
            assert!(metas.iter().any(|m| m.id == v.id), "{:?} has no meta", v.id);
        }
    }
}
