use contracts::dashboards::d410_sales_optimization::{ConstraintField, SliderSpec, SliderUnit};

pub const PORTFOLIOS: &[&str] = &["Skin/Body", "Fragrance + Color Cosmetics", "Hair/APDO"];

pub const GEOGRAPHIES: &[&str] = &["North America", "Europe", "South America", "Asia"];

pub const CATEGORIES: &[&str] = &[
    "Fragrance",
    "Hair Dye",
    "Face Make-Up",
    "Make-Up Brushes",
    "Tools",
];

pub const BRANDS: &[&str] = &[
    "Bobbi Brown",
    "Elizabeth Arden",
    "Aveda",
    "Kilian",
    "Frederic Malle",
    "Balmain",
];

pub const SEGMENTS: &[&str] = &[
    "Lipstick",
    "Mascara",
    "Toner",
    "Bronzer",
    "Hair Dye",
    "Face Make-Up",
    "Make-Up Brushes",
    "Tools",
];

/// Enumerations the generator draws labels from.
///
/// One record is produced per entry of `segments`.
#[derive(Debug, Clone)]
pub struct Dimensions {
    pub portfolios: Vec<String>,
    pub geographies: Vec<String>,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub segments: Vec<String>,
}

impl Dimensions {
    /// The ACME hierarchy shown on the dashboard
    pub fn acme() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Self {
            portfolios: owned(PORTFOLIOS),
            geographies: owned(GEOGRAPHIES),
            categories: owned(CATEGORIES),
            brands: owned(BRANDS),
            segments: owned(SEGMENTS),
        }
    }
}

/// Sidebar widgets in display order
pub fn slider_specs() -> Vec<SliderSpec> {
    let percent = |field, label: &str, min, max, default| SliderSpec {
        field,
        label: label.to_string(),
        min,
        max,
        step: 1.0,
        default,
        unit: SliderUnit::Percent,
    };

    vec![
        percent(ConstraintField::TrendMin, "Min Trend Growth (%)", -5.0, 0.0, -2.0),
        percent(ConstraintField::TrendMax, "Max Trend Growth (%)", 0.0, 10.0, 5.0),
        percent(ConstraintField::ContributionMin, "Min Contribution (%)", 1.0, 10.0, 5.0),
        percent(ConstraintField::ContributionMax, "Max Contribution (%)", 10.0, 50.0, 30.0),
        SliderSpec {
            field: ConstraintField::SalesTarget,
            label: "Sales Target ($)".to_string(),
            min: 50_000_000.0,
            max: 500_000_000.0,
            step: 1.0,
            default: 100_000_000.0,
            unit: SliderUnit::Money,
        },
        percent(ConstraintField::MarginTarget, "Margin Target (%)", 0.0, 50.0, 5.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d410_sales_optimization::ConstraintBounds;
    use std::collections::HashSet;

    #[test]
    fn test_segments_are_unique() {
        let unique: HashSet<_> = SEGMENTS.iter().collect();
        assert_eq!(unique.len(), SEGMENTS.len());
        assert_eq!(SEGMENTS.len(), 8);
    }

    #[test]
    fn test_slider_defaults_match_default_bounds() {
        let defaults = ConstraintBounds::default();
        for spec in slider_specs() {
            let bound = spec.unit.to_bound(spec.default);
            assert!(
                (bound - defaults.get(spec.field)).abs() < 1e-12,
                "{:?} default mismatch",
                spec.field
            );
            assert!(spec.accepts(bound));
        }
    }

    #[test]
    fn test_every_field_has_a_slider() {
        let fields: HashSet<_> = slider_specs().iter().map(|s| s.field).collect();
        assert_eq!(fields.len(), ConstraintField::ALL.len());
    }
}
