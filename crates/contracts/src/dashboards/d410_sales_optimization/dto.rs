use crate::shared::indicators::{IndicatorMeta, IndicatorValue};
use serde::{Deserialize, Serialize};

/// One synthetic business segment as produced by the generator.
///
/// Immutable after creation: every derived figure lives in [`SegmentRow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub portfolio: String,
    pub geography: String,
    pub category: String,
    pub brand: String,
    /// Unique segment label (e.g. "Lipstick")
    pub segment: String,
    /// Baseline sales in currency units
    pub initial_sales: i64,
    /// Margin as a fraction (0.05 = 5%)
    pub margin: f64,
    /// Yearly growth rate as a fraction, may be negative
    pub trend: f64,
    /// Normalized share, sums to 1.0 across all segments
    pub contribution: f64,
}

/// User-adjustable bounds read from the sidebar on every interaction.
///
/// All fractional values are fractions, not percents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintBounds {
    pub trend_min: f64,
    pub trend_max: f64,
    pub contribution_min: f64,
    pub contribution_max: f64,
    /// Sales target in currency units
    pub sales_target: i64,
    pub margin_target: f64,
}

impl Default for ConstraintBounds {
    fn default() -> Self {
        Self {
            trend_min: -0.02,
            trend_max: 0.05,
            contribution_min: 0.05,
            contribution_max: 0.30,
            sales_target: 100_000_000,
            margin_target: 0.05,
        }
    }
}

impl ConstraintBounds {
    /// Read a single bound as `f64`
    pub fn get(&self, field: ConstraintField) -> f64 {
        match field {
            ConstraintField::TrendMin => self.trend_min,
            ConstraintField::TrendMax => self.trend_max,
            ConstraintField::ContributionMin => self.contribution_min,
            ConstraintField::ContributionMax => self.contribution_max,
            ConstraintField::SalesTarget => self.sales_target as f64,
            ConstraintField::MarginTarget => self.margin_target,
        }
    }

    /// Write a single bound; the sales target is rounded to whole currency units
    pub fn set(&mut self, field: ConstraintField, value: f64) {
        match field {
            ConstraintField::TrendMin => self.trend_min = value,
            ConstraintField::TrendMax => self.trend_max = value,
            ConstraintField::ContributionMin => self.contribution_min = value,
            ConstraintField::ContributionMax => self.contribution_max = value,
            ConstraintField::SalesTarget => self.sales_target = value.round() as i64,
            ConstraintField::MarginTarget => self.margin_target = value,
        }
    }
}

/// Identifies one of the six sidebar inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintField {
    TrendMin,
    TrendMax,
    ContributionMin,
    ContributionMax,
    SalesTarget,
    MarginTarget,
}

impl ConstraintField {
    pub const ALL: [ConstraintField; 6] = [
        ConstraintField::TrendMin,
        ConstraintField::TrendMax,
        ConstraintField::ContributionMin,
        ConstraintField::ContributionMax,
        ConstraintField::SalesTarget,
        ConstraintField::MarginTarget,
    ];
}

/// Display unit of a sidebar widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderUnit {
    /// Widget shows whole percents, the bound is `value / 100`
    Percent,
    /// Widget shows currency units, the bound is the value itself
    Money,
}

impl SliderUnit {
    /// Convert a widget value to the bound stored in [`ConstraintBounds`]
    pub fn to_bound(self, widget_value: f64) -> f64 {
        match self {
            SliderUnit::Percent => widget_value / 100.0,
            SliderUnit::Money => widget_value,
        }
    }

    /// Convert a stored bound back to the widget value
    pub fn to_widget(self, bound: f64) -> f64 {
        match self {
            SliderUnit::Percent => (bound * 100.0).round(),
            SliderUnit::Money => bound,
        }
    }
}

/// Describes one sidebar widget. `min`, `max`, `step` and `default` are in widget units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub field: ConstraintField,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub unit: SliderUnit,
}

impl SliderSpec {
    /// Inclusive range check of a stored bound against this widget's domain
    pub fn accepts(&self, bound: f64) -> bool {
        let lo = self.unit.to_bound(self.min);
        let hi = self.unit.to_bound(self.max);
        bound.is_finite() && bound >= lo - 1e-9 && bound <= hi + 1e-9
    }
}

/// Everything the page needs before the first recompute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintCatalog {
    pub sliders: Vec<SliderSpec>,
    pub defaults: ConstraintBounds,
    pub indicators: Vec<IndicatorMeta>,
}

/// One row of the result table: base record plus derived figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRow {
    #[serde(flatten)]
    pub record: SegmentRecord,
    /// clip(1 + trend, 1 + trend_min, 1 + trend_max)
    pub max_growth_factor: f64,
    /// clip(contribution, contribution_min, contribution_max)
    pub max_contribution: f64,
    /// initial_sales * max_growth_factor
    pub max_sales: f64,
    pub brand_sales: i64,
    pub category_sales: i64,
    pub geography_sales: i64,
    pub portfolio_sales: i64,
}

/// Projected sales of one segment for one year offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub segment: String,
    pub values: Vec<ProjectionPoint>,
}

/// Segment x year projection table, one series per segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesProjection {
    pub years: Vec<u32>,
    pub series: Vec<ProjectionSeries>,
}

impl SalesProjection {
    /// Projected sales for a segment and year, if present
    pub fn value(&self, segment: &str, year: u32) -> Option<f64> {
        self.series
            .iter()
            .find(|s| s.segment == segment)?
            .values
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.sales)
    }
}

/// Response of a single recompute cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResponse {
    /// Bounds the response was computed with
    pub constraints: ConstraintBounds,
    pub rows: Vec<SegmentRow>,
    pub projection: SalesProjection,
    /// Gap-to-target and total cards
    pub indicators: Vec<IndicatorValue>,
}
