use contracts::dashboards::d410_sales_optimization::{
    ProjectionPoint, ProjectionSeries, SalesProjection, SegmentRecord,
};

pub const PROJECTION_YEARS: [u32; 5] = [1, 2, 3, 4, 5];

/// Compound growth of initial sales with the raw, unclipped trend:
/// `initial_sales * (1 + trend) ^ year`.
pub fn project(initial_sales: i64, trend: f64, year: u32) -> f64 {
    initial_sales as f64 * (1.0 + trend).powi(year as i32)
}

/// One series per record, one point per year offset
pub fn project_sales(records: &[SegmentRecord], years: &[u32]) -> SalesProjection {
    let series = records
        .iter()
        .map(|r| ProjectionSeries {
            segment: r.segment.clone(),
            values: years
                .iter()
                .map(|&year| ProjectionPoint {
                    year,
                    sales: project(r.initial_sales, r.trend, year),
                })
                .collect(),
        })
        .collect();

    SalesProjection {
        years: years.to_vec(),
        series,
    }
}
