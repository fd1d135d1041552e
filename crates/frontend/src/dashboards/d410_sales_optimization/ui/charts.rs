use contracts::dashboards::d410_sales_optimization::{SalesProjection, SegmentRow};
use leptos::prelude::*;

use crate::shared::charts::{
    arc_path, band_layout, line_path, nice_ticks, pie_slices, polar, series_color, LinearScale,
};
use crate::shared::components::table::{format_compact, format_money, format_percent};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 340.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;

const PLOT_BOTTOM: f64 = HEIGHT - MARGIN_BOTTOM;
const PLOT_RIGHT: f64 = WIDTH - MARGIN_RIGHT;

const INITIAL_COLOR: &str = "#9aa5b1";
const MAX_COLOR: &str = "#4e79a7";

/// Y axis from zero to a round value above `max`
fn value_axis(max: f64) -> (LinearScale, Vec<f64>) {
    let ticks = nice_ticks(0.0, max.max(0.0), 5);
    let top = ticks.last().copied().unwrap_or(1.0);
    let scale = LinearScale::new((0.0, top), (PLOT_BOTTOM, MARGIN_TOP));
    (scale, ticks)
}

fn axis_view(scale: LinearScale, ticks: Vec<f64>) -> impl IntoView {
    ticks
        .into_iter()
        .map(|t| {
            let y = scale.map(t);
            view! {
                <g class="chart__tick">
                    <line x1=MARGIN_LEFT x2=PLOT_RIGHT y1=y y2=y stroke="#e4e7eb" />
                    <text x={MARGIN_LEFT - 8.0} y={y + 4.0} text-anchor="end" font-size="11">
                        {format_compact(t)}
                    </text>
                </g>
            }
        })
        .collect_view()
}

/// One polyline per segment over the projection years
#[derive(Debug, Clone, PartialEq)]
struct LineLayout {
    ticks: Vec<f64>,
    scale: LinearScale,
    /// (year, x position)
    x_labels: Vec<(u32, f64)>,
    /// (segment, path data)
    paths: Vec<(String, String)>,
}

fn layout_projection(projection: &SalesProjection) -> LineLayout {
    let max = projection
        .series
        .iter()
        .flat_map(|s| s.values.iter().map(|p| p.sales))
        .fold(0.0, f64::max);
    let (scale, ticks) = value_axis(max);

    let first = projection.years.first().copied().unwrap_or(1) as f64;
    let last = projection.years.last().copied().unwrap_or(1) as f64;
    let x = LinearScale::new((first, last), (MARGIN_LEFT + 20.0, PLOT_RIGHT - 20.0));

    let paths = projection
        .series
        .iter()
        .map(|s| {
            let points: Vec<(f64, f64)> = s
                .values
                .iter()
                .map(|p| (x.map(p.year as f64), scale.map(p.sales)))
                .collect();
            (s.segment.clone(), line_path(&points))
        })
        .collect();

    LineLayout {
        ticks,
        scale,
        x_labels: projection.years.iter().map(|&y| (y, x.map(y as f64))).collect(),
        paths,
    }
}

#[component]
pub fn ProjectionLineChart(#[prop(into)] projection: Signal<SalesProjection>) -> impl IntoView {
    let chart = move || {
        let layout = projection.with(layout_projection);
        let lines = layout
            .paths
            .iter()
            .enumerate()
            .map(|(i, (segment, d))| {
                view! {
                    <path d=d.clone() fill="none" stroke=series_color(i) stroke-width="2" data-segment=segment.clone() />
                }
            })
            .collect_view();
        let years = layout
            .x_labels
            .into_iter()
            .map(|(year, x)| {
                view! {
                    <text x=x y={PLOT_BOTTOM + 18.0} text-anchor="middle" font-size="11">
                        {format!("Year {}", year)}
                    </text>
                }
            })
            .collect_view();
        let legend = legend_view(layout.paths.iter().map(|(s, _)| s.clone()).collect());

        view! {
            <svg class="chart chart--line" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
                {axis_view(layout.scale, layout.ticks)}
                {lines}
                {years}
            </svg>
            {legend}
        }
    };

    view! { <div class="chart-container">{chart}</div> }
}

fn legend_view(labels: Vec<String>) -> impl IntoView {
    let items = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <span class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background: {};", series_color(i))></span>
                    {label}
                </span>
            }
        })
        .collect_view();
    view! { <div class="chart-legend">{items}</div> }
}

/// One wedge per segment, sized by its clipped contribution
#[derive(Debug, Clone, PartialEq)]
struct Wedge {
    segment: String,
    path: String,
    share: f64,
    label_at: (f64, f64),
}

const PIE_SIZE: f64 = 320.0;

fn layout_pie(rows: &[SegmentRow]) -> Vec<Wedge> {
    let (cx, cy, r) = (PIE_SIZE / 2.0, PIE_SIZE / 2.0, PIE_SIZE / 2.0 - 10.0);
    let values: Vec<f64> = rows.iter().map(|r| r.max_contribution).collect();
    pie_slices(&values)
        .iter()
        .zip(rows)
        .map(|(slice, row)| Wedge {
            segment: row.record.segment.clone(),
            path: arc_path(cx, cy, r, slice),
            share: slice.fraction,
            label_at: polar(cx, cy, r * 0.65, slice.mid_angle()),
        })
        .collect()
}

#[component]
pub fn ContributionPieChart(#[prop(into)] rows: Signal<Vec<SegmentRow>>) -> impl IntoView {
    let chart = move || {
        let wedges = rows.with(|r| layout_pie(r));
        let legend = legend_view(wedges.iter().map(|w| w.segment.clone()).collect());
        let shapes = wedges
            .into_iter()
            .enumerate()
            .map(|(i, w)| {
                let (lx, ly) = w.label_at;
                let label = (w.share >= 0.04).then(|| {
                    view! {
                        <text x=lx y=ly text-anchor="middle" font-size="11" fill="#fff">
                            {format_percent(w.share, 1)}
                        </text>
                    }
                });
                view! {
                    <g>
                        <path d=w.path fill=series_color(i) stroke="#fff" stroke-width="1" data-segment=w.segment />
                        {label}
                    </g>
                }
            })
            .collect_view();

        view! {
            <svg class="chart chart--pie" viewBox=format!("0 0 {} {}", PIE_SIZE, PIE_SIZE)>
                {shapes}
            </svg>
            {legend}
        }
    };

    view! { <div class="chart-container chart-container--pie">{chart}</div> }
}

/// Grouped bars: initial and max sales side by side per segment
#[derive(Debug, Clone, PartialEq)]
struct BarGroup {
    segment: String,
    label_x: f64,
    /// (x, y, width, height, value) for initial then max sales
    bars: [(f64, f64, f64, f64, f64); 2],
}

fn layout_bars(rows: &[SegmentRow]) -> (LinearScale, Vec<f64>, Vec<BarGroup>) {
    let max = rows
        .iter()
        .map(|r| (r.record.initial_sales as f64).max(r.max_sales))
        .fold(0.0, f64::max);
    let (scale, ticks) = value_axis(max);

    let groups = band_layout(rows.len(), MARGIN_LEFT, PLOT_RIGHT - MARGIN_LEFT, 0.25)
        .into_iter()
        .zip(rows)
        .map(|((x, width), row)| {
            let half = width / 2.0;
            let bar = |offset: f64, value: f64| {
                let top = scale.map(value.max(0.0));
                (x + offset, top, half, PLOT_BOTTOM - top, value)
            };
            BarGroup {
                segment: row.record.segment.clone(),
                label_x: x + half,
                bars: [
                    bar(0.0, row.record.initial_sales as f64),
                    bar(half, row.max_sales),
                ],
            }
        })
        .collect();

    (scale, ticks, groups)
}

#[component]
pub fn SalesBarChart(#[prop(into)] rows: Signal<Vec<SegmentRow>>) -> impl IntoView {
    let chart = move || {
        let (scale, ticks, groups) = rows.with(|r| layout_bars(r));
        let bars = groups
            .into_iter()
            .map(|g| {
                let rects = g
                    .bars
                    .iter()
                    .zip([("Initial Sales", INITIAL_COLOR), ("Max Sales", MAX_COLOR)])
                    .map(|(&(x, y, w, h, value), (name, color))| {
                        view! {
                            <rect x=x y=y width=w height=h fill=color data-value=format!("{} {}", name, format_money(value)) />
                        }
                    })
                    .collect_view();
                view! {
                    <g class="chart__bar-group">
                        {rects}
                        <text x=g.label_x y={PLOT_BOTTOM + 16.0} text-anchor="middle" font-size="10">
                            {g.segment.clone()}
                        </text>
                    </g>
                }
            })
            .collect_view();

        view! {
            <svg class="chart chart--bar" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
                {axis_view(scale, ticks)}
                {bars}
            </svg>
            <div class="chart-legend">
                <span class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background: {};", INITIAL_COLOR)></span>
                    "Initial Sales"
                </span>
                <span class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background: {};", MAX_COLOR)></span>
                    "Max Sales"
                </span>
            </div>
        }
    };

    view! { <div class="chart-container">{chart}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d410_sales_optimization::{
        ProjectionPoint, ProjectionSeries, SegmentRecord,
    };

    fn row(segment: &str, initial_sales: i64, max_sales: f64, max_contribution: f64) -> SegmentRow {
        SegmentRow {
            record: SegmentRecord {
                portfolio: "Skin Care".to_string(),
                geography: "Asia".to_string(),
                category: "Face".to_string(),
                brand: "Acme".to_string(),
                segment: segment.to_string(),
                initial_sales,
                margin: 0.2,
                trend: 0.01,
                contribution: max_contribution,
            },
            max_growth_factor: max_sales / initial_sales as f64,
            max_contribution,
            max_sales,
            brand_sales: initial_sales,
            category_sales: initial_sales,
            geography_sales: initial_sales,
            portfolio_sales: initial_sales,
        }
    }

    #[test]
    fn test_projection_layout_one_path_per_segment() {
        let projection = SalesProjection {
            years: vec![1, 2, 3],
            series: vec![
                ProjectionSeries {
                    segment: "Toner".to_string(),
                    values: (1..=3)
                        .map(|y| ProjectionPoint { year: y, sales: 1_000_000.0 * y as f64 })
                        .collect(),
                },
                ProjectionSeries {
                    segment: "Tools".to_string(),
                    values: (1..=3)
                        .map(|y| ProjectionPoint { year: y, sales: 500_000.0 })
                        .collect(),
                },
            ],
        };
        let layout = layout_projection(&projection);
        assert_eq!(layout.paths.len(), 2);
        assert_eq!(layout.paths[0].0, "Toner");
        assert_eq!(layout.paths[0].1.matches('L').count(), 2);
        assert_eq!(layout.x_labels.len(), 3);
        assert!(layout.ticks.last().unwrap() >= &3_000_000.0);
        // first year sits left of the last one
        assert!(layout.x_labels[0].1 < layout.x_labels[2].1);
    }

    #[test]
    fn test_empty_projection_layout() {
        let layout = layout_projection(&SalesProjection { years: vec![], series: vec![] });
        assert!(layout.paths.is_empty());
        assert!(!layout.ticks.is_empty());
    }

    #[test]
    fn test_pie_uses_max_contribution_share() {
        let rows = vec![row("A", 100, 100.0, 0.3), row("B", 100, 100.0, 0.1)];
        let wedges = layout_pie(&rows);
        assert_eq!(wedges.len(), 2);
        assert!((wedges[0].share - 0.75).abs() < 1e-9);
        assert!((wedges[1].share - 0.25).abs() < 1e-9);
        assert_eq!(wedges[1].segment, "B");
    }

    #[test]
    fn test_bars_scale_to_value() {
        let rows = vec![
            row("A", 4_000_000, 5_000_000.0, 0.2),
            row("B", 2_000_000, 1_000_000.0, 0.2),
        ];
        let (scale, _, groups) = layout_bars(&rows);
        assert_eq!(groups.len(), 2);
        let [initial, max] = groups[0].bars;
        // bars stand on the baseline
        assert!((initial.1 + initial.3 - PLOT_BOTTOM).abs() < 1e-9);
        assert!(max.3 > initial.3);
        assert!((max.1 - scale.map(5_000_000.0)).abs() < 1e-9);
        // side by side within the band
        assert!((max.0 - (initial.0 + initial.2)).abs() < 1e-9);
    }
}
