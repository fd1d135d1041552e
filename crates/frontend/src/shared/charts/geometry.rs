//! Pure chart geometry: scales, ticks, SVG path data, band layout.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Series colours, reused cyclically
pub const PALETTE: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Linear map from a data domain to a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Degenerate domains map to the middle of the range
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Round a raw step up to 1, 2 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced round tick values covering `[min, max]`, about `count` of them
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let (mut lo, mut hi) = if min <= max { (min, max) } else { (max, min) };
    if (hi - lo).abs() < f64::EPSILON {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        lo -= pad;
        hi += pad;
    }

    let step = nice_step((hi - lo) / count.max(1) as f64);
    let first = (lo / step).floor() as i64;
    let last = (hi / step).ceil() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// `M x y L x y ...` through the given points
pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One pie slice; angles in radians, clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start_angle: f64,
    pub end_angle: f64,
    pub fraction: f64,
}

impl PieSlice {
    /// Angle of the slice middle, used to place labels
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Split the full circle proportionally to `values`; negatives count as zero.
///
/// Returns no slices when nothing is positive.
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = v.max(0.0) / total;
            let slice = PieSlice {
                start_angle: angle,
                end_angle: angle + fraction * TAU,
                fraction,
            };
            angle = slice.end_angle;
            slice
        })
        .collect()
}

/// Point on a circle for an angle measured clockwise from 12 o'clock
pub fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let a = angle - FRAC_PI_2;
    (cx + r * a.cos(), cy + r * a.sin())
}

/// SVG path of a filled wedge
pub fn arc_path(cx: f64, cy: f64, r: f64, slice: &PieSlice) -> String {
    if slice.fraction >= 1.0 - 1e-9 {
        // a single arc cannot close on itself, draw two halves
        let (tx, ty) = polar(cx, cy, r, 0.0);
        let (bx, by) = polar(cx, cy, r, std::f64::consts::PI);
        return format!(
            "M{tx:.2},{ty:.2} A{r:.2},{r:.2} 0 1 1 {bx:.2},{by:.2} A{r:.2},{r:.2} 0 1 1 {tx:.2},{ty:.2} Z"
        );
    }

    let (x0, y0) = polar(cx, cy, r, slice.start_angle);
    let (x1, y1) = polar(cx, cy, r, slice.end_angle);
    let large_arc = if slice.end_angle - slice.start_angle > std::f64::consts::PI {
        1
    } else {
        0
    };
    format!("M{cx:.2},{cy:.2} L{x0:.2},{y0:.2} A{r:.2},{r:.2} 0 {large_arc} 1 {x1:.2},{y1:.2} Z")
}

/// Split `width` starting at `x0` into `n` bands with `padding` (0..1) of
/// each band left empty, half on each side. Returns `(x, band_width)`.
pub fn band_layout(n: usize, x0: f64, width: f64, padding: f64) -> Vec<(f64, f64)> {
    if n == 0 {
        return Vec::new();
    }
    let step = width / n as f64;
    let inner = step * (1.0 - padding.clamp(0.0, 0.9));
    let offset = (step - inner) / 2.0;
    (0..n)
        .map(|i| (x0 + i as f64 * step + offset, inner))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (300.0, 0.0));
        assert!(close(scale.map(0.0), 300.0));
        assert!(close(scale.map(100.0), 0.0));
        assert!(close(scale.map(25.0), 225.0));
    }

    #[test]
    fn test_degenerate_scale_maps_to_middle() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 200.0));
        assert!(close(scale.map(5.0), 100.0));
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        let ticks = nice_ticks(1_200_000.0, 14_700_000.0, 5);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert!(*ticks.last().unwrap() >= 14_700_000.0);
        assert!(ticks.windows(2).all(|w| close(w[1] - w[0], 5_000_000.0)));
    }

    #[test]
    fn test_nice_ticks_flat_range() {
        let ticks = nice_ticks(3.0, 3.0, 4);
        assert!(ticks.first().unwrap() <= &3.0);
        assert!(ticks.last().unwrap() >= &3.0);
        assert!(ticks.len() >= 2);
    }

    #[test]
    fn test_line_path() {
        assert_eq!(line_path(&[]), "");
        assert_eq!(line_path(&[(0.0, 1.0), (2.5, 3.0)]), "M0.00,1.00 L2.50,3.00");
    }

    #[test]
    fn test_pie_slices_cover_circle() {
        let slices = pie_slices(&[1.0, 1.0, 2.0]);
        assert_eq!(slices.len(), 3);
        assert!(close(slices[0].fraction, 0.25));
        assert!(close(slices[2].fraction, 0.5));
        assert!(close(slices[0].start_angle, 0.0));
        assert!(close(slices[2].end_angle, TAU));
        assert!(close(slices[1].start_angle, slices[0].end_angle));
    }

    #[test]
    fn test_pie_slices_ignore_negative_and_empty() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[0.0, -1.0]).is_empty());
        let slices = pie_slices(&[-1.0, 3.0]);
        assert!(close(slices[0].fraction, 0.0));
        assert!(close(slices[1].fraction, 1.0));
    }

    #[test]
    fn test_arc_path_flags() {
        let small = PieSlice { start_angle: 0.0, end_angle: 1.0, fraction: 1.0 / TAU };
        assert!(arc_path(50.0, 50.0, 40.0, &small).contains(" 0 0 1 "));
        let large = PieSlice { start_angle: 0.0, end_angle: 4.0, fraction: 4.0 / TAU };
        assert!(arc_path(50.0, 50.0, 40.0, &large).contains(" 0 1 1 "));
        let full = PieSlice { start_angle: 0.0, end_angle: TAU, fraction: 1.0 };
        assert_eq!(arc_path(50.0, 50.0, 40.0, &full).matches('A').count(), 2);
    }

    #[test]
    fn test_polar_starts_at_top() {
        let (x, y) = polar(0.0, 0.0, 10.0, 0.0);
        assert!(close(x, 0.0) && close(y, -10.0));
        let (x, y) = polar(0.0, 0.0, 10.0, FRAC_PI_2);
        assert!(close(x, 10.0) && close(y, 0.0));
    }

    #[test]
    fn test_band_layout() {
        let bands = band_layout(4, 10.0, 400.0, 0.2);
        assert_eq!(bands.len(), 4);
        assert!(close(bands[0].1, 80.0));
        assert!(close(bands[0].0, 20.0));
        assert!(close(bands[3].0, 320.0));
        assert!(band_layout(0, 0.0, 100.0, 0.1).is_empty());
    }
}
