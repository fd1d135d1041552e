//! SVG chart helpers shared by dashboards.

pub mod geometry;

pub use geometry::*;
