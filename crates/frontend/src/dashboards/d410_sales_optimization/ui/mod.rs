mod charts;
mod constraints_panel;
mod dashboard;
mod segments_table;

pub use dashboard::SalesOptimizationDashboard;
