pub mod d410_sales_optimization;

pub use d410_sales_optimization::ui::SalesOptimizationDashboard;
