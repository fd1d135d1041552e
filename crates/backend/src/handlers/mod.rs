// Dashboard handlers (d4xx)
pub mod d410_sales_optimization;
