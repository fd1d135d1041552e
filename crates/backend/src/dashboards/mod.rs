pub mod d410_sales_optimization;
