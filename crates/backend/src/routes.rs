use axum::{
    routing::get,
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D410 Sales Optimization Dashboard
        .route(
            "/api/d410/constraints",
            get(handlers::d410_sales_optimization::get_constraints),
        )
        .route(
            "/api/d410/segments",
            get(handlers::d410_sales_optimization::get_segments),
        )
        .route(
            "/api/d410/recompute",
            get(handlers::d410_sales_optimization::get_recompute)
                .post(handlers::d410_sales_optimization::post_recompute),
        )
}
