use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::dashboards::d410_sales_optimization::{
    ConstraintBounds, ConstraintCatalog, OptimizationResponse, SegmentRecord,
};
use serde_json::json;

use crate::dashboards::d410_sales_optimization::service::{self, ConstraintError};
use crate::dashboards::d410_sales_optimization::state;
use crate::shared::format::format_money;

/// Handler error: undecodable input, bad sidebar input or missing base table
#[derive(Debug)]
pub enum ApiError {
    Malformed { status: StatusCode, message: String },
    BadRequest(ConstraintError),
    Internal(anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Malformed {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::Malformed {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<ConstraintError> for ApiError {
    fn from(e: ConstraintError) -> Self {
        ApiError::BadRequest(e)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Malformed { status, message } => {
                tracing::warn!("D410 Dashboard: malformed request: {}", message);
                (status, message)
            }
            ApiError::BadRequest(e) => {
                tracing::warn!("D410 Dashboard: rejected constraints: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Internal(e) => {
                tracing::error!("D410 Dashboard: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// GET /api/d410/constraints
pub async fn get_constraints() -> Json<ConstraintCatalog> {
    Json(service::constraint_catalog())
}

/// GET /api/d410/segments
pub async fn get_segments() -> Result<Json<Vec<SegmentRecord>>, ApiError> {
    let base = state::base_table()?;
    Ok(Json(base.to_vec()))
}

/// POST /api/d410/recompute
pub async fn post_recompute(
    payload: Result<Json<ConstraintBounds>, JsonRejection>,
) -> Result<Json<OptimizationResponse>, ApiError> {
    let Json(bounds) = payload?;
    recompute(bounds)
}

/// GET /api/d410/recompute?trend_min=-0.02&trend_max=0.05
pub async fn get_recompute(
    query: Result<Query<ConstraintBounds>, QueryRejection>,
) -> Result<Json<OptimizationResponse>, ApiError> {
    let Query(bounds) = query?;
    recompute(bounds)
}

fn recompute(bounds: ConstraintBounds) -> Result<Json<OptimizationResponse>, ApiError> {
    service::validate_bounds(&bounds)?;
    let base = state::base_table()?;

    tracing::info!(
        "D410 Dashboard: recompute trend [{}, {}], contribution [{}, {}]",
        bounds.trend_min,
        bounds.trend_max,
        bounds.contribution_min,
        bounds.contribution_max
    );

    let response = service::recompute(base, &bounds);
    let total_max_sales: f64 = response.rows.iter().map(|r| r.max_sales).sum();
    tracing::info!(
        "D410 Dashboard: returning {} rows, max sales {}, target {}",
        response.rows.len(),
        format_money(total_max_sales),
        format_money(bounds.sales_target as f64)
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::extract::FromRequest;
    use axum::http::{header, Request, Uri};

    async fn error_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_recompute_with_defaults() {
        state::initialize_base_table(42);
        let Json(response) = post_recompute(Ok(Json(ConstraintBounds::default())))
            .await
            .unwrap();
        assert_eq!(response.rows.len(), 8);
        assert_eq!(response.constraints, ConstraintBounds::default());
    }

    #[tokio::test]
    async fn test_query_and_body_agree() {
        state::initialize_base_table(42);
        let bounds = ConstraintBounds {
            trend_max: 0.01,
            ..ConstraintBounds::default()
        };
        let Json(from_body) = post_recompute(Ok(Json(bounds))).await.unwrap();
        let Json(from_query) = get_recompute(Ok(Query(bounds))).await.unwrap();
        assert_eq!(from_body.rows, from_query.rows);
    }

    #[tokio::test]
    async fn test_out_of_range_is_bad_request() {
        state::initialize_base_table(42);
        let bounds = ConstraintBounds {
            contribution_max: 0.9,
            ..ConstraintBounds::default()
        };
        let err = post_recompute(Ok(Json(bounds))).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_segments_returns_base_table() {
        state::initialize_base_table(42);
        let Json(segments) = get_segments().await.unwrap();
        assert_eq!(segments.len(), 8);
        let total: f64 = segments.iter().map(|s| s.contribution).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_constraints_catalog() {
        let Json(catalog) = get_constraints().await;
        assert_eq!(catalog.sliders.len(), 6);
    }

    #[tokio::test]
    async fn test_undecodable_query_is_json_bad_request() {
        state::initialize_base_table(42);
        let uri: Uri = "/api/d410/recompute?sales_target=abc".parse().unwrap();
        let query = Query::<ConstraintBounds>::try_from_uri(&uri);
        assert!(query.is_err());

        let err = get_recompute(query).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn test_mistyped_json_field_is_json_error() {
        state::initialize_base_table(42);
        let request = Request::builder()
            .method("POST")
            .uri("/api/d410/recompute")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"trend_max": "high"}"#))
            .unwrap();
        let payload = Json::<ConstraintBounds>::from_request(request, &()).await;
        assert!(payload.is_err());

        let err = post_recompute(payload).await.unwrap_err();
        let response = err.into_response();
        assert!(response.status().is_client_error());
        let body = error_body(response).await;
        assert!(body["error"].as_str().is_some());
    }
}
