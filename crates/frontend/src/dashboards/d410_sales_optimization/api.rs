use contracts::dashboards::d410_sales_optimization::{
    ConstraintBounds, ConstraintCatalog, OptimizationResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const API_BASE: &str = "/api/d410";

/// Slider specs, default bounds and indicator metadata
pub async fn get_constraint_catalog() -> Result<ConstraintCatalog, String> {
    let url = api_url(&format!("{}/constraints", API_BASE));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Recompute the segment table for the given bounds
pub async fn recompute(bounds: &ConstraintBounds) -> Result<OptimizationResponse, String> {
    let url = api_url(&format!("{}/recompute", API_BASE));

    let response = Request::post(&url)
        .json(bounds)
        .map_err(|e| format!("Serialize error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        // 400 carries {"error": "..."}
        let status = response.status();
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string));
        return Err(match detail {
            Some(msg) => format!("HTTP error {}: {}", status, msg),
            None => format!("HTTP error: {}", status),
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
