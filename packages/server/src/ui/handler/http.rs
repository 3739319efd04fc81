//! HTTP API endpoint handlers.

use axum::Json;
use meimei_shared::business_hours;

use crate::infrastructure::dto::http::{HealthDto, StatusDto};

/// `GET /api/status` - whether the bar is currently open.
pub async fn bar_status() -> Json<StatusDto> {
    Json(StatusDto {
        open: business_hours::is_open(),
    })
}

/// `GET /health` - liveness check.
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto::ok())
}
