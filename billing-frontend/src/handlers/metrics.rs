use axum::response::IntoResponse;
use service_core::error::AppError;

pub async fn metrics() -> Result<impl IntoResponse, AppError> {
    match crate::services::metrics::gather()? {
        Some(text) => Ok(text),
        None => Err(AppError::ServiceUnavailable(
            "metrics registry not initialized".to_string(),
        )),
    }
}
