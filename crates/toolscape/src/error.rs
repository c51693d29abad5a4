use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error wrapping `anyhow::Error`.
///
/// Handlers return `Result<_, AppError>` so `?` works on anything
/// convertible into `anyhow::Error`. The original error is logged; the
/// response body carries only a generic message.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Failed to serve request");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "The page could not be rendered.",
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
