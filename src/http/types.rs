use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::error::TodoError;

/// Error body shared by every failing route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError { pub error: String }

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMessage { pub message: String }

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self { Self { message: message.into() } }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = match &self {
            TodoError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::Storage(err) => {
                tracing::error!(error = ?err, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, axum::Json(ApiError { error: self.to_string() })).into_response()
    }
}

/// JSON request body where an empty body reads as `T::default()` and
/// malformed input is rejected with a JSON `{error}` body. Failures to read
/// the body keep axum's status (413 for oversized bodies).
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| (rejection.status(), axum::Json(ApiError { error: rejection.body_text() })).into_response())?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| TodoError::Validation(format!("Invalid JSON body: {err}")).into_response())
    }
}
