use serde_json::{json, Value};
use vercel_runtime::{Body, Response, StatusCode};

use crate::error::AppError;

pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    match err {
        AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, json!({"error":"Method Not Allowed"})),
        AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({"error":msg})),
        AppError::MissingApiKey | AppError::InvalidResponse => {
            (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":err.to_string()}))
        }
        AppError::Upstream { status, body, .. } => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, json!({"error":err.to_string(),"details":body}))
        }
        AppError::Network(_) | AppError::Json(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error":"Internal Server Error","details":err.to_string()}),
        ),
    }
}

pub fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> anyhow::Result<Response<Body>> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(value)?.into())?)
}

pub fn empty_response(status: StatusCode) -> anyhow::Result<Response<Body>> {
    Ok(Response::builder().status(status).body(Body::Empty)?)
}
