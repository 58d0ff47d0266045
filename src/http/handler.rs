use serde::Serialize;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::{
    config::GeminiSettings,
    error::AppError,
    http::{
        cors::add_cors,
        response::{empty_response, error_response, json_response},
    },
    services::prompt_relay,
};

#[derive(Serialize, Debug)]
pub struct AnswerResponse {
    pub text: String,
}

/// Handles one invocation. Every response carries the CORS headers.
pub async fn handle(req: Request, settings: &GeminiSettings) -> Result<Response<Body>, Error> {
    let resp = match req.method().as_str() {
        "OPTIONS" => empty_response(StatusCode::OK)?,
        "POST" => match prompt_relay::create_answer(req.body(), settings).await {
            Ok(text) => json_response(StatusCode::OK, &AnswerResponse { text })?,
            Err(err) => failure(&err)?,
        },
        _ => failure(&AppError::MethodNotAllowed)?,
    };
    add_cors(resp)
}

fn failure(err: &AppError) -> anyhow::Result<Response<Body>> {
    let (status, body) = error_response(err);
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), error = %err, "prompt relay failed");
    } else {
        tracing::info!(status = status.as_u16(), error = %err, "request rejected");
    }
    json_response(status, &body)
}
