use crate::{
    clients::gemini::GeminiClient,
    config::GeminiSettings,
    error::{AppError, Result},
    models::prompt::{assistant_prompt, PromptRequest},
};

/// POST path: parse the body, wrap the prompt in the assistant template and ask Gemini.
pub async fn create_answer(body: &[u8], settings: &GeminiSettings) -> Result<String> {
    let req = parse_body(body)?;
    if let Err(issues) = req.validate() {
        return Err(AppError::Validation(issues.join(", ")));
    }

    let client = GeminiClient::from_settings(settings)?;
    client.generate(assistant_prompt(req.user_prompt())).await
}

fn parse_body(body: &[u8]) -> Result<PromptRequest> {
    // An empty body is not JSON and fails here like any other malformed body.
    let value = serde_json::from_slice(body)?;
    Ok(PromptRequest::from_value(value))
}
