use serde_json::Value;

#[derive(Debug, Default)]
pub struct PromptRequest {
    /// Kept as raw JSON so a wrong type can be reported instead of failing the whole body.
    pub user_prompt: Option<Value>,
}

impl PromptRequest {
    /// Reads `userPrompt` by name. A body that is not a JSON object carries no prompt.
    pub fn from_value(body: Value) -> Self {
        let user_prompt = match body {
            Value::Object(mut fields) => fields.remove("userPrompt").filter(|v| !v.is_null()),
            _ => None,
        };
        Self { user_prompt }
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();
        match &self.user_prompt {
            None | Some(Value::String(_)) => {}
            Some(_) => issues.push("userPrompt must be a string".into()),
        }
        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }

    /// The prompt text, or `""` when absent.
    pub fn user_prompt(&self) -> &str {
        self.user_prompt.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}

pub fn assistant_prompt(user_prompt: &str) -> String {
    format!(
        "You are a helpful pfSense network security assistant. \
         A user wants to know about a firewall rule or security best practice. \
         They describe their request as: '{user_prompt}'. \
         Provide a clear, concise, and helpful explanation or suggestion for their pfSense setup. \
         Use a friendly and encouraging tone. \
         Do not provide code, only descriptive text."
    )
}
