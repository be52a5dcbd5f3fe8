use serde_json::Value;

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse};

/// Used whenever the context is missing or carries no "name" key.
pub const FALLBACK_PATIENT_NAME: &str = "the patient";

/// Build the greeting for one request. Stateless: the reply depends only
/// on the request itself.
pub fn generate_reply(request: &ChatRequest) -> Result<ChatResponse, AppError> {
    let patient_name = match request
        .patient_context
        .as_ref()
        .and_then(|ctx| ctx.get("name"))
    {
        Some(value) => display_name(value)?,
        None => FALLBACK_PATIENT_NAME.to_string(),
    };

    let response = format!(
        "Hello! As a dental assistant, I verify that I received your message: '{}'. How can I help {} today?",
        request.message, patient_name
    );

    Ok(ChatResponse { response })
}

// A string name goes in verbatim; anything else is rendered as its JSON text.
fn display_name(value: &Value) -> Result<String, AppError> {
    match value {
        Value::String(name) => Ok(name.clone()),
        other => Ok(serde_json::to_string(other)?),
    }
}
