// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Optional keyed patient data. Absent and `null` both mean "no context".
    #[serde(default)]
    pub patient_context: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
