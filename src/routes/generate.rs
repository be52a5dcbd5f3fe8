use axum::Json;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::responder,
};

pub async fn generate_handler(
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = responder::generate_reply(&payload)?;
    Ok(Json(reply))
}
