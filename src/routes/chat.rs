use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // An unreadable body carries neither field.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable chat request body");
            ChatRequest::default()
        }
    };

    let response = generate_reply(state.generator.as_ref(), &payload).await?;

    Ok(Json(ChatResponse { response }))
}
