//! Chat handler: answers the last user message with a GitHub lookup or search.

use axum::body::Bytes;
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use aetheribot_types::chat::{ChatReply, ChatRequest};
use aetheribot_types::error::QueryError;

use crate::http::error::AppError;
use crate::http::extractors::credential::GitHubQueries;

/// POST /api/chat
///
/// The body is parsed by hand so a malformed payload is reported through the
/// same `{ error }` 500 path as upstream failures. The credential is checked
/// first, before the body is read: a request without one gets 401 even when
/// its body is malformed.
pub async fn chat(
    GitHubQueries(queries): GitHubQueries,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("chat", %request_id);

    async move {
        let request: ChatRequest = serde_json::from_slice(&body)
            .map_err(|e| QueryError::InvalidRequest(e.to_string()))?;

        let utterance = request.utterance();
        tracing::debug!(
            messages = request.messages.len(),
            role = %request.last_role().unwrap_or_default(),
            utterance,
            "Chat query"
        );

        let text = queries.reply(utterance).await?;
        Ok(Json(ChatReply { text }))
    }
    .instrument(span)
    .await
}
