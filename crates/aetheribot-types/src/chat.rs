//! Chat request and reply types for the `/api/chat` contract.
//!
//! The caller sends its whole conversation on every request; only the last
//! message is interpreted. Every field is defaulted, and `null` is read as
//! absent, so partially-formed bodies degrade to an empty query instead of a
//! parse failure.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `null` list or `null` entries become empty messages.
fn messages_or_empty<'de, D>(deserializer: D) -> Result<Vec<ChatMessage>, D::Error>
where
    D: Deserializer<'de>,
{
    let messages: Option<Vec<Option<ChatMessage>>> = Option::deserialize(deserializer)?;
    Ok(messages
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Role of a chat message author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    #[default]
    User,
    Assistant,
    /// Any role string the client invents. Carried through, never interpreted.
    #[serde(other)]
    Other,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
            MessageRole::Other => write!(f, "other"),
        }
    }
}

/// A single message in the caller's conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: MessageRole,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl ChatMessage {
    /// Convenience constructor for a user-authored message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "messages_or_empty")]
    pub messages: Vec<ChatMessage>,

    /// Persona instruction chosen by the client's mood switcher.
    /// Accepted for compatibility; the query pipeline does not use it.
    #[serde(
        default,
        rename = "systemPrompt",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_prompt: Option<String>,
}

impl ChatRequest {
    /// A request carrying a single user message.
    pub fn from_utterance(utterance: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(utterance)],
            system_prompt: None,
        }
    }

    /// Role of the last message, if any.
    pub fn last_role(&self) -> Option<MessageRole> {
        self.messages.last().map(|m| m.role)
    }

    /// The user utterance: trimmed content of the last message, or `""`.
    pub fn utterance(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.content.trim())
            .unwrap_or_default()
    }
}

/// Successful reply body: `{ "text": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterance_is_trimmed_last_message() {
        let req = ChatRequest {
            messages: vec![
                ChatMessage::user("first"),
                ChatMessage {
                    role: MessageRole::Assistant,
                    content: "reply".to_string(),
                },
                ChatMessage::user("  vercel/next.js \n"),
            ],
            system_prompt: None,
        };
        assert_eq!(req.utterance(), "vercel/next.js");
    }

    #[test]
    fn test_utterance_empty_list_is_empty_string() {
        let req = ChatRequest::default();
        assert_eq!(req.utterance(), "");
    }

    #[test]
    fn test_request_deserializes_client_shape() {
        let json = r#"{
            "messages": [{"role": "user", "content": "best todo app"}],
            "systemPrompt": "You are AetheriBot, a dreamy poet AI."
        }"#;
        let req: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, MessageRole::User);
        assert_eq!(req.utterance(), "best todo app");
        assert!(req.system_prompt.unwrap().starts_with("You are AetheriBot"));
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.messages.is_empty());

        let req: ChatRequest =
            serde_json::from_str(r#"{"messages": [{"role": "system"}]}"#).unwrap();
        assert_eq!(req.messages[0].role, MessageRole::Other);
        assert_eq!(req.utterance(), "");
    }

    #[test]
    fn test_request_treats_null_as_missing() {
        let req: ChatRequest = serde_json::from_str(r#"{"messages": null}"#).unwrap();
        assert!(req.messages.is_empty());
        assert_eq!(req.utterance(), "");

        let req: ChatRequest =
            serde_json::from_str(r#"{"messages": [{"role": "user", "content": null}]}"#).unwrap();
        assert_eq!(req.utterance(), "");

        let req: ChatRequest =
            serde_json::from_str(r#"{"messages": [{"role": null, "content": "x"}, null]}"#)
                .unwrap();
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, MessageRole::User);
        assert_eq!(req.utterance(), "");
    }

    #[test]
    fn test_from_utterance_is_single_user_message() {
        let req = ChatRequest::from_utterance(" best todo app ");
        assert_eq!(req.last_role(), Some(MessageRole::User));
        assert_eq!(req.last_role().unwrap().to_string(), "user");
        assert_eq!(req.utterance(), "best todo app");
    }

    #[test]
    fn test_reply_serializes_text_field() {
        let reply = ChatReply {
            text: "hello".to_string(),
        };
        assert_eq!(serde_json::to_string(&reply).unwrap(), r#"{"text":"hello"}"#);
    }
}
