use serde::{Deserialize, Serialize};

/// A single text block rendered by the chat surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCard {
    pub response_type: String,
    pub text: String,
}

impl TextCard {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            response_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Webhook response envelope
///
/// Serialized untagged so each variant produces exactly the shape its chat
/// platform expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatEnvelope {
    Generic { generic: Vec<TextCard> },
    Webhook { webhook_result_1: String },
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub variant: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_envelope_shape() {
        let envelope = ChatEnvelope::Generic {
            generic: vec![TextCard::text("hello")],
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"generic": [{"response_type": "text", "text": "hello"}]})
        );
    }

    #[test]
    fn test_webhook_envelope_shape() {
        let envelope = ChatEnvelope::Webhook {
            webhook_result_1: "hi".to_string(),
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, serde_json::json!({"webhook_result_1": "hi"}));
    }
}
