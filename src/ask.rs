/// Wire types for the agent's /ask endpoint
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PopupError;

/// Shown when the agent answers without any text
pub const NO_RESPONSE: &str = "No response.";

/// Question about a single video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskRequest {
    pub video_id: String,
    pub question: String,
}

impl AskRequest {
    pub fn new(video_id: impl Into<String>, question: impl Into<String>) -> AskRequest {
        AskRequest {
            video_id: video_id.into(),
            question: question.into(),
        }
    }
}

/// Agent reply; every field is optional on the wire and `answer` is kept
/// untyped until it is read
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<Value>,
}

impl AskResponse {
    /// The answer text
    ///
    /// A falsy answer (missing, null, false, 0, "") reads as `No response.`.
    /// Any other non-string answer is an error.
    pub fn answer_text(self) -> Result<String, PopupError> {
        match self.answer {
            Some(Value::String(text)) if !text.is_empty() => Ok(text),
            Some(value) if is_truthy(&value) => {
                Err(PopupError::UnexpectedAnswer(value.to_string()))
            }
            _ => Ok(NO_RESPONSE.to_string()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> AskResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_request_wire_shape() {
        let request = AskRequest::new("ABC123", "What is this about?");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "video_id": "ABC123", "question": "What is this about?" })
        );
    }

    #[test]
    fn test_response_with_answer() {
        assert_eq!(parse(r#"{"answer":"**Hi**"}"#).answer_text().unwrap(), "**Hi**");
    }

    #[test]
    fn test_response_missing_answer() {
        assert_eq!(parse("{}").answer_text().unwrap(), NO_RESPONSE);
    }

    #[test]
    fn test_response_falsy_answer() {
        for body in [
            r#"{"answer":null}"#,
            r#"{"answer":""}"#,
            r#"{"answer":false}"#,
            r#"{"answer":0}"#,
            r#"{"answer":0.0}"#,
        ] {
            assert_eq!(parse(body).answer_text().unwrap(), NO_RESPONSE, "{}", body);
        }
    }

    #[test]
    fn test_response_truthy_non_string_answer() {
        for body in [
            r#"{"answer":true}"#,
            r#"{"answer":42}"#,
            r#"{"answer":["a"]}"#,
            r#"{"answer":{}}"#,
        ] {
            assert!(
                matches!(parse(body).answer_text(), Err(PopupError::UnexpectedAnswer(_))),
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        assert_eq!(
            parse(r#"{"answer":"ok","sources":[1,2]}"#).answer_text().unwrap(),
            "ok"
        );
    }

    #[test]
    fn test_response_rejects_non_object() {
        assert!(serde_json::from_str::<AskResponse>("null").is_err());
        assert!(serde_json::from_str::<AskResponse>("Internal Server Error").is_err());
    }
}
