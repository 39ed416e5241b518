//! Push payload carried in the body of a web push message.
//!
//! The backend sends a JSON object:
//!
//! ```json
//! {"title": "Heavy Rain Alert", "message": "Sensor 7 reported 112 mm."}
//! ```
//!
//! Extra keys are ignored. Both fields must be present and must be strings.

use serde::{Deserialize, Serialize};

use crate::error::PushError;

/// Data extracted from one push event. Lives only for that event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    /// Notification heading, shown verbatim.
    pub title: String,
    /// Notification body text, shown verbatim.
    pub message: String,
}

impl PushPayload {
    /// Parse the text of a push message.
    ///
    /// Empty text is rejected the same way as any other invalid JSON.
    pub fn from_text(text: &str) -> Result<Self, PushError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse the optional data of a push event.
    ///
    /// A push sent without a body carries no data at all.
    pub fn from_event_data(data: Option<&str>) -> Result<Self, PushError> {
        let text = data
            .ok_or_else(|| PushError::MalformedPayload("push event has no data".to_string()))?;
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_payload() {
        let payload =
            PushPayload::from_text(r#"{"title":"New message","message":"You have a new message"}"#)
                .unwrap();
        assert_eq!(payload.title, "New message");
        assert_eq!(payload.message, "You have a new message");
    }

    #[test]
    fn test_extra_keys_ignored() {
        let payload = PushPayload::from_text(
            r#"{"title":"Rain","message":"112 mm","url":"/dashboard","tag":"sensor-7"}"#,
        )
        .unwrap();
        assert_eq!(payload.title, "Rain");
        assert_eq!(payload.message, "112 mm");
    }

    #[test]
    fn test_unicode_kept_verbatim() {
        let payload =
            PushPayload::from_text(r#"{"title":"⛈ Severe Rain Alert","message":"Konkan: 152.3 mm"}"#)
                .unwrap();
        assert_eq!(payload.title, "⛈ Severe Rain Alert");
    }

    #[test]
    fn test_missing_fields_rejected() {
        for text in [r#"{"message":"body only"}"#, r#"{"title":"title only"}"#, "{}"] {
            let err = PushPayload::from_text(text).unwrap_err();
            assert!(
                matches!(err, PushError::MalformedPayload(_)),
                "expected MalformedPayload for {text}"
            );
        }
    }

    #[test]
    fn test_wrong_types_rejected() {
        for text in [
            r#"{"title":1,"message":"m"}"#,
            r#"{"title":"t","message":null}"#,
            r#"["t","m"]"#,
            r#""just a string""#,
        ] {
            assert!(PushPayload::from_text(text).is_err(), "accepted {text}");
        }
    }

    #[test]
    fn test_empty_and_garbage_rejected() {
        assert!(PushPayload::from_text("").is_err());
        assert!(PushPayload::from_text("   ").is_err());
        assert!(PushPayload::from_text("title=New message").is_err());
    }

    #[test]
    fn test_absent_data_rejected() {
        let err = PushPayload::from_event_data(None).unwrap_err();
        assert_eq!(
            err,
            PushError::MalformedPayload("push event has no data".to_string())
        );
    }

    #[test]
    fn test_backend_body_key_is_not_accepted() {
        // `body` is the notification option name, not the payload key.
        let err = PushPayload::from_text(r#"{"title":"Rain","body":"112 mm"}"#).unwrap_err();
        assert!(err.to_string().contains("message"));
    }
}
