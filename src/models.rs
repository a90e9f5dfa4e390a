//! Frontend Models
//!
//! Data structures matching server payloads.

use serde::{Deserialize, Serialize};

/// One push notification, as sent over the WebSocket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    /// ISO-8601 local date-time from the server
    pub sending_time: String,
    pub sender: String,
}

impl Notification {
    /// Decode one text frame
    pub fn from_frame(frame: &str) -> Result<Self, String> {
        serde_json::from_str(frame).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_frame() {
        let frame = r#"{"message":"Your offer was accepted","sendingTime":"2023-06-20T14:03:05.123","sender":"store 4"}"#;
        let n = Notification::from_frame(frame).unwrap();
        assert_eq!(n.message, "Your offer was accepted");
        assert_eq!(n.sending_time, "2023-06-20T14:03:05.123");
        assert_eq!(n.sender, "store 4");
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        assert!(Notification::from_frame(r#"{"message":"hi","sender":"x"}"#).is_err());
        assert!(Notification::from_frame("not json").is_err());
    }
}
