//! Notification Formatting
//!
//! Turns a decoded [`Notification`] into what a toast card displays.

use chrono::{DateTime, NaiveDateTime};

use crate::models::Notification;

const LONG_FORMAT: &str = "%B %-d, %Y at %-I:%M:%S %p";

fn parse_sending_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Long en-US form, e.g. `June 20, 2023 at 2:03:05 PM`.
/// Unparseable values are shown as sent.
pub fn format_sending_time(raw: &str) -> String {
    match parse_sending_time(raw) {
        Some(dt) => dt.format(LONG_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Display text of one toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastCard {
    pub title: String,
    pub time: String,
    pub body: String,
}

impl From<&Notification> for ToastCard {
    fn from(n: &Notification) -> Self {
        Self {
            title: format!("Message from {}", n.sender),
            time: format_sending_time(&n.sending_time),
            body: n.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time() {
        assert_eq!(format_sending_time("2023-06-20T14:03:05"), "June 20, 2023 at 2:03:05 PM");
        assert_eq!(
            format_sending_time("2023-06-20T09:03:05.123456789"),
            "June 20, 2023 at 9:03:05 AM"
        );
        assert_eq!(format_sending_time("2023-01-02T00:15"), "January 2, 2023 at 12:15:00 AM");
    }

    #[test]
    fn test_rfc3339_keeps_sender_clock() {
        assert_eq!(
            format_sending_time("2023-06-20T14:03:05+03:00"),
            "June 20, 2023 at 2:03:05 PM"
        );
    }

    #[test]
    fn test_unparseable_passthrough() {
        assert_eq!(format_sending_time("yesterday"), "yesterday");
    }

    #[test]
    fn test_card_text() {
        let n = Notification {
            message: "Store closed".into(),
            sending_time: "2023-06-20T14:03:05".into(),
            sender: "admin".into(),
        };
        let card = ToastCard::from(&n);
        assert_eq!(card.title, "Message from admin");
        assert_eq!(card.time, "June 20, 2023 at 2:03:05 PM");
        assert_eq!(card.body, "Store closed");
    }
}
