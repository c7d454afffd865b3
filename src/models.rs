//! Data types for the send-intent plugin.

use serde::{Deserialize, Serialize};

/// Content carried by a single share intent.
///
/// A share may carry any subset of the four representations; the fields are
/// not mutually exclusive (a shared link often arrives as both `text` and
/// `url`). `None` means that representation was not shared at all and is kept
/// distinct from `Some("")` ("shared as an empty string") all the way across
/// the IPC boundary: absent fields serialize as `null`, never as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedPayload {
    /// Shared plain text.
    pub text: Option<String>,
    /// Shared URL.
    pub url: Option<String>,
    /// Reference (path or URI) to shared image data.
    pub image: Option<String>,
    /// Reference (path or URI) to a shared file.
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_serialize_as_null_not_empty_string() {
        let payload = SharedPayload {
            text: Some("hi".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["text"], "hi");
        assert_eq!(value["url"], serde_json::Value::Null);
        assert_eq!(value["image"], serde_json::Value::Null);
        assert_eq!(value["file"], serde_json::Value::Null);
    }

    #[test]
    fn empty_string_field_survives_round_trip_as_empty_string() {
        let payload = SharedPayload {
            text: Some(String::new()),
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: SharedPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back.text, Some(String::new()));
        assert_eq!(back.url, None);
    }
}
