use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::{
    codec::{classify, ContentType},
    id::generate_id,
};

// Scan record
//------------------------------------------------------------------------------

/// What the user did with a scan result.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanAction {
    Opened,
    Copied,
    Saved,
}

/// A decoded scan, classified and stamped for history storage. Serialized
/// field names match the JSON the mobile app has always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(rename = "content")]
    pub payload: String,
    pub scanned_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub action: Option<ScanAction>,
}

impl ScanRecord {
    /// Classifies raw scanned text and stamps it with a fresh id and scan
    /// time. The text is stored verbatim.
    pub fn capture(text: &str) -> Self {
        let kind = classify(text);
        debug!("Captured scan {{ Type: {kind} }}");
        Self {
            id: generate_id(),
            kind,
            payload: text.to_string(),
            scanned_at: Utc::now(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: ScanAction) -> Self {
        self.action = Some(action);
        self
    }
}

// Open routing
//------------------------------------------------------------------------------

/// Where scanned text should go when the user asks to act on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    /// Hand the text to the platform link opener.
    Link(String),
    /// Not openable; put the text on the clipboard instead.
    Clipboard(String),
}

static OPENABLE_SCHEMES: [&str; 5] = ["http://", "https://", "mailto:", "tel:", "sms:"];

/// Routes scanned text to the platform action that can handle it. Only
/// scheme prefixes the OS resolves natively open as links; everything else,
/// WiFi and vCard payloads included, falls back to the clipboard.
pub fn open_target(data: &str) -> OpenTarget {
    if OPENABLE_SCHEMES.iter().any(|scheme| data.starts_with(scheme)) {
        OpenTarget::Link(data.to_string())
    } else {
        OpenTarget::Clipboard(data.to_string())
    }
}

// Scanner availability
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerAvailability {
    Available,
    Unavailable { reason: String },
}

/// Host hook reporting whether a camera scanner can run. The library never
/// touches camera APIs itself; embedders implement this against their
/// platform.
pub trait ScannerProbe {
    fn probe(&self) -> ScannerAvailability;
}

#[cfg(test)]
mod reader_tests {
    use test_case::test_case;

    use super::{open_target, OpenTarget, ScanAction, ScanRecord};
    use crate::common::codec::ContentType;

    #[test_case("https://example.com", ContentType::Url)]
    #[test_case("WIFI:T:WPA;S:Net;P:pw;;", ContentType::Wifi)]
    #[test_case("BEGIN:VCARD\nVERSION:3.0\nFN:A B\nEND:VCARD", ContentType::Contact)]
    #[test_case("just some words", ContentType::Text)]
    fn test_capture_classifies(text: &str, exp: ContentType) {
        let record = ScanRecord::capture(text);
        assert_eq!(record.kind, exp);
        assert_eq!(record.payload, text);
        assert_eq!(record.action, None);
    }

    #[test]
    fn test_with_action() {
        let record = ScanRecord::capture("tel:+1555").with_action(ScanAction::Opened);
        assert_eq!(record.action, Some(ScanAction::Opened));
    }

    #[test_case("http://example.com", true)]
    #[test_case("https://example.com", true)]
    #[test_case("mailto:a@b.co", true)]
    #[test_case("tel:+1555", true)]
    #[test_case("sms:+1555", true)]
    #[test_case("geo:1.5,-2.5", false)]
    #[test_case("WIFI:T:WPA;S:Net;P:pw;;", false)]
    #[test_case("BEGIN:VCARD", false)]
    #[test_case("plain text", false)]
    fn test_open_target(data: &str, opens: bool) {
        let exp = if opens {
            OpenTarget::Link(data.to_string())
        } else {
            OpenTarget::Clipboard(data.to_string())
        };
        assert_eq!(open_target(data), exp);
    }

    #[test]
    fn test_scan_record_wire_names() {
        let record = ScanRecord::capture("hello").with_action(ScanAction::Copied);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"text\""));
        assert!(json.contains("\"content\":\"hello\""));
        assert!(json.contains("\"scannedAt\":"));
        assert!(json.contains("\"action\":\"copied\""));
    }
}
