use std::fmt::{Display, Error, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Content type
//------------------------------------------------------------------------------

/// Semantic type of a QR payload. Doubles as the classification inferred
/// from scanned text.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Url,
    Email,
    Phone,
    Sms,
    Wifi,
    Contact,
    Event,
    Location,
}

impl ContentType {
    /// Human-readable label for lists and titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Url => "Website",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Sms => "SMS",
            Self::Wifi => "WiFi",
            Self::Contact => "Contact",
            Self::Event => "Event",
            Self::Location => "Location",
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let tag = match *self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Sms => "sms",
            Self::Wifi => "wifi",
            Self::Contact => "contact",
            Self::Event => "event",
            Self::Location => "location",
        };
        f.write_str(tag)
    }
}


// WiFi credentials
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum WifiSecurity {
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    Nopass,
}

impl WifiSecurity {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::Nopass => "nopass",
        }
    }

    /// Maps a `T:` segment value back to a security level. An empty value is
    /// treated as an open network; unknown labels are unrepresentable.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "WPA" => Some(Self::Wpa),
            "WEP" => Some(Self::Wep),
            "nopass" | "" => Some(Self::Nopass),
            _ => None,
        }
    }
}

impl Display for WifiSecurity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.as_label())
    }
}

/// Credentials for a WiFi network payload. The wire format has no escaping
/// mechanism, so `ssid` and `password` must not contain the structural
/// delimiters `;` and `:`. A stray `:` happens to survive a round trip, a
/// `;` does not; neither is supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
    pub security: WifiSecurity,
    #[serde(default)]
    pub hidden: bool,
}

#[cfg(test)]
mod wifi_security_tests {
    use test_case::test_case;

    use super::WifiSecurity;

    #[test_case("WPA", Some(WifiSecurity::Wpa))]
    #[test_case("WEP", Some(WifiSecurity::Wep))]
    #[test_case("nopass", Some(WifiSecurity::Nopass))]
    #[test_case("", Some(WifiSecurity::Nopass))]
    #[test_case("WPA2", None)]
    #[test_case("wpa", None)]
    fn test_from_label(label: &str, exp: Option<WifiSecurity>) {
        assert_eq!(WifiSecurity::from_label(label), exp);
    }

    #[test]
    fn test_labels_round_trip() {
        for sec in [WifiSecurity::Wpa, WifiSecurity::Wep, WifiSecurity::Nopass] {
            assert_eq!(WifiSecurity::from_label(sec.as_label()), Some(sec));
        }
    }
}

// Contact card
//------------------------------------------------------------------------------

/// Fields of a minimal vCard 3.0 block. Only the name is mandatory; absent
/// optional fields are omitted from the payload entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
}

impl ContactCard {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            organization: None,
            phone: None,
            email: None,
            website: None,
            address: None,
        }
    }
}

// Calendar event
//------------------------------------------------------------------------------

/// Fields of a minimal iCalendar VEVENT block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end: Option<DateTime<Utc>>,
    /// Carried on the record but never alters DTSTART/DTEND; times are
    /// always rendered with a time component.
    #[serde(default)]
    pub all_day: bool,
}

impl CalendarEvent {
    pub fn new(title: &str, start: DateTime<Utc>) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            location: None,
            start,
            end: None,
            all_day: false,
        }
    }
}

// Geo location
//------------------------------------------------------------------------------

/// Coordinates for a `geo:` URI. No range validation is performed; the
/// caller owns coordinate sanity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub query: Option<String>,
}

// Content union
//------------------------------------------------------------------------------

/// Typed content a QR payload is built from. Encoding dispatches over this
/// union exhaustively, so adding a variant is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum QRContent {
    Text(String),
    Url(String),
    Email(String),
    Phone(String),
    Sms(String),
    Wifi(WifiCredentials),
    Contact(ContactCard),
    Event(CalendarEvent),
    Location(GeoLocation),
}

impl QRContent {
    pub fn kind(&self) -> ContentType {
        match self {
            Self::Text(_) => ContentType::Text,
            Self::Url(_) => ContentType::Url,
            Self::Email(_) => ContentType::Email,
            Self::Phone(_) => ContentType::Phone,
            Self::Sms(_) => ContentType::Sms,
            Self::Wifi(_) => ContentType::Wifi,
            Self::Contact(_) => ContentType::Contact,
            Self::Event(_) => ContentType::Event,
            Self::Location(_) => ContentType::Location,
        }
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static CONTENT_TYPES: [ContentType; 9] = [
    ContentType::Text,
    ContentType::Url,
    ContentType::Email,
    ContentType::Phone,
    ContentType::Sms,
    ContentType::Wifi,
    ContentType::Contact,
    ContentType::Event,
    ContentType::Location,
];
