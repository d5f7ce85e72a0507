use chrono::{DateTime, Utc};

use super::types::{
    CalendarEvent, ContactCard, ContentType, GeoLocation, QRContent, WifiCredentials,
};

// Encoder
//------------------------------------------------------------------------------

impl QRContent {
    /// Renders the content as the text a QR symbol would carry.
    pub fn to_payload(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Url(raw) => normalize_content(ContentType::Url, raw),
            Self::Email(raw) => normalize_content(ContentType::Email, raw),
            Self::Phone(raw) => normalize_content(ContentType::Phone, raw),
            Self::Sms(raw) => normalize_content(ContentType::Sms, raw),
            Self::Wifi(creds) => encode_wifi(creds),
            Self::Contact(card) => encode_contact(card),
            Self::Event(event) => encode_event(event),
            Self::Location(loc) => encode_location(loc),
        }
    }
}

/// Prefixes scheme-carried types with their scheme unless one is already
/// present. Prefix checks are case sensitive and nothing is re-prefixed, so
/// normalizing twice equals normalizing once.
pub fn normalize_content(kind: ContentType, raw: &str) -> String {
    match kind {
        ContentType::Url if !raw.starts_with("http://") && !raw.starts_with("https://") => {
            format!("https://{raw}")
        }
        ContentType::Email if !raw.starts_with("mailto:") => format!("mailto:{raw}"),
        ContentType::Phone if !raw.starts_with("tel:") => format!("tel:{raw}"),
        ContentType::Sms if !raw.starts_with("sms:") => format!("sms:{raw}"),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod normalize_tests {
    use test_case::test_case;

    use super::normalize_content;
    use super::ContentType::*;

    #[test_case(Url, "example.com", "https://example.com")]
    #[test_case(Url, "https://example.com", "https://example.com")]
    #[test_case(Url, "http://example.com", "http://example.com")]
    #[test_case(Email, "a@b.co", "mailto:a@b.co")]
    #[test_case(Email, "mailto:a@b.co", "mailto:a@b.co")]
    #[test_case(Email, "MAILTO:a@b.co", "mailto:MAILTO:a@b.co"; "prefix check is case sensitive")]
    #[test_case(Phone, "+15551234", "tel:+15551234")]
    #[test_case(Phone, "tel:+15551234", "tel:+15551234")]
    #[test_case(Sms, "+15551234", "sms:+15551234")]
    #[test_case(Sms, "sms:+15551234", "sms:+15551234")]
    #[test_case(Text, "anything", "anything")]
    #[test_case(Url, "", "https://")]
    fn test_normalize(kind: super::ContentType, raw: &str, exp: &str) {
        assert_eq!(normalize_content(kind, raw), exp);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for kind in [Url, Email, Phone, Sms, Text] {
            let once = normalize_content(kind, "payload");
            assert_eq!(normalize_content(kind, &once), once);
        }
    }
}

// WiFi payload
//------------------------------------------------------------------------------

/// Renders `WIFI:T:<security>;S:<ssid>;P:<password>;<H:true|>;`. Hidden
/// networks carry an `H:true` segment; visible ones leave it empty, ending
/// the payload in `;;`. Field values are emitted verbatim.
pub fn encode_wifi(creds: &WifiCredentials) -> String {
    let hidden = if creds.hidden { "H:true" } else { "" };
    format!("WIFI:T:{};S:{};P:{};{};", creds.security, creds.ssid, creds.password, hidden)
}

#[cfg(test)]
mod wifi_encode_tests {
    use super::super::types::{WifiCredentials, WifiSecurity};
    use super::encode_wifi;

    #[test]
    fn test_visible_network() {
        let creds = WifiCredentials {
            ssid: "HomeNet".to_string(),
            password: "hunter2".to_string(),
            security: WifiSecurity::Wpa,
            hidden: false,
        };
        assert_eq!(encode_wifi(&creds), "WIFI:T:WPA;S:HomeNet;P:hunter2;;");
    }

    #[test]
    fn test_hidden_network() {
        let creds = WifiCredentials {
            ssid: "Lair".to_string(),
            password: "s3cret".to_string(),
            security: WifiSecurity::Wep,
            hidden: true,
        };
        assert_eq!(encode_wifi(&creds), "WIFI:T:WEP;S:Lair;P:s3cret;H:true;");
    }

    #[test]
    fn test_open_network() {
        let creds = WifiCredentials {
            ssid: "Cafe".to_string(),
            password: String::new(),
            security: WifiSecurity::Nopass,
            hidden: false,
        };
        assert_eq!(encode_wifi(&creds), "WIFI:T:nopass;S:Cafe;P:;;");
    }
}

// vCard payload
//------------------------------------------------------------------------------

/// Renders a vCard 3.0 block with LF line endings and no trailing newline.
/// Line order is fixed: FN, then ORG/TEL/EMAIL/URL/ADR for whichever
/// optional fields are present.
pub fn encode_contact(card: &ContactCard) -> String {
    let mut vcard = String::from("BEGIN:VCARD\nVERSION:3.0\n");
    vcard.push_str(&format!("FN:{} {}\n", card.first_name, card.last_name));
    if let Some(org) = &card.organization {
        vcard.push_str(&format!("ORG:{org}\n"));
    }
    if let Some(phone) = &card.phone {
        vcard.push_str(&format!("TEL:{phone}\n"));
    }
    if let Some(email) = &card.email {
        vcard.push_str(&format!("EMAIL:{email}\n"));
    }
    if let Some(website) = &card.website {
        vcard.push_str(&format!("URL:{website}\n"));
    }
    if let Some(address) = &card.address {
        vcard.push_str(&format!("ADR:;;{address};;;;\n"));
    }
    vcard.push_str("END:VCARD");
    vcard
}

#[cfg(test)]
mod contact_encode_tests {
    use super::super::types::ContactCard;
    use super::encode_contact;

    #[test]
    fn test_minimal_card() {
        let card = ContactCard::new("Ada", "Lovelace");
        assert_eq!(encode_contact(&card), "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nEND:VCARD");
    }

    #[test]
    fn test_full_card() {
        let mut card = ContactCard::new("Grace", "Hopper");
        card.organization = Some("Navy".to_string());
        card.phone = Some("+15551234".to_string());
        card.email = Some("grace@navy.mil".to_string());
        card.website = Some("https://navy.mil".to_string());
        card.address = Some("120 Main St".to_string());
        let exp = "BEGIN:VCARD\nVERSION:3.0\nFN:Grace Hopper\nORG:Navy\nTEL:+15551234\n\
                   EMAIL:grace@navy.mil\nURL:https://navy.mil\nADR:;;120 Main St;;;;\nEND:VCARD";
        assert_eq!(encode_contact(&card), exp);
    }

    #[test]
    fn test_skipped_fields_leave_no_blank_lines() {
        let mut card = ContactCard::new("Solo", "Act");
        card.email = Some("solo@act.io".to_string());
        let exp = "BEGIN:VCARD\nVERSION:3.0\nFN:Solo Act\nEMAIL:solo@act.io\nEND:VCARD";
        assert_eq!(encode_contact(&card), exp);
    }
}

// iCalendar payload
//------------------------------------------------------------------------------

/// Renders a single-event VCALENDAR block. Timestamps are compact UTC
/// (`YYYYMMDDTHHMMSSZ`); DESCRIPTION, LOCATION and DTEND appear only when
/// set.
pub fn encode_event(event: &CalendarEvent) -> String {
    let mut ical = String::from("BEGIN:VCALENDAR\nVERSION:2.0\nBEGIN:VEVENT\n");
    ical.push_str(&format!("SUMMARY:{}\n", event.title));
    if let Some(description) = &event.description {
        ical.push_str(&format!("DESCRIPTION:{description}\n"));
    }
    if let Some(location) = &event.location {
        ical.push_str(&format!("LOCATION:{location}\n"));
    }
    ical.push_str(&format!("DTSTART:{}\n", format_event_date(&event.start)));
    if let Some(end) = &event.end {
        ical.push_str(&format!("DTEND:{}\n", format_event_date(end)));
    }
    ical.push_str("END:VEVENT\nEND:VCALENDAR");
    ical
}

fn format_event_date(at: &DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}


// Geo payload
//------------------------------------------------------------------------------

/// Renders `geo:<lat>,<lon>` with an optional percent-encoded `?q=` label.
/// Coordinates use shortest-form float rendering, so integral values carry
/// no fractional part.
pub fn encode_location(loc: &GeoLocation) -> String {
    match &loc.query {
        Some(query) => {
            format!("geo:{},{}?q={}", loc.latitude, loc.longitude, urlencoding::encode(query))
        }
        None => format!("geo:{},{}", loc.latitude, loc.longitude),
    }
}


// Payload dispatch
//------------------------------------------------------------------------------
