use std::sync::LazyLock;

use regex::Regex;

use super::types::{ContentType, WifiCredentials, WifiSecurity};

// Classifier
//------------------------------------------------------------------------------

/// Prefix rules checked in order; first hit wins. Anything that matches no
/// rule is plain text.
pub static CLASSIFY_RULES: [(&str, ContentType); 9] = [
    ("http://", ContentType::Url),
    ("https://", ContentType::Url),
    ("mailto:", ContentType::Email),
    ("tel:", ContentType::Phone),
    ("sms:", ContentType::Sms),
    ("WIFI:", ContentType::Wifi),
    ("BEGIN:VCARD", ContentType::Contact),
    ("BEGIN:VCALENDAR", ContentType::Event),
    ("geo:", ContentType::Location),
];

/// Infers the content type of scanned text from its leading characters.
/// Matching is case sensitive and total; unrecognized input is `Text`.
pub fn classify(text: &str) -> ContentType {
    CLASSIFY_RULES
        .iter()
        .find(|(prefix, _)| text.starts_with(prefix))
        .map_or(ContentType::Text, |&(_, kind)| kind)
}


// WiFi decoder
//------------------------------------------------------------------------------

// Segment groups are [^;]*, so a `:` inside ssid or password is captured.
// The pattern is unanchored to mirror lenient scanner behavior.
static WIFI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"WIFI:T:([^;]*);S:([^;]*);P:([^;]*);(H:([^;]*))?").expect("Invalid wifi pattern")
});

/// Parses WiFi credentials out of scanned text. Returns `None` when the
/// shape doesn't match or the security label is unknown. An empty security
/// segment reads as an open network; `hidden` is true only for a literal
/// `H:true` segment.
pub fn decode_wifi(text: &str) -> Option<WifiCredentials> {
    let caps = WIFI_PATTERN.captures(text)?;
    let security = WifiSecurity::from_label(caps.get(1).map_or("", |m| m.as_str()))?;
    let ssid = caps.get(2).map_or("", |m| m.as_str()).to_string();
    let password = caps.get(3).map_or("", |m| m.as_str()).to_string();
    let hidden = caps.get(5).is_some_and(|m| m.as_str() == "true");
    Some(WifiCredentials { ssid, password, security, hidden })
}

#[cfg(test)]
mod wifi_decode_tests {
    use test_case::test_case;

    use super::super::encoder::encode_wifi;
    use super::super::types::{WifiCredentials, WifiSecurity};
    use super::decode_wifi;

    #[test]
    fn test_visible_network() {
        let creds = decode_wifi("WIFI:T:WPA;S:HomeNet;P:hunter2;;").unwrap();
        let exp = WifiCredentials {
            ssid: "HomeNet".to_string(),
            password: "hunter2".to_string(),
            security: WifiSecurity::Wpa,
            hidden: false,
        };
        assert_eq!(creds, exp);
    }

    #[test]
    fn test_hidden_network() {
        let creds = decode_wifi("WIFI:T:WEP;S:Lair;P:s3cret;H:true;").unwrap();
        assert!(creds.hidden);
        assert_eq!(creds.security, WifiSecurity::Wep);
    }

    #[test]
    fn test_empty_security_reads_as_open() {
        let creds = decode_wifi("WIFI:T:;S:Cafe;P:;;").unwrap();
        assert_eq!(creds.security, WifiSecurity::Nopass);
        assert!(creds.password.is_empty());
    }

    #[test]
    fn test_colon_in_password_is_captured() {
        let creds = decode_wifi("WIFI:T:WPA;S:Net;P:pa:ss;;").unwrap();
        assert_eq!(creds.password, "pa:ss");
    }

    #[test_case("WIFI:T:WPA2;S:Net;P:pw;;"; "unknown security label")]
    #[test_case("WIFI:T:WPA;S:Net;;"; "missing password segment")]
    #[test_case("WIFI:S:Net;P:pw;;"; "missing security segment")]
    #[test_case("notawifipayload"; "no match at all")]
    #[test_case(""; "empty input")]
    fn test_malformed_returns_none(text: &str) {
        assert_eq!(decode_wifi(text), None);
    }

    #[test]
    fn test_hidden_segment_must_be_literal_true() {
        let creds = decode_wifi("WIFI:T:WPA;S:Net;P:pw;H:maybe;").unwrap();
        assert!(!creds.hidden);
    }

    #[test]
    fn test_embedded_payload_still_parses() {
        // Unanchored match tolerates leading garbage from sloppy scanners
        let creds = decode_wifi("scan:WIFI:T:WPA;S:Net;P:pw;;").unwrap();
        assert_eq!(creds.ssid, "Net");
    }

    #[test]
    fn test_round_trip() {
        let creds = WifiCredentials {
            ssid: "Attic".to_string(),
            password: "correct horse".to_string(),
            security: WifiSecurity::Wpa,
            hidden: true,
        };
        assert_eq!(decode_wifi(&encode_wifi(&creds)), Some(creds));
    }
}
