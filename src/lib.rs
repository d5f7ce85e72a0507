//! # qrpayload
//!
//! A Rust library for composing and parsing the text payloads carried by QR codes.
//! Covers the common real-world payload shapes together with scan classification
//! and a small persisted generate/scan history.
//!
//! ## Features
//!
//! - **Payload Encoding**: Render typed content (links, WiFi credentials, vCard
//!   contacts, calendar events, geo locations) as QR-ready text
//! - **Scan Classification**: Infer the content type of scanned text from its
//!   leading characters and parse WiFi payloads back into credentials
//! - **Input Validation**: Advisory validators for emails, URLs, phone numbers
//!   and hex colors
//! - **Builder Workflow**: Assemble generated-QR records with styling options
//!   and suggested export filenames
//! - **History**: Persist generated and scanned records through a pluggable
//!   key-value store, capped and newest first
//!
//! ## Quick Start
//!
//! ### Composing a payload
//!
//! ```rust
//! use qrpayload::{QRBuilder, QRContent, WifiCredentials, WifiSecurity};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = WifiCredentials {
//!     ssid: "HomeNet".to_string(),
//!     password: "hunter2".to_string(),
//!     security: WifiSecurity::Wpa,
//!     hidden: false,
//! };
//! let qr = QRBuilder::new(QRContent::Wifi(creds))
//!     .title("Guest WiFi")
//!     .build()?;
//!
//! assert_eq!(qr.payload, "WIFI:T:WPA;S:HomeNet;P:hunter2;;");
//! # Ok(())
//! # }
//! ```
//!
//! ### Classifying a scan
//!
//! ```rust
//! use qrpayload::{classify, decode_wifi, ContentType};
//!
//! let text = "WIFI:T:WPA;S:HomeNet;P:hunter2;;";
//! assert_eq!(classify(text), ContentType::Wifi);
//!
//! let creds = decode_wifi(text).unwrap();
//! assert_eq!(creds.ssid, "HomeNet");
//! ```
//!
//! ### Keeping history
//!
//! ```rust
//! use qrpayload::{HistoryStore, MemoryStore, QRBuilder, QRContent, ScanRecord};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut history = HistoryStore::new(MemoryStore::new());
//!
//! let qr = QRBuilder::new(QRContent::Url("example.com".to_string())).build()?;
//! history.record_generated(&qr)?;
//! history.record_scanned(&ScanRecord::capture("geo:51.5,-0.12"))?;
//!
//! assert_eq!(history.timeline()?.len(), 2);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
pub mod history;
pub mod reader;

pub use builder::{export_filename, ECLevel, GeneratedQR, Gradient, QRBuilder, QRStyle};
pub use common::codec::{
    classify, decode_wifi, encode_contact, encode_event, encode_location, encode_wifi,
    normalize_content, CalendarEvent, ContactCard, ContentType, GeoLocation, QRContent,
    WifiCredentials, WifiSecurity, CLASSIFY_RULES, CONTENT_TYPES,
};
pub use common::error::{QRError, QRResult};
pub use common::id::generate_id;
pub use common::validate::{is_valid_email, is_valid_hex_color, is_valid_phone, is_valid_url};
pub use history::*;
pub use reader::*;
