mod style;

pub use style::{ECLevel, Gradient, QRStyle};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::{
    codec::{ContentType, QRContent},
    error::{QRError, QRResult},
    id::generate_id,
    validate::is_valid_hex_color,
};

// Generated record
//------------------------------------------------------------------------------

/// A payload the user generated, ready for rendering and history storage.
/// Serialized field names match the JSON the mobile app has always written,
/// so stored records survive a backend swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQR {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(rename = "content")]
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(rename = "customization")]
    pub style: QRStyle,
    pub created_at: DateTime<Utc>,
}

// Builder
//------------------------------------------------------------------------------

pub struct QRBuilder {
    content: QRContent,
    title: Option<String>,
    style: QRStyle,
}

impl QRBuilder {
    pub fn new(content: QRContent) -> Self {
        Self { content, title: None, style: QRStyle::default() }
    }

    pub fn content(&mut self, content: QRContent) -> &mut Self {
        self.content = content;
        self
    }

    pub fn title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn style(&mut self, style: QRStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn metadata(&self) -> String {
        format!("{{ Type: {}, Ec level: {:?} }}", self.content.kind(), self.style.ec_level)
    }
}

#[cfg(test)]
mod qrbuilder_util_tests {
    use super::{QRBuilder, QRStyle};
    use crate::common::codec::QRContent;

    #[test]
    fn test_metadata() {
        let mut builder = QRBuilder::new(QRContent::Text("hi".to_string()));
        assert_eq!(builder.metadata(), "{ Type: text, Ec level: M }");
        let mut style = QRStyle::default();
        style.ec_level = super::ECLevel::H;
        builder.style(style).content(QRContent::Url("example.com".to_string()));
        assert_eq!(builder.metadata(), "{ Type: url, Ec level: H }");
    }
}

impl QRBuilder {
    /// Validates the inputs and mints a stamped record carrying the encoded
    /// payload. Free-text kinds reject blank content; structured kinds
    /// always encode.
    pub fn build(&self) -> QRResult<GeneratedQR> {
        debug!("Generating QR {}", self.metadata());

        if let QRContent::Text(raw)
        | QRContent::Url(raw)
        | QRContent::Email(raw)
        | QRContent::Phone(raw)
        | QRContent::Sms(raw) = &self.content
        {
            if raw.trim().is_empty() {
                return Err(QRError::EmptyContent);
            }
        }

        let gradient_colors = self.style.gradient_colors.iter().flat_map(|(a, b)| [a, b]);
        for color in [&self.style.background, &self.style.foreground]
            .into_iter()
            .chain(gradient_colors)
        {
            if !is_valid_hex_color(color) {
                return Err(QRError::InvalidColor(color.clone()));
            }
        }

        Ok(GeneratedQR {
            id: generate_id(),
            kind: self.content.kind(),
            payload: self.content.to_payload(),
            title: self.title.clone(),
            style: self.style.clone(),
            created_at: Utc::now(),
        })
    }
}

// Export filename
//------------------------------------------------------------------------------

/// Suggested filename for a saved symbol image, e.g.
/// `QR_url_2024-01-02_03-04-05.png`. The timestamp renders in UTC.
pub fn export_filename(kind: ContentType, at: DateTime<Utc>) -> String {
    format!("QR_{}_{}.png", kind, at.format("%Y-%m-%d_%H-%M-%S"))
}
