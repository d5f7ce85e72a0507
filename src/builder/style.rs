use serde::{Deserialize, Serialize};

// EC level
//------------------------------------------------------------------------------

/// Error correction level requested for the rendered symbol. Higher levels
/// survive more damage at the cost of payload capacity.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ECLevel {
    L,
    M,
    Q,
    H,
}

impl Default for ECLevel {
    fn default() -> Self {
        Self::M
    }
}

// Gradient
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gradient {
    None,
    Linear,
    Radial,
}

impl Default for Gradient {
    fn default() -> Self {
        Self::None
    }
}

// Style
//------------------------------------------------------------------------------

/// Rendering options attached to a generated QR record. The codec never
/// reads these; they exist so a renderer downstream can reproduce the
/// symbol the user configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QRStyle {
    pub size: u32,
    #[serde(rename = "backgroundColor")]
    pub background: String,
    #[serde(rename = "foregroundColor")]
    pub foreground: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub border_radius: u32,
    #[serde(rename = "gradientType", default)]
    pub gradient: Gradient,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gradient_colors: Option<(String, String)>,
    #[serde(rename = "errorCorrectionLevel", default)]
    pub ec_level: ECLevel,
}

impl Default for QRStyle {
    fn default() -> Self {
        Self {
            size: 200,
            background: "#FFFFFF".to_string(),
            foreground: "#000000".to_string(),
            logo: None,
            border_radius: 0,
            gradient: Gradient::None,
            gradient_colors: None,
            ec_level: ECLevel::M,
        }
    }
}
