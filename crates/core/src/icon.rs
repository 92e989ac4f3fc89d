//! Candidate icon metadata produced by an icon finder.

use serde::{Deserialize, Serialize};

/// Image format of a candidate icon.
///
/// Declaration order is the tie-break order used when picking a best icon:
/// `ico` first, other raster formats next, `png` after those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IconFormat {
    Ico,
    Gif,
    Jpg,
    Png,
    Svg,
    #[serde(other)]
    Other,
}

impl IconFormat {
    /// Map a format tag or file extension to a format.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "ico" | "x-icon" | "vnd.microsoft.icon" => IconFormat::Ico,
            "gif" => IconFormat::Gif,
            "jpg" | "jpeg" => IconFormat::Jpg,
            "png" => IconFormat::Png,
            "svg" | "svg+xml" => IconFormat::Svg,
            _ => IconFormat::Other,
        }
    }
}

/// A discovered candidate icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct IconDescriptor {
    /// Absolute URL of the icon resource.
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Size of the icon resource in bytes.
    pub bytes: u64,
    pub format: IconFormat,
}
