//! Request and response shapes shared by the generation, submission, and
//! batch intake services.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::BatchId;

/// Confirmation message returned for every accepted batch.
pub const BATCH_QUEUED_MESSAGE: &str = "Your batch request has been queued for processing.";

/* --------------------------------------------------------------------------
Enums
-------------------------------------------------------------------------- */

/// QR error-correction tier, trading capacity for damage resilience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    /// ~7% of codewords recoverable.
    L,
    /// ~15% of codewords recoverable.
    M,
    /// ~25% of codewords recoverable.
    Q,
    /// ~30% of codewords recoverable.
    H,
}

impl ErrorCorrectionLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::L => 'L',
            Self::M => 'M',
            Self::Q => 'Q',
            Self::H => 'H',
        }
    }
}

impl FromStr for ErrorCorrectionLevel {
    type Err = CoreError;

    /// Only the exact upper-case letters are recognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            other => Err(CoreError::InvalidErrorCorrectionLevel(other.to_string())),
        }
    }
}

impl fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested output image format for a QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QrFormat {
    Png,
    Svg,
}

impl QrFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Svg => "SVG",
        }
    }
}

impl FromStr for QrFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PNG" => Ok(Self::Png),
            "SVG" => Ok(Self::Svg),
            other => Err(CoreError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for QrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* --------------------------------------------------------------------------
Direct generation
-------------------------------------------------------------------------- */

/// Input for a direct QR generation. Every field is echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub data: String,
    /// Requested size in pixels. Drives module size and logo size.
    pub size: u32,
    /// Foreground color, usually `#rrggbb`.
    pub color: String,
    /// Raw level letter; validated during generation.
    pub error_correction_level: String,
    /// File path or http(s) URL of an image to paste at the center.
    pub logo: Option<String>,
}

/// Generated (or placeholder) QR code plus an echo of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Base64 PNG for real generations; a fixed placeholder for mock submissions.
    pub qr_code: String,
    pub data: String,
    pub size: u32,
    pub color: String,
    #[serde(rename = "errorCorrectionLevel")]
    pub error_correction_level: String,
    pub logo: Option<String>,
    /// Only set by mock submissions, echoed as received or defaulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/* --------------------------------------------------------------------------
Batch intake
-------------------------------------------------------------------------- */

/// One element of a batch submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCodeRequest {
    pub data: String,
    pub size: i32,
    pub color: String,
    pub error_correction_level: ErrorCorrectionLevel,
    pub format: QrFormat,
}

/// Returned once a batch and all of its items have been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSubmitResponse {
    pub batch_id: BatchId,
    pub message: String,
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_levels_parse() {
        for (raw, level) in [
            ("L", ErrorCorrectionLevel::L),
            ("M", ErrorCorrectionLevel::M),
            ("Q", ErrorCorrectionLevel::Q),
            ("H", ErrorCorrectionLevel::H),
        ] {
            assert_eq!(raw.parse::<ErrorCorrectionLevel>().unwrap(), level);
            assert_eq!(level.as_str(), raw);
        }
    }

    #[test]
    fn lowercase_level_rejected() {
        assert_matches!(
            "m".parse::<ErrorCorrectionLevel>(),
            Err(CoreError::InvalidErrorCorrectionLevel(raw)) if raw == "m"
        );
    }

    #[test]
    fn unknown_format_rejected() {
        assert_matches!("JPEG".parse::<QrFormat>(), Err(CoreError::InvalidFormat(_)));
        assert_eq!("SVG".parse::<QrFormat>().unwrap(), QrFormat::Svg);
    }

    #[test]
    fn response_uses_camel_case_level_key() {
        let response = GenerationResponse {
            qr_code: "abc".into(),
            data: "hello".into(),
            size: 300,
            color: "#000000".into(),
            error_correction_level: "Q".into(),
            logo: None,
            format: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errorCorrectionLevel"], "Q");
        assert!(json["logo"].is_null());
        assert!(json.get("format").is_none());
    }

    #[test]
    fn batch_item_deserializes_enum_letters() {
        let item: QrCodeRequest = serde_json::from_str(
            r##"{"data":"x","size":100,"color":"#fff","error_correction_level":"H","format":"PNG"}"##,
        )
        .unwrap();
        assert_eq!(item.error_correction_level, ErrorCorrectionLevel::H);
        assert_eq!(item.format, QrFormat::Png);
    }
}
