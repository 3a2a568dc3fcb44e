//! Single-item submission endpoint logic.
//!
//! This path is a placeholder: it resolves defaults and echoes the request
//! back with a fixed `qr_code` value. No symbol is encoded and no field is
//! validated.

use crate::qr::{GenerationResponse, QrFormat};

/// Value returned in `qr_code` by every submission.
pub const PLACEHOLDER_QR_CODE: &str = "base64-encoded-image-string-goes-here";

/// Defaults applied to omitted submission fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDefaults {
    pub size: u32,
    pub color: String,
    pub error_correction_level: String,
    pub format: QrFormat,
}

impl Default for SubmissionDefaults {
    fn default() -> Self {
        Self {
            size: 200,
            color: "#000000".to_string(),
            error_correction_level: "M".to_string(),
            format: QrFormat::Svg,
        }
    }
}

/// A submission as received; every field but `data` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub data: String,
    pub size: Option<u32>,
    pub color: Option<String>,
    pub error_correction_level: Option<String>,
    pub format: Option<String>,
}

/// Resolve defaults and build the placeholder response.
pub fn submit_data_for_qr(
    request: SubmissionRequest,
    defaults: &SubmissionDefaults,
) -> GenerationResponse {
    GenerationResponse {
        qr_code: PLACEHOLDER_QR_CODE.to_string(),
        data: request.data,
        size: request.size.unwrap_or(defaults.size),
        color: request.color.unwrap_or_else(|| defaults.color.clone()),
        error_correction_level: request
            .error_correction_level
            .unwrap_or_else(|| defaults.error_correction_level.clone()),
        logo: None,
        format: Some(
            request
                .format
                .unwrap_or_else(|| defaults.format.as_str().to_string()),
        ),
    }
}
