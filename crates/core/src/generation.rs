//! Direct QR code generation: encode, optionally embed a logo, emit PNG.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat, Rgb};

use crate::color::parse_color;
use crate::encoder;
use crate::error::CoreError;
use crate::logo::{embed_logo, LogoLoader};
use crate::qr::{ErrorCorrectionLevel, GenerationRequest, GenerationResponse};

/// Produces real QR code images for [`GenerationRequest`]s.
pub struct QrGenerator {
    logo_loader: LogoLoader,
}

impl QrGenerator {
    pub fn new(logo_loader: LogoLoader) -> Self {
        Self { logo_loader }
    }

    /// Generate a QR code, echoing every request field into the response.
    ///
    /// Level and color are checked before any logo I/O happens. Rendering
    /// runs on the blocking pool.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, CoreError> {
        let level: ErrorCorrectionLevel = request.error_correction_level.parse()?;
        let foreground = parse_color(&request.color)?;

        // An empty reference counts as no logo.
        let logo = match request.logo.as_deref().filter(|r| !r.is_empty()) {
            Some(reference) => Some(self.logo_loader.load(reference).await?),
            None => None,
        };

        let has_logo = logo.is_some();
        let data = request.data.clone();
        let size = request.size;
        let png = tokio::task::spawn_blocking(move || {
            render_png(&data, level, size, foreground, logo.as_ref())
        })
        .await
        .map_err(|e| CoreError::Internal(format!("QR render task failed: {e}")))??;

        tracing::debug!(
            size = request.size,
            level = %level,
            has_logo,
            png_bytes = png.len(),
            "Generated QR code"
        );

        Ok(GenerationResponse {
            qr_code: STANDARD.encode(&png),
            data: request.data,
            size: request.size,
            color: request.color,
            error_correction_level: request.error_correction_level,
            logo: request.logo,
            format: None,
        })
    }
}

/// Encode, composite, and serialize to PNG bytes.
pub fn render_png(
    data: &str,
    level: ErrorCorrectionLevel,
    size: u32,
    foreground: Rgb<u8>,
    logo: Option<&DynamicImage>,
) -> Result<Vec<u8>, CoreError> {
    let mut image = encoder::encode(data, level, size, foreground)?;
    if let Some(logo) = logo {
        image = embed_logo(image, logo, size);
    }

    let mut png = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| CoreError::ImageEncoding(e.to_string()))?;
    Ok(png)
}
