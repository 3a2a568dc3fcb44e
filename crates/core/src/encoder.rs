//! QR symbol encoding and rasterization.
//!
//! Symbol construction (version fitting, masking, error correction) is
//! delegated to the `qrcode` crate. This module only maps the service's
//! sizing rules onto a pixel canvas:
//!
//! - module ("box") size is `size / 30`, clamped to at least 1 pixel;
//! - a quiet zone of [`BORDER_MODULES`] modules surrounds the symbol;
//! - dark modules use the requested color, everything else is white.

use image::{ImageBuffer, Rgb, RgbImage};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

use crate::color::BACKGROUND;
use crate::error::CoreError;
use crate::qr::ErrorCorrectionLevel;

/// Quiet-zone width in modules on every side of the symbol.
pub const BORDER_MODULES: u32 = 4;

/// Requested size is divided by this to get the module size in pixels.
pub const SIZE_TO_BOX_DIVISOR: u32 = 30;

/// Largest canvas side we are willing to allocate.
///
/// A version 40 symbol at `size = 10_000` is 61 605 px wide and still fits.
pub const MAX_CANVAS_DIMENSION: u64 = 65_535;

/// Pixel width of one module for a requested size.
pub fn box_size(size: u32) -> u32 {
    (size / SIZE_TO_BOX_DIVISOR).max(1)
}

fn ec_level(level: ErrorCorrectionLevel) -> EcLevel {
    match level {
        ErrorCorrectionLevel::L => EcLevel::L,
        ErrorCorrectionLevel::M => EcLevel::M,
        ErrorCorrectionLevel::Q => EcLevel::Q,
        ErrorCorrectionLevel::H => EcLevel::H,
    }
}

/// Build the module matrix, letting the encoder pick the smallest version
/// that fits.
pub fn encode_symbol(data: &str, level: ErrorCorrectionLevel) -> Result<QrCode, CoreError> {
    if data.is_empty() {
        return Err(CoreError::Validation(
            "QR data must not be empty".to_string(),
        ));
    }

    QrCode::with_error_correction_level(data.as_bytes(), ec_level(level)).map_err(|e| match e {
        QrError::DataTooLong => CoreError::DataTooLarge {
            level: level.as_char(),
        },
        other => CoreError::Encoding(other.to_string()),
    })
}

/// Rasterize a symbol onto a white RGB canvas.
pub fn render(code: &QrCode, box_size: u32, foreground: Rgb<u8>) -> Result<RgbImage, CoreError> {
    let modules = code.width() as u32;
    let side_modules = modules + 2 * BORDER_MODULES;
    let side = u64::from(side_modules) * u64::from(box_size);

    if side > MAX_CANVAS_DIMENSION {
        return Err(CoreError::Validation(format!(
            "Rendered QR code would be {side}px wide, exceeding the {MAX_CANVAS_DIMENSION}px limit"
        )));
    }

    let colors = code.to_colors();
    let side = side as u32;

    Ok(ImageBuffer::from_fn(side, side, |x, y| {
        let mx = x / box_size;
        let my = y / box_size;
        let in_symbol = (BORDER_MODULES..BORDER_MODULES + modules).contains(&mx)
            && (BORDER_MODULES..BORDER_MODULES + modules).contains(&my);
        if !in_symbol {
            return BACKGROUND;
        }
        let index = ((my - BORDER_MODULES) * modules + (mx - BORDER_MODULES)) as usize;
        match colors[index] {
            Color::Dark => foreground,
            Color::Light => BACKGROUND,
        }
    }))
}

/// Encode `data` and rasterize it using the module size derived from `size`.
pub fn encode(
    data: &str,
    level: ErrorCorrectionLevel,
    size: u32,
    foreground: Rgb<u8>,
) -> Result<RgbImage, CoreError> {
    if size == 0 {
        return Err(CoreError::Validation(
            "QR size must be greater than zero".to_string(),
        ));
    }
    let code = encode_symbol(data, level)?;
    render(&code, box_size(size), foreground)
}
