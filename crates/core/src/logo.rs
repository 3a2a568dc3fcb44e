//! Logo loading and compositing.
//!
//! A logo reference is either an `http://`/`https://` URL or a path on the
//! local filesystem. The decoded image is squashed to a square one fifth of
//! the requested QR size and pasted over the center of the symbol.

use std::time::Duration;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::error::CoreError;

/// The logo side is the requested size divided by this.
pub const LOGO_SCALE_DIVISOR: u32 = 5;

/// Default timeout for fetching a remote logo.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default cap on logo payload size (5 MiB).
pub const DEFAULT_MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

/* --------------------------------------------------------------------------
Loading
-------------------------------------------------------------------------- */

/// Resolves logo references into decoded images.
pub struct LogoLoader {
    client: reqwest::Client,
    max_bytes: usize,
}

impl LogoLoader {
    /// Create a loader whose remote fetches time out after `fetch_timeout`
    /// and whose payloads may not exceed `max_bytes`.
    pub fn new(fetch_timeout: Duration, max_bytes: usize) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(fetch_timeout)
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, max_bytes })
    }

    /// Read and decode the referenced logo.
    pub async fn load(&self, reference: &str) -> Result<DynamicImage, CoreError> {
        let bytes = if is_remote(reference) {
            self.fetch(reference).await?
        } else {
            self.read_file(reference).await?
        };

        let logo = image::load_from_memory(&bytes)
            .map_err(|e| load_error(reference, format!("not a supported image: {e}")))?;

        tracing::debug!(
            reference,
            width = logo.width(),
            height = logo.height(),
            "Loaded logo"
        );
        Ok(logo)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CoreError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| load_error(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(load_error(url, format!("HTTP {}", status.as_u16())));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| load_error(url, e.to_string()))?
        {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(self.too_large(url));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>, CoreError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| load_error(path, e.to_string()))?;
        if metadata.len() > self.max_bytes as u64 {
            return Err(self.too_large(path));
        }
        tokio::fs::read(path)
            .await
            .map_err(|e| load_error(path, e.to_string()))
    }

    fn too_large(&self, reference: &str) -> CoreError {
        load_error(
            reference,
            format!("exceeds the {} byte limit", self.max_bytes),
        )
    }
}

fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

fn load_error(reference: &str, reason: String) -> CoreError {
    CoreError::LogoLoad {
        reference: reference.to_string(),
        reason,
    }
}

/* --------------------------------------------------------------------------
Compositing
-------------------------------------------------------------------------- */

/// Side length of the pasted logo for a requested QR size.
pub fn logo_side(size: u32) -> u32 {
    (size / LOGO_SCALE_DIVISOR).max(1)
}

/// Top-left paste position, centered on the *requested* size rather than
/// the rendered canvas.
pub fn logo_offset(size: u32, logo_width: u32, logo_height: u32) -> (i64, i64) {
    let size = i64::from(size);
    (
        (size - i64::from(logo_width)) / 2,
        (size - i64::from(logo_height)) / 2,
    )
}

/// Paste `logo` over the center of `base`.
///
/// The canvas keeps its dimensions; logo pixels outside it are clipped.
/// A logo with an alpha channel is blended, an opaque one replaces the
/// underlying modules.
pub fn embed_logo(base: RgbImage, logo: &DynamicImage, size: u32) -> RgbImage {
    let side = logo_side(size);
    let resized = imageops::resize(&logo.to_rgba8(), side, side, FilterType::CatmullRom);
    let (x, y) = logo_offset(size, resized.width(), resized.height());

    let mut canvas = DynamicImage::ImageRgb8(base).into_rgba8();
    imageops::overlay(&mut canvas, &resized, x, y);
    DynamicImage::ImageRgba8(canvas).into_rgb8()
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use image::{ImageFormat, Rgb, Rgba, RgbaImage};

    use super::*;

    fn white_canvas(side: u32) -> RgbImage {
        RgbImage::from_pixel(side, side, Rgb([255, 255, 255]))
    }

    fn solid_logo(color: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 8, color))
    }

    fn loader() -> LogoLoader {
        LogoLoader::new(Duration::from_secs(2), DEFAULT_MAX_LOGO_BYTES).unwrap()
    }

    // -- geometry --

    #[test]
    fn logo_side_is_one_fifth_of_size() {
        assert_eq!(logo_side(300), 60);
        assert_eq!(logo_side(304), 60);
        assert_eq!(logo_side(3), 1);
    }

    #[test]
    fn offset_centers_on_requested_size() {
        assert_eq!(logo_offset(300, 60, 60), (120, 120));
        assert_eq!(logo_offset(301, 60, 60), (120, 120));
    }

    // -- embed_logo --

    #[test]
    fn opaque_logo_fills_centered_square() {
        let red = Rgba([255, 0, 0, 255]);
        let out = embed_logo(white_canvas(290), &solid_logo(red), 300);

        assert_eq!(out.dimensions(), (290, 290));
        assert_eq!(*out.get_pixel(120, 120), Rgb([255, 0, 0]));
        assert_eq!(*out.get_pixel(179, 179), Rgb([255, 0, 0]));
        assert_eq!(*out.get_pixel(119, 150), Rgb([255, 255, 255]));
        assert_eq!(*out.get_pixel(180, 150), Rgb([255, 255, 255]));
    }

    #[test]
    fn transparent_logo_leaves_canvas_untouched() {
        let base = white_canvas(100);
        let out = embed_logo(base.clone(), &solid_logo(Rgba([0, 0, 0, 0])), 100);
        assert_eq!(out, base);
    }

    #[test]
    fn logo_is_clipped_when_canvas_is_smaller_than_size() {
        let out = embed_logo(white_canvas(20), &solid_logo(Rgba([0, 0, 255, 255])), 100);
        assert_eq!(out.dimensions(), (20, 20));
        // Offset (40, 40) lies entirely outside a 20px canvas.
        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    // -- LogoLoader --

    #[tokio::test]
    async fn loads_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        solid_logo(Rgba([0, 255, 0, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let logo = loader().load(path.to_str().unwrap()).await.unwrap();
        assert_eq!((logo.width(), logo.height()), (16, 8));
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let result = loader().load("/definitely/not/here.png").await;
        assert_matches!(result, Err(CoreError::LogoLoad { reference, .. }) if reference == "/definitely/not/here.png");
    }

    #[tokio::test]
    async fn non_image_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"plain text, not pixels").unwrap();

        let result = loader().load(path.to_str().unwrap()).await;
        assert_matches!(result, Err(CoreError::LogoLoad { reason, .. }) if reason.contains("not a supported image"));
    }

    #[tokio::test]
    async fn file_over_byte_limit_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, vec![0u8; 64]).unwrap();

        let small = LogoLoader::new(Duration::from_secs(2), 32).unwrap();
        let result = small.load(path.to_str().unwrap()).await;
        assert_matches!(result, Err(CoreError::LogoLoad { reason, .. }) if reason.contains("32 byte limit"));
    }

    #[tokio::test]
    async fn unreachable_url_is_a_load_error() {
        let result = loader().load("http://127.0.0.1:1/logo.png").await;
        assert_matches!(result, Err(CoreError::LogoLoad { .. }));
    }
}
