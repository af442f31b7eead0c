//! Utility functions

use crate::constants::APP_NAME;
use image::Luma;
use qrcode::{EcLevel, QrCode};
use std::path::PathBuf;
use tracing::{info, warn};

/// Per-user data directory holding settings and logs
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Rasterize `data` as a QR code (error correction H, black on white, with
/// quiet zone) into straight RGBA pixels at least `min_size` pixels wide.
pub fn rasterize_qr(data: &str, min_size: u32) -> Result<(Vec<u8>, u32, u32), qrcode::types::QrError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)?;
    let gray = code
        .render::<Luma<u8>>()
        .dark_color(Luma([0]))
        .light_color(Luma([255]))
        .min_dimensions(min_size, min_size)
        .build();
    let (w, h) = gray.dimensions();
    let rgba = gray
        .pixels()
        .flat_map(|p| {
            let v = p.0[0];
            [v, v, v, 255]
        })
        .collect();
    Ok((rgba, w, h))
}

/// Hand a URI to the platform handler. Failures are logged, not surfaced.
pub fn open_link(url: &str) {
    match open::that(url) {
        Ok(()) => info!(scheme = url.split(':').next().unwrap_or(""), "Opened payment link"),
        Err(e) => warn!(error = %e, "Failed to open payment link"),
    }
}

/// "gpay" -> "Gpay", "amazon pay" -> "Amazon Pay"
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_is_square_and_has_dark_modules() {
        let (pixels, w, h) =
            rasterize_qr("upi://pay?pa=abc%40bank&pn=Test%20User&am=1&tn=&cu=INR", 180).unwrap();
        assert_eq!(w, h);
        assert!(w >= 180);
        assert_eq!(pixels.len(), (w * h * 4) as usize);
        assert!(pixels.chunks(4).any(|p| p[0] == 0));
        assert!(pixels.chunks(4).any(|p| p[0] == 255));
        assert!(pixels.chunks(4).all(|p| p[3] == 255));
    }

    #[test]
    fn qr_quiet_zone_is_light() {
        let (pixels, _, _) = rasterize_qr("upi://pay", 64).unwrap();
        assert_eq!(&pixels[..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn oversized_payload_is_an_error() {
        let data = "x".repeat(4000);
        assert!(rasterize_qr(&data, 64).is_err());
    }

    #[test]
    fn capitalize_words_uppercases_each_word() {
        assert_eq!(capitalize_words("gpay"), "Gpay");
        assert_eq!(capitalize_words("amazon pay"), "Amazon Pay");
        assert_eq!(capitalize_words("-"), "-");
        assert_eq!(capitalize_words(""), "");
    }
}
