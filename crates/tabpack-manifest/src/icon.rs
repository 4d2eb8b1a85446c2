//! The two package icons and a lightweight header check for them.

use std::fmt;
use std::io::Cursor;

use serde::{Deserialize, Serialize};

/// Which of the two package icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKind {
    /// Full-color icon shown in the app catalog.
    Color,
    /// Transparent single-color icon shown in the app bar.
    Outline,
}

impl IconKind {
    /// Both kinds, in archive order.
    pub const ALL: [Self; 2] = [Self::Color, Self::Outline];

    /// Archive entry name (also the value used in the manifest `icons` block).
    #[must_use]
    pub const fn filename(self) -> &'static str {
        match self {
            Self::Color => "color.png",
            Self::Outline => "outline.png",
        }
    }

    /// Edge length in pixels Teams expects for this icon.
    #[must_use]
    pub const fn expected_size(self) -> u32 {
        match self {
            Self::Color => 192,
            Self::Outline => 32,
        }
    }

    /// Path of the bundled default icon, relative to the site root.
    #[must_use]
    pub const fn default_asset_path(self) -> &'static str {
        match self {
            Self::Color => "/assets/color.png",
            Self::Outline => "/assets/outline.png",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => f.write_str("Color"),
            Self::Outline => f.write_str("Outline"),
        }
    }
}

/// Errors from [`inspect_icon`].
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The icon data was empty.
    #[error("icon data is empty")]
    Empty,

    /// The bytes do not look like any supported image format.
    #[error("unrecognized image format")]
    UnknownFormat,

    /// The image header could not be read.
    #[error("failed to read image header: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

/// Dimensions and format of an icon image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconInfo {
    pub width: u32,
    pub height: u32,
    pub format: image::ImageFormat,
}

impl IconInfo {
    /// Whether this image is a PNG of the size Teams expects for `kind`.
    ///
    /// Advisory only. Packaging never refuses a mismatched icon.
    #[must_use]
    pub fn matches(&self, kind: IconKind) -> bool {
        let size = kind.expected_size();
        self.format == image::ImageFormat::Png && self.width == size && self.height == size
    }
}

/// Read the format and dimensions of an image without decoding pixels.
///
/// # Errors
///
/// Returns [`IconError::Empty`] for empty input, [`IconError::UnknownFormat`]
/// if the format cannot be guessed, and [`IconError::Decode`] if the header
/// is malformed.
pub fn inspect_icon(bytes: &[u8]) -> Result<IconInfo, IconError> {
    if bytes.is_empty() {
        return Err(IconError::Empty);
    }
    let reader = image::ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format().ok_or(IconError::UnknownFormat)?;
    let (width, height) = reader.into_dimensions()?;
    Ok(IconInfo {
        width,
        height,
        format,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 0]));
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn inspect_reads_png_dimensions() {
        let info = inspect_icon(&png(32, 16)).unwrap();
        assert_eq!((info.width, info.height), (32, 16));
        assert_eq!(info.format, image::ImageFormat::Png);
    }

    #[test]
    fn matches_expected_sizes() {
        assert!(inspect_icon(&png(192, 192)).unwrap().matches(IconKind::Color));
        assert!(inspect_icon(&png(32, 32)).unwrap().matches(IconKind::Outline));
        assert!(!inspect_icon(&png(32, 32)).unwrap().matches(IconKind::Color));
    }

    #[test]
    fn inspect_empty_input() {
        assert!(matches!(inspect_icon(&[]), Err(IconError::Empty)));
    }

    #[test]
    fn inspect_garbage_input() {
        assert!(matches!(
            inspect_icon(b"definitely not an image"),
            Err(IconError::UnknownFormat)
        ));
    }

    #[test]
    fn filenames_match_manifest_icons() {
        assert_eq!(IconKind::Color.filename(), "color.png");
        assert_eq!(IconKind::Outline.filename(), "outline.png");
    }
}
