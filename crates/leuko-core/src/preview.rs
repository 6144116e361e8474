//! Terminal preview of the selected image.
//!
//! Downscales the image and pairs vertically adjacent pixels into half-block
//! cells (`▀`: foreground = upper pixel, background = lower pixel).

use image::imageops::FilterType;
use image::GenericImageView;

use crate::config::{LimitsConfig, PreviewConfig};
use crate::error::IntakeError;
use crate::types::{ImageMime, UploadedImage};

/// Upper and lower pixel of one terminal cell.
pub type Cell = [[u8; 3]; 2];

/// Decoded dimensions plus an optional colour rendering.
#[derive(Debug, Clone)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
    pub format: ImageMime,
    rows: Vec<Vec<Cell>>,
}

impl ImagePreview {
    /// Rows of half-block cells, empty when previews are disabled.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Render the cells with 24-bit ANSI colour, one line per row.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for [top, bottom] in row {
                out.push_str(&format!(
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                    top[0], top[1], top[2], bottom[0], bottom[1], bottom[2]
                ));
            }
            out.push_str("\x1b[0m\n");
        }
        out
    }
}

/// Decodes selected images for display.
pub struct PreviewRenderer {
    config: PreviewConfig,
    limits: LimitsConfig,
}

impl PreviewRenderer {
    pub fn new(config: PreviewConfig, limits: LimitsConfig) -> Self {
        Self { config, limits }
    }

    /// Decode the image and build its preview.
    ///
    /// Decoding is CPU-bound; async callers should run this on a blocking thread.
    pub fn render(&self, image: &UploadedImage) -> Result<ImagePreview, IntakeError> {
        let decoded = image::load_from_memory_with_format(image.bytes(), image.mime().image_format())
            .map_err(|e| IntakeError::InvalidImage {
                path: image.file_name().into(),
                message: e.to_string(),
            })?;

        let (width, height) = decoded.dimensions();
        let max_dim = self.limits.max_image_dimension;
        if width > max_dim || height > max_dim {
            return Err(IntakeError::InvalidImage {
                path: image.file_name().into(),
                message: format!("{width}x{height} exceeds the {max_dim}px limit"),
            });
        }

        let rows = if self.config.enabled {
            half_block_rows(&decoded, self.config.width)
        } else {
            Vec::new()
        };

        Ok(ImagePreview {
            width,
            height,
            format: image.mime(),
            rows,
        })
    }
}

/// Resize to `max_cols` wide (never upscaling) and pair pixel rows into cells.
fn half_block_rows(image: &image::DynamicImage, max_cols: u32) -> Vec<Vec<Cell>> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let cols = max_cols.min(width).max(1);
    let pixel_rows = ((u64::from(cols) * u64::from(height) + u64::from(width) / 2)
        / u64::from(width))
    .max(1) as u32;
    // Each cell covers two pixel rows
    let pixel_rows = pixel_rows.div_ceil(2) * 2;

    let small = image
        .resize_exact(cols, pixel_rows, FilterType::Triangle)
        .to_rgb8();

    (0..pixel_rows / 2)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    let top = small.get_pixel(col, row * 2).0;
                    let bottom = small.get_pixel(col, row * 2 + 1).0;
                    [top, bottom]
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, format).unwrap();
        buffer.into_inner()
    }

    fn renderer(width: u32) -> PreviewRenderer {
        PreviewRenderer::new(
            PreviewConfig {
                enabled: true,
                width,
            },
            LimitsConfig::default(),
        )
    }

    #[test]
    fn test_render_png_dimensions_and_cells() {
        let source = RgbImage::from_pixel(64, 32, Rgb([200, 10, 10]));
        let upload = UploadedImage::new("cell.png", ImageMime::Png, encode(&source, ImageFormat::Png));

        let preview = renderer(16).render(&upload).unwrap();
        assert_eq!((preview.width, preview.height), (64, 32));
        assert_eq!(preview.format, ImageMime::Png);
        // 16 cols, 8 pixel rows -> 4 cell rows
        assert_eq!(preview.rows().len(), 4);
        assert!(preview.rows().iter().all(|r| r.len() == 16));
        let [r, g, b] = preview.rows()[0][0][0];
        assert!(r > 190 && g < 20 && b < 20);
    }

    #[test]
    fn test_render_jpeg() {
        let source = RgbImage::from_pixel(10, 10, Rgb([40, 40, 160]));
        let upload = UploadedImage::new("cell.jpg", ImageMime::Jpeg, encode(&source, ImageFormat::Jpeg));
        let preview = renderer(48).render(&upload).unwrap();
        // Never upscaled past the source width
        assert_eq!(preview.rows()[0].len(), 10);
        assert_eq!(preview.rows().len(), 5);
    }

    #[test]
    fn test_render_disabled_keeps_dimensions() {
        let source = RgbImage::new(8, 8);
        let upload = UploadedImage::new("cell.png", ImageMime::Png, encode(&source, ImageFormat::Png));
        let renderer = PreviewRenderer::new(
            PreviewConfig {
                enabled: false,
                width: 48,
            },
            LimitsConfig::default(),
        );
        let preview = renderer.render(&upload).unwrap();
        assert_eq!(preview.width, 8);
        assert!(preview.rows().is_empty());
        assert!(preview.to_ansi().is_empty());
    }

    #[test]
    fn test_render_rejects_corrupt_data() {
        let upload = UploadedImage::new(
            "broken.png",
            ImageMime::Png,
            vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0],
        );
        let err = renderer(16).render(&upload).unwrap_err();
        assert!(matches!(err, IntakeError::InvalidImage { .. }));
    }

    #[test]
    fn test_render_rejects_oversized_dimensions() {
        let source = RgbImage::new(40, 4);
        let upload = UploadedImage::new("wide.png", ImageMime::Png, encode(&source, ImageFormat::Png));
        let renderer = PreviewRenderer::new(
            PreviewConfig::default(),
            LimitsConfig {
                max_image_dimension: 32,
                ..LimitsConfig::default()
            },
        );
        assert!(renderer.render(&upload).is_err());
    }

    #[test]
    fn test_to_ansi_resets_each_line() {
        let source = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        let upload = UploadedImage::new("cell.png", ImageMime::Png, encode(&source, ImageFormat::Png));
        let ansi = renderer(4).render(&upload).unwrap().to_ansi();
        assert_eq!(ansi.lines().count(), 2);
        assert!(ansi.contains("\x1b[38;2;1;2;3m"));
        assert!(ansi.lines().all(|l| l.ends_with("\x1b[0m")));
    }
}
