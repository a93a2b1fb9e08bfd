//! Load, composite and save
//!
//! Reads an 8-bit RGB PNG, appends a generated alpha channel and writes the
//! RGBA result back out as PNG.

use crate::{AlphaGradientConfig, AlphaGradientError, Effect, Result};
use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbImage, RgbaImage};
use std::path::Path;

/// Decode a PNG file that must hold 8-bit RGB pixels
pub fn load_rgb(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();

    let mut reader = ImageReader::open(path)?;
    reader.set_format(ImageFormat::Png);

    match reader.decode()? {
        DynamicImage::ImageRgb8(image) => {
            log::info!(
                "loaded {} ({}x{})",
                path.display(),
                image.width(),
                image.height()
            );
            Ok(image)
        }
        other => Err(AlphaGradientError::UnsupportedLayout(format!(
            "expected 8-bit RGB, got {:?} in {}",
            other.color(),
            path.display()
        ))),
    }
}

/// Append an alpha channel built from `config` to `rgb`.
///
/// Color values are copied unchanged.
pub fn compose_rgba(rgb: &RgbImage, config: &AlphaGradientConfig) -> Result<RgbaImage> {
    let mut rgba = RgbaImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Rgba([r, g, b, 0])
    });

    config.apply(&mut rgba)?;
    Ok(rgba)
}

/// Encode `image` as PNG, replacing any existing file at `path`
pub fn save_rgba(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image.save_with_format(path, ImageFormat::Png)?;

    log::info!(
        "saved {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(())
}

pub fn add_alpha_gradient(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &AlphaGradientConfig,
) -> Result<()> {
    let rgb = load_rgb(input)?;
    let rgba = compose_rgba(&rgb, config)?;
    save_rgba(&rgba, output)
}

/// Left edge fully transparent, right edge fully opaque
pub fn add_horizontal_alpha_gradient(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<()> {
    add_alpha_gradient(input, output, &AlphaGradientConfig::default())
}
