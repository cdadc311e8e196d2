//! Test fixtures: generated images and shade colors.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Colors from the default palette
pub mod shades {
    pub const VERY_LIGHT_COPPER_BLONDE: &str = "#F8BF9A";
    pub const MEDIUM_COPPER: &str = "#C9694A";
    pub const DARK_COPPER_RED: &str = "#A9402C";
    pub const FIRE_ENGINE_RED: &str = "#C21807";
}

/// Encode an RGB image as PNG
pub fn png(image: RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("Failed to encode PNG");
    buf
}

/// Encode an RGB image as JPEG
pub fn jpeg(image: RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .expect("Failed to encode JPEG");
    buf
}

/// A single-color PNG
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    png(RgbImage::from_pixel(width, height, Rgb(rgb)))
}

/// A black PNG with one colored pixel
pub fn png_with_pixel(width: u32, height: u32, x: u32, y: u32, rgb: [u8; 3]) -> Vec<u8> {
    let mut image = RgbImage::new(width, height);
    image.put_pixel(x, y, Rgb(rgb));
    png(image)
}

/// Bytes that no image decoder accepts
pub const GARBAGE: &[u8] = b"this is not an image at all";
