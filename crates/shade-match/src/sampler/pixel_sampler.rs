//! Derive a single color from an uploaded photo.

use std::io::Cursor;

use image::{DynamicImage, ImageReader, Limits, RgbImage};
use serde::{Deserialize, Serialize};

use super::error::SampleError;
use super::options::SamplerOptions;
use crate::color::Color;

/// Largest accepted width or height of a decoded image, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 32_768;

/// A pixel coordinate in the full-resolution image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickPoint {
    pub x: u32,
    pub y: u32,
}

/// What the caller supplied alongside the image bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleRequest {
    /// User-supplied `#RRGGBB` color; takes precedence when valid.
    pub hex_override: Option<String>,
    /// Single pixel to read instead of averaging.
    pub pick: Option<PickPoint>,
}

impl SampleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, hex: impl Into<String>) -> Self {
        self.hex_override = Some(hex.into());
        self
    }

    pub fn with_pick(mut self, x: u32, y: u32) -> Self {
        self.pick = Some(PickPoint { x, y });
        self
    }
}

/// How a [`Sample`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum SampleSource {
    /// Taken verbatim from the override string
    Override,
    /// Read from one pixel of the decoded image
    Point { x: u32, y: u32 },
    /// Channel means over the resampled `grid` x `grid` image
    Average { grid: u32 },
}

impl SampleSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::Point { .. } => "point",
            Self::Average { .. } => "average",
        }
    }
}

/// A sampled color plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub color: Color,
    pub source: SampleSource,
    /// An override that was present but malformed, and therefore ignored
    pub rejected_override: Option<String>,
}

/// Turns image bytes into a [`Sample`].
///
/// Precedence, highest first:
///
/// 1. a valid `#RRGGBB` override, returned without decoding the image;
/// 2. a pick point, read from the full-resolution image;
/// 3. the per-channel mean of the image resampled to a square grid.
///
/// A malformed override is ignored, not fatal.
///
/// # Example
///
/// ```
/// use shade_match::{Color, PixelSampler, SampleRequest, SampleSource};
///
/// let sampler = PixelSampler::default();
/// let request = SampleRequest::new().with_override("#A9402C");
///
/// // Bytes are never decoded when the override is valid.
/// let sample = sampler.sample(b"not an image", &request).unwrap();
/// assert_eq!(sample.color, Color::new(0xA9, 0x40, 0x2C));
/// assert_eq!(sample.source, SampleSource::Override);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PixelSampler {
    options: SamplerOptions,
}

impl PixelSampler {
    pub fn new(options: SamplerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SamplerOptions {
        &self.options
    }

    /// Sample a color from `bytes` according to `request`.
    ///
    /// # Errors
    ///
    /// - [`SampleError::DecodeFailure`] if the image has to be decoded and
    ///   cannot be
    /// - [`SampleError::PointOutOfBounds`] if the pick point lies outside
    ///   the image
    /// - [`SampleError::EmptyImage`] if the image has no pixels
    pub fn sample(&self, bytes: &[u8], request: &SampleRequest) -> Result<Sample, SampleError> {
        let mut rejected_override = None;

        if let Some(raw) = request.hex_override.as_deref().filter(|s| !s.trim().is_empty()) {
            match parse_override(raw) {
                Ok(color) => {
                    return Ok(Sample {
                        color,
                        source: SampleSource::Override,
                        rejected_override: None,
                    })
                }
                Err(e) => {
                    tracing::warn!(%e, "Ignoring color override, sampling image instead");
                    rejected_override = Some(raw.to_string());
                }
            }
        }

        let (color, source) = match request.pick {
            Some(point) => (
                self.sample_point(bytes, point)?,
                SampleSource::Point {
                    x: point.x,
                    y: point.y,
                },
            ),
            None => (
                self.sample_average(bytes)?,
                SampleSource::Average {
                    grid: self.options.grid_size.max(1),
                },
            ),
        };

        Ok(Sample {
            color,
            source,
            rejected_override,
        })
    }

    /// Mean color of the image after resampling it to the grid.
    ///
    /// Resampling uses "cover" semantics: the centered square of side
    /// `min(width, height)` is cut out at source resolution and scaled to
    /// the grid, so the overflow of the long axis is cropped evenly from
    /// both sides. The long axis is never upscaled. Images already at grid
    /// size are used as is.
    pub fn sample_average(&self, bytes: &[u8]) -> Result<Color, SampleError> {
        let image = decode(bytes)?;
        let grid = self.options.grid_size.max(1);
        let (width, height) = (image.width(), image.height());

        let resampled: RgbImage = if width == grid && height == grid {
            image.to_rgb8()
        } else {
            let side = width.min(height);
            let square = image.crop_imm((width - side) / 2, (height - side) / 2, side, side);
            if side == grid {
                square.to_rgb8()
            } else {
                square
                    .resize_exact(grid, grid, self.options.filter.into())
                    .to_rgb8()
            }
        };

        tracing::trace!(width, height, grid, "Averaging resampled image");

        average_color(resampled.pixels().map(|p| Color::from(*p)))
    }

    /// Exact color of one pixel of the full-resolution image.
    pub fn sample_point(&self, bytes: &[u8], point: PickPoint) -> Result<Color, SampleError> {
        let image = decode(bytes)?;
        let (width, height) = (image.width(), image.height());
        if point.x >= width || point.y >= height {
            return Err(SampleError::PointOutOfBounds {
                x: point.x,
                y: point.y,
                width,
                height,
            });
        }

        let rgb = image.to_rgb8();
        Ok(Color::from(*rgb.get_pixel(point.x, point.y)))
    }
}

/// Parse a user-supplied override. Accepts exactly `^#[0-9A-Fa-f]{6}$`.
pub fn parse_override(raw: &str) -> Result<Color, SampleError> {
    raw.parse().map_err(|source| SampleError::InvalidOverrideFormat {
        value: raw.to_string(),
        source,
    })
}

/// Decode image bytes in any format the `image` crate recognizes.
///
/// Either side may be at most [`MAX_IMAGE_DIMENSION`] pixels, and the
/// decoder's default allocation cap applies.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, SampleError> {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_IMAGE_DIMENSION);
    limits.max_image_height = Some(MAX_IMAGE_DIMENSION);

    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    reader.limits(limits);
    let image = reader.decode()?;
    if image.width() == 0 || image.height() == 0 {
        return Err(SampleError::EmptyImage);
    }
    Ok(image)
}

/// Per-channel arithmetic mean, each channel rounded to the nearest
/// integer (halves round up).
///
/// Channels are summed independently, so the result does not depend on
/// pixel order.
pub fn average_color<I>(pixels: I) -> Result<Color, SampleError>
where
    I: IntoIterator<Item = Color>,
{
    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for pixel in pixels {
        sums[0] += u64::from(pixel.r);
        sums[1] += u64::from(pixel.g);
        sums[2] += u64::from(pixel.b);
        count += 1;
    }

    if count == 0 {
        return Err(SampleError::EmptyImage);
    }

    let mean = |sum: u64| (sum as f64 / count as f64).round().clamp(0.0, 255.0) as u8;
    Ok(Color::new(mean(sums[0]), mean(sums[1]), mean(sums[2])))
}
