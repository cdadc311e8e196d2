use thiserror::Error;

use crate::color::ParseColorError;

/// Errors from [`PixelSampler`](crate::PixelSampler).
///
/// A decode failure is always reported here and never turned into a black
/// sample, so a genuinely black photo stays distinguishable from a broken
/// upload.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    DecodeFailure(#[from] image::ImageError),

    /// The override string is not `#RRGGBB`.
    ///
    /// [`PixelSampler::sample`](crate::PixelSampler::sample) does not
    /// return this; it falls back to computed sampling and records the
    /// rejected value instead.
    #[error("invalid color override {value:?}: {source}")]
    InvalidOverrideFormat {
        value: String,
        #[source]
        source: ParseColorError,
    },

    /// A pick point outside the decoded image.
    #[error("pick point ({x}, {y}) is outside the {width}x{height} image")]
    PointOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The image decoded to zero pixels.
    #[error("image contains no pixels")]
    EmptyImage,
}
