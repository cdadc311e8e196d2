//! Color sampling
//!
//! Turns raw image bytes, plus an optional user override or pick point,
//! into a single [`Color`](crate::Color).

mod error;
mod options;
mod pixel_sampler;

pub use error::SampleError;
pub use options::{ResampleFilter, SamplerOptions, DEFAULT_GRID_SIZE};
pub use pixel_sampler::{
    average_color, decode, parse_override, PickPoint, PixelSampler, Sample, SampleRequest,
    SampleSource, MAX_IMAGE_DIMENSION,
};
