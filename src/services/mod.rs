pub mod converter;
pub mod inspector;

pub use converter::{ConversionReport, Converter};
pub use inspector::{corner_samples, CornerSamples, ImageSummary, PixelSample, CORNER_SIZE};
