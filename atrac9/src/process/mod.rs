/// Bit allocation from scale factors and the gradient curve.
pub mod allocation;

/// Band extension above the coded bands.
pub mod band_extension;

/// Superframe decoding to PCM.
///
/// Provides the [`Decoder`](decode::Decoder) that runs the unpacker and the
/// signal processing stages for every frame of a superframe.
pub mod decode;

/// Dequantization and spectrum scaling.
pub mod quantization;

/// Intensity stereo.
pub mod stereo;
