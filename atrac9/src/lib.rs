//! Decoder for ATRAC9 bitstreams.
//!
//! ## Technical Overview
//!
//! ATRAC9 is a transform codec. Audio is carried in superframes of 1, 2, 4
//! or 8 frames, and each frame holds 64, 128 or 256 samples per channel
//! depending on the sample rate.
//!
//! ### Bitstream Organization
//!
//! **External Structure**: Superframes of a fixed byte size, described by a
//! 4-byte config descriptor carried by the container.
//! **Internal Structure**: Frames of blocks, one block per entry of the
//! channel configuration, each block byte aligned.
//!
//! ### Channel Configurations
//!
//! - Mono
//! - Dual mono
//! - Stereo
//! - 5.1 (stereo, mono, LFE, stereo)
//! - 7.1 (stereo, mono, LFE, stereo, stereo)
//! - Quad (stereo, stereo)
//!
//! ### Decoding Pipeline
//!
//! Each block is unpacked into scale factors and quantized spectra, then
//! dequantized, joined with intensity stereo, scaled, extended above the coded
//! bandwidth and transformed back to the time domain with an IMDCT.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use atrac9::process::decode::Decoder;
//!
//! let config_data = [0xFE, 0x74, 0x1F, 0xF0];
//! let mut decoder = Decoder::default();
//! decoder.initialize(&config_data)?;
//!
//! let config = decoder.config().cloned().expect("initialized");
//! let mut pcm = vec![vec![0f32; config.superframe_samples]; config.channel_count];
//!
//! let stream = std::fs::read("stream.bin")?;
//! for superframe in stream.chunks_exact(config.superframe_bytes) {
//!     decoder.decode(superframe, &mut pcm)?;
//!     // pcm[channel][sample] now holds one superframe of audio
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Processing stages for decoding superframes.
///
/// 1. **Bit allocation** ([`process::allocation`]): Per-unit precisions.
///
/// 2. **Dequantization** ([`process::quantization`]): Spectrum reconstruction.
///
/// 3. **Stereo** ([`process::stereo`]): Intensity stereo.
///
/// 4. **Band extension** ([`process::band_extension`]): High band synthesis.
///
/// 5. **Decoding** ([`process::decode`]): The superframe decoder.
pub mod process;

/// Data structures representing ATRAC9 format components.
///
/// - **Config** ([`structs::config`]): Stream descriptor
/// - **Frames** ([`structs::frame`]): Block tree for one frame
/// - **Blocks** ([`structs::block`]): Band layout and shared parameters
/// - **Channels** ([`structs::channel`]): Per-channel state
/// - **Scale Factors** ([`structs::scale_factors`]): Scale factor coding modes
pub mod structs;

/// Utility functions and supporting infrastructure.
///
/// - **Bitstream I/O** ([`utils::bitstream_io`]): Bit-level reading
/// - **Huffman** ([`utils::huffman`]): Table-driven decoding
/// - **Tables** ([`utils::tables`]): Constant tables
/// - **IMDCT** ([`utils::mdct`]): Inverse transform with overlap
/// - **Noise** ([`utils::rng`]): Band extension noise generator
/// - **Error Handling** ([`utils::errors`]): Error types
pub mod utils;
