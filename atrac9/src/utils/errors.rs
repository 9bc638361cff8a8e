#[macro_export]
macro_rules! log_or_err {
    ($state:expr, $level:expr, $err:expr $(,)?) => {{
        if $level <= $state.fail_level {
            return Err($err);
        } else {
            match $level {
                ::log::Level::Error => ::log::error!("{}", $err),
                ::log::Level::Warn => ::log::warn!("{}", $err),
                ::log::Level::Info => ::log::info!("{}", $err),
                ::log::Level::Debug => ::log::debug!("{}", $err),
                ::log::Level::Trace => ::log::trace!("{}", $err),
            }
        }
    }};
}

/// Broad error categories callers can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The 4-byte config descriptor was rejected.
    ConfigInvalid,
    /// The superframe violates the bitstream grammar.
    InvalidData,
    /// An input or output buffer is too small for one superframe.
    BufferTooSmall,
    /// `decode` was called before `initialize`.
    NotInitialized,
    /// Anything else, e.g. I/O errors from the bit reader.
    Other,
}

/// Classifies an error returned by this crate.
pub fn error_kind(err: &anyhow::Error) -> ErrorKind {
    if err.downcast_ref::<ConfigError>().is_some() {
        ErrorKind::ConfigInvalid
    } else if err.downcast_ref::<BlockError>().is_some()
        || err.downcast_ref::<ScaleFactorError>().is_some()
        || err.downcast_ref::<SpectrumError>().is_some()
    {
        ErrorKind::InvalidData
    } else if let Some(e) = err.downcast_ref::<DecodeError>() {
        match e {
            DecodeError::NotInitialized => ErrorKind::NotInitialized,
            DecodeError::SuperframeOverrun { .. } => ErrorKind::InvalidData,
            _ => ErrorKind::BufferTooSmall,
        }
    } else {
        ErrorKind::Other
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Config data must be 4 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Invalid config header. Read {0:#04X}, expected 0xFE")]
    InvalidHeader(u8),

    #[error("Config validation bit must be 0")]
    ValidationBitSet,

    #[error("Reserved channel config index {0}")]
    ReservedChannelConfig(u8),
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("Decoder must be initialized before decoding")]
    NotInitialized,

    #[error("Superframe too small: {actual} bytes < {expected}")]
    SuperframeTooSmall { expected: usize, actual: usize },

    #[error("PCM output has {actual} channel buffers, expected {expected}")]
    PcmChannelsTooFew { expected: usize, actual: usize },

    #[error("PCM buffer for channel {channel} holds {actual} samples, expected {expected}")]
    PcmBufferTooSmall {
        channel: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Superframe read {overrun} bits beyond its {len}-bit payload")]
    SuperframeOverrun { overrun: u64, len: u64 },
}

#[derive(thiserror::Error, Debug)]
pub enum BlockError {
    #[error("first_in_superframe = {read} does not match frame index {frame_index}")]
    FirstInSuperframeMismatch { read: bool, frame_index: usize },

    #[error("reuse_band_params is not allowed in the first frame of a superframe")]
    ReuseOnFirstFrame,

    #[error("band_count {band_count} exceeds the maximum of {max} for this sample rate")]
    BandCountTooHigh { band_count: usize, max: usize },

    #[error("stereo_band {stereo_band} exceeds band_count {band_count}")]
    StereoBandTooHigh {
        stereo_band: usize,
        band_count: usize,
    },

    #[error("extension_band {extension_band} must be in [{min}, {max}]")]
    ExtensionBandOutOfRange {
        extension_band: usize,
        min: usize,
        max: usize,
    },

    #[error("gradient_boundary {boundary} exceeds quantization unit count {units}")]
    GradientBoundaryTooHigh { boundary: usize, units: usize },

    #[error("gradient units must satisfy 1 <= start <= end < 48, got start {start}, end {end}")]
    GradientUnitsOutOfRange { start: usize, end: usize },

    #[error("gradient values must be in [0, 32), got start {start}, end {end}")]
    GradientValuesOutOfRange { start: i32, end: i32 },

    #[error("No band extension layout for {0} quantization units")]
    UnsupportedExtensionUnits(usize),

    #[error("Band extension data overran its declared length: position {position} > end {end}")]
    ExtensionDataOverrun { position: u64, end: u64 },

    #[error("Band extension mode {mode} has no gain for value {value}")]
    ExtensionValueOutOfRange { mode: usize, value: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum ScaleFactorError {
    #[error("Scale factor mode {mode} on channel {channel} needs a baseline from a previous frame")]
    BaselineUnavailable { mode: u32, channel: usize },

    #[error("Scale factor {value} at unit {unit} is out of range [0, 31]")]
    OutOfRange { unit: usize, value: i32 },

    #[error("No scale factor codebook for bit length {0}")]
    MissingCodebook(u32),
}

#[derive(thiserror::Error, Debug)]
pub enum SpectrumError {
    #[error("No spectrum codebook for set {set}, precision {precision}, index {index}")]
    MissingCodebook {
        set: usize,
        precision: usize,
        index: usize,
    },
}
