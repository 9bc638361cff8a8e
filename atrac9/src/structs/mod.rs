//! Data structures representing format components.
//!
//! Contains the config descriptor and the frame, block and channel tree the
//! bitstream is unpacked into, together with the readers for each level.

pub mod block;
pub mod channel;
pub mod config;
pub mod frame;
pub mod scale_factors;
