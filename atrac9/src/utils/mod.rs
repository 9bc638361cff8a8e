//! Utility functions and supporting infrastructure.
//!
//! Provides bitstream I/O, Huffman decoding, the constant tables, the inverse
//! MDCT, the band extension noise generator and error handling.

pub mod bitstream_io;
pub mod errors;
pub mod huffman;
pub mod huffman_tables;
pub mod mdct;
pub mod rng;
pub mod tables;
