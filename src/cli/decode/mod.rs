mod decode_impl;
pub mod decoder_thread;
pub mod output;
pub mod progress;
pub mod schedule;

pub use decode_impl::cmd_decode;
