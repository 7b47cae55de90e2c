// Purpose - output sample format conversion

pub mod converter;

pub use converter::{block_to_i16, sample_to_i16};
