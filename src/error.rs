//! Error types for keytone.

use thiserror::Error;

/// Result type alias for keytone operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building waveforms or validating configuration.
///
/// Only startup paths can fail. Note intake and frame rendering never
/// return errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Fundamental frequency was zero, negative or not finite.
    #[error("invalid frequency: {0} Hz (must be positive)")]
    InvalidFrequency(f32),

    /// Note duration was zero, negative or not finite.
    #[error("invalid note duration: {0} s (must be positive)")]
    InvalidDuration(f32),

    /// Invalid configuration parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
