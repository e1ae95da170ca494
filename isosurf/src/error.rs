//! Module containing the universal error type
use thiserror::Error;

/// Universal error type for `isosurf`
#[derive(Error, Debug)]
pub enum Error {
    /// Sample count does not match the volume dimensions
    #[error("volume has {actual} samples but its dimensions need {expected}")]
    BadVolumeSize {
        /// Sample count implied by the dimensions
        expected: usize,
        /// Sample count that was provided
        actual: usize,
    },

    /// Raw data length is not a multiple of the sample size
    #[error("raw data length ({0}) is not a multiple of 4 bytes")]
    BadRawLength(usize),

    /// IO error; see inner code for details
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
