//! Errors
//!
//! Custom error types used throughout the `chisquare` crate.
use thiserror::Error;

/// Errors raised by the validated entry points of the crate.
///
/// The numeric kernel itself never errors: out-of-domain inputs degrade
/// to a zero result instead.
#[derive(Debug, Error)]
pub enum ChiSquareError {
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// Unable to write configuration to file.
    #[error("Unable to write configuration to file: {0}")]
    UnableToWrite(String),
    /// Unable to read configuration from file.
    #[error("Unable to read configuration from a file {0}")]
    UnableToRead(String),
}
