//! Error types for Reed-Solomon coding operations

use thiserror::Error;

/// Errors surfaced by field arithmetic, encoding and decoding
///
/// Variants fall into three groups: malformed call parameters (detected
/// before any buffer write), arithmetic misuse (`log`/`inverse` of zero,
/// division by the zero polynomial), and uncorrectable received words.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RsError {
    /// No parity symbols requested
    #[error("no parity symbols requested")]
    NoParitySymbols,

    /// Codeword too short to hold any data symbols
    #[error("codeword of {len} symbols leaves no data room after {parity} parity symbols")]
    NoDataSymbols { len: usize, parity: usize },

    /// Symbol does not fit the configured bit width
    #[error("symbol {symbol} does not fit in {bits} bits")]
    SymbolOutOfRange { symbol: u16, bits: u32 },

    /// Bit buffer too short for the requested number of symbols
    #[error("needed {needed} bits but only {available} available")]
    NotEnoughBits { needed: usize, available: usize },

    /// Symbol width outside the supported range
    #[error("bit width {bits} outside supported range 1..=16")]
    BitWidthOutOfRange { bits: u32 },

    /// log(0) is undefined
    #[error("log of zero is undefined")]
    LogOfZero,

    /// Zero has no multiplicative inverse
    #[error("zero has no multiplicative inverse")]
    InverseOfZero,

    /// Polynomial division by the zero polynomial
    #[error("division by the zero polynomial")]
    DivisionByZeroPoly,

    /// An intermediate remainder in the Euclidean algorithm vanished
    /// or stopped shrinking before reaching the target degree
    #[error("euclidean algorithm stalled before reaching the target degree")]
    EuclideanStalled,

    /// Error locator polynomial is unusable (zero constant term or no roots
    /// to search for despite non-zero syndromes)
    #[error("degenerate error locator polynomial")]
    DegenerateLocator,

    /// Chien search found the wrong number of roots
    #[error("error locator degree {degree} does not match {found} located roots")]
    LocatorDegreeMismatch { degree: usize, found: usize },

    /// A located error maps outside the received codeword
    #[error("error location {log} outside codeword of {len} symbols")]
    ErrorLocationOutOfRange { log: usize, len: usize },
}

/// Type alias for Result with RsError
pub type Result<T> = std::result::Result<T, RsError>;
