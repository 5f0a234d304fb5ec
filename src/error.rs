//! Error types for the core.
//!
//! Two failure classes are distinguished per the component contracts: a
//! [`CoreError`] is a programmer error (bad layer index, null-ish buffer
//! length, cipher initialization failure) that callers are expected to treat
//! as fatal, while a [`DecodeError`] is a recoverable failure surfaced from
//! untrusted input to the sparse codec or the bit reader.

use thiserror::Error;

/// Programmer-error class failures: malformed call sites, not malformed data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// An NTT layer index outside `0..NUM_LAYERS` was requested.
    #[error("unsupported NTT layer index {0}")]
    UnsupportedLayer(u8),
    /// A sparse vector dimension outside the supported range was requested.
    #[error("unsupported sparse vector dimension {0}")]
    UnsupportedDimension(usize),
    /// The AES-256-CTR cipher could not be initialized from the given key/nonce.
    #[error("cipher initialization failed")]
    CipherInit,
    /// A value fell outside the alphabet the caller's chosen value-codec engine supports
    /// (for example, a value outside `{-2,-1,1,2}` passed to the packed engine).
    #[error("value {0} is not representable by the selected value-codec engine")]
    UnsupportedValue(i8),
    /// A decode-time failure, see [`DecodeError`] for the specific cause.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Recoverable failures surfaced while decoding untrusted bit streams.
///
/// Decode errors are local: they never return a partial vector to the
/// caller, and the scratch buffer backing a failed decode must not be
/// mistaken for valid output by the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The bit reader ran out of input before the requested read completed.
    #[error("unexpected end of bit stream")]
    UnexpectedEof,
    /// A Rice-coded unary prefix exceeded the safety cap.
    #[error("rice unary prefix exceeded safety cap")]
    RiceOverflow,
    /// A decoded position fell outside `[0, dimension)`.
    #[error("decoded position {position} out of bounds for dimension {dimension}")]
    PositionOutOfBounds {
        /// The offending position.
        position: u32,
        /// The dimension the position was checked against.
        dimension: u32,
    },
    /// The header's declared non-zero count did not match what was consumed.
    #[error("non-zero count mismatch: header said {expected}, decoder consumed {actual}")]
    CountMismatch {
        /// Count declared in the header.
        expected: u16,
        /// Count actually reconstructed.
        actual: u16,
    },
    /// A canonical Huffman code table failed to reconstruct (bad lengths).
    #[error("invalid canonical huffman code table")]
    InvalidHuffmanTable,
    /// No Huffman code matched the bits read before the cap was reached.
    #[error("huffman decode did not terminate in a valid code")]
    HuffmanDecodeFailed,
    /// The rANS renormalization byte stream was exhausted before decoding finished.
    #[error("rANS renormalization stream exhausted")]
    RansExhausted,
    /// The alphabet declared in the header is empty or otherwise malformed.
    #[error("malformed alphabet header")]
    MalformedAlphabet,
}
