//! Error types for the azbukacrypt library.

use thiserror::Error;

/// Errors produced by the azbukacrypt cipher engines.
///
/// `InvalidKey` and `InvalidColumnCount` are construction-time failures:
/// they prevent the cipher instance from existing at all. `EmptyText` and
/// `InvalidCipherText` are operation-time failures raised by `encrypt` /
/// `decrypt`. Every failure aborts the call with no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Substitution key is empty, contains a non-alphabetic character,
    /// or all of its characters are identical (degenerate key).
    #[error("Key must be a non-degenerate sequence of Russian letters")]
    InvalidKey,
    /// Transposition column count is outside the valid range [1, 100].
    #[error("Number of columns must be between 1 and 100")]
    InvalidColumnCount,
    /// No alphabetic content remains to encrypt, or decrypt input is empty.
    #[error("Text contains no letters to process")]
    EmptyText,
    /// Decrypt input contains a character that is not an uppercase
    /// Russian letter.
    #[error("Cipher text must contain only uppercase Russian letters")]
    InvalidCipherText,
}
