//! Classical cipher engines over the Russian alphabet.
//!
//! Azbukacrypt implements two historical (pedagogical, not
//! cryptographically secure) ciphers over the fixed 33-letter uppercase
//! Cyrillic alphabet: a Gronsfeld polyalphabetic substitution cipher and
//! a columnar route-transposition cipher.
//!
//! # Architecture
//!
//! ```text
//! alphabet         (fixed 33-letter table — letter ↔ index lookups)
//!     ↕ used by both engines
//! GronsfeldCipher  (per-position modular shift, key repeats cyclically)
//! RouteCipher      (row-major grid, read out by column right-to-left)
//! ```
//!
//! Each cipher instance is immutable after construction and every
//! `encrypt`/`decrypt` call is a pure function of the instance parameters
//! and the input text, so instances are safe to share across threads.
//!
//! # Examples
//!
//! Encrypt and decrypt with a Gronsfeld key:
//!
//! ```
//! use azbukacrypt::GronsfeldCipher;
//!
//! let cipher = GronsfeldCipher::new("БВГ").unwrap();
//!
//! let encrypted = cipher.encrypt("ПРИВЕТ").unwrap();
//! let decrypted = cipher.decrypt(&encrypted).unwrap();
//! assert_eq!(decrypted, "ПРИВЕТ");
//! ```
//!
//! Transpose through a 4-column grid:
//!
//! ```
//! use azbukacrypt::RouteCipher;
//!
//! let cipher = RouteCipher::new(4).unwrap();
//!
//! assert_eq!(cipher.encrypt("АБВГДЕЁЖ").unwrap(), "ГЖВЁБЕАД");
//! assert_eq!(cipher.decrypt("ГЖВЁБЕАД").unwrap(), "АБВГДЕЁЖ");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod gronsfeld;
mod route;

pub use error::CipherError;
pub use gronsfeld::GronsfeldCipher;
pub use route::RouteCipher;
