//! Fixed 33-letter Russian alphabet table.
//!
//! Provides the bidirectional letter ↔ index mapping both cipher engines
//! use to move between the textual and numeric domains. The table is an
//! immutable process-wide constant; the index map is built once, lazily,
//! and only pure lookup functions are exposed.
//!
//! Membership in this table is the crate's notion of "alphabetic":
//! ASCII letters, digits, punctuation and whitespace are all
//! non-alphabetic by construction, so the lookups never consult
//! [`char::is_alphabetic`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Number of letters in the alphabet.
pub const LEN: usize = 33;

/// The alphabet in canonical order, uppercase. Index 0 is `А`, index 32 is `Я`.
pub(crate) const UPPER: [char; LEN] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Uppercase letter → index, built once at first use.
static INDEX: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    UPPER.iter().enumerate().map(|(i, &c)| (c, i)).collect()
});

/// Either-case letter → index. Lowercase forms are derived from the
/// uppercase table at init so `ё` ↔ `Ё` needs no special casing.
static INDEX_FOLDED: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(2 * LEN);
    for (i, &upper) in UPPER.iter().enumerate() {
        map.insert(upper, i);
        for lower in upper.to_lowercase() {
            map.insert(lower, i);
        }
    }
    map
});

/// Returns the index of an uppercase alphabet letter.
///
/// Strict form used when validating cipher text: lowercase letters and
/// every character outside the alphabet return `None`.
///
/// # Parameters
/// - `c`: The character to look up.
///
/// # Returns
/// The index in [0, 33), or `None` if `c` is not an uppercase letter
/// of the alphabet.
pub fn index_of(c: char) -> Option<usize> {
    INDEX.get(&c).copied()
}

/// Returns the index of an alphabet letter of either case.
///
/// # Parameters
/// - `c`: The character to look up.
///
/// # Returns
/// The index in [0, 33), or `None` if `c` is not a letter of the
/// alphabet in either case.
pub fn index_any(c: char) -> Option<usize> {
    INDEX_FOLDED.get(&c).copied()
}

/// Folds an alphabet letter of either case to its uppercase form.
///
/// # Parameters
/// - `c`: The character to fold.
///
/// # Returns
/// The uppercase letter, or `None` if `c` is not a letter of the
/// alphabet in either case.
pub fn fold_upper(c: char) -> Option<char> {
    index_any(c).map(|i| UPPER[i])
}

/// Returns the uppercase letter at the given index.
///
/// # Parameters
/// - `index`: Position in the alphabet.
///
/// # Returns
/// The letter, or `None` if `index` is 33 or greater.
pub fn letter_at(index: usize) -> Option<char> {
    UPPER.get(index).copied()
}
