//! Gronsfeld polyalphabetic substitution cipher.
//!
//! The key is a word over the Russian alphabet; each letter contributes
//! its alphabet index as a numeric shift, and the shifts are applied
//! cyclically position by position. Encryption adds the shift modulo 33,
//! decryption subtracts it.
//!
//! Encrypt is permissive: anything that is not a letter of the alphabet
//! is silently dropped and the remainder is folded to uppercase, the way
//! a human prepares plaintext. Decrypt is strict: the cipher text must
//! already consist solely of uppercase alphabet letters, so corruption
//! or misuse is caught immediately.

use crate::alphabet;
use crate::error::CipherError;

/// Gronsfeld substitution cipher over the 33-letter Russian alphabet.
///
/// The key is validated once at construction and the instance is
/// immutable afterwards, so it can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use azbukacrypt::GronsfeldCipher;
///
/// let cipher = GronsfeldCipher::new("Б").unwrap();
/// assert_eq!(cipher.encrypt("АБВ").unwrap(), "БВГ");
/// assert_eq!(cipher.decrypt("БВГ").unwrap(), "АБВ");
/// ```
#[derive(Debug)]
pub struct GronsfeldCipher {
    /// Alphabet indices of the key letters, applied cyclically.
    key: Vec<usize>,
}

impl GronsfeldCipher {
    /// Creates a cipher from a key word.
    ///
    /// The key is folded to uppercase and converted to alphabet indices.
    /// A single-letter key is the minimal valid key.
    ///
    /// # Parameters
    /// - `key`: Key word over the Russian alphabet, either case.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if the key is empty, contains
    /// a character outside the alphabet (digit, punctuation, whitespace,
    /// foreign letter), or has more than one character with all of them
    /// identical (degenerate key collapsing to a Caesar cipher).
    ///
    /// # Examples
    ///
    /// ```
    /// use azbukacrypt::GronsfeldCipher;
    ///
    /// assert!(GronsfeldCipher::new("бвг").is_ok());
    /// assert!(GronsfeldCipher::new("").is_err());
    /// assert!(GronsfeldCipher::new("ААА").is_err());
    /// assert!(GronsfeldCipher::new("Б1").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let mut indices = Vec::new();
        for c in key.chars() {
            let index = alphabet::index_any(c).ok_or(CipherError::InvalidKey)?;
            indices.push(index);
        }
        if indices.is_empty() {
            return Err(CipherError::InvalidKey);
        }
        if indices.len() > 1 && indices.iter().all(|&i| i == indices[0]) {
            return Err(CipherError::InvalidKey);
        }
        Ok(GronsfeldCipher { key: indices })
    }

    /// Returns the number of letters in the key.
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// Encrypts a text.
    ///
    /// Every character that is not a letter of the alphabet is dropped;
    /// surviving letters are folded to uppercase. For each position `i`
    /// of the normalized text the output index is
    /// `(plain[i] + key[i % key_len]) % 33`, the key repeating cyclically.
    ///
    /// # Parameters
    /// - `text`: Plain text; may contain noise (digits, punctuation,
    ///   whitespace) that is stripped before encryption.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] if no alphabet letters remain
    /// after normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use azbukacrypt::GronsfeldCipher;
    ///
    /// let cipher = GronsfeldCipher::new("Б").unwrap();
    /// assert_eq!(cipher.encrypt("а, б. в!").unwrap(), "БВГ");
    /// ```
    pub fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let work: Vec<usize> = text.chars().filter_map(alphabet::index_any).collect();
        if work.is_empty() {
            return Err(CipherError::EmptyText);
        }
        let result = work
            .iter()
            .enumerate()
            .map(|(i, &plain)| {
                alphabet::UPPER[(plain + self.key[i % self.key.len()]) % alphabet::LEN]
            })
            .collect();
        Ok(result)
    }

    /// Decrypts a cipher text.
    ///
    /// For each position `i` the output index is
    /// `(cipher[i] + 33 − key[i % key_len]) % 33`. Unlike
    /// [`encrypt`](Self::encrypt), no normalization is performed: the
    /// input must already be canonical.
    ///
    /// # Parameters
    /// - `text`: Cipher text consisting solely of uppercase alphabet
    ///   letters.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] if `text` is empty, and
    /// [`CipherError::InvalidCipherText`] if it contains any character
    /// that is not an uppercase letter of the alphabet (lowercase
    /// letters included).
    pub fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        if text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        let mut work = Vec::new();
        for c in text.chars() {
            let index = alphabet::index_of(c).ok_or(CipherError::InvalidCipherText)?;
            work.push(index);
        }
        let result = work
            .iter()
            .enumerate()
            .map(|(i, &cipher)| {
                alphabet::UPPER
                    [(cipher + alphabet::LEN - self.key[i % self.key.len()]) % alphabet::LEN]
            })
            .collect();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ALPHABET: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

    // --- Key validation ---

    #[test]
    fn test_valid_key() {
        let cipher = GronsfeldCipher::new("БВГ").unwrap();
        assert_eq!(cipher.encrypt("ААААА").unwrap(), "БВГБВ");
    }

    #[test]
    fn test_key_longer_than_message() {
        let cipher = GronsfeldCipher::new("БВГДЕЁЖЗИЙК").unwrap();
        assert_eq!(cipher.encrypt("ААААА").unwrap(), "БВГДЕ");
    }

    #[test]
    fn test_lowercase_key_folds() {
        let cipher = GronsfeldCipher::new("бвг").unwrap();
        assert_eq!(cipher.encrypt("ААААА").unwrap(), "БВГБВ");
    }

    #[test]
    fn test_digits_in_key() {
        assert_eq!(GronsfeldCipher::new("Б1").unwrap_err(), CipherError::InvalidKey);
    }

    #[test]
    fn test_punctuation_in_key() {
        assert_eq!(GronsfeldCipher::new("Б,В").unwrap_err(), CipherError::InvalidKey);
    }

    #[test]
    fn test_whitespace_in_key() {
        assert_eq!(GronsfeldCipher::new("Б В").unwrap_err(), CipherError::InvalidKey);
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(GronsfeldCipher::new("").unwrap_err(), CipherError::InvalidKey);
    }

    #[test]
    fn test_degenerate_key() {
        assert_eq!(GronsfeldCipher::new("ААА").unwrap_err(), CipherError::InvalidKey);
    }

    #[test]
    fn test_cipher_is_debug_formattable() {
        let cipher = GronsfeldCipher::new("БВГ").unwrap();
        let rendered = format!("{:?}", cipher);
        assert!(rendered.contains("GronsfeldCipher"));
    }

    #[test]
    fn test_single_letter_key_valid() {
        // A one-letter key cannot be degenerate.
        let cipher = GronsfeldCipher::new("А").unwrap();
        assert_eq!(cipher.key_len(), 1);
    }

    // --- Encrypt ---

    #[test]
    fn test_encrypt_uppercase_full_alphabet() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(
            cipher.encrypt(FULL_ALPHABET).unwrap(),
            "БВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯА"
        );
    }

    #[test]
    fn test_encrypt_lowercase_full_alphabet() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(
            cipher.encrypt("абвгдеёжзийклмнопрстуфхцчшщъыьэюя").unwrap(),
            "БВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯА"
        );
    }

    #[test]
    fn test_encrypt_strips_whitespace_and_punctuation() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        let noisy =
            "А,Б.В!Г?Д Е-Ё:Ж;З (И)Й К+Л=М Н*О П/Р С%Т У^Ф Х&Ц Ч|Ш Щ~Ъ Ы`Ь Э'Ю \"Я\"";
        assert_eq!(
            cipher.encrypt(noisy).unwrap(),
            "БВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯА"
        );
    }

    #[test]
    fn test_encrypt_strips_digits() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(cipher.encrypt("АБВ123").unwrap(), "БВГ");
    }

    #[test]
    fn test_encrypt_empty_string() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(cipher.encrypt("").unwrap_err(), CipherError::EmptyText);
    }

    #[test]
    fn test_encrypt_no_letters() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(
            cipher.encrypt("1234+8765=9999").unwrap_err(),
            CipherError::EmptyText
        );
    }

    #[test]
    fn test_encrypt_max_shift_key() {
        // Я is index 32, the maximal shift; Я itself wraps to А.
        let cipher = GronsfeldCipher::new("Я").unwrap();
        assert_eq!(
            cipher.encrypt(FULL_ALPHABET).unwrap(),
            "ЯАБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮ"
        );
    }

    // --- Decrypt ---

    #[test]
    fn test_decrypt_uppercase_full_alphabet() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(
            cipher.decrypt("БВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯА").unwrap(),
            FULL_ALPHABET
        );
    }

    #[test]
    fn test_decrypt_rejects_lowercase() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(
            cipher
                .decrypt("бВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯА")
                .unwrap_err(),
            CipherError::InvalidCipherText
        );
    }

    #[test]
    fn test_decrypt_rejects_whitespace() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(
            cipher
                .decrypt("БВГ ДЕЁ ЖЗИ ЙКЛ МНО ПРС ТУФ ХЦЧ ШЩЪ ЫЬЭ ЮЯА")
                .unwrap_err(),
            CipherError::InvalidCipherText
        );
    }

    #[test]
    fn test_decrypt_rejects_digits() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(
            cipher.decrypt("БВГ123ДЕЁ456ЖЗИ").unwrap_err(),
            CipherError::InvalidCipherText
        );
    }

    #[test]
    fn test_decrypt_rejects_punctuation() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(
            cipher
                .decrypt("Б,В.Г!Д?Е -Ё:Ж ;З (И) Й+К=Л М*Н О/П Р%С Т^У Ф&Х Ц|Ч Ш~Щ Ъ`Ы Ь'Э Ю\"Я\"А")
                .unwrap_err(),
            CipherError::InvalidCipherText
        );
    }

    #[test]
    fn test_decrypt_empty_string() {
        let cipher = GronsfeldCipher::new("Б").unwrap();
        assert_eq!(cipher.decrypt("").unwrap_err(), CipherError::EmptyText);
    }

    #[test]
    fn test_decrypt_max_shift_key() {
        let cipher = GronsfeldCipher::new("Я").unwrap();
        assert_eq!(
            cipher.decrypt("ЯАБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮ").unwrap(),
            FULL_ALPHABET
        );
    }

    #[test]
    fn test_round_trip_multi_letter_key() {
        let cipher = GronsfeldCipher::new("КЛЮЧ").unwrap();
        let plain = "ШИФРГРОНСФЕЛЬДА";
        let encrypted = cipher.encrypt(plain).unwrap();
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), plain);
    }

    #[test]
    fn test_normalization_idempotence() {
        // Noisy input encrypts to the same output as its canonical form.
        let cipher = GronsfeldCipher::new("БВГ").unwrap();
        let noisy = cipher.encrypt("при 3вет, мир!").unwrap();
        let canonical = cipher.encrypt("ПРИВЕТМИР").unwrap();
        assert_eq!(noisy, canonical);
    }
}
