//! Columnar route-transposition cipher.
//!
//! Plain text is written into a rows×columns grid row by row, left to
//! right, and read back out column by column from the rightmost column
//! to the leftmost. When the text length is not a multiple of the column
//! count the final row is ragged: its unfilled cells sit in the
//! rightmost columns, and the read-out skips them.
//!
//! Encrypt and decrypt both derive their traversal from a single
//! [`GridLayout`] so the skip rule cannot diverge between the two
//! directions.

use crate::alphabet;
use crate::error::CipherError;

/// Grid geometry derived once per call from text length and column count.
///
/// Filled cells are row-major indices `0..len`; the final row holds
/// `columns - empty_cells` letters, leaving the rightmost `empty_cells`
/// columns without a final-row entry.
struct GridLayout {
    rows: usize,
    columns: usize,
    empty_cells: usize,
}

impl GridLayout {
    fn new(len: usize, columns: usize) -> Self {
        let rows = len.div_ceil(columns);
        GridLayout {
            rows,
            columns,
            empty_cells: rows * columns - len,
        }
    }

    /// True when `col` has no entry in the final row.
    ///
    /// The single skip rule shared by the encrypt read-out and the
    /// decrypt write-in. Holds for the single-row case too (`rows == 1`,
    /// where the final row is row 0): every column at or beyond the text
    /// length is skipped entirely.
    fn skips_last_row(&self, col: usize) -> bool {
        col >= self.columns - self.empty_cells
    }
}

/// Route transposition cipher over the 33-letter Russian alphabet.
///
/// Immutable after construction; every call allocates its own working
/// grid, so an instance can be shared between threads.
///
/// # Examples
///
/// ```
/// use azbukacrypt::RouteCipher;
///
/// let cipher = RouteCipher::new(3).unwrap();
/// assert_eq!(cipher.encrypt("АБВГДЕ").unwrap(), "ВЕБДАГ");
/// assert_eq!(cipher.decrypt("ВЕБДАГ").unwrap(), "АБВГДЕ");
/// ```
#[derive(Debug)]
pub struct RouteCipher {
    columns: usize,
}

impl RouteCipher {
    /// Creates a cipher with the given number of grid columns.
    ///
    /// # Parameters
    /// - `columns`: Width of the transposition grid.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidColumnCount`] if `columns` is 0 or
    /// greater than 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use azbukacrypt::RouteCipher;
    ///
    /// assert!(RouteCipher::new(5).is_ok());
    /// assert!(RouteCipher::new(0).is_err());
    /// assert!(RouteCipher::new(1000).is_err());
    /// ```
    pub fn new(columns: usize) -> Result<Self, CipherError> {
        if !(1..=100).contains(&columns) {
            return Err(CipherError::InvalidColumnCount);
        }
        Ok(RouteCipher { columns })
    }

    /// Returns the number of grid columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Encrypts a text.
    ///
    /// Letters of the alphabet are kept and folded to uppercase; spaces
    /// and every other character are dropped. The surviving letters fill
    /// the grid row-major and are read out column by column, rightmost
    /// column first, top to bottom, skipping the unfilled final-row
    /// cells of the ragged last row.
    ///
    /// # Parameters
    /// - `text`: Plain text; may contain noise that is stripped.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] if no alphabet letters remain
    /// after normalization.
    pub fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let work: Vec<char> = text.chars().filter_map(alphabet::fold_upper).collect();
        if work.is_empty() {
            return Err(CipherError::EmptyText);
        }
        let layout = GridLayout::new(work.len(), self.columns);

        // The grid is never materialized: cell (row, col) of the
        // row-major fill is just work[row * columns + col].
        // Cyrillic letters are 2 bytes each in UTF-8.
        let mut result = String::with_capacity(work.len() * 2);
        for col in (0..layout.columns).rev() {
            for row in 0..layout.rows {
                if row == layout.rows - 1 && layout.skips_last_row(col) {
                    continue;
                }
                result.push(work[row * layout.columns + col]);
            }
        }
        Ok(result)
    }

    /// Decrypts a cipher text.
    ///
    /// Rebuilds the grid by writing the cipher text in the encrypt
    /// read order (rightmost column first, same skip rule), then reads
    /// it back row-major. No normalization is performed.
    ///
    /// # Parameters
    /// - `text`: Cipher text consisting solely of uppercase alphabet
    ///   letters.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] if `text` is empty, and
    /// [`CipherError::InvalidCipherText`] if it contains any character
    /// that is not an uppercase letter of the alphabet.
    pub fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        if text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        let mut work = Vec::new();
        for c in text.chars() {
            if alphabet::index_of(c).is_none() {
                return Err(CipherError::InvalidCipherText);
            }
            work.push(c);
        }
        let layout = GridLayout::new(work.len(), self.columns);

        // Non-skipped cells number exactly work.len(), so the stream is
        // consumed in full.
        let mut grid: Vec<Option<char>> = vec![None; layout.rows * layout.columns];
        let mut stream = work.into_iter();
        for col in (0..layout.columns).rev() {
            for row in 0..layout.rows {
                if row == layout.rows - 1 && layout.skips_last_row(col) {
                    continue;
                }
                grid[row * layout.columns + col] = stream.next();
            }
        }
        Ok(grid.into_iter().flatten().collect())
    }
}
