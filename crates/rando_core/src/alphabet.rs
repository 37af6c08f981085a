//! Symbol sets for random string generation.

use crate::error::RandomError;

/// Lowercase alphanumeric symbols used when no alphabet is supplied.
pub const DEFAULT_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// A non-empty, ordered list of symbols to draw string characters from.
///
/// Repeated symbols are kept: a symbol listed twice is drawn twice as often.
///
/// # Examples
///
/// ```
/// use rando_core::Alphabet;
///
/// let hex = Alphabet::new("0123456789abcdef").unwrap();
/// assert_eq!(hex.len(), 16);
/// assert!(hex.contains('f'));
///
/// assert!(Alphabet::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] if `symbols` is empty.
    pub fn new(symbols: &str) -> Result<Self, RandomError> {
        Self::from_chars(symbols.chars().collect())
    }

    /// Builds an alphabet from an explicit symbol list.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] if `symbols` is empty.
    pub fn from_chars(symbols: Vec<char>) -> Result<Self, RandomError> {
        if symbols.is_empty() {
            return Err(RandomError::invalid_argument("alphabet must not be empty"));
        }
        Ok(Self { symbols })
    }

    /// Number of symbols, counting repeats.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an `Alphabet` cannot be constructed empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns `true` if `symbol` occurs at least once.
    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// The symbols in their original order.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}
