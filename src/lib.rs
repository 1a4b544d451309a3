//! This library contains phonetic algorithms that map a word to a short code
//! approximating its pronunciation, so that words spelled differently but
//! sounding alike (`Smith` and `Smyth`) can be compared.
//!
//! It currently implements :
//!
//! * [Double Metaphone] : see [Wikipedia](https://en.wikipedia.org/wiki/Metaphone#Double_Metaphone)
//! * [Metaphone] : see [Wikipedia](https://en.wikipedia.org/wiki/Metaphone)
//! * [Soundex] : see [Wikipedia](https://en.wikipedia.org/wiki/Soundex)
//!
//! Every encoder is a small immutable value, so it can be shared between threads
//! freely. For one-off calls, the free functions [metaphone], [double_metaphone],
//! [soundex], [is_metaphone_equal] and [double_metaphone_sounds_like] use the
//! default configuration (codes of at most 4 characters).
//!
//! ```rust
//! use soundalike::{double_metaphone, metaphone, soundex};
//!
//! assert_eq!(double_metaphone("Smith", false), Some("SM0".to_string()));
//! assert_eq!(double_metaphone("Smith", true), Some("XMT".to_string()));
//! assert_eq!(double_metaphone("   ", false), None);
//! assert_eq!(metaphone("Knight"), "NT");
//! assert_eq!(soundex("Robert"), "R163");
//! ```
//!
//! [Double Metaphone]: DoubleMetaphone
use std::fmt;
use std::fmt::Formatter;

pub use crate::double_metaphone::{DoubleMetaphone, DoubleMetaphoneResult};
pub use crate::metaphone::Metaphone;
pub use crate::soundex::{Soundex, DEFAULT_US_ENGLISH_MAPPING_SOUNDEX};

mod double_metaphone;
mod helper;
mod metaphone;
mod soundex;

/// Errors
#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum PhoneticError {
    /// This variant is raised when a [Soundex] mapping doesn't
    /// contain exactly one code for each of the 26 letters.
    InvalidMapping(String),
}

impl fmt::Display for PhoneticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMapping(error) => write!(f, "Invalid soundex mapping : {}", error),
        }
    }
}

impl std::error::Error for PhoneticError {}

/// This trait represents a phonetic algorithm.
pub trait Encoder {
    /// This method convert a string into its code.
    ///
    /// # Parameter
    ///
    /// * `s` : string to encode.
    ///
    /// # Return
    ///
    /// String encoded.
    ///
    /// # Example
    ///
    /// Example using [Metaphone] algorithm.
    ///
    /// ```rust
    /// use soundalike::{Encoder, Metaphone};
    ///
    /// let metaphone = Metaphone::default();
    ///
    /// assert_eq!(metaphone.encode("Thompson"), "0MPS");
    /// ```
    fn encode(&self, s: &str) -> String;

    /// This method check that two strings have the same code.
    ///
    /// # Parameters
    ///
    /// * `first` : first string.
    /// * `second` : second string.
    ///
    /// # Return
    ///
    /// Return `true` if both strings have the same code, false otherwise.
    ///
    /// # Example
    ///
    /// Example with [Soundex]
    ///
    /// ```rust
    /// use soundalike::{Encoder, Soundex};
    ///
    /// let soundex = Soundex::default();
    /// assert!(!soundex.is_encoded_equals("Peter", "Stevenson"));
    /// assert!(soundex.is_encoded_equals("Robert", "Rupert"));
    /// ```
    fn is_encoded_equals(&self, first: &str, second: &str) -> bool {
        let f = self.encode(first);
        let s = self.encode(second);

        f == s
    }
}

/// Metaphone code of `word`, at most 4 characters long.
///
/// An empty (or blank) word gives an empty code, a single character word is
/// returned upper-cased.
pub fn metaphone(word: &str) -> String {
    Metaphone::default().encode(word)
}

/// Check that two words have the same [metaphone] code.
pub fn is_metaphone_equal(first: &str, second: &str) -> bool {
    Metaphone::default().is_encoded_equals(first, second)
}

/// Double Metaphone code of `word` : the primary one, or the alternate one if
/// `alternate` is `true`.
///
/// Return `None` if `word` is empty or blank. Unlike [metaphone], there is no
/// code at all for such a word rather than an empty one.
pub fn double_metaphone(word: &str, alternate: bool) -> Option<String> {
    DoubleMetaphone::default()
        .double_metaphone(word)
        .map(|result| {
            if alternate {
                result.alternate().to_string()
            } else {
                result.primary().to_string()
            }
        })
}

/// Return `true` if both words have a primary Double Metaphone code and those
/// codes are equal.
///
/// ```rust
/// use soundalike::double_metaphone_sounds_like;
///
/// assert!(double_metaphone_sounds_like("Smith", "Smyth"));
/// assert!(!double_metaphone_sounds_like("Smith", "Schmidt"));
/// assert!(!double_metaphone_sounds_like("", " "));
/// ```
pub fn double_metaphone_sounds_like(first: &str, second: &str) -> bool {
    match (double_metaphone(first, false), double_metaphone(second, false)) {
        (Some(first), Some(second)) => first == second,
        _ => false,
    }
}

/// Soundex code of `word`, always 4 characters long for a non-empty word.
///
/// An empty word gives an empty code.
pub fn soundex(word: &str) -> String {
    Soundex::default().encode(word)
}
