const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Return `true` if `ch` is one of `A`, `E`, `I`, `O` or `U`.
///
/// `None` (a lookup outside the word) is never a vowel.
pub fn is_vowel(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if VOWELS.contains(&c))
}

/// A trimmed, upper-cased word, ready to be scanned by an encoder.
///
/// Positions are signed so that look-behind such as `index - 2` can be
/// expressed directly: anything outside `[0, len)` simply doesn't match.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Trim and upper-case `raw`. Return `None` if nothing is left.
    ///
    /// Upper-casing uses the Unicode default mapping, so the result doesn't
    /// depend on the host locale.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let text = trimmed.to_uppercase();
        let chars = text.chars().collect();
        Some(Self { text, chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Index of the last character.
    pub fn last_index(&self) -> isize {
        self.chars.len() as isize - 1
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `index`, `None` when out of the word.
    pub fn char_at(&self, index: isize) -> Option<char> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.chars.get(i))
            .copied()
    }

    /// Return `true` if the `length` characters starting at `start` are
    /// all inside the word and equal one of `criteria`.
    pub fn contains(&self, start: isize, length: usize, criteria: &[&str]) -> bool {
        let Ok(start) = usize::try_from(start) else {
            return false;
        };
        let Some(region) = start
            .checked_add(length)
            .and_then(|end| self.chars.get(start..end))
        else {
            return false;
        };

        criteria
            .iter()
            .any(|criterion| criterion.chars().eq(region.iter().copied()))
    }
}
