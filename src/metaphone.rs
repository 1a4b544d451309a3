use serde::{Deserialize, Serialize};

use crate::helper::{is_vowel, Word};
use crate::Encoder;

const FRONTV: [char; 3] = ['E', 'I', 'Y'];
const VARSON: [char; 5] = ['C', 'S', 'P', 'T', 'G'];

/// This the [Metaphone](https://en.wikipedia.org/wiki/Metaphone) implementation of [Encoder].
///
/// It takes a maximum code length for the `new` constructor and has
/// a [Default] implementation with a maximum code length of 4.
///
/// Input is trimmed and upper-cased. An empty input gives an empty code, a
/// single character is returned upper-cased.
///
/// # Example
///
/// ```rust
/// use soundalike::{Encoder, Metaphone};
/// let metaphone = Metaphone::default();
///
/// assert_eq!(metaphone.encode("Joanne"), "JN");
/// assert_eq!(metaphone.encode(""), "");
/// assert_eq!(metaphone.encode("a"), "A");
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Metaphone {
    max_code_length: usize,
}

impl Metaphone {
    /// Construct a new [Metaphone] with the maximum code length provided.
    ///
    /// # Parameter
    ///
    /// * `max_code_length` : the maximum code length.
    pub fn new(max_code_length: usize) -> Self {
        Self { max_code_length }
    }

    /// Drop or rewrite the first letter of "KN", "GN", "PN", "AE", "WR",
    /// "WH" and leading "X".
    fn fix_initials(word: &[char]) -> Vec<char> {
        match word {
            ['K' | 'G' | 'P', 'N', ..] | ['A', 'E', ..] | ['W', 'R', ..] => word[1..].to_vec(),
            ['W', 'H', rest @ ..] => std::iter::once('W').chain(rest.iter().copied()).collect(),
            ['X', rest @ ..] => std::iter::once('S').chain(rest.iter().copied()).collect(),
            _ => word.to_vec(),
        }
    }

    fn char_at(text: &[char], index: usize) -> Option<char> {
        text.get(index).copied()
    }

    fn is_vowel(text: &[char], index: usize) -> bool {
        is_vowel(Self::char_at(text, index))
    }

    fn is_front_vowel(text: &[char], index: usize) -> bool {
        matches!(Self::char_at(text, index), Some(ch) if FRONTV.contains(&ch))
    }

    fn is_previous_char(text: &[char], index: usize, ch: char) -> bool {
        index > 0 && Self::char_at(text, index - 1) == Some(ch)
    }

    fn is_next_char(text: &[char], index: usize, ch: char) -> bool {
        Self::char_at(text, index + 1) == Some(ch)
    }

    fn region_match(text: &[char], index: usize, test: &str) -> bool {
        text.get(index..)
            .map(|rest| rest.iter().copied().take(test.len()).eq(test.chars()))
            .unwrap_or(false)
    }

    fn is_last_char(wdsz: usize, n: usize) -> bool {
        n + 1 == wdsz
    }
}

/// [Default] implementation with a `max_code_length` of 4.
impl Default for Metaphone {
    fn default() -> Self {
        Self { max_code_length: 4 }
    }
}

impl Encoder for Metaphone {
    fn encode(&self, value: &str) -> String {
        let Some(word) = Word::normalize(value) else {
            return String::new();
        };
        if word.len() == 1 {
            return word.as_str().to_string();
        }

        let local = Metaphone::fix_initials(word.chars());
        let wdsz = local.len();

        let mut code = String::with_capacity(self.max_code_length + 1);
        let mut skip = 0;
        for (index, symb) in local.iter().copied().enumerate() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            if code.len() >= self.max_code_length {
                break;
            }
            // Duplicate letters except 'C'
            if symb != 'C' && Metaphone::is_previous_char(&local, index, symb) {
                continue;
            }

            match symb {
                'A' | 'E' | 'I' | 'O' | 'U' => {
                    if index == 0 {
                        code.push(symb);
                    }
                }
                'B' => {
                    // Silent in final "MB"
                    if !Metaphone::is_previous_char(&local, index, 'M')
                        || !Metaphone::is_last_char(wdsz, index)
                    {
                        code.push(symb);
                    }
                }
                'C' => {
                    let front_vowel_next = !Metaphone::is_last_char(wdsz, index)
                        && Metaphone::is_front_vowel(&local, index + 1);
                    if Metaphone::is_previous_char(&local, index, 'S') && front_vowel_next {
                        // "SCI", "SCE", "SCY"
                    } else if Metaphone::region_match(&local, index, "CIA") {
                        code.push('X');
                    } else if front_vowel_next {
                        code.push('S');
                    } else if Metaphone::is_previous_char(&local, index, 'S')
                        && Metaphone::is_next_char(&local, index, 'H')
                    {
                        code.push('K');
                    } else if Metaphone::is_next_char(&local, index, 'H') {
                        if index == 0 && wdsz >= 3 && Metaphone::is_vowel(&local, 2) {
                            code.push('K');
                        } else {
                            code.push('X');
                        }
                    } else {
                        code.push('K');
                    }
                }
                'D' => {
                    // "DGE", "DGI", "DGY"
                    if !Metaphone::is_last_char(wdsz, index + 1)
                        && Metaphone::is_next_char(&local, index, 'G')
                        && Metaphone::is_front_vowel(&local, index + 2)
                    {
                        code.push('J');
                        skip = 2;
                    } else {
                        code.push('T');
                    }
                }
                'G' => {
                    let gh_silent = Metaphone::is_next_char(&local, index, 'H')
                        && (Metaphone::is_last_char(wdsz, index + 1)
                            || !Metaphone::is_vowel(&local, index + 2));
                    let gn_silent = index > 0
                        && (Metaphone::region_match(&local, index, "GN")
                            || Metaphone::region_match(&local, index, "GNED"));
                    if !gh_silent && !gn_silent {
                        let hard = Metaphone::is_previous_char(&local, index, 'G');
                        if !Metaphone::is_last_char(wdsz, index)
                            && Metaphone::is_front_vowel(&local, index + 1)
                            && !hard
                        {
                            code.push('J');
                        } else {
                            code.push('K');
                        }
                    }
                }
                'H' => {
                    let after_varson = index > 0
                        && matches!(
                            Metaphone::char_at(&local, index - 1),
                            Some(ch) if VARSON.contains(&ch)
                        );
                    if !Metaphone::is_last_char(wdsz, index)
                        && !after_varson
                        && Metaphone::is_vowel(&local, index + 1)
                    {
                        code.push('H');
                    }
                }
                'F' | 'J' | 'L' | 'M' | 'N' | 'R' => code.push(symb),
                'K' => {
                    if index == 0 || !Metaphone::is_previous_char(&local, index, 'C') {
                        code.push(symb);
                    }
                }
                'P' => {
                    if Metaphone::is_next_char(&local, index, 'H') {
                        code.push('F');
                    } else {
                        code.push(symb);
                    }
                }
                'Q' => code.push('K'),
                'S' => {
                    if Metaphone::region_match(&local, index, "SH")
                        || Metaphone::region_match(&local, index, "SIO")
                        || Metaphone::region_match(&local, index, "SIA")
                    {
                        code.push('X');
                    } else {
                        code.push('S');
                    }
                }
                'T' => {
                    if Metaphone::region_match(&local, index, "TIA")
                        || Metaphone::region_match(&local, index, "TIO")
                    {
                        code.push('X');
                    } else if Metaphone::region_match(&local, index, "TCH") {
                        // Silent in "TCH"
                    } else if Metaphone::region_match(&local, index, "TH") {
                        // '0' looks like theta
                        code.push('0');
                    } else {
                        code.push('T');
                    }
                }
                'V' => code.push('F'),
                'W' | 'Y' => {
                    if !Metaphone::is_last_char(wdsz, index)
                        && Metaphone::is_vowel(&local, index + 1)
                    {
                        code.push(symb);
                    }
                }
                'X' => code.push_str("KS"),
                'Z' => code.push('S'),
                _ => {
                    // Doing nothing
                }
            }

            code.truncate(self.max_code_length);
        }

        code
    }
}
