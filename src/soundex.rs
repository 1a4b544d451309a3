/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
use serde::{Deserialize, Serialize};

use crate::{Encoder, PhoneticError};

const CODE_LENGTH: usize = 4;
const NOT_CODED: char = '0';

/// This is the default mapping character for soundex.
/// * `A` is encoded into `0`
/// * `B` is encoded into `1`
/// * `C` is encoded into `2`
/// * `D` is encoded into `3`
/// * `E` is encoded into `0`
/// * ...etc
///
/// `0` is never part of the code but it separates identical digits, so
/// vowels, `H`, `W` and `Y` all break a run.
pub const DEFAULT_US_ENGLISH_MAPPING_SOUNDEX: [char; 26] = [
    '0', '1', '2', '3', '0', '1', '2', '0', '0', '2', '2', '4', '5', '5', '0', '1', '2', '6', '2',
    '3', '0', '1', '0', '2', '0', '2',
];

/// This is the [Soundex](https://en.wikipedia.org/wiki/Soundex) implementation of [Encoder].
///
/// The code always has a length of 4 : the first letter of the word followed by
/// three digits, padded with `0`. Any character outside `A-Z` (after upper-casing)
/// is coded as `0`.
///
/// # Example :
///
/// ```rust
/// use soundalike::{Encoder, Soundex};
///
/// let soundex = Soundex::default();
/// assert_eq!(soundex.encode("Robert"), "R163");
/// assert_eq!(soundex.encode("Rupert"), "R163");
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Soundex {
    mapping: [char; 26],
}

impl Soundex {
    /// Construct a new [Soundex] with the provided mapping.
    ///
    /// There are implementations of [TryFrom] for convenience.
    ///
    /// # Parameter
    ///
    /// * `mapping` : mapping array. It contains, for each letter its corresponding code. Index 0 is the code for `A`, index 1
    ///   is for `B`and so on for each letter of the latin alphabet.
    pub fn new(mapping: [char; 26]) -> Self {
        Self { mapping }
    }

    fn get_mapping_code(&self, ch: char) -> char {
        if ch.is_ascii_uppercase() {
            self.mapping[(ch as u8 - b'A') as usize]
        } else {
            NOT_CODED
        }
    }
}

/// This is the [Default] implementation for [Soundex], it returns an instance
/// with [DEFAULT_US_ENGLISH_MAPPING_SOUNDEX].
impl Default for Soundex {
    fn default() -> Self {
        Self {
            mapping: DEFAULT_US_ENGLISH_MAPPING_SOUNDEX,
        }
    }
}

impl From<[char; 26]> for Soundex {
    fn from(mapping: [char; 26]) -> Self {
        Self::new(mapping)
    }
}

impl TryFrom<&str> for Soundex {
    type Error = PhoneticError;

    /// Construct a [Soundex] from the mapping in parameter. This [str] will
    /// be converted into an array of 26 chars, so `mapping`'s length must be 26.
    ///
    /// # Parameters
    ///
    /// * `mapping` : str that contains the corresponding code for each character.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), soundalike::PhoneticError> {
    /// use soundalike::{Encoder, Soundex};
    ///
    /// // Construct an encoder with 'A' coded into '0', 'B' into '1', 'C' into '3', 'D' into '6', 'E' into '0', ...etc
    /// let soundex = Soundex::try_from("01360240043788015936020505")?;
    ///
    /// assert_eq!(soundex.encode("jumped"), "J816");
    /// #    Ok(())
    /// # }
    /// ```
    fn try_from(mapping: &str) -> Result<Self, Self::Error> {
        let mapping: [char; 26] = mapping
            .chars()
            .collect::<Vec<char>>()
            .try_into()
            .map_err(|chars: Vec<char>| {
                PhoneticError::InvalidMapping(format!(
                    "expected 26 characters, got {} : {}",
                    chars.len(),
                    chars.iter().collect::<String>()
                ))
            })?;
        Ok(Self::new(mapping))
    }
}

impl TryFrom<String> for Soundex {
    type Error = PhoneticError;

    fn try_from(mapping: String) -> Result<Self, Self::Error> {
        Self::try_from(mapping.as_str())
    }
}

impl Encoder for Soundex {
    fn encode(&self, value: &str) -> String {
        let value = value.to_uppercase();
        let mut iterator = value.chars();
        let Some(first) = iterator.next() else {
            return String::new();
        };

        let mut code = String::with_capacity(CODE_LENGTH);
        code.push(first);
        let mut previous = self.get_mapping_code(first);
        for ch in iterator {
            if code.chars().count() == CODE_LENGTH {
                break;
            }
            let digit = self.get_mapping_code(ch);
            if digit != previous && digit != NOT_CODED {
                code.push(digit);
            }
            previous = digit;
        }

        while code.chars().count() < CODE_LENGTH {
            code.push(NOT_CODED);
        }

        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_encoding(data: Vec<&str>, expected: &str) {
        let soundex = Soundex::default();

        for v in data {
            assert_eq!(
                soundex.encode(v),
                expected,
                "Encoding {} should return {}",
                v,
                expected
            );
        }
    }

    #[test]
    fn test_b650() {
        let data = vec![
            "BARHAM", "BARONE", "BARRON", "BERNA", "BIRNEY", "BIRNIE", "BOOROM", "BOREN", "BORN",
            "BOURN", "BOURNE", "BRAIN", "BRAME", "BRANN", "BRAUN", "BREEN", "BRIEN", "BRIM",
            "BRINN", "BRION", "BROOM", "BROWN", "BRUEN", "BRUHN", "BRUIN", "BRUN", "BRYAN",
            "BURIAN", "BURN", "BYRNE", "BYRON",
        ];

        check_encoding(data, "B650");
    }

    #[test]
    fn test_encode_basic() {
        let soundex = Soundex::default();

        assert_eq!(soundex.encode("testing"), "T235");
        assert_eq!(soundex.encode("The"), "T000");
        assert_eq!(soundex.encode("quick"), "Q200");
        assert_eq!(soundex.encode("brown"), "B650");
        assert_eq!(soundex.encode("fox"), "F200");
        assert_eq!(soundex.encode("jumped"), "J513");
        assert_eq!(soundex.encode("over"), "O160");
        assert_eq!(soundex.encode("lazy"), "L200");
        assert_eq!(soundex.encode("dogs"), "D200");
    }

    #[test]
    fn test_wikipedia_american_soundex() {
        let soundex = Soundex::default();

        assert_eq!(soundex.encode("Robert"), "R163");
        assert_eq!(soundex.encode("Rupert"), "R163");
        assert_eq!(soundex.encode("Tymczak"), "T522");
        assert_eq!(soundex.encode("Pfister"), "P236");
        assert_eq!(soundex.encode("Jackson"), "J250");
        assert_eq!(soundex.encode("Washington"), "W252");
        assert_eq!(soundex.encode("Gutierrez"), "G362");
        assert_eq!(soundex.encode("McDonnell"), "M235");
    }

    #[test]
    fn test_h_and_w_separate_duplicates() {
        let soundex = Soundex::default();

        assert_eq!(soundex.encode("Ashcraft"), "A226");
        assert_eq!(soundex.encode("Burroughs"), "B622");
    }

    #[test]
    fn test_short_words_are_padded() {
        let soundex = Soundex::default();

        assert_eq!(soundex.encode("Lee"), "L000");
        assert_eq!(soundex.encode("a"), "A000");
        assert_eq!(soundex.encode("Smith"), "S530");
        assert_eq!(soundex.encode("Smythe"), "S530");
    }

    #[test]
    fn test_non_letters_are_not_coded() {
        let soundex = Soundex::default();

        assert_eq!(soundex.encode("HOL>MES"), "H452");
        assert_eq!(soundex.encode("HOLMES"), "H452");
        assert_eq!(soundex.encode("O'Brien"), "O165");
    }

    #[test]
    fn test_empty() {
        let soundex = Soundex::default();

        assert_eq!(soundex.encode(""), "");
    }

    #[test]
    fn test_try_from_str() -> Result<(), PhoneticError> {
        let result = Soundex::try_from("01230120022455012623010202")?;
        assert_eq!(result, Soundex::default());

        Ok(())
    }

    #[test]
    fn test_try_from_wrong_length() {
        let result = Soundex::try_from("0123");

        assert_eq!(
            result,
            Err(PhoneticError::InvalidMapping(
                "expected 26 characters, got 4 : 0123".to_string()
            ))
        );
    }

    #[test]
    fn test_custom_mapping() -> Result<(), PhoneticError> {
        let soundex = Soundex::try_from(String::from("01360240043788015936020505"))?;

        assert_eq!(soundex.encode("jumped"), "J816");

        Ok(())
    }
}
