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
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::helper::{is_vowel, Word};
use crate::Encoder;

const SILENT_START: [&str; 5] = ["GN", "KN", "PN", "WR", "PS"];
const L_R_N_M_B_H_F_V_W_SPACE: [&str; 10] = ["L", "R", "N", "M", "B", "H", "F", "V", "W", " "];
const ES_EP_EB_EL_EY_IB_IL_IN_IE_EI_ER: [&str; 11] = [
    "ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER",
];
const L_T_K_S_N_M_B_Z: [&str; 8] = ["L", "T", "K", "S", "N", "M", "B", "Z"];

const DEFAULT_MAX_CODE_LENGTH: usize = 4;

/// The two codes produced by [DoubleMetaphone].
///
/// Both codes are bounded by the same maximum length. Every `append_*` method
/// silently truncates what doesn't fit, one call at a time: a two characters
/// append with a single slot left keeps its first character.
///
/// # Example
///
/// ```rust
/// use soundalike::DoubleMetaphoneResult;
///
/// let mut result = DoubleMetaphoneResult::new(4);
/// result.append("FLP");
/// result.append_pair("TS", "FX");
///
/// assert_eq!(result.primary(), "FLPT");
/// assert_eq!(result.alternate(), "FLPF");
/// assert!(result.is_complete());
/// ```
///
/// Deserialization rejects codes longer than `max_length`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct DoubleMetaphoneResult {
    primary: String,
    alternate: String,
    max_length: usize,
}

impl DoubleMetaphoneResult {
    /// Construct an empty result whose codes can't exceed `max_length` characters.
    pub fn new(max_length: usize) -> Self {
        Self {
            primary: String::with_capacity(max_length),
            alternate: String::with_capacity(max_length),
            max_length,
        }
    }

    /// Append `value` to both codes.
    pub fn append(&mut self, value: &str) {
        self.append_primary(value);
        self.append_alternate(value);
    }

    /// Append `primary` to the primary code and `alternate` to the alternate code.
    pub fn append_pair(&mut self, primary: &str, alternate: &str) {
        self.append_primary(primary);
        self.append_alternate(alternate);
    }

    /// Append `value` to the primary code only.
    pub fn append_primary(&mut self, value: &str) {
        Self::append_truncated(&mut self.primary, self.max_length, value);
    }

    /// Append `value` to the alternate code only.
    pub fn append_alternate(&mut self, value: &str) {
        Self::append_truncated(&mut self.alternate, self.max_length, value);
    }

    fn append_truncated(code: &mut String, max_length: usize, value: &str) {
        let room = max_length.saturating_sub(code.chars().count());
        code.extend(value.chars().take(room));
    }

    /// Primary code, the most common pronunciation.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Alternate code, equal to the primary one when there is a single pronunciation.
    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    /// Return `true` once both codes reached the maximum length.
    pub fn is_complete(&self) -> bool {
        self.primary.chars().count() >= self.max_length
            && self.alternate.chars().count() >= self.max_length
    }
}

impl<'de> Deserialize<'de> for DoubleMetaphoneResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Unchecked {
            primary: String,
            alternate: String,
            max_length: usize,
        }

        let Unchecked {
            primary,
            alternate,
            max_length,
        } = Unchecked::deserialize(deserializer)?;
        for code in [&primary, &alternate] {
            let length = code.chars().count();
            if length > max_length {
                return Err(de::Error::custom(format!(
                    "code {} has {} characters, maximum is {}",
                    code, length, max_length
                )));
            }
        }

        Ok(Self {
            primary,
            alternate,
            max_length,
        })
    }
}

/// This is the [Double Metaphone](https://en.wikipedia.org/wiki/Metaphone#Double_Metaphone) implementation of [Encoder].
///
/// Double Metaphone computes two codes for a word : a primary one and an
/// alternate one, for words that have two plausible pronunciations
/// (anglicized or from their language of origin). [Encoder::encode] returns
/// the primary code.
///
/// It takes a maximum code length for the `new` constructor and has a [Default]
/// implementation with a maximum code length of 4.
///
/// # Example
///
/// ```rust
/// use soundalike::{DoubleMetaphone, Encoder};
///
/// let double_metaphone = DoubleMetaphone::default();
///
/// assert_eq!(double_metaphone.encode("Smith"), "SM0");
/// assert_eq!(double_metaphone.encode_alternate("Smith"), "XMT");
///
/// let result = double_metaphone.double_metaphone("Filipowicz").unwrap();
/// assert_eq!(result.primary(), "FLPT");
/// assert_eq!(result.alternate(), "FLPF");
///
/// assert!(double_metaphone.double_metaphone("  ").is_none());
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DoubleMetaphone {
    max_code_length: usize,
}

impl DoubleMetaphone {
    /// Construct a new [DoubleMetaphone] with the maximum code length provided.
    ///
    /// # Parameter
    ///
    /// * `max_code_length` : the maximum length of both codes.
    pub fn new(max_code_length: usize) -> Self {
        Self { max_code_length }
    }

    /// Compute both codes of `value`.
    ///
    /// # Return
    ///
    /// `None` if `value` is empty or only made of whitespaces, the codes otherwise.
    /// A word made of characters that are never coded (digits, punctuation...)
    /// gives empty codes, not `None`.
    pub fn double_metaphone(&self, value: &str) -> Option<DoubleMetaphoneResult> {
        let word = Word::normalize(value)?;
        let mut scanner = Scanner {
            slavo_germanic: is_slavo_germanic(&word),
            word: &word,
            result: DoubleMetaphoneResult::new(self.max_code_length),
        };

        let mut index = if is_silent_start(&word) { 1 } else { 0 };
        while !scanner.result.is_complete() && index <= word.last_index() {
            index = scanner.step(index);
        }

        Some(scanner.result)
    }

    /// Return the alternate code of `value`, or an empty string if there is no word.
    pub fn encode_alternate(&self, value: &str) -> String {
        self.double_metaphone(value)
            .map(|result| result.alternate)
            .unwrap_or_default()
    }

    /// Check that two strings have the same primary code, or the same alternate
    /// code if `alternate` is `true`.
    pub fn is_double_metaphone_equal(&self, first: &str, second: &str, alternate: bool) -> bool {
        if alternate {
            self.encode_alternate(first) == self.encode_alternate(second)
        } else {
            self.encode(first) == self.encode(second)
        }
    }
}

/// [Default] implementation with a `max_code_length` of 4.
impl Default for DoubleMetaphone {
    fn default() -> Self {
        Self {
            max_code_length: DEFAULT_MAX_CODE_LENGTH,
        }
    }
}

impl Encoder for DoubleMetaphone {
    fn encode(&self, s: &str) -> String {
        self.double_metaphone(s)
            .map(|result| result.primary)
            .unwrap_or_default()
    }
}

/// A word is considered slavo-germanic if it contains any of `W`, `K`, `CZ` or `WITZ`.
fn is_slavo_germanic(word: &Word) -> bool {
    let text = word.as_str();
    text.contains('W') || text.contains('K') || text.contains("CZ") || text.contains("WITZ")
}

fn is_silent_start(word: &Word) -> bool {
    SILENT_START
        .iter()
        .any(|prefix| word.as_str().starts_with(prefix))
}

/// State of one encoding : the word, its flags and the codes built so far.
///
/// Every handler receives the current index, appends zero or more characters
/// and returns the next index, which is always greater.
struct Scanner<'a> {
    word: &'a Word,
    slavo_germanic: bool,
    result: DoubleMetaphoneResult,
}

impl<'a> Scanner<'a> {
    fn step(&mut self, index: isize) -> isize {
        match self.word.char_at(index) {
            Some('A' | 'E' | 'I' | 'O' | 'U' | 'Y') => self.handle_aeiouy(index),
            Some('B') => self.handle_doubled('B', "P", index),
            // C with a cedilla
            Some('\u{00C7}') => {
                self.result.append("S");
                index + 1
            }
            Some('C') => self.handle_c(index),
            Some('D') => self.handle_d(index),
            Some('F') => self.handle_doubled('F', "F", index),
            Some('G') => self.handle_g(index),
            Some('H') => self.handle_h(index),
            Some('J') => self.handle_j(index),
            Some('K') => self.handle_doubled('K', "K", index),
            Some('L') => self.handle_l(index),
            Some('M') => {
                self.result.append("M");
                if condition_m0(self.word, index) {
                    index + 2
                } else {
                    index + 1
                }
            }
            Some('N') => self.handle_doubled('N', "N", index),
            // Spanish ene
            Some('\u{00D1}') => {
                self.result.append("N");
                index + 1
            }
            Some('P') => self.handle_p(index),
            Some('Q') => self.handle_doubled('Q', "K", index),
            Some('R') => self.handle_r(index),
            Some('S') => self.handle_s(index),
            Some('T') => self.handle_t(index),
            Some('V') => self.handle_doubled('V', "F", index),
            Some('W') => self.handle_w(index),
            Some('X') => self.handle_x(index),
            Some('Z') => self.handle_z(index),
            _ => index + 1,
        }
    }

    fn next_is(&self, index: isize, ch: char) -> bool {
        self.word.char_at(index + 1) == Some(ch)
    }

    /// Letters coded the same way alone or doubled.
    fn handle_doubled(&mut self, letter: char, code: &str, index: isize) -> isize {
        self.result.append(code);
        if self.next_is(index, letter) {
            index + 2
        } else {
            index + 1
        }
    }

    fn handle_aeiouy(&mut self, index: isize) -> isize {
        if index == 0 {
            self.result.append("A");
        }
        index + 1
    }

    fn handle_c(&mut self, index: isize) -> isize {
        let word = self.word;

        if condition_c0(word, index) {
            self.result.append("K");
            index + 2
        } else if index == 0 && word.contains(index, 6, &["CAESAR"]) {
            self.result.append("S");
            index + 2
        } else if word.contains(index, 2, &["CH"]) {
            self.handle_ch(index)
        } else if word.contains(index, 2, &["CZ"]) && !word.contains(index - 2, 4, &["WICZ"]) {
            // "Czerny"
            self.result.append_pair("S", "X");
            index + 2
        } else if word.contains(index + 1, 3, &["CIA"]) {
            // "focaccia"
            self.result.append("X");
            index + 3
        } else if word.contains(index, 2, &["CC"]) && !(index == 1 && word.char_at(0) == Some('M'))
        {
            // double "cc" but not "McClelland"
            self.handle_cc(index)
        } else if word.contains(index, 2, &["CK", "CG", "CQ"]) {
            self.result.append("K");
            index + 2
        } else if word.contains(index, 2, &["CI", "CE", "CY"]) {
            // Italian vs. English
            if word.contains(index, 3, &["CIO", "CIE", "CIA"]) {
                self.result.append_pair("S", "X");
            } else {
                self.result.append("S");
            }
            index + 2
        } else {
            self.result.append("K");
            if word.contains(index + 1, 2, &[" C", " Q", " G"]) {
                // "Mac Caffrey", "Mac Gregor"
                index + 3
            } else if word.contains(index + 1, 1, &["C", "K", "Q"])
                && !word.contains(index + 1, 2, &["CE", "CI"])
            {
                index + 2
            } else {
                index + 1
            }
        }
    }

    fn handle_cc(&mut self, index: isize) -> isize {
        let word = self.word;

        if word.contains(index + 2, 1, &["I", "E", "H"]) && !word.contains(index + 2, 2, &["HU"]) {
            // "bellocchio" but not "bacchus"
            if (index == 1 && word.char_at(index - 1) == Some('A'))
                || word.contains(index - 1, 5, &["UCCEE", "UCCES"])
            {
                // "accident", "accede", "succeed"
                self.result.append("KS");
            } else {
                // "bacci", "bertucci", other Italian
                self.result.append("X");
            }
            index + 3
        } else {
            // Pierce's rule
            self.result.append("K");
            index + 2
        }
    }

    fn handle_ch(&mut self, index: isize) -> isize {
        let word = self.word;

        if index > 0 && word.contains(index, 4, &["CHAE"]) {
            // "Michael"
            self.result.append_pair("K", "X");
        } else if condition_ch0(word, index) || condition_ch1(word, index) {
            // Greek roots ("chemistry", "chorus"), germanic, or 'ch' for 'kh' sound
            self.result.append("K");
        } else if index > 0 {
            if word.contains(0, 2, &["MC"]) {
                self.result.append("K");
            } else {
                self.result.append_pair("X", "K");
            }
        } else {
            self.result.append("X");
        }
        index + 2
    }

    fn handle_d(&mut self, index: isize) -> isize {
        let word = self.word;

        if word.contains(index, 2, &["DG"]) {
            if word.contains(index + 2, 1, &["I", "E", "Y"]) {
                // "edge"
                self.result.append("J");
                index + 3
            } else {
                // "edgar"
                self.result.append("TK");
                index + 2
            }
        } else if word.contains(index, 2, &["DT", "DD"]) {
            self.result.append("T");
            index + 2
        } else {
            self.result.append("T");
            index + 1
        }
    }

    fn handle_g(&mut self, index: isize) -> isize {
        let word = self.word;
        let slavo_germanic = self.slavo_germanic;

        if self.next_is(index, 'H') {
            self.handle_gh(index)
        } else if self.next_is(index, 'N') {
            if index == 1 && is_vowel(word.char_at(0)) && !slavo_germanic {
                self.result.append_pair("KN", "N");
            } else if !word.contains(index + 2, 2, &["EY"])
                && !self.next_is(index, 'Y')
                && !slavo_germanic
            {
                self.result.append_pair("N", "KN");
            } else {
                self.result.append("KN");
            }
            index + 2
        } else if word.contains(index + 1, 2, &["LI"]) && !slavo_germanic {
            self.result.append_pair("KL", "L");
            index + 2
        } else if index == 0
            && (self.next_is(index, 'Y')
                || word.contains(index + 1, 2, &ES_EP_EB_EL_EY_IB_IL_IN_IE_EI_ER))
        {
            // -ges-, -gep-, -gel-, -gie- at beginning
            self.result.append_pair("K", "J");
            index + 2
        } else if (word.contains(index + 1, 2, &["ER"]) || self.next_is(index, 'Y'))
            && !word.contains(0, 6, &["DANGER", "RANGER", "MANGER"])
            && !word.contains(index - 1, 1, &["E", "I"])
            && !word.contains(index - 1, 3, &["RGY", "OGY"])
        {
            // -ger-, -gy-
            self.result.append_pair("K", "J");
            index + 2
        } else if word.contains(index + 1, 1, &["E", "I", "Y"])
            || word.contains(index - 1, 4, &["AGGI", "OGGI"])
        {
            // Italian "biaggi"
            if is_germanic_prefix(word) || word.contains(index + 1, 2, &["ET"]) {
                self.result.append("K");
            } else if word.contains(index + 1, 4, &["IER"]) {
                self.result.append("J");
            } else {
                self.result.append_pair("J", "K");
            }
            index + 2
        } else if self.next_is(index, 'G') {
            self.result.append("K");
            index + 2
        } else {
            self.result.append("K");
            index + 1
        }
    }

    fn handle_gh(&mut self, index: isize) -> isize {
        let word = self.word;

        if index > 0 && !is_vowel(word.char_at(index - 1)) {
            self.result.append("K");
        } else if index == 0 {
            if word.char_at(index + 2) == Some('I') {
                self.result.append("J");
            } else {
                self.result.append("K");
            }
        } else if (index > 1 && word.contains(index - 2, 1, &["B", "H", "D"]))
            || (index > 2 && word.contains(index - 3, 1, &["B", "H", "D"]))
            || (index > 3 && word.contains(index - 4, 1, &["B", "H"]))
        {
            // Parker's rule (with some further refinements), "hugh"
        } else if index > 2
            && word.char_at(index - 1) == Some('U')
            && word.contains(index - 3, 1, &["C", "G", "L", "R", "T"])
        {
            // "laugh", "McLaughlin", "cough", "gough", "rough", "tough"
            self.result.append("F");
        } else if index > 0 && word.char_at(index - 1) != Some('I') {
            self.result.append("K");
        }
        index + 2
    }

    fn handle_h(&mut self, index: isize) -> isize {
        let word = self.word;

        // only keep if first & before vowel or between 2 vowels, also takes care of "HH"
        if (index == 0 || is_vowel(word.char_at(index - 1))) && is_vowel(word.char_at(index + 1))
        {
            self.result.append("H");
            index + 2
        } else {
            index + 1
        }
    }

    fn handle_j(&mut self, index: isize) -> isize {
        let word = self.word;

        if word.contains(index, 4, &["JOSE"]) || word.contains(0, 4, &["SAN "]) {
            // obvious Spanish, "Jose", "San Jacinto"
            if (index == 0 && word.char_at(index + 4) == Some(' '))
                || word.len() == 4
                || word.contains(0, 4, &["SAN "])
            {
                self.result.append("H");
            } else {
                self.result.append_pair("J", "H");
            }
            return index + 1;
        }

        if index == 0 {
            self.result.append_pair("J", "A");
        } else if is_vowel(word.char_at(index - 1))
            && !self.slavo_germanic
            && (self.next_is(index, 'A') || self.next_is(index, 'O'))
        {
            self.result.append_pair("J", "H");
        } else if index == word.last_index() {
            self.result.append_pair("J", " ");
        } else if !word.contains(index + 1, 1, &L_T_K_S_N_M_B_Z)
            && !word.contains(index - 1, 1, &["S", "K", "L"])
        {
            self.result.append("J");
        }

        if self.next_is(index, 'J') {
            index + 2
        } else {
            index + 1
        }
    }

    fn handle_l(&mut self, index: isize) -> isize {
        self.result.append("L");
        if self.next_is(index, 'L') {
            if condition_l0(self.word, index) {
                self.result.append_alternate(" ");
            }
            index + 2
        } else {
            index + 1
        }
    }

    fn handle_p(&mut self, index: isize) -> isize {
        if self.next_is(index, 'H') {
            self.result.append("F");
            index + 2
        } else {
            self.result.append("P");
            if self.word.contains(index + 1, 1, &["P", "B"]) {
                index + 2
            } else {
                index + 1
            }
        }
    }

    fn handle_r(&mut self, index: isize) -> isize {
        let word = self.word;

        // French, "rogier"
        if index == word.last_index()
            && !self.slavo_germanic
            && word.contains(index - 2, 2, &["IE"])
            && !word.contains(index - 4, 2, &["ME", "MA"])
        {
            self.result.append_alternate("R");
        } else {
            self.result.append("R");
        }

        if self.next_is(index, 'R') {
            index + 2
        } else {
            index + 1
        }
    }

    fn handle_s(&mut self, index: isize) -> isize {
        let word = self.word;

        if word.contains(index - 1, 3, &["ISL", "YSL"]) {
            // "island", "isle", "carlisle", "carlysle"
            index + 1
        } else if index == 0 && word.contains(index, 5, &["SUGAR"]) {
            self.result.append_pair("X", "S");
            index + 1
        } else if word.contains(index, 2, &["SH"]) {
            if word.contains(index + 1, 4, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
                // germanic
                self.result.append("S");
            } else {
                self.result.append("X");
            }
            index + 2
        } else if word.contains(index, 3, &["SIO", "SIA"]) || word.contains(index, 4, &["SIAN"]) {
            // Italian and Armenian
            if self.slavo_germanic {
                self.result.append("S");
            } else {
                self.result.append_pair("S", "X");
            }
            index + 3
        } else if (index == 0 && word.contains(index + 1, 1, &["M", "N", "L", "W"]))
            || word.contains(index + 1, 1, &["Z"])
        {
            // german & anglicisations, "smith" match "schmidt", "snider" match "schneider",
            // also -sz- in slavic languages although in hungarian it is pronounced "s"
            self.result.append_pair("S", "X");
            if word.contains(index + 1, 1, &["Z"]) {
                index + 2
            } else {
                index + 1
            }
        } else if word.contains(index, 2, &["SC"]) {
            self.handle_sc(index)
        } else {
            if index == word.last_index() && word.contains(index - 2, 2, &["AI", "OI"]) {
                // French, "resnais", "artois"
                self.result.append_alternate("S");
            } else {
                self.result.append("S");
            }
            if word.contains(index + 1, 1, &["S", "Z"]) {
                index + 2
            } else {
                index + 1
            }
        }
    }

    fn handle_sc(&mut self, index: isize) -> isize {
        let word = self.word;

        if word.char_at(index + 2) == Some('H') {
            // Schlesinger's rule
            if word.contains(index + 3, 2, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
                // Dutch origin, "school", "schooner"
                if word.contains(index + 3, 2, &["ER", "EN"]) {
                    // "schermerhorn", "schenker"
                    self.result.append_pair("X", "SK");
                } else {
                    self.result.append("SK");
                }
            } else if index == 0 && !is_vowel(word.char_at(3)) && word.char_at(3) != Some('W') {
                self.result.append_pair("X", "S");
            } else {
                self.result.append("X");
            }
        } else if word.contains(index + 2, 1, &["I", "E", "Y"]) {
            self.result.append("S");
        } else {
            self.result.append("SK");
        }
        index + 3
    }

    fn handle_t(&mut self, index: isize) -> isize {
        let word = self.word;

        if word.contains(index, 4, &["TION"]) || word.contains(index, 3, &["TIA", "TCH"]) {
            self.result.append("X");
            index + 3
        } else if word.contains(index, 2, &["TH"]) || word.contains(index, 3, &["TTH"]) {
            // "thomas", "thames" or germanic
            if word.contains(index + 2, 2, &["OM", "AM"]) || is_germanic_prefix(word) {
                self.result.append("T");
            } else {
                self.result.append_pair("0", "T");
            }
            index + 2
        } else {
            self.result.append("T");
            if word.contains(index + 1, 1, &["T", "D"]) {
                index + 2
            } else {
                index + 1
            }
        }
    }

    fn handle_w(&mut self, index: isize) -> isize {
        let word = self.word;

        if word.contains(index, 2, &["WR"]) {
            // can also be in the middle of a word
            self.result.append("R");
            return index + 2;
        }

        let next_is_vowel = is_vowel(word.char_at(index + 1));
        if index == 0 && (next_is_vowel || word.contains(index, 2, &["WH"])) {
            if next_is_vowel {
                // "Wasserman" should match "Vasserman"
                self.result.append_pair("A", "F");
            } else {
                // need "Uomo" to match "Womo"
                self.result.append("A");
            }
            index + 1
        } else if (index == word.last_index() && is_vowel(word.char_at(index - 1)))
            || word.contains(index - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
            || word.contains(0, 3, &["SCH"])
        {
            // "Arnow" should match "Arnoff"
            self.result.append_alternate("F");
            index + 1
        } else if word.contains(index, 4, &["WICZ", "WITZ"]) {
            // Polish, "filipowicz"
            self.result.append_pair("TS", "FX");
            index + 4
        } else {
            index + 1
        }
    }

    fn handle_x(&mut self, index: isize) -> isize {
        let word = self.word;

        if index == 0 {
            self.result.append("S");
            return index + 1;
        }

        let french_ending = index == word.last_index()
            && (word.contains(index - 3, 3, &["IAU", "EAU"])
                || word.contains(index - 2, 2, &["AU", "OU"]));
        if !french_ending {
            // not "breaux"
            self.result.append("KS");
        }

        if word.contains(index + 1, 1, &["C", "X"]) {
            index + 2
        } else {
            index + 1
        }
    }

    fn handle_z(&mut self, index: isize) -> isize {
        let word = self.word;

        if self.next_is(index, 'H') {
            // Chinese pinyin, "zhao"
            self.result.append("J");
            return index + 2;
        }

        if word.contains(index + 1, 2, &["ZO", "ZI", "ZA"])
            || (self.slavo_germanic && index > 0 && word.char_at(index - 1) != Some('T'))
        {
            self.result.append_pair("S", "TS");
        } else {
            self.result.append("S");
        }

        if self.next_is(index, 'Z') {
            index + 2
        } else {
            index + 1
        }
    }
}

/// Word starting with "VAN ", "VON " or "SCH".
fn is_germanic_prefix(word: &Word) -> bool {
    word.contains(0, 4, &["VAN ", "VON "]) || word.contains(0, 3, &["SCH"])
}

/// 'C' coded as 'K' : "chianti" or a consonant before "ach" ("bacher", "macher").
fn condition_c0(word: &Word, index: isize) -> bool {
    if word.contains(index, 4, &["CHIA"]) {
        true
    } else if index <= 1
        || is_vowel(word.char_at(index - 2))
        || !word.contains(index - 1, 3, &["ACH"])
    {
        false
    } else {
        let c = word.char_at(index + 2);
        (c != Some('I') && c != Some('E')) || word.contains(index - 2, 6, &["BACHER", "MACHER"])
    }
}

/// Greek roots at the start of the word, except "chore".
fn condition_ch0(word: &Word, index: isize) -> bool {
    index == 0
        && (word.contains(index + 1, 5, &["HARAC", "HARIS"])
            || word.contains(index + 1, 3, &["HOR", "HYM", "HIA", "HEM"]))
        && !word.contains(0, 5, &["CHORE"])
}

fn condition_ch1(word: &Word, index: isize) -> bool {
    is_germanic_prefix(word)
        || word.contains(index - 2, 6, &["ORCHES", "ARCHIT", "ORCHID"])
        || word.contains(index + 2, 1, &["T", "S"])
        || ((word.contains(index - 1, 1, &["A", "O", "U", "E"]) || index == 0)
            && (word.contains(index + 2, 1, &L_R_N_M_B_H_F_V_W_SPACE)
                || index + 1 == word.last_index()))
}

/// Spanish "-illo", "-illa", "-alle" endings.
fn condition_l0(word: &Word, index: isize) -> bool {
    if index == word.len() as isize - 3 && word.contains(index - 1, 4, &["ILLO", "ILLA", "ALLE"])
    {
        return true;
    }
    (word.contains(index - 1, 2, &["AS", "OS"]) || word.contains(word.last_index(), 1, &["A", "O"]))
        && word.contains(index - 1, 4, &["ALLE"])
}

/// "MM", or "UMB" at the end of the word or before "ER" ("dumb", "thumber").
fn condition_m0(word: &Word, index: isize) -> bool {
    if word.char_at(index + 1) == Some('M') {
        return true;
    }
    word.contains(index - 1, 3, &["UMB"])
        && (index + 1 == word.last_index() || word.contains(index + 2, 2, &["ER"]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_codes(data: Vec<(&str, &str, &str)>) {
        let double_metaphone = DoubleMetaphone::default();

        for (value, primary, alternate) in data {
            let result = double_metaphone.double_metaphone(value).unwrap();
            assert_eq!(
                result.primary(),
                primary,
                "Primary code of {} should be {}",
                value,
                primary
            );
            assert_eq!(
                result.alternate(),
                alternate,
                "Alternate code of {} should be {}",
                value,
                alternate
            );
        }
    }

    #[test]
    fn test_double_metaphone_basic() {
        check_codes(vec![
            ("testing", "TSTN", "TSTN"),
            ("The", "0", "T"),
            ("quick", "KK", "KK"),
            ("brown", "PRN", "PRN"),
            ("fox", "FKS", "FKS"),
            ("jumped", "JMPT", "AMPT"),
            ("over", "AFR", "AFR"),
            ("lazy", "LS", "LS"),
            ("dogs", "TKS", "TKS"),
        ]);
    }

    #[test]
    fn test_c_rules() {
        check_codes(vec![
            ("Caesar", "SSR", "SSR"),
            ("Michael", "MKL", "MXL"),
            ("Czerny", "SRN", "XRN"),
            ("focaccia", "FKX", "FKX"),
            ("bacchus", "PKS", "PKS"),
            ("accident", "AKST", "AKST"),
            ("bellocchio", "PLX", "PLX"),
            ("McClelland", "MKLL", "MKLL"),
            ("Mac Caffrey", "MKFR", "MKFR"),
            ("San Jacinto", "SNHS", "SNHS"),
        ]);
    }

    #[test]
    fn test_g_rules() {
        check_codes(vec![
            ("Ghislane", "JLN", "JLN"),
            ("hugh", "H", "H"),
            ("laugh", "LF", "LF"),
            ("tough", "TF", "TF"),
            ("Gough", "KF", "KF"),
            ("Biaggi", "PJ", "PK"),
            ("sugar", "XKR", "SKR"),
            ("Edgar", "ATKR", "ATKR"),
            ("edge", "AJ", "AJ"),
        ]);
    }

    #[test]
    fn test_s_rules() {
        check_codes(vec![
            ("Schmidt", "XMT", "SMT"),
            ("school", "SKL", "SKL"),
            ("Schenker", "XNKR", "SKNK"),
            ("Wasserman", "ASRM", "FSRM"),
            ("Resnais", "RSN", "RSNS"),
            ("island", "ALNT", "ALNT"),
        ]);
    }

    #[test]
    fn test_g_prefixes_and_doubles() {
        check_codes(vec![
            ("Agnes", "AKNS", "ANS"),
            ("Tagliaro", "TKLR", "TLR"),
            ("Gerald", "KRLT", "JRLT"),
            ("Berger", "PRKR", "PRJR"),
            ("Danger", "TNJR", "TNKR"),
            ("Laggan", "LKN", "LKN"),
        ]);
    }

    #[test]
    fn test_t_rules() {
        check_codes(vec![
            ("Thompson", "TMPS", "TMPS"),
            ("Thomas", "TMS", "TMS"),
            ("Nation", "NXN", "NXN"),
            ("Butcher", "PXR", "PXR"),
        ]);
    }

    #[test]
    fn test_s_clusters() {
        check_codes(vec![
            ("Mansion", "MNSN", "MNXN"),
            ("Persian", "PRSN", "PRXN"),
            // slavo-germanic, no alternate
            ("Kasia", "KS", "KS"),
            ("Mosheim", "MSM", "MSM"),
            ("Sholz", "SLS", "SLS"),
            ("Szabo", "SP", "XP"),
            ("Snider", "SNTR", "XNTR"),
            ("Scene", "SN", "SN"),
        ]);
    }

    #[test]
    fn test_x_r_z_rules() {
        check_codes(vec![
            ("Xavier", "SF", "SFR"),
            ("Rogier", "RJ", "RKR"),
            ("Mozart", "MSRT", "MSRT"),
            ("Kozlowski", "KSLS", "KTSL"),
        ]);
    }

    #[test]
    fn test_other_consonants() {
        check_codes(vec![
            ("Jose", "HS", "HS"),
            ("Arnow", "ARN", "ARNF"),
            ("Zhao", "J", "J"),
            ("Breaux", "PR", "PR"),
        ]);
    }

    #[test]
    fn test_double_l_spanish_ending() {
        check_codes(vec![("Trillo", "TRL", "TRL ")]);
    }

    #[test]
    fn test_accented_letters() {
        check_codes(vec![
            ("\u{00E7}", "S", "S"),
            ("\u{00F1}", "N", "N"),
            ("Mu\u{00F1}oz", "MNS", "MNS"),
        ]);
    }

    #[test]
    fn test_silent_start() {
        check_codes(vec![
            ("Knight", "NT", "NT"),
            ("Gnome", "NM", "NM"),
            ("Psalm", "SLM", "SLM"),
            ("Wrist", "RST", "RST"),
            ("Pneumonia", "NMN", "NMN"),
        ]);
    }

    #[test]
    fn test_truncation_per_append() {
        // "TS" is appended with a single slot left
        check_codes(vec![("Filipowicz", "FLPT", "FLPF")]);
    }

    #[test]
    fn test_similar_sounding() {
        let double_metaphone = DoubleMetaphone::default();

        assert!(double_metaphone.is_double_metaphone_equal("Smith", "Smyth", false));
        assert!(double_metaphone.is_double_metaphone_equal("Smith", "Smyth", true));
        assert!(!double_metaphone.is_double_metaphone_equal("Smith", "Schmidt", false));
        // the german pronunciation of one is the english pronunciation of the other
        assert_eq!(
            double_metaphone.encode_alternate("Smith"),
            double_metaphone.encode("Schmidt")
        );
    }

    #[test]
    fn test_no_word() {
        let double_metaphone = DoubleMetaphone::default();

        assert_eq!(double_metaphone.double_metaphone(""), None);
        assert_eq!(double_metaphone.double_metaphone(" \t\n\r "), None);
        assert_eq!(double_metaphone.encode(""), "");
        assert_eq!(double_metaphone.encode_alternate(""), "");
    }

    #[test]
    fn test_nothing_to_code() {
        let double_metaphone = DoubleMetaphone::default();

        let result = double_metaphone.double_metaphone("123-!?").unwrap();
        assert_eq!(result.primary(), "");
        assert_eq!(result.alternate(), "");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let double_metaphone = DoubleMetaphone::default();

        for value in ["Schenker", "filipowicz", "Accident", "ArNoW"] {
            let expected = double_metaphone.double_metaphone(&value.to_uppercase());
            assert_eq!(double_metaphone.double_metaphone(value), expected);
            assert_eq!(
                double_metaphone.double_metaphone(&value.to_lowercase()),
                expected
            );
            assert_eq!(
                double_metaphone.double_metaphone(&format!("  {}\t", value)),
                expected
            );
        }
    }

    #[test]
    fn test_codes_are_bounded() {
        let double_metaphone = DoubleMetaphone::default();

        for value in [
            "unconscious",
            "Jankelowicz",
            "Schwarzenegger",
            "Tchaikovsky",
            "Xochimilco",
            "Gallegos",
            "Pneumonoultramicroscopicsilicovolcanoconiosis",
        ] {
            let result = double_metaphone.double_metaphone(value).unwrap();
            assert!(result.primary().len() <= 4, "{:?}", result);
            assert!(result.alternate().len() <= 4, "{:?}", result);
        }
    }

    #[test]
    fn test_max_code_length() {
        let double_metaphone = DoubleMetaphone::new(6);

        let result = double_metaphone.double_metaphone("Filipowicz").unwrap();
        assert_eq!(result.primary(), "FLPTS");
        assert_eq!(result.alternate(), "FLPFX");
    }

    #[test]
    fn test_result_truncation() {
        let mut result = DoubleMetaphoneResult::new(4);

        result.append("KS");
        result.append_primary("XX");
        assert_eq!(result.primary(), "KSXX");
        assert_eq!(result.alternate(), "KS");
        assert!(!result.is_complete());

        result.append_pair("S", "TSX");
        assert_eq!(result.primary(), "KSXX");
        assert_eq!(result.alternate(), "KSTS");
        assert!(result.is_complete());
    }

    #[test]
    fn test_feature_detectors() {
        let slavo_germanic = |value: &str| is_slavo_germanic(&Word::normalize(value).unwrap());
        let silent_start = |value: &str| is_silent_start(&Word::normalize(value).unwrap());

        assert!(slavo_germanic("Wagner"));
        assert!(slavo_germanic("Kowalski"));
        assert!(slavo_germanic("Czerny"));
        assert!(!slavo_germanic("Smith"));

        for value in ["gnome", "knight", "pneumonia", "wrist", "psalm"] {
            assert!(silent_start(value), "{} should start silently", value);
        }
        assert!(!silent_start("nag"));
        assert!(!silent_start("sponge"));
    }

    #[test]
    fn test_conditions_at_word_boundaries() {
        let word = Word::normalize("Chianti").unwrap();
        assert!(condition_c0(&word, 0));

        let word = Word::normalize("Bacher").unwrap();
        assert!(condition_c0(&word, 2));
        let word = Word::normalize("Ach").unwrap();
        assert!(!condition_c0(&word, 1));

        let word = Word::normalize("Chorus").unwrap();
        assert!(condition_ch0(&word, 0));
        let word = Word::normalize("Chore").unwrap();
        assert!(!condition_ch0(&word, 0));

        // "CH" ending the word
        let word = Word::normalize("Bach").unwrap();
        assert!(condition_ch1(&word, 2));

        let word = Word::normalize("Trillo").unwrap();
        assert!(condition_l0(&word, 3));

        let word = Word::normalize("Dumb").unwrap();
        assert!(condition_m0(&word, 2));
        let word = Word::normalize("Dumbo").unwrap();
        assert!(!condition_m0(&word, 2));
    }

    #[test]
    fn test_result_from_json() {
        let result: DoubleMetaphoneResult =
            serde_json::from_str(r#"{"primary":"SM0","alternate":"XMT","max_length":4}"#).unwrap();
        assert_eq!(result.primary(), "SM0");
        assert_eq!(result.alternate(), "XMT");

        let result = DoubleMetaphone::default().double_metaphone("Filipowicz").unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            serde_json::from_str::<DoubleMetaphoneResult>(&json).unwrap(),
            result
        );
    }

    #[test]
    fn test_result_from_json_longer_than_max_length() {
        let result = serde_json::from_str::<DoubleMetaphoneResult>(
            r#"{"primary":"ABCDEFG","alternate":"","max_length":4}"#,
        );
        assert!(result.is_err());

        let result = serde_json::from_str::<DoubleMetaphoneResult>(
            r#"{"primary":"","alternate":"ABCDE","max_length":4}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_json() {
        let double_metaphone: DoubleMetaphone =
            serde_json::from_str(r#"{"max_code_length":6}"#).unwrap();

        assert_eq!(double_metaphone, DoubleMetaphone::new(6));
    }
}
