// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::Rng;

/// Punctuation stripped from a hidden word to produce its expected answer.
pub const STRIPPED_PUNCTUATION: [char; 6] = ['|', '।', '॥', ',', '?', '-'];

// Only words longer than this many characters are candidates for hiding.
const MIN_HIDDEN_LEN: usize = 2;

// Masking is rejection-sampled: a draw that hides nothing is retried. The
// cap guarantees termination on pathological input.
const MAX_ATTEMPTS: usize = 100;

/// One element of a masked line: either a literal word, or a blank holding
/// an index into the slot list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Blank(usize),
}

/// A masked word: its position in the word sequence and the answer the user
/// is expected to type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlankSlot {
    pub position: usize,
    pub answer: String,
}

/// Hide a random selection of words in a line of text.
///
/// Returns the line as a sequence of segments plus the ordered blank slots.
/// Multi-word input always yields at least one slot, provided any word is
/// eligible; single-word and empty input yield zero slots.
pub fn mask(text: &str, rng: &mut impl Rng) -> (Vec<Segment>, Vec<BlankSlot>) {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() <= 1 {
        let segments = words
            .iter()
            .map(|word| Segment::Literal(word.to_string()))
            .collect();
        return (segments, Vec::new());
    }
    for _ in 0..MAX_ATTEMPTS {
        let (segments, slots) = mask_once(&words, rng);
        if !slots.is_empty() {
            return (segments, slots);
        }
    }
    force_first_eligible(&words)
}

fn mask_once(words: &[&str], rng: &mut impl Rng) -> (Vec<Segment>, Vec<BlankSlot>) {
    let mut segments = Vec::with_capacity(words.len());
    let mut slots = Vec::new();
    for (position, word) in words.iter().enumerate() {
        let hide = word.chars().count() > MIN_HIDDEN_LEN && rng.gen_bool(0.5);
        if hide {
            let answer = strip_punctuation(word);
            if answer.is_empty() {
                // A word that strips to nothing would make a degenerate
                // blank. Render it literally.
                segments.push(Segment::Literal(word.to_string()));
            } else {
                segments.push(Segment::Blank(slots.len()));
                slots.push(BlankSlot { position, answer });
            }
        } else {
            segments.push(Segment::Literal(word.to_string()));
        }
    }
    (segments, slots)
}

// Termination fallback after the retry cap: hide the first word that can
// carry a blank, render everything else literally.
fn force_first_eligible(words: &[&str]) -> (Vec<Segment>, Vec<BlankSlot>) {
    let mut segments = Vec::with_capacity(words.len());
    let mut slots = Vec::new();
    for (position, word) in words.iter().enumerate() {
        let answer = strip_punctuation(word);
        if slots.is_empty() && word.chars().count() > MIN_HIDDEN_LEN && !answer.is_empty() {
            segments.push(Segment::Blank(0));
            slots.push(BlankSlot { position, answer });
        } else {
            segments.push(Segment::Literal(word.to_string()));
        }
    }
    (segments, slots)
}

fn strip_punctuation(word: &str) -> String {
    word.chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}
