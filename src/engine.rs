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
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Fallible;
use crate::error::QuizError;
use crate::error::fail;
use crate::mask::BlankSlot;
use crate::mask::Segment;
use crate::mask::mask;
use crate::matcher;
use crate::matching::MatchOutcome;
use crate::matching::MatchingRound;
use crate::types::question_type::QuestionType;
use crate::types::verse::Verse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    ShlokToMeaning,
    MeaningToShlok,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlankTarget {
    Shlok,
    Meaning,
}

/// What the presentation layer should render for the current question. The
/// engine never renders anything itself.
#[derive(Clone, Debug)]
pub enum QuestionPayload {
    Flashcard {
        orientation: Orientation,
        prompt: String,
        number: String,
    },
    GuessNumber {
        shlok: String,
    },
    FillBlanks {
        target: BlankTarget,
        segments: Vec<Segment>,
        slots: Vec<BlankSlot>,
        /// Shown alongside meaning blanks to anchor the verse.
        number: Option<String>,
    },
    Matching(MatchingRound),
}

impl QuestionPayload {
    pub fn heading(&self) -> &'static str {
        match self {
            QuestionPayload::Flashcard {
                orientation: Orientation::ShlokToMeaning,
                ..
            } => "Recall Meaning",
            QuestionPayload::Flashcard {
                orientation: Orientation::MeaningToShlok,
                ..
            } => "Recall Shlok",
            QuestionPayload::GuessNumber { .. } => "What is the verse number?",
            QuestionPayload::FillBlanks {
                target: BlankTarget::Shlok,
                ..
            } => "Complete the Shlok",
            QuestionPayload::FillBlanks {
                target: BlankTarget::Meaning,
                ..
            } => "Complete the Meaning",
            QuestionPayload::Matching(_) => "Match Shlok to Meaning",
        }
    }
}

/// The outcome of a verse-number guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    pub correct: bool,
    pub correct_value: String,
}

/// The outcome of grading fill-in-the-blank answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillOutcome {
    pub per_slot: Vec<bool>,
    pub all_correct: bool,
}

/// Grade user answers positionally against the blank slots. Missing answers
/// count as wrong.
pub fn check_fill_blanks(answers: &[String], slots: &[BlankSlot]) -> FillOutcome {
    let per_slot: Vec<bool> = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let answer = answers.get(i).map(String::as_str).unwrap_or("");
            matcher::matches(answer, &slot.answer)
        })
        .collect();
    let all_correct = per_slot.iter().all(|&correct| correct);
    FillOutcome {
        per_slot,
        all_correct,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    AwaitingAnswer,
    Revealed,
}

struct Question {
    verse: Verse,
    payload: QuestionPayload,
    phase: Phase,
}

/// A quiz session: the active verses, the enabled question types, and the
/// current question's state machine. Owns its own RNG so no state leaks
/// across sessions.
pub struct Session {
    verses: Vec<Verse>,
    enabled: Vec<QuestionType>,
    matching_round_size: usize,
    rng: StdRng,
    current: Option<Question>,
}

impl Session {
    pub fn new(
        verses: Vec<Verse>,
        enabled: Vec<QuestionType>,
        matching_round_size: usize,
    ) -> Fallible<Self> {
        Self::with_rng(verses, enabled, matching_round_size, StdRng::from_entropy())
    }

    pub fn with_rng(
        verses: Vec<Verse>,
        enabled: Vec<QuestionType>,
        matching_round_size: usize,
        rng: StdRng,
    ) -> Fallible<Self> {
        if verses.is_empty() {
            return Err(QuizError::EmptyVerseSet);
        }
        if enabled.is_empty() {
            return Err(QuizError::NoQuestionTypesSelected);
        }
        Ok(Self {
            verses,
            enabled,
            matching_round_size,
            rng,
            current: None,
        })
    }

    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    pub fn current(&self) -> Option<&QuestionPayload> {
        self.current.as_ref().map(|q| &q.payload)
    }

    pub fn is_revealed(&self) -> bool {
        matches!(
            self.current,
            Some(Question {
                phase: Phase::Revealed,
                ..
            })
        )
    }

    /// Discard the current question and set up a new one: one verse and one
    /// type, each drawn independently and uniformly. On failure the current
    /// question is left unchanged.
    pub fn next_question(&mut self) -> Fallible<&QuestionPayload> {
        let verse = self.verses[self.rng.gen_range(0..self.verses.len())].clone();
        let qtype = self.enabled[self.rng.gen_range(0..self.enabled.len())];
        let payload = self.setup(qtype, &verse)?;
        self.current = Some(Question {
            verse,
            payload,
            phase: Phase::AwaitingAnswer,
        });
        Ok(&self.current.as_ref().unwrap().payload)
    }

    fn setup(&mut self, qtype: QuestionType, verse: &Verse) -> Fallible<QuestionPayload> {
        let payload = match qtype {
            QuestionType::Flashcard => {
                // Orientation is an independent fair coin flip.
                let orientation = if self.rng.gen_bool(0.5) {
                    Orientation::ShlokToMeaning
                } else {
                    Orientation::MeaningToShlok
                };
                let prompt = match orientation {
                    Orientation::ShlokToMeaning => verse.shlok.clone(),
                    Orientation::MeaningToShlok => verse.meaning.clone(),
                };
                QuestionPayload::Flashcard {
                    orientation,
                    prompt,
                    number: verse.number.clone(),
                }
            }
            QuestionType::GuessNumber => QuestionPayload::GuessNumber {
                shlok: verse.shlok.clone(),
            },
            QuestionType::FillBlanksShlok => {
                let (segments, slots) = mask(&verse.shlok, &mut self.rng);
                QuestionPayload::FillBlanks {
                    target: BlankTarget::Shlok,
                    segments,
                    slots,
                    number: None,
                }
            }
            QuestionType::FillBlanksMeaning => {
                let (segments, slots) = mask(&verse.meaning, &mut self.rng);
                QuestionPayload::FillBlanks {
                    target: BlankTarget::Meaning,
                    segments,
                    slots,
                    number: Some(verse.number.clone()),
                }
            }
            QuestionType::Matching => {
                let round =
                    MatchingRound::start(&self.verses, self.matching_round_size, &mut self.rng)?;
                QuestionPayload::Matching(round)
            }
        };
        Ok(payload)
    }

    /// Reveal the hidden side of the current flashcard. Always "succeeds":
    /// flashcards have no correctness check.
    pub fn reveal_flashcard(&mut self) -> Fallible<String> {
        let question = match &mut self.current {
            Some(q) => q,
            None => return fail("no question is active."),
        };
        let QuestionPayload::Flashcard { orientation, .. } = &question.payload else {
            return fail("the current question is not a flashcard.");
        };
        if question.phase == Phase::Revealed {
            return fail("the flashcard is already revealed.");
        }
        let answer = match orientation {
            Orientation::ShlokToMeaning => question.verse.meaning.clone(),
            Orientation::MeaningToShlok => question.verse.shlok.clone(),
        };
        question.phase = Phase::Revealed;
        Ok(answer)
    }

    /// Check a verse-number guess. A correct guess reveals the question; a
    /// wrong one keeps it open.
    pub fn check_guess_number(&mut self, input: &str) -> Fallible<GuessOutcome> {
        let question = match &mut self.current {
            Some(q) => q,
            None => return fail("no question is active."),
        };
        if !matches!(question.payload, QuestionPayload::GuessNumber { .. }) {
            return fail("the current question is not a number guess.");
        }
        if question.phase == Phase::Revealed {
            return fail("the question is already answered.");
        }
        let correct = matcher::matches(input, &question.verse.number);
        if correct {
            question.phase = Phase::Revealed;
        }
        Ok(GuessOutcome {
            correct,
            correct_value: question.verse.number.clone(),
        })
    }

    /// Grade the blanks of the current fill-in question. All-correct reveals
    /// the question; anything else keeps it open.
    pub fn check_blanks(&mut self, answers: &[String]) -> Fallible<FillOutcome> {
        let question = match &mut self.current {
            Some(q) => q,
            None => return fail("no question is active."),
        };
        let QuestionPayload::FillBlanks { slots, .. } = &question.payload else {
            return fail("the current question has no blanks.");
        };
        if question.phase == Phase::Revealed {
            return fail("the question is already answered.");
        }
        let outcome = check_fill_blanks(answers, slots);
        if outcome.all_correct {
            question.phase = Phase::Revealed;
        }
        Ok(outcome)
    }

    /// Forward a left-column selection to the current matching round.
    pub fn select_left(&mut self, id: &str) -> Fallible<()> {
        let round = self.matching_round_mut()?;
        round.select_left(id);
        Ok(())
    }

    /// Forward a right-column selection to the current matching round. A
    /// completed round reveals the question.
    pub fn select_right(&mut self, id: &str) -> Fallible<MatchOutcome> {
        let (outcome, complete) = {
            let round = self.matching_round_mut()?;
            let outcome = round.select_right(id);
            (outcome, round.is_complete())
        };
        if complete {
            self.current.as_mut().unwrap().phase = Phase::Revealed;
        }
        Ok(outcome)
    }

    fn matching_round_mut(&mut self) -> Fallible<&mut MatchingRound> {
        let question = match &mut self.current {
            Some(q) => q,
            None => return fail("no question is active."),
        };
        match &mut question.payload {
            QuestionPayload::Matching(round) => Ok(round),
            _ => fail("the current question is not a matching round."),
        }
    }
}
