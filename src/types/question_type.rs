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

use crate::error::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionType {
    Flashcard,
    GuessNumber,
    FillBlanksShlok,
    FillBlanksMeaning,
    Matching,
}

impl QuestionType {
    pub const ALL: [QuestionType; 5] = [
        QuestionType::Flashcard,
        QuestionType::GuessNumber,
        QuestionType::FillBlanksShlok,
        QuestionType::FillBlanksMeaning,
        QuestionType::Matching,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::Flashcard => "flashcard",
            QuestionType::GuessNumber => "guess-number",
            QuestionType::FillBlanksShlok => "fill-blanks-shlok",
            QuestionType::FillBlanksMeaning => "fill-blanks-meaning",
            QuestionType::Matching => "matching",
        }
    }
}

impl TryFrom<&str> for QuestionType {
    type Error = QuizError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "flashcard" => Ok(QuestionType::Flashcard),
            "guess-number" => Ok(QuestionType::GuessNumber),
            "fill-blanks-shlok" => Ok(QuestionType::FillBlanksShlok),
            "fill-blanks-meaning" => Ok(QuestionType::FillBlanksMeaning),
            "matching" => Ok(QuestionType::Matching),
            _ => Err(QuizError::UnknownQuestionType(value.to_string())),
        }
    }
}
