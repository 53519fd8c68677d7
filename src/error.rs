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

use thiserror::Error;

pub type Fallible<T> = Result<T, QuizError>;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("error: the active verse set is empty.")]
    EmptyVerseSet,

    #[error("error: no question types selected.")]
    NoQuestionTypesSelected,

    #[error("error: the matching game needs at least 2 verses, found {0}.")]
    InsufficientVerses(usize),

    #[error("error: invalid verse identifier '{0}'.")]
    InvalidFormat(String),

    #[error("error: malformed data in '{path}': {detail}")]
    DataFormat { path: String, detail: String },

    #[error("error: unknown question type '{0}'.")]
    UnknownQuestionType(String),

    #[error("error: {0}")]
    Message(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub fn fail<T>(message: impl Into<String>) -> Fallible<T> {
    Err(QuizError::Message(message.into()))
}
