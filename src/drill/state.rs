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

use std::sync::Arc;
use std::sync::Mutex;

use chrono::DateTime;
use chrono::Utc;

use crate::engine::Session;

#[derive(Clone)]
pub struct ServerState {
    /// The title shown above every question.
    pub text_name: String,
    pub session_started_at: DateTime<Utc>,
    pub mutable: Arc<Mutex<MutableState>>,
}

pub struct MutableState {
    pub session: Session,
    /// The message shown under the current question, if any.
    pub feedback: Option<Feedback>,
    /// The revealed side of the current flashcard.
    pub revealed_answer: Option<String>,
    /// The answers from the last blank check, re-rendered into the inputs.
    pub blank_entries: Option<Vec<String>>,
    /// Per-slot grading from the last blank check.
    pub blank_results: Option<Vec<bool>>,
    pub questions_asked: usize,
    pub finished: bool,
}

impl MutableState {
    /// Drop everything tied to the outgoing question.
    pub fn clear_question_state(&mut self) {
        self.feedback = None;
        self.revealed_answer = None;
        self.blank_entries = None;
        self.blank_results = None;
    }
}

#[derive(Clone)]
pub struct Feedback {
    pub message: String,
    pub success: bool,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}
