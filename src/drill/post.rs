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

use std::collections::HashMap;

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;

use crate::drill::state::Feedback;
use crate::drill::state::ServerState;
use crate::engine::QuestionPayload;
use crate::error::Fallible;
use crate::error::fail;
use crate::matching::MatchOutcome;

// The fill-blank form has a variable number of fields, so the body is
// deserialized as a plain string map rather than a typed struct.
pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<HashMap<String, String>>,
) -> Redirect {
    match action_handler(state, form) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    Redirect::to("/")
}

fn action_handler(state: ServerState, form: HashMap<String, String>) -> Fallible<()> {
    let mut mutable = state.mutable.lock().unwrap();
    let mutable = &mut *mutable;
    let action = form.get("action").map(String::as_str).unwrap_or_default();
    match action {
        "Reveal" => {
            let answer = mutable.session.reveal_flashcard()?;
            mutable.revealed_answer = Some(answer);
        }
        "Check" => {
            let guess = form.get("guess").cloned().unwrap_or_default();
            let outcome = mutable.session.check_guess_number(&guess)?;
            mutable.feedback = Some(if outcome.correct {
                Feedback::success("Correct! (सही)")
            } else {
                Feedback::failure(format!("Incorrect. It is {}", outcome.correct_value))
            });
        }
        "CheckBlanks" => {
            let slot_count = match mutable.session.current() {
                Some(QuestionPayload::FillBlanks { slots, .. }) => slots.len(),
                _ => return fail("the current question has no blanks."),
            };
            let answers: Vec<String> = (0..slot_count)
                .map(|i| form.get(&format!("b{i}")).cloned().unwrap_or_default())
                .collect();
            let outcome = mutable.session.check_blanks(&answers)?;
            mutable.blank_entries = Some(answers);
            mutable.blank_results = Some(outcome.per_slot);
            mutable.feedback = Some(if outcome.all_correct {
                Feedback::success("Perfect! अद्भुत!")
            } else {
                Feedback::failure("Review corrections above.")
            });
        }
        "SelectLeft" => {
            let id = form.get("id").cloned().unwrap_or_default();
            mutable.session.select_left(&id)?;
            mutable.feedback = None;
        }
        "SelectRight" => {
            let id = form.get("id").cloned().unwrap_or_default();
            match mutable.session.select_right(&id)? {
                MatchOutcome::Matched => {
                    mutable.feedback = if mutable.session.is_revealed() {
                        Some(Feedback::success("All Matched! जय हो!"))
                    } else {
                        None
                    };
                }
                MatchOutcome::NoMatch => {
                    mutable.feedback = Some(Feedback::failure("Try again"));
                }
                MatchOutcome::Ignored => {}
            }
        }
        "Next" => match mutable.session.next_question().map(|_| ()) {
            Ok(()) => {
                mutable.questions_asked += 1;
                mutable.clear_question_state();
            }
            Err(e) => {
                // Recoverable: surface the problem and keep the current
                // question.
                mutable.feedback = Some(Feedback::failure(e.to_string()));
            }
        },
        "End" => {
            log::debug!("Session completed");
            mutable.finished = true;
        }
        other => {
            return fail(format!("unknown action '{other}'."));
        }
    }
    Ok(())
}
