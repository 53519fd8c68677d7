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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use chrono::Utc;
use maud::Markup;
use maud::html;

use crate::drill::state::MutableState;
use crate::drill::state::ServerState;
use crate::drill::template::page_template;
use crate::engine::Orientation;
use crate::engine::QuestionPayload;
use crate::mask::Segment;
use crate::matching::MatchingRound;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let body = if mutable.finished {
        let minutes = (Utc::now() - state.session_started_at).num_minutes();
        html! {
            div.finished {
                h1 { "Session Completed" }
                p { (mutable.questions_asked) " questions in " (minutes) " minutes." }
            }
        }
    } else {
        match mutable.session.current() {
            Some(payload) => question_page(&state, &mutable, payload),
            None => html! {
                p { "No question is active." }
            },
        }
    };
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}

fn question_page(state: &ServerState, mutable: &MutableState, payload: &QuestionPayload) -> Markup {
    let revealed = mutable.session.is_revealed();
    let content = match payload {
        QuestionPayload::Flashcard {
            orientation,
            prompt,
            number,
        } => flashcard(mutable, *orientation, prompt, number),
        QuestionPayload::GuessNumber { shlok } => guess_number(shlok, revealed),
        QuestionPayload::FillBlanks {
            segments,
            slots,
            number,
            ..
        } => {
            let answers: Vec<&str> = slots.iter().map(|slot| slot.answer.as_str()).collect();
            fill_blanks(mutable, segments, &answers, number.as_deref(), revealed)
        }
        QuestionPayload::Matching(round) => matching(round),
    };
    let feedback = match &mutable.feedback {
        Some(feedback) => {
            let class = if feedback.success {
                "success-msg"
            } else {
                "error-msg"
            };
            html! {
                div class=(class) { (feedback.message) }
            }
        }
        None => html! {},
    };
    let is_flashcard = matches!(payload, QuestionPayload::Flashcard { .. });
    html! {
        div.root {
            div.card {
                div.header {
                    h1 { (state.text_name) }
                    div.progress { "Question " (mutable.questions_asked) }
                }
                div.question-type { (payload.heading()) }
                (content)
                (feedback)
                div.controls {
                    form action="/" method="post" {
                        @if !revealed && is_flashcard {
                            button type="submit" name="action" value="Reveal" { "Reveal Answer" }
                        }
                        @if revealed {
                            button type="submit" name="action" value="Next" { "Next Question" }
                        }
                        button.secondary type="submit" name="action" value="End" { "End Session" }
                    }
                }
            }
        }
    }
}

fn flashcard(
    mutable: &MutableState,
    orientation: Orientation,
    prompt: &str,
    number: &str,
) -> Markup {
    let (prompt_class, answer_class) = match orientation {
        Orientation::ShlokToMeaning => ("shlok-text", "meaning-text"),
        Orientation::MeaningToShlok => ("meaning-text", "shlok-text"),
    };
    html! {
        div.content {
            div class=(prompt_class) { (prompt) }
            div.number-text { "(" (number) ")" }
            @if let Some(answer) = &mutable.revealed_answer {
                div.answer {
                    div class=(answer_class) { (answer) }
                }
            }
        }
    }
}

fn guess_number(shlok: &str, revealed: bool) -> Markup {
    html! {
        div.content {
            div.shlok-text { (shlok) }
            @if !revealed {
                form action="/" method="post" {
                    input.blank-input type="text" name="guess" placeholder="e.g. 1.1";
                    button type="submit" name="action" value="Check" { "Check" }
                }
            }
        }
    }
}

fn fill_blanks(
    mutable: &MutableState,
    segments: &[Segment],
    answers: &[&str],
    number: Option<&str>,
    revealed: bool,
) -> Markup {
    let line = |as_inputs: bool| {
        html! {
            div.blank-line {
                @for segment in segments {
                    @match segment {
                        Segment::Literal(word) => {
                            span.word { (word) }
                            " "
                        }
                        Segment::Blank(i) => {
                            @if as_inputs {
                                input
                                    type="text"
                                    name=(format!("b{i}"))
                                    value=(blank_value(mutable, *i))
                                    class=(blank_class(mutable, *i));
                                @if blank_is_wrong(mutable, *i) {
                                    " "
                                    span.correction { "(" (answers[*i]) ")" }
                                }
                            } @else {
                                span.blank-reveal { (answers[*i]) }
                            }
                            " "
                        }
                    }
                }
            }
        }
    };
    html! {
        div.content {
            @if revealed {
                (line(false))
            } @else {
                form action="/" method="post" {
                    (line(true))
                    button type="submit" name="action" value="CheckBlanks" { "Check Answers" }
                }
            }
            @if let Some(number) = number {
                div.number-text { "(" (number) ")" }
            }
        }
    }
}

fn matching(round: &MatchingRound) -> Markup {
    html! {
        div.content {
            div.match-progress {
                (round.matches_found()) " / " (round.round_size()) " matched"
            }
            div.match-container {
                div.match-column {
                    @for item in round.left() {
                        @if item.is_matched() {
                            div.match-item.matched { (item.label) }
                        } @else {
                            form action="/" method="post" {
                                input type="hidden" name="action" value="SelectLeft";
                                button.match-item.selected[round.pending_left() == Some(item.id.as_str())]
                                    type="submit" name="id" value=(item.id) { (item.label) }
                            }
                        }
                    }
                }
                div.match-column {
                    @for item in round.right() {
                        @if item.is_matched() {
                            div.match-item.matched { (item.label) }
                        } @else {
                            form action="/" method="post" {
                                input type="hidden" name="action" value="SelectRight";
                                button.match-item type="submit" name="id" value=(item.id) { (item.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn blank_value<'a>(mutable: &'a MutableState, i: usize) -> &'a str {
    mutable
        .blank_entries
        .as_ref()
        .and_then(|entries| entries.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

fn blank_class(mutable: &MutableState, i: usize) -> &'static str {
    match mutable
        .blank_results
        .as_ref()
        .and_then(|results| results.get(i).copied())
    {
        Some(true) => "blank-input correct",
        Some(false) => "blank-input incorrect",
        None => "blank-input",
    }
}

fn blank_is_wrong(mutable: &MutableState, i: usize) -> bool {
    matches!(
        mutable
            .blank_results
            .as_ref()
            .and_then(|results| results.get(i).copied()),
        Some(false)
    )
}
