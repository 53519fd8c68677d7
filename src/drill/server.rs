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

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use chrono::Utc;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::catalog::load_catalog;
use crate::catalog::load_text;
use crate::catalog::resolve_entry;
use crate::config::load_config;
use crate::drill::get::get_handler;
use crate::drill::post::post_handler;
use crate::drill::state::MutableState;
use crate::drill::state::ServerState;
use crate::engine::Session;
use crate::error::Fallible;
use crate::error::fail;
use crate::store::VerseStore;
use crate::types::question_type::QuestionType;

pub struct DrillOptions {
    /// Catalog name or filename of the text to drill.
    pub text: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub types: Vec<QuestionType>,
    /// Overrides the configured port.
    pub port: Option<u16>,
    pub open_browser: bool,
}

pub async fn start_server(directory: PathBuf, options: DrillOptions) -> Fallible<()> {
    if !directory.exists() {
        return fail("directory does not exist.");
    }

    let config = load_config(&directory)?;
    let catalog = load_catalog(&directory)?;
    let entry = resolve_entry(&catalog, options.text.as_deref())?.clone();

    log::debug!("Loading {}...", entry.filename);
    let store = VerseStore::new(load_text(&directory.join(&entry.filename))?);
    let active = store.in_range(options.from.as_deref(), options.to.as_deref())?;
    log::debug!("{} of {} verses selected.", active.len(), store.len());

    let mut session = Session::new(active, options.types, config.matching_round_size)?;
    session.next_question()?;

    let state = ServerState {
        text_name: format!("{} ({} Verses)", entry.name, session.verse_count()),
        session_started_at: Utc::now(),
        mutable: Arc::new(Mutex::new(MutableState {
            session,
            feedback: None,
            revealed_answer: None,
            blank_entries: None,
            blank_results: None,
            questions_asked: 1,
            finished: false,
        })),
    };

    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let port = options.port.unwrap_or(config.port);
    let bind = format!("0.0.0.0:{port}");

    if options.open_browser {
        // Start a separate task to open the browser.
        let url = format!("http://localhost:{port}/");
        let probe = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&probe).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            let _ = open::that(url);
        });
    }

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
