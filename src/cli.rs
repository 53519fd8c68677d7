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

use clap::Parser;

use crate::check::check_texts;
use crate::drill::server::DrillOptions;
use crate::drill::server::start_server;
use crate::error::Fallible;
use crate::error::QuizError;
use crate::texts::list_texts;
use crate::types::question_type::QuestionType;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill verses from a text in the browser.
    Drill {
        /// Optional path to the data directory.
        directory: Option<String>,
        /// The text to drill, by catalog name or filename. Optional when
        /// the directory holds a single text.
        #[arg(long)]
        text: Option<String>,
        /// First verse of the range to drill, e.g. "1.1".
        #[arg(long)]
        from: Option<String>,
        /// Last verse of the range to drill, e.g. "2.10".
        #[arg(long)]
        to: Option<String>,
        /// Comma-separated question types to enable. Defaults to all.
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
        /// Overrides the configured server port.
        #[arg(long)]
        port: Option<u16>,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// List the texts in a data directory.
    Texts {
        /// Optional path to the data directory.
        directory: Option<String>,
    },
    /// Check that the data files in a directory are well-formed.
    Check {
        /// Optional path to the data directory.
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            directory,
            text,
            from,
            to,
            types,
            port,
            no_open,
        } => {
            let directory = resolve_directory(directory)?;
            let options = DrillOptions {
                text,
                from,
                to,
                types: parse_types(&types)?,
                port,
                open_browser: !no_open,
            };
            start_server(directory, options).await
        }
        Command::Texts { directory } => list_texts(&resolve_directory(directory)?),
        Command::Check { directory } => check_texts(&resolve_directory(directory)?),
    }
}

fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    Ok(match directory {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    })
}

fn parse_types(types: &[String]) -> Fallible<Vec<QuestionType>> {
    if types.is_empty() {
        return Ok(QuestionType::ALL.to_vec());
    }
    let mut enabled = Vec::new();
    for name in types {
        let qtype = QuestionType::try_from(name.trim()).map_err(|_| {
            let valid: Vec<&str> = QuestionType::ALL.iter().map(|t| t.as_str()).collect();
            QuizError::Message(format!(
                "unknown question type '{name}'. Valid types: {}.",
                valid.join(", ")
            ))
        })?;
        if !enabled.contains(&qtype) {
            enabled.push(qtype);
        }
    }
    Ok(enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_types_defaults_to_all() {
        let types = parse_types(&[]).unwrap();
        assert_eq!(types, QuestionType::ALL.to_vec());
    }

    #[test]
    fn test_parse_types() {
        let args = vec!["flashcard".to_string(), " matching".to_string()];
        let types = parse_types(&args).unwrap();
        assert_eq!(types, vec![QuestionType::Flashcard, QuestionType::Matching]);
    }

    #[test]
    fn test_parse_types_deduplicates() {
        let args = vec!["matching".to_string(), "matching".to_string()];
        let types = parse_types(&args).unwrap();
        assert_eq!(types, vec![QuestionType::Matching]);
    }

    #[test]
    fn test_parse_types_rejects_unknown() {
        let args = vec!["karaoke".to_string()];
        let result = parse_types(&args);
        assert!(result.is_err());
        let message = result.err().unwrap().to_string();
        assert!(message.contains("Valid types: flashcard"));
    }
}
