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

use serde::Deserialize;
use serde::Deserializer;

/// A verse of a text: a chapter.verse identifier, the source-language shlok,
/// and its meaning in the study language.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Verse {
    /// The chapter.verse identifier, e.g. "1.10".
    #[serde(deserialize_with = "number_as_string")]
    pub number: String,
    /// The source text.
    pub shlok: String,
    /// The translation.
    pub meaning: String,
}

impl Verse {
    #[cfg(test)]
    pub fn new(
        number: impl Into<String>,
        shlok: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            shlok: shlok.into(),
            meaning: meaning.into(),
        }
    }
}

// Some data files store whole-chapter identifiers as bare JSON integers.
fn number_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Integer(u64),
    }
    let repr = Repr::deserialize(deserializer)?;
    Ok(match repr {
        Repr::Text(s) => s,
        Repr::Integer(n) => n.to_string(),
    })
}
