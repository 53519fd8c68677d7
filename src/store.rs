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

use crate::error::Fallible;
use crate::range::VerseRange;
use crate::types::verse::Verse;

/// The ordered verses of the active text.
pub struct VerseStore {
    verses: Vec<Verse>,
}

impl VerseStore {
    pub fn new(verses: Vec<Verse>) -> Self {
        Self { verses }
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// The verses whose numbers fall within the given inclusive range.
    /// Omitted bounds are open-ended; order is preserved. With no bounds at
    /// all, no filter runs, so verse numbers are not even parsed.
    pub fn in_range(&self, start: Option<&str>, end: Option<&str>) -> Fallible<Vec<Verse>> {
        let blank = |bound: Option<&str>| bound.map(str::trim).filter(|s| !s.is_empty()).is_none();
        if blank(start) && blank(end) {
            return Ok(self.verses.clone());
        }
        let range = VerseRange::new(start, end)?;
        Ok(self
            .verses
            .iter()
            .filter(|verse| range.contains(&verse.number))
            .cloned()
            .collect())
    }
}
