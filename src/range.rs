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
use crate::error::QuizError;

// Verse numbers within a chapter are assumed to stay below 1000. This is a
// limitation of the identifier scheme itself, inherited from the data format.
const CHAPTER_FACTOR: u32 = 1000;

const OPEN_END: u32 = 999_999;

/// Map a "chapter.verse" identifier to a comparable numeric key.
///
/// `"1.15"` maps to `1015` and a bare chapter `"5"` maps to `5000`, so the
/// keys order numerically: `"1.10"` sorts after `"1.5"`.
pub fn parse_key(id: &str) -> Fallible<u32> {
    let invalid = || QuizError::InvalidFormat(id.to_string());
    let mut parts = id.split('.');
    let chapter: u32 = parts
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|_| invalid())?;
    let verse: u32 = match parts.next() {
        Some(v) => v.parse().map_err(|_| invalid())?,
        None => 0,
    };
    Ok(chapter * CHAPTER_FACTOR + verse)
}

/// An inclusive range of verse identifiers. Empty bounds are open-ended.
#[derive(Clone, Copy, Debug)]
pub struct VerseRange {
    start: u32,
    end: u32,
}

impl VerseRange {
    /// Build a range from optional bound identifiers.
    ///
    /// A malformed bound is a hard error: the caller asked for a specific
    /// range and must not get a silently different one.
    pub fn new(start: Option<&str>, end: Option<&str>) -> Fallible<Self> {
        let start = match start.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => parse_key(s)?,
            None => 0,
        };
        let end = match end.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => parse_key(s)?,
            None => OPEN_END,
        };
        Ok(Self { start, end })
    }

    /// Whether the given verse number falls inside the range.
    ///
    /// A verse number that does not parse is excluded, not fatal: one
    /// malformed record must not abort filtering the whole collection.
    pub fn contains(&self, number: &str) -> bool {
        match parse_key(number) {
            Ok(key) => key >= self.start && key <= self.end,
            Err(_) => {
                log::warn!("excluding verse with unparseable number: {number}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("1.5").unwrap(), 1005);
        assert_eq!(parse_key("1.15").unwrap(), 1015);
        assert_eq!(parse_key("1.10").unwrap(), 1010);
        assert_eq!(parse_key("5").unwrap(), 5000);
        assert_eq!(parse_key("12.999").unwrap(), 12999);
    }

    #[test]
    fn test_parse_key_is_numeric_not_lexicographic() {
        assert!(parse_key("1.10").unwrap() > parse_key("1.5").unwrap());
    }

    #[test]
    fn test_parse_key_invalid() {
        assert!(parse_key("").is_err());
        assert!(parse_key("one.two").is_err());
        assert!(parse_key("1.x").is_err());
        assert!(parse_key("x.1").is_err());
    }

    #[test]
    fn test_range_is_reflexive() {
        for number in ["1.1", "1.10", "18.78", "3"] {
            let range = VerseRange::new(Some(number), Some(number)).unwrap();
            assert!(range.contains(number));
        }
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = VerseRange::new(Some("1.2"), Some("1.10")).unwrap();
        assert!(range.contains("1.2"));
        assert!(range.contains("1.5"));
        assert!(range.contains("1.10"));
        assert!(!range.contains("1.1"));
        assert!(!range.contains("1.11"));
    }

    #[test]
    fn test_open_ended_bounds() {
        let range = VerseRange::new(None, None).unwrap();
        assert!(range.contains("1.1"));
        assert!(range.contains("999.1"));

        let from = VerseRange::new(Some("2.1"), None).unwrap();
        assert!(!from.contains("1.9"));
        assert!(from.contains("18.1"));

        let to = VerseRange::new(None, Some("2.1")).unwrap();
        assert!(to.contains("1.9"));
        assert!(!to.contains("2.2"));
    }

    #[test]
    fn test_blank_bounds_are_open() {
        let range = VerseRange::new(Some("  "), Some("")).unwrap();
        assert!(range.contains("7.3"));
    }

    #[test]
    fn test_malformed_bound_is_an_error() {
        assert!(VerseRange::new(Some("1.x"), None).is_err());
        assert!(VerseRange::new(None, Some("abc")).is_err());
    }

    #[test]
    fn test_malformed_verse_number_is_excluded() {
        let range = VerseRange::new(None, None).unwrap();
        assert!(!range.contains("not-a-number"));
    }
}
