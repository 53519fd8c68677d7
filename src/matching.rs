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

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Fallible;
use crate::error::QuizError;
use crate::types::verse::Verse;

// Left-column shloks are trimmed to a recognizable prefix.
const LEFT_LABEL_CHARS: usize = 45;

/// One selectable item in a matching column.
#[derive(Clone, Debug)]
pub struct MatchItem {
    pub id: String,
    pub label: String,
    matched: bool,
}

impl MatchItem {
    pub fn is_matched(&self) -> bool {
        self.matched
    }
}

/// The outcome of selecting a right-column item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The pending left item and the selection share an id.
    Matched,
    /// The ids differ; the pending left selection is kept.
    NoMatch,
    /// Nothing happened: no left item was pending, or the item was already
    /// matched.
    Ignored,
}

/// A round of the matching game: shloks on the left, shuffled meanings on
/// the right, matched pairwise by verse identifier.
#[derive(Clone, Debug)]
pub struct MatchingRound {
    left: Vec<MatchItem>,
    right: Vec<MatchItem>,
    pending_left: Option<String>,
    matches_found: usize,
    round_size: usize,
}

impl MatchingRound {
    /// Draw `min(configured_size, |verses|)` distinct verses and set up a
    /// round. Fails with `InsufficientVerses` when fewer than two are
    /// available.
    pub fn start(
        verses: &[Verse],
        configured_size: usize,
        rng: &mut impl Rng,
    ) -> Fallible<Self> {
        let round_size = configured_size.min(verses.len());
        if round_size < 2 {
            return Err(QuizError::InsufficientVerses(verses.len()));
        }

        // Rejection-sample distinct indices. Terminates because the target
        // size never exceeds the population.
        let mut indices: Vec<usize> = Vec::with_capacity(round_size);
        let mut seen: HashSet<usize> = HashSet::with_capacity(round_size);
        while seen.len() < round_size {
            let index = rng.gen_range(0..verses.len());
            if seen.insert(index) {
                indices.push(index);
            }
        }

        let left: Vec<MatchItem> = indices
            .iter()
            .map(|&i| MatchItem {
                id: verses[i].number.clone(),
                label: truncate_chars(&verses[i].shlok, LEFT_LABEL_CHARS),
                matched: false,
            })
            .collect();
        let mut right: Vec<MatchItem> = indices
            .iter()
            .map(|&i| MatchItem {
                id: verses[i].number.clone(),
                label: verses[i].meaning.clone(),
                matched: false,
            })
            .collect();
        right.shuffle(rng);

        Ok(Self {
            left,
            right,
            pending_left: None,
            matches_found: 0,
            round_size,
        })
    }

    pub fn left(&self) -> &[MatchItem] {
        &self.left
    }

    pub fn right(&self) -> &[MatchItem] {
        &self.right
    }

    pub fn pending_left(&self) -> Option<&str> {
        self.pending_left.as_deref()
    }

    pub fn matches_found(&self) -> usize {
        self.matches_found
    }

    pub fn round_size(&self) -> usize {
        self.round_size
    }

    pub fn is_complete(&self) -> bool {
        self.matches_found == self.round_size
    }

    /// Record a left-column candidate. Selecting an already-matched or
    /// unknown id has no effect.
    pub fn select_left(&mut self, id: &str) {
        let selectable = self
            .left
            .iter()
            .any(|item| item.id == id && !item.matched);
        if selectable {
            self.pending_left = Some(id.to_string());
        }
    }

    /// Try to pair a right-column item with the pending left candidate.
    pub fn select_right(&mut self, id: &str) -> MatchOutcome {
        let Some(pending) = self.pending_left.clone() else {
            return MatchOutcome::Ignored;
        };
        let already_matched = self
            .right
            .iter()
            .any(|item| item.id == id && item.matched);
        if already_matched {
            return MatchOutcome::Ignored;
        }
        if pending == id {
            for item in self.left.iter_mut().chain(self.right.iter_mut()) {
                if item.id == id {
                    item.matched = true;
                }
            }
            self.pending_left = None;
            self.matches_found += 1;
            MatchOutcome::Matched
        } else {
            MatchOutcome::NoMatch
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max).collect();
        format!("{prefix}...")
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn verses(n: usize) -> Vec<Verse> {
        (1..=n)
            .map(|i| {
                Verse::new(
                    format!("1.{i}"),
                    format!("shlok {i}"),
                    format!("meaning {i}"),
                )
            })
            .collect()
    }

    #[test]
    fn test_round_size_is_clamped() {
        let round = MatchingRound::start(&verses(2), 3, &mut rng()).unwrap();
        assert_eq!(round.round_size(), 2);
        assert_eq!(round.left().len(), 2);
        assert_eq!(round.right().len(), 2);
    }

    #[test]
    fn test_insufficient_verses() {
        let result = MatchingRound::start(&verses(1), 3, &mut rng());
        assert!(matches!(
            result,
            Err(QuizError::InsufficientVerses(1))
        ));
    }

    #[test]
    fn test_columns_hold_the_same_ids() {
        let round = MatchingRound::start(&verses(10), 4, &mut rng()).unwrap();
        let mut left_ids: Vec<&str> = round.left().iter().map(|i| i.id.as_str()).collect();
        let mut right_ids: Vec<&str> = round.right().iter().map(|i| i.id.as_str()).collect();
        left_ids.sort();
        right_ids.sort();
        assert_eq!(left_ids, right_ids);
        let distinct: HashSet<&str> = left_ids.iter().copied().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_right_without_pending_left_is_ignored() {
        let mut round = MatchingRound::start(&verses(3), 3, &mut rng()).unwrap();
        let id = round.right()[0].id.clone();
        assert_eq!(round.select_right(&id), MatchOutcome::Ignored);
        assert_eq!(round.matches_found(), 0);
    }

    #[test]
    fn test_no_match_keeps_the_pending_left() {
        let mut round = MatchingRound::start(&verses(3), 3, &mut rng()).unwrap();
        let left_id = round.left()[0].id.clone();
        let wrong_id = round
            .left()
            .iter()
            .find(|item| item.id != left_id)
            .unwrap()
            .id
            .clone();
        round.select_left(&left_id);
        assert_eq!(round.select_right(&wrong_id), MatchOutcome::NoMatch);
        assert_eq!(round.pending_left(), Some(left_id.as_str()));
        assert_eq!(round.matches_found(), 0);
    }

    #[test]
    fn test_full_round() {
        let mut round = MatchingRound::start(&verses(3), 3, &mut rng()).unwrap();
        let ids: Vec<String> = round.left().iter().map(|i| i.id.clone()).collect();
        for (n, id) in ids.iter().enumerate() {
            round.select_left(id);
            assert_eq!(round.select_right(id), MatchOutcome::Matched);
            assert_eq!(round.matches_found(), n + 1);
        }
        assert!(round.is_complete());
    }

    #[test]
    fn test_matched_left_cannot_be_reselected() {
        let mut round = MatchingRound::start(&verses(3), 3, &mut rng()).unwrap();
        let id = round.left()[0].id.clone();
        round.select_left(&id);
        round.select_right(&id);
        round.select_left(&id);
        assert_eq!(round.pending_left(), None);
    }

    #[test]
    fn test_matched_right_is_ignored() {
        let mut round = MatchingRound::start(&verses(3), 3, &mut rng()).unwrap();
        let first = round.left()[0].id.clone();
        let second = round
            .left()
            .iter()
            .find(|item| item.id != first)
            .unwrap()
            .id
            .clone();
        round.select_left(&first);
        round.select_right(&first);
        round.select_left(&second);
        assert_eq!(round.select_right(&first), MatchOutcome::Ignored);
        assert_eq!(round.pending_left(), Some(second.as_str()));
    }

    #[test]
    fn test_left_labels_are_truncated() {
        let long = "अ".repeat(60);
        let verses = vec![
            Verse::new("1.1", long.clone(), "m1"),
            Verse::new("1.2", "short", "m2"),
        ];
        let round = MatchingRound::start(&verses, 2, &mut rng()).unwrap();
        let label = &round
            .left()
            .iter()
            .find(|item| item.id == "1.1")
            .unwrap()
            .label;
        assert_eq!(label.chars().count(), 45 + 3);
        assert!(label.ends_with("..."));
    }
}
