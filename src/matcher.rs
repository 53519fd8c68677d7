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

/// Normalize a user-supplied answer for lenient comparison: trim, lowercase,
/// and collapse internal whitespace runs to a single space.
///
/// Lowercasing is Unicode-aware and a no-op for scripts without case, so
/// Devanagari text passes through unchanged.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Whether a user answer matches the expected answer under normalization.
pub fn matches(user: &str, expected: &str) -> bool {
    normalize(user) == normalize(expected)
}
