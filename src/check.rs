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

use std::path::Path;

use crate::catalog::load_catalog;
use crate::catalog::load_text;
use crate::error::Fallible;
use crate::error::fail;
use crate::range::parse_key;
use crate::store::VerseStore;

/// Validate every text in a data directory: the catalog parses, each verse
/// file parses, and no record has empty fields.
pub fn check_texts(directory: &Path) -> Fallible<()> {
    if !directory.exists() {
        return fail("directory does not exist.");
    }
    let catalog = load_catalog(directory)?;
    if catalog.is_empty() {
        return fail("no texts found in the data directory.");
    }
    for entry in &catalog {
        let path = directory.join(&entry.filename);
        let store = VerseStore::new(load_text(&path)?);
        if store.is_empty() {
            log::warn!("{}: no verses.", entry.name);
        }
        for verse in store.verses() {
            // Unparseable numbers don't fail the check. They only fall out
            // of range filters, so a warning is enough.
            if parse_key(&verse.number).is_err() {
                log::warn!("{}: unparseable verse number '{}'.", entry.name, verse.number);
            }
        }
        println!("{}: {} verses.", entry.name, store.len());
    }
    println!("ok");
    Ok(())
}
