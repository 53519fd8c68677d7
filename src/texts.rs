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
use crate::error::Fallible;
use crate::error::fail;

/// Print the catalog of a data directory.
pub fn list_texts(directory: &Path) -> Fallible<()> {
    if !directory.exists() {
        return fail("directory does not exist.");
    }
    let catalog = load_catalog(directory)?;
    if catalog.is_empty() {
        println!("No texts found.");
        return Ok(());
    }
    for entry in catalog {
        println!("{} ({})", entry.name, entry.filename);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::error::Fallible;
    use crate::helper::create_tmp_data_directory;
    use crate::texts::list_texts;

    #[test]
    fn test_non_existent_directory() {
        let directory = PathBuf::from("./derpherp");
        assert!(list_texts(&directory).is_err());
    }

    #[test]
    fn test_sample_directory() -> Fallible<()> {
        let dir = create_tmp_data_directory()?;
        assert!(list_texts(dir.path()).is_ok());
        Ok(())
    }
}
