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

use std::fs::write;

use tempfile::TempDir;
use tempfile::tempdir;

use crate::error::Fallible;

const SAMPLE_TEXT: &str = r#"[
  {
    "number": "1.1",
    "shlok": "धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः। मामकाः पाण्डवाश्चैव किमकुर्वत सञ्जय॥",
    "meaning": "On the field of dharma, at Kurukshetra, assembled and eager to fight, what did my people and the Pandavas do, O Sanjaya?"
  },
  {
    "number": "1.5",
    "shlok": "धृष्टकेतुश्चेकितानः काशिराजश्च वीर्यवान्। पुरुजित्कुन्तिभोजश्च शैब्यश्च नरपुङ्गवः॥",
    "meaning": "Dhrishtaketu, Chekitana, and the valiant king of Kashi; Purujit, Kuntibhoja, and Shaibya, best among men."
  },
  {
    "number": "1.10",
    "shlok": "अपर्याप्तं तदस्माकं बलं भीष्माभिरक्षितम्। पर्याप्तं त्विदमेतेषां बलं भीमाभिरक्षितम्॥",
    "meaning": "Our strength, guarded by Bhishma, is immeasurable; their strength, guarded by Bhima, is measurable."
  },
  {
    "number": "2.7",
    "shlok": "कार्पण्यदोषोपहतस्वभावः पृच्छामि त्वां धर्मसम्मूढचेताः।",
    "meaning": "With my nature overcome by weak pity, confused about dharma, I ask you."
  }
]"#;

const SAMPLE_CATALOG: &str = r#"[
  { "filename": "BhagavadGita.json", "name": "श्रीमद्भगवद्गीता" }
]"#;

/// Create a temporary data directory with a catalog and one sample text.
/// The directory lives as long as the returned guard.
pub fn create_tmp_data_directory() -> Fallible<TempDir> {
    let dir = tempdir()?;
    write(dir.path().join("index.json"), SAMPLE_CATALOG)?;
    write(dir.path().join("BhagavadGita.json"), SAMPLE_TEXT)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tmp_data_directory() -> Fallible<()> {
        let dir = create_tmp_data_directory()?;
        assert!(dir.path().join("index.json").is_file());
        assert!(dir.path().join("BhagavadGita.json").is_file());
        Ok(())
    }
}
