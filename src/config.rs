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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;

/// Optional per-directory configuration file.
pub const CONFIG_FILE: &str = "shlokdrill.toml";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MATCHING_ROUND_SIZE: usize = 3;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The port the drill server binds to.
    pub port: u16,
    /// How many pairs a matching round draws.
    pub matching_round_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            matching_round_size: DEFAULT_MATCHING_ROUND_SIZE,
        }
    }
}

/// Load `shlokdrill.toml` from the data directory, or the defaults if the
/// file is absent.
pub fn load_config(directory: &Path) -> Fallible<Config> {
    let path = directory.join(CONFIG_FILE);
    let config = if path.exists() {
        let content = read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        config
    } else {
        Config::default()
    };
    if config.matching_round_size < 2 {
        return fail("matching_round_size must be at least 2.");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;

    #[test]
    fn test_defaults_when_absent() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        let config = load_config(dir.path())?;
        assert_eq!(config.port, 8000);
        assert_eq!(config.matching_round_size, 3);
        Ok(())
    }

    #[test]
    fn test_load_config() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        write(
            dir.path().join(CONFIG_FILE),
            "port = 9100\nmatching_round_size = 4\n",
        )?;
        let config = load_config(dir.path())?;
        assert_eq!(config.port, 9100);
        assert_eq!(config.matching_round_size, 4);
        Ok(())
    }

    #[test]
    fn test_partial_config() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path().join(CONFIG_FILE), "port = 9100\n")?;
        let config = load_config(dir.path())?;
        assert_eq!(config.port, 9100);
        assert_eq!(config.matching_round_size, 3);
        Ok(())
    }

    #[test]
    fn test_round_size_of_one_is_rejected() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path().join(CONFIG_FILE), "matching_round_size = 1\n")?;
        assert!(load_config(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path().join(CONFIG_FILE), "prot = 9100\n")?;
        assert!(load_config(dir.path()).is_err());
        Ok(())
    }
}
