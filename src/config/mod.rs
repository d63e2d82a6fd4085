// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Read-only access to the sway configuration files.
//!
//! Two files are involved:
//!
//! - **Main config** (`~/.config/sway/config`): only the `set $mod <TOKEN>`
//!   line is read. A missing file is not an error.
//! - **Keybindings** (`~/.config/sway/keybindings.conf`): the file the
//!   cheat-sheet is built from. It must exist.
//!
//! Nothing in this module ever writes to either file.
//!
//! # Example
//!
//! ```no_run
//! use sway_keybind_help::config::{load_bindings, read_modifier_binding, ConfigPaths};
//!
//! let paths = ConfigPaths::default();
//! let modifier = read_modifier_binding(&paths.main_config);
//! let bindings = load_bindings(&paths.keybindings)?;
//! println!("$mod is {}, {} bindings", modifier, bindings.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use error::ConfigError;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::{extract_bindings, shell, Binding, ModifierBinding, UNKNOWN_MODIFIER};

/// Default location of the main sway config
pub const DEFAULT_MAIN_CONFIG: &str = "~/.config/sway/config";

/// Default location of the keybindings sub-file
pub const DEFAULT_KEYBINDINGS: &str = "~/.config/sway/keybindings.conf";

/// Prefix of the line that declares the modifier key
const SET_MOD_PREFIX: &str = "set $mod ";

/// Locations of the two input files, tilde-expanded
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigPaths {
    /// Main window-manager config (source of `$mod`)
    pub main_config: PathBuf,
    /// Keybindings file (source of the table)
    pub keybindings: PathBuf,
}

impl ConfigPaths {
    /// Creates paths from user input, expanding a leading `~`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPath` if a path is not valid UTF-8.
    pub fn new(main_config: &Path, keybindings: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            main_config: expand_tilde(main_config)?,
            keybindings: expand_tilde(keybindings)?,
        })
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            main_config: PathBuf::from(shellexpand::tilde(DEFAULT_MAIN_CONFIG).as_ref()),
            keybindings: PathBuf::from(shellexpand::tilde(DEFAULT_KEYBINDINGS).as_ref()),
        }
    }
}

/// Expands `~` at the start of a path to the home directory
pub fn expand_tilde(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Reads a file into lines, each keeping its line terminator
///
/// Lines end at `\n` only; a lone `\r` (classic Mac endings) stays inside
/// the line.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file doesn't exist and
/// `ConfigError::Io` for any other read failure.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(content.split_inclusive('\n').map(String::from).collect())
}

/// Returns the raw `$mod` token from the main config
///
/// Scans for the first `set $mod <TOKEN>` line that splits into at least
/// three words. Falls back to `"unknown"` when the file is missing or
/// has no such line.
pub fn read_modifier_binding(path: &Path) -> String {
    let lines = match read_lines(path) {
        Ok(lines) => lines,
        Err(ConfigError::NotFound(_)) => {
            debug!(path = %path.display(), "main config not found, $mod unknown");
            return UNKNOWN_MODIFIER.to_string();
        }
        Err(e) => {
            warn!(error = %e, "could not read main config, $mod unknown");
            return UNKNOWN_MODIFIER.to_string();
        }
    };

    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| line.starts_with(SET_MOD_PREFIX))
        .find_map(|line| {
            let words = shell::split(line).ok()?;
            words.into_iter().nth(2)
        })
        .unwrap_or_else(|| UNKNOWN_MODIFIER.to_string())
}

/// Resolves the `$mod` key into its raw token and display name
pub fn resolve_modifier(path: &Path) -> ModifierBinding {
    ModifierBinding::from_raw(read_modifier_binding(path))
}

/// Reads the keybindings file and extracts every binding in file order
///
/// # Errors
///
/// Propagates `read_lines` errors; a missing keybindings file is fatal.
pub fn load_bindings(path: &Path) -> Result<Vec<Binding>, ConfigError> {
    let lines = read_lines(path)?;
    let bindings = extract_bindings(&lines);

    debug!(
        path = %path.display(),
        lines = lines.len(),
        bindings = bindings.len(),
        "extracted keybindings"
    );

    Ok(bindings)
}

#[cfg(test)]
mod tests;
