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

//! src/core/types.rs
//!
//! Core type definitions for the keybinding cheat-sheet
//!
//! This module defines the records produced by the config reader and the
//! binding extractor:
//! - `Binding`: One description/key/command triple from the keybindings file
//! - `ModifierBinding`: The resolved `$mod` key (raw token + display name)
//!
//! Both are created once at startup and never mutated afterwards.

use serde::Serialize;
use std::fmt;

/// Sentinel used when the modifier key cannot be resolved
pub const UNKNOWN_MODIFIER: &str = "unknown";

/// A single keyboard shortcut extracted from the keybindings file
///
/// # Example
/// ```ignore
/// let binding = Binding::new("Launch terminal", "$mod+Return", "exec alacritty");
/// // Parsed from:
/// //   # Launch terminal
/// //   bindsym $mod+Return exec alacritty
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Binding {
    /// Text of the comment directly above the `bindsym` block
    pub description: String,

    /// Key combination token (e.g., "$mod+Return", "XF86AudioMute")
    pub binding: String,

    /// Command executed on trigger, re-quoted so it can be pasted into a shell
    /// Empty when the `bindsym` line carries no command words
    pub command: String,
}

impl Binding {
    pub fn new(
        description: impl Into<String>,
        binding: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            binding: binding.into(),
            command: command.into(),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.binding, self.command)
    }
}

/// The window manager's configured `$mod` key
///
/// Holds the raw token from `set $mod <TOKEN>` alongside a human-friendly
/// name (Mod4 → Super, Mod1 → Alt, ...).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ModifierBinding {
    /// Token exactly as written in the config (e.g., "Mod4")
    pub raw: String,

    /// Display name (e.g., "Super")
    pub friendly: String,
}

impl ModifierBinding {
    /// Builds a modifier binding from its raw token, deriving the friendly name
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let friendly = friendly_name(&raw);
        Self { raw, friendly }
    }

    /// The value used when the main config is missing or has no `set $mod`
    pub fn unknown() -> Self {
        Self::from_raw(UNKNOWN_MODIFIER)
    }

    /// Returns true if the modifier could not be resolved
    pub fn is_unknown(&self) -> bool {
        self.raw == UNKNOWN_MODIFIER
    }
}

impl Default for ModifierBinding {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for ModifierBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$mod = {} ({})", self.friendly, self.raw)
    }
}

/// Maps an X11 modifier token to the name printed on the keyboard
///
/// Tokens outside the table are returned unchanged.
pub fn friendly_name(token: &str) -> String {
    let name = match token {
        "Mod4" => "Super",
        "Mod1" => "Alt",
        "Mod3" => "Mod3",
        "Mod2" => "Mod2",
        "Control" => "Ctrl",
        "Shift" => "Shift",
        other => other,
    };

    name.to_string()
}
