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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and algorithms for turning a
//! keybindings file into a cheat-sheet, including:
//! - Type definitions for bindings and the `$mod` key
//! - Shell-style word splitting and quoting
//! - The comment/`bindsym` block parser
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod parser;
pub mod shell;
pub mod types;

pub use parser::{extract_bindings, parse_bindsym, BindsymLine, ParseError};
pub use shell::ShellError;
pub use types::*;

#[cfg(test)]
mod tests;
