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

//! src/core/parser.rs
//!
//! Keybinding file parser
//!
//! Pairs each descriptive comment with the `bindsym` lines directly below it:
//!
//! ```text
//! # Launch terminal                  ← description
//! bindsym $mod+Return exec alacritty ← one Binding
//! bindsym $mod+t exec alacritty      ← another Binding, same description
//!
//! # Unused note                      ← dropped: no bindsym follows
//! set $term alacritty
//! ```
//!
//! # Architecture
//! A single forward pass driven by an explicit state machine:
//!
//! ```text
//! ScanningForComment ──'#'──▶ SkippingBlank ──bindsym──▶ ConsumingBindings
//!        ▲                         │ other                   │ blank / '#'
//!        └─────────────────────────┴─────────────────────────┘
//! ```
//!
//! A line that ends a state is re-examined by `ScanningForComment`, so a
//! comment can close one block and open the next.
//!
//! Malformed declarations are skipped; parsing itself never fails.

use thiserror::Error;
use tracing::debug;

use crate::core::shell::{self, ShellError};
use crate::core::types::Binding;

/// Directive that declares a key binding
const BINDSYM: &str = "bindsym";

/// Reasons a single `bindsym` line is skipped
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("Could not split line: {0}")]
    Tokenize(#[from] ShellError),

    #[error("Line does not start with 'bindsym'")]
    NotBindsym,

    #[error("'bindsym' has no key after its options")]
    MissingKey,
}

/// Key and command of one `bindsym` declaration
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BindsymLine {
    /// Key combination (e.g., "$mod+Return")
    pub key: String,
    /// Remaining words, shell-quoted and space-joined
    pub command: String,
}

/// Parser state between lines
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanState<'a> {
    /// Looking for a `#` line to use as a description
    ScanningForComment,
    /// Have a description, skipping blank lines until the first declaration
    SkippingBlank { description: &'a str },
    /// Inside a block of declarations sharing `description`
    ConsumingBindings { description: &'a str },
}

/// Extracts all bindings from the lines of a keybindings file
///
/// Output order follows file order of the originating `bindsym` lines.
///
/// # Example
/// ```ignore
/// let lines = ["# Launch terminal\n", "bindsym $mod+Return exec alacritty\n"];
/// let bindings = extract_bindings(&lines);
/// assert_eq!(bindings[0].command, "exec alacritty");
/// ```
pub fn extract_bindings<S: AsRef<str>>(lines: &[S]) -> Vec<Binding> {
    let mut bindings = Vec::new();
    let mut state = ScanState::ScanningForComment;

    for (line_num, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let line_num = line_num + 1; // Human-readable numbers start at 1

        state = match state {
            ScanState::ScanningForComment => start_block(line),

            ScanState::SkippingBlank { description } => {
                if is_blank(line) {
                    state
                } else if line.trim_start().starts_with(BINDSYM) {
                    consume_line(description, line, line_num, &mut bindings);
                    ScanState::ConsumingBindings { description }
                } else {
                    debug!(line = line_num, description, "comment not followed by bindsym, dropped");
                    start_block(line)
                }
            }

            ScanState::ConsumingBindings { description } => {
                if is_blank(line) || line.trim_start().starts_with('#') {
                    start_block(line)
                } else {
                    consume_line(description, line, line_num, &mut bindings);
                    state
                }
            }
        };
    }

    bindings
}

/// Parses one declaration line
///
/// Format: `bindsym [--option ...] <KEY> [command words...]`
///
/// Option words (`--release`, `--no-repeat`, ...) are consumed but not
/// kept.
pub fn parse_bindsym(line: &str) -> Result<BindsymLine, ParseError> {
    let words = shell::split(line.trim())?;

    let mut words = words.iter();
    if words.next().map(String::as_str) != Some(BINDSYM) {
        return Err(ParseError::NotBindsym);
    }

    let mut rest = words.skip_while(|w| w.starts_with("--"));
    let key = rest.next().ok_or(ParseError::MissingKey)?;
    let command: Vec<&String> = rest.collect();

    Ok(BindsymLine {
        key: key.clone(),
        command: shell::join(&command),
    })
}

/// Decides whether `line` opens a new comment block
fn start_block(line: &str) -> ScanState<'_> {
    match line.strip_prefix('#') {
        Some(text) => ScanState::SkippingBlank {
            description: text.trim(),
        },
        None => ScanState::ScanningForComment,
    }
}

fn consume_line(description: &str, line: &str, line_num: usize, bindings: &mut Vec<Binding>) {
    match parse_bindsym(line) {
        Ok(parsed) => bindings.push(Binding::new(description, parsed.key, parsed.command)),
        Err(e) => debug!(line = line_num, error = %e, "skipping malformed binding line"),
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
