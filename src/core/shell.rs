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

//! src/core/shell.rs
//!
//! POSIX shell-style word splitting and quoting
//!
//! `bindsym` lines are tokenised the way a POSIX shell would split them,
//! so quoted command arguments survive as single words:
//!
//! ```text
//! bindsym $mod+d exec "rofi -show drun"
//!   → ["bindsym", "$mod+d", "exec", "rofi -show drun"]
//! ```
//!
//! The command words are then re-joined with `join`, which quotes any word
//! that a shell would otherwise split or interpret.
//!
//! # Architecture
//! Splitting uses nom combinators. A word is one or more adjacent pieces
//! (bare text, single-quoted, double-quoted, or a backslash escape) that are
//! concatenated into a single `String`.

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_till1},
    character::complete::{anychar, char, multispace0, multispace1},
    combinator::map,
    multi::{fold_many0, fold_many1, separated_list0},
    sequence::{delimited, preceded},
    IResult, Parser,
};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Any character outside the set that never needs quoting in a POSIX shell
#[allow(clippy::expect_used)]
static UNSAFE_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_@%+=:,./-]").expect("shell-safe character class should be valid regex")
});

/// Errors produced while splitting a line into words
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ShellError {
    #[error("No closing quotation")]
    UnterminatedQuote,

    #[error("No escaped character")]
    DanglingEscape,
}

/// Splits a line into words using POSIX shell rules
///
/// # Example
/// ```ignore
/// let words = split(r#"exec "firefox --new-window""#)?;
/// assert_eq!(words, vec!["exec", "firefox --new-window"]);
/// ```
pub fn split(line: &str) -> Result<Vec<String>, ShellError> {
    let parsed: IResult<&str, Vec<String>> =
        delimited(multispace0, separated_list0(multispace1, word), multispace0).parse(line);

    // separated_list0 never fails; it stops before the first word it cannot read
    let (rest, words) = parsed.unwrap_or((line, Vec::new()));

    // A word only stops early at an unclosed quote or a trailing backslash
    match rest.chars().next() {
        None => Ok(words),
        Some('\\') => Err(ShellError::DanglingEscape),
        Some(_) => Err(ShellError::UnterminatedQuote),
    }
}

/// Quotes a single word so a POSIX shell reads it back unchanged
///
/// - Empty words become `''`
/// - Words made only of safe characters are returned as-is
/// - Everything else is single-quoted, with embedded `'` written as `'"'"'`
pub fn quote(word: &str) -> String {
    if word.is_empty() {
        return "''".to_string();
    }

    if !UNSAFE_CHAR.is_match(word) {
        return word.to_string();
    }

    format!("'{}'", word.replace('\'', r#"'"'"'"#))
}

/// Quotes every word and joins them with single spaces
pub fn join<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| quote(w.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One shell word: adjacent pieces glued together
fn word(input: &str) -> IResult<&str, String> {
    fold_many1(
        alt((bare, single_quoted, double_quoted, escaped)),
        String::new,
        |mut acc, piece| {
            acc.push_str(&piece);
            acc
        },
    )
    .parse(input)
}

/// Unquoted run of ordinary characters
fn bare(input: &str) -> IResult<&str, String> {
    map(
        take_till1(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n' | '\'' | '"' | '\\')),
        String::from,
    )
    .parse(input)
}

/// `'...'` - everything literal, no escapes
fn single_quoted(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
        String::from,
    )
    .parse(input)
}

/// `"..."` - only `\"` and `\\` are escapes, other backslashes stay literal
fn double_quoted(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        fold_many0(
            alt((double_quoted_escape, double_quoted_text)),
            String::new,
            |mut acc, piece| {
                acc.push_str(&piece);
                acc
            },
        ),
        char('"'),
    )
    .parse(input)
}

fn double_quoted_text(input: &str) -> IResult<&str, String> {
    map(take_till1(|c: char| c == '"' || c == '\\'), String::from).parse(input)
}

fn double_quoted_escape(input: &str) -> IResult<&str, String> {
    map(preceded(char('\\'), anychar), |c| match c {
        '"' | '\\' => c.to_string(),
        other => format!("\\{}", other),
    })
    .parse(input)
}

/// `\x` outside quotes - the next character is taken literally
fn escaped(input: &str) -> IResult<&str, String> {
    map(preceded(char('\\'), anychar), String::from).parse(input)
}
