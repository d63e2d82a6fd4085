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

//! Parser module tests
//!
//! Tests for extracting bindings from keybinding files:
//! - Single `bindsym` line parsing (options, missing key, quoting)
//! - Comment/bindsym block pairing
//! - Abandoned comments and malformed lines
//! - Ordering and idempotence

use crate::core::{
    parser::*,
    types::Binding,
};

/// Splits a literal into lines that keep their terminators, like a file read
fn file_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

#[test]
fn test_parse_bindsym_simple() {
    let parsed = parse_bindsym("bindsym $mod+Return exec alacritty").unwrap();
    assert_eq!(parsed.key, "$mod+Return");
    assert_eq!(parsed.command, "exec alacritty");
}

#[test]
fn test_parse_bindsym_skips_options() {
    let parsed = parse_bindsym("bindsym --release-only $mod+F1 exec foo").unwrap();
    assert_eq!(parsed.key, "$mod+F1");
    assert_eq!(parsed.command, "exec foo");

    let parsed = parse_bindsym("bindsym --release --no-repeat Print exec grim").unwrap();
    assert_eq!(parsed.key, "Print");
    assert_eq!(parsed.command, "exec grim");
}

#[test]
fn test_parse_bindsym_without_command() {
    let parsed = parse_bindsym("bindsym $mod+x").unwrap();
    assert_eq!(parsed.key, "$mod+x");
    assert_eq!(parsed.command, "");
}

#[test]
fn test_parse_bindsym_requotes_command() {
    let parsed = parse_bindsym(r#"bindsym $mod+d exec "rofi -show drun""#).unwrap();
    assert_eq!(parsed.command, "exec 'rofi -show drun'");
}

#[test]
fn test_parse_bindsym_errors() {
    assert_eq!(parse_bindsym("bindsym"), Err(ParseError::MissingKey));
    assert_eq!(parse_bindsym("bindsym --release"), Err(ParseError::MissingKey));
    assert_eq!(parse_bindsym("bindcode 36 exec foo"), Err(ParseError::NotBindsym));
    assert!(matches!(
        parse_bindsym("bindsym $mod+q exec 'unterminated"),
        Err(ParseError::Tokenize(_))
    ));
}

#[test]
fn test_launch_terminal_scenario() {
    let lines = file_lines("# Launch terminal\nbindsym $mod+Return exec alacritty\n");
    let bindings = extract_bindings(&lines);

    assert_eq!(
        bindings,
        vec![Binding::new("Launch terminal", "$mod+Return", "exec alacritty")]
    );
}

#[test]
fn test_comment_without_bindsym_is_dropped() {
    let lines = file_lines("# Unused note\n\nset $term alacritty\n");
    assert!(extract_bindings(&lines).is_empty());
}

#[test]
fn test_blank_lines_between_comment_and_bindsym() {
    let lines = file_lines("# Lock screen\n\n   \nbindsym $mod+l exec swaylock\n");
    let bindings = extract_bindings(&lines);

    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].description, "Lock screen");
    assert_eq!(bindings[0].binding, "$mod+l");
}

#[test]
fn test_multiple_bindsym_share_description() {
    let config = r#"# Focus windows
bindsym $mod+h focus left
bindsym $mod+j focus down
    bindsym $mod+k focus up

# Kill focused window
bindsym $mod+Shift+q kill
"#;
    let bindings = extract_bindings(&file_lines(config));

    assert_eq!(bindings.len(), 4);
    assert!(bindings[..3].iter().all(|b| b.description == "Focus windows"));
    assert_eq!(bindings[2].binding, "$mod+k");
    assert_eq!(bindings[3].description, "Kill focused window");
    assert_eq!(bindings[3].command, "kill");
}

#[test]
fn test_block_ends_at_blank_line() {
    let config = "# Audio\nbindsym XF86AudioMute exec pactl set-sink-mute 0 toggle\n\nbindsym $mod+p exec orphan\n";
    let bindings = extract_bindings(&file_lines(config));

    assert_eq!(bindings.len(), 1, "bindsym after a blank line has no comment");
    assert_eq!(bindings[0].command, "exec pactl set-sink-mute 0 toggle");
}

#[test]
fn test_comment_directly_ends_block() {
    let config = "# First\nbindsym a exec one\n# Second\nbindsym b exec two\n";
    let bindings = extract_bindings(&file_lines(config));

    assert_eq!(
        bindings,
        vec![
            Binding::new("First", "a", "exec one"),
            Binding::new("Second", "b", "exec two"),
        ]
    );
}

#[test]
fn test_comment_run_uses_line_above_bindings() {
    let config = "# Screenshots\n# Uses grim and slurp\nbindsym Print exec grim\n";
    let bindings = extract_bindings(&file_lines(config));

    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].description, "Uses grim and slurp");
}

#[test]
fn test_abandoned_comment_line_can_open_next_block() {
    let config = "# Note\nset $mod Mod4\n# Real\nbindsym $mod+r mode resize\n";
    let bindings = extract_bindings(&file_lines(config));

    assert_eq!(bindings, vec![Binding::new("Real", "$mod+r", "mode resize")]);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let config = r#"# Mixed block
bindsym $mod+a exec "broken
bindsym --release
exec_always mako
bindsym $mod+b exec ok
"#;
    let bindings = extract_bindings(&file_lines(config));

    assert_eq!(bindings, vec![Binding::new("Mixed block", "$mod+b", "exec ok")]);
}

#[test]
fn test_indented_comment_does_not_open_block() {
    let config = "   # Indented\nbindsym $mod+i exec nope\n";
    assert!(extract_bindings(&file_lines(config)).is_empty());
}

#[test]
fn test_description_strips_hash_and_whitespace() {
    let config = "#    Toggle fullscreen   \nbindsym $mod+f fullscreen toggle\n";
    let bindings = extract_bindings(&file_lines(config));
    assert_eq!(bindings[0].description, "Toggle fullscreen");
}

#[test]
fn test_trailing_comment_at_eof() {
    let config = "# Launch browser\nbindsym $mod+b exec firefox\n# Dangling";
    let bindings = extract_bindings(&file_lines(config));
    assert_eq!(bindings.len(), 1);
}

#[test]
fn test_lines_without_terminators() {
    let config = "# Launcher\nbindsym $mod+d exec wofi\n\n# Exit\nbindsym $mod+Shift+e exit";
    let lines: Vec<&str> = config.lines().collect();
    let bindings = extract_bindings(&lines);

    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[1].binding, "$mod+Shift+e");
    assert_eq!(bindings[1].command, "exit");
}

#[test]
fn test_order_preserved_and_idempotent() {
    let config = r#"# Workspaces
bindsym $mod+1 workspace number 1
bindsym $mod+2 workspace number 2
bindsym $mod+3 workspace number 3

# Reload
bindsym $mod+Shift+c reload
"#;
    let lines = file_lines(config);
    let first = extract_bindings(&lines);
    let second = extract_bindings(&lines);

    assert_eq!(first, second);

    let keys: Vec<&str> = first.iter().map(|b| b.binding.as_str()).collect();
    assert_eq!(keys, vec!["$mod+1", "$mod+2", "$mod+3", "$mod+Shift+c"]);
}

#[test]
fn test_empty_input() {
    let lines: Vec<&str> = Vec::new();
    assert!(extract_bindings(&lines).is_empty());
}
