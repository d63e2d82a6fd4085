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

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::*;
use crate::core::Binding;

/// Helper: Writes `content` to a file inside a fresh temporary directory.
fn write_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_read_lines_keeps_terminators_and_order() {
    let (_temp_dir, path) = write_file("keybindings.conf", "one\ntwo\r\n\nthree");

    let lines = read_lines(&path).unwrap();
    assert_eq!(lines, vec!["one\n", "two\r\n", "\n", "three"]);
}

#[test]
fn test_read_lines_lone_carriage_return_is_not_a_break() {
    let (_temp_dir, path) = write_file("keybindings.conf", "# Old\rbindsym a exec b\nnext");

    let lines = read_lines(&path).unwrap();
    assert_eq!(lines, vec!["# Old\rbindsym a exec b\n", "next"]);
}

#[test]
fn test_read_lines_empty_file() {
    let (_temp_dir, path) = write_file("keybindings.conf", "");
    assert!(read_lines(&path).unwrap().is_empty());
}

#[test]
fn test_read_lines_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nonexistent.conf");

    match read_lines(&path) {
        Err(ConfigError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_read_modifier_binding() {
    let (_temp_dir, path) = write_file(
        "config",
        "# sway config\nset $term alacritty\n  set $mod Mod4\nset $mod Mod1\n",
    );

    assert_eq!(read_modifier_binding(&path), "Mod4", "First occurrence wins");
}

#[test]
fn test_read_modifier_binding_quoted_token() {
    let (_temp_dir, path) = write_file("config", "set $mod \"Mod1\" # alt\n");
    assert_eq!(read_modifier_binding(&path), "Mod1");
}

#[test]
fn test_read_modifier_binding_skips_unusable_lines() {
    let (_temp_dir, path) = write_file("config", "set $mod 'Mod4\nset $mod Control\n");
    assert_eq!(read_modifier_binding(&path), "Control");
}

#[test]
fn test_read_modifier_binding_no_line() {
    let (_temp_dir, path) = write_file("config", "set $modifier Mod4\nset $mod\n");
    assert_eq!(read_modifier_binding(&path), "unknown");
}

#[test]
fn test_read_modifier_binding_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config");

    assert_eq!(read_modifier_binding(&path), "unknown");
}

#[test]
fn test_resolve_modifier() {
    let (_temp_dir, path) = write_file("config", "set $mod Mod4\n");

    let modifier = resolve_modifier(&path);
    assert_eq!(modifier.raw, "Mod4");
    assert_eq!(modifier.friendly, "Super");
}

#[test]
fn test_resolve_modifier_missing_file() {
    let modifier = resolve_modifier(Path::new("/nonexistent/sway/config"));
    assert_eq!(modifier.raw, "unknown");
    assert_eq!(modifier.friendly, "unknown");
}

#[test]
fn test_load_bindings() {
    let (_temp_dir, path) = write_file(
        "keybindings.conf",
        "# Launch terminal\nbindsym $mod+Return exec alacritty\n\n# Unused note\n\nset $x y\n",
    );

    let bindings = load_bindings(&path).unwrap();
    assert_eq!(
        bindings,
        vec![Binding::new("Launch terminal", "$mod+Return", "exec alacritty")]
    );
}

#[test]
fn test_load_bindings_missing_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("keybindings.conf");

    assert!(matches!(load_bindings(&path), Err(ConfigError::NotFound(_))));
}

#[test]
fn test_config_paths_expand_tilde() {
    let paths = ConfigPaths::new(
        Path::new("/etc/sway/config"),
        Path::new("~/.config/sway/keybindings.conf"),
    )
    .unwrap();

    assert_eq!(paths.main_config, PathBuf::from("/etc/sway/config"));
    assert!(!paths.keybindings.starts_with("~"), "Tilde should be expanded");
    assert!(paths.keybindings.ends_with(".config/sway/keybindings.conf"));
}

#[test]
fn test_config_paths_default() {
    let paths = ConfigPaths::default();
    assert!(paths.main_config.ends_with("sway/config"));
    assert!(paths.keybindings.ends_with("sway/keybindings.conf"));
}
