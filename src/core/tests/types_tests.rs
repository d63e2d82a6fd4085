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

//! Type tests
//!
//! Tests for display formatting and modifier name resolution

use crate::core::types::{friendly_name, Binding, ModifierBinding, UNKNOWN_MODIFIER};

#[test]
fn test_friendly_name_table() {
    assert_eq!(friendly_name("Mod4"), "Super");
    assert_eq!(friendly_name("Mod1"), "Alt");
    assert_eq!(friendly_name("Mod3"), "Mod3");
    assert_eq!(friendly_name("Mod2"), "Mod2");
    assert_eq!(friendly_name("Control"), "Ctrl");
    assert_eq!(friendly_name("Shift"), "Shift");
}

#[test]
fn test_friendly_name_passthrough() {
    assert_eq!(friendly_name("Mod5"), "Mod5");
    assert_eq!(friendly_name("mod4"), "mod4"); // Lookup is case-sensitive
    assert_eq!(friendly_name(UNKNOWN_MODIFIER), UNKNOWN_MODIFIER);
}

#[test]
fn test_modifier_binding_from_raw() {
    let modifier = ModifierBinding::from_raw("Mod4");
    assert_eq!(modifier.raw, "Mod4");
    assert_eq!(modifier.friendly, "Super");
    assert!(!modifier.is_unknown());
}

#[test]
fn test_modifier_binding_unknown() {
    let modifier = ModifierBinding::default();
    assert_eq!(modifier.raw, "unknown");
    assert_eq!(modifier.friendly, "unknown");
    assert!(modifier.is_unknown());
}

#[test]
fn test_modifier_binding_display() {
    let modifier = ModifierBinding::from_raw("Mod1");
    assert_eq!(format!("{}", modifier), "$mod = Alt (Mod1)");
}

#[test]
fn test_binding_display() {
    let binding = Binding::new("Launch terminal", "$mod+Return", "exec alacritty");
    assert_eq!(format!("{}", binding), "$mod+Return → exec alacritty");
}
