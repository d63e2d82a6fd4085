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

//! Modifier summary component
//!
//! One-line label showing which key `$mod` stands for.

use gtk4::{prelude::*, Align, Label};

/// Label reading "$mod = Super (Mod4)"
pub struct ModifierLabel {
    /// Root widget
    widget: Label,
}

impl ModifierLabel {
    /// Creates the label with the given summary text
    pub fn new(summary: &str) -> Self {
        let widget = Label::builder()
            .label(summary)
            .halign(Align::Start)
            .margin_bottom(6)
            .selectable(true)
            .build();
        widget.add_css_class("modifier-summary");

        Self { widget }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &Label {
        &self.widget
    }
}
