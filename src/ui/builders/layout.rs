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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::ui::{
    components::{BindingTable, ModifierLabel},
    Controller,
};
use gtk4::{prelude::*, Align, Box as GtkBox, Button, Orientation};
use std::rc::Rc;

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Modifier summary line at top
/// - Binding table (fills remaining space)
/// - Button row with Quit at the bottom right
///
/// # Returns
///
/// Tuple of (main_vbox, binding_table)
pub fn build_main_layout(controller: Rc<Controller>) -> (GtkBox, Rc<BindingTable>) {
    // Create main vertical box
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);
    main_vbox.set_margin_start(10);
    main_vbox.set_margin_end(10);
    main_vbox.set_margin_top(10);
    main_vbox.set_margin_bottom(10);

    let modifier_label = ModifierLabel::new(&controller.modifier_summary());
    main_vbox.append(modifier_label.widget());

    let binding_table = Rc::new(BindingTable::new(controller));
    main_vbox.append(binding_table.widget());

    let button_row = GtkBox::new(Orientation::Horizontal, 6);
    button_row.set_halign(Align::End);
    button_row.set_margin_top(8);

    let quit_button = Button::builder()
        .label("Quit")
        .action_name("app.quit")
        .build();
    button_row.append(&quit_button);

    main_vbox.append(&button_row);

    (main_vbox, binding_table)
}
