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

//! Binding table component
//!
//! Displays all bindings in a scrollable three-column table:
//! Description, Binding, Executes. Rows appear in file order and are
//! filled once; the table is a snapshot, not a live view.

use glib::BoxedAnyObject;
use gtk4::{
    gio, prelude::*, ColumnView, ColumnViewColumn, Label, ListItem, ScrolledWindow,
    SignalListItemFactory, SingleSelection,
};
use std::rc::Rc;

use crate::core::types::Binding;
use crate::ui::Controller;

/// Commands longer than this get a tooltip with the full text
const TOOLTIP_THRESHOLD: usize = 60;

/// Table columns, left to right
#[derive(Clone, Copy, Debug)]
enum Column {
    Description,
    Binding,
    Executes,
}

impl Column {
    const ALL: [Column; 3] = [Column::Description, Column::Binding, Column::Executes];

    fn title(self) -> &'static str {
        match self {
            Column::Description => "Description",
            Column::Binding => "Binding",
            Column::Executes => "Executes",
        }
    }

    /// Initial width in pixels
    fn width(self) -> i32 {
        match self {
            Column::Description => 280,
            Column::Binding => 160,
            Column::Executes => 520,
        }
    }

    fn text(self, binding: &Binding) -> &str {
        match self {
            Column::Description => &binding.description,
            Column::Binding => &binding.binding,
            Column::Executes => &binding.command,
        }
    }
}

/// Displays a scrollable table of bindings
pub struct BindingTable {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// Column view rendering the rows
    column_view: ColumnView,
    /// Row model backing the column view
    store: gio::ListStore,
    /// Controller reference for data access
    controller: Rc<Controller>,
}

impl BindingTable {
    /// Creates an empty table
    ///
    /// Call `refresh()` to fill it from the controller.
    pub fn new(controller: Rc<Controller>) -> Self {
        let scrolled_window = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let store = gio::ListStore::new::<BoxedAnyObject>();
        let selection = SingleSelection::new(Some(store.clone()));

        let column_view = ColumnView::builder()
            .model(&selection)
            .show_row_separators(true)
            .show_column_separators(true)
            .build();
        column_view.add_css_class("binding-table");

        for column in Column::ALL {
            let view_column = ColumnViewColumn::builder()
                .title(column.title())
                .factory(&Self::column_factory(column))
                .fixed_width(column.width())
                .resizable(true)
                .build();

            // Last column soaks up extra width
            if matches!(column, Column::Executes) {
                view_column.set_expand(true);
            }

            column_view.append_column(&view_column);
        }

        scrolled_window.set_child(Some(&column_view));

        Self {
            widget: scrolled_window,
            column_view,
            store,
            controller,
        }
    }

    /// Replaces all rows with the controller's bindings
    pub fn refresh(&self) {
        let rows: Vec<BoxedAnyObject> = self
            .controller
            .bindings()
            .iter()
            .cloned()
            .map(BoxedAnyObject::new)
            .collect();

        self.store.splice(0, self.store.n_items(), &rows);
    }

    /// Builds the factory that renders one column's cells as labels
    fn column_factory(column: Column) -> SignalListItemFactory {
        let factory = SignalListItemFactory::new();

        factory.connect_setup(|_, item| {
            let Some(item) = item.downcast_ref::<ListItem>() else {
                return;
            };

            let label = Label::builder()
                .xalign(0.0)
                .margin_start(6)
                .margin_end(6)
                .build();
            item.set_child(Some(&label));
        });

        factory.connect_bind(move |_, item| {
            let Some(item) = item.downcast_ref::<ListItem>() else {
                return;
            };
            let Some(label) = item.child().and_downcast::<Label>() else {
                return;
            };
            let Some(row) = item.item().and_downcast::<BoxedAnyObject>() else {
                return;
            };

            let binding = row.borrow::<Binding>();
            let text = column.text(&binding);
            label.set_label(text);

            // Add tooltip to show the full command on hover
            if text.chars().count() > TOOLTIP_THRESHOLD {
                label.set_tooltip_text(Some(text));
            } else {
                label.set_tooltip_text(None);
            }
        });

        factory
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }

    /// Get a reference to the internal ColumnView widget.
    ///
    /// This is used for keyboard focus and signal wiring.
    pub fn column_view(&self) -> &ColumnView {
        &self.column_view
    }

    /// Returns count of currently displayed rows
    pub fn count(&self) -> usize {
        self.store.n_items() as usize
    }
}
