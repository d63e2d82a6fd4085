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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller to display data.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Owns Controller (loaded before the window exists)
//!   ├─ Registers quit action and signal handlers
//!   └─ Builds main window on activate
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, gio, glib, Application, ApplicationWindow, CssProvider, Settings};
use std::rc::Rc;
use tracing::{debug, warn};

use crate::ui::{actions, builders, Controller};

/// GTK application identifier
pub const APP_ID: &str = "com.tidynest.sway-keybind-help";

/// Window title
const WINDOW_TITLE: &str = "Sway Keybindings";

/// GTK4 Application for the keybinding cheat-sheet
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App around an already-loaded Controller
    ///
    /// The application is registered as non-unique: the instance lock is
    /// the only coordination between processes, not D-Bus.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sway_keybind_help::config::ConfigPaths;
    /// use sway_keybind_help::ui::{App, Controller};
    ///
    /// let controller = Controller::load(&ConfigPaths::default())?;
    /// let app = App::new(controller);
    /// # Ok::<(), sway_keybind_help::config::ConfigError>(())
    /// ```
    pub fn new(controller: Controller) -> Self {
        let app = Application::builder()
            .application_id(APP_ID)
            .flags(gio::ApplicationFlags::NON_UNIQUE)
            .build();

        Self {
            app,
            controller: Rc::new(controller),
        }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the window closes,
    /// the quit action fires, or a termination signal arrives.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use sway_keybind_help::config::ConfigPaths;
    /// # use sway_keybind_help::ui::{App, Controller};
    /// # let controller = Controller::load(&ConfigPaths::default())?;
    /// let exit_code = App::new(controller).run(); // Blocks until window closes
    /// # Ok::<(), sway_keybind_help::config::ConfigError>(())
    /// ```
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();

        actions::setup_quit_action(&self.app);
        actions::setup_signal_handlers(&self.app);

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        // Run the application (blocks until exit)
        self.app.run_with_args::<&str>(&[])
    }

    /// Loads the dark theme
    ///
    /// Asks GTK for its dark variant and applies `style.css` on top at
    /// APPLICATION priority level.
    fn load_css() {
        let Some(display) = gdk::Display::default() else {
            warn!("no default display, skipping theme");
            return;
        };

        Settings::for_display(&display).set_gtk_application_prefer_dark_theme(true);

        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates. It creates
    /// the window and all components, then fills the table once.
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title(WINDOW_TITLE)
            .default_width(900)
            .default_height(600)
            .build();

        let (main_vbox, binding_table) = builders::build_main_layout(controller);
        window.set_child(Some(&main_vbox));

        actions::setup_close_keys(&window);

        // Initial (and only) display
        binding_table.refresh();
        debug!(rows = binding_table.count(), "binding table populated");

        // Make table focusable for keyboard scrolling
        binding_table.column_view().set_can_focus(true);
        binding_table.column_view().grab_focus();

        window.present();
    }
}
