//! GTK Action setup for the application
//!
//! This module contains the quit action, the close-window key handling
//! (Escape and `q`), and the Unix signal hooks that route termination
//! signals through a normal application quit.

use gtk4::{gdk, gio, glib, prelude::*, Application, ApplicationWindow, EventControllerKey};
use tracing::{debug, info};

/// SIGHUP on Linux
const SIGHUP: i32 = 1;
/// SIGINT on Linux
const SIGINT: i32 = 2;
/// SIGTERM on Linux
const SIGTERM: i32 = 15;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        debug!("quit action activated");
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
}

/// Closes the window when Escape or `q` is pressed
pub fn setup_close_keys(window: &ApplicationWindow) {
    let key_controller = EventControllerKey::new();
    let window_for_keys = window.clone();

    key_controller.connect_key_pressed(move |_controller, key, _code, _modifier| match key {
        gdk::Key::Escape | gdk::Key::q => {
            debug!(key = ?key, "close key pressed");
            window_for_keys.close();
            glib::Propagation::Stop
        }
        _ => glib::Propagation::Proceed,
    });

    window.add_controller(key_controller);
}

/// Quits the application on SIGINT, SIGTERM and SIGHUP
///
/// Returning from the main loop lets the instance lock drop normally,
/// which a default signal disposition would skip.
pub fn setup_signal_handlers(app: &Application) {
    for (signum, name) in [(SIGINT, "SIGINT"), (SIGTERM, "SIGTERM"), (SIGHUP, "SIGHUP")] {
        let app_for_signal = app.clone();

        glib::unix_signal_add_local(signum, move || {
            info!(signal = name, "received signal, quitting");
            app_for_signal.quit();
            glib::ControlFlow::Break
        });
    }
}
