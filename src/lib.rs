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

//! Sway Keybinding Cheat-Sheet
//!
//! Reads a sway/i3 keybindings file and shows every documented shortcut in
//! a single GTK4 window.
//!
//! # Features
//!
//! - **Comment-driven descriptions:** The comment above each `bindsym`
//!   block becomes the row's description
//! - **Shell-aware parsing:** Quoted commands are split and re-quoted the
//!   way a POSIX shell would read them
//! - **`$mod` resolution:** Shows which physical key `$mod` stands for
//! - **Single instance:** A second launch exits quietly while a window is open
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, shell words, binding extraction)
//! - **`config`:** Read-only file access and path defaults
//! - **`instance`:** Single-instance marker file
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//! - **`logging`:** tracing subscriber setup
//!
//! # Examples
//!
//! ## Extracting bindings
//!
//! ```no_run
//! use sway_keybind_help::config::load_bindings;
//! use std::path::Path;
//!
//! let bindings = load_bindings(Path::new("/tmp/keybindings.conf"))?;
//! for binding in &bindings {
//!     println!("{}: {}", binding.description, binding);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use sway_keybind_help::config::ConfigPaths;
//! use sway_keybind_help::instance::InstanceLock;
//! use sway_keybind_help::ui::{App, Controller};
//!
//! let controller = Controller::load(&ConfigPaths::default())?;
//! if let Some(_lock) = InstanceLock::acquire(InstanceLock::default_path())? {
//!     App::new(controller).run(); // Blocks until window closes
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod instance;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Binding, ModifierBinding};
