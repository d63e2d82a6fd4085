//! MVC Controller - Mediates between Model (config files) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Resolve the `$mod` key from the main config
//! - Load keybindings from the keybindings file
//! - Provide data to View in UI-friendly format
//!
//! # Architecture
//!
//! The Controller owns an immutable snapshot taken once at startup. It
//! doesn't know about GTK4 widgets, so it can be tested without a display.
//! There is no reload path: the window shows the files as they were when
//! it opened.

use serde::Serialize;

use crate::config::{load_bindings, resolve_modifier, ConfigError, ConfigPaths};
use crate::core::{Binding, ModifierBinding};

/// MVC Controller holding the loaded cheat-sheet
#[derive(Debug, Serialize)]
pub struct Controller {
    /// Resolved `$mod` key
    modifier: ModifierBinding,
    /// Bindings in file order
    bindings: Vec<Binding>,
}

impl Controller {
    /// Loads the modifier and all bindings from the given files
    ///
    /// # Arguments
    ///
    /// * `paths` - Locations of the main config and keybindings file
    ///
    /// # Returns
    ///
    /// * `Ok(Controller)` - Snapshot loaded
    /// * `Err(ConfigError)` - Keybindings file not found or unreadable
    ///
    /// A missing main config is not an error; the modifier is then
    /// reported as "unknown".
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sway_keybind_help::config::ConfigPaths;
    /// use sway_keybind_help::ui::Controller;
    ///
    /// let controller = Controller::load(&ConfigPaths::default())?;
    /// println!("Loaded {} keybindings", controller.binding_count());
    /// # Ok::<(), sway_keybind_help::config::ConfigError>(())
    /// ```
    pub fn load(paths: &ConfigPaths) -> Result<Self, ConfigError> {
        let modifier = resolve_modifier(&paths.main_config);
        let bindings = load_bindings(&paths.keybindings)?;

        Ok(Self::from_parts(modifier, bindings))
    }

    /// Creates a Controller from already-loaded data
    pub fn from_parts(modifier: ModifierBinding, bindings: Vec<Binding>) -> Self {
        Self { modifier, bindings }
    }

    /// Returns all bindings in file order
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Returns the resolved `$mod` key
    pub fn modifier(&self) -> &ModifierBinding {
        &self.modifier
    }

    /// Text for the modifier summary line, e.g. "$mod = Super (Mod4)"
    pub fn modifier_summary(&self) -> String {
        self.modifier.to_string()
    }

    /// Returns total count of loaded bindings
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}
