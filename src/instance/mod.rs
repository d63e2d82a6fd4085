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

//! Single-instance guard backed by an exclusively-created marker file
//!
//! Only one cheat-sheet window should be open at a time. The first process
//! creates the marker with create-exclusive semantics; any later process
//! sees the collision and exits quietly.
//!
//! # Lifecycle
//!
//! ```text
//! acquire() ──create_new──▶ Some(InstanceLock) ──drop──▶ marker removed
//!     │
//!     └──AlreadyExists──▶ None (another instance owns the UI)
//! ```
//!
//! The marker holds the owning PID for diagnostics only; it is never read
//! back. Removal on drop tolerates a marker that has already vanished.
//!
//! # Example
//!
//! ```no_run
//! use sway_keybind_help::instance::InstanceLock;
//!
//! let Some(_lock) = InstanceLock::acquire(InstanceLock::default_path())? else {
//!     return Ok(()); // Already running
//! };
//! // ... run the UI; the marker is removed when `_lock` drops
//! # Ok::<(), sway_keybind_help::instance::LockError>(())
//! ```

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// File name of the marker inside the temporary directory
const LOCK_FILE_NAME: &str = "sway-keybind-help.lock";

/// Errors that prevent the guard from being created
#[derive(Debug, Error)]
pub enum LockError {
    /// Marker could not be created for a reason other than already existing
    #[error("Failed to create instance lock {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Marker was created but the PID could not be written
    #[error("Failed to write PID to instance lock {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Proof that this process is the only running instance
///
/// Dropping the guard removes the marker file.
#[derive(Debug)]
pub struct InstanceLock {
    path: PathBuf,
    /// Cleared once the marker has been removed, shared with the panic hook
    owned: Arc<AtomicBool>,
    /// Set once `install_panic_cleanup` has chained its hook
    hook_installed: AtomicBool,
}

impl InstanceLock {
    /// Well-known marker location shared by every instance
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join(LOCK_FILE_NAME)
    }

    /// Tries to become the single running instance
    ///
    /// # Returns
    ///
    /// * `Ok(Some(lock))` - Marker created, this process owns it
    /// * `Ok(None)` - Marker already exists, another instance is running
    /// * `Err(LockError)` - Marker could not be created or written
    pub fn acquire(path: impl Into<PathBuf>) -> Result<Option<Self>, LockError> {
        let path = path.into();

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                info!(path = %path.display(), "another instance is already running");
                return Ok(None);
            }
            Err(source) => return Err(LockError::Create { path, source }),
        };

        // From here on the marker exists, so build the guard first and let
        // Drop clean up if the write fails.
        let lock = Self {
            path,
            owned: Arc::new(AtomicBool::new(true)),
            hook_installed: AtomicBool::new(false),
        };

        if let Err(source) = write!(file, "{}", process::id()) {
            return Err(LockError::Write {
                path: lock.path.clone(),
                source,
            });
        }

        debug!(path = %lock.path.display(), pid = process::id(), "instance lock acquired");
        Ok(Some(lock))
    }

    /// Path of the marker this guard owns
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the marker even if the process panics
    ///
    /// Release builds abort on panic, which skips destructors, so the
    /// marker is also removed from the panic hook. The previous hook still
    /// runs afterwards.
    ///
    /// The hook only touches the marker while this guard still owns it; after
    /// the guard drops, a later panic leaves a newer instance's marker alone.
    /// Calling this more than once installs a single hook.
    pub fn install_panic_cleanup(&self) {
        if self.hook_installed.swap(true, Ordering::SeqCst) {
            return;
        }

        let path = self.path.clone();
        let owned = Arc::clone(&self.owned);
        let previous = std::panic::take_hook();

        std::panic::set_hook(Box::new(move |info| {
            release(&path, &owned);
            previous(info);
        }));
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        release(&self.path, &self.owned);
    }
}

/// Removes the marker once, and only if it is still ours
fn release(path: &Path, owned: &AtomicBool) {
    if owned.swap(false, Ordering::SeqCst) {
        remove_marker(path);
    }
}

/// Deletes the marker, ignoring a marker that is already gone
fn remove_marker(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "instance lock released"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove instance lock"),
    }
}

#[cfg(test)]
mod tests;
