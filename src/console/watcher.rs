//! # Command File Watcher
//!
//! A side channel into the console: a filesystem path polled once per tick.
//!
//! The file holds a single command label. A missing file is not an error,
//! just a quiet tick. After a dispatch attempt the file is truncated, so
//! the same content is never executed twice; only an I/O failure leaves the
//! content in place for the next tick.

use crate::{CommandConsole, SceneRegistry};
use log::{error, info};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// Polls a command file and feeds its content to the console.
pub struct CommandFileWatcher {
    path: PathBuf,
}

impl CommandFileWatcher {
    /// Creates a watcher for the given path. The file does not need to
    /// exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The watched path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Polls the file once. At most one command is dispatched per poll.
    ///
    /// Returns true when a command was dispatched. Read and truncate
    /// failures are logged and swallowed; the next tick polls again.
    pub fn poll(
        &self,
        console: &mut CommandConsole,
        scene: &mut SceneRegistry,
        rng: &mut impl Rng,
    ) -> bool {
        if !self.path.exists() {
            return false;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                error!("Error reading command file: {}", error);
                return false;
            }
        };

        let command = content.trim();
        if command.is_empty() {
            return false;
        }

        info!("Command file: {}", command);
        // Unknown commands are logged by the console; the file is cleared
        // either way so they are not retried forever.
        let _ = console.execute(command, scene, rng);

        if let Err(error) = fs::write(&self.path, "") {
            error!("Error clearing command file: {}", error);
        }
        true
    }
}
