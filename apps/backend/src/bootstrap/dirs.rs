use std::fs;

use tracing::{error, info};

use crate::config::StorageConfig;

/// Create every working directory, recursively.
///
/// A directory that cannot be created is logged and skipped; startup goes
/// on. Returns the variables whose directory could not be created.
pub fn init_directories(storage: &StorageConfig) -> Vec<&'static str> {
    let mut failed = Vec::new();
    for (name, path) in storage.entries() {
        match fs::create_dir_all(path) {
            Ok(()) => info!(dir = name, path = %path.display(), "directory ready"),
            Err(e) => {
                error!(dir = name, path = %path.display(), error = %e, "failed to create directory");
                failed.push(name);
            }
        }
    }
    failed
}
