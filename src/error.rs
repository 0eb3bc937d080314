use std::path::PathBuf;

use crossterm::event::KeyCode;

/// Failures while loading sprite images at startup
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to load asset {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Input events that produce no action. Never fatal.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("no action bound to key {0:?}")]
    UnmappedKey(KeyCode),
}
