//! Error types shared across the exhibition.
//!
//! None of these are fatal: a failed lookup renders the not-found screen,
//! playback failures degrade the transport bar to a paused state and a
//! broken picture falls back to a placeholder frame.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no artwork with id {id:?}")]
    NotFound { id: String },
}

#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The host refused to start playback without an explicit user action.
    #[error("autoplay blocked: {0}")]
    Blocked(String),
    /// An explicit play request could not be honoured.
    #[error("could not resume playback: {0}")]
    ResumeFailed(String),
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    /// No audio output device could be opened.
    #[error("no audio output available: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum PictureError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
}
