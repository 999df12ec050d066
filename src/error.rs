// src/error.rs
//
// The crate error type. Startup failures (window, overlay) panic inside the
// runner instead; everything a caller can reasonably handle comes through
// here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EaselError {
    #[error("failed to load font from {path:?}")]
    FontLoad {
        path: PathBuf,
        source: nannou::text::font::Error,
    },

    #[error("failed to read settings file {path:?}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path:?}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid base64 input")]
    Base64(#[from] base64::DecodeError),
}
