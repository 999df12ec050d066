// src/config/settings.rs
//
// Construction-time configuration for a sketch. Everything here is fixed
// before the window exists; runtime changes go through the Context mutators.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EaselError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    #[serde(rename = "loop")]
    pub run_loop: LoopSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub dark_title_bar: bool,
    /// Path to a window icon image. Decode failures are logged and skipped.
    pub icon: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoopSettings {
    pub frame_rate: f32,
    /// Path to a .ttf/.otf used as the default font instead of the built-in.
    pub font: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            run_loop: LoopSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "easel sketch".to_string(),
            dark_title_bar: false,
            icon: None,
        }
    }
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            font: None,
        }
    }
}

impl Settings {
    /// Load settings from `easel.toml`, first next to the executable, then in
    /// the current working directory. Falls back to defaults when neither
    /// file exists.
    pub fn load() -> Result<Self, EaselError> {
        if let Some(path) = Self::exe_dir_file() {
            return Self::from_file(path);
        }
        let cwd_path = Path::new("easel.toml");
        if cwd_path.exists() {
            return Self::from_file(cwd_path);
        }
        Ok(Self::default())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EaselError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| EaselError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| EaselError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn exe_dir_file() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let candidate = exe_path.parent()?.join("easel.toml");
        candidate.exists().then_some(candidate)
    }

    // Convenience builders for in-code configuration.

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn dark_title_bar(mut self, enabled: bool) -> Self {
        self.window.dark_title_bar = enabled;
        self
    }

    pub fn frame_rate(mut self, fps: f32) -> Self {
        self.run_loop.frame_rate = fps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.run_loop.frame_rate, 60.0);
        assert!(!settings.window.dark_title_bar);
        assert!(settings.window.icon.is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [window]
            width = 1280
            title = "test"
            "#,
        )
        .unwrap();
        assert_eq!(settings.window.width, 1280);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.window.title, "test");
        assert_eq!(settings.run_loop.frame_rate, 60.0);
    }

    #[test]
    fn builders_override_fields() {
        let settings = Settings::default()
            .size(640, 480)
            .title("built")
            .frame_rate(30.0)
            .dark_title_bar(true);
        assert_eq!(settings.window.width, 640);
        assert_eq!(settings.window.height, 480);
        assert_eq!(settings.window.title, "built");
        assert_eq!(settings.run_loop.frame_rate, 30.0);
        assert!(settings.window.dark_title_bar);
    }
}
