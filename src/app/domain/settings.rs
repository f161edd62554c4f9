use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::app::infrastructure::error::{AppError, Result};

pub const DEFAULT_ORGANIZATION: &str = "PlainPad";
pub const DEFAULT_APPLICATION: &str = "PlainPad";

/// Window position and size, restored at startup and saved on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    #[serde(default = "default_x")]
    pub x: i32,

    #[serde(default = "default_y")]
    pub y: i32,

    #[serde(default = "default_width")]
    pub width: i32,

    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_x() -> i32 {
    200
}

fn default_y() -> i32 {
    200
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            x: default_x(),
            y: default_y(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WindowGeometry {
    /// A window can't be restored to a zero or negative size.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(AppError::Settings(format!(
                "invalid window size {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Key-value store for window geometry.
pub trait SettingsStore {
    fn load_geometry(&self) -> WindowGeometry;
    fn save_geometry(&mut self, geometry: &WindowGeometry) -> Result<()>;
}

/// JSON file under the platform config dir, keyed by organization and application.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(organization: &str, application: &str) -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(organization);
        path.push(format!("{}.json", application));
        Self { path }
    }

    /// Store backed by an explicit file.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for JsonSettingsStore {
    fn default() -> Self {
        Self::new(DEFAULT_ORGANIZATION, DEFAULT_APPLICATION)
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load_geometry(&self) -> WindowGeometry {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                return WindowGeometry::default();
            }
        };

        match serde_json::from_str::<WindowGeometry>(&contents) {
            Ok(geometry) => match geometry.validate() {
                Ok(()) => geometry,
                Err(e) => {
                    tracing::warn!("{}. Using defaults.", e);
                    WindowGeometry::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                WindowGeometry::default()
            }
        }
    }

    fn save_geometry(&mut self, geometry: &WindowGeometry) -> Result<()> {
        geometry.validate()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(geometry)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "window geometry saved");

        Ok(())
    }
}
