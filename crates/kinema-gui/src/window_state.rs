//! Remember window geometry between sessions.
//!
//! A small JSON file in the platform data dir holds the last size and
//! position. Missing or malformed state falls back to the defaults, and
//! a missing position means "let the OS center the window".

use iced::{Point, Size};
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "window.json";

const DEFAULT_SIZE: Size = Size {
    width: 1080.0,
    height: 720.0,
};
const MIN_SIZE: Size = Size {
    width: 480.0,
    height: 360.0,
};

/// Persisted window geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowState {
    width: f32,
    height: f32,
    #[serde(default)]
    position: Option<(f32, f32)>,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE.width,
            height: DEFAULT_SIZE.height,
            position: None,
        }
    }
}

impl WindowState {
    /// Saved size, clamped so a corrupt file can't produce an unusable
    /// window.
    pub fn size(&self) -> Size {
        Size::new(
            self.width.max(MIN_SIZE.width),
            self.height.max(MIN_SIZE.height),
        )
    }

    /// Saved position, if the window has ever been moved.
    pub fn position(&self) -> Option<Point> {
        self.position.map(|(x, y)| Point::new(x, y))
    }

    pub fn record_resize(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }

    pub fn record_move(&mut self, point: Point) {
        self.position = Some((point.x, point.y));
    }

    pub fn load() -> Self {
        let Some(path) = state_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed window state: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write-through on every resize/move; failures only warn.
    pub fn save(&self) {
        let Some(path) = state_path() else {
            return;
        };
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        let json = match serde_json::to_vec(self) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize window state: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&path, json) {
            tracing::warn!("Failed to save window state: {e}");
        }
    }
}

fn state_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "kinema").map(|dirs| dirs.data_dir().join(FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_clamps_to_the_minimum() {
        let mut state = WindowState::default();
        state.record_resize(Size::new(100.0, 50.0));
        assert_eq!(state.size(), MIN_SIZE);
    }

    #[test]
    fn state_without_position_centers_the_window() {
        let state: WindowState = serde_json::from_str(r#"{"width":900.0,"height":600.0}"#).unwrap();
        assert!(state.position().is_none());
        assert_eq!(state.size(), Size::new(900.0, 600.0));
    }

    #[test]
    fn moves_are_recorded_as_a_position() {
        let mut state = WindowState::default();
        state.record_move(Point::new(40.0, 60.0));
        assert_eq!(state.position(), Some(Point::new(40.0, 60.0)));
    }
}
