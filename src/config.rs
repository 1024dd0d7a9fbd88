//! Editor settings
//!
//! Stored as RON in the user's config directory (or a path given on the
//! command line). Every field has a default, so a partial file only
//! overrides what it names and a missing file means "all defaults".

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::editor::Camera;
use crate::world::{checked_dimensions, TileKindDef, TileSet, TileSetError, TileSetPreset};

/// Which tile kinds the editor paints with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TileSetConfig {
    Preset(TileSetPreset),
    Custom(Vec<TileKindDef>),
}

impl Default for TileSetConfig {
    fn default() -> Self {
        TileSetConfig::Preset(TileSetPreset::Maze)
    }
}

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("could not serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid tile set: {0}")]
    TileSet(#[from] TileSetError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Tile edge in pixels at zoom 1
    pub tile_size: f32,
    /// Offset of cell (0, 0) from the grid view's top-left corner
    pub screen_origin: (f32, f32),
    /// Size of the blank grid created at startup
    pub default_rows: usize,
    pub default_cols: usize,
    /// Arrow-key pan speed, pixels per second
    pub pan_speed: f32,
    /// Zoom added per wheel notch
    pub zoom_speed: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub default_zoom: f32,
    pub tileset: TileSetConfig,
    /// Starting directory for open/save dialogs
    pub map_directory: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            screen_origin: (64.0, 64.0),
            default_rows: 20,
            default_cols: 20,
            pan_speed: 400.0,
            zoom_speed: 0.1,
            min_zoom: 0.25,
            max_zoom: 4.0,
            default_zoom: 1.0,
            tileset: TileSetConfig::default(),
            map_directory: None,
        }
    }
}

impl EditorConfig {
    /// `<config dir>/mazegrid/config.ron`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mazegrid").join("config.ron"))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    /// Load and validate a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Read { path: path.to_path_buf(), source: e }),
        };
        let config: Self = ron::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Reject values the editor cannot work with
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(ConfigError::Invalid(format!("tile_size must be positive, got {}", self.tile_size)));
        }
        if !(self.min_zoom > 0.0 && self.max_zoom > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom bounds must be positive, got {}..{}",
                self.min_zoom, self.max_zoom
            )));
        }
        let (origin_x, origin_y) = self.screen_origin;
        let numbers = [
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("default_zoom", self.default_zoom),
            ("zoom_speed", self.zoom_speed),
            ("pan_speed", self.pan_speed),
            ("screen_origin.0", origin_x),
            ("screen_origin.1", origin_y),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::Invalid(format!("{} must be a finite number, got {}", name, value)));
        }
        if self.default_zoom <= 0.0 {
            return Err(ConfigError::Invalid(format!("default_zoom must be positive, got {}", self.default_zoom)));
        }
        checked_dimensions(self.default_rows as i64, self.default_cols as i64)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.tile_set()?;
        Ok(self)
    }

    pub fn tile_set(&self) -> Result<TileSet, ConfigError> {
        match &self.tileset {
            TileSetConfig::Preset(preset) => Ok(TileSet::preset(*preset)),
            TileSetConfig::Custom(defs) => Ok(TileSet::from_defs(defs.clone())?),
        }
    }

    /// Camera with this config's zoom bounds and pan speed
    pub fn camera(&self) -> Camera {
        Camera::new(self.min_zoom, self.max_zoom, self.default_zoom, self.pan_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::TileKind;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = EditorConfig::load(&dir.path().join("config.ron")).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_named_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "(tile_size: 16.0, tileset: Preset(Coins))").unwrap();

        let config = EditorConfig::load(&path).unwrap();
        assert_eq!(config.tile_size, 16.0);
        assert_eq!(config.default_rows, 20);
        assert_eq!(config.tile_set().unwrap().len(), 4);
    }

    #[test]
    fn test_custom_tileset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(
            &path,
            r#"(tileset: Custom([
                (ordinal: 0, name: "Empty", color: (0, 0, 0, 255)),
                (ordinal: 1, name: "Wall", color: (255, 255, 255, 255)),
                (ordinal: 2, name: "Exit", color: (0, 200, 200, 255), special: true),
            ]))"#,
        )
        .unwrap();

        let tiles = EditorConfig::load(&path).unwrap().tile_set().unwrap();
        assert_eq!(tiles.name(TileKind(2)), "Exit");
        assert!(tiles.is_special(TileKind(2)));
    }

    #[test]
    fn test_bad_files_are_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");

        std::fs::write(&path, "(tile_size: ").unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(ConfigError::Parse { .. })));

        std::fs::write(&path, "(tile_size: -4.0)").unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(ConfigError::Invalid(_))));

        std::fs::write(&path, "(default_rows: 0)").unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(ConfigError::Invalid(_))));

        std::fs::write(&path, r#"(tileset: Custom([(ordinal: 0, name: "Empty", color: (0, 0, 0, 255))]))"#).unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(ConfigError::TileSet(_))));
    }

    #[test]
    fn test_non_finite_camera_values_rejected() {
        let bad = [
            EditorConfig { default_zoom: f32::NAN, ..Default::default() },
            EditorConfig { default_zoom: 0.0, ..Default::default() },
            EditorConfig { zoom_speed: f32::INFINITY, ..Default::default() },
            EditorConfig { pan_speed: f32::NEG_INFINITY, ..Default::default() },
            EditorConfig { max_zoom: f32::INFINITY, ..Default::default() },
            EditorConfig { screen_origin: (f32::NAN, 0.0), ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.clone().validate(), Err(ConfigError::Invalid(_))), "{:?} accepted", config);
        }
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ron_round_trip() {
        let config = EditorConfig {
            tile_size: 24.0,
            map_directory: Some(PathBuf::from("maps")),
            ..Default::default()
        };
        let text = config.to_ron().unwrap();
        let parsed: EditorConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_camera_uses_zoom_settings() {
        let config = EditorConfig { min_zoom: 0.5, max_zoom: 2.0, default_zoom: 1.5, ..Default::default() };
        let mut camera = config.camera();
        assert_eq!(camera.zoom(), 1.5);
        camera.zoom_by(100.0, 0.1);
        assert_eq!(camera.zoom(), 2.0);
        camera.zoom_by(-100.0, 0.1);
        assert_eq!(camera.zoom(), 0.5);
    }
}
