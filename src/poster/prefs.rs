//! Persisted display-customization preferences.
//!
//! Stored as an opaque key/value TOML file under the user config dir; unknown
//! keys are ignored and missing keys fall back to defaults, so older or
//! hand-edited files keep loading.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Display customization applied when rendering a poster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterPrefs {
    /// Font family hint, for consumers that can honor one.
    pub font_family: String,

    /// Font size hint in points.
    pub font_size: u8,

    /// Body text color as a hex string, e.g. "#1f2937".
    pub text_color: String,

    /// Card background color as a hex string.
    pub background_color: String,

    /// Line spacing multiplier; values of 1.8 and above render airily.
    pub line_spacing: f32,

    /// Whether the narrator chain is shown with the text.
    pub show_narrator: bool,

    /// Optional logo overlay file.
    pub logo_path: Option<PathBuf>,

    /// Logo horizontal position, percent.
    pub logo_x: u8,

    /// Logo vertical position, percent.
    pub logo_y: u8,
}

impl Default for PosterPrefs {
    fn default() -> Self {
        Self {
            font_family: "serif".to_string(),
            font_size: 16,
            text_color: "#1f2937".to_string(),
            background_color: "#ffffff".to_string(),
            line_spacing: 1.6,
            show_narrator: true,
            logo_path: None,
            logo_x: 50,
            logo_y: 50,
        }
    }
}

impl PosterPrefs {
    /// Default preferences file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nasihun").join("prefs.toml"))
    }

    /// Load preferences from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load preferences from a specific file, falling back to defaults on any
    /// read or parse problem.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::debug!(path = %path.display(), error = %err, "unreadable prefs file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save preferences to the default location.
    pub fn save(&self) -> io::Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save preferences to a specific file.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        std::fs::write(path, contents)
    }
}

/// Parse a "#rrggbb" hex color.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
