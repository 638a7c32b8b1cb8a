use std::{fs, path::Path};

use color_eyre::Result;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH: &str = "linerast.json";

/// settings for the viewer. any field missing from the config file keeps its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: u16,
    pub height: u16,
    pub line_glyph: char,
    pub endpoint_glyph: char,
    pub line_color: Color,
    pub save_path: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            line_glyph: '*',
            endpoint_glyph: 'o',
            line_color: Color::Cyan,
            save_path: String::from("drawing.json"),
        }
    }
}

impl ViewerConfig {
    /// reads the config from a json file, falls back to the defaults if there is none
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str::<ViewerConfig>(&json)?;

        // an empty canvas has no cell for the cursor
        let (width, height) = (config.width, config.height);
        Ok(config.set_size(width, height))
    }

    pub fn set_size(mut self, width: u16, height: u16) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn set_save_path(mut self, save_path: impl Into<String>) -> Self {
        self.save_path = save_path.into();
        self
    }
}
