use color_eyre::Result;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Read, Write},
};

use linerast::Segment;

use super::{App, Log, Screen};

#[derive(Serialize, Deserialize)]
struct SaveData {
    segments: Vec<Segment>,
    log: Log,
}

impl App {
    /// saves the committed lines and the message log to the configured save file
    pub fn save_drawing(&mut self) -> Result<()> {
        let save_data = SaveData {
            segments: self.segments.clone(),
            log: self.log.clone(),
        };
        let data_str = serde_json::to_string(&save_data)?;

        let mut file = File::create(&self.config.save_path)?;
        file.write_all(data_str.as_bytes())?;

        self.log.add(
            format!(
                "Saved {} lines to {}.",
                self.segments.len(),
                self.config.save_path
            ),
            Color::Green,
        );
        Ok(())
    }

    /// loads lines and log from the save file, replacing the current drawing
    pub fn load_drawing(&mut self) -> Result<()> {
        let mut json_save_state = String::new();
        let mut file = File::open(&self.config.save_path)?;
        file.read_to_string(&mut json_save_state)?;
        let save_data = serde_json::from_str::<SaveData>(&json_save_state)?;

        self.segments = save_data.segments;
        self.log = save_data.log;
        self.anchor = None;
        // the stepped line may not exist in the loaded drawing
        if self.screen == Screen::Stepping {
            self.switch_to_main_screen();
        }
        self.redraw();

        self.log.add(
            format!(
                "Loaded {} lines from {}.",
                self.segments.len(),
                self.config.save_path
            ),
            Color::Green,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use linerast::Position;

    use super::*;
    use crate::app::config::ViewerConfig;

    fn save_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("linerast-{}-{}.json", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn drawing_survives_save_and_load() {
        let path = save_path("roundtrip");
        let config = ViewerConfig::default().set_save_path(path.clone());

        let mut app = App::new(config.clone());
        app.commit_segment(Segment::new(Position::new(0, 0), Position::new(5, 2)));
        app.commit_segment(Segment::new(Position::new(3, 9), Position::new(3, 1)));
        app.save_drawing().unwrap();

        let mut loaded = App::new(config);
        loaded.load_drawing().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.segments, app.segments);
        assert_eq!(loaded.canvas.get(3, 5).map(|c| c.glyph), Some('*'));
        let expected = format!("Loaded 2 lines from {path}.");
        assert_eq!(
            loaded.log.iter().last().map(|(message, _)| message.as_str()),
            Some(expected.as_str())
        );
    }

    #[test]
    fn missing_save_file_is_an_error() {
        let config = ViewerConfig::default().set_save_path(save_path("missing"));
        let mut app = App::new(config);
        assert!(app.load_drawing().is_err());
        assert!(app.segments.is_empty());
    }
}
