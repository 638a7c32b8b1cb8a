use color_eyre::Result;

use app::config::{CONFIG_PATH, ViewerConfig};

mod app;

fn main() -> Result<()> {
    color_eyre::install()?;

    // an optional argument overrides where the drawing is saved
    let mut config = ViewerConfig::load(CONFIG_PATH)?;
    if let Some(save_path) = std::env::args().nth(1) {
        config = config.set_save_path(save_path);
    }

    let terminal = ratatui::init();
    let mut app = app::App::new(config);
    let result = app.run(terminal);
    ratatui::restore();
    result
}
