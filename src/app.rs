use linerast::{
    LineRasterizer, Position, Segment,
    canvas::{Canvas, Cell},
};
use ratatui::style::Color;

use config::ViewerConfig;
use log::Log;

pub mod config;
mod event_handler;
mod log;
mod render;
mod saving;

/// which screen the viewer is currently showing
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Main,
    Stepping,
    Log { offset: usize },
}

pub struct App {
    config: ViewerConfig,
    canvas: Canvas,
    painter: LineRasterizer,    // reused for every line that gets drawn
    rasterizer: LineRasterizer, // walks the line in stepping mode
    screen: Screen,
    cursor: Position,
    anchor: Option<Position>, // first endpoint of the line being placed
    segments: Vec<Segment>,
    log: Log,
}

impl App {
    pub fn new(config: ViewerConfig) -> Self {
        let canvas = Canvas::new(config.width, config.height);
        let cursor = Position::new(config.width / 2, config.height / 2);

        let mut app = Self {
            config,
            canvas,
            painter: LineRasterizer::default(),
            rasterizer: LineRasterizer::default(),
            screen: Screen::Main,
            cursor,
            anchor: None,
            segments: Vec::new(),
            log: Log::new(),
        };
        app.log.add(
            "Place endpoints with space, r draws a random line, s steps through the last one.",
            Color::Gray,
        );
        app
    }

    /// clears the canvas and draws every committed segment again
    fn redraw(&mut self) {
        self.canvas.clear();

        let line = Cell::new(self.config.line_glyph, self.config.line_color);
        let endpoint = Cell::new(self.config.endpoint_glyph, self.config.line_color);
        for segment in self.segments.iter() {
            let (start, end) = (segment.start.as_pixel(), segment.end.as_pixel());
            self.canvas.draw_line(&mut self.painter, start, end, line);
            self.canvas.plot(start.0, start.1, endpoint);
            self.canvas.plot(end.0, end.1, endpoint);
        }
    }

    fn commit_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
        self.redraw();

        let pixels = LineRasterizer::new(
            segment.start.x as i32,
            segment.start.y as i32,
            segment.end.x as i32,
            segment.end.y as i32,
        )
        .len();
        self.log.add(
            format!(
                "Line {} -> {} covers {} pixels.",
                segment.start, segment.end, pixels
            ),
            self.config.line_color,
        );
    }
}
