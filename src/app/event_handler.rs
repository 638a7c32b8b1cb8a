use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use ratatui::DefaultTerminal;
use ratatui::style::Color;

use linerast::{Position, Segment};

use super::{App, Screen};

enum InputDirection {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

fn direction_to_deltas(direction: InputDirection) -> (i32, i32) {
    match direction {
        InputDirection::Up => (0, -1),
        InputDirection::Down => (0, 1),
        InputDirection::Left => (-1, 0),
        InputDirection::Right => (1, 0),
        InputDirection::UpLeft => (-1, -1),
        InputDirection::UpRight => (1, -1),
        InputDirection::DownLeft => (-1, 1),
        InputDirection::DownRight => (1, 1),
    }
}

fn key_to_direction(code: KeyCode) -> Option<InputDirection> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(InputDirection::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(InputDirection::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(InputDirection::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(InputDirection::Right),
        KeyCode::Char('y') => Some(InputDirection::UpLeft),
        KeyCode::Char('u') => Some(InputDirection::UpRight),
        KeyCode::Char('b') => Some(InputDirection::DownLeft),
        KeyCode::Char('n') => Some(InputDirection::DownRight),
        _ => None,
    }
}

/// used to determine if the viewer should keep running
#[derive(Debug, PartialEq, Eq)]
enum ViewerAction {
    Continue,
    Exit,
}

impl App {
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if let Event::Key(key) = event::read()? {
                // windows reports both press and release
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.handle_keys(key) == ViewerAction::Exit {
                    self.save_drawing()?;
                    break Ok(());
                }
            }
        }
    }

    /// translate the key event into the appropriate viewer actions
    fn handle_keys(&mut self, key: KeyEvent) -> ViewerAction {
        // generic keybinds, these need to be handled first
        match key.modifiers {
            KeyModifiers::CONTROL => match key.code {
                KeyCode::Char('q') => return ViewerAction::Exit,
                KeyCode::Char('l') => {
                    self.toggle_fullscreen_log();
                    return ViewerAction::Continue;
                }
                KeyCode::Char('s') => {
                    if let Err(err) = self.save_drawing() {
                        self.log.add(format!("Could not save: {err}"), Color::Red);
                    }
                    return ViewerAction::Continue;
                }
                KeyCode::Char('o') => {
                    if let Err(err) = self.load_drawing() {
                        self.log.add(format!("Could not load: {err}"), Color::Red);
                    }
                    return ViewerAction::Continue;
                }
                _ => return ViewerAction::Continue,
            },
            _ => {
                if key.code == KeyCode::Esc {
                    self.switch_to_main_screen();
                    return ViewerAction::Continue;
                }
            }
        }

        match self.screen {
            Screen::Main => {
                if let Some(direction) = key_to_direction(key.code) {
                    self.move_cursor(direction);
                    return ViewerAction::Continue;
                }
                match key.code {
                    KeyCode::Char(' ') | KeyCode::Enter => self.place_endpoint(),
                    KeyCode::Char('r') => self.random_segment(),
                    KeyCode::Char('s') => self.start_stepping(),
                    KeyCode::Char('c') => self.clear_drawing(),
                    _ => {}
                }
            }
            Screen::Stepping => match key.code {
                KeyCode::Char('.') | KeyCode::Char(' ') | KeyCode::Right => self.step_fragment(),
                _ => {}
            },
            Screen::Log { ref mut offset } => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    *offset = (*offset + 1).min(self.log.len().saturating_sub(1));
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    *offset = offset.saturating_sub(1);
                }
                _ => {}
            },
        }

        ViewerAction::Continue
    }

    fn move_cursor(&mut self, direction: InputDirection) {
        let (dx, dy) = direction_to_deltas(direction);
        // keep the cursor within bounds of the canvas
        let x = (self.cursor.x as i32 + dx).clamp(0, self.canvas.width as i32 - 1);
        let y = (self.cursor.y as i32 + dy).clamp(0, self.canvas.height as i32 - 1);
        self.cursor = Position::new(x as u16, y as u16);
    }

    /// first press anchors the start of a line, second press commits it
    fn place_endpoint(&mut self) {
        match self.anchor.take() {
            None => {
                self.anchor = Some(self.cursor);
                self.log.add(format!("Line starts at {}.", self.cursor), Color::Gray);
            }
            Some(start) => self.commit_segment(Segment::new(start, self.cursor)),
        }
    }

    fn random_segment(&mut self) {
        let mut rng = rand::rng();
        let (width, height) = (self.canvas.width, self.canvas.height);
        let start = Position::new(rng.random_range(0..width), rng.random_range(0..height));
        let end = Position::new(rng.random_range(0..width), rng.random_range(0..height));
        self.anchor = None;
        self.commit_segment(Segment::new(start, end));
    }

    /// walks the most recent line one fragment at a time
    fn start_stepping(&mut self) {
        let Some(segment) = self.segments.last().copied() else {
            self.log.add("There is no line to step through.", Color::Yellow);
            return;
        };

        let (x1, y1) = segment.start.as_pixel();
        let (x2, y2) = segment.end.as_pixel();
        self.rasterizer.init(x1, y1, x2, y2);
        self.screen = Screen::Stepping;
        self.log.add(
            format!(
                "Stepping {} -> {}, {:?} dominant.",
                segment.start,
                segment.end,
                self.rasterizer.dominant()
            ),
            Color::Gray,
        );
        self.log_fragment();
    }

    fn step_fragment(&mut self) {
        self.rasterizer.next_fragment();
        if self.rasterizer.more_fragments() {
            self.log_fragment();
        } else {
            self.log.add("Line complete.", Color::Green);
            self.switch_to_main_screen();
        }
    }

    fn log_fragment(&mut self) {
        match self.rasterizer.fragment() {
            Ok(fragment) => self.log.add(format!("Fragment {fragment}"), Color::White),
            Err(err) => self.log.add(err.to_string(), Color::Red),
        }
    }

    fn clear_drawing(&mut self) {
        self.segments.clear();
        self.anchor = None;
        self.redraw();
        self.log.add("Canvas cleared.", Color::Gray);
    }

    pub(crate) fn switch_to_main_screen(&mut self) {
        self.screen = Screen::Main;
    }

    fn toggle_fullscreen_log(&mut self) {
        match self.screen {
            Screen::Log { offset: _ } => self.screen = Screen::Main,
            _ => self.screen = Screen::Log { offset: 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ViewerConfig;

    fn press(app: &mut App, code: KeyCode) -> ViewerAction {
        app.handle_keys(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn last_message(app: &App) -> Option<&str> {
        app.log.iter().last().map(|(message, _)| message.as_str())
    }

    fn app() -> App {
        App::new(ViewerConfig::default().set_size(10, 6))
    }

    #[test]
    fn cursor_stays_on_canvas() {
        let mut app = app();
        for _ in 0..20 {
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.cursor, Position::new(9, 5));

        for _ in 0..20 {
            press(&mut app, KeyCode::Char('y'));
        }
        assert_eq!(app.cursor, Position::new(0, 0));
    }

    #[test]
    fn two_presses_commit_a_line() {
        let mut app = app();
        app.cursor = Position::new(0, 0);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.anchor, Some(Position::new(0, 0)));

        app.cursor = Position::new(5, 2);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.anchor, None);
        assert_eq!(
            app.segments,
            vec![Segment::new(Position::new(0, 0), Position::new(5, 2))]
        );
        assert_eq!(app.canvas.get(2, 1).map(|c| c.glyph), Some('*'));
        assert_eq!(app.canvas.get(5, 2).map(|c| c.glyph), Some('o'));
        assert_eq!(
            last_message(&app),
            Some("Line (0, 0) -> (5, 2) covers 6 pixels.")
        );
    }

    #[test]
    fn stepping_walks_every_fragment() {
        let mut app = app();
        app.commit_segment(Segment::new(Position::new(1, 1), Position::new(1, 4)));

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen, Screen::Stepping);
        assert_eq!(app.rasterizer.pixel(), Ok((1, 1)));

        for y in 2..=4 {
            press(&mut app, KeyCode::Char('.'));
            assert_eq!(app.rasterizer.pixel(), Ok((1, y)));
        }
        press(&mut app, KeyCode::Char('.'));
        assert_eq!(app.screen, Screen::Main);
        assert!(!app.rasterizer.more_fragments());
        assert_eq!(last_message(&app), Some("Line complete."));
    }

    #[test]
    fn redraw_leaves_the_stepped_line_alone() {
        let mut app = app();
        app.commit_segment(Segment::new(Position::new(0, 0), Position::new(4, 0)));
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('.'));

        app.redraw();
        assert_eq!(app.screen, Screen::Stepping);
        assert_eq!(app.rasterizer.pixel(), Ok((1, 0)));

        press(&mut app, KeyCode::Char('.'));
        assert_eq!(app.rasterizer.pixel(), Ok((2, 0)));
    }

    #[test]
    fn loading_while_stepping_returns_to_main() {
        let path = std::env::temp_dir()
            .join(format!("linerast-stepping-{}.json", std::process::id()))
            .to_string_lossy()
            .into_owned();
        let mut app = App::new(ViewerConfig::default().set_save_path(path.clone()));
        app.commit_segment(Segment::new(Position::new(0, 0), Position::new(4, 0)));
        app.save_drawing().unwrap();

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('.'));
        app.handle_keys(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(app.screen, Screen::Main);
        assert_eq!(app.segments.len(), 1);
        assert_eq!(app.canvas.get(2, 0).map(|c| c.glyph), Some('*'));
    }

    #[test]
    fn stepping_without_lines_is_refused() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen, Screen::Main);
    }

    #[test]
    fn random_lines_stay_on_canvas() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('r'));
        }
        assert_eq!(app.segments.len(), 10);
        for segment in app.segments.iter() {
            assert!(segment.start.x < 10 && segment.end.x < 10);
            assert!(segment.start.y < 6 && segment.end.y < 6);
        }

        press(&mut app, KeyCode::Char('c'));
        assert!(app.segments.is_empty());
    }

    #[test]
    fn screens_switch() {
        let mut app = app();
        app.handle_keys(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(app.screen, Screen::Log { offset: 0 });
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Main);

        let action = app.handle_keys(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(action, ViewerAction::Exit);
    }
}
