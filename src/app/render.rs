use ratatui::{
    Frame,
    buffer::Buffer,
    layout,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Widget},
};

use linerast::{Position, canvas::Cell};

use super::{App, Screen};

#[derive(Clone)]
pub struct CharWidget {
    position: Position,
    cell: Cell,
    bg: Color,
}

impl Widget for CharWidget {
    fn render(self, area: ratatui::layout::Rect, buf: &mut Buffer) {
        let tx = area.x + self.position.x;
        let ty = area.y + self.position.y;
        if tx < area.right() && ty < area.bottom() {
            buf[(tx, ty)]
                .set_symbol(&self.cell.glyph.to_string())
                .set_fg(self.cell.fg)
                .set_bg(self.bg);
        }
    }
}

impl App {
    pub fn render(&self, frame: &mut Frame) {
        if let Screen::Log { offset } = self.screen {
            let area = frame.area();
            self.render_log(frame, area, offset);
            return;
        }

        let layout = layout::Layout::default()
            .direction(layout::Direction::Vertical)
            .constraints(vec![
                layout::Constraint::Percentage(70),
                layout::Constraint::Min(5),
            ])
            .split(frame.area());

        let title = match self.screen {
            Screen::Stepping => "canvas (stepping)",
            _ => "canvas",
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(layout[0]);
        frame.render_widget(block, layout[0]);

        self.render_canvas(frame, inner);
        self.render_markers(frame, inner);
        self.render_log(frame, layout[1], 0);
    }

    // render cells of the canvas
    fn render_canvas(&self, frame: &mut Frame, area: layout::Rect) {
        for x in 0..self.canvas.width {
            for y in 0..self.canvas.height {
                let Some(cell) = self.canvas.get(x, y) else {
                    continue;
                };
                let ch = CharWidget {
                    position: Position::new(x, y),
                    cell: *cell,
                    bg: Color::Reset,
                };
                frame.render_widget(ch, area);
            }
        }
    }

    // render the cursor, the pending anchor and the fragment being stepped through
    fn render_markers(&self, frame: &mut Frame, area: layout::Rect) {
        if let Some(anchor) = self.anchor {
            let ch = CharWidget {
                position: anchor,
                cell: Cell::new(self.config.endpoint_glyph, Color::Yellow),
                bg: Color::Reset,
            };
            frame.render_widget(ch, area);
        }

        if self.screen == Screen::Stepping {
            if let Ok((x, y)) = self.rasterizer.pixel() {
                if self.canvas.in_bounds(x, y) {
                    let ch = CharWidget {
                        position: Position::new(x as u16, y as u16),
                        cell: Cell::new(self.config.line_glyph, Color::Black),
                        bg: Color::Yellow,
                    };
                    frame.render_widget(ch, area);
                }
            }
            return;
        }

        let under_cursor = self
            .canvas
            .get(self.cursor.x, self.cursor.y)
            .copied()
            .unwrap_or(Cell::blank());
        let glyph = if under_cursor.glyph == ' ' {
            '+'
        } else {
            under_cursor.glyph
        };
        let ch = CharWidget {
            position: self.cursor,
            cell: Cell::new(glyph, Color::Black),
            bg: Color::White,
        };
        frame.render_widget(ch, area);
    }

    fn render_log(&self, frame: &mut Frame, area: layout::Rect, offset: usize) {
        let items = self
            .log
            .iter()
            .rev()
            .skip(offset)
            .map(|(message, color)| {
                ListItem::new(message.as_str()).style(Style::new().fg(*color))
            });
        let list = List::new(items)
            .direction(ratatui::widgets::ListDirection::TopToBottom)
            .block(Block::default().title("log").borders(Borders::ALL));
        frame.render_widget(list, area);
    }
}
