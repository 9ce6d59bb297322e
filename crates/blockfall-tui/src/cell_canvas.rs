use std::fmt::Write as _;

use blockfall_engine::{Canvas, Color, Point, Rect, RenderError};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect as TermRect,
    style::Color as TermColor,
};

/// Terminal-cell canvas: one canvas pixel is one terminal cell.
///
/// Backed by a ratatui [`Buffer`]; rect fills become cell backgrounds and
/// text becomes cell symbols. Drawing clips silently at the edges, matching
/// the [`Canvas`] contract, and the alpha channel has no terminal
/// representation so it is ignored.
#[derive(Debug)]
pub struct CellCanvas {
    buffer: Buffer,
}

impl CellCanvas {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(TermRect::new(0, 0, width, height)),
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Rows of ANSI-styled text, ready for plain `println!` output.
    #[must_use]
    pub fn styled_lines(&self) -> Vec<String> {
        use crossterm::style::Stylize as _;

        let area = self.buffer.area;
        (0..area.height)
            .map(|y| {
                let mut line = String::new();
                for x in 0..area.width {
                    let Some(cell) = self.buffer.cell((x, y)) else {
                        continue;
                    };
                    let mut content = cell.symbol().stylize();
                    if let Some(bg) = crossterm_color(cell.style().bg) {
                        content = content.on(bg);
                    }
                    if let Some(fg) = crossterm_color(cell.style().fg) {
                        content = content.with(fg);
                    }
                    let _ = write!(line, "{content}");
                }
                line
            })
            .collect()
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.buffer.cell_mut((x, y))
    }

    fn paint(&mut self, x: i32, y: i32, color: Color) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.set_bg(term_color(color));
        }
    }
}

impl Canvas for CellCanvas {
    fn width(&self) -> i32 {
        i32::from(self.buffer.area.width)
    }

    fn height(&self) -> i32 {
        i32::from(self.buffer.area.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                self.paint(x, y, color);
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        for x in rect.x..rect.x + rect.w {
            self.paint(x, rect.y, color);
            self.paint(x, rect.y + rect.h - 1, color);
        }
        for y in rect.y..rect.y + rect.h {
            self.paint(rect.x, y, color);
            self.paint(rect.x + rect.w - 1, y, color);
        }
    }

    fn text_size(&self, text: &str) -> Result<(i32, i32), RenderError> {
        let width = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        Ok((width, 1))
    }

    fn draw_text(&mut self, text: &str, color: Color, origin: Point) -> Result<(), RenderError> {
        let fg = term_color(color);
        for (i, ch) in (0i32..).zip(text.chars()) {
            let (x, y) = (origin.x + i, origin.y);
            let Some(cell) = self.cell_mut(x, y) else {
                return Err(RenderError::OutOfBounds {
                    text: text.to_owned(),
                    x,
                    y,
                });
            };
            cell.set_char(ch);
            cell.set_fg(fg);
        }
        Ok(())
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}

fn crossterm_color(color: Option<TermColor>) -> Option<crossterm::style::Color> {
    match color? {
        TermColor::Rgb(r, g, b) => Some(crossterm::style::Color::Rgb { r, g, b }),
        // The canvas only ever writes Rgb colors.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Untouched cells keep the Reset background.
    fn bg_at(canvas: &CellCanvas, x: u16, y: u16) -> TermColor {
        let cell = canvas.buffer().cell((x, y)).unwrap();
        cell.style().bg.unwrap_or(TermColor::Reset)
    }

    fn painted(canvas: &CellCanvas, x: u16, y: u16) -> bool {
        bg_at(canvas, x, y) != TermColor::Reset
    }

    #[test]
    fn test_fill_rect_sets_cell_backgrounds() {
        let mut canvas = CellCanvas::new(8, 4);
        canvas.fill_rect(Rect::new(1, 1, 3, 2), Color::rgb(10, 20, 30));

        assert_eq!(bg_at(&canvas, 1, 1), TermColor::Rgb(10, 20, 30));
        assert_eq!(bg_at(&canvas, 3, 2), TermColor::Rgb(10, 20, 30));
        assert!(!painted(&canvas, 0, 0));
        assert!(!painted(&canvas, 4, 1));
    }

    #[test]
    fn test_fill_rect_clips_at_the_canvas_edges() {
        let mut canvas = CellCanvas::new(4, 4);
        canvas.fill_rect(Rect::new(-2, -2, 10, 10), Color::WHITE);

        for y in 0..4 {
            for x in 0..4 {
                assert!(painted(&canvas, x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_draw_rect_only_touches_the_outline() {
        let mut canvas = CellCanvas::new(8, 8);
        canvas.draw_rect(Rect::new(1, 1, 4, 4), Color::WHITE);

        assert!(painted(&canvas, 1, 1));
        assert!(painted(&canvas, 4, 1));
        assert!(painted(&canvas, 1, 4));
        assert!(painted(&canvas, 4, 4));
        assert!(!painted(&canvas, 2, 2));
        assert!(!painted(&canvas, 3, 3));
    }

    #[test]
    fn test_draw_text_writes_symbols_with_the_foreground_color() {
        let mut canvas = CellCanvas::new(8, 2);
        canvas
            .draw_text("AB", Color::BLACK, Point::new(2, 1))
            .unwrap();

        let cell = canvas.buffer().cell((2u16, 1u16)).unwrap();
        assert_eq!(cell.symbol(), "A");
        assert_eq!(cell.style().fg, Some(TermColor::Rgb(0, 0, 0)));
        assert_eq!(canvas.buffer().cell((3u16, 1u16)).unwrap().symbol(), "B");
    }

    #[test]
    fn test_draw_text_reports_out_of_bounds_anchors() {
        let mut canvas = CellCanvas::new(4, 2);
        let err = canvas
            .draw_text("A", Color::WHITE, Point::new(-1, 0))
            .unwrap_err();
        assert!(matches!(err, RenderError::OutOfBounds { .. }));

        let err = canvas
            .draw_text("WIDE", Color::WHITE, Point::new(2, 0))
            .unwrap_err();
        assert!(matches!(err, RenderError::OutOfBounds { x: 4, .. }));
    }

    #[test]
    fn test_styled_lines_cover_the_whole_canvas() {
        let mut canvas = CellCanvas::new(6, 3);
        canvas.fill_rect(Rect::new(0, 0, 6, 1), Color::rgb(200, 0, 0));
        let lines = canvas.styled_lines();

        assert_eq!(lines.len(), 3);
        // The filled row carries ANSI escapes, the untouched rows do not.
        assert!(lines[0].contains('\u{1b}'));
        assert!(!lines[2].contains('\u{1b}'));
    }

    #[test]
    fn test_canvas_dimensions_match_the_buffer_area() {
        let canvas = CellCanvas::new(40, 12);
        assert_eq!(canvas.width(), 40);
        assert_eq!(canvas.height(), 12);
    }
}
