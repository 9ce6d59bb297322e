use rand::Rng;

use crate::{
    Canvas, Color, DEFAULT_BLOCK_SIZE, PieceKind, Point, Rect, RenderError, center_text_in_rect,
};

/// One animated title glyph.
///
/// Built once per character when the title sequence starts; the caller
/// animates it by stepping a progress fraction through
/// [`rect_at`](Self::rect_at) and storing the result back with
/// [`set_rect`](Self::set_rect).
#[derive(Debug, Clone)]
pub struct LetterBlock {
    letter: char,
    color: Color,
    rect: Rect,
    start: Point,
    end: Point,
}

impl LetterBlock {
    #[must_use]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current on-canvas rect.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Position at animation progress `p` in `[0.0, 1.0]`: x and y linearly
    /// interpolated between the start and end points. Pure; does not move
    /// the block.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn rect_at(&self, progress: f64) -> Rect {
        let dx = (f64::from(self.end.x - self.start.x) * progress) as i32;
        let dy = (f64::from(self.end.y - self.start.y) * progress) as i32;
        Rect::new(self.start.x + dx, self.start.y + dy, self.rect.w, self.rect.h)
    }

    /// Fills the block's rect and draws its glyph centered on top, black or
    /// white on a 50/50 draw from `rng`.
    pub fn draw(&self, canvas: &mut impl Canvas, rng: &mut impl Rng) -> Result<(), RenderError> {
        canvas.fill_rect(self.rect, self.color);

        let text = self.letter.to_string();
        let origin = center_text_in_rect(&text, self.rect, canvas)?;
        let text_color = if rng.random::<bool>() {
            Color::WHITE
        } else {
            Color::BLACK
        };
        canvas.draw_text(&text, text_color, origin)
    }
}

/// Builds one block per character of `text`, resting in a row at `offset`.
///
/// Blocks start off-screen above the canvas, each one higher than the last
/// along a quadratic curve in the character index so later letters travel
/// farther; `from_bottom` mirrors the start below the canvas instead. Fill
/// colors are drawn from `rng` over the seven piece colors.
pub fn letter_blocks(
    text: &str,
    offset: Point,
    canvas: &impl Canvas,
    from_bottom: bool,
    rng: &mut impl Rng,
) -> Vec<LetterBlock> {
    let palette = PieceKind::ALL.map(PieceKind::color);
    let size = DEFAULT_BLOCK_SIZE;

    let mut blocks = Vec::new();
    for (i, letter) in (0i32..).zip(text.chars()) {
        let mut start = Point::new(offset.x + i * size, -(i * i * size) - size);
        if from_bottom {
            start.y += canvas.height();
        }
        let end = Point::new(offset.x + i * size, offset.y);

        blocks.push(LetterBlock {
            letter,
            color: palette[rng.random_range(0..palette.len())],
            rect: Rect::new(start.x, start.y, size, size),
            start,
            end,
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::core::canvas::test_canvas::RecordingCanvas;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(1)
    }

    #[test]
    fn test_builds_one_block_per_character_resting_at_the_offset() {
        let canvas = RecordingCanvas::new(640, 480);
        let blocks = letter_blocks("AB", Point::ORIGIN, &canvas, false, &mut rng());
        assert_eq!(blocks.len(), 2);
        for (i, block) in (0i32..).zip(&blocks) {
            let resting = block.rect_at(1.0);
            assert_eq!(resting.y, 0);
            assert_eq!(resting.x, i * DEFAULT_BLOCK_SIZE);
        }
    }

    #[test]
    fn test_mover_endpoints_are_the_start_and_end_rects() {
        let canvas = RecordingCanvas::new(640, 480);
        let blocks = letter_blocks("TITLE", Point::new(40, 120), &canvas, false, &mut rng());
        for (i, block) in (0i32..).zip(&blocks) {
            assert_eq!(block.rect_at(0.0), block.rect());
            assert_eq!(
                block.rect_at(1.0),
                Rect::new(
                    40 + i * DEFAULT_BLOCK_SIZE,
                    120,
                    DEFAULT_BLOCK_SIZE,
                    DEFAULT_BLOCK_SIZE
                )
            );
        }
    }

    #[test]
    fn test_start_heights_follow_the_quadratic_curve() {
        let canvas = RecordingCanvas::new(640, 480);
        let blocks = letter_blocks("FALL", Point::ORIGIN, &canvas, false, &mut rng());
        for (i, block) in (0i32..).zip(&blocks) {
            assert_eq!(block.rect().y, -(i * i * DEFAULT_BLOCK_SIZE) - DEFAULT_BLOCK_SIZE);
        }
    }

    #[test]
    fn test_from_bottom_mirrors_the_start_below_the_canvas() {
        let canvas = RecordingCanvas::new(640, 480);
        let blocks = letter_blocks("FALL", Point::ORIGIN, &canvas, true, &mut rng());
        for (i, block) in (0i32..).zip(&blocks) {
            let above = -(i * i * DEFAULT_BLOCK_SIZE) - DEFAULT_BLOCK_SIZE;
            assert_eq!(block.rect().y, above + 480);
        }
    }

    #[test]
    fn test_colors_come_from_the_piece_palette() {
        let canvas = RecordingCanvas::new(640, 480);
        let palette = PieceKind::ALL.map(PieceKind::color);
        for block in letter_blocks("BLOCKFALL", Point::ORIGIN, &canvas, false, &mut rng()) {
            assert!(palette.contains(&block.color()), "{:?}", block.color());
        }
    }

    #[test]
    fn test_identical_seeds_build_identical_titles() {
        let canvas = RecordingCanvas::new(640, 480);
        let first = letter_blocks("SAME", Point::new(10, 20), &canvas, false, &mut rng());
        let second = letter_blocks("SAME", Point::new(10, 20), &canvas, false, &mut rng());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.letter(), b.letter());
            assert_eq!(a.color(), b.color());
            assert_eq!(a.rect(), b.rect());
        }
    }

    #[test]
    fn test_draw_fills_the_rect_then_centers_the_glyph() {
        let mut canvas = RecordingCanvas::new(640, 480);
        let mut blocks = letter_blocks("A", Point::new(100, 50), &canvas, false, &mut rng());
        let block = &mut blocks[0];
        block.set_rect(block.rect_at(1.0));
        block.draw(&mut canvas, &mut rng()).unwrap();

        assert_eq!(canvas.fills, vec![(Rect::new(100, 50, 30, 30), block.color())]);
        let (text, color, origin) = &canvas.texts[0];
        assert_eq!(text, "A");
        assert!(*color == Color::BLACK || *color == Color::WHITE);
        assert_eq!(*origin, Point::new(114, 64));
    }

    #[test]
    fn test_draw_propagates_text_layout_failures() {
        let mut canvas = RecordingCanvas {
            fail_text: true,
            ..RecordingCanvas::new(640, 480)
        };
        let mut blocks = letter_blocks("A", Point::ORIGIN, &canvas, false, &mut rng());
        let block = &mut blocks[0];
        block.set_rect(block.rect_at(1.0));

        let err = block.draw(&mut canvas, &mut rng()).unwrap_err();
        assert!(matches!(err, RenderError::TextLayout { .. }));
        assert!(canvas.texts.is_empty());
    }
}
