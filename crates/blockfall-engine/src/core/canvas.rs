use crate::{Color, Point, Rect, RenderError};

/// Drawing surface the game renders into.
///
/// The engine only issues drawing calls against this trait; backends live
/// outside the engine crate. Rect operations are expected to clip silently
/// at the canvas edges, while the text path reports failures as
/// [`RenderError`] so the frame loop can decide what to do with them.
pub trait Canvas {
    /// Canvas width in pixels.
    fn width(&self) -> i32;

    /// Canvas height in pixels.
    fn height(&self) -> i32;

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws the outline of `rect` in `color`.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Pixel footprint of `text` when drawn on this canvas.
    fn text_size(&self, text: &str) -> Result<(i32, i32), RenderError>;

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, color: Color, origin: Point) -> Result<(), RenderError>;
}

/// Computes the top-left origin that centers `text` inside `rect`.
pub fn center_text_in_rect(
    text: &str,
    rect: Rect,
    canvas: &impl Canvas,
) -> Result<Point, RenderError> {
    let (w, h) = canvas.text_size(text)?;
    if w > rect.w || h > rect.h {
        return Err(RenderError::TextLayout {
            text: text.to_owned(),
            width: rect.w,
            height: rect.h,
        });
    }
    Ok(Point::new(rect.x + (rect.w - w) / 2, rect.y + (rect.h - h) / 2))
}
