pub use self::{core::*, engine::*, title::*};

pub mod core;
pub mod engine;
pub mod title;

/// Pixel size of one block when a piece does not carry its own size.
pub const DEFAULT_BLOCK_SIZE: i32 = 30;

/// Failure at the drawing boundary.
///
/// Surfaced from the text path of [`Canvas`] and from
/// [`LetterBlock::draw`]; the caller decides whether to skip the frame or
/// abort. Shape lookups and bag draws are total and never produce one.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RenderError {
    /// The glyph does not fit inside the target rect.
    #[display("no layout for {text:?} inside a {width}x{height} rect")]
    TextLayout {
        text: String,
        width: i32,
        height: i32,
    },
    /// The glyph was anchored outside the canvas.
    #[display("{text:?} anchored outside the canvas at ({x}, {y})")]
    OutOfBounds { text: String, x: i32, y: i32 },
}
