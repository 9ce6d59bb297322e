use blockfall_engine::{PieceKind, Point, Tetrimino};
use blockfall_tui::CellCanvas;
use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct PieceArg {
    /// Piece kind (one of I J L O S T Z)
    #[arg(long, default_value = "T")]
    kind: PieceKind,

    /// Rotations to apply before drawing
    #[arg(long, default_value_t = 0)]
    rotations: u32,

    /// Board-grid anchor column
    #[arg(long, default_value_t = 1)]
    x: i32,

    /// Board-grid anchor row
    #[arg(long, default_value_t = 1)]
    y: i32,

    /// Block size in terminal cells
    #[arg(long, default_value_t = 2)]
    size: i32,
}

pub fn run(arg: &PieceArg) {
    let mut piece = Tetrimino::new(arg.kind).with_size(arg.size);
    piece.set_point(Point::new(arg.x, arg.y));
    for _ in 0..arg.rotations {
        piece.rotate();
    }

    let mut canvas = CellCanvas::new(48, 16);
    piece.draw(&mut canvas);
    for line in canvas.styled_lines() {
        println!("{line}");
    }
}
