use blockfall_engine::{PieceKind, Tetrimino};
use blockfall_tui::CellCanvas;
use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct PreviewArg {
    /// Piece kind (one of I J L O S T Z)
    #[arg(long, default_value = "I")]
    kind: PieceKind,

    /// Scoreboard panel height the preview square is sized from
    #[arg(long, default_value_t = 30)]
    scoreboard_height: u16,

    /// Canvas width in terminal cells
    #[arg(long, default_value_t = 64)]
    width: u16,
}

pub fn run(arg: &PreviewArg) {
    let mut canvas = CellCanvas::new(arg.width, arg.scoreboard_height);
    Tetrimino::new(arg.kind).draw_preview(&mut canvas, i32::from(arg.scoreboard_height));
    for line in canvas.styled_lines() {
        println!("{line}");
    }
}
