use anyhow::Context as _;
use blockfall_engine::{DEFAULT_BLOCK_SIZE, Point, letter_blocks};
use blockfall_tui::CellCanvas;
use clap::Args;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

#[derive(Debug, Clone, Args)]
pub struct TitleArg {
    /// Title text
    text: String,

    /// Animation progress in [0, 1]
    #[arg(long, default_value_t = 1.0)]
    progress: f64,

    /// Start letters below the canvas instead of above it
    #[arg(long)]
    from_bottom: bool,

    /// Seed for reproducible colors
    #[arg(long)]
    seed: Option<u64>,

    /// Resting row of the letters, in pixels from the canvas top
    #[arg(long, default_value_t = 2)]
    offset_y: i32,
}

pub fn run(arg: &TitleArg) -> anyhow::Result<()> {
    let mut rng = Pcg32::seed_from_u64(arg.seed.unwrap_or_else(|| rand::rng().random()));

    let letters = i32::try_from(arg.text.chars().count()).context("title text too long")?;
    let width = u16::try_from(letters * DEFAULT_BLOCK_SIZE)
        .context("title text too wide for a terminal canvas")?;
    let height = u16::try_from(arg.offset_y + DEFAULT_BLOCK_SIZE)
        .context("title offset too tall for a terminal canvas")?;

    let mut canvas = CellCanvas::new(width, height);
    let mut blocks = letter_blocks(
        &arg.text,
        Point::new(0, arg.offset_y),
        &canvas,
        arg.from_bottom,
        &mut rng,
    );

    let progress = arg.progress.clamp(0.0, 1.0);
    for block in &mut blocks {
        block.set_rect(block.rect_at(progress));
        // Letters still off-screen cannot center their glyph; skip them and
        // keep drawing the rest of the frame.
        if let Err(err) = block.draw(&mut canvas, &mut rng) {
            eprintln!("skipping {:?}: {err}", block.letter());
        }
    }

    for line in canvas.styled_lines() {
        println!("{line}");
    }
    Ok(())
}
