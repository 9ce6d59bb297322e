use clap::{Parser, Subcommand};

mod bag;
mod piece;
mod preview;
mod title;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Render a piece at its board position
    Piece(#[clap(flatten)] piece::PieceArg),
    /// Render the next-piece preview panel
    Preview(#[clap(flatten)] preview::PreviewArg),
    /// Render a title-text frame at a given animation progress
    Title(#[clap(flatten)] title::TitleArg),
    /// Print upcoming piece kinds from the bag randomizer
    Bag(#[clap(flatten)] bag::BagArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Piece(arg) => piece::run(&arg),
        Mode::Preview(arg) => preview::run(&arg),
        Mode::Title(arg) => title::run(&arg)?,
        Mode::Bag(arg) => bag::run(&arg)?,
    }
    Ok(())
}
