use blockfall_engine::{BagSeed, PieceBag, PieceKind};
use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct BagArg {
    /// Number of kinds to draw
    #[arg(long, default_value_t = 12)]
    count: usize,

    /// Seed for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the sequence as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(arg: &BagArg) -> anyhow::Result<()> {
    let mut bag = match arg.seed {
        Some(seed) => PieceBag::with_seed(BagSeed(seed)),
        None => PieceBag::new(),
    };
    let kinds: Vec<PieceKind> = (0..arg.count).map(|_| bag.pop_next()).collect();

    if arg.json {
        println!("{}", serde_json::to_string(&kinds)?);
    } else {
        let line: Vec<String> = kinds.iter().map(PieceKind::to_string).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}
