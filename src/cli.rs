use clap::Parser;

/// Terminal task board for the GIC - Belém Digital field teams.
/// The board is in-memory and starts from a small demo dataset
/// unless --empty is passed.
#[derive(Parser)]
#[command(name = "gic", version, about = "GIC - Belém Digital task board")]
pub struct Cli {
    /// Start with an empty board instead of the demo tasks.
    #[arg(long)]
    pub empty: bool,
}
