use anyhow::{bail, Context, Result};
use clap::Parser;
use uttt_tables::magic::config::*;
use uttt_tables::magic::*;

#[derive(Parser, Debug)]
#[command(about = "Search for a multiply-and-mask magic that perfectly hashes every 3x3 block")]
struct Cli {
    /// table size is 2^slot_bits
    #[arg(long, default_value_t = SLOT_BITS)]
    slot_bits: u32,

    /// candidates are the AND of this many uniform samples
    #[arg(long, default_value_t = SAMPLES_PER_CANDIDATE)]
    samples: u32,

    /// give up after this many candidates (default: keep going)
    #[arg(long)]
    max_attempts: Option<u64>,

    /// seed for a reproducible search
    #[arg(long)]
    seed: Option<u64>,

    /// log progress every N candidates (0 disables)
    #[arg(long, default_value_t = PROGRESS_EVERY)]
    progress_every: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if cli.samples == 0 {
        bail!("--samples must be >= 1");
    }

    let search = MagicSearch {
        slot_bits: cli.slot_bits,
        max_attempts: cli.max_attempts,
        progress_every: cli.progress_every,
    };
    let res = find_magic(&search, cli.samples, cli.seed)
        .with_context(|| format!("magic search into 2^{} slots failed", cli.slot_bits))?;
    println!("{}", res.magic);
    Ok(())
}
