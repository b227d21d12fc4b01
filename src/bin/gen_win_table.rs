use anyhow::Result;
use clap::Parser;
use log::info;
use uttt_tables::format::*;
use uttt_tables::win::*;

#[derive(Parser, Debug)]
#[command(about = "Generate the 3x3 block win table as 64-bit hex literals")]
struct Cli {
    /// print "<occupancy in binary> <0|1>" for every pattern first
    #[arg(long)]
    verbose: bool,

    /// print a full static array initializer
    #[arg(long)]
    rust: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let table = compile();
    if cli.verbose {
        for occ in gen_patterns() {
            println!("{}", pattern_line(occ, table[occ as usize]));
        }
    }

    // round through the bit string so the printed words are the ones the
    // engine has always embedded
    let words = pack_bit_string(&to_bit_string(&table))?;
    debug_assert_eq!(words, pack(&table));
    info!(
        "{} of {} occupancies contain a line",
        table.iter().filter(|&&won| won).count(),
        N_PATTERNS
    );

    if cli.rust {
        println!("{}", rust_array("WIN_TABLE", &words));
    } else {
        println!("{}", hex_words(&words));
    }
    Ok(())
}
