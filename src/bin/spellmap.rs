//! spellmap CLI: loads a dictionary and checks words typed at the prompt.

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use spellmap::query::sanitize;
use spellmap::{
    ByteSum, Lexicon, Verdict, WeightedByteSum, DEFAULT_CAPACITY, DEFAULT_SUGGESTIONS,
};
use std::collections::hash_map::RandomState;
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum HashPolicy {
    /// Sum of key bytes
    ByteSum,
    /// Key bytes weighted by position
    Weighted,
    /// std's randomly seeded SipHash
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "spellmap", version, about = "Interactive dictionary spell checker")]
struct Args {
    /// Dictionary file; words are runs of ASCII letters and apostrophes
    #[arg(short, long, env = "SPELLMAP_DICTIONARY", default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Initial bucket count
    #[arg(short, long, env = "SPELLMAP_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Suggestions shown for a misspelled word
    #[arg(
        short = 'k',
        long,
        env = "SPELLMAP_SUGGESTIONS",
        default_value_t = DEFAULT_SUGGESTIONS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    suggestions: usize,

    /// Hash policy for the table
    #[arg(long, value_enum, default_value_t = HashPolicy::Weighted)]
    hash: HashPolicy,

    /// Print bucket distribution after loading
    #[arg(long)]
    stats: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match args.hash {
        HashPolicy::ByteSum => run(&args, ByteSum),
        HashPolicy::Weighted => run(&args, WeightedByteSum),
        HashPolicy::Random => run(&args, RandomState::new()),
    }
}

fn run<S: BuildHasher>(args: &Args, hasher: S) -> anyhow::Result<()> {
    let mut lexicon = Lexicon::with_hasher(args.capacity, hasher)?;

    let file = File::open(&args.dictionary)
        .with_context(|| format!("opening dictionary {}", args.dictionary.display()))?;
    let started = Instant::now();
    let read = lexicon
        .load_reader(file)
        .with_context(|| format!("reading dictionary {}", args.dictionary.display()))?;
    log::info!(
        "dictionary loaded in {:.6} seconds ({} words, {} distinct)",
        started.elapsed().as_secs_f64(),
        read,
        lexicon.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.stats {
        print_stats(&mut out, &lexicon)?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        write!(out, "Enter a word or \"quit\" to quit: ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break; // EOF
        }

        let word = match sanitize(&line) {
            Ok(w) => w,
            Err(e) => {
                writeln!(out, "Invalid input: {e}")?;
                continue;
            }
        };
        if word == "quit" {
            break;
        }

        match lexicon.check(&word, args.suggestions)? {
            Verdict::Correct => {
                writeln!(out, "The inputted word \"{word}\" is spelled correctly.")?;
            }
            Verdict::Misspelled(suggestions) => {
                writeln!(out, "The inputted word \"{word}\" is spelled incorrectly.")?;
                writeln!(out, "Did you mean...")?;
                for s in suggestions {
                    writeln!(out, "{}? (distance {})", s.word, s.distance)?;
                }
            }
        }
    }
    Ok(())
}

fn print_stats<S: BuildHasher, W: Write>(out: &mut W, lexicon: &Lexicon<S>) -> io::Result<()> {
    let table = lexicon.table();
    let lengths = table.chain_lengths();
    writeln!(out, "Entries:       {}", table.len())?;
    writeln!(out, "Buckets:       {}", table.capacity())?;
    writeln!(out, "Empty buckets: {}", table.empty_buckets())?;
    writeln!(out, "Load factor:   {:.4}", table.load_factor())?;
    writeln!(
        out,
        "Longest chain: {}",
        lengths.iter().copied().max().unwrap_or(0)
    )?;
    Ok(())
}
