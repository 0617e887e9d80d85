//! convert - Monkeytype word list conversion tool
//!
//! Turns a Monkeytype language JSON file into `./words.txt`, one word per
//! line, for use as a typing test dataset.

use clap::{ArgAction, Parser};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wordlist::{ConversionStats, DEFAULT_OUTPUT, SPLIT_WORD_LEN};

const USAGE_MESSAGE: &str = "You need to specify path to a input file!";

/// Convert a Monkeytype JSON word list into words.txt
#[derive(Parser)]
#[command(
    name = "convert",
    version,
    about = "Convert a Monkeytype word list to words.txt",
    long_about = "convert - Monkeytype word list conversion tool.\n\n\
                  Reads a language JSON file ({\"name\": ..., \"words\": [...]}) and writes\n\
                  every word on its own line to ./words.txt."
)]
struct Cli {
    /// Input word list (JSON)
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Hide the spinner and warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // stderr stays unlocked; the spinner draws to it from its own thread
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    if let Err(e) = run(&cli, Path::new(DEFAULT_OUTPUT), &mut stdout, &mut stderr) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(
    cli: &Cli,
    output: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(input) = cli.input.as_ref() else {
        writeln!(out, "{}", USAGE_MESSAGE)?;
        return Ok(());
    };

    let pb = (!cli.quiet).then(|| create_spinner("Loading word list..."));
    let list = wordlist::load_file(input)?;
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    writeln!(out, "Converting {}...", list.name)?;

    let stats = wordlist::write_file(&list, output)?;
    tracing::info!(
        words = stats.word_count,
        output = %output.display(),
        "conversion finished"
    );

    writeln!(out, "Max word length: {}", stats.max_len)?;

    if !cli.quiet {
        warn_overlong(&stats, err)?;
    }

    Ok(())
}

fn warn_overlong(stats: &ConversionStats, err: &mut impl Write) -> io::Result<()> {
    if !stats.has_overlong() {
        return Ok(());
    }

    writeln!(
        err,
        "{} {} word(s) have {} or more characters and will be split \
         or leave empty entries in the typing test dataset",
        "!".yellow().bold(),
        stats.overlong,
        SPLIT_WORD_LEN
    )?;
    if let Some(ref longest) = stats.longest {
        writeln!(
            err,
            "  {}: {} ({} chars, {} columns)",
            "Longest".bold(),
            longest,
            stats.max_len,
            stats.max_width
        )?;
    }
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
