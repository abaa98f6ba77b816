mod input;
mod logic;
mod render;
mod session;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use input::LineInput;
use logic::{reports, run_batch};
use session::SessionOptions;
use treasure_hunter_game::{Difficulty, GameConfig};
use util::{resolve_strategies, split_csv};

#[derive(Debug, Parser)]
#[command(name = "treasure-hunter", version)]
#[command(about = "Travel from town to town hunting for the crown, the trophy and the gem")]
struct Args {
    /// Seed for a reproducible run (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Hunter name; skips the name prompt
    #[arg(long)]
    name: Option<String>,

    /// Difficulty code (e, n, h, s, test); skips the difficulty prompt
    #[arg(long)]
    difficulty: Option<String>,

    /// Read player input from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// JSON game configuration override
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Play N automated games per strategy and print a report
    #[arg(long, value_name = "N")]
    autoplay: Option<usize>,

    /// Strategies for autoplay (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    strategies: String,

    /// Autoplay report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Turn limit per automated game
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("using seed {seed}");
    let difficulty = args.difficulty.as_deref().map(Difficulty::from_code);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(games) = args.autoplay {
        return autoplay(&args, &mut out, &config, difficulty.unwrap_or_default(), seed, games);
    }

    if args.verbose {
        writeln!(out, "{}", format!("Seed: {seed}").dimmed())?;
    }

    let options = SessionOptions {
        name: args.name.clone(),
        difficulty,
        seed,
        config,
    };
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            let mut input = LineInput::scripted(BufReader::new(file));
            session::run(options, &mut input, &mut out)?;
        }
        None => {
            let stdin = io::stdin();
            let mut input = LineInput::interactive(stdin.lock());
            session::run(options, &mut input, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    GameConfig::from_json(&raw).with_context(|| format!("loading config {}", path.display()))
}

fn autoplay<W: Write>(
    args: &Args,
    out: &mut W,
    config: &GameConfig,
    difficulty: Difficulty,
    seed: u64,
    games: usize,
) -> Result<()> {
    let strategies = resolve_strategies(&split_csv(&args.strategies))?;
    if args.verbose {
        let names: Vec<&str> = strategies.iter().map(|s| s.label()).collect();
        eprintln!(
            "{} {games} {difficulty} games per strategy ({}) from seed {seed}",
            "Autoplay:".bright_cyan().bold(),
            names.join(", ")
        );
    }
    let records = run_batch(&strategies, difficulty, config, seed, games, args.max_turns)?;
    match args.report.as_str() {
        "json" => reports::write_json_report(out, &records)?,
        "markdown" => reports::write_markdown_report(out, &records)?,
        _ => reports::write_console_report(out, &records)?,
    }
    out.flush()?;
    Ok(())
}
