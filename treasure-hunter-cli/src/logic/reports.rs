use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use treasure_hunter_game::GameStatus;

use super::SimulationRecord;

/// Per-strategy rollup of automated games.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StrategySummary {
    pub strategy: String,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub stalled: usize,
    pub win_rate: f64,
    pub average_turns: f64,
    pub average_gold: f64,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    summaries: &'a [StrategySummary],
    games: &'a [SimulationRecord],
}

/// Group records by strategy, keeping first-seen order.
#[must_use]
pub fn summarize(records: &[SimulationRecord]) -> Vec<StrategySummary> {
    let mut order: Vec<&str> = Vec::new();
    for record in records {
        if !order.contains(&record.strategy.as_str()) {
            order.push(&record.strategy);
        }
    }

    order
        .into_iter()
        .map(|strategy| {
            let runs: Vec<&SimulationRecord> =
                records.iter().filter(|r| r.strategy == strategy).collect();
            let count = |status: GameStatus| runs.iter().filter(|r| r.status == status).count();
            let games = runs.len();
            let wins = count(GameStatus::Won);
            #[allow(clippy::cast_precision_loss)]
            let per_game = |total: f64| total / games as f64;
            #[allow(clippy::cast_precision_loss)]
            let win_rate = per_game(wins as f64) * 100.0;
            StrategySummary {
                strategy: strategy.to_string(),
                games,
                wins,
                losses: count(GameStatus::Lost),
                stalled: count(GameStatus::Playing),
                win_rate,
                average_turns: per_game(runs.iter().map(|r| f64::from(r.turns)).sum()),
                average_gold: per_game(runs.iter().map(|r| f64::from(r.gold)).sum()),
            }
        })
        .collect()
}

pub fn write_console_report<W: Write>(out: &mut W, records: &[SimulationRecord]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Autoplay Results".bright_cyan().bold())?;
    writeln!(out, "{}", "================".cyan())?;
    writeln!(out, "Total games: {}", records.len())?;
    writeln!(out)?;

    for summary in summarize(records) {
        writeln!(out, "{}", summary.strategy.bold())?;
        writeln!(
            out,
            "   Won: {}  Lost: {}  Stalled: {}",
            summary.wins.to_string().green(),
            summary.losses.to_string().red(),
            summary.stalled.to_string().yellow()
        )?;
        writeln!(out, "   Win rate: {:.1}%", summary.win_rate)?;
        writeln!(out, "   Average turns: {:.1}", summary.average_turns)?;
        writeln!(out, "   Average gold: {:.1}", summary.average_gold)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_json_report<W: Write>(out: &mut W, records: &[SimulationRecord]) -> Result<()> {
    let summaries = summarize(records);
    let report = JsonReport {
        summaries: &summaries,
        games: records,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_markdown_report<W: Write>(out: &mut W, records: &[SimulationRecord]) -> Result<()> {
    writeln!(out, "# Treasure Hunter Autoplay Results\n")?;
    writeln!(
        out,
        "| Strategy | Games | Won | Lost | Stalled | Win rate | Avg turns | Avg gold |"
    )?;
    writeln!(
        out,
        "|----------|-------|-----|------|---------|----------|-----------|----------|"
    )?;
    for s in summarize(records) {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {:.1}% | {:.1} | {:.1} |",
            s.strategy, s.games, s.wins, s.losses, s.stalled, s.win_rate, s.average_turns, s.average_gold
        )?;
    }

    writeln!(out, "\n## Games\n")?;
    writeln!(out, "| Seed | Strategy | Outcome | Turns | Towns | Gold | Treasures |")?;
    writeln!(out, "|------|----------|---------|-------|-------|------|-----------|")?;
    for record in records {
        let treasures: Vec<&str> = record.treasures.iter().map(|t| t.name()).collect();
        writeln!(
            out,
            "| {} | {} | {:?} | {} | {} | {} | {} |",
            record.seed,
            record.strategy,
            record.status,
            record.turns,
            record.towns,
            record.gold,
            treasures.join(", ")
        )?;
    }
    Ok(())
}
