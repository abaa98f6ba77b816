use colored::Colorize;
use std::io::{self, Write};
use treasure_hunter_game::{Game, GameStatus, MenuChoice};

pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Welcome to {}!",
        "TREASURE HUNTER".bright_cyan().bold()
    )?;
    writeln!(out, "Going hunting for the big treasure, eh?")
}

/// Status block shown before every menu prompt.
pub fn turn_header<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", game.latest_news())?;
    writeln!(out, "***")?;
    writeln!(out, "{}", game.hunter().info_string().yellow())?;
    writeln!(out, "{}", game.town().info_string().cyan())?;
    let found: Vec<&str> = game.collected().iter().map(|t| t.name()).collect();
    if found.is_empty() {
        writeln!(out, "Treasures found: none")?;
    } else {
        writeln!(out, "Treasures found: {}", found.join(", "))?;
    }
    Ok(())
}

pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    for choice in MenuChoice::ALL {
        writeln!(out, "{}", choice.label())?;
    }
    writeln!(out)
}

pub fn notice<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")
}

pub fn warning<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line.red())
}

pub fn price_list<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

pub fn ending<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let Some(message) = game.ending_message() else {
        return Ok(());
    };
    let styled = match game.status() {
        GameStatus::Won => message.bright_green().bold(),
        GameStatus::Lost => message.red().bold(),
        GameStatus::Playing | GameStatus::Quit => message.normal(),
    };
    writeln!(out, "{styled}")
}
