use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use treasure_hunter_game::{
    Action, Difficulty, Game, GameConfig, GameStatus, Item, MenuChoice, ShopRequest,
};

use crate::input::LineInput;
use crate::render;

/// Startup values that can skip the opening prompts.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub name: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub seed: u64,
    pub config: GameConfig,
}

/// Play one game from `input` until it ends or input runs out.
pub fn run<R: BufRead, W: Write>(
    options: SessionOptions,
    input: &mut LineInput<R>,
    out: &mut W,
) -> Result<Game> {
    render::banner(out)?;

    let name = match options.name {
        Some(name) => name,
        None => input
            .prompt(out, "What's your name, Hunter? ")?
            .unwrap_or_default(),
    };
    let difficulty = match options.difficulty {
        Some(difficulty) => difficulty,
        None => {
            let code = input
                .prompt(out, "Choose a difficulty ([e]asy, [n]ormal, [h]ard, [s]amurai): ")?
                .unwrap_or_default();
            Difficulty::from_code(&code)
        }
    };
    log::info!("starting {difficulty} game for {name:?} with seed {}", options.seed);

    let mut game = Game::new(&name, difficulty, options.config, options.seed);
    while game.status() == GameStatus::Playing {
        render::turn_header(out, &game)?;
        render::menu(out)?;
        let Some(line) = input.prompt(out, "What's your next move? ")? else {
            log::debug!("input exhausted, quitting");
            game.quit();
            break;
        };
        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                render::warning(out, &err.to_string())?;
                continue;
            }
        };
        let Some(action) = resolve_action(choice, &game, input, out)? else {
            continue;
        };
        let notices = game.perform(action).context("performing action")?;
        for notice in &notices {
            render::notice(out, notice)?;
        }
    }

    if game.status() == GameStatus::Lost {
        render::notice(out, game.latest_news())?;
    }
    render::ending(out, &game)?;
    Ok(game)
}

/// Turn a menu letter into an action, asking follow-up questions for shop
/// visits. `None` when the player backed out or typed something unusable.
fn resolve_action<R: BufRead, W: Write>(
    choice: MenuChoice,
    game: &Game,
    input: &mut LineInput<R>,
    out: &mut W,
) -> Result<Option<Action>> {
    let action = match choice {
        MenuChoice::Buy => {
            render::notice(out, "Welcome to the shop! We have the finest wares in town.")?;
            render::price_list(out, &game.town().shop().catalog_lines(false))?;
            let Some(item) = ask_item(input, out, "What're you lookin' to buy? ")? else {
                return Ok(None);
            };
            let Some(quantity) = ask_quantity(input, out)? else {
                return Ok(None);
            };
            Action::Shop(ShopRequest::Buy { item, quantity })
        }
        MenuChoice::Sell => {
            render::notice(out, "What're you lookin' to sell? You must have the item.")?;
            render::price_list(out, &game.town().shop().catalog_lines(true))?;
            let Some(item) = ask_item(input, out, "Item to sell: ")? else {
                return Ok(None);
            };
            Action::Shop(ShopRequest::Sell { item })
        }
        MenuChoice::Explore => Action::Explore,
        MenuChoice::Move => Action::Move,
        MenuChoice::LookForTrouble => Action::LookForTrouble,
        MenuChoice::Dig => Action::Dig,
        MenuChoice::Hunt => Action::Hunt,
        MenuChoice::Exit => Action::Quit,
    };
    Ok(Some(action))
}

fn ask_item<R: BufRead, W: Write>(
    input: &mut LineInput<R>,
    out: &mut W,
    question: &str,
) -> Result<Option<Item>> {
    let Some(answer) = input.prompt(out, question)? else {
        return Ok(None);
    };
    match answer.parse::<Item>() {
        Ok(item) => Ok(Some(item)),
        Err(err) => {
            render::warning(out, &err.to_string())?;
            Ok(None)
        }
    }
}

/// Blank answers buy a single unit.
fn ask_quantity<R: BufRead, W: Write>(
    input: &mut LineInput<R>,
    out: &mut W,
) -> Result<Option<u32>> {
    let Some(answer) = input.prompt(out, "How many? [1] ")? else {
        return Ok(None);
    };
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(Some(1));
    }
    match answer.parse::<u32>() {
        Ok(quantity) => Ok(Some(quantity)),
        Err(_) => {
            render::warning(out, &format!("{answer:?} is not a quantity."))?;
            Ok(None)
        }
    }
}
