use std::io::{self, BufRead, Write};

use minipoker::shared::init_tracing;
use minipoker::{AppError, Game, GameConfig, Showdown};
use serde::Serialize;
use tracing::{debug, info};

const PLAYERS: [&str; 4] = ["Jen", "Mike", "Bob", "Alice"];
const MAX_GAMES: usize = 30;

#[derive(Serialize)]
struct GameRecord<'a> {
    game: usize,
    showdown: &'a Showdown<'a>,
}

fn main() -> Result<(), AppError> {
    init_tracing("minipoker=info");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let total_games = match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(arg) => parse_game_count(arg)?,
        None => prompt_game_count()?,
    };

    let game = Game::new(GameConfig::new());
    info!(total_games, players = PLAYERS.len(), "Starting simulation");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for round in 1..=total_games {
        let players = game.deal(&PLAYERS)?;
        let showdown = game.showdown(&players)?;

        if json {
            let record = GameRecord {
                game: round,
                showdown: &showdown,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            print_showdown(&mut out, round, &showdown)?;
        }
    }

    Ok(())
}

fn parse_game_count(input: &str) -> Result<usize, AppError> {
    match input.trim().parse::<usize>() {
        Ok(count) if (1..=MAX_GAMES).contains(&count) => Ok(count),
        _ => Err(AppError::InvalidInput(format!(
            "'{}' is not a number of games between 1 and {}",
            input.trim(),
            MAX_GAMES
        ))),
    }
}

/// Ask on stdin until a valid count arrives
fn prompt_game_count() -> Result<usize, AppError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("How many games would you like to simulate? (1-{}):", MAX_GAMES);
        let line = lines
            .next()
            .ok_or_else(|| AppError::InvalidInput("no game count given".to_string()))??;

        match parse_game_count(&line) {
            Ok(count) => return Ok(count),
            Err(e) => debug!(error = %e, "Rejected game count"),
        }
    }
}

fn print_showdown(out: &mut impl Write, round: usize, showdown: &Showdown) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(15))?;
    writeln!(out, "Game {}", round)?;

    for entry in &showdown.hands {
        let cards: Vec<String> = entry
            .player
            .cards
            .iter()
            .flatten()
            .map(|card| format!("{:>3}", card.to_string()))
            .collect();
        writeln!(
            out,
            "{:<8} {}   {}",
            entry.player.name,
            cards.join(" "),
            entry.hand.category
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Winner: {}", showdown.winner_names().join(" & "))?;
    writeln!(out)
}
