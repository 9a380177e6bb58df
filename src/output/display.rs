//! Printing the game to a plain terminal

use super::formatters::{
    KEYBOARD_ROWS, colored_cell, create_progress_bar, keyboard_row, share_grid, tile_text, tries,
};
use crate::engine::{GameState, GameStatus, PowerUp};
use crate::wordlists::Dictionary;
use colored::Colorize;

/// Print the 6×5 board, marking the power-up row while it is on offer
pub fn print_board<D: Dictionary>(game: &GameState<D>) {
    let shake = game.shake_active();
    let power_up = game.power_up();

    println!();
    for (i, row) in game.board().iter().enumerate() {
        let tiles: String = row
            .iter()
            .map(|tile| colored_cell(&tile_text(tile), tile.classification).to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let marker = if i == crate::engine::config::POWER_UP_ROW && !power_up.used {
            if power_up.available {
                " 🎁 power-up ready (:power)"
                    .bright_magenta()
                    .bold()
                    .to_string()
            } else {
                " 🎁".bright_black().to_string()
            }
        } else if shake && i == game.current_row() {
            " ✗".red().bold().to_string()
        } else {
            String::new()
        };

        println!("   {tiles}{marker}");
    }
    println!();
}

/// Print the keyboard with each key colored by what is known about it
pub fn print_keyboard<D: Dictionary>(game: &GameState<D>) {
    let letters = game.letters();

    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = keyboard_row(row)
            .map(|letter| {
                let key = letters.key(letter);
                let text = if key.locked {
                    " · ".to_string()
                } else {
                    format!(" {letter} ")
                };
                colored_cell(&text, key.classification).to_string()
            })
            .collect();
        println!("   {}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the remaining-candidate counter
pub fn print_counter<D: Dictionary>(game: &GameState<D>) {
    let pool = game.dictionary().all_answers().len();
    let remaining = game.remaining_candidates();
    let bar = create_progress_bar(remaining as f64, pool as f64, 30);

    println!(
        "   Possible words remaining: {}  {}",
        remaining.to_string().bright_cyan().bold(),
        bar.cyan()
    );
}

/// Print the power-up choices
pub fn print_power_ups() {
    let title = "🎁 Power-Up Time! Choose one boost:";
    println!("\n{}", title.bright_magenta().bold());
    for (i, power_up) in PowerUp::ALL.iter().enumerate() {
        println!(
            "   {}. {:<15} {}",
            (i + 1).to_string().bright_cyan(),
            power_up.title().bold(),
            power_up.description().bright_black()
        );
    }
    println!();
}

/// Print the win or loss banner
pub fn print_game_over<D: Dictionary>(game: &GameState<D>) {
    println!("{}", "═".repeat(50).bright_cyan());
    match (game.status(), game.revealed_solution()) {
        (GameStatus::Won, _) => {
            let attempts = game.attempts();
            println!("   {}", "🎉 You Won!".bright_green().bold());
            println!(
                "   You guessed it in {} {}!",
                attempts.to_string().bright_cyan().bold(),
                tries(attempts)
            );
        }
        (GameStatus::Lost, Some(solution)) => {
            println!("   {}", "😔 Game Over".red().bold());
            println!(
                "   The word was: {}",
                solution.text().bright_yellow().bold()
            );
        }
        _ => {}
    }
    println!("\n{}", share_grid(game.rows()));
    println!("{}", "═".repeat(50).bright_cyan());
}
