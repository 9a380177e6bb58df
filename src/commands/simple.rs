//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one whole guess per line, plus a few
//! commands for the power-up and game control.

use crate::core::{Letter, WORD_LEN};
use crate::engine::{Event, GameState, GameStatus, GuessError, LockedPosition, PowerUp, Transition};
use crate::output::{print_board, print_counter, print_game_over, print_keyboard, print_power_ups};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    OpenPowerUps,
    Choose(PowerUp),
    Back,
    NewGame,
    Quit,
    Invalid(String),
}

/// Parse a line; digits pick a power-up only while the picker is open
#[must_use]
pub fn parse_command(input: &str, picker_open: bool) -> Command {
    let input = input.trim();
    let lower = input.to_ascii_lowercase();

    match lower.as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        ":power" | ":p" => Command::OpenPowerUps,
        ":reveal" => Command::Choose(PowerUp::RevealAndLock),
        ":hint" => Command::Choose(PowerUp::HintTwo),
        ":clear" => Command::Choose(PowerUp::ClearHalf),
        "back" | "b" | "esc" if picker_open => Command::Back,
        "1" if picker_open => Command::Choose(PowerUp::RevealAndLock),
        "2" if picker_open => Command::Choose(PowerUp::HintTwo),
        "3" if picker_open => Command::Choose(PowerUp::ClearHalf),
        _ if !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic()) => {
            Command::Guess(input.to_string())
        }
        _ => Command::Invalid(input.to_string()),
    }
}

/// Events that replace the current row with `word`
///
/// A full-length word skips its character under the locked cell, which the
/// engine fills on its own.
#[must_use]
pub fn guess_events(word: &str, locked: Option<LockedPosition>) -> Vec<Event> {
    let skip = locked
        .filter(|_| word.chars().count() == WORD_LEN)
        .map(|p| p.index);

    std::iter::repeat_n(Event::Delete, WORD_LEN)
        .chain(
            word.chars()
                .enumerate()
                .filter(|&(i, _)| Some(i) != skip)
                .filter_map(|(_, c)| Letter::from_char(c))
                .map(Event::Letter),
        )
        .chain(std::iter::once(Event::Submit))
        .collect()
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<D: Dictionary>(mut game: GameState<D>, show_answer: bool) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle+ - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries.");
    println!("Letters ruled out are locked and can't be typed again.");
    println!("After your third guess a power-up unlocks:\n");
    for (i, power_up) in PowerUp::ALL.iter().enumerate() {
        println!(
            "  {}. {} - {}",
            i + 1,
            power_up.title(),
            power_up.description()
        );
    }
    println!("\nCommands: ':power' to open power-ups, 'new' for new game, 'quit' to exit\n");

    let mut games_played = 0usize;
    let mut games_won = 0usize;

    loop {
        game.expire_signals(Instant::now());
        show(&game, show_answer);

        if game.status() != GameStatus::Playing {
            games_played += 1;
            if game.status() == GameStatus::Won {
                games_won += 1;
            }
            print_game_over(&game);
            println!("   Played: {games_played} | Won: {games_won}\n");

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.apply(Event::Reset);
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let picker_open = game.power_up_picker_open();
        let prompt = if picker_open {
            "Choose 1-3 (or 'back')"
        } else {
            "Your guess"
        };

        match parse_command(&get_user_input(prompt)?, picker_open) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                game.apply(Event::Reset);
                println!("\n🔄 New game started!\n");
            }
            Command::OpenPowerUps => {
                if game.apply(Event::OpenPowerUps) == Transition::PowerUpsOpened {
                    print_power_ups();
                } else {
                    println!("{}\n", "No power-up available right now.".yellow());
                }
            }
            Command::Back => {
                game.apply(Event::ClosePowerUps);
            }
            Command::Choose(power_up) => report(game.apply(Event::ChoosePowerUp(power_up))),
            Command::Guess(word) => {
                if picker_open {
                    println!("{}\n", "Pick a power-up first, or type 'back'.".yellow());
                    continue;
                }
                let mut last = Transition::Ignored;
                for event in guess_events(&word, game.locked_position()) {
                    last = game.apply(event);
                }
                report(last);
            }
            Command::Invalid(input) => {
                println!("{} '{input}'\n", "❌ Not a word or command:".red());
            }
        }
    }
}

fn show<D: Dictionary>(game: &GameState<D>, show_answer: bool) {
    print_board(game);
    print_keyboard(game);
    print_counter(game);
    if let Some(toast) = game.toast() {
        println!("   {}", toast.bright_magenta().bold());
    }
    if show_answer {
        println!("   Answer: {}", game.solution().text().bright_black());
    }
    println!();
}

fn report(transition: Transition) {
    match transition {
        Transition::Rejected(GuessError::InvalidLength(len)) => {
            println!(
                "{}\n",
                format!("❌ Need {WORD_LEN} letters, got {len} (locked letters can't be typed)")
                    .red()
            );
        }
        Transition::Rejected(GuessError::NotInDictionary(word)) => {
            println!("{}\n", format!("❌ {word} is not in the word list").red());
        }
        Transition::PowerUpApplied {
            power_up,
            message: None,
        } => {
            println!(
                "{}\n",
                format!("{power_up} used, nothing left to reveal").yellow()
            );
        }
        Transition::Ignored => {
            println!("{}\n", "Nothing happened.".bright_black());
        }
        _ => {}
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn parse_words_and_commands() {
        assert_eq!(
            parse_command(" crane ", false),
            Command::Guess("crane".into())
        );
        assert_eq!(parse_command("QUIT", false), Command::Quit);
        assert_eq!(parse_command("new", false), Command::NewGame);
        assert_eq!(parse_command(":power", false), Command::OpenPowerUps);
        assert_eq!(
            parse_command(":hint", false),
            Command::Choose(PowerUp::HintTwo)
        );
        assert_eq!(
            parse_command("cr4ne", false),
            Command::Invalid("cr4ne".into())
        );
    }

    #[test]
    fn digits_only_choose_inside_picker() {
        assert_eq!(
            parse_command("3", true),
            Command::Choose(PowerUp::ClearHalf)
        );
        assert_eq!(parse_command("3", false), Command::Invalid("3".into()));
        assert_eq!(parse_command("back", true), Command::Back);
        assert_eq!(parse_command("back", false), Command::Guess("back".into()));
    }

    #[test]
    fn guess_events_clear_row_then_submit() {
        let events = guess_events("crane", None);
        assert_eq!(events.len(), WORD_LEN + 5 + 1);
        assert!(events[..WORD_LEN].iter().all(|e| *e == Event::Delete));
        assert_eq!(
            events[WORD_LEN],
            Event::Letter(Letter::from_char('c').unwrap())
        );
        assert_eq!(events.last(), Some(&Event::Submit));
    }

    #[test]
    fn guess_events_skip_locked_cell() {
        let locked = LockedPosition {
            index: 0,
            letter: Letter::from_char('c').unwrap(),
        };
        let typed: String = guess_events("crave", Some(locked))
            .into_iter()
            .filter_map(|e| match e {
                Event::Letter(l) => Some(l.as_char()),
                _ => None,
            })
            .collect();
        assert_eq!(typed, "RAVE");

        // Short input is typed as-is around the locked cell
        assert_eq!(guess_events("rave", Some(locked)).len(), WORD_LEN + 4 + 1);
    }

    #[test]
    fn line_guess_plays_through_engine() {
        let dictionary = WordList::new(words_from_slice(&["crane", "crave", "slate"]), &[]);
        let mut game = GameState::with_solution(dictionary, Word::new("crane").unwrap());

        let mut last = Transition::Ignored;
        for event in guess_events("slate", game.locked_position()) {
            last = game.apply(event);
        }
        assert!(matches!(last, Transition::Accepted { row: 0, .. }));

        for event in guess_events("crane", game.locked_position()) {
            game.apply(event);
        }
        assert_eq!(game.status(), GameStatus::Won);
    }
}
