//! TUI rendering with ratatui
//!
//! Board, keyboard, candidate counter and the power-up picker.

use super::app::App;
use crate::core::Classification;
use crate::engine::config::POWER_UP_ROW;
use crate::engine::{GameStatus, PowerUp, Tile};
use crate::output::formatters::{KEYBOARD_ROWS, keyboard_row, tries};
use crate::wordlists::Dictionary;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board and side panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);

    if app.game.power_up_picker_open() {
        render_picker(f, f.area());
    }
}

/// Foreground and background for a classified cell
fn cell_style(classification: Option<Classification>) -> Style {
    match classification {
        Some(Classification::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn tile_span(tile: Tile, shaking: bool) -> Span<'static> {
    let text = tile
        .letter
        .map_or_else(|| " · ".to_string(), |l| format!(" {l} "));
    let style = if shaking {
        cell_style(tile.classification).fg(Color::Red)
    } else {
        cell_style(tile.classification)
    };
    Span::styled(text, style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE+ 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let game = &app.game;
    let shake = game.shake_active();
    let power_up = game.power_up();

    let mut lines = vec![Line::from("")];
    for (i, row) in game.board().iter().enumerate() {
        let shaking = shake && i == game.current_row();
        let mut spans = vec![Span::raw("  ")];
        for &tile in row {
            spans.push(tile_span(tile, shaking));
            spans.push(Span::raw(" "));
        }

        if i == POWER_UP_ROW && !power_up.used {
            let style = if power_up.available {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label = if power_up.available { " 🎁 Tab" } else { " 🎁" };
            spans.push(Span::styled(label, style));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let border = if shake { Color::Red } else { Color::White };
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border)),
    );
    f.render_widget(board, area);
}

fn render_side_panel<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Candidate gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let letters = app.game.letters();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let mut spans = vec![Span::raw(" ".repeat(indent + 1))];
            for letter in keyboard_row(row) {
                let key = letters.key(letter);
                let style = if key.locked {
                    cell_style(key.classification)
                        .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
                } else {
                    cell_style(key.classification)
                };
                spans.push(Span::styled(format!("{letter}"), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_candidates<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let pool = app.game.dictionary().all_answers().len();
    let remaining = app.game.remaining_candidates();
    let percent = candidate_percent(remaining, pool);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Possible Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining} of {pool} remaining"));

    f.render_widget(gauge, area);
}

/// Share of the answer pool still possible, 0 for an empty pool
fn candidate_percent(remaining: usize, pool: usize) -> u16 {
    (remaining * 100)
        .checked_div(pool)
        .map_or(0, |percent| u16::try_from(percent).unwrap_or(100))
}

fn render_messages<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let game = &app.game;
    let mut items: Vec<ListItem> = Vec::new();

    match (game.status(), game.revealed_solution()) {
        (GameStatus::Won, _) => {
            let attempts = game.attempts();
            items.push(
                ListItem::new(format!("🎉 You got it in {attempts} {}!", tries(attempts)))
                    .style(
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
            );
        }
        (GameStatus::Lost, Some(solution)) => {
            items.push(
                ListItem::new(format!("😔 The word was {solution}"))
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
        }
        _ => {}
    }

    if let Some(toast) = game.toast() {
        items.push(ListItem::new(toast.to_string()).style(Style::default().fg(Color::Magenta)));
    }
    if let Some(notice) = &app.notice {
        items.push(ListItem::new(notice.clone()).style(Style::default().fg(Color::Red)));
    }
    if app.show_answer {
        items.push(
            ListItem::new(format!("Answer: {}", game.solution()))
                .style(Style::default().fg(Color::DarkGray)),
        );
    }

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_status<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.game.status() != GameStatus::Playing {
        "n/Enter: New Game | q: Quit"
    } else if app.game.power_up_picker_open() {
        "1-3: Choose | Esc: Back"
    } else {
        "Enter: Submit | Backspace: Delete | Tab: Power-Up | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_picker(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 9, area);

    let items: Vec<ListItem> = PowerUp::ALL
        .iter()
        .enumerate()
        .map(|(i, power_up)| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}. {}", i + 1, power_up.title()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("   {}", power_up.description())),
            ])
        })
        .collect();

    let picker = List::new(items).block(
        Block::default()
            .title(" 🎁 Power-Up Time! ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Magenta)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(picker, popup);
}

/// A `width_pct`% wide, `height`-row tall rect centered in `area`
fn centered_rect(width_pct: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct) / 2),
            Constraint::Percentage(width_pct),
            Constraint::Percentage((100 - width_pct) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Word};
    use crate::engine::GameState;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App<WordList>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App<WordList> {
        let dictionary = WordList::new(words_from_slice(&["crane", "slate"]), &[]);
        App::new(
            GameState::with_solution(dictionary, Word::new("crane").unwrap()),
            true,
        )
    }

    #[test]
    fn draws_board_counter_and_answer() {
        let text = screen(&app());
        assert!(text.contains("Board"));
        assert!(text.contains("2 of 2 remaining"));
        assert!(text.contains("Answer: CRANE"));
    }

    #[test]
    fn candidate_percent_handles_empty_pool() {
        assert_eq!(candidate_percent(0, 0), 0);
        assert_eq!(candidate_percent(1, 4), 25);
        assert_eq!(candidate_percent(4, 4), 100);
    }

    #[test]
    fn shaking_tile_is_red() {
        let tile = Tile {
            letter: Some(Letter::from_char('a').unwrap()),
            classification: None,
        };
        let span = tile_span(tile, true);
        assert_eq!(span.content, " A ");
        assert_eq!(span.style.fg, Some(Color::Red));
        assert_eq!(tile_span(Tile::default(), false).content, " · ");
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 9, area);
        assert_eq!(popup.height, 9);
        assert_eq!(popup.width, 60);
        assert!(popup.x >= 20 && popup.y >= 15);
    }
}
