// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal front end: raw-mode setup, drawing, key dispatch.
//!
//! One blocking `event::read()` per frame is the program's only suspension
//! point; every toggle finishes its file write before the next key is read.

use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::error::Result;
use crate::mods::ManifestStore;
use crate::steam::Game;
use crate::ui::{GameMenu, HELP_TEXT, SCS_ARCHIVE_WARNING, SelectorCommand, SelectorState};

/// Runs the mod selector until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or an
/// event cannot be read. The terminal is restored on every exit path.
pub fn run_selector(state: &mut SelectorState, store: &mut dyn ManifestStore) -> Result<()> {
    with_terminal(|terminal| {
        while !state.should_quit() {
            terminal.draw(|frame| draw_selector(frame, state))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(command) = map_selector_key(key)
            {
                state.apply(command, store);
            }
        }
        Ok(())
    })
}

/// Runs the game choice menu; `None` means the user quit without choosing.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or an
/// event cannot be read.
pub fn run_game_menu() -> Result<Option<Game>> {
    with_terminal(|terminal| {
        let mut menu = GameMenu::default();
        loop {
            terminal.draw(|frame| draw_game_menu(frame, &menu))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => menu.move_up(),
                    KeyCode::Down | KeyCode::Char('j') => menu.move_down(),
                    KeyCode::Enter => return Ok(menu.selected()),
                    KeyCode::Char('q' | 'Q') | KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    })
}

/// Sets up the alternate-screen raw-mode terminal, runs `f`, and restores
/// the terminal whether or not `f` succeeded.
fn with_terminal<T>(
    f: impl FnOnce(&mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<T>,
) -> Result<T> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = f(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn map_selector_key(key: KeyEvent) -> Option<SelectorCommand> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(SelectorCommand::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectorCommand::MoveDown),
        KeyCode::Char(' ') => Some(SelectorCommand::Toggle),
        KeyCode::Char('a' | 'A') => Some(SelectorCommand::EnableAll),
        KeyCode::Char('d' | 'D') => Some(SelectorCommand::DisableAll),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(SelectorCommand::Quit),
        _ => None,
    }
}

fn draw_selector(frame: &mut Frame, state: &SelectorState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // warning + help
            Constraint::Min(3),    // mod list
            Constraint::Length(1), // status
        ])
        .split(frame.area());

    let header = Paragraph::new(vec![
        Line::styled(
            SCS_ARCHIVE_WARNING,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Line::raw(HELP_TEXT),
    ]);
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = state
        .rows()
        .map(|(enabled, name)| {
            let mark = if enabled { "[x]" } else { "[ ]" };
            ListItem::new(format!("{mark} {name}"))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Workshop mods  {}/{} enabled ",
            state.enabled_count(),
            state.len()
        )))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor()));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let status = Paragraph::new(state.status().unwrap_or_default())
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(status, chunks[2]);
}

fn draw_game_menu(frame: &mut Frame, menu: &GameMenu) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(frame.area());

    let header = Paragraph::new(vec![
        Line::styled(
            SCS_ARCHIVE_WARNING,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Line::raw("Select a game (arrow keys and Enter, q to quit)"),
    ]);
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = GameMenu::labels().into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Game "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(menu.cursor()));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}
