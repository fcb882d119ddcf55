use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::error::QuizError;
use crate::state::{AppState, Dialog, LoginFocus, Screen};

pub fn run_tui(mut state: AppState) -> Result<(), QuizError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|f| crate::ui::draw(f, state))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(key, state);
            }
        }
    }

    Ok(())
}

fn handle_key(key: KeyEvent, state: &mut AppState) {
    if state.has_dialog() {
        handle_dialog_key(key, state);
        return;
    }

    // Global quit binding
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.dialog = Some(Dialog::ConfirmQuit);
        return;
    }

    match state.screen {
        Screen::Login => handle_login_key(key, state),
        Screen::Chapters => handle_chapters_key(key, state),
        Screen::Question => handle_question_key(key, state),
        Screen::Completed => handle_completed_key(key, state),
        Screen::History => handle_history_key(key, state),
    }
}

fn handle_login_key(key: KeyEvent, state: &mut AppState) {
    match state.login_focus {
        LoginFocus::Email => match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.login_input.push(c);
                state.login_error = None;
            }
            KeyCode::Backspace => {
                state.login_input.pop();
                state.login_error = None;
            }
            KeyCode::Enter => {
                state.attempt_login();
            }
            KeyCode::Tab => {
                state.login_focus = LoginFocus::Skip;
            }
            _ => {}
        },
        LoginFocus::Skip => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.skip_login();
            }
            KeyCode::Tab => {
                state.login_focus = LoginFocus::Email;
            }
            _ => {}
        },
    }
}

fn handle_chapters_key(key: KeyEvent, state: &mut AppState) {
    let total = state.chapter_count();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Up => {
            state.chapter_cursor = state.chapter_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.chapter_cursor + 1 < total {
                state.chapter_cursor += 1;
            }
        }
        KeyCode::Home => {
            state.chapter_cursor = 0;
        }
        KeyCode::End => {
            if total > 0 {
                state.chapter_cursor = total - 1;
            }
        }
        KeyCode::Char(' ') => {
            state.toggle_chapter_at_cursor();
        }
        KeyCode::Enter => {
            state.start_quiz();
        }
        KeyCode::Char('r') if ctrl => {
            state.open_history();
        }
        _ => {}
    }
}

fn handle_question_key(key: KeyEvent, state: &mut AppState) {
    let options = state.option_count();

    match key.code {
        KeyCode::Up => {
            state.choice_cursor = state.choice_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.choice_cursor + 1 < options {
                state.choice_cursor += 1;
            }
        }
        KeyCode::Char(c)
            if c.is_ascii_lowercase() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            let idx = (c as u8 - b'a') as usize;
            if idx < options {
                state.choice_cursor = idx;
            }
        }
        KeyCode::Enter => {
            state.submit_choice();
        }
        _ => {}
    }
}

fn handle_completed_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('r') => {
            state.restart_quiz();
        }
        KeyCode::Char('c') => {
            state.reselect_chapters();
        }
        KeyCode::Char('h') => {
            state.open_history();
        }
        KeyCode::Char('q') => {
            state.dialog = Some(Dialog::ConfirmQuit);
        }
        _ => {}
    }
}

fn handle_history_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('u') => {
            state.toggle_history_filter();
        }
        KeyCode::Esc | KeyCode::Char('b') => {
            state.close_history();
        }
        KeyCode::Char('q') => {
            state.dialog = Some(Dialog::ConfirmQuit);
        }
        _ => {}
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    match state.dialog {
        Some(Dialog::ConfirmQuit) => match key.code {
            KeyCode::Enter => {
                state.dialog = None;
                state.should_quit = true;
            }
            KeyCode::Esc => {
                state.dialog = None;
            }
            _ => {}
        },
        None => {}
    }
}
