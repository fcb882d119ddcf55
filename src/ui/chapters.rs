use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_chapters(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Select chapters",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let names = state.bank.chapter_names();
    for (i, name) in names.iter().enumerate() {
        let is_current = i == state.chapter_cursor;
        let is_selected = state.selected_chapters.contains(*name);

        let cursor = if is_current { " ▸ " } else { "   " };
        let checkbox = if is_selected { "[x]" } else { "[ ]" };
        let count = state.bank.question_count(name);

        let style = if is_current {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };

        lines.push(Line::from(Span::styled(
            format!("{}{} {}  ({} questions)", cursor, checkbox, name, count),
            style,
        )));
    }

    let total: usize = state
        .selected_chapters
        .iter()
        .map(|c| state.bank.question_count(c))
        .sum();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "   {} chapters selected, {} questions",
            state.selected_chapters.len(),
            total
        ),
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(err) = &state.chapter_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("   {}", err),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}
