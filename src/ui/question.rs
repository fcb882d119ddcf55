use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = &state.session else {
        return;
    };
    let Some(question) = session.current() else {
        return;
    };

    let (index, total) = session.position();

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  Question {} of {}", index + 1, total),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                progress_bar(index, total, 24),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];

    // Feedback for the previous question
    if let Some(last) = &state.last_answer {
        let (icon, color) = if last.correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        lines.push(Line::from(Span::styled(
            format!("  {} {}", icon, last.feedback),
            Style::default().fg(color),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("  {}", question.question),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (i, option) in question.options.iter().enumerate() {
        let is_current = i == state.choice_cursor;
        let marker = if is_current { "(●)" } else { "( )" };
        let label = (b'a' + i as u8) as char;

        let style = if is_current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(Span::styled(
            format!("  {} {}. {}", marker, label, option),
            style,
        )));
    }

    if let Some(err) = &state.question_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", err),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn progress_bar(done: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return String::new();
    }
    let filled = (done * width) / total;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled))
    )
}
