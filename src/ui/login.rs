use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, LoginFocus};

pub fn draw_login(f: &mut Frame, area: Rect, state: &AppState) {
    let email_style = if state.login_focus == LoginFocus::Email {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let skip_style = if state.login_focus == LoginFocus::Skip {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Sign in",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Enter your Gmail address to record results under your name,"),
        Line::from("  or skip to play as a guest."),
        Line::from(""),
    ];

    // Email input box
    let box_width = (area.width.saturating_sub(8) as usize).min(48);
    let email_padded = format!("{:<width$}", state.login_input, width = box_width);

    lines.push(Line::from(vec![
        Span::raw("  ┌"),
        Span::raw("─".repeat(box_width)),
        Span::raw("┐"),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  │"),
        Span::styled(email_padded, email_style),
        Span::raw("│"),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  └"),
        Span::raw("─".repeat(box_width)),
        Span::raw("┘"),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("[ Skip ]", skip_style),
    ]));

    if let Some(err) = &state.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", err),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}
