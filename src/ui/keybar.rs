use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings: Vec<(&str, &str)> = match state.screen {
        Screen::Login => vec![
            ("Enter", "sign in"),
            ("Tab", "skip button"),
            ("Ctrl+Q", "quit"),
        ],
        Screen::Chapters => vec![
            ("arrows", "move"),
            ("Space", "toggle"),
            ("Enter", "start quiz"),
            ("Ctrl+R", "history"),
            ("Ctrl+Q", "quit"),
        ],
        Screen::Question => vec![
            ("arrows", "move"),
            ("a-z", "pick option"),
            ("Enter", "submit answer"),
            ("Ctrl+Q", "quit"),
        ],
        Screen::Completed => vec![
            ("r", "retry"),
            ("c", "chapters"),
            ("h", "history"),
            ("q", "quit"),
        ],
        Screen::History => vec![
            ("u", "toggle user filter"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
