use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, HistoryFilter};

pub fn draw_history(f: &mut Frame, area: Rect, state: &AppState) {
    let filter_label = match state.history_filter {
        HistoryFilter::All => "all users".to_string(),
        HistoryFilter::Mine => format!("user: {}", state.user_label()),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Result history",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!("({})", filter_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];

    if let Some(err) = &state.history_error {
        lines.push(Line::from(Span::styled(
            format!("  {}", err),
            Style::default().fg(Color::Red),
        )));
    } else if state.history.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No results recorded.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "  {:<19}  {:<24}  {:>7}  {:>6}  Chapters",
                "Date", "User", "Score", "Pct"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let visible = area.height.saturating_sub(6) as usize;
        for r in state.history.iter().rev().take(visible) {
            lines.push(Line::from(format!(
                "  {:<19}  {:<24}  {:>3}/{:<3}  {:>5.1}%  {}",
                r.timestamp,
                r.user,
                r.score,
                r.answered,
                r.pct,
                r.chapters.join(", ")
            )));
        }
    }

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}
