use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::engine::Band;
use crate::state::AppState;

pub fn draw_summary(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(summary) = &state.summary else {
        return;
    };

    let (icon, color) = match summary.band {
        Band::Excellent => ("🎉", Color::Green),
        Band::Good => ("👍", Color::Yellow),
        Band::Encouraging => ("🙂", Color::Cyan),
        Band::NeedsImprovement => ("😕", Color::Red),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Quiz finished!",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    // Final feedback for the last answer
    if let Some(last) = &state.last_answer {
        let (fb_icon, fb_color) = if last.correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", fb_icon, last.feedback),
            Style::default().fg(fb_color),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!(
            "{} Final score: {}/{} ({:.1}%) — {}",
            icon, summary.score, summary.answered, summary.pct,
            summary.band.message()
        ),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    if let Some(err) = &state.storage_error {
        lines.push(Line::from(Span::styled(
            format!("Result was NOT saved: {}", err),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    } else {
        lines.push(Line::from(Span::styled(
            "Result saved to history.",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[R] Retry same chapters", Style::default().fg(Color::Green)),
        Span::raw("    "),
        Span::styled("[C] Choose chapters", Style::default().fg(Color::Cyan)),
        Span::raw("    "),
        Span::styled("[H] History", Style::default().fg(Color::Cyan)),
        Span::raw("    "),
        Span::styled("[Q] Quit", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(widget, area);
}
