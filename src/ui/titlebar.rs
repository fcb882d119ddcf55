use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let title_text = "[ Chapter Quiz ]".to_string();
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let user_text = match &state.identity {
        Some(id) => format!(" {} ", id.label()),
        None => String::new(),
    };
    let user_span = Span::styled(
        user_text.clone(),
        Style::default().fg(Color::Rgb(200, 200, 120)),
    );

    // Center the title; the user label sits right-aligned.
    let available = area.width as usize;
    let title_len = title_text.len();
    let center_pad = if available > title_len {
        (available - title_len) / 2
    } else {
        0
    };
    let right_pad = available.saturating_sub(center_pad + title_len + user_text.len());

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        user_span,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
