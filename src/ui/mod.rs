pub mod chapters;
pub mod dialog;
pub mod history;
pub mod keybar;
pub mod layout;
pub mod login;
pub mod question;
pub mod summary;
pub mod titlebar;

use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);

    match state.screen {
        Screen::Login => login::draw_login(f, layout.body, state),
        Screen::Chapters => chapters::draw_chapters(f, layout.body, state),
        Screen::Question => question::draw_question(f, layout.body, state),
        Screen::Completed => summary::draw_summary(f, layout.body, state),
        Screen::History => history::draw_history(f, layout.body, state),
    }

    keybar::draw_keybar(f, layout.keybar, state);

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
