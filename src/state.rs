use std::collections::BTreeSet;

use crate::bank::QuestionBank;
use crate::engine::{Answered, QuizSession, Summary};
use crate::identity::{self, UserIdentity};
use crate::model::ResultRecord;
use crate::results::ResultsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Chapters,
    Question,
    Completed,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    ConfirmQuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFilter {
    All,
    Mine,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub bank: QuestionBank,
    pub store: ResultsStore,

    /// None until the user logs in or skips; the login screen is shown only
    /// while this is unset.
    pub identity: Option<UserIdentity>,
    pub login_input: String,
    pub login_focus: LoginFocus,
    pub login_error: Option<String>,

    pub chapter_cursor: usize,
    pub selected_chapters: BTreeSet<String>,
    pub chapter_error: Option<String>,

    pub session: Option<QuizSession>,
    pub choice_cursor: usize,
    /// Feedback for the previously answered question, shown above the next.
    pub last_answer: Option<Answered>,
    pub question_error: Option<String>,

    pub summary: Option<Summary>,
    /// A failed history write must stay visible, not vanish silently.
    pub storage_error: Option<String>,

    pub history: Vec<ResultRecord>,
    pub history_filter: HistoryFilter,
    pub history_error: Option<String>,
    pub history_from: Screen,

    pub dialog: Option<Dialog>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(bank: QuestionBank, store: ResultsStore) -> Self {
        Self {
            screen: Screen::Login,
            bank,
            store,
            identity: None,
            login_input: String::new(),
            login_focus: LoginFocus::Email,
            login_error: None,
            chapter_cursor: 0,
            selected_chapters: BTreeSet::new(),
            chapter_error: None,
            session: None,
            choice_cursor: 0,
            last_answer: None,
            question_error: None,
            summary: None,
            storage_error: None,
            history: Vec::new(),
            history_filter: HistoryFilter::All,
            history_error: None,
            history_from: Screen::Chapters,
            dialog: None,
            should_quit: false,
        }
    }

    pub fn user_label(&self) -> &str {
        self.identity
            .as_ref()
            .map_or("", UserIdentity::label)
    }

    pub fn attempt_login(&mut self) {
        match identity::login(&self.login_input) {
            Ok(id) => {
                self.identity = Some(id);
                self.login_error = None;
                self.screen = Screen::Chapters;
            }
            Err(e) => {
                self.login_error = Some(e.to_string());
            }
        }
    }

    /// Once skipped, the login screen is not shown again for this session.
    pub fn skip_login(&mut self) {
        self.identity = Some(identity::skip());
        self.login_error = None;
        self.screen = Screen::Chapters;
    }

    pub fn chapter_count(&self) -> usize {
        self.bank.chapter_names().len()
    }

    pub fn toggle_chapter_at_cursor(&mut self) {
        let names = self.bank.chapter_names();
        if let Some(name) = names.get(self.chapter_cursor) {
            let name = name.to_string();
            if !self.selected_chapters.remove(&name) {
                self.selected_chapters.insert(name);
            }
            self.chapter_error = None;
        }
    }

    pub fn start_quiz(&mut self) {
        match QuizSession::start(&self.bank, &self.selected_chapters) {
            Ok(session) => {
                self.session = Some(session);
                self.choice_cursor = 0;
                self.last_answer = None;
                self.question_error = None;
                self.summary = None;
                self.storage_error = None;
                self.chapter_error = None;
                self.screen = Screen::Question;
            }
            Err(e) => {
                self.chapter_error = Some(e.to_string());
            }
        }
    }

    pub fn option_count(&self) -> usize {
        self.session
            .as_ref()
            .and_then(QuizSession::current)
            .map_or(0, |q| q.options.len())
    }

    /// Submits the option under the cursor. On the final question this
    /// completes the quiz and persists the result record.
    pub fn submit_choice(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(choice) = session
            .current()
            .and_then(|q| q.options.get(self.choice_cursor))
            .cloned()
        else {
            return;
        };

        match session.answer(&choice) {
            Ok(outcome) => {
                if let Some(summary) = outcome.summary.clone() {
                    self.persist_summary(&summary);
                    self.summary = Some(summary);
                    self.screen = Screen::Completed;
                }
                self.last_answer = Some(outcome);
                self.question_error = None;
                self.choice_cursor = 0;
            }
            Err(e) => {
                // Rejected action; session state is untouched.
                self.question_error = Some(e.to_string());
            }
        }
    }

    fn persist_summary(&mut self, summary: &Summary) {
        let user = self
            .identity
            .as_ref()
            .map_or(identity::ANONYMOUS_LABEL, UserIdentity::label)
            .to_string();
        let chapters = self
            .session
            .as_ref()
            .map(|s| s.selected_chapters().iter().cloned().collect())
            .unwrap_or_default();
        let record = ResultRecord::new(
            user,
            chapters,
            summary.score,
            summary.answered,
            summary.pct,
        );
        if let Err(e) = self.store.append(record) {
            self.storage_error = Some(e.to_string());
        }
    }

    /// Same chapters, fresh permutation.
    pub fn restart_quiz(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.restart().is_ok() {
            self.choice_cursor = 0;
            self.last_answer = None;
            self.question_error = None;
            self.summary = None;
            self.storage_error = None;
            self.screen = Screen::Question;
        }
    }

    /// Back to chapter selection, keeping the previous selection ticked.
    pub fn reselect_chapters(&mut self) {
        if let Some(session) = self.session.take() {
            self.selected_chapters = session.reselect();
        }
        self.summary = None;
        self.last_answer = None;
        self.storage_error = None;
        self.screen = Screen::Chapters;
    }

    pub fn open_history(&mut self) {
        self.history_from = self.screen;
        self.history_filter = match self.identity {
            Some(UserIdentity::Named(_)) => HistoryFilter::Mine,
            _ => HistoryFilter::All,
        };
        self.reload_history();
        self.screen = Screen::History;
    }

    pub fn toggle_history_filter(&mut self) {
        self.history_filter = match self.history_filter {
            HistoryFilter::All => HistoryFilter::Mine,
            HistoryFilter::Mine => HistoryFilter::All,
        };
        self.reload_history();
    }

    pub fn reload_history(&mut self) {
        let loaded = match self.history_filter {
            HistoryFilter::All => self.store.list_all(),
            HistoryFilter::Mine => self.store.list_for_user(self.user_label()),
        };
        match loaded {
            Ok(records) => {
                self.history = records;
                self.history_error = None;
            }
            Err(e) => {
                self.history.clear();
                self.history_error = Some(e.to_string());
            }
        }
    }

    pub fn close_history(&mut self) {
        self.screen = self.history_from;
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }
}
