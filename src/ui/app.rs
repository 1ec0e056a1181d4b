use crate::session::SearchSession;
use crate::ui::stories::StoriesState;

/// Terminal-side state: the session plus cursor and quit flag.
///
/// Results and the search term live in the session; this only tracks what
/// the terminal needs on top.
pub struct App {
    session: SearchSession,
    selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new(session: SearchSession) -> Self {
        Self {
            session,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn view(&self) -> StoriesState {
        self.session.view()
    }

    pub fn search_term(&self) -> &str {
        self.session.search_term()
    }

    pub fn push_char(&mut self, c: char) {
        let mut term = self.session.search_term().to_string();
        term.push(c);
        self.session.on_term_changed(term);
    }

    pub fn pop_char(&mut self) {
        let mut term = self.session.search_term().to_string();
        if term.pop().is_some() {
            self.session.on_term_changed(term);
        }
    }

    pub fn submit(&mut self) {
        // Fire-and-forget; the outcome arrives through the store.
        let _ = self.session.on_submit();
        self.selected = 0;
    }

    /// Selected row, clamped to the current result list.
    pub fn selected(&self) -> Option<usize> {
        let len = self.session.view().len();
        if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let Some(current) = self.selected() else {
            return;
        };
        let last = self.session.view().len() - 1;
        self.selected = current.saturating_add_signed(delta).min(last);
    }

    /// Remove the story under the cursor by id.
    pub fn remove_selected(&mut self) {
        let view = self.session.view();
        let Some(story) = self.selected().and_then(|index| view.get(index)) else {
            return;
        };
        tracing::debug!(id = %story.id, "Removing story");
        self.session.on_remove(story.id.clone());
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
