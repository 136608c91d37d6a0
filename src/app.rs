use std::rc::Rc;

use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::{
    language::SnippetPool,
    options::{OptionChange, Options},
    runtime::Clock,
    session::{Keystroke, Phase, Session},
    typing_policy::{classify, Action},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Typing,
    Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the snippet pool, the user's options and the current session
#[derive(Debug)]
pub struct App {
    pub pool: SnippetPool,
    pub options: Options,
    pub session: Session,
    pub screen: Screen,
    clock: Rc<dyn Clock>,
    rng: StdRng,
}

impl App {
    pub fn new(pool: SnippetPool, options: Options, clock: Rc<dyn Clock>) -> Self {
        Self::with_rng(pool, options, clock, StdRng::from_entropy())
    }

    pub fn with_rng(pool: SnippetPool, options: Options, clock: Rc<dyn Clock>, rng: StdRng) -> Self {
        let mut app = Self {
            session: Session::new(String::new(), options.time_limit, clock.clone()),
            pool,
            options,
            screen: Screen::Typing,
            clock,
            rng,
        };
        app.new_session();
        app
    }

    fn new_session(&mut self) {
        let prompt = self.pool.sample(
            &self.options.language.key(),
            self.options.snippet_count,
            &mut self.rng,
        );
        self.session = Session::new(prompt, self.options.time_limit, self.clock.clone());
    }

    /// Throw the current attempt away and start over with fresh text.
    pub fn reset(&mut self) {
        self.new_session();
        self.screen = Screen::Typing;
        info!(
            language = %self.options.language,
            snippets = self.options.snippet_count,
            limit = self.options.time_limit,
            "session reset"
        );
    }

    pub fn on_tick(&mut self) {
        self.session.on_tick();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match (classify(&key), self.screen) {
            (Action::Quit, _) | (Action::Escape, Screen::Typing) => return Flow::Quit,
            (Action::Reset, _) => self.reset(),
            (Action::ToggleOptions, _) | (Action::Escape, Screen::Options) => self.toggle_options(),
            (Action::Type(Keystroke::Char(c)), Screen::Options) => self.on_option_key(c),
            (Action::Previous, Screen::Options) => self.change_option(|o| o.cycle_language(false)),
            (Action::Next, Screen::Options) => self.change_option(|o| o.cycle_language(true)),
            (Action::Confirm, Screen::Typing)
            | (Action::Type(Keystroke::Char('r')), Screen::Typing)
                if self.session.results_visible() =>
            {
                self.reset()
            }
            (Action::Type(keystroke), Screen::Typing) => self.session.on_key(keystroke),
            _ => {}
        }
        Flow::Continue
    }

    fn toggle_options(&mut self) {
        self.screen = match self.screen {
            Screen::Typing => Screen::Options,
            Screen::Options => Screen::Typing,
        };
    }

    fn on_option_key(&mut self, c: char) {
        match c {
            't' => self.change_option(|o| o.cycle_time_limit(true)),
            'T' => self.change_option(|o| o.cycle_time_limit(false)),
            's' => self.change_option(|o| o.cycle_snippet_count(true)),
            'S' => self.change_option(|o| o.cycle_snippet_count(false)),
            'l' => self.change_option(|o| o.cycle_language(true)),
            'L' => self.change_option(|o| o.cycle_language(false)),
            _ => {}
        }
    }

    pub fn options_locked(&self) -> bool {
        self.session.phase() == Phase::Running
    }

    /// Apply an option change unless a session is in progress.
    pub fn change_option(&mut self, change: impl FnOnce(&mut Options) -> OptionChange) {
        if self.options_locked() {
            debug!("options are locked while typing");
            return;
        }

        let kind = change(&mut self.options);
        info!(
            language = %self.options.language,
            snippets = self.options.snippet_count,
            limit = self.options.time_limit,
            "options changed"
        );

        match kind {
            // a finished session keeps its results; the new limit applies from the next reset
            OptionChange::TimeLimit => {
                self.session.set_time_limit(self.options.time_limit);
            }
            OptionChange::Resample => self.new_session(),
        }
    }
}
