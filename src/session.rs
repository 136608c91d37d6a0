use std::rc::Rc;
use std::time::Instant;

use tracing::debug;

use crate::runtime::Clock;
use crate::util::{accuracy, word_count, words_per_minute};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Finished,
}

/// A keystroke the session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
}

/// Highlighting of one target character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharState {
    Correct,
    Incorrect,
    Pending,
}

/// Snapshot shown once a session is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Results {
    pub wpm: u32,
    pub accuracy: u32,
    pub elapsed_secs: u64,
    pub mistakes: u32,
}

/// One timed typing attempt over a fixed target text
#[derive(Debug)]
pub struct Session {
    prompt: String,
    target: Vec<char>,
    input: Vec<char>,
    time_limit: u64,
    started_at: Option<Instant>,
    elapsed_secs: u64,
    wpm: u32,
    mistakes: u32,
    finished: bool,
    show_results: bool,
    clock: Rc<dyn Clock>,
}

impl Session {
    pub fn new(prompt: String, time_limit: u64, clock: Rc<dyn Clock>) -> Self {
        Self {
            target: prompt.chars().collect(),
            prompt,
            input: Vec::new(),
            time_limit,
            started_at: None,
            elapsed_secs: 0,
            wpm: 0,
            mistakes: 0,
            finished: false,
            show_results: false,
            clock,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.started_at.is_some() {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// Apply one keystroke. Ignored once finished.
    pub fn on_key(&mut self, key: Keystroke) {
        if self.finished || self.target.is_empty() {
            return;
        }

        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
            debug!(chars = self.target.len(), limit = self.time_limit, "session started");
        }

        match key {
            Keystroke::Backspace => {
                self.input.pop();
            }
            Keystroke::Char(c) => {
                // mistakes are never taken back, even if the char is deleted later
                if self.target[self.input.len()] != c {
                    self.mistakes += 1;
                }
                self.input.push(c);

                if self.input.len() == self.target.len() {
                    self.finish();
                }
            }
        }
    }

    /// Poll the clock: update elapsed time and WPM, finish on timeout.
    pub fn on_tick(&mut self) {
        if self.finished || self.started_at.is_none() {
            return;
        }

        self.sync_elapsed();

        if self.elapsed_secs >= self.time_limit {
            self.finish();
        } else {
            self.update_wpm();
        }
    }

    fn sync_elapsed(&mut self) {
        if let Some(started_at) = self.started_at {
            self.elapsed_secs = self
                .clock
                .now()
                .saturating_duration_since(started_at)
                .as_secs();
        }
    }

    fn update_wpm(&mut self) {
        if self.input.is_empty() {
            return;
        }

        let typed = self.input.iter().collect::<String>();
        if let Some(wpm) = words_per_minute(word_count(&typed), self.elapsed_secs) {
            self.wpm = wpm;
        }
    }

    fn finish(&mut self) {
        self.sync_elapsed();
        self.update_wpm();

        self.finished = true;
        self.show_results = true;
        self.started_at = None;

        debug!(
            wpm = self.wpm,
            accuracy = self.accuracy(),
            mistakes = self.mistakes,
            elapsed = self.elapsed_secs,
            "session finished"
        );
    }

    /// Change the limit of a session nobody has started typing yet.
    pub fn set_time_limit(&mut self, secs: u64) -> bool {
        if self.phase() != Phase::Idle {
            return false;
        }
        self.time_limit = secs;
        true
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[cfg(test)]
    pub fn typed(&self) -> String {
        self.input.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.input.len()
    }

    pub fn char_states(&self) -> Vec<CharState> {
        self.target
            .iter()
            .enumerate()
            .map(|(idx, expected)| match self.input.get(idx) {
                Some(typed) if typed == expected => CharState::Correct,
                Some(_) => CharState::Incorrect,
                None => CharState::Pending,
            })
            .collect()
    }

    pub fn time_limit(&self) -> u64 {
        self.time_limit
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.time_limit.saturating_sub(self.elapsed_secs)
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn accuracy(&self) -> u32 {
        accuracy(&self.input, &self.target)
    }

    pub fn results_visible(&self) -> bool {
        self.show_results
    }

    pub fn results(&self) -> Option<Results> {
        self.finished.then(|| Results {
            wpm: self.wpm,
            accuracy: self.accuracy(),
            elapsed_secs: self.elapsed_secs,
            mistakes: self.mistakes,
        })
    }
}
