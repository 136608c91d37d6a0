use crate::language::Language;

/// Time limits offered to the user, in seconds
pub const TIME_LIMITS: [u64; 4] = [15, 30, 60, 120];
/// Snippet counts offered to the user
pub const SNIPPET_COUNTS: [usize; 6] = [1, 3, 5, 10, 15, 20];

pub const DEFAULT_TIME_LIMIT: u64 = 60;
pub const DEFAULT_SNIPPET_COUNT: usize = 5;
pub const DEFAULT_LANGUAGE: Language = Language::Python;

/// What an option change means for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionChange {
    /// The text must be sampled again
    Resample,
    /// Only the time limit moved
    TimeLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub language: Language,
    pub time_limit: u64,
    pub snippet_count: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE,
            time_limit: DEFAULT_TIME_LIMIT,
            snippet_count: DEFAULT_SNIPPET_COUNT,
        }
    }
}

impl Options {
    pub fn cycle_time_limit(&mut self, forward: bool) -> OptionChange {
        self.time_limit = cycle(&TIME_LIMITS, &self.time_limit, forward);
        OptionChange::TimeLimit
    }

    pub fn cycle_snippet_count(&mut self, forward: bool) -> OptionChange {
        self.snippet_count = cycle(&SNIPPET_COUNTS, &self.snippet_count, forward);
        OptionChange::Resample
    }

    pub fn cycle_language(&mut self, forward: bool) -> OptionChange {
        self.language = cycle(Language::all(), &self.language, forward);
        OptionChange::Resample
    }
}

fn cycle<T: Copy + PartialEq>(choices: &[T], current: &T, forward: bool) -> T {
    let len = choices.len();
    match choices.iter().position(|c| c == current) {
        Some(idx) if forward => choices[(idx + 1) % len],
        Some(idx) => choices[(idx + len - 1) % len],
        // not one of the offered values: snap to the first choice
        None => choices[0],
    }
}

pub fn parse_time_limit(s: &str) -> Result<u64, String> {
    let secs: u64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if TIME_LIMITS.contains(&secs) {
        Ok(secs)
    } else {
        Err(format!("time limit must be one of {TIME_LIMITS:?}"))
    }
}

pub fn parse_snippet_count(s: &str) -> Result<usize, String> {
    let count: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if SNIPPET_COUNTS.contains(&count) {
        Ok(count)
    } else {
        Err(format!("snippet count must be one of {SNIPPET_COUNTS:?}"))
    }
}
