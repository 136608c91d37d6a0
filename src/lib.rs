// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod language;
pub mod logging;
pub mod options;
pub mod runtime;
pub mod session;
pub mod typing_policy;
pub mod ui;
pub mod util;

pub use app::{App, Flow, Screen};
pub use error::{Error, Result};
