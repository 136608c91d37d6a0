use std::{
    io::{self, stdin},
    path::PathBuf,
    rc::Rc,
};

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use codetype::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    language::{Language, SnippetPool},
    logging,
    options::{parse_snippet_count, parse_time_limit, Options},
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner, SystemClock},
    session::Phase,
    ui, App, Flow,
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

/// typing speed practice on real code snippets
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type randomly sampled code snippets against the clock. Tracks words per minute, accuracy and mistakes, and shows a summary when the text is done or time runs out."
)]
pub struct Cli {
    /// language to pull snippets from
    #[clap(short = 'l', long, value_enum)]
    language: Option<Language>,

    /// number of seconds to run the test (15, 30, 60 or 120)
    #[clap(short = 's', long = "secs", value_parser = parse_time_limit)]
    number_of_secs: Option<u64>,

    /// number of snippets to type (1, 3, 5, 10, 15 or 20)
    #[clap(short = 'n', long = "snippets", value_parser = parse_snippet_count)]
    number_of_snippets: Option<usize>,

    /// config file to read defaults from
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// print every language with its snippet count and exit
    #[clap(long)]
    list_languages: bool,

    /// store the selected options as the new defaults and exit
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Layer command line flags over the configured defaults
    fn apply(&self, defaults: Options) -> Options {
        Options {
            language: self.language.unwrap_or(defaults.language),
            time_limit: self.number_of_secs.unwrap_or(defaults.time_limit),
            snippet_count: self.number_of_snippets.unwrap_or(defaults.snippet_count),
        }
    }

    fn config_store(&self) -> FileConfigStore {
        self.config
            .as_ref()
            .map(FileConfigStore::with_path)
            .unwrap_or_default()
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = AppDirs::log_path() {
        // logging is best effort; the app works without it
        let _ = logging::init(&path);
    }

    let store = cli.config_store();
    let options = cli.apply(store.load().to_options());
    let pool = SnippetPool::load().context("loading embedded snippets")?;

    if cli.list_languages {
        for language in pool.languages() {
            println!("{language:<12} {}", pool.snippets(language).len());
        }
        return Ok(());
    }

    if cli.save_config {
        store
            .save(&Config::from(&options))
            .with_context(|| format!("writing {}", store.path().display()))?;
        println!("saved defaults to {}", store.path().display());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    info!(
        language = %options.language,
        snippets = options.snippet_count,
        limit = options.time_limit,
        "starting"
    );

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(pool, options, Rc::new(SystemClock));
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "event loop failed");
    }
    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        match runner.step() {
            AppEvent::Tick => {
                let before = app.session.phase();
                app.on_tick();

                // redraw only while the clock is visibly moving
                if before == Phase::Running {
                    terminal.draw(|f| ui::draw(app, f))?;
                }
            }
            AppEvent::Resize => {
                terminal.draw(|f| ui::draw(app, f))?;
            }
            AppEvent::Key(key) => {
                if app.handle_key(key) == Flow::Quit {
                    break;
                }
                terminal.draw(|f| ui::draw(app, f))?;
            }
        }
    }

    info!("quitting");
    Ok(())
}
