use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;

use codetype::{
    language::{Language, SnippetPool},
    options::Options,
    runtime::{AppEvent, FixedTicker, ManualClock, Runner, TestEventSource},
    session::Phase,
    App, Flow,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Headless integration using the internal runtime + App without a TTY.
// Every tick advances the manual clock by one tick interval so timed
// behaviour runs instantly.

fn key(c: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn create_app(time_limit: u64, snippet_count: usize) -> (App, ManualClock) {
    let clock = ManualClock::new();
    let app = App::new(
        SnippetPool::load().unwrap(),
        Options {
            language: Language::Python,
            time_limit,
            snippet_count,
        },
        Rc::new(clock.clone()),
    );
    (app, clock)
}

/// Drive the app until it finishes, quits, or `max_steps` runs out.
fn drive<T: codetype::runtime::Ticker>(
    app: &mut App,
    clock: &ManualClock,
    runner: &Runner<TestEventSource, T>,
    max_steps: usize,
) {
    for _ in 0..max_steps {
        match runner.step() {
            AppEvent::Tick => {
                clock.advance(Duration::from_millis(100));
                app.on_tick();
            }
            AppEvent::Resize => {}
            AppEvent::Key(k) => {
                if app.handle_key(k) == Flow::Quit {
                    break;
                }
            }
        }
        if app.session.phase() == Phase::Finished {
            break;
        }
    }
}

#[test]
fn headless_exact_typing_finishes_with_perfect_accuracy() {
    let (mut app, clock) = create_app(15, 1);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    for c in app.session.prompt().chars() {
        tx.send(key(c)).unwrap();
    }

    drive(&mut app, &clock, &runner, 10_000);

    assert_eq!(app.session.phase(), Phase::Finished);
    let results = app.session.results().unwrap();
    assert_eq!(results.accuracy, 100);
    assert_eq!(results.mistakes, 0);
    assert!(results.elapsed_secs < 15);
}

#[test]
fn headless_timed_session_finishes_by_time() {
    let (mut app, clock) = create_app(15, 20);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );

    let first = app.session.prompt().chars().next().unwrap();
    tx.send(key(first)).unwrap();

    drive(&mut app, &clock, &runner, 1_000);

    assert_eq!(app.session.phase(), Phase::Finished);
    assert_eq!(app.session.elapsed_secs(), 15);
    assert_eq!(app.session.remaining_secs(), 0);
    assert!(app.session.results().unwrap().accuracy < 100);
}

#[test]
fn headless_mistakes_survive_backspace() {
    let (mut app, clock) = create_app(60, 3);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    // '\u{1}' never appears in a snippet
    tx.send(key('\u{1}')).unwrap();
    tx.send(AppEvent::Key(KeyEvent::new(
        KeyCode::Backspace,
        KeyModifiers::NONE,
    )))
    .unwrap();
    drop(tx);

    drive(&mut app, &clock, &runner, 10);

    assert_eq!(app.session.phase(), Phase::Running);
    assert_eq!(app.session.cursor(), 0);
    assert_eq!(app.session.mistakes(), 1);
}

#[test]
fn headless_reset_after_finish() {
    let (mut app, clock) = create_app(15, 1);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    for c in app.session.prompt().chars() {
        tx.send(key(c)).unwrap();
    }
    drive(&mut app, &clock, &runner, 10_000);
    assert_eq!(app.session.phase(), Phase::Finished);

    tx.send(AppEvent::Key(KeyEvent::new(
        KeyCode::Char('r'),
        KeyModifiers::CONTROL,
    )))
    .unwrap();
    drive(&mut app, &clock, &runner, 1);

    assert_eq!(app.session.phase(), Phase::Idle);
    assert_eq!(app.session.mistakes(), 0);
    assert_eq!(app.session.wpm(), 0);
    assert_eq!(app.session.elapsed_secs(), 0);
    assert!(!app.session.prompt().is_empty());
}
