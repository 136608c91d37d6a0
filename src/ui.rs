pub mod options;
pub mod results;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, Screen},
    session::{CharState, Phase},
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

pub fn draw(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let prompt_lines = prompt_height(session.prompt(), max_chars_per_line);
        let options_lines = match self.screen {
            Screen::Options => options::HEIGHT,
            Screen::Typing => 0,
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1),            // title
                Constraint::Length(1),            // stats
                Constraint::Length(1),            // padding
                Constraint::Min(prompt_lines),    // prompt
                Constraint::Length(options_lines), // options panel
                Constraint::Length(1),            // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(
            "typing speed test for developers",
            italic_style.fg(Color::Gray),
        ))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        let stats = Line::from(vec![
            Span::styled(format!("Time: {}s", session.remaining_secs()), bold_style),
            Span::raw("   "),
            Span::styled(format!("WPM: {}", session.wpm()), bold_style),
            Span::raw("   "),
            Span::styled(format!("Mistakes: {}", session.mistakes()), bold_style),
            Span::raw("   "),
            Span::styled(self.options.language.label(), dim_style),
        ]);
        Paragraph::new(stats)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        Paragraph::new(Line::from(prompt_spans(self)))
            .alignment(if prompt_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: false })
            .render(chunks[3], buf);

        if self.screen == Screen::Options {
            options::render(self, chunks[4], buf);
        }

        let legend = match self.screen {
            Screen::Typing => "(ctrl+o) options / (ctrl+r) reset / (esc) quit",
            Screen::Options => "(t)ime / (s)nippets / (l)anguage ←→ / (esc) close / (ctrl+r) reset",
        };
        Paragraph::new(Span::styled(legend, italic_style))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);

        if let Some(results) = session.results().filter(|_| session.results_visible()) {
            results::render(&results, area, buf);
        }
    }
}

fn prompt_height(prompt: &str, max_chars_per_line: u16) -> u16 {
    let width = prompt.width() as f64;
    if width <= max_chars_per_line as f64 {
        return 1;
    }
    // word wrapping can spill onto one extra line
    ((width / max_chars_per_line as f64).ceil() + 1.0) as u16
}

fn prompt_spans(app: &App) -> Vec<Span<'static>> {
    let session = &app.session;
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = bold_style.fg(Color::Green);
    let red_bold_style = bold_style.fg(Color::Red);
    let dim_bold_style = bold_style.add_modifier(Modifier::DIM);
    let cursor_style = dim_bold_style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);

    let show_cursor = session.phase() != Phase::Finished;
    let cursor = session.cursor();

    session
        .prompt()
        .chars()
        .zip(session.char_states())
        .enumerate()
        .map(|(idx, (expected, state))| match state {
            CharState::Correct => Span::styled(expected.to_string(), green_bold_style),
            CharState::Incorrect => Span::styled(
                match expected {
                    ' ' => "·".to_owned(),
                    c => c.to_string(),
                },
                red_bold_style,
            ),
            CharState::Pending if show_cursor && idx == cursor => {
                Span::styled(expected.to_string(), cursor_style)
            }
            CharState::Pending => Span::styled(expected.to_string(), dim_bold_style),
        })
        .collect()
}
