use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    app::App,
    language::Language,
    options::{SNIPPET_COUNTS, TIME_LIMITS},
};

/// Rows reserved for the options panel, borders included
pub const HEIGHT: u16 = 7;

pub fn render(app: &App, area: Rect, buf: &mut Buffer) {
    let locked = app.options_locked();
    let options = &app.options;

    let choice = |text: String, selected: bool| {
        let style = match (selected, locked) {
            (true, false) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            (true, true) => Style::default().add_modifier(Modifier::BOLD | Modifier::DIM),
            (false, _) => Style::default().add_modifier(Modifier::DIM),
        };
        [Span::styled(format!(" {text} "), style), Span::raw(" ")]
    };

    let row = |label: &'static str, choices: Vec<[Span<'static>; 2]>| {
        let mut spans = vec![Span::styled(
            format!("{label:<11}"),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        spans.extend(choices.into_iter().flatten());
        Line::from(spans)
    };

    let mut lines = vec![
        row(
            "Time:",
            TIME_LIMITS
                .iter()
                .map(|&secs| choice(format!("{secs}s"), secs == options.time_limit))
                .collect(),
        ),
        row(
            "Snippets:",
            SNIPPET_COUNTS
                .iter()
                .map(|&count| choice(count.to_string(), count == options.snippet_count))
                .collect(),
        ),
        row(
            "Language:",
            Language::all()
                .iter()
                .map(|lang| choice(lang.label().to_string(), *lang == options.language))
                .collect(),
        ),
    ];

    if locked {
        lines.push(Line::from(Span::styled(
            "options are locked while typing; finish or reset (ctrl+r) to change them",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Options"))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
