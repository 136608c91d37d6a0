use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::session::Results;

const WIDTH: u16 = 34;
const HEIGHT: u16 = 9;

/// Draw the results popup centred over `area`.
pub fn render(results: &Results, area: Rect, buf: &mut Buffer) {
    let popup = centered(area, WIDTH, HEIGHT);
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled(format!("WPM: {}", results.wpm), bold_style)),
        Line::from(Span::styled(
            format!("Accuracy: {}%", results.accuracy),
            bold_style,
        )),
        Line::from(Span::styled(
            format!("Time: {}s", results.elapsed_secs),
            bold_style,
        )),
        Line::from(Span::styled(
            format!("Mistakes: {}", results.mistakes),
            bold_style,
        )),
        Line::default(),
        Line::from(Span::styled(
            "(enter) try again / (esc) quit",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];

    Clear.render(popup, buf);
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Test Results")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .alignment(Alignment::Center)
        .render(popup, buf);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
