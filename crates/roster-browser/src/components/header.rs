//! Header component with directory summary.

use crate::ui::Theme;
use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use roster_store::Directory;

pub struct Header;

impl Header {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        directory: &Directory,
        data_dir: &str,
        theme: &Theme,
    ) {
        let now = Local::now();
        let datetime = now.format("%Y-%m-%d %H:%M:%S").to_string();

        // Truncate the data dir to fit, keeping the trailing components
        let max_dir_len = (area.width as usize).saturating_sub(40);
        let dir_display = truncate_left(data_dir, max_dir_len);

        let title = Line::from(vec![
            Span::raw(" roster"),
            Span::styled(" │ ", Style::default().fg(theme.dim)),
            Span::styled(dir_display, Style::default().fg(theme.highlight)),
        ]);

        let datetime_line = Line::from(Span::styled(
            format!("{datetime} "),
            Style::default().fg(theme.accent),
        ))
        .alignment(Alignment::Right);

        let counts = Line::from(vec![
            Span::styled(
                format!("{} employees", directory.employees.len()),
                Style::default().fg(theme.foreground),
            ),
            Span::styled(" · ", Style::default().fg(theme.dim)),
            Span::styled(
                format!("{} jobs", directory.jobs.len()),
                Style::default().fg(theme.foreground),
            ),
        ]);

        let paragraph = Paragraph::new(counts).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_top(datetime_line),
        );

        frame.render_widget(paragraph, area);
    }
}

/// Keep the last `max` display characters of a path, prefixed with an
/// ellipsis. Counts chars, not bytes, so multi-byte paths never split.
fn truncate_left(path: &str, max: usize) -> String {
    let chars = path.chars().count();
    if chars > max && max > 3 {
        let tail: String = path.chars().skip(chars - max + 1).collect();
        format!("…{tail}")
    } else {
        path.to_string()
    }
}
