//! Footer component with keyboard shortcuts and status messages.

use crate::ui::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, status_message: Option<&str>, theme: &Theme) {
        let help = "j/k:nav  h/l:column  /:filter  s/S:sort  p:swap  c:copy  Tab:view  ?:help  q:quit";
        let version = format!("v{}", VERSION);

        // Split footer into left (help/status), right (version)
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(version.len() as u16 + 1),
            ])
            .split(area);

        // Show status message if present, otherwise show help
        let left_content = if let Some(msg) = status_message {
            Line::from(Span::styled(
                msg.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(help, Style::default().fg(theme.dim)))
        };

        frame.render_widget(Paragraph::new(left_content), chunks[0]);

        let version_paragraph = Paragraph::new(Line::from(Span::styled(
            version,
            Style::default().fg(theme.dim),
        )));
        frame.render_widget(version_paragraph, chunks[1]);
    }
}
