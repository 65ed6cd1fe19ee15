//! View tabs component - generates a title line with inline tab selection.

use crate::app::ViewMode;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub struct ViewTabs;

impl ViewTabs {
    /// Generate a title Line like ` [Employees] Jobs `; the detail view
    /// shows the job it was opened for.
    pub fn title_line(view_mode: ViewMode, detail_job: Option<&str>) -> Line<'static> {
        if let (ViewMode::Detail, Some(job)) = (view_mode, detail_job) {
            return Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!("[Employees: {job}]"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" Esc:back ", Style::default().fg(Color::DarkGray)),
            ]);
        }

        let tabs = [("Employees", ViewMode::Employees), ("Jobs", ViewMode::Jobs)];

        let mut spans = Vec::new();
        spans.push(Span::raw(" "));

        for (i, (name, mode)) in tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", Style::default().fg(Color::DarkGray)));
            }

            if *mode == view_mode {
                spans.push(Span::styled(
                    format!("[{}]", name),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    name.to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        spans.push(Span::raw(" "));

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_active_tab_is_bracketed() {
        let line = ViewTabs::title_line(ViewMode::Jobs, None);
        assert_eq!(rendered(&line), " Employees [Jobs] ");
    }

    #[test]
    fn test_detail_title_names_the_job() {
        let line = ViewTabs::title_line(ViewMode::Detail, Some("Engineer"));
        assert!(rendered(&line).contains("[Employees: Engineer]"));
    }
}
