//! Main TUI application.

use crate::components::{DataTable, Footer, Header, ViewTabs};
use crate::ui::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Clear,
};
use roster_store::{Directory, employee_columns, employee_rows, job_columns, job_rows};
use roster_table::{Action, Row, SortOrder, TableView};
use std::time::{Duration, Instant};
use tracing::debug;

/// Which table the main panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Employees,
    Jobs,
    /// Employees filtered by the selected job.
    Detail,
}

/// One browsable table: a dataset, its view engine, and the cursor.
///
/// The derived row set is cached and recomputed after every dispatched
/// action, mirroring the engine's recompute-on-transition contract.
pub struct BrowserTable {
    pub rows: Vec<Row>,
    pub view: TableView,
    pub derived: Vec<usize>,
    pub selected: usize,
    pub cursor_col: usize,
}

impl BrowserTable {
    pub fn new(rows: Vec<Row>, view: TableView) -> Self {
        let mut table = Self {
            rows,
            view,
            derived: Vec::new(),
            selected: 0,
            cursor_col: 0,
        };
        table.refresh();
        table
    }

    /// Dispatch one action and recompute the derived row set.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        self.view.apply(action);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.derived = self.view.derived_rows(&self.rows);
        let visible = self.view.visible_columns().len();
        self.cursor_col = self.cursor_col.min(visible.saturating_sub(1));
        self.selected = self.selected.min(self.derived.len().saturating_sub(1));
    }

    /// Key of the column under the cursor.
    pub fn cursor_column_key(&self) -> Option<String> {
        self.view
            .visible_columns()
            .get(self.cursor_col)
            .map(|c| c.key.clone())
    }

    /// The dataset row currently selected, if any.
    pub fn selected_row(&self) -> Option<&Row> {
        self.derived.get(self.selected).map(|&i| &self.rows[i])
    }

    pub fn select_next(&mut self) {
        let len = self.derived.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.derived.len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        let len = self.derived.len();
        if len > 0 {
            self.selected = len - 1;
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let visible = self.view.visible_columns().len();
        if self.cursor_col + 1 < visible {
            self.cursor_col += 1;
        }
    }
}

/// Main application state.
pub struct App {
    pub directory: Directory,
    pub view_mode: ViewMode,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    employees: BrowserTable,
    jobs: BrowserTable,
    /// Present while the detail view is open; dropped on exit so each
    /// mount starts from fresh view state.
    detail: Option<(String, BrowserTable)>,
    filter_input: bool,
    status_message: Option<(String, Instant)>,
    data_dir: String,
}

impl App {
    pub fn new(directory: Directory, theme: Theme, data_dir: impl Into<String>) -> Self {
        let employees = BrowserTable::new(
            employee_rows(&directory.employees),
            TableView::new(employee_columns()),
        );
        let jobs = BrowserTable::new(job_rows(&directory.jobs), TableView::new(job_columns()));
        Self {
            directory,
            view_mode: ViewMode::default(),
            should_quit: false,
            show_help: false,
            theme,
            employees,
            jobs,
            detail: None,
            filter_input: false,
            status_message: None,
            data_dir: data_dir.into(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The table behind the current view mode.
    pub fn active_table(&self) -> &BrowserTable {
        match self.view_mode {
            ViewMode::Employees => &self.employees,
            ViewMode::Jobs => &self.jobs,
            ViewMode::Detail => self
                .detail
                .as_ref()
                .map(|(_, table)| table)
                .unwrap_or(&self.jobs),
        }
    }

    fn active_table_mut(&mut self) -> &mut BrowserTable {
        match self.view_mode {
            ViewMode::Employees => &mut self.employees,
            ViewMode::Jobs => &mut self.jobs,
            ViewMode::Detail => self
                .detail
                .as_mut()
                .map(|(_, table)| table)
                .unwrap_or(&mut self.jobs),
        }
    }

    /// Job name shown by the open detail view.
    pub fn detail_job(&self) -> Option<&str> {
        self.detail.as_ref().map(|(name, _)| name.as_str())
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Switch between the employee and job lists.
    pub fn toggle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Employees => ViewMode::Jobs,
            ViewMode::Jobs | ViewMode::Detail => ViewMode::Employees,
        };
        self.detail = None;
        self.filter_input = false;
    }

    /// Enter the detail view for the selected job: the provider filters
    /// the dataset by job name before the view engine ever sees it.
    pub fn open_detail(&mut self) {
        if self.view_mode != ViewMode::Jobs {
            return;
        }
        let Some(name) = self
            .jobs
            .selected_row()
            .map(|row| row.get("name").as_text().into_owned())
        else {
            return;
        };
        let employees = self.directory.employees_for_job(&name);
        debug!(job = %name, count = employees.len(), "open detail view");
        let table = BrowserTable::new(
            employee_rows(&employees),
            TableView::new(employee_columns()),
        );
        self.detail = Some((name, table));
        self.view_mode = ViewMode::Detail;
    }

    /// Leave the detail view, discarding its view state.
    pub fn close_detail(&mut self) {
        if self.view_mode == ViewMode::Detail {
            self.detail = None;
            self.view_mode = ViewMode::Jobs;
        }
    }

    pub fn filter_input_active(&self) -> bool {
        self.filter_input
    }

    /// Sort the cursor column. No-op when the column is not sortable.
    fn sort_cursor_column(&mut self, order: SortOrder) {
        let table = self.active_table_mut();
        if let Some(key) = table.cursor_column_key() {
            table.dispatch(Action::SetSort(key, order));
        }
    }

    /// Swap the cursor column with its paired alternate presentation.
    fn toggle_cursor_pair(&mut self) {
        let table = self.active_table_mut();
        if let Some(key) = table.cursor_column_key() {
            table.dispatch(Action::TogglePair(key));
        }
    }

    /// Copy the selected row as tab-separated text to the clipboard.
    fn copy_row(&mut self) {
        let Some(row) = self.active_table().selected_row() else {
            self.set_status("No row selected");
            return;
        };
        let table = self.active_table();
        let text = table
            .view
            .visible_columns()
            .iter()
            .map(|col| table.view.format_cell(row, col))
            .collect::<Vec<String>>()
            .join("\t");

        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(text) {
                Ok(()) => self.set_status("Row copied to clipboard"),
                Err(_) => self.set_status("Failed to copy to clipboard"),
            },
            Err(_) => self.set_status("Clipboard not available"),
        }
    }

    /// Live filter editing: every keystroke dispatches a fresh
    /// `SetFilter` so the derived row set tracks the input exactly.
    fn handle_filter_key(&mut self, key: KeyEvent) {
        let filter = self.active_table().view.state().filter.clone();
        match key.code {
            KeyCode::Esc => {
                self.filter_input = false;
                self.active_table_mut()
                    .dispatch(Action::SetFilter(String::new()));
            }
            KeyCode::Enter => {
                self.filter_input = false;
            }
            KeyCode::Backspace => {
                let mut filter = filter;
                filter.pop();
                self.active_table_mut().dispatch(Action::SetFilter(filter));
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut filter = filter;
                filter.push(c);
                self.active_table_mut().dispatch(Action::SetFilter(filter));
            }
            _ => {}
        }
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key closes the help overlay
        if self.show_help {
            self.show_help = false;
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.filter_input {
            self.handle_filter_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.active_table_mut().select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.active_table_mut().select_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.active_table_mut().select_first(),
            KeyCode::Char('G') | KeyCode::End => self.active_table_mut().select_last(),
            KeyCode::Char('h') | KeyCode::Left => self.active_table_mut().cursor_left(),
            KeyCode::Char('l') | KeyCode::Right => self.active_table_mut().cursor_right(),
            KeyCode::Char('/') => self.filter_input = true,
            KeyCode::Char('s') => self.sort_cursor_column(SortOrder::Ascending),
            KeyCode::Char('S') => self.sort_cursor_column(SortOrder::Descending),
            KeyCode::Char('p') => self.toggle_cursor_pair(),
            KeyCode::Char('c') => self.copy_row(),
            KeyCode::Tab => self.toggle_view_mode(),
            KeyCode::Enter => self.open_detail(),
            KeyCode::Esc => self.close_detail(),
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }

    /// Poll for events and handle them.
    pub fn poll_events(&mut self, timeout: Duration) -> std::io::Result<bool> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Render the UI.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Table
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Header::render(frame, chunks[0], &self.directory, &self.data_dir, &self.theme);

        let title = ViewTabs::title_line(self.view_mode, self.detail_job());
        DataTable::render(
            frame,
            chunks[1],
            self.active_table(),
            title,
            self.filter_input,
            &self.theme,
        );

        let status = self.status_message.as_ref().and_then(|(msg, at)| {
            if at.elapsed() < Duration::from_secs(3) {
                Some(msg.as_str())
            } else {
                None
            }
        });
        Footer::render(frame, chunks[2], status, &self.theme);

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        use ratatui::style::{Color, Style};
        use ratatui::widgets::{Block, Borders, Paragraph};

        let area = centered_rect(50, 60, frame.area());

        let help_text = r#"
  Keyboard Shortcuts
  ──────────────────

  j/k / ↑↓   Navigate rows
  g / G      Go to first/last row
  h/l / ←→   Move column cursor
  /          Filter (type to narrow; Esc clears)
  s / S      Sort cursor column asc/desc
  p          Swap bonus amount / percentage
  c          Copy row to clipboard
  Tab        Switch Employees/Jobs
  Enter      Open employees for job (Jobs view)
  Esc        Leave detail view
  ?          This help
  q / Ctrl+C Quit

  Press any key to close
"#;

        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().bg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_store::{Employee, Job};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn employee(name: &str, job: &str, salary: f64) -> Employee {
        Employee {
            id: name.to_lowercase(),
            name: name.to_string(),
            email: String::new(),
            job_title: job.to_string(),
            department: "Engineering".to_string(),
            start_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            manager: String::new(),
            salary,
            bonus: 5000.0,
            equity: 0.0,
        }
    }

    fn app() -> App {
        let directory = Directory {
            employees: vec![
                employee("Ann", "Engineer", 100000.0),
                employee("Bo", "Designer", 80000.0),
                employee("Cy", "Engineer", 90000.0),
            ],
            jobs: vec![
                Job {
                    id: "j1".to_string(),
                    name: "Engineer".to_string(),
                    department: "Engineering".to_string(),
                },
                Job {
                    id: "j2".to_string(),
                    name: "Designer".to_string(),
                    department: "Design".to_string(),
                },
            ],
        };
        App::new(directory, Theme::dark(), "/tmp/data")
    }

    #[test]
    fn test_tab_switches_views() {
        let mut app = app();
        assert_eq!(app.view_mode, ViewMode::Employees);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view_mode, ViewMode::Jobs);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view_mode, ViewMode::Employees);
    }

    #[test]
    fn test_filter_input_narrows_on_each_keystroke() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        assert!(app.filter_input_active());

        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.active_table().view.state().filter, "an");
        assert_eq!(app.active_table().derived, vec![0]);

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.active_table().view.state().filter, "a");

        // Esc clears the filter and leaves input mode
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.filter_input_active());
        assert_eq!(app.active_table().derived.len(), 3);
    }

    #[test]
    fn test_enter_keeps_filter() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('b')));
        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.filter_input_active());
        assert_eq!(app.active_table().view.state().filter, "bo");
        assert_eq!(app.active_table().derived, vec![1]);
    }

    #[test]
    fn test_detail_view_filters_employees_by_job() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab)); // Jobs view
        app.handle_key(key(KeyCode::Enter)); // first job: Engineer
        assert_eq!(app.view_mode, ViewMode::Detail);
        assert_eq!(app.detail_job(), Some("Engineer"));
        assert_eq!(app.active_table().derived.len(), 2);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.view_mode, ViewMode::Jobs);
        assert!(app.detail_job().is_none());
    }

    #[test]
    fn test_detail_view_state_is_fresh_per_mount() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.active_table().derived.len(), 1);

        app.handle_key(key(KeyCode::Enter)); // leave input mode
        app.handle_key(key(KeyCode::Esc)); // close detail
        app.handle_key(key(KeyCode::Enter)); // reopen
        assert_eq!(app.active_table().view.state().filter, "");
        assert_eq!(app.active_table().derived.len(), 2);
    }

    #[test]
    fn test_sort_keys_sort_cursor_column() {
        let mut app = app();
        // Cursor starts on the name column
        app.handle_key(key(KeyCode::Char('S')));
        assert_eq!(app.active_table().derived, vec![2, 1, 0]);
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.active_table().derived, vec![0, 1, 2]);
    }

    #[test]
    fn test_selection_clamps_when_filter_shrinks_results() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('G')));
        assert_eq!(app.active_table().selected, 2);
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.active_table().selected < app.active_table().derived.len());
    }

    #[test]
    fn test_quit_keys() {
        let mut quit_q = app();
        quit_q.handle_key(key(KeyCode::Char('q')));
        assert!(quit_q.should_quit);

        let mut quit_ctrl_c = app();
        quit_ctrl_c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(quit_ctrl_c.should_quit);
    }
}
