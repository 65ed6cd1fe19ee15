//! Generic table component rendering a browser table.
//!
//! One header row plus one row per visible, filtered, sorted record; an
//! empty derived row set renders a single "No results." placeholder.

use crate::app::BrowserTable;
use crate::ui::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use roster_table::Align;

/// Widest a column may render; longer content is cut with an ellipsis.
const MAX_COLUMN_WIDTH: usize = 28;

pub struct DataTable;

impl DataTable {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        table: &BrowserTable,
        title: Line<'static>,
        filter_active: bool,
        theme: &Theme,
    ) {
        let columns = table.view.visible_columns();

        // Pre-render every visible cell so widths can fit the content
        let rendered: Vec<Vec<String>> = table
            .derived
            .iter()
            .map(|&i| {
                columns
                    .iter()
                    .map(|col| truncate(&table.view.format_cell(&table.rows[i], col)))
                    .collect()
            })
            .collect();

        let widths: Vec<Constraint> = columns
            .iter()
            .enumerate()
            .map(|(ci, col)| {
                let label_width = col.label.len() + 2; // room for sort marker
                let content_width = rendered.iter().map(|r| r[ci].len()).max().unwrap_or(0);
                Constraint::Length(label_width.max(content_width).min(MAX_COLUMN_WIDTH) as u16)
            })
            .collect();

        let header = Row::new(
            columns
                .iter()
                .enumerate()
                .map(|(ci, col)| {
                    let marker = match table.view.sort() {
                        Some((key, order)) if key == col.key => match order {
                            roster_table::SortOrder::Ascending => " ▲",
                            roster_table::SortOrder::Descending => " ▼",
                        },
                        _ => "",
                    };
                    let mut style = Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD);
                    if ci == table.cursor_col {
                        style = style.fg(theme.accent);
                    }
                    header_cell(format!("{}{}", col.label, marker), col.align, style)
                })
                .collect::<Vec<Cell>>(),
        )
        .style(Style::default().add_modifier(Modifier::UNDERLINED));

        let rows: Vec<Row> = rendered
            .iter()
            .map(|cells| {
                Row::new(
                    cells
                        .iter()
                        .zip(columns.iter())
                        .map(|(text, col)| body_cell(text.clone(), col.align, theme))
                        .collect::<Vec<Cell>>(),
                )
            })
            .collect();

        let filter = &table.view.state().filter;
        let filter_line = if filter_active {
            Line::from(vec![
                Span::styled(" Filter: ", Style::default().fg(theme.accent)),
                Span::styled(format!("{filter}▏"), Style::default().fg(theme.foreground)),
                Span::raw(" "),
            ])
        } else if !filter.is_empty() {
            Line::from(Span::styled(
                format!(" Filter: {filter} "),
                Style::default().fg(theme.dim),
            ))
        } else {
            Line::from("")
        };

        let widget = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_bottom(filter_line),
            )
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut table_state = TableState::default();
        if !table.derived.is_empty() {
            table_state.select(Some(table.selected));
        }

        frame.render_stateful_widget(widget, area, &mut table_state);

        // Placeholder row spanning all visible columns
        if table.derived.is_empty() && area.height > 3 && area.width > 4 {
            let inner = Rect {
                x: area.x + 2,
                y: area.y + 2,
                width: area.width - 4,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No results.",
                    Style::default().fg(theme.dim),
                ))
                .alignment(Alignment::Center),
                inner,
            );
        }
    }
}

fn header_cell(text: String, align: Align, style: Style) -> Cell<'static> {
    Cell::from(Text::from(text).alignment(alignment(align))).style(style)
}

fn body_cell(text: String, align: Align, theme: &Theme) -> Cell<'static> {
    Cell::from(Text::from(text).alignment(alignment(align)))
        .style(Style::default().fg(theme.foreground))
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Right => Alignment::Right,
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_COLUMN_WIDTH {
        let cut: String = text.chars().take(MAX_COLUMN_WIDTH - 1).collect();
        format!("{cut}…")
    } else {
        text.to_string()
    }
}
