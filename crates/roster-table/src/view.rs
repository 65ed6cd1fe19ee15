//! View state and the derived row set.
//!
//! State is local to one [`TableView`] instance and mutated only through
//! [`Action`]s; every transition is total and synchronous. The derived
//! row set is a pure function of (dataset, schema, sort, filter) and is
//! recomputed in full after each transition.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::format::format_value;
use crate::types::{CellFormat, CellValue, ColumnSpec, Row, SortOrder};

/// State transition for a table view. All variants are total: unknown
/// keys, non-sortable columns, and unpaired columns are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the sort spec with a single (column, direction) pair.
    SetSort(String, SortOrder),
    /// Replace the global filter text. Empty matches every row.
    SetFilter(String),
    /// Swap visibility between a column and its paired alternate: the
    /// named column hides, its pair shows.
    TogglePair(String),
}

/// Mutable view state, owned exclusively by one [`TableView`].
///
/// Not persisted; a fresh view starts from the schema's static defaults.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// At most one entry; empty means natural dataset order.
    pub sort: Vec<(String, SortOrder)>,
    pub filter: String,
    /// Runtime visibility overrides; absent keys fall back to the
    /// column's static default.
    pub visibility: HashMap<String, bool>,
}

/// Sort/filter/visibility state layered over a fixed column schema.
#[derive(Debug, Clone)]
pub struct TableView {
    columns: Vec<ColumnSpec>,
    state: ViewState,
}

impl TableView {
    /// Create a view over a schema fixed for the instance lifetime.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            state: ViewState::default(),
        }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn column(&self, key: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Apply one state transition. Never fails; invalid targets are
    /// ignored so the caller can dispatch blindly.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetSort(key, order) => {
                if self.column(&key).is_some_and(|c| c.sortable) {
                    self.state.sort = vec![(key, order)];
                }
            }
            Action::SetFilter(text) => {
                self.state.filter = text;
            }
            Action::TogglePair(key) => {
                let Some(pair) = self.column(&key).and_then(|c| c.paired_with.clone()) else {
                    return;
                };
                self.state.visibility.insert(key, false);
                self.state.visibility.insert(pair, true);
            }
        }
    }

    /// Runtime visibility of a column, falling back to its static default.
    pub fn is_visible(&self, key: &str) -> bool {
        self.state
            .visibility
            .get(key)
            .copied()
            .unwrap_or_else(|| self.column(key).is_some_and(|c| c.visible))
    }

    /// Columns currently shown, in schema order.
    pub fn visible_columns(&self) -> Vec<&ColumnSpec> {
        self.columns
            .iter()
            .filter(|c| self.is_visible(&c.key))
            .collect()
    }

    /// The active sort, if any.
    pub fn sort(&self) -> Option<(&str, SortOrder)> {
        self.state.sort.first().map(|(k, o)| (k.as_str(), *o))
    }

    /// Compute the filtered, sorted sequence of row indices.
    ///
    /// Pure with respect to the dataset: rows are never reordered or
    /// mutated, only indexed.
    pub fn derived_rows(&self, rows: &[Row]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..rows.len())
            .filter(|&i| self.matches_filter(&rows[i]))
            .collect();

        if let Some((key, order)) = self.sort() {
            if let Some(col) = self.column(key) {
                let numeric = !matches!(col.format, CellFormat::Text);
                // Stable sort preserves dataset order for equal keys.
                indices.sort_by(|&a, &b| {
                    compare_cells(rows[a].get(key), rows[b].get(key), numeric, order)
                });
            }
        }

        indices
    }

    /// Global filter predicate: case-insensitive substring over the text
    /// coercion of every filterable column.
    fn matches_filter(&self, row: &Row) -> bool {
        if self.state.filter.is_empty() {
            return true;
        }
        let needle = self.state.filter.to_lowercase();
        self.columns
            .iter()
            .filter(|c| c.filterable)
            .any(|c| row.get(&c.key).as_text().to_lowercase().contains(&needle))
    }

    /// Render one cell of a row for display.
    pub fn format_cell(&self, row: &Row, column: &ColumnSpec) -> String {
        format_value(row.get(&column.key), &column.format, row)
    }
}

/// Column-typed comparison. Numeric columns order by value with
/// unparseable cells after all numbers; text columns order
/// lexicographically.
fn compare_cells(a: &CellValue, b: &CellValue, numeric: bool, order: SortOrder) -> Ordering {
    if numeric {
        match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => directed(x.partial_cmp(&y).unwrap_or(Ordering::Equal), order),
            // Valid numbers sort before unparseable cells in either
            // direction.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => directed(a.as_text().cmp(&b.as_text()), order),
        }
    } else {
        directed(a.as_text().cmp(&b.as_text()), order)
    }
}

fn directed(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ord,
        SortOrder::Descending => ord.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Align;

    fn schema() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("name", "Name"),
            ColumnSpec::new("salary", "Salary")
                .align(Align::Right)
                .filterable(false)
                .format(CellFormat::Currency)
                .paired_with("bonus_pct"),
            ColumnSpec::new("bonus_pct", "Bonus %")
                .align(Align::Right)
                .sortable(false)
                .filterable(false)
                .format(CellFormat::PercentOf {
                    numerator: "bonus".to_string(),
                    denominator: "salary".to_string(),
                })
                .hidden()
                .paired_with("salary"),
        ]
    }

    fn dataset() -> Vec<Row> {
        vec![
            Row::new().with("name", "Ann").with("salary", 100000.0).with("bonus", 5000.0),
            Row::new().with("name", "Bo").with("salary", 80000.0).with("bonus", 12000.0),
        ]
    }

    // Descending salary sort orders Ann before Bo.
    #[test]
    fn test_sort_salary_descending() {
        let mut view = TableView::new(schema());
        view.apply(Action::SetSort("salary".into(), SortOrder::Descending));
        assert_eq!(view.derived_rows(&dataset()), vec![0, 1]);

        view.apply(Action::SetSort("salary".into(), SortOrder::Ascending));
        assert_eq!(view.derived_rows(&dataset()), vec![1, 0]);
    }

    // The filter is case-insensitive, so "an" matches
    // "Ann" and only Ann's row remains.
    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut view = TableView::new(schema());
        view.apply(Action::SetFilter("an".into()));
        assert_eq!(view.derived_rows(&dataset()), vec![0]);
    }

    #[test]
    fn test_empty_filter_matches_every_row() {
        let view = TableView::new(schema());
        assert_eq!(view.derived_rows(&dataset()), vec![0, 1]);
    }

    #[test]
    fn test_filter_skips_non_filterable_columns() {
        let mut view = TableView::new(schema());
        // "80000" only appears in salary, which is not filterable.
        view.apply(Action::SetFilter("80000".into()));
        assert!(view.derived_rows(&dataset()).is_empty());
    }

    // Extending the filter string never widens the result set.
    #[test]
    fn test_filter_monotonicity() {
        let rows = vec![
            Row::new().with("name", "Anna"),
            Row::new().with("name", "Annabel"),
            Row::new().with("name", "Bo"),
            Row::new().with("name", "Hannah"),
        ];
        let mut view = TableView::new(vec![ColumnSpec::new("name", "Name")]);
        let mut previous: Option<Vec<usize>> = None;
        for len in 0..="annab".len() {
            view.apply(Action::SetFilter("annab"[..len].to_string()));
            let current = view.derived_rows(&rows);
            if let Some(prev) = &previous {
                assert!(current.iter().all(|i| prev.contains(i)));
            }
            previous = Some(current);
        }
    }

    // Duplicate-key rows keep dataset order, and re-sorting is
    // idempotent.
    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let rows = vec![
            Row::new().with("name", "Cy").with("salary", 50000.0),
            Row::new().with("name", "Ann").with("salary", 50000.0),
            Row::new().with("name", "Bo").with("salary", 90000.0),
        ];
        let mut view = TableView::new(schema());
        view.apply(Action::SetSort("salary".into(), SortOrder::Ascending));
        let first = view.derived_rows(&rows);
        assert_eq!(first, vec![0, 1, 2]);

        view.apply(Action::SetSort("salary".into(), SortOrder::Ascending));
        assert_eq!(view.derived_rows(&rows), first);
    }

    #[test]
    fn test_numeric_sort_places_unparseable_last() {
        let rows = vec![
            Row::new().with("name", "Ann").with("salary", "n/a"),
            Row::new().with("name", "Bo").with("salary", 80000.0),
            Row::new().with("name", "Cy").with("salary", 100000.0),
        ];
        let mut view = TableView::new(schema());
        view.apply(Action::SetSort("salary".into(), SortOrder::Descending));
        assert_eq!(view.derived_rows(&rows), vec![2, 1, 0]);
    }

    #[test]
    fn test_set_sort_replaces_prior_spec() {
        let mut view = TableView::new(schema());
        view.apply(Action::SetSort("salary".into(), SortOrder::Ascending));
        view.apply(Action::SetSort("name".into(), SortOrder::Descending));
        assert_eq!(view.state().sort.len(), 1);
        assert_eq!(view.sort(), Some(("name", SortOrder::Descending)));
    }

    #[test]
    fn test_sort_on_non_sortable_column_is_noop() {
        let mut view = TableView::new(schema());
        view.apply(Action::SetSort("bonus_pct".into(), SortOrder::Ascending));
        assert!(view.sort().is_none());
    }

    // Exactly one of a visibility pair is visible after any sequence
    // of toggles.
    #[test]
    fn test_visibility_pair_exclusivity() {
        let mut view = TableView::new(schema());
        assert!(view.is_visible("salary"));
        assert!(!view.is_visible("bonus_pct"));

        for key in ["salary", "bonus_pct", "bonus_pct", "salary", "salary"] {
            view.apply(Action::TogglePair(key.into()));
            let visible =
                view.is_visible("salary") as usize + view.is_visible("bonus_pct") as usize;
            assert_eq!(visible, 1);
        }
        // Last toggle hid salary.
        assert!(view.is_visible("bonus_pct"));
    }

    #[test]
    fn test_toggle_on_unpaired_column_is_noop() {
        let mut view = TableView::new(schema());
        view.apply(Action::TogglePair("name".into()));
        assert!(view.is_visible("name"));
    }

    #[test]
    fn test_visible_columns_keep_schema_order() {
        let mut view = TableView::new(schema());
        let keys: Vec<&str> = view.visible_columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "salary"]);

        view.apply(Action::TogglePair("salary".into()));
        let keys: Vec<&str> = view.visible_columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "bonus_pct"]);
    }

    // The empty dataset renders as a valid state and no transition
    // fails on it.
    #[test]
    fn test_empty_dataset_is_safe() {
        let mut view = TableView::new(schema());
        let rows: Vec<Row> = Vec::new();
        assert!(view.derived_rows(&rows).is_empty());

        view.apply(Action::SetSort("salary".into(), SortOrder::Descending));
        view.apply(Action::SetFilter("ann".into()));
        view.apply(Action::TogglePair("salary".into()));
        assert!(view.derived_rows(&rows).is_empty());
        assert_eq!(view.visible_columns().len(), 2);
    }
}
