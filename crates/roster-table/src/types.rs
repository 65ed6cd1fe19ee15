//! Column schema and cell value types.

use std::borrow::Cow;

/// Scalar value held by a single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// Absent value. Renders as the missing-value fallback.
    Missing,
}

impl CellValue {
    /// Coerce to text for filtering and lexicographic sorting.
    ///
    /// Whole numbers drop the trailing `.0` so "100000" filters the way
    /// the displayed value reads.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    Cow::Owned(format!("{}", *n as i64))
                } else {
                    Cow::Owned(n.to_string())
                }
            }
            Self::Missing => Cow::Borrowed(""),
        }
    }

    /// Coerce to a number for numeric sorting and formatting.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// One record of the dataset: an ordered mapping from column key to value.
///
/// Identity is the implicit row index; the engine never requires a
/// primary key.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.push((key.into(), value.into()));
    }

    /// Builder-style insert, handy for fixtures and mapping code.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Look up a cell by column key. Absent keys read as `Missing`.
    pub fn get(&self, key: &str) -> &CellValue {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .unwrap_or(&CellValue::Missing)
    }
}

/// Horizontal cell alignment. Numeric columns are right-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// How a raw cell value is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum CellFormat {
    /// Verbatim text.
    Text,
    /// Localized number with grouping separators ("5,000").
    Number,
    /// Fixed-unit USD currency ("$5,000.00").
    Currency,
    /// Percentage derived from two source columns:
    /// `numerator / denominator`, two fraction digits ("5.00%").
    PercentOf { numerator: String, denominator: String },
}

/// Sort direction for a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Static schema entry describing one column.
///
/// Fixed for the lifetime of a view instance; only the visibility default
/// is overridden at runtime, tracked in [`crate::ViewState`].
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Unique key, stable across renders.
    pub key: String,
    /// Display label for the header cell.
    pub label: String,
    pub align: Align,
    /// Whether the column exposes sort controls.
    pub sortable: bool,
    /// Whether the column participates in the global free-text filter.
    pub filterable: bool,
    pub format: CellFormat,
    /// Default visibility, before any runtime toggles.
    pub visible: bool,
    /// Key of a mutually exclusive alternate presentation of the same
    /// underlying data. Exactly one of the pair is visible at a time.
    pub paired_with: Option<String>,
}

impl ColumnSpec {
    /// A left-aligned, sortable, filterable text column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            align: Align::Left,
            sortable: true,
            filterable: true,
            format: CellFormat::Text,
            visible: true,
            paired_with: None,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn paired_with(mut self, key: impl Into<String>) -> Self {
        self.paired_with = Some(key.into());
        self
    }
}
