//! Row/column model produced by the parser.
//!
//! A [`Dataset`] owns the header ([`Columns`]) and the ordered rows of one
//! loaded file. Rows are positional: cell `i` belongs to column `i`, and every
//! row is normalized to exactly the header width on construction.

use super::types::CellValue;
use serde::Serialize;

/// Ordered column names, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Columns {
    names: Vec<String>,
}

impl Columns {
    /// Create a header from column names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Columns {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the header has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names as a slice.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over column names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Index of the first column called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// One data row; a mapping from column to cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataRow {
    cells: Vec<CellValue>,
}

impl DataRow {
    /// Create a row from cells as given.
    pub fn new(cells: Vec<CellValue>) -> Self {
        DataRow { cells }
    }

    /// Create a row of exactly `width` cells.
    ///
    /// Missing trailing cells become [`CellValue::Empty`]; extra cells are
    /// dropped.
    pub fn with_width(mut cells: Vec<CellValue>, width: usize) -> Self {
        cells.resize(width, CellValue::Empty);
        DataRow { cells }
    }

    /// All cells in column order.
    #[inline]
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Cell at a column index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }

    /// Cell under the column called `name`.
    pub fn value<'a>(&'a self, columns: &Columns, name: &str) -> Option<&'a CellValue> {
        columns.position(name).and_then(|idx| self.cells.get(idx))
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Same row with empty strings collapsed into `Empty`.
    pub fn normalized(&self) -> DataRow {
        DataRow::new(self.cells.iter().map(CellValue::normalized).collect())
    }
}

impl<T: Into<CellValue>> FromIterator<T> for DataRow {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DataRow::new(iter.into_iter().map(Into::into).collect())
    }
}

/// The rows and header of one loaded file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Columns,
    rows: Vec<DataRow>,
}

impl Dataset {
    /// Create a dataset, normalizing every row to the header width.
    pub fn new(columns: Columns, rows: Vec<DataRow>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|row| {
                if row.len() == width {
                    row
                } else {
                    DataRow::with_width(row.cells, width)
                }
            })
            .collect();
        Dataset { columns, rows }
    }

    /// The header.
    #[inline]
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// All rows in source order.
    #[inline]
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// Number of rows (header excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no data rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` (0-based) under the column called `column`.
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.rows.get(row)?.value(&self.columns, column)
    }
}
