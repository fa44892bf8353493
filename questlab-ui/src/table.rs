//! A table widget's model: fixed columns, string cells, one selected row.

use crate::{UiError, UiResult, View};
use questlab_model::Inventory;
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    title: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    selected: Option<usize>,
}

impl TableModel {
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            title: title.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            selected: None,
        }
    }

    /// One row per item: name, kind, value, weight.
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let mut table = Self::new("Inventory", ["Name", "Kind", "Value", "Weight"]);
        table.rows = inventory
            .iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    item.kind.to_string(),
                    item.value.to_string(),
                    format!("{:.1}", item.weight),
                ]
            })
            .collect();
        table
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column).ok()?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    /// Appends a row and returns its index. The cell count must match the
    /// column count.
    pub fn append_row<S: Into<String>>(
        &mut self,
        cells: impl IntoIterator<Item = S>,
    ) -> UiResult<usize> {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(UiError::ColumnCount {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(self.rows.len() - 1)
    }

    /// Removes a row. The selection follows the row it was on, and is
    /// cleared if that row is the one removed.
    pub fn remove_row(&mut self, index: usize) -> UiResult<Vec<String>> {
        self.check_row(index)?;
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Ok(self.rows.remove(index))
    }

    pub fn select(&mut self, index: usize) -> UiResult<()> {
        self.check_row(index)?;
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Cells of the selected row.
    #[must_use]
    pub fn selected(&self) -> Option<&[String]> {
        self.selected.and_then(|i| self.row(i))
    }

    /// Sorts rows by a column. Cells that both parse as numbers compare
    /// numerically, anything else as text. The sort is stable and the
    /// selection stays on the same row.
    pub fn sort_by_column(&mut self, column: &str, ascending: bool) -> UiResult<()> {
        let col = self.column_index(column)?;
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| {
            let ord = compare_cells(&self.rows[a][col], &self.rows[b][col]);
            if ascending { ord } else { ord.reverse() }
        });
        self.selected = self
            .selected
            .and_then(|s| order.iter().position(|&old| old == s));
        let mut old_rows: Vec<Option<Vec<String>>> =
            std::mem::take(&mut self.rows).into_iter().map(Some).collect();
        self.rows = order
            .into_iter()
            .filter_map(|old| old_rows[old].take())
            .collect();
        debug!(column, ascending, "Table sorted");
        Ok(())
    }

    fn column_index(&self, column: &str) -> UiResult<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
            .ok_or_else(|| UiError::UnknownColumn(column.to_string()))
    }

    fn check_row(&self, index: usize) -> UiResult<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(UiError::RowOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.cmp(b),
    }
}

impl View for TableModel {
    fn title(&self) -> &str {
        &self.title
    }

    /// Columns padded to their widest cell; the selected row is marked `>`.
    fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.columns.len())
            .map(|c| {
                self.rows
                    .iter()
                    .map(|r| r[c].chars().count())
                    .chain(std::iter::once(self.columns[c].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };
        let mut out = vec![format!("  {}", line(&self.columns))];
        for (i, row) in self.rows.iter().enumerate() {
            let marker = if self.selected == Some(i) { '>' } else { ' ' };
            out.push(format!("{marker} {}", line(row)));
        }
        out.join("\n")
    }
}
