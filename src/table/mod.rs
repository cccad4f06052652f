//! Table model over the accumulated predictions.
//!
//! The model keeps only view state (sort, filters, visibility, page). Data is
//! passed in on every query so the controller remains the single owner of the
//! prediction list. [`TableModel::snapshot`] derives everything the renderer
//! needs for one frame.

mod columns;
mod filter;
mod pagination;
mod sorting;

pub use columns::{Cell, ColumnId, format_score};
pub use filter::ColumnFilter;
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZES, Pagination, normalize_page_size};
pub use sorting::{SortDirection, SortSpec, compare_alphanumeric, next_direction};

use std::collections::HashSet;

use crate::prediction::Prediction;

/// Header cell as the renderer sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnHeader {
    pub id: ColumnId,
    pub label: &'static str,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
}

/// One rendered row of the current page.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<Cell>,
}

/// Everything the table view renders for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSnapshot {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<TableRow>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl Default for TableSnapshot {
    fn default() -> Self {
        TableModel::default().snapshot(&[])
    }
}

#[derive(Clone, Debug, Default)]
pub struct TableModel {
    sorting: Vec<SortSpec>,
    global_filter: String,
    column_filters: Vec<ColumnFilter>,
    hidden: HashSet<ColumnId>,
    pagination: Pagination,
}

impl TableModel {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    pub fn sorting(&self) -> &[SortSpec] {
        &self.sorting
    }

    pub fn sort_direction(&self, column: ColumnId) -> Option<SortDirection> {
        self.sorting
            .iter()
            .find(|spec| spec.column == column)
            .map(|spec| spec.direction)
    }

    /// Advance `column` through its sort cycle, replacing any other sort key.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        if !column.sortable() {
            return;
        }
        let next = next_direction(self.sort_direction(column));
        self.sorting.clear();
        if let Some(direction) = next {
            self.sorting.push(SortSpec { column, direction });
        }
        self.pagination.reset();
    }

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.global_filter {
            return;
        }
        self.global_filter = text;
        self.pagination.reset();
    }

    pub fn column_filter(&self, column: ColumnId) -> Option<&str> {
        self.column_filters
            .iter()
            .find(|filter| filter.column == column)
            .map(|filter| filter.value.as_str())
    }

    /// Set or, with empty text, remove the filter of one column.
    pub fn set_column_filter(&mut self, column: ColumnId, text: impl Into<String>) {
        let text = text.into();
        if self.column_filter(column).unwrap_or("") == text {
            return;
        }
        self.column_filters.retain(|filter| filter.column != column);
        if !text.is_empty() {
            self.column_filters.push(ColumnFilter {
                column,
                value: text,
            });
        }
        self.pagination.reset();
    }

    pub fn is_column_visible(&self, column: ColumnId) -> bool {
        !self.hidden.contains(&column)
    }

    pub fn set_column_visible(&mut self, column: ColumnId, visible: bool) {
        if !column.hideable() {
            return;
        }
        if visible {
            self.hidden.remove(&column);
        } else {
            self.hidden.insert(column);
        }
    }

    pub fn toggle_column_visibility(&mut self, column: ColumnId) {
        let visible = self.is_column_visible(column);
        self.set_column_visible(column, !visible);
    }

    pub fn visible_columns(&self) -> Vec<ColumnId> {
        ColumnId::ALL
            .into_iter()
            .filter(|column| self.is_column_visible(*column))
            .collect()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn page_index(&self) -> usize {
        self.pagination.page_index()
    }

    /// Change the page size; the index is clamped on the next query.
    pub fn set_page_size(&mut self, size: usize) {
        self.pagination.set_page_size(size);
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    pub fn next_page(&mut self, data: &[Prediction]) {
        let rows = self.filtered_indices(data).len();
        self.pagination.clamp(rows);
        self.pagination.next(rows);
    }

    pub fn last_page(&mut self, data: &[Prediction]) {
        let rows = self.filtered_indices(data).len();
        self.pagination.last(rows);
    }

    /// The prediction list changed; go back to the first page.
    pub fn on_data_changed(&mut self) {
        self.pagination.reset();
    }

    /// Indices into `data` after filtering and sorting, in display order.
    pub fn filtered_indices(&self, data: &[Prediction]) -> Vec<usize> {
        let visible = self.visible_columns();
        let needle = self.global_filter.to_lowercase();
        let mut indices: Vec<usize> = data
            .iter()
            .enumerate()
            .filter(|(_, prediction)| {
                filter::matches_global(prediction, &visible, &needle)
                    && filter::matches_columns(prediction, &self.column_filters)
            })
            .map(|(index, _)| index)
            .collect();
        sorting::sort_indices(&mut indices, data, &self.sorting);
        indices
    }

    /// Derive the current page; clamps the page index first.
    pub fn snapshot(&mut self, data: &[Prediction]) -> TableSnapshot {
        let indices = self.filtered_indices(data);
        let filtered_count = indices.len();
        self.pagination.clamp(filtered_count);

        let visible = self.visible_columns();
        let columns = visible
            .iter()
            .map(|&id| ColumnHeader {
                id,
                label: id.label(),
                sortable: id.sortable(),
                sort: self.sort_direction(id),
            })
            .collect();
        let rows = indices[self.pagination.window(filtered_count)]
            .iter()
            .map(|&index| {
                let prediction = &data[index];
                TableRow {
                    id: prediction.id.clone(),
                    cells: visible.iter().map(|column| column.cell(prediction)).collect(),
                }
            })
            .collect();

        TableSnapshot {
            columns,
            rows,
            filtered_count,
            total_count: data.len(),
            page_index: self.pagination.page_index(),
            page_count: self.pagination.page_count(filtered_count),
            page_size: self.pagination.page_size(),
            can_previous: self.pagination.can_previous(),
            can_next: self.pagination.can_next(filtered_count),
        }
    }
}
