use super::*;
use crate::table::ColumnId;

impl EguiController {
    /// Recompute the snapshot the table view renders.
    pub(crate) fn refresh_table(&mut self) {
        self.ui.table = self.table.snapshot(&self.predictions);
    }

    pub fn toggle_sort(&mut self, column: ColumnId) {
        self.table.toggle_sort(column);
        self.refresh_table();
    }

    /// Apply the search field text as the global filter.
    pub fn set_search(&mut self, text: &str) {
        self.ui.search = text.to_string();
        self.table.set_global_filter(text);
        self.refresh_table();
    }

    pub fn set_column_filter(&mut self, column: ColumnId, text: &str) {
        self.table.set_column_filter(column, text);
        self.refresh_table();
    }

    pub fn set_column_visible(&mut self, column: ColumnId, visible: bool) {
        self.table.set_column_visible(column, visible);
        self.refresh_table();
    }

    pub fn is_column_visible(&self, column: ColumnId) -> bool {
        self.table.is_column_visible(column)
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.table.set_page_size(size);
        self.refresh_table();
    }

    pub fn first_page(&mut self) {
        self.table.first_page();
        self.refresh_table();
    }

    pub fn previous_page(&mut self) {
        self.table.previous_page();
        self.refresh_table();
    }

    pub fn next_page(&mut self) {
        self.table.next_page(&self.predictions);
        self.refresh_table();
    }

    pub fn last_page(&mut self) {
        self.table.last_page(&self.predictions);
        self.refresh_table();
    }
}
