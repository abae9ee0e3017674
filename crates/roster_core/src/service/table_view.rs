//! Table projection of the record collection.

use crate::model::student::StudentRecord;
use crate::repo::student_repo::StudentRepository;
use crate::service::record_store::RecordStore;

/// Row count above which the table scrolls vertically.
pub const ROW_THRESHOLD: usize = 5;
pub const EMPTY_MESSAGE: &str = "No records yet. Add a student using the form.";

/// Whether a table with `row_count` rows needs a vertical scrollbar.
pub fn scroll_enabled(row_count: usize) -> bool {
    row_count > ROW_THRESHOLD
}

/// One rendered row. `index` is the handle for edit/delete actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub index: usize,
    pub record: &'a StudentRecord,
}

/// Snapshot of everything the table needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub rows: Vec<TableRow<'a>>,
    /// Set only when there are no rows.
    pub empty_message: Option<&'static str>,
    pub scroll_enabled: bool,
    /// Index of the row currently being edited.
    pub editing: Option<usize>,
}

impl<'a> TableView<'a> {
    pub fn build<R: StudentRepository>(store: &'a RecordStore<R>) -> Self {
        let rows: Vec<TableRow<'a>> = store
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| TableRow { index, record })
            .collect();
        Self {
            empty_message: rows.is_empty().then_some(EMPTY_MESSAGE),
            scroll_enabled: scroll_enabled(rows.len()),
            editing: store.edit_state().index(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scroll_enabled;

    #[test]
    fn scroll_turns_on_strictly_above_threshold() {
        assert!(!scroll_enabled(0));
        assert!(!scroll_enabled(5));
        assert!(scroll_enabled(6));
    }
}
