//! Text filters over table rows.

use super::columns::ColumnId;
use crate::prediction::Prediction;

/// Per-column filter text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column: ColumnId,
    pub value: String,
}

/// Case-insensitive substring test against an already-lowercased needle.
pub(crate) fn includes_lowered(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// A row passes the global filter when any visible column contains the text.
pub(crate) fn matches_global(
    prediction: &Prediction,
    visible: &[ColumnId],
    needle_lower: &str,
) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    visible
        .iter()
        .any(|column| includes_lowered(&column.raw_text(prediction), needle_lower))
}

/// A row passes when it satisfies every non-empty column filter.
pub(crate) fn matches_columns(prediction: &Prediction, filters: &[ColumnFilter]) -> bool {
    filters.iter().all(|filter| {
        let needle = filter.value.to_lowercase();
        needle.is_empty() || includes_lowered(&filter.column.raw_text(prediction), &needle)
    })
}
