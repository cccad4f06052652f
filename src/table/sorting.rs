//! Row ordering for the predictions table.

use std::cmp::Ordering;

use super::columns::ColumnId;
use crate::prediction::Prediction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: ColumnId,
    pub direction: SortDirection,
}

/// Header click cycle: unsorted, ascending, descending, unsorted.
pub fn next_direction(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Asc),
        Some(SortDirection::Asc) => Some(SortDirection::Desc),
        Some(SortDirection::Desc) => None,
    }
}

/// Stable-sort `indices` into `data` by `specs`, first key first.
pub(crate) fn sort_indices(indices: &mut [usize], data: &[Prediction], specs: &[SortSpec]) {
    if specs.is_empty() {
        return;
    }
    indices.sort_by(|&a, &b| {
        specs
            .iter()
            .map(|spec| {
                let ordering = compare_column(&data[a], &data[b], spec.column);
                match spec.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
}

fn compare_column(a: &Prediction, b: &Prediction, column: ColumnId) -> Ordering {
    match column {
        ColumnId::Id => compare_alphanumeric(&a.id, &b.id),
        ColumnId::Imagen => Ordering::Equal,
        ColumnId::Score(class) => a.scores.get(class).total_cmp(&b.scores.get(class)),
    }
}

/// Case-insensitive natural ordering: digit runs compare by numeric value.
pub fn compare_alphanumeric(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut left = Chunks::new(&a);
    let mut right = Chunks::new(&b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = compare_chunk(x, y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn compare_chunk(a: &str, b: &str) -> Ordering {
    let a_digits = a.starts_with(|c: char| c.is_ascii_digit());
    let b_digits = b.starts_with(|c: char| c.is_ascii_digit());
    match (a_digits, b_digits) {
        (true, true) => {
            let a_trim = a.trim_start_matches('0');
            let b_trim = b.trim_start_matches('0');
            a_trim
                .len()
                .cmp(&b_trim.len())
                .then_with(|| a_trim.cmp(b_trim))
                .then_with(|| a.len().cmp(&b.len()))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Splits a string into alternating digit / non-digit runs.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(index, _)| index)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_click_cycles_through_three_states() {
        let mut state = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = next_direction(state);
            seen.push(state);
        }
        assert_eq!(
            seen,
            [
                Some(SortDirection::Asc),
                Some(SortDirection::Desc),
                None,
                Some(SortDirection::Asc)
            ]
        );
    }

    #[test]
    fn natural_order_handles_wider_ids() {
        assert_eq!(compare_alphanumeric("PRED-999", "PRED-1000"), Ordering::Less);
        assert_eq!(compare_alphanumeric("PRED-010", "PRED-002"), Ordering::Greater);
        assert_eq!(compare_alphanumeric("pred-001", "PRED-001"), Ordering::Equal);
        assert_eq!(compare_alphanumeric("PRED", "PRED-001"), Ordering::Less);
    }

    #[test]
    fn chunks_alternate_between_digits_and_text() {
        let chunks: Vec<&str> = Chunks::new("pred-0012ab3").collect();
        assert_eq!(chunks, ["pred-", "0012", "ab", "3"]);
    }
}
