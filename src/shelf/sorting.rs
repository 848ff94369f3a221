use crate::model::{SortDirection, SortField, SortOption, TitleRecord};
use std::cmp::Ordering;

/// Returns a copy of `records` ordered by `option`.
///
/// The sort is stable: records comparing equal on the selected field keep
/// their relative input order, in either direction.
pub fn sort_records(records: &[TitleRecord], option: SortOption) -> Vec<TitleRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a, b, option));
    sorted
}

fn compare(a: &TitleRecord, b: &TitleRecord, option: SortOption) -> Ordering {
    let ordering = match option.field {
        SortField::Name => a.name.as_str().cmp(b.name.as_str()),
        SortField::Category => a.category.as_str().cmp(b.category.as_str()),
    };
    match option.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
