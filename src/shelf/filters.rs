use crate::model::{Category, Filter, TitleRecord};
use std::collections::BTreeSet;

/// Returns the distinct categories present in `records`, in ascending order of
/// their canonical names.
pub fn extract_filters(records: &[TitleRecord]) -> Vec<Category> {
    records
        .iter()
        .map(|record| record.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Copies the records matching `filter`, keeping their relative order.
pub fn apply_filter(records: &[TitleRecord], filter: Filter) -> Vec<TitleRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}
