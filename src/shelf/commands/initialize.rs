use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::filters::{apply_filter, extract_filters};
use crate::model::TitleRecord;
use crate::sorting::sort_records;
use crate::state::{CatalogState, MAX_ITEMS};
use std::collections::HashSet;

/// Loads `seed` as the catalog, replacing whatever was loaded before.
///
/// The active filter and sort carry over. On first boot those are "all" and
/// name-ascending, so the view is simply the seed sorted by name.
///
/// A seed above [`MAX_ITEMS`] titles or with a repeated id is rejected and
/// nothing is loaded.
pub fn run(state: &CatalogState, seed: Vec<TitleRecord>) -> Result<CmdResult> {
    if seed.len() > MAX_ITEMS {
        tracing::warn!(titles = seed.len(), "seed over capacity");
        return Err(ShelfError::CapacityExceeded);
    }
    let mut seen = HashSet::with_capacity(seed.len());
    if let Some(record) = seed.iter().find(|record| !seen.insert(record.id)) {
        return Err(ShelfError::DuplicateId(record.id));
    }

    let filtered = apply_filter(&seed, state.active_filter);
    let display_view = sort_records(&filtered, state.active_sort);
    let available_filters = extract_filters(&seed);

    tracing::debug!(
        titles = seed.len(),
        displayed = display_view.len(),
        filter = %state.active_filter,
        sort = %state.active_sort,
        "catalog initialized"
    );

    let count = seed.len();
    let next = CatalogState {
        catalog: Some(seed),
        display_view: Some(display_view),
        available_filters,
        active_filter: state.active_filter,
        active_sort: state.active_sort,
    };

    let mut result = CmdResult::new(next);
    result.add_message(CmdMessage::info(format!("Loaded {} titles", count)));
    Ok(result)
}
