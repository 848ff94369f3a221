use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::filters::apply_filter;
use crate::model::Filter;
use crate::sorting::sort_records;
use crate::state::CatalogState;

/// Rebuilds the view from the full catalog, keeping only titles that match
/// `filter`, ordered by the active sort.
pub fn run(state: &CatalogState, filter: Filter) -> Result<CmdResult> {
    let catalog = match state.catalog.as_deref() {
        None => return Err(ShelfError::CatalogUnavailable),
        Some([]) => return Err(ShelfError::NothingToFilter),
        Some(catalog) => catalog,
    };

    let display_view = sort_records(&apply_filter(catalog, filter), state.active_sort);

    tracing::debug!(%filter, displayed = display_view.len(), "filter applied");

    let mut next = state.clone();
    next.display_view = Some(display_view);
    next.active_filter = filter;

    let mut result = CmdResult::new(next);
    result.add_message(CmdMessage::info(format!("Showing: {}", filter)));
    Ok(result)
}
