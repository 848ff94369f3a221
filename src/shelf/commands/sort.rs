use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SortOption;
use crate::sorting::sort_records;
use crate::state::CatalogState;

/// Re-orders the current view. Only what is displayed is sorted; the catalog
/// and the active filter are untouched.
///
/// Nothing changes when there is nothing to display, not even the active
/// sort.
pub fn run(state: &CatalogState, option: SortOption) -> Result<CmdResult> {
    let view = match state.display_view.as_deref() {
        Some(view) if !view.is_empty() => view,
        _ => {
            tracing::debug!(sort = %option, "nothing displayed, sort ignored");
            return Ok(CmdResult::new(state.clone()));
        }
    };

    let display_view = sort_records(view, option);

    tracing::debug!(sort = %option, displayed = display_view.len(), "view sorted");

    let mut next = state.clone();
    next.display_view = Some(display_view);
    next.active_sort = option;

    let mut result = CmdResult::new(next);
    result.add_message(CmdMessage::info(format!("Sorted by {}", option)));
    Ok(result)
}
