use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::filters::extract_filters;
use crate::state::CatalogState;

pub fn run(state: &CatalogState, id: u32) -> Result<CmdResult> {
    let (Some(catalog), Some(display_view)) =
        (state.catalog.as_deref(), state.display_view.as_deref())
    else {
        return Err(ShelfError::CatalogUnavailable);
    };
    if catalog.is_empty() {
        return Err(ShelfError::EmptyCatalog);
    }
    if display_view.is_empty() {
        return Err(ShelfError::EmptyDisplay);
    }

    let Some(position) = catalog.iter().position(|record| record.id == id) else {
        tracing::warn!(id, "remove requested for unknown title");
        return Err(ShelfError::RecordNotFound(id));
    };

    let mut next_catalog = catalog.to_vec();
    let removed = next_catalog.remove(position);

    // A title hidden by the active filter is simply not in the view.
    let was_displayed = display_view.iter().any(|record| record.id == id);
    let next_view: Vec<_> = display_view
        .iter()
        .filter(|record| record.id != id)
        .cloned()
        .collect();

    let available_filters = extract_filters(&next_catalog);

    tracing::debug!(id, titles = next_catalog.len(), "title removed");

    let next = CatalogState {
        catalog: Some(next_catalog),
        display_view: Some(next_view),
        available_filters,
        active_filter: state.active_filter,
        active_sort: state.active_sort,
    };

    let mut result = CmdResult::new(next);
    result.add_message(CmdMessage::success(format!(
        "Title removed ({}): {}",
        removed.id, removed.name
    )));
    if !was_displayed {
        result.add_message(CmdMessage::warning(format!(
            "{} was hidden by the \"{}\" filter",
            removed.name, state.active_filter
        )));
    }
    Ok(result.with_affected(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{assert_consistent, ids, loaded, record, two_titles};
    use crate::commands::{filter, sort};
    use crate::model::{Category, Filter, SortOption};

    #[test]
    fn removes_from_catalog_and_view() {
        let state = loaded(two_titles());
        let result = run(&state, 2).unwrap();
        let next = result.state;

        assert_eq!(ids(next.catalog()), vec![1]);
        assert_eq!(ids(next.display_view()), vec![1]);
        assert_eq!(next.available_filters(), &[Category::Drama]);
        assert_eq!(result.affected[0].name, "Alpha");
        assert_eq!(result.messages.len(), 1);
        assert_consistent(&next);
    }

    #[test]
    fn unknown_id_leaves_state_alone() {
        let state = loaded(two_titles());
        let before = state.clone();
        let err = run(&state, 999).unwrap_err();
        assert!(matches!(err, ShelfError::RecordNotFound(999)));
        assert_eq!(state, before);
    }

    #[test]
    fn unloaded_catalog_is_unavailable() {
        let err = run(&CatalogState::default(), 1).unwrap_err();
        assert!(matches!(err, ShelfError::CatalogUnavailable));
    }

    #[test]
    fn empty_catalog_has_nothing_to_remove() {
        let err = run(&loaded(vec![]), 1).unwrap_err();
        assert!(matches!(err, ShelfError::EmptyCatalog));
    }

    #[test]
    fn empty_view_is_rejected() {
        let state = loaded(two_titles());
        let state = filter::run(&state, Filter::Only(Category::Sports))
            .unwrap()
            .state;
        assert_eq!(state.display_view().map(<[_]>::len), Some(0));

        let err = run(&state, 1).unwrap_err();
        assert!(matches!(err, ShelfError::EmptyDisplay));
    }

    #[test]
    fn filtered_out_title_can_still_be_removed() {
        let state = loaded(vec![
            record(1, "Zeta", Category::Drama),
            record(2, "Alpha", Category::News),
            record(3, "Mid", Category::Drama),
        ]);
        let state = filter::run(&state, Filter::Only(Category::Drama))
            .unwrap()
            .state;

        let result = run(&state, 2).unwrap();
        assert_eq!(
            result.messages[1],
            CmdMessage::warning("Alpha was hidden by the \"drama\" filter")
        );
        let next = result.state;
        assert_eq!(ids(next.catalog()), vec![1, 3]);
        assert_eq!(ids(next.display_view()), vec![3, 1]);
        assert_eq!(next.active_filter(), Filter::Only(Category::Drama));
        assert!(!next.available_filters().contains(&Category::News));
        assert_consistent(&next);
    }

    #[test]
    fn keeps_filter_and_sort() {
        let state = loaded(vec![
            record(1, "Zeta", Category::Drama),
            record(2, "Alpha", Category::News),
            record(3, "Mid", Category::Comedy),
        ]);
        let state = sort::run(&state, SortOption::NAME_DESC).unwrap().state;
        let next = run(&state, 3).unwrap().state;
        assert_eq!(next.active_sort(), SortOption::NAME_DESC);
        assert_eq!(ids(next.display_view()), vec![1, 2]);
    }
}
