use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::filters::extract_filters;
use crate::ids::{unique_id, IdSource};
use crate::model::{Filter, NewTitle, SortOption, TitleRecord};
use crate::sorting::sort_records;
use crate::state::{CatalogState, MAX_ITEMS};

/// Adds a title to the front of the catalog.
///
/// The new title may not match the active filter, so the filter is cleared and
/// the view re-sorted by name before the title is pinned on top of it. It
/// stays first in the view until the next filter or sort, regardless of its
/// name.
pub fn run<I: IdSource + ?Sized>(
    state: &CatalogState,
    ids: &mut I,
    title: NewTitle,
) -> Result<CmdResult> {
    let Some(catalog) = state.catalog.as_deref() else {
        return Err(ShelfError::CatalogUnavailable);
    };
    if catalog.len() >= MAX_ITEMS {
        tracing::warn!(titles = catalog.len(), "catalog is full");
        return Err(ShelfError::CapacityExceeded);
    }

    let record = TitleRecord::new(unique_id(ids, catalog), title);

    let mut display_view = Vec::with_capacity(catalog.len() + 1);
    display_view.push(record.clone());
    display_view.extend(sort_records(catalog, SortOption::NAME_ASC));

    let mut next_catalog = Vec::with_capacity(catalog.len() + 1);
    next_catalog.push(record.clone());
    next_catalog.extend_from_slice(catalog);

    let available_filters = extract_filters(&next_catalog);

    tracing::debug!(
        id = record.id,
        category = %record.category,
        titles = next_catalog.len(),
        "title added"
    );

    let next = CatalogState {
        catalog: Some(next_catalog),
        display_view: Some(display_view),
        available_filters,
        active_filter: Filter::All,
        active_sort: SortOption::NAME_ASC,
    };

    let mut result = CmdResult::new(next);
    result.add_message(CmdMessage::success(format!(
        "Title added ({}): {}",
        record.id, record.name
    )));
    Ok(result.with_affected(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::filter;
    use crate::commands::fixtures::{assert_consistent, ids, loaded, record, two_titles};
    use crate::ids::fixtures::SequenceIds;
    use crate::ids::RandomIds;
    use crate::model::Category;
    use proptest::prelude::*;

    #[test]
    fn rejects_when_unloaded() {
        let mut ids = SequenceIds::counting();
        let err = run(
            &CatalogState::default(),
            &mut ids,
            NewTitle::new("Beta", Category::Comedy),
        )
        .unwrap_err();
        assert!(matches!(err, ShelfError::CatalogUnavailable));
    }

    #[test]
    fn new_title_goes_first_and_resets_filter() {
        let state = loaded(two_titles());
        let state = filter::run(&state, Filter::Only(Category::Drama))
            .unwrap()
            .state;

        let mut id_source = SequenceIds::new([50]);
        let result = run(
            &state,
            &mut id_source,
            NewTitle::new("Beta", Category::Comedy),
        )
        .unwrap();
        let next = result.state;

        assert_eq!(next.active_filter(), Filter::All);
        assert_eq!(next.active_sort(), SortOption::NAME_ASC);
        let view = next.display_view().unwrap();
        assert_eq!(view[0].name, "Beta");
        assert_eq!(ids(next.display_view()), vec![50, 2, 1]);
        assert_eq!(ids(next.catalog()), vec![50, 1, 2]);
        assert!(next.available_filters().contains(&Category::Comedy));
        assert_eq!(result.affected.len(), 1);
        assert_consistent(&next);
    }

    #[test]
    fn new_title_is_not_sorted_into_place() {
        let state = loaded(two_titles());
        let mut id_source = SequenceIds::new([3]);
        let next = run(
            &state,
            &mut id_source,
            NewTitle::new("Zzz", Category::Drama),
        )
        .unwrap()
        .state;
        assert_eq!(ids(next.display_view()), vec![3, 2, 1]);
    }

    #[test]
    fn colliding_ids_are_rerolled() {
        let state = loaded(two_titles());
        let mut id_source = SequenceIds::new([1, 2, 1, 77]);
        let next = run(&state, &mut id_source, NewTitle::new("New", Category::News))
            .unwrap()
            .state;
        assert_eq!(next.catalog().unwrap()[0].id, 77);
        assert_consistent(&next);
    }

    #[test]
    fn featured_and_image_are_kept() {
        let state = loaded(vec![]);
        let mut id_source = SequenceIds::counting();
        let title = NewTitle::new("Shiny", Category::Special)
            .featured(true)
            .with_image(Some("img/shiny.png".into()));
        let next = run(&state, &mut id_source, title).unwrap().state;
        let added = next.find(1).unwrap();
        assert!(added.featured);
        assert_eq!(added.image.as_deref(), Some("img/shiny.png"));
        assert_eq!(next.featured().len(), 1);
    }

    #[test]
    fn rejects_past_capacity_without_touching_state() {
        let seed: Vec<_> = (1..=MAX_ITEMS as u32)
            .map(|id| record(id, &format!("Title {}", id), Category::Other))
            .collect();
        let state = loaded(seed);
        let before = state.clone();

        let mut id_source = SequenceIds::counting();
        let err = run(&state, &mut id_source, NewTitle::new("One more", Category::Drama))
            .unwrap_err();

        assert!(matches!(err, ShelfError::CapacityExceeded));
        assert_eq!(state, before);
        assert_eq!(state.catalog().unwrap().len(), MAX_ITEMS);
    }

    #[test]
    fn capacity_is_reached_through_adds() {
        let mut state = loaded(vec![]);
        let mut id_source = RandomIds::seeded(1);
        for i in 0..MAX_ITEMS {
            state = run(
                &state,
                &mut id_source,
                NewTitle::new(format!("Title {}", i), Category::Drama),
            )
            .unwrap()
            .state;
        }
        assert_eq!(state.catalog().unwrap().len(), MAX_ITEMS);
        assert_consistent(&state);

        let err = run(&state, &mut id_source, NewTitle::new("Late", Category::Drama))
            .unwrap_err();
        assert!(matches!(err, ShelfError::CapacityExceeded));
        assert_eq!(state.catalog().unwrap().len(), MAX_ITEMS);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn ids_stay_unique_across_adds(seed in any::<u64>(), adds in 1usize..200) {
            let mut state = loaded(two_titles());
            let mut id_source = RandomIds::seeded(seed);
            for i in 0..adds {
                state = run(
                    &state,
                    &mut id_source,
                    NewTitle::new(format!("T{}", i), Category::Comedy),
                )
                .unwrap()
                .state;
            }
            let catalog = state.catalog().unwrap();
            let unique: std::collections::HashSet<u32> =
                catalog.iter().map(|r| r.id).collect();
            prop_assert_eq!(unique.len(), catalog.len());
            prop_assert_eq!(catalog.len(), adds + 2);
        }
    }
}
