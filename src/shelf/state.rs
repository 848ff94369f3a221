//! # Catalog State
//!
//! [`CatalogState`] is the whole of what the engine knows: the authoritative
//! catalog, the derived display view, the filters a user can pick from and the
//! active filter and sort.
//!
//! A state is a plain value. Transitions in [`crate::commands`] borrow the
//! prior state and build a new one; nothing outside that module can change the
//! fields, so readers always get a consistent snapshot.
//!
//! `catalog` and `display_view` are `None` until the first `initialize`. That
//! is a different thing from an empty catalog, which is loaded but holds no
//! titles.

use crate::model::{Category, Filter, SortOption, TitleRecord};
use serde::Serialize;

/// Upper bound on the number of titles in the catalog.
pub const MAX_ITEMS: usize = 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogState {
    pub(crate) catalog: Option<Vec<TitleRecord>>,
    pub(crate) display_view: Option<Vec<TitleRecord>>,
    pub(crate) available_filters: Vec<Category>,
    pub(crate) active_filter: Filter,
    pub(crate) active_sort: SortOption,
}

impl CatalogState {
    /// An unloaded state that will apply `filter` and `sort` once titles
    /// arrive.
    pub fn with_defaults(filter: Filter, sort: SortOption) -> Self {
        Self {
            active_filter: filter,
            active_sort: sort,
            ..Self::default()
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&[TitleRecord]> {
        self.catalog.as_deref()
    }

    pub fn display_view(&self) -> Option<&[TitleRecord]> {
        self.display_view.as_deref()
    }

    pub fn available_filters(&self) -> &[Category] {
        &self.available_filters
    }

    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    pub fn active_sort(&self) -> SortOption {
        self.active_sort
    }

    /// Looks a title up in the catalog, whether or not it is displayed.
    pub fn find(&self, id: u32) -> Option<&TitleRecord> {
        self.catalog()?.iter().find(|record| record.id == id)
    }

    /// Featured titles in catalog order.
    pub fn featured(&self) -> Vec<&TitleRecord> {
        self.catalog()
            .unwrap_or_default()
            .iter()
            .filter(|record| record.featured)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, featured: bool) -> TitleRecord {
        TitleRecord {
            id,
            name: format!("Title {}", id),
            category: Category::Drama,
            image: None,
            featured,
        }
    }

    #[test]
    fn default_state_is_unloaded() {
        let state = CatalogState::default();
        assert!(!state.is_loaded());
        assert_eq!(state.catalog(), None);
        assert_eq!(state.display_view(), None);
        assert_eq!(state.active_filter(), Filter::All);
        assert_eq!(state.active_sort(), SortOption::NAME_ASC);
        assert!(state.featured().is_empty());
    }

    #[test]
    fn empty_catalog_is_loaded() {
        let state = CatalogState {
            catalog: Some(vec![]),
            display_view: Some(vec![]),
            ..CatalogState::default()
        };
        assert!(state.is_loaded());
    }

    #[test]
    fn find_and_featured_read_the_catalog() {
        let state = CatalogState {
            catalog: Some(vec![record(1, false), record(2, true), record(3, true)]),
            display_view: Some(vec![]),
            ..CatalogState::default()
        };
        assert_eq!(state.find(2).map(|r| r.id), Some(2));
        assert!(state.find(9).is_none());
        let featured: Vec<u32> = state.featured().iter().map(|r| r.id).collect();
        assert_eq!(featured, vec![2, 3]);
    }
}
