//! # Transitions
//!
//! Each submodule is one transition over [`CatalogState`]: it borrows the
//! prior state, applies one intent and returns the next state inside a
//! [`CmdResult`]. A rejected intent returns an error and builds nothing, so the
//! caller's state is left exactly as it was.
//!
//! | Transition   | Valid from        | Resets filter/sort |
//! |--------------|-------------------|--------------------|
//! | `initialize` | Unloaded, Loaded  | no                 |
//! | `add`        | Loaded            | yes                |
//! | `remove`     | Loaded, non-empty | no                 |
//! | `filter`     | Loaded, non-empty | filter only        |
//! | `sort`       | any (no-op if nothing is displayed) | sort only |
//!
//! Apart from the id drawn in `add`, transitions are deterministic.

use crate::model::TitleRecord;
use crate::state::CatalogState;

pub mod add;
pub mod filter;
pub mod initialize;
pub mod remove;
pub mod sort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// The outcome of an accepted transition.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// The state to replace the prior one with.
    pub state: CatalogState,
    /// Titles created or removed by the transition.
    pub affected: Vec<TitleRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(state: CatalogState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<TitleRecord>) -> Self {
        self.affected = records;
        self
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Category, TitleRecord};
    use crate::state::CatalogState;

    pub fn record(id: u32, name: &str, category: Category) -> TitleRecord {
        TitleRecord {
            id,
            name: name.to_string(),
            category,
            image: None,
            featured: false,
        }
    }

    /// `[Zeta(1, drama), Alpha(2, news)]`
    pub fn two_titles() -> Vec<TitleRecord> {
        vec![
            record(1, "Zeta", Category::Drama),
            record(2, "Alpha", Category::News),
        ]
    }

    pub fn loaded(seed: Vec<TitleRecord>) -> CatalogState {
        super::initialize::run(&CatalogState::default(), seed)
            .expect("fixture seed is valid")
            .state
    }

    pub fn ids(records: Option<&[TitleRecord]>) -> Vec<u32> {
        records
            .unwrap_or_default()
            .iter()
            .map(|record| record.id)
            .collect()
    }

    /// Checks the invariants every state must satisfy.
    pub fn assert_consistent(state: &CatalogState) {
        let (Some(catalog), Some(view)) = (state.catalog(), state.display_view()) else {
            assert!(state.catalog().is_none() && state.display_view().is_none());
            return;
        };
        assert!(catalog.len() <= crate::state::MAX_ITEMS);
        for record in view {
            assert!(
                catalog.iter().any(|r| r.id == record.id),
                "displayed id {} missing from catalog",
                record.id
            );
        }
        let mut seen = std::collections::HashSet::new();
        for record in catalog {
            assert!(seen.insert(record.id), "duplicate id {}", record.id);
        }
        assert_eq!(
            state.available_filters(),
            crate::filters::extract_filters(catalog).as_slice()
        );
    }
}
