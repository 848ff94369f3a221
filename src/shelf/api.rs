//! # API Facade
//!
//! The API layer is a **thin facade** over the transitions in `commands/`. It
//! owns the current [`CatalogState`] and the id source, and is the only way a
//! client can move the catalog from one state to the next.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** each intent to its transition
//! - **Normalizes inputs** (filter and sort strings → typed values)
//! - **Swaps in** the state a transition returns; a rejected intent leaves the
//!   held state as it was
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O beyond reading seed files, and never formats output.
//!
//! ## Generic Over IdSource
//!
//! `ShelfApi<I: IdSource>` is generic over where new ids come from:
//! - Production: `ShelfApi<RandomIds>`
//! - Testing: `ShelfApi<SequenceIds>`

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::ids::IdSource;
use crate::model::{Filter, NewTitle, SortOption, TitleRecord};
use crate::seed;
use crate::state::CatalogState;
use std::path::Path;

/// The main API facade for shelf operations.
///
/// All UI clients should interact through this API.
pub struct ShelfApi<I: IdSource> {
    state: CatalogState,
    ids: I,
}

impl<I: IdSource> ShelfApi<I> {
    pub fn new(ids: I) -> Self {
        Self {
            state: CatalogState::default(),
            ids,
        }
    }

    /// Starts unloaded, with the filter and sort the first load will use.
    pub fn with_defaults(ids: I, filter: Filter, sort: SortOption) -> Self {
        Self {
            state: CatalogState::with_defaults(filter, sort),
            ids,
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn initialize(&mut self, seed: Vec<TitleRecord>) -> Result<commands::CmdResult> {
        let result = commands::initialize::run(&self.state, seed);
        self.apply(result)
    }

    /// Reads a seed document and initializes from it. A document that fails
    /// to load leaves the state untouched.
    pub fn load_seed(&mut self, path: &Path) -> Result<commands::CmdResult> {
        let records = seed::load_file(path, &mut self.ids)?;
        self.initialize(records)
    }

    pub fn add_title(&mut self, title: NewTitle) -> Result<commands::CmdResult> {
        let result = commands::add::run(&self.state, &mut self.ids, title);
        self.apply(result)
    }

    pub fn remove_title(&mut self, id: u32) -> Result<commands::CmdResult> {
        let result = commands::remove::run(&self.state, id);
        self.apply(result)
    }

    pub fn set_filter(&mut self, filter: Filter) -> Result<commands::CmdResult> {
        let result = commands::filter::run(&self.state, filter);
        self.apply(result)
    }

    pub fn set_sort(&mut self, option: SortOption) -> Result<commands::CmdResult> {
        let result = commands::sort::run(&self.state, option);
        self.apply(result)
    }

    pub fn featured(&self) -> Vec<&TitleRecord> {
        self.state.featured()
    }

    pub fn find(&self, id: u32) -> Option<&TitleRecord> {
        self.state.find(id)
    }

    fn apply(
        &mut self,
        result: Result<commands::CmdResult>,
    ) -> Result<commands::CmdResult> {
        match result {
            Ok(result) => {
                self.state = result.state.clone();
                Ok(result)
            }
            Err(e) => {
                if e.is_rejection() {
                    tracing::warn!(error = %e, "intent rejected");
                }
                Err(e)
            }
        }
    }
}

pub fn parse_filter(input: &str) -> Result<Filter> {
    input.parse().map_err(ShelfError::Api)
}

pub fn parse_sort(input: &str) -> Result<SortOption> {
    input.parse().map_err(ShelfError::Api)
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
