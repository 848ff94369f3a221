use crate::state::MAX_ITEMS;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("The list is unavailable. Please check your connection")]
    CatalogUnavailable,

    #[error("Sorry, no more than {} titles please", MAX_ITEMS)]
    CapacityExceeded,

    #[error("Sorry, there are no more items to remove")]
    EmptyCatalog,

    #[error("You've selected an item that's not displayed")]
    EmptyDisplay,

    #[error("That item ({0}) is not available to be removed")]
    RecordNotFound(u32),

    #[error("The list is empty. Nothing to filter")]
    NothingToFilter,

    #[error("Two titles share the id {0}")]
    DuplicateId(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ShelfError {
    /// True for the conditions a transition rejects with, as opposed to
    /// failures reading seeds or configuration.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ShelfError::CatalogUnavailable
                | ShelfError::CapacityExceeded
                | ShelfError::EmptyCatalog
                | ShelfError::EmptyDisplay
                | ShelfError::RecordNotFound(_)
                | ShelfError::NothingToFilter
                | ShelfError::DuplicateId(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
