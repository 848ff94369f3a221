//! # Id Generation
//!
//! Titles added at runtime get an integer id drawn at random from
//! `1..=MAX_ID`. The range is a hundred times the catalog capacity, which keeps
//! collisions rare without keeping a counter around.
//!
//! Sources are **not** collision-free. [`unique_id`] re-rolls until it finds an
//! id that no record in the catalog is using, so callers go through it rather
//! than calling [`IdSource::next_id`] directly.

use crate::model::TitleRecord;
use crate::state::MAX_ITEMS;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MAX_ID: u32 = (MAX_ITEMS as u32) * 100;

/// Produces candidate ids in `1..=MAX_ID`.
pub trait IdSource {
    fn next_id(&mut self) -> u32;
}

/// The production id source, backed by a seedable PRNG.
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible source, handy for scripted sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> u32 {
        self.rng.gen_range(1..=MAX_ID)
    }
}

/// Draws from `ids` until it returns one not used by any record in `taken`.
pub fn unique_id<I: IdSource + ?Sized>(ids: &mut I, taken: &[TitleRecord]) -> u32 {
    unique_id_by(ids, |candidate| {
        taken.iter().any(|record| record.id == candidate)
    })
}

/// Draws from `ids` until `is_taken` rejects a candidate.
pub fn unique_id_by<I, F>(ids: &mut I, is_taken: F) -> u32
where
    I: IdSource + ?Sized,
    F: Fn(u32) -> bool,
{
    loop {
        let candidate = ids.next_id();
        if !is_taken(candidate) {
            return candidate;
        }
        tracing::trace!(candidate, "id collision, re-rolling");
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::IdSource;
    use std::collections::VecDeque;

    /// Hands out a fixed list of ids, then counts upward from the last one.
    pub struct SequenceIds {
        queued: VecDeque<u32>,
        next: u32,
    }

    impl SequenceIds {
        pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
            let queued: VecDeque<u32> = ids.into_iter().collect();
            let next = queued.iter().copied().max().unwrap_or(0) + 1;
            Self { queued, next }
        }

        /// Ids 1, 2, 3, ...
        pub fn counting() -> Self {
            Self::new([])
        }
    }

    impl IdSource for SequenceIds {
        fn next_id(&mut self) -> u32 {
            if let Some(id) = self.queued.pop_front() {
                return id;
            }
            let id = self.next;
            self.next += 1;
            id
        }
    }
}
