#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use clue::*;
pub use error::*;
pub use jeopardy_protocol::{CategoryId, CategorySummary, RawClue};
pub use render::*;
pub use session::*;
pub use setup::*;
pub use store::*;
pub use types::*;

mod clue;
mod error;
mod render;
mod session;
mod setup;
mod store;
mod types;

/// Columns on a standard board.
pub const NUM_CATEGORIES: usize = 6;

/// Rows on a standard board.
pub const NUM_QUESTIONS_PER_CATEGORY: usize = 5;

/// How many categories to request from the service before sampling.
pub const CATEGORY_POOL_SIZE: u16 = 50;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: Coord,
    pub clues_per_category: Coord,
    pub pool_size: u16,
}

impl GameConfig {
    pub const fn new_unchecked(categories: Coord, clues_per_category: Coord, pool_size: u16) -> Self {
        Self {
            categories,
            clues_per_category,
            pool_size,
        }
    }

    pub fn new(categories: Coord, clues_per_category: Coord, pool_size: u16) -> Self {
        let categories = categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        let pool_size = pool_size.max(categories.into());
        Self::new_unchecked(categories, clues_per_category, pool_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            NUM_CATEGORIES as Coord,
            NUM_QUESTIONS_PER_CATEGORY as Coord,
            CATEGORY_POOL_SIZE,
        )
    }
}
