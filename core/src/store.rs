use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }
}

/// Pool ids whose category has enough clues to fill a column, duplicates dropped.
pub fn eligible_category_ids(pool: &[CategorySummary], clues_per_category: usize) -> Vec<CategoryId> {
    let mut seen = BTreeSet::new();
    pool.iter()
        .filter(|summary| summary.clues_count as usize >= clues_per_category)
        .map(|summary| summary.id)
        .filter(|&id| seen.insert(id))
        .collect()
}

/// Picks `n` ids uniformly at random without replacement.
///
/// A pool smaller than `n` is an error rather than a shorter selection, the
/// board would otherwise render with missing columns.
pub fn select_category_ids<R: Rng + ?Sized>(
    pool: &[CategoryId],
    n: usize,
    rng: &mut R,
) -> Result<Vec<CategoryId>> {
    if pool.len() < n {
        return Err(GameError::InsufficientCategories {
            available: pool.len(),
            required: n,
        });
    }

    let ids: Vec<CategoryId> = index::sample(rng, pool.len(), n)
        .into_iter()
        .map(|i| pool[i])
        .collect();
    log::trace!("selected categories {:?} out of {}", ids, pool.len());
    Ok(ids)
}

/// Samples `k` playable clues out of `raw_clues`, all starting hidden.
pub fn build_category<R: Rng + ?Sized>(
    raw_clues: &[RawClue],
    title: &str,
    k: usize,
    rng: &mut R,
) -> Result<Category> {
    let playable: Vec<&RawClue> = raw_clues.iter().filter(|raw| raw.is_playable()).collect();
    if playable.len() != raw_clues.len() {
        log::debug!(
            "{:?}: dropped {} blank clues",
            title,
            raw_clues.len() - playable.len()
        );
    }

    if playable.len() < k {
        return Err(GameError::InsufficientClues {
            category: title.into(),
            available: playable.len(),
            required: k,
        });
    }

    let clues = index::sample(rng, playable.len(), k)
        .into_iter()
        .map(|i| Clue::new(playable[i].question.as_str(), playable[i].answer.as_str()))
        .collect();
    Ok(Category::new(title, clues))
}

/// The board: categories in arrival order, filled once during setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStore {
    config: GameConfig,
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            categories: Vec::with_capacity(config.categories.into()),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.categories.len() == usize::from(self.config.categories)
    }

    pub fn append(&mut self, category: Category) -> Result<()> {
        if self.is_complete() {
            return Err(GameError::BoardFull);
        }
        let expected = usize::from(self.config.clues_per_category);
        if category.len() != expected {
            return Err(GameError::CategoryShape {
                expected,
                actual: category.len(),
            });
        }
        self.categories.push(category);
        Ok(())
    }

    pub fn clue(&self, coord: CellCoord) -> &Clue {
        &self[coord]
    }

    /// Out of bounds coordinates panic.
    pub fn reveal(&mut self, coord: CellCoord) -> RevealOutcome {
        self[coord].reveal()
    }
}

impl Index<CellCoord> for CategoryStore {
    type Output = Clue;

    fn index(&self, coord: CellCoord) -> &Self::Output {
        &self.categories[usize::from(coord.category)].clues[usize::from(coord.clue)]
    }
}

impl IndexMut<CellCoord> for CategoryStore {
    fn index_mut(&mut self, coord: CellCoord) -> &mut Self::Output {
        &mut self.categories[usize::from(coord.category)].clues[usize::from(coord.clue)]
    }
}
