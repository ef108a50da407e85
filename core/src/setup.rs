use alloc::vec::Vec;
use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where a board setup currently is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupState {
    #[default]
    Init,
    FetchingPool,
    Sampling,
    FetchingClues { fetched: Coord, total: Coord },
    Rendering,
    Ready,
    Failed,
}

impl SetupState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }

    pub const fn is_loading(self) -> bool {
        !self.is_finished()
    }
}

impl fmt::Display for SetupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SetupState::*;
        match self {
            Init => f.write_str("Starting"),
            FetchingPool => f.write_str("Fetching categories"),
            Sampling => f.write_str("Picking categories"),
            FetchingClues { fetched, total } => {
                write!(f, "Fetching clues {}/{}", fetched + 1, total)
            }
            Rendering => f.write_str("Building board"),
            Ready => f.write_str("Ready"),
            Failed => f.write_str("Failed"),
        }
    }
}

/// Remote trivia service.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// Category pool, at most `count` summaries.
    async fn categories(&self, count: u16) -> Result<Vec<CategorySummary>>;

    /// Every clue the service knows for one category.
    async fn clues(&self, category: CategoryId) -> Result<Vec<RawClue>>;
}

/// Runs pool fetch, sampling and per-category clue fetches, one request at a
/// time, and hands back a board only once it is complete.
#[derive(Debug)]
pub struct GameSetup<'a, S> {
    source: &'a S,
    config: GameConfig,
    state: SetupState,
}

impl<'a, S: TriviaSource> GameSetup<'a, S> {
    pub fn new(source: &'a S, config: GameConfig) -> Self {
        Self {
            source,
            config,
            state: SetupState::Init,
        }
    }

    pub fn state(&self) -> SetupState {
        self.state
    }

    /// `observer` is told about every state change, `Ready` or `Failed` last.
    pub async fn run<R, F>(&mut self, rng: &mut R, mut observer: F) -> Result<CategoryStore>
    where
        R: Rng + ?Sized,
        F: FnMut(SetupState),
    {
        let result = self.populate(rng, &mut observer).await;
        match &result {
            Ok(_) => self.transition(SetupState::Ready, &mut observer),
            Err(err) => {
                log::warn!("board setup failed: {}", err);
                self.transition(SetupState::Failed, &mut observer);
            }
        }
        result
    }

    fn transition<F: FnMut(SetupState)>(&mut self, next: SetupState, observer: &mut F) {
        log::debug!("setup: {:?} -> {:?}", self.state, next);
        self.state = next;
        observer(next);
    }

    async fn populate<R, F>(&mut self, rng: &mut R, observer: &mut F) -> Result<CategoryStore>
    where
        R: Rng + ?Sized,
        F: FnMut(SetupState),
    {
        let GameConfig {
            categories,
            clues_per_category,
            pool_size,
        } = self.config;

        self.transition(SetupState::FetchingPool, observer);
        let pool = self.source.categories(pool_size).await?;

        self.transition(SetupState::Sampling, observer);
        let eligible = eligible_category_ids(&pool, clues_per_category.into());
        log::debug!("{} of {} categories are eligible", eligible.len(), pool.len());
        let ids = select_category_ids(&eligible, categories.into(), rng)?;

        let mut board = CategoryStore::new(self.config);
        for (fetched, id) in (0..categories).zip(ids) {
            self.transition(
                SetupState::FetchingClues {
                    fetched,
                    total: categories,
                },
                observer,
            );
            let raw_clues = self.source.clues(id).await?;

            let title = raw_clues
                .iter()
                .find_map(RawClue::category_title)
                .or_else(|| {
                    pool.iter()
                        .find(|summary| summary.id == id)
                        .map(|summary| summary.title.as_str())
                })
                .unwrap_or_default();
            if title.trim().is_empty() {
                log::warn!("category {} has no title, its header will be blank", id);
            }
            let category = build_category(&raw_clues, title, clues_per_category.into(), rng)?;
            board.append(category)?;
        }

        self.transition(SetupState::Rendering, observer);
        Ok(board)
    }
}
