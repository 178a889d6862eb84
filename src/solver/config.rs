//! Solver-facing settings

use super::placement::PlacementStrategy;
use super::ranker::{Difficulty, GuessRanker};

/// Settings shared by every game a command plays
#[derive(Debug, Clone, Copy, Default)]
pub struct GuesserConfig {
    pub difficulty: Difficulty,
    pub placement: PlacementStrategy,
    /// Fixed tie-break seed; `None` draws from the OS
    pub seed: Option<u64>,
}

impl GuesserConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            placement: PlacementStrategy::Disabled,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_placement(mut self, placement: PlacementStrategy) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Copy of this config whose seed is offset by `index`
    ///
    /// Gives each game of a batch its own reproducible stream.
    #[must_use]
    pub fn for_game(self, index: u64) -> Self {
        Self {
            seed: self.seed.map(|seed| seed.wrapping_add(index)),
            ..self
        }
    }

    /// Build a ranker from these settings
    #[must_use]
    pub fn ranker(&self) -> GuessRanker {
        let ranker = match self.seed {
            Some(seed) => GuessRanker::seeded(self.difficulty, seed),
            None => GuessRanker::new(self.difficulty),
        };
        ranker.with_placement(self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal_without_placement() {
        let config = GuesserConfig::default();
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert_eq!(config.placement, PlacementStrategy::Disabled);
        assert!(config.seed.is_none());
    }

    #[test]
    fn ranker_carries_settings() {
        let config = GuesserConfig::new(Difficulty::Hard)
            .with_placement(PlacementStrategy::Common)
            .with_seed(Some(4));
        let ranker = config.ranker();

        assert_eq!(ranker.difficulty(), Difficulty::Hard);
        assert_eq!(ranker.placement(), PlacementStrategy::Common);
    }

    #[test]
    fn per_game_seeds_differ() {
        let config = GuesserConfig::default().with_seed(Some(10));
        assert_eq!(config.for_game(0).seed, Some(10));
        assert_eq!(config.for_game(3).seed, Some(13));
        assert_eq!(GuesserConfig::default().for_game(3).seed, None);
    }
}
