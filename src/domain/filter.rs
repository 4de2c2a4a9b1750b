use crate::config::rank_column_for;
use crate::domain::models::{CanonicalGameRecord, PageRequest};

/// Post-fetch predicates derived from a page request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub min_players: Option<i64>,
    pub min_age: Option<i64>,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn from_request(request: &PageRequest) -> Self {
        Self {
            min_players: request.min_players,
            min_age: request.min_age,
            category: request.category.clone(),
        }
    }

    /// True when filters are likely to reject candidates, so the scan must reach deeper.
    /// A category without its own ranking column counts even though nothing filters on it.
    pub fn is_intensive(&self) -> bool {
        self.min_players.is_some() || self.min_age.is_some() || self.has_unranked_category()
    }

    fn has_unranked_category(&self) -> bool {
        self.category
            .as_deref()
            .is_some_and(|label| rank_column_for(label).is_none())
    }

    // Categories are chosen through the ranking column. Unranked labels are not
    // filtered here: upstream category names do not match the label vocabulary.
    pub fn matches(&self, game: &CanonicalGameRecord) -> bool {
        self.matches_player_count(game) && self.matches_age(game)
    }

    /// A group of `min_players` people can play the game
    fn matches_player_count(&self, game: &CanonicalGameRecord) -> bool {
        let Some(players) = self.min_players else {
            return true;
        };
        match (game.min_players, game.max_players) {
            (Some(min), Some(max)) => min <= players && players <= max,
            _ => false,
        }
    }

    /// Games whose own minimum age is at least the requested age
    fn matches_age(&self, game: &CanonicalGameRecord) -> bool {
        let Some(age) = self.min_age else {
            return true;
        };
        game.min_age.is_some_and(|min_age| min_age >= age)
    }

    pub fn apply(&self, games: Vec<CanonicalGameRecord>) -> Vec<CanonicalGameRecord> {
        games.into_iter().filter(|game| self.matches(game)).collect()
    }
}
