//! Game setup and history services.

use time::OffsetDateTime;
use tracing::info;

use crate::domain::lifecycle::new_game;
use crate::domain::rules::{
    max_cards_for_total_rounds, player_count_valid, RoundPattern, CUSTOM_MAX_CARDS,
    CUSTOM_TOTAL_ROUNDS, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::domain::scoring::{ScoringRule, ScoringRuleConfig, ScoringRuleType};
use crate::domain::state::{Game, Player};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::games::{find_game, GameStore};
use crate::repos::ids::IdGenerator;

/// How the deal size is chosen at setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxCardsSetting {
    /// Player-count default.
    #[default]
    Default,
    /// Explicit maximum cards per player.
    Cards(u8),
    /// Desired total rounds, converted to a maximum of `(rounds - 1) / 2`.
    Rounds(u16),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSetup {
    pub player_names: Vec<String>,
    pub scoring: ScoringRuleType,
    /// Used when `scoring` is `Custom`; standard rules apply when absent.
    pub custom_scoring: Option<ScoringRuleConfig>,
    pub max_cards: MaxCardsSetting,
    pub round_pattern: RoundPattern,
}

impl GameSetup {
    pub fn new<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            player_names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    fn scoring_rule(&self) -> ScoringRule {
        match (self.scoring, &self.custom_scoring) {
            (ScoringRuleType::Custom, Some(config)) => ScoringRule::custom(config.clone()),
            (ScoringRuleType::Custom, None) => ScoringRule::predefined(ScoringRuleType::Standard),
            (rule_type, _) => ScoringRule::predefined(rule_type),
        }
    }

    fn custom_max_cards(&self) -> Result<Option<u8>, DomainError> {
        match self.max_cards {
            MaxCardsSetting::Default => Ok(None),
            MaxCardsSetting::Cards(cards) => {
                if !CUSTOM_MAX_CARDS.contains(&cards) {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidMaxCards,
                        format!(
                            "Max cards must be between {} and {}",
                            CUSTOM_MAX_CARDS.start(),
                            CUSTOM_MAX_CARDS.end()
                        ),
                    ));
                }
                Ok(Some(cards))
            }
            MaxCardsSetting::Rounds(rounds) => {
                if !CUSTOM_TOTAL_ROUNDS.contains(&rounds) {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidRoundCount,
                        format!(
                            "Total rounds must be between {} and {}",
                            CUSTOM_TOTAL_ROUNDS.start(),
                            CUSTOM_TOTAL_ROUNDS.end()
                        ),
                    ));
                }
                Ok(Some(max_cards_for_total_rounds(rounds)))
            }
        }
    }

    /// Trimmed player names, checked for count and emptiness.
    fn validated_names(&self) -> Result<Vec<String>, DomainError> {
        if !player_count_valid(self.player_names.len()) {
            return Err(DomainError::validation(
                ValidationKind::PlayerCount,
                format!("Games need between {MIN_PLAYERS} and {MAX_PLAYERS} players"),
            ));
        }
        let names: Vec<String> = self
            .player_names
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
        if names.iter().any(String::is_empty) {
            return Err(DomainError::validation(
                ValidationKind::EmptyPlayerName,
                "All players must have names",
            ));
        }
        Ok(names)
    }
}

pub struct GamesService<S, I> {
    store: S,
    ids: I,
}

impl<S: GameStore, I: IdGenerator> GamesService<S, I> {
    pub fn new(store: S, ids: I) -> Self {
        Self { store, ids }
    }

    /// Validate the setup, create the game and save it as the current game.
    pub fn create_game(&self, setup: &GameSetup) -> Result<Game, DomainError> {
        let names = setup.validated_names()?;
        let custom_max_cards = setup.custom_max_cards()?;

        let players = names
            .into_iter()
            .map(|name| Player {
                id: self.ids.new_id(),
                name,
            })
            .collect();

        let game = new_game(
            self.ids.new_id(),
            players,
            setup.scoring_rule(),
            custom_max_cards,
            setup.round_pattern,
            OffsetDateTime::now_utc(),
        );

        self.store.save_current_game(&game);
        info!(
            game_id = %game.id,
            players = game.players.len(),
            max_rounds = game.max_rounds,
            scoring = game.scoring_rule.rule_type.as_str(),
            "Game created"
        );
        Ok(game)
    }

    /// Valid saved games, most recently updated first.
    pub fn history(&self) -> Vec<Game> {
        let mut games = self.store.load_game_history();
        games.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        games
    }

    /// Look a game up in the current slot, then in history.
    pub fn find_game(&self, game_id: &str) -> Result<Game, DomainError> {
        find_game(&self.store, game_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
        })
    }

    pub fn current_game(&self) -> Option<Game> {
        self.store.load_current_game()
    }

    /// Remove a game from history.
    pub fn delete_game(&self, game_id: &str) {
        info!(game_id, "Deleting game from history");
        self.store.delete_game(game_id);
    }

    pub fn clear_all(&self) {
        info!("Clearing all stored games");
        self.store.clear_all();
    }
}
