//! Builders for services and games used across integration tests.

use std::cell::Cell;

use scorekeeper::domain::scoring::ScoringRuleType;
use scorekeeper::domain::state::Game;
use scorekeeper::domain::trump::Trump;
use scorekeeper::{
    GameFlowService, GameSession, GameSetup, GameStore, GamesService, IdGenerator,
    MaxCardsSetting,
};
use scorekeeper_test_support::unique_helpers::unique_str;

/// Ids `<prefix>-1`, `<prefix>-2`, ...
pub struct SeqIds {
    prefix: String,
    next: Cell<u32>,
}

impl SeqIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: Cell::new(0),
        }
    }
}

impl IdGenerator for SeqIds {
    fn new_id(&self) -> String {
        self.next.set(self.next.get() + 1);
        format!("{}-{}", self.prefix, self.next.get())
    }
}

pub fn setup(names: &[&str], scoring: ScoringRuleType, max_cards: MaxCardsSetting) -> GameSetup {
    let mut setup = GameSetup::new(names.iter().copied());
    setup.scoring = scoring;
    setup.max_cards = max_cards;
    setup
}

/// Create a game through the setup service and resume it.
pub fn start_game<S>(store: S, setup: &GameSetup) -> (Game, GameFlowService<S>, GameSession)
where
    S: GameStore + Clone,
{
    let games = GamesService::new(store.clone(), SeqIds::new(&unique_str("g")));
    let game = games.create_game(setup).expect("valid setup");
    let flow = GameFlowService::new(store);
    let session = flow.load(&game.id).expect("game was just saved");
    (game, flow, session)
}

/// Play the current round: everyone bids zero and the last seat takes every
/// trick.
pub fn play_round<S: GameStore>(flow: &GameFlowService<S>, session: &mut GameSession) {
    let players = session.game.players.len();
    let cards = session.round.cards_per_player;

    flow.set_trump(session, Trump::Spades).expect("trump");
    let bids = vec![0; players];
    flow.submit_bids(session, &bids).expect("bids");

    let mut tricks = vec![0; players];
    tricks[players - 1] = cards;
    flow.submit_tricks(session, &tricks).expect("tricks");
}
