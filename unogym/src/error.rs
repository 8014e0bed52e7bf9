use thiserror::Error;

use crate::card::Face;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Cannot deal {0} cards to every player")]
    InvalidHandSize(usize),
    #[error("Game has not been initialized, call `reset()` first")]
    NotInitialized,
    #[error("Game is already over")]
    GameOver,
    #[error("Player seat {0} is out of range")]
    InvalidPlayer(usize),
    #[error("Discard pile has no cards to recycle into the deck")]
    NothingToReplenish,
    #[error("Deck holds no card that can start the discard pile")]
    NoStartingCard,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;

/// Why `step` refused an action. Reported through the step result, the game
/// state is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("action index {0} is out of range")]
    OutOfRange(usize),
    #[error("no {0} in hand")]
    CardNotInHand(Face),
    #[error("{0} matches neither the current color nor the top card")]
    CardMismatch(Face),
}
