use crate::card::{Card, CardColor, CardId};
use crate::constants::CATALOG_SIZE;
use crate::player::Player;
use crate::turn::Direction;
use crate::uno::{GameState, GameStatus};

/// What the player about to act is allowed to see.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub player: usize,
    pub hand: Vec<CardId>,
    pub top_card: Card,
    pub current_color: CardColor,
    pub direction: Direction,
    pub deck_size: usize,
    /// Every card on the discard pile, bottom first.
    pub discard_pile: Vec<CardId>,
    /// Number of cards each seat holds.
    pub hand_sizes: Vec<usize>,
}

impl Observation {
    pub(crate) fn from_state(state: &GameState) -> Self {
        let player = &state.players[state.current_player];
        Self {
            player: player.seat,
            hand: player.hand.iter().map(|card| card.id).collect(),
            top_card: state.top_card(),
            current_color: state.current_color,
            direction: state.direction,
            deck_size: state.deck.cards_count(),
            discard_pile: state.deck.discard_pile().iter().map(|card| card.id).collect(),
            hand_sizes: state.players.iter().map(Player::cards_count).collect(),
        }
    }

    pub fn hand_mask(&self) -> [bool; CATALOG_SIZE] {
        mask(&self.hand)
    }

    pub fn discard_mask(&self) -> [bool; CATALOG_SIZE] {
        mask(&self.discard_pile)
    }
}

fn mask(ids: &[CardId]) -> [bool; CATALOG_SIZE] {
    let mut mask = [false; CATALOG_SIZE];
    for id in ids {
        mask[id.index()] = true;
    }
    mask
}

/// Everything on the table, every hand included. Meant for renderers, not
/// for the players.
#[derive(Clone, Debug)]
pub struct GameView {
    pub players: Vec<Player>,
    pub current_player: usize,
    pub direction: Direction,
    pub current_color: CardColor,
    pub status: GameStatus,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
}

impl GameView {
    pub(crate) fn from_state(state: &GameState) -> Self {
        Self {
            players: state.players.clone(),
            current_player: state.current_player,
            direction: state.direction,
            current_color: state.current_color,
            status: state.status,
            draw_pile: state.deck.draw_pile().to_vec(),
            discard_pile: state.deck.discard_pile().to_vec(),
        }
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn deck_size(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn total_cards(&self) -> usize {
        self.players.iter().map(Player::cards_count).sum::<usize>()
            + self.draw_pile.len()
            + self.discard_pile.len()
    }
}
