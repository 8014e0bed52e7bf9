use strum::EnumCount;

use crate::card::CardColor;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const ACTION_CARDS_PER_COLOR: u8 = 2;

pub(crate) const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * CardColor::COUNT) as u8;
pub(crate) const SKIP_CARDS_IN_DECK: u8 = ACTION_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub(crate) const REVERSE_CARDS_IN_DECK: u8 = ACTION_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub(crate) const DRAW_TWO_CARDS_IN_DECK: u8 = ACTION_CARDS_PER_COLOR * CardColor::COUNT as u8;

pub(crate) const WILD_CARDS_IN_DECK: u8 = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: u8 = 4;

pub(crate) const TOTAL_CARDS_IN_DECK: u8 = NUMBER_CARDS_IN_DECK
    + SKIP_CARDS_IN_DECK
    + REVERSE_CARDS_IN_DECK
    + DRAW_TWO_CARDS_IN_DECK
    + WILD_CARDS_IN_DECK
    + WILD_DRAW_FOUR_CARDS_IN_DECK;

/// Number of cards in the catalog, and the number of "play" actions.
pub const CATALOG_SIZE: usize = TOTAL_CARDS_IN_DECK as usize;
/// The action index meaning "draw a card".
pub const DRAW_ACTION: usize = CATALOG_SIZE;
/// Size of the whole action space: one play action per catalog entry plus draw.
pub const ACTION_COUNT: usize = CATALOG_SIZE + 1;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const DEFAULT_PLAYERS: usize = 2;
pub const STARTING_HAND_SIZE: usize = 7;

pub(crate) const DRAW_TWO_PENALTY: usize = 2;
pub(crate) const WILD_DRAW_FOUR_PENALTY: usize = 4;

pub const INVALID_ACTION_REWARD: f32 = -1.0;
pub const PLAY_REWARD: f32 = 1.0;
pub const DRAW_REWARD: f32 = -0.1;
pub const WIN_REWARD: f32 = 100.0;
pub const STALEMATE_REWARD: f32 = 0.0;
