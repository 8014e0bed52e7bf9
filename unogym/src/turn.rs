use crate::card::{CardColor, CardId, ColoredCard, Face};
use crate::constants::{CATALOG_SIZE, DRAW_ACTION};
use crate::error::InvalidAction;
use crate::observation::Observation;

/// A decoded action index. `Play` names a catalog entry; any card in hand
/// with the same face can be played for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Play(CardId),
    Draw,
}

impl Action {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            DRAW_ACTION => Some(Action::Draw),
            i if i < CATALOG_SIZE => Some(Action::Play(CardId(i as u8))),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Action::Play(id) => id.index(),
            Action::Draw => DRAW_ACTION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Seat that follows `seat` at a table of `players`.
    pub fn next_seat(self, seat: usize, players: usize) -> usize {
        match self {
            Direction::Clockwise => (seat + 1) % players,
            Direction::CounterClockwise => (seat + players - 1) % players,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    DrawTwo,
    Wild(CardColor),
    WildDrawFour(CardColor),
    SelfDraw,
    Invalid(InvalidAction),
}

impl TurnActionResult {
    pub(crate) fn for_play(face: Face, chosen: CardColor) -> Self {
        match face {
            Face::Colored(_, ColoredCard::Number(_)) => TurnActionResult::Neutral,
            Face::Colored(_, ColoredCard::Skip) => TurnActionResult::Skip,
            Face::Colored(_, ColoredCard::Reverse) => TurnActionResult::Reverse,
            Face::Colored(_, ColoredCard::DrawTwo) => TurnActionResult::DrawTwo,
            Face::Wild => TurnActionResult::Wild(chosen),
            Face::WildDrawFour => TurnActionResult::WildDrawFour(chosen),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepInfo {
    pub message: String,
    pub result: TurnActionResult,
    pub winner: Option<usize>,
    /// Some draw during this step came up short.
    pub deck_exhausted: bool,
    /// The discard pile was shuffled back into the draw pile during this
    /// step.
    pub deck_replenished: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f32,
    pub done: bool,
    pub info: StepInfo,
}
