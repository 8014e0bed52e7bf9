//! Rules engine for UNO-style shedding card games.
//!
//! [`Uno`] owns the whole table and is the only thing that mutates it. A
//! caller asks for [`Uno::legal_actions`], submits one with [`Uno::step`] and
//! gets back an [`Observation`] for the next player to act.

pub mod card;
pub mod catalog;
pub mod constants;
pub mod deck;
pub mod error;
pub mod observation;
pub mod player;
pub mod strategy;
pub mod turn;
pub mod uno;

pub use card::{Card, CardColor, CardId, ColoredCard, Face, Rank};
pub use constants::{ACTION_COUNT, CATALOG_SIZE, DRAW_ACTION};
pub use error::{InvalidAction, Result, UnoError};
pub use observation::{GameView, Observation};
pub use strategy::{ColorChooser, FixedColor, MostHeldColor};
pub use turn::{Action, Direction, Step, StepInfo, TurnActionResult};
pub use uno::{GameStatus, Uno, UnoBuilder, UnoConfig};
