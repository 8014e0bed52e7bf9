use std::collections::BTreeSet;
use std::fmt::{self, Debug};

use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::card::{Card, CardColor, Face, Rank};
use crate::catalog::catalog_card;
use crate::constants::*;
use crate::deck::{Deck, Draw};
use crate::error::{InvalidAction, Result, UnoError};
use crate::observation::{GameView, Observation};
use crate::player::Player;
use crate::strategy::{ColorChooser, MostHeldColor};
use crate::turn::{Action, Direction, Step, StepInfo, TurnActionResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnoConfig {
    pub num_players: usize,
    pub hand_size: usize,
    /// Seed for the default random source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for UnoConfig {
    fn default() -> Self {
        Self {
            num_players: DEFAULT_PLAYERS,
            hand_size: STARTING_HAND_SIZE,
            seed: None,
        }
    }
}

impl UnoConfig {
    pub fn new(num_players: usize) -> Result<Self> {
        let config = Self {
            num_players,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_players < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if self.num_players > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        // Worst case every wild card is left undealt, and one more card is
        // needed to start the discard pile.
        let wild_cards = (WILD_CARDS_IN_DECK + WILD_DRAW_FOUR_CARDS_IN_DECK) as usize;
        if self.hand_size == 0 || self.num_players * self.hand_size + wild_cards >= CATALOG_SIZE {
            return Err(UnoError::InvalidHandSize(self.hand_size));
        }
        Ok(())
    }
}

/// Builder that allows injecting the random source and the wild-color
/// strategy, mostly for tests and training setups.
pub struct UnoBuilder {
    config: UnoConfig,
    rng: Option<Box<dyn RngCore>>,
    color_chooser: Box<dyn ColorChooser>,
}

impl UnoBuilder {
    pub fn new(num_players: usize) -> Result<Self> {
        Self::from_config(UnoConfig::new(num_players)?)
    }

    pub fn from_config(config: UnoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: None,
            color_chooser: Box::new(MostHeldColor),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    /// Uses `rng` for every shuffle and tie-break. Takes precedence over a
    /// seed.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn with_color_chooser(mut self, color_chooser: impl ColorChooser + 'static) -> Self {
        self.color_chooser = Box::new(color_chooser);
        self
    }

    pub fn build(self) -> Result<Uno> {
        self.config.validate()?;

        let rng: Box<dyn RngCore> = match (self.rng, self.config.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(StdRng::seed_from_u64(seed)),
            (None, None) => Box::new(StdRng::from_entropy()),
        };

        Ok(Uno {
            config: self.config,
            rng,
            color_chooser: self.color_chooser,
            state: None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingAction(usize),
    /// `winner` is `None` when the game stalled with no cards left to draw.
    GameOver { winner: Option<usize> },
}

/// The game environment. Nothing is dealt until [`Uno::reset`] is called.
pub struct Uno {
    config: UnoConfig,
    rng: Box<dyn RngCore>,
    color_chooser: Box<dyn ColorChooser>,
    state: Option<GameState>,
}

impl Debug for Uno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uno")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Uno {
    pub fn new(num_players: usize) -> Result<Self> {
        UnoBuilder::new(num_players)?.build()
    }

    pub fn builder(num_players: usize) -> Result<UnoBuilder> {
        UnoBuilder::new(num_players)
    }

    pub fn config(&self) -> &UnoConfig {
        &self.config
    }

    /// Throws away any game in progress and deals a new one.
    pub fn reset(&mut self) -> Result<Observation> {
        let state = GameState::deal(&self.config, &mut *self.rng)?;
        let observation = Observation::from_state(&state);
        self.state = Some(state);
        Ok(observation)
    }

    /// Applies one action for the player whose turn it is.
    ///
    /// `action` is a catalog index (`0..108`) to play a card with that face,
    /// or [`DRAW_ACTION`] to draw. Illegal actions leave the game untouched
    /// and come back as [`TurnActionResult::Invalid`] with a negative reward.
    pub fn step(&mut self, action: usize) -> Result<Step> {
        let state = self.state.as_mut().ok_or(UnoError::NotInitialized)?;
        if state.is_over() {
            return Err(UnoError::GameOver);
        }
        let seat = state.current_player;

        let turn = match state.check_action(seat, action) {
            Ok(turn) => turn,
            Err(invalid) => {
                trace!(seat, action, %invalid, "rejected action");
                let info = StepInfo {
                    message: format!("Invalid action: {invalid}"),
                    result: TurnActionResult::Invalid(invalid),
                    winner: None,
                    deck_exhausted: false,
                    deck_replenished: false,
                };
                return Ok(state.step_result(INVALID_ACTION_REWARD, false, info));
            }
        };

        let (result, reward, message, draw) = match turn {
            Turn::Draw => {
                let draw = state.draw_to_player(seat, 1, &mut *self.rng);
                if draw.cards.is_empty() {
                    state.status = GameStatus::GameOver { winner: None };
                    debug!(seat, "nothing left to draw, stalemate");
                    let info = StepInfo {
                        message: "Stalemate: no cards left to draw".to_string(),
                        result: TurnActionResult::SelfDraw,
                        winner: None,
                        deck_exhausted: true,
                        deck_replenished: draw.replenished,
                    };
                    return Ok(state.step_result(STALEMATE_REWARD, true, info));
                }
                (
                    TurnActionResult::SelfDraw,
                    DRAW_REWARD,
                    "Drew a card".to_string(),
                    draw,
                )
            }
            Turn::Play(hand_index) => {
                let played = state.play(
                    seat,
                    hand_index,
                    &mut *self.rng,
                    &mut *self.color_chooser,
                );
                if played.won {
                    state.status = GameStatus::GameOver { winner: Some(seat) };
                    debug!(seat, card = %played.card, "player emptied their hand");
                    let info = StepInfo {
                        message: format!("Player {seat} wins!"),
                        result: played.result,
                        winner: Some(seat),
                        deck_exhausted: false,
                        deck_replenished: false,
                    };
                    return Ok(state.step_result(WIN_REWARD, true, info));
                }
                (
                    played.result,
                    PLAY_REWARD,
                    format!("Played {}", played.card),
                    played.penalty,
                )
            }
        };

        state.advance_turn();

        let info = StepInfo {
            message,
            result,
            winner: None,
            deck_exhausted: draw.exhausted,
            deck_replenished: draw.replenished,
        };
        Ok(state.step_result(reward, false, info))
    }

    /// Every action index `player` could legally submit right now, draw
    /// included. Empty once the game is over.
    pub fn legal_actions(&self, player: usize) -> Result<BTreeSet<usize>> {
        let state = self.state()?;
        state.check_seat(player)?;
        if state.is_over() {
            return Ok(BTreeSet::new());
        }

        Ok((0..ACTION_COUNT)
            .filter(|action| state.check_action(player, *action).is_ok())
            .collect())
    }

    pub fn legal_action_mask(&self, player: usize) -> Result<[bool; ACTION_COUNT]> {
        let mut mask = [false; ACTION_COUNT];
        for action in self.legal_actions(player)? {
            mask[action] = true;
        }
        Ok(mask)
    }

    pub fn observation(&self) -> Result<Observation> {
        Ok(Observation::from_state(self.state()?))
    }

    /// Full table view, every hand included.
    pub fn peek_state_for_display(&self) -> Result<GameView> {
        Ok(GameView::from_state(self.state()?))
    }

    pub fn status(&self) -> Result<GameStatus> {
        Ok(self.state()?.status)
    }

    pub fn get_current_turn_player(&self) -> Result<usize> {
        Ok(self.state()?.current_player)
    }

    pub fn get_next_turn_player(&self) -> Result<usize> {
        let state = self.state()?;
        Ok(state.next_seat(state.current_player))
    }

    pub fn get_current_color(&self) -> Result<CardColor> {
        Ok(self.state()?.current_color)
    }

    pub fn get_direction(&self) -> Result<Direction> {
        Ok(self.state()?.direction)
    }

    pub fn get_top_card(&self) -> Result<Card> {
        Ok(self.state()?.top_card())
    }

    pub fn get_player(&self, seat: usize) -> Option<&Player> {
        self.state.as_ref()?.players.get(seat)
    }

    fn state(&self) -> Result<&GameState> {
        self.state.as_ref().ok_or(UnoError::NotInitialized)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct GameState {
    pub(crate) deck: Deck,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player: usize,
    pub(crate) direction: Direction,
    pub(crate) current_color: CardColor,
    pub(crate) status: GameStatus,
}

/// A legal action, resolved against the acting player's hand.
enum Turn {
    Draw,
    Play(usize),
}

struct Played {
    card: Card,
    result: TurnActionResult,
    won: bool,
    /// Cards the next player was made to draw, if the card carried a penalty.
    penalty: Draw,
}

impl GameState {
    fn deal(config: &UnoConfig, rng: &mut dyn RngCore) -> Result<Self> {
        let mut deck = Deck::shuffle_new_deck(rng);

        let mut players = Vec::with_capacity(config.num_players);
        for seat in 0..config.num_players {
            let hand = deck.draw(config.hand_size, rng).cards;
            players.push(Player::new(seat, hand));
        }

        let top_card = deck.reveal_starting_card(rng)?;
        let current_color = top_card.color().ok_or(UnoError::NoStartingCard)?;

        debug!(
            players = config.num_players,
            hand_size = config.hand_size,
            %top_card,
            "dealt a new game"
        );

        Ok(Self {
            deck,
            players,
            current_player: 0,
            direction: Direction::Clockwise,
            current_color,
            status: GameStatus::AwaitingAction(0),
        })
    }

    pub(crate) fn top_card(&self) -> Card {
        *self
            .deck
            .top_card()
            .expect("the discard pile is never empty once the game starts")
    }

    fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    fn check_seat(&self, seat: usize) -> Result<()> {
        if seat >= self.players.len() {
            return Err(UnoError::InvalidPlayer(seat));
        }
        Ok(())
    }

    fn next_seat(&self, seat: usize) -> usize {
        self.direction.next_seat(seat, self.players.len())
    }

    fn can_play(&self, face: Face) -> bool {
        face.is_wild()
            || face.color() == Some(self.current_color)
            || face.rank() == self.top_card().rank()
    }

    fn check_action(&self, seat: usize, action: usize) -> Result<Turn, InvalidAction> {
        let card = match Action::from_index(action).ok_or(InvalidAction::OutOfRange(action))? {
            Action::Draw => return Ok(Turn::Draw),
            Action::Play(id) => catalog_card(id).ok_or(InvalidAction::OutOfRange(action))?,
        };

        let hand_index = self.players[seat]
            .card_index(&card.face)
            .ok_or(InvalidAction::CardNotInHand(card.face))?;

        if !self.can_play(card.face) {
            return Err(InvalidAction::CardMismatch(card.face));
        }
        Ok(Turn::Play(hand_index))
    }

    fn play(
        &mut self,
        seat: usize,
        hand_index: usize,
        rng: &mut dyn RngCore,
        color_chooser: &mut dyn ColorChooser,
    ) -> Played {
        let card = self.players[seat].remove_card(hand_index);
        self.deck.discard(card);

        let color = match card.color() {
            Some(color) => color,
            None => color_chooser.choose_color(&self.players[seat].hand, rng),
        };
        self.current_color = color;
        let result = TurnActionResult::for_play(card.face, color);
        trace!(seat, %card, %color, "played card");

        if self.players[seat].has_won() {
            return Played {
                card,
                result,
                won: true,
                penalty: Draw::default(),
            };
        }

        let next = self.next_seat(seat);
        let penalty = match card.rank() {
            Rank::Number(_) | Rank::Wild => Draw::default(),
            Rank::Skip => {
                self.players[next].skip = true;
                Draw::default()
            }
            // With two players a reverse hands the turn straight back.
            Rank::Reverse if self.players.len() == 2 => {
                self.players[next].skip = true;
                Draw::default()
            }
            Rank::Reverse => {
                self.direction = self.direction.reversed();
                Draw::default()
            }
            Rank::DrawTwo => self.penalize(next, DRAW_TWO_PENALTY, rng),
            Rank::WildDrawFour => self.penalize(next, WILD_DRAW_FOUR_PENALTY, rng),
        };

        Played {
            card,
            result,
            won: false,
            penalty,
        }
    }

    /// Makes `seat` draw `count` cards and lose their next turn.
    fn penalize(&mut self, seat: usize, count: usize, rng: &mut dyn RngCore) -> Draw {
        let draw = self.draw_to_player(seat, count, rng);
        trace!(seat, drawn = draw.cards.len(), "penalty draw");
        self.players[seat].skip = true;
        draw
    }

    fn draw_to_player(&mut self, seat: usize, count: usize, rng: &mut dyn RngCore) -> Draw {
        let draw = self.deck.draw(count, rng);
        self.players[seat].add_cards(draw.cards.iter().copied());
        draw
    }

    fn advance_turn(&mut self) {
        loop {
            let seat = self.next_seat(self.current_player);
            self.current_player = seat;

            let player = &mut self.players[seat];
            if !player.skip {
                break;
            }
            player.skip = false;
            trace!(seat, "skipped");
        }
        self.status = GameStatus::AwaitingAction(self.current_player);
    }

    fn step_result(&self, reward: f32, done: bool, info: StepInfo) -> Step {
        Step {
            observation: Observation::from_state(self),
            reward,
            done,
            info,
        }
    }
}
