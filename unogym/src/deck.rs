use rand::{seq::SliceRandom, Rng};
use tracing::{debug, trace, warn};

use crate::card::Card;
use crate::catalog::catalog;
use crate::error::{Result, UnoError};

/// Owns the draw pile and the discard pile.
///
/// The draw pile is a stack: cards are drawn from the end. The last card of
/// the discard pile is the top card new plays have to match.
#[derive(Debug, Clone)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
}

/// Cards handed out by [`Deck::draw`].
///
/// A short draw (`exhausted`) is not an error: callers keep whatever came
/// out and carry on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draw {
    pub cards: Vec<Card>,
    pub replenished: bool,
    pub exhausted: bool,
}

impl Deck {
    /// Copies the catalog into a freshly shuffled draw pile with an empty
    /// discard pile.
    pub fn shuffle_new_deck<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut draw_pile = catalog().to_vec();
        draw_pile.shuffle(rng);
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Builds a deck from explicit piles, in stack order (last card drawn or
    /// showing first).
    pub fn from_piles(draw_pile: Vec<Card>, discard_pile: Vec<Card>) -> Self {
        Self {
            draw_pile,
            discard_pile,
        }
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Draw {
        let mut draw = Draw {
            cards: Vec::with_capacity(count),
            ..Draw::default()
        };

        while draw.cards.len() < count {
            if let Some(card) = self.draw_pile.pop() {
                draw.cards.push(card);
                continue;
            }
            match self.replenish(rng) {
                Ok(_) => draw.replenished = true,
                Err(_) => {
                    draw.exhausted = true;
                    break;
                }
            }
        }

        if draw.exhausted {
            warn!(
                requested = count,
                drawn = draw.cards.len(),
                "deck exhausted, short draw"
            );
        } else {
            trace!(count, "drew cards");
        }
        draw
    }

    /// Shuffles every discarded card except the top one back into the empty
    /// draw pile and returns how many cards were recycled.
    pub fn replenish<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        debug_assert!(
            self.draw_pile.is_empty(),
            "the draw pile is only replenished once it is empty"
        );
        if self.discard_pile.len() <= 1 {
            return Err(UnoError::NothingToReplenish);
        }

        let below_top = self.discard_pile.len() - 1;
        let mut recycled: Vec<Card> = self.discard_pile.drain(..below_top).collect();
        recycled.shuffle(rng);
        let count = recycled.len();
        self.draw_pile.append(&mut recycled);

        debug!(count, "replenished deck from discard pile");
        Ok(count)
    }

    /// Turns cards over until a non-wild one shows and starts the discard
    /// pile with it. Wild cards go back into the draw pile, which is then
    /// shuffled again.
    pub fn reveal_starting_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card> {
        if self.draw_pile.iter().all(Card::is_wild) {
            return Err(UnoError::NoStartingCard);
        }

        loop {
            let card = self.draw_pile.pop().ok_or(UnoError::NoStartingCard)?;
            if !card.is_wild() {
                debug!(%card, "revealed starting card");
                self.discard_pile.push(card);
                return Ok(card);
            }
            trace!(%card, "revealed a wild card, shuffling it back");
            self.draw_pile.push(card);
            self.draw_pile.shuffle(rng);
        }
    }

    pub(crate) fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn cards_count(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
}
