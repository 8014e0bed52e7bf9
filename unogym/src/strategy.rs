//! Wild-color choice.
//!
//! The engine never decides on its own which color a wild card names; it
//! asks the [`ColorChooser`] it was built with.

use rand::{seq::SliceRandom, RngCore};
use strum::{EnumCount, IntoEnumIterator};

use crate::card::{Card, CardColor};

pub trait ColorChooser {
    /// Picks the color a wild card names. `hand` is the acting player's hand
    /// after the wild card has left it.
    fn choose_color(&mut self, hand: &[Card], rng: &mut dyn RngCore) -> CardColor;
}

/// Names the color the player holds most of, breaking ties at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct MostHeldColor;

impl ColorChooser for MostHeldColor {
    fn choose_color(&mut self, hand: &[Card], rng: &mut dyn RngCore) -> CardColor {
        let mut counts = [0usize; CardColor::COUNT];
        for color in hand.iter().filter_map(Card::color) {
            counts[color as usize] += 1;
        }

        let most = counts.iter().copied().max().unwrap_or_default();
        let tied: Vec<CardColor> = CardColor::iter()
            .filter(|color| counts[*color as usize] == most)
            .collect();

        *tied
            .choose(rng)
            .expect("at least one color always has the highest count")
    }
}

/// Always names the same color.
#[derive(Debug, Clone, Copy)]
pub struct FixedColor(pub CardColor);

impl ColorChooser for FixedColor {
    fn choose_color(&mut self, _hand: &[Card], _rng: &mut dyn RngCore) -> CardColor {
        self.0
    }
}

impl<F> ColorChooser for F
where
    F: FnMut(&[Card]) -> CardColor,
{
    fn choose_color(&mut self, hand: &[Card], _rng: &mut dyn RngCore) -> CardColor {
        self(hand)
    }
}
