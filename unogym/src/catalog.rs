//! The fixed set of 108 cards every game is dealt from.
//!
//! Identifiers are handed out in construction order and double as the
//! indices of the "play" actions, so the order below must never change.

use std::sync::OnceLock;

use strum::IntoEnumIterator;

use crate::card::{Card, CardColor, CardId, ColoredCard, Face};
use crate::constants::*;

pub fn build_catalog() -> Vec<Card> {
    let mut cards = Vec::with_capacity(CATALOG_SIZE);
    let mut push = |face: Face| {
        let id = CardId(cards.len() as u8);
        cards.push(Card::new(id, face));
    };

    // Number Cards
    for color in CardColor::iter() {
        for number in NUMBER_CARDS_PER_COLOR {
            push(Face::Colored(color, ColoredCard::Number(*number)));
        }
    }

    // Skip, Reverse and Draw Two Cards
    for color in CardColor::iter() {
        for _ in 0..ACTION_CARDS_PER_COLOR {
            push(Face::Colored(color, ColoredCard::Skip));
            push(Face::Colored(color, ColoredCard::Reverse));
            push(Face::Colored(color, ColoredCard::DrawTwo));
        }
    }

    for _ in 0..WILD_CARDS_IN_DECK {
        push(Face::Wild);
        push(Face::WildDrawFour);
    }

    debug_assert_eq!(cards.len(), CATALOG_SIZE, "catalog must hold every card");
    cards
}

/// Shared, lazily built copy of [`build_catalog`].
pub fn catalog() -> &'static [Card] {
    static CATALOG: OnceLock<Vec<Card>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Looks up the catalog card behind an identifier.
pub fn catalog_card(id: CardId) -> Option<Card> {
    catalog().get(id.index()).copied()
}
