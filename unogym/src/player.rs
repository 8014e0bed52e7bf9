use crate::card::{Card, Face};

#[derive(Debug, Clone)]
pub struct Player {
    pub seat: usize,
    pub hand: Vec<Card>,
    /// Set by Skip, Draw Two and Wild Draw Four; consumed by the next turn
    /// advance that reaches this player.
    pub skip: bool,
}

impl Player {
    pub fn new(seat: usize, cards: Vec<Card>) -> Self {
        Self {
            seat,
            hand: cards,
            skip: false,
        }
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    /// Position of the first card in hand showing `face`.
    pub fn card_index(&self, face: &Face) -> Option<usize> {
        self.hand.iter().position(|x| &x.face == face)
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }
}
