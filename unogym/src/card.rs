use core::fmt;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// One of the four playable colors. Wild cards have no color of their own,
/// which is modelled as `Face::color()` returning `None`.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
pub enum CardColor {
    Red,
    Yellow,
    Blue,
    Green,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl ColoredCard {
    pub fn rank(self) -> Rank {
        match self {
            ColoredCard::Number(number) => Rank::Number(number),
            ColoredCard::Skip => Rank::Skip,
            ColoredCard::Reverse => Rank::Reverse,
            ColoredCard::DrawTwo => Rank::DrawTwo,
        }
    }
}

/// What is printed on a card: its color and rank, without the identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

impl Face {
    pub fn color(self) -> Option<CardColor> {
        match self {
            Face::Colored(color, _) => Some(color),
            Face::Wild | Face::WildDrawFour => None,
        }
    }

    pub fn rank(self) -> Rank {
        match self {
            Face::Colored(_, card) => card.rank(),
            Face::Wild => Rank::Wild,
            Face::WildDrawFour => Rank::WildDrawFour,
        }
    }

    pub fn is_wild(self) -> bool {
        matches!(self, Face::Wild | Face::WildDrawFour)
    }
}

/// The color-less part of a face, used for rank matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// Catalog identifier of a physical card, `0..108`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub u8);

impl CardId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A physical card. Two cards with the same face are still different cards:
/// equality and hashing only look at the identifier.
#[derive(Clone, Copy, Debug)]
pub struct Card {
    pub id: CardId,
    pub face: Face,
}

impl Card {
    pub fn new(id: CardId, face: Face) -> Self {
        Self { id, face }
    }

    pub fn color(&self) -> Option<CardColor> {
        self.face.color()
    }

    pub fn rank(&self) -> Rank {
        self.face.rank()
    }

    pub fn is_wild(&self) -> bool {
        self.face.is_wild()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Colored(color, card) => {
                write!(f, "{} {}", color, {
                    match card {
                        ColoredCard::Number(number) => number.to_string(),
                        ColoredCard::Skip => "Skip".to_string(),
                        ColoredCard::Reverse => "Reverse".to_string(),
                        ColoredCard::DrawTwo => "Draw Two".to_string(),
                    }
                })
            }
            Face::Wild => write!(f, "Wild"),
            Face::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.face, f)
    }
}
