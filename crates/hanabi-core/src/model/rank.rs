use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rank {
    pub const ORDERED: [Rank; 5] = [Rank::One, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

    pub const TOP: Rank = Rank::Five;

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Rank::One),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// How many copies of this rank each suit contributes to the deck.
    pub const fn multiplicity(self) -> usize {
        match self {
            Rank::One => 3,
            Rank::Two | Rank::Three | Rank::Four => 2,
            Rank::Five => 1,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
