use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// How a card left its hand. Exactly one applies per resolved card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFate {
    Played,
    Misplayed,
    Discarded,
}

/// A card that is no longer held, together with its play-time metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCard {
    pub card: Card,
    pub drawn_on_turn: u32,
    pub resolved_on_turn: u32,
    pub fate: CardFate,
}

impl ResolvedCard {
    pub const fn new(card: Card, drawn_on_turn: u32, resolved_on_turn: u32, fate: CardFate) -> Self {
        Self {
            card,
            drawn_on_turn,
            resolved_on_turn,
            fate,
        }
    }

    /// Misplays count alongside discards for card accounting.
    pub const fn counts_as_discard(self) -> bool {
        matches!(self.fate, CardFate::Misplayed | CardFate::Discarded)
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, CardFate, ResolvedCard};
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn display_is_rank_then_suit() {
        let card = Card::new(Rank::Three, Suit::Yellow);
        assert_eq!(card.to_string(), "3Y");
    }

    #[test]
    fn misplays_count_as_discards() {
        let card = Card::new(Rank::Five, Suit::Red);
        let resolved = ResolvedCard::new(card, 0, 4, CardFate::Misplayed);
        assert!(resolved.counts_as_discard());

        let played = ResolvedCard::new(card, 0, 4, CardFate::Played);
        assert!(!played.counts_as_discard());
    }
}
