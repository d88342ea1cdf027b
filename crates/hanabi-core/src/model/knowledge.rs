use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

/// A hint payload: a rank or a suit, nothing else is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Rank(Rank),
    Suit(Suit),
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Rank(rank) => write!(f, "rank {rank}"),
            Hint::Suit(suit) => write!(f, "suit {suit}"),
        }
    }
}

/// Public information accumulated about one held card.
///
/// Tracks which ranks and suits are still possible given every hint the
/// owning hand has received. The sets only ever narrow; nothing a hint
/// reveals is forgotten within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Knowledge {
    ranks: [bool; 5],
    suits: [bool; 5],
}

impl Knowledge {
    pub const fn new() -> Self {
        Self {
            ranks: [true; 5],
            suits: [true; 5],
        }
    }

    /// Record the outcome of a hint against this card's true identity.
    ///
    /// A matching hint confirms the value (eliminating all alternatives); a
    /// non-matching hint eliminates the hinted value only.
    pub fn absorb(&mut self, hint: Hint, card: Card) {
        match hint {
            Hint::Rank(hinted) => {
                if card.rank == hinted {
                    for rank in Rank::ORDERED {
                        if rank != hinted {
                            self.ranks[(rank.value() - 1) as usize] = false;
                        }
                    }
                } else {
                    self.ranks[(hinted.value() - 1) as usize] = false;
                }
            }
            Hint::Suit(hinted) => {
                if card.suit == hinted {
                    for suit in Suit::ALL {
                        if suit != hinted {
                            self.suits[suit.index()] = false;
                        }
                    }
                } else {
                    self.suits[hinted.index()] = false;
                }
            }
        }
    }

    pub fn allows_rank(&self, rank: Rank) -> bool {
        self.ranks[(rank.value() - 1) as usize]
    }

    pub fn allows_suit(&self, suit: Suit) -> bool {
        self.suits[suit.index()]
    }

    pub fn known_rank(&self) -> Option<Rank> {
        let mut found = None;
        for rank in Rank::ORDERED {
            if self.allows_rank(rank) {
                if found.is_some() {
                    return None;
                }
                found = Some(rank);
            }
        }
        found
    }

    pub fn known_suit(&self) -> Option<Suit> {
        let mut found = None;
        for suit in Suit::ALL {
            if self.allows_suit(suit) {
                if found.is_some() {
                    return None;
                }
                found = Some(suit);
            }
        }
        found
    }

    /// The full identity, when hints have eliminated everything else.
    pub fn identified(&self) -> Option<Card> {
        match (self.known_rank(), self.known_suit()) {
            (Some(rank), Some(suit)) => Some(Card::new(rank, suit)),
            _ => None,
        }
    }

    pub fn possible_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ORDERED.into_iter().filter(|rank| self.allows_rank(*rank))
    }

    pub fn possible_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::ALL.into_iter().filter(|suit| self.allows_suit(*suit))
    }
}

impl Default for Knowledge {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_rank() {
            Some(rank) => write!(f, "{rank}")?,
            None => f.write_str("?")?,
        }
        match self.known_suit() {
            Some(suit) => write!(f, "{suit}"),
            None => f.write_str("?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Hint, Knowledge};
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn matching_rank_hint_confirms() {
        let card = Card::new(Rank::Three, Suit::Blue);
        let mut knowledge = Knowledge::new();
        knowledge.absorb(Hint::Rank(Rank::Three), card);
        assert_eq!(knowledge.known_rank(), Some(Rank::Three));
        assert_eq!(knowledge.known_suit(), None);
        assert_eq!(knowledge.identified(), None);
    }

    #[test]
    fn non_matching_hint_eliminates_only_hinted_value() {
        let card = Card::new(Rank::Three, Suit::Blue);
        let mut knowledge = Knowledge::new();
        knowledge.absorb(Hint::Rank(Rank::Five), card);
        assert!(!knowledge.allows_rank(Rank::Five));
        assert!(knowledge.allows_rank(Rank::Three));
        assert!(knowledge.allows_rank(Rank::One));
        assert_eq!(knowledge.known_rank(), None);
    }

    #[test]
    fn rank_hints_leave_suit_knowledge_untouched() {
        let card = Card::new(Rank::Two, Suit::Red);
        let mut knowledge = Knowledge::new();
        knowledge.absorb(Hint::Rank(Rank::Two), card);
        for suit in Suit::ALL {
            assert!(knowledge.allows_suit(suit));
        }
    }

    #[test]
    fn confirming_rank_and_suit_identifies_the_card() {
        let card = Card::new(Rank::Four, Suit::White);
        let mut knowledge = Knowledge::new();
        knowledge.absorb(Hint::Rank(Rank::Four), card);
        knowledge.absorb(Hint::Suit(Suit::White), card);
        assert_eq!(knowledge.identified(), Some(card));
    }

    #[test]
    fn elimination_across_hints_is_monotonic() {
        let card = Card::new(Rank::One, Suit::Green);
        let mut knowledge = Knowledge::new();
        knowledge.absorb(Hint::Suit(Suit::Red), card);
        knowledge.absorb(Hint::Suit(Suit::Blue), card);
        knowledge.absorb(Hint::Suit(Suit::Yellow), card);
        knowledge.absorb(Hint::Suit(Suit::White), card);
        assert_eq!(knowledge.known_suit(), Some(Suit::Green));
        assert_eq!(knowledge.possible_suits().count(), 1);
    }

    #[test]
    fn display_shows_question_marks_until_known() {
        let card = Card::new(Rank::Two, Suit::Green);
        let mut knowledge = Knowledge::new();
        assert_eq!(knowledge.to_string(), "??");
        knowledge.absorb(Hint::Rank(Rank::Two), card);
        assert_eq!(knowledge.to_string(), "2?");
        knowledge.absorb(Hint::Suit(Suit::Green), card);
        assert_eq!(knowledge.to_string(), "2G");
    }
}
