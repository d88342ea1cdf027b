use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// The draw pile plus the immutable reference set of every card in the game.
/// Drawing pops from the back; `all_cards` is never drawn from.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    all_cards: Vec<Card>,
}

impl Deck {
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(50);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                for _ in 0..rank.multiplicity() {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        let all_cards = cards.clone();
        Self { cards, all_cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        let all_cards = cards.clone();
        Self { cards, all_cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::full();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    pub fn all_cards(&self) -> &[Card] {
        &self.all_cards
    }
}

#[cfg(test)]
mod tests {
    use super::Deck;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn full_deck_has_fifty_cards() {
        let deck = Deck::full();
        assert_eq!(deck.len(), 50);
        assert_eq!(deck.all_cards().len(), 50);
    }

    #[test]
    fn full_deck_weights_ranks() {
        let deck = Deck::full();
        for suit in Suit::ALL {
            for rank in Rank::ORDERED {
                let count = deck
                    .all_cards()
                    .iter()
                    .filter(|c| c.rank == rank && c.suit == suit)
                    .count();
                assert_eq!(count, rank.multiplicity(), "{rank}{suit}");
            }
        }
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::shuffled_with_seed(42);
        let deck_b = Deck::shuffled_with_seed(42);
        assert_eq!(deck_a.remaining(), deck_b.remaining());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::shuffled_with_seed(1);
        let deck_b = Deck::shuffled_with_seed(2);
        assert_ne!(deck_a.remaining(), deck_b.remaining());
    }

    #[test]
    fn shuffle_leaves_reference_set_alone() {
        let ordered = Deck::full();
        let shuffled = Deck::shuffled_with_seed(7);
        assert_eq!(ordered.all_cards(), shuffled.all_cards());
    }

    #[test]
    fn draw_consumes_from_the_back() {
        let mut deck = Deck::full();
        let expected = *deck.remaining().last().unwrap();
        assert_eq!(deck.draw(), Some(expected));
        assert_eq!(deck.len(), 49);
    }
}
