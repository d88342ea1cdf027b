use crate::game::engine::Game;
use crate::game::rules::Rules;
use crate::model::board::BoardState;
use crate::model::card::ResolvedCard;
use crate::model::hand::Hand;
use crate::model::knowledge::Knowledge;
use crate::model::player::PlayerId;

/// What the acting player may see of one of their own cards: the turn it
/// arrived and the hint knowledge gathered so far. There is deliberately no
/// identity here; leaking it is a type error, not a runtime bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnCard {
    pub drawn_on_turn: u32,
    pub knowledge: Knowledge,
}

/// Read-only snapshot handed to the acting player's agent each turn.
///
/// Holds deep copies only; mutating a view (or holding onto it) can never
/// touch engine state. The acting player's hand is masked down to
/// [`OwnCard`]s, every other hand is fully visible.
#[derive(Debug, Clone)]
pub struct RoundInfo {
    player: PlayerId,
    number_of_players: usize,
    own_hand: Vec<OwnCard>,
    other_hands: Vec<Hand>,
    board: BoardState,
    hints: u8,
    lives: u8,
    score: u32,
    deck_size: usize,
    current_turn: u32,
    rules: Rules,
    played: Vec<ResolvedCard>,
    discarded: Vec<ResolvedCard>,
}

impl RoundInfo {
    /// Pure projection of the true state for one acting player.
    pub(crate) fn project(game: &Game, player: PlayerId) -> Self {
        let mut own_hand = Vec::new();
        let mut other_hands = Vec::new();

        for hand in game.hands() {
            if hand.player() == player {
                own_hand = hand
                    .iter()
                    .map(|held| OwnCard {
                        drawn_on_turn: held.drawn_on_turn,
                        knowledge: held.knowledge,
                    })
                    .collect();
            } else {
                other_hands.push(hand.clone());
            }
        }

        Self {
            player,
            number_of_players: game.player_count(),
            own_hand,
            other_hands,
            board: game.board(),
            hints: game.hints(),
            lives: game.lives(),
            score: game.score(),
            deck_size: game.deck_size(),
            current_turn: game.current_turn(),
            rules: game.rules(),
            played: game.played().to_vec(),
            discarded: game.discarded().to_vec(),
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn number_of_players(&self) -> usize {
        self.number_of_players
    }

    pub fn own_hand(&self) -> &[OwnCard] {
        &self.own_hand
    }

    pub fn other_hands(&self) -> &[Hand] {
        &self.other_hands
    }

    pub fn other_hand(&self, player: PlayerId) -> Option<&Hand> {
        self.other_hands.iter().find(|hand| hand.player() == player)
    }

    pub fn board(&self) -> BoardState {
        self.board
    }

    pub fn hints(&self) -> u8 {
        self.hints
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn played(&self) -> &[ResolvedCard] {
        &self.played
    }

    pub fn discarded(&self) -> &[ResolvedCard] {
        &self.discarded
    }
}
