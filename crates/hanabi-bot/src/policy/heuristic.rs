use super::BotDifficulty;
use hanabi_core::game::agent::Agent;
use hanabi_core::game::moves::Move;
use hanabi_core::game::view::RoundInfo;
use hanabi_core::model::board::BoardState;
use hanabi_core::model::card::Card;
use hanabi_core::model::knowledge::{Hint, Knowledge};
use hanabi_core::model::player::PlayerId;
use tracing::{Level, event};

/// Deterministic rule-of-thumb agent.
///
/// Both difficulties play a card whose hint knowledge makes it certainly
/// playable. Beyond that, easy falls back to discarding its oldest card,
/// while normal first spends hint tokens pointing teammates at their
/// playable cards.
pub struct HeuristicPolicy {
    difficulty: BotDifficulty,
}

impl HeuristicPolicy {
    pub fn new(difficulty: BotDifficulty) -> Self {
        Self { difficulty }
    }

    pub fn easy() -> Self {
        Self::new(BotDifficulty::Easy)
    }

    pub fn normal() -> Self {
        Self::new(BotDifficulty::Normal)
    }
}

impl Agent for HeuristicPolicy {
    fn decide(&mut self, view: &RoundInfo) -> Move {
        if let Some(position) = safe_play(view) {
            let chosen = Move::Play { position };
            log_decision(view, self.difficulty, "safe_play", &chosen);
            return chosen;
        }

        // once the pile is out only plays and discards advance the final
        // lap, so hint tokens stop being spent
        if self.difficulty == BotDifficulty::Normal && view.hints() > 0 && view.deck_size() > 0 {
            if let Some((target, hint)) = useful_hint(view) {
                let chosen = Move::Hint { target, hint };
                log_decision(view, self.difficulty, "point_at_playable", &chosen);
                return chosen;
            }
        }

        let chosen = Move::Discard {
            position: oldest_position(view),
        };
        log_decision(view, self.difficulty, "discard_oldest", &chosen);
        chosen
    }
}

/// A position is safe when every identity its knowledge still allows would
/// play in sequence.
fn safe_play(view: &RoundInfo) -> Option<usize> {
    view.own_hand()
        .iter()
        .position(|own| every_possibility_plays(view.board(), own.knowledge))
}

fn every_possibility_plays(board: BoardState, knowledge: Knowledge) -> bool {
    let mut possibilities = 0usize;
    for rank in knowledge.possible_ranks() {
        for suit in knowledge.possible_suits() {
            if !board.is_playable(Card::new(rank, suit)) {
                return false;
            }
            possibilities += 1;
        }
    }
    possibilities > 0
}

/// Point a teammate at a playable card they do not fully know yet,
/// completing rank before suit.
fn useful_hint(view: &RoundInfo) -> Option<(PlayerId, Hint)> {
    for hand in view.other_hands() {
        for held in hand.iter() {
            if !view.board().is_playable(held.card) || held.knowledge.identified().is_some() {
                continue;
            }
            let hint = if held.knowledge.known_rank().is_none() {
                Hint::Rank(held.card.rank)
            } else {
                Hint::Suit(held.card.suit)
            };
            return Some((hand.player(), hint));
        }
    }
    None
}

fn oldest_position(view: &RoundInfo) -> usize {
    view.own_hand()
        .iter()
        .enumerate()
        .min_by_key(|(_, own)| own.drawn_on_turn)
        .map(|(position, _)| position)
        .unwrap_or(0)
}

fn log_decision(view: &RoundInfo, difficulty: BotDifficulty, reason: &str, chosen: &Move) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    event!(
        target: "hanabi_bot::policy",
        Level::DEBUG,
        player = %view.player(),
        difficulty = ?difficulty,
        hints = view.hints(),
        lives = view.lives(),
        score = view.score(),
        deck = view.deck_size(),
        reason,
        chosen = %chosen,
    );
}
