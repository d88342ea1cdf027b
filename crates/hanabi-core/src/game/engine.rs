use crate::game::agent::Agent;
use crate::game::log::GameLog;
use crate::game::moves::Move;
use crate::game::rules::Rules;
use crate::game::view::RoundInfo;
use crate::model::board::BoardState;
use crate::model::card::{CardFate, ResolvedCard};
use crate::model::deck::Deck;
use crate::model::hand::{Hand, HeldCard};
use crate::model::knowledge::Hint;
use crate::model::player::PlayerId;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Why a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameOutcome {
    Perfect,
    LifeLoss,
    Timeout,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameOutcome::Perfect => "perfect",
            GameOutcome::LifeLoss => "life-loss",
            GameOutcome::Timeout => "timeout",
        };
        f.write_str(label)
    }
}

/// Construction failures. No partial game exists after one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    PlayerCount {
        actual: usize,
        min: usize,
        max: usize,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::PlayerCount { actual, min, max } => {
                write!(f, "player count {actual} outside {min}..={max}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Agent contract violations. These signal a programming error in the
/// agent, never an in-game event, and are never absorbed into game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameAlreadyOver,
    PositionOutOfBounds { position: usize, hand_size: usize },
    NoHintsLeft,
    HintTargetIsSelf { target: PlayerId },
    UnknownHintTarget { target: PlayerId },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameAlreadyOver => write!(f, "move requested after the game ended"),
            MoveError::PositionOutOfBounds {
                position,
                hand_size,
            } => write!(f, "position {position} out of bounds for hand of {hand_size}"),
            MoveError::NoHintsLeft => write!(f, "hint requested with no hint tokens left"),
            MoveError::HintTargetIsSelf { target } => {
                write!(f, "{target} attempted to hint their own hand")
            }
            MoveError::UnknownHintTarget { target } => {
                write!(f, "hint targeted nonexistent {target}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The authoritative game: owns the deck, board, hands and counters, drives
/// the agents one move at a time, and detects the end of the game.
pub struct Game {
    rules: Rules,
    agents: Vec<Box<dyn Agent>>,
    logger: Box<dyn GameLog>,
    verbose: bool,
    seed: Option<u64>,
    deck: Deck,
    board: BoardState,
    hands: Vec<Hand>,
    hands_history: Vec<Vec<Hand>>,
    played: Vec<ResolvedCard>,
    discarded: Vec<ResolvedCard>,
    hints: u8,
    lives: u8,
    score: u32,
    current_turn: u32,
    player_turn: PlayerId,
    final_lap: Option<PlayerId>,
    game_over: bool,
    ended_by_timeout: bool,
}

impl Game {
    pub fn new(
        agents: Vec<Box<dyn Agent>>,
        logger: Box<dyn GameLog>,
        verbose: bool,
    ) -> Result<Self, SetupError> {
        let seed: u64 = rand::random();
        Self::with_seed(agents, logger, verbose, seed)
    }

    pub fn with_seed(
        agents: Vec<Box<dyn Agent>>,
        logger: Box<dyn GameLog>,
        verbose: bool,
        seed: u64,
    ) -> Result<Self, SetupError> {
        let deck = Deck::shuffled_with_seed(seed);
        Self::from_parts(agents, logger, verbose, deck, Some(seed))
    }

    /// Start from a caller-supplied deck, drawn from back to front. Meant
    /// for constructed scenarios; regular games go through [`Game::with_seed`].
    pub fn from_deck(
        agents: Vec<Box<dyn Agent>>,
        logger: Box<dyn GameLog>,
        verbose: bool,
        deck: Deck,
    ) -> Result<Self, SetupError> {
        Self::from_parts(agents, logger, verbose, deck, None)
    }

    fn from_parts(
        agents: Vec<Box<dyn Agent>>,
        logger: Box<dyn GameLog>,
        verbose: bool,
        deck: Deck,
        seed: Option<u64>,
    ) -> Result<Self, SetupError> {
        let rules = Rules::BASE;
        let player_count = agents.len();
        if !rules.player_count_allowed(player_count) {
            return Err(SetupError::PlayerCount {
                actual: player_count,
                min: rules.min_players,
                max: rules.max_players,
            });
        }

        let mut game = Self {
            rules,
            agents,
            logger,
            verbose,
            seed,
            deck,
            board: BoardState::new(),
            hands: Vec::new(),
            hands_history: Vec::new(),
            played: Vec::new(),
            discarded: Vec::new(),
            hints: rules.max_hints,
            lives: rules.lives,
            score: 0,
            current_turn: 0,
            player_turn: PlayerId::new(0),
            final_lap: None,
            game_over: false,
            ended_by_timeout: false,
        };
        game.prepare();
        Ok(game)
    }

    fn prepare(&mut self) {
        let player_count = self.agents.len();
        let hand_size = self.rules.hand_size(player_count);

        for player_index in 0..player_count {
            let player = PlayerId::new(player_index);
            let mut hand = Hand::new(player);
            for _ in 0..hand_size {
                let card = self
                    .deck
                    .draw()
                    .expect("deck holds enough cards for the deal");
                hand.add(HeldCard::new(card, self.current_turn));
            }
            self.hands.push(hand);
        }

        self.hands_history.push(self.hands.clone());

        self.info("Preparing game... Done.");
        self.info("Hands have been dealt as follows:");
        if self.verbose {
            let lines: Vec<String> = self
                .hands
                .iter()
                .map(|hand| format!("{}: {hand}", hand.player()))
                .collect();
            for line in &lines {
                self.info(line);
            }
        }
        self.info("Beginning game...");
    }

    fn info(&mut self, message: &str) {
        if self.verbose {
            self.logger.record(message);
        }
    }

    /// Run one full turn: project the view, obtain the acting agent's move,
    /// validate it against the true state, resolve it, and advance the turn.
    pub fn make_move(&mut self) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameAlreadyOver);
        }
        debug_assert!(self.lives > 0);
        debug_assert!(self.hints <= self.rules.max_hints);

        let mover = self.player_turn;
        let view = RoundInfo::project(self, mover);
        let chosen = self.agents[mover.index()].decide(&view);
        self.ensure_legal(mover, &chosen)?;

        let mut vacated = None;
        match chosen {
            Move::Play { position } => {
                self.resolve_play(mover, position);
                vacated = Some(position);
            }
            Move::Discard { position } => {
                self.resolve_discard(mover, position);
                vacated = Some(position);
            }
            Move::Hint { target, hint } => self.resolve_hint(mover, target, hint),
        }

        debug_assert_eq!(self.score, self.board.score());
        if self.lives == 0 || self.score == self.rules.max_score() {
            self.game_over = true;
        }

        if let Some(position) = vacated {
            self.refill(mover, position);
        }

        if self.game_over {
            self.announce_result();
        } else {
            self.hands_history.push(self.hands.clone());
            if let Move::Hint { target, .. } = chosen {
                self.echo_knowledge(target);
            }
        }

        self.player_turn = mover.next(self.agents.len());
        if self.player_turn.index() == 0 {
            self.current_turn += 1;
        }

        Ok(())
    }

    /// Drive the game until a terminal state is reached.
    pub fn play_to_end(&mut self) -> Result<GameOutcome, MoveError> {
        while !self.game_over {
            self.make_move()?;
        }
        Ok(self
            .outcome()
            .expect("outcome exists once the game is over"))
    }

    fn ensure_legal(&self, mover: PlayerId, chosen: &Move) -> Result<(), MoveError> {
        match *chosen {
            Move::Play { position } | Move::Discard { position } => {
                let hand_size = self.hands[mover.index()].len();
                if position >= hand_size {
                    return Err(MoveError::PositionOutOfBounds {
                        position,
                        hand_size,
                    });
                }
            }
            Move::Hint { target, .. } => {
                if self.hints == 0 {
                    return Err(MoveError::NoHintsLeft);
                }
                if target == mover {
                    return Err(MoveError::HintTargetIsSelf { target });
                }
                if target.index() >= self.hands.len() {
                    return Err(MoveError::UnknownHintTarget { target });
                }
            }
        }
        Ok(())
    }

    fn resolve_play(&mut self, mover: PlayerId, position: usize) {
        let held = self.hands[mover.index()]
            .take(position)
            .expect("position validated before resolution");

        if self.board.is_playable(held.card) {
            self.board.advance(held.card.suit);
            self.score += 1;
            self.played.push(ResolvedCard::new(
                held.card,
                held.drawn_on_turn,
                self.current_turn,
                CardFate::Played,
            ));
            self.info(&format!("{mover} correctly played {}", held.card));
        } else {
            self.lives -= 1;
            self.discarded.push(ResolvedCard::new(
                held.card,
                held.drawn_on_turn,
                self.current_turn,
                CardFate::Misplayed,
            ));
            self.info(&format!(
                "{mover} misplayed {}, {} lives remaining",
                held.card, self.lives
            ));
        }
    }

    fn resolve_discard(&mut self, mover: PlayerId, position: usize) {
        let held = self.hands[mover.index()]
            .take(position)
            .expect("position validated before resolution");

        self.discarded.push(ResolvedCard::new(
            held.card,
            held.drawn_on_turn,
            self.current_turn,
            CardFate::Discarded,
        ));
        self.hints = (self.hints + 1).min(self.rules.max_hints);
        self.info(&format!(
            "{mover} discarded {}, the number of hints is currently {}",
            held.card, self.hints
        ));
    }

    fn resolve_hint(&mut self, mover: PlayerId, target: PlayerId, hint: Hint) {
        for held in self.hands[target.index()].iter_mut() {
            let card = held.card;
            held.knowledge.absorb(hint, card);
        }
        self.hints -= 1;
        self.info(&format!(
            "{mover} hinted {hint} to {target}, {} hints remaining",
            self.hints
        ));
    }

    /// Draw into the vacated position, or start/settle the final lap when
    /// the deck is out.
    fn refill(&mut self, mover: PlayerId, position: usize) {
        match self.deck.draw() {
            Some(card) => {
                if self.deck.is_empty() {
                    self.info("Last card has been drawn, each player gets one more turn");
                }
                let held = HeldCard::new(card, self.current_turn);
                self.hands[mover.index()].replace_at(position, held);
            }
            None => match self.final_lap {
                None => self.final_lap = Some(mover.previous(self.agents.len())),
                Some(marker) if marker == mover => {
                    self.game_over = true;
                    self.ended_by_timeout = true;
                }
                Some(_) => {}
            },
        }
    }

    fn announce_result(&mut self) {
        if self.score == self.rules.max_score() {
            self.info("Perfect victory!");
        } else if self.ended_by_timeout {
            self.info(&format!(
                "No cards left in the deck! Total points: {}",
                self.score
            ));
        } else {
            self.info(&format!("Game over! Total points: {}", self.score));
        }
    }

    fn echo_knowledge(&mut self, target: PlayerId) {
        if !self.verbose {
            return;
        }
        let rendered: Vec<String> = self.hands[target.index()]
            .current_knowledge()
            .iter()
            .map(|knowledge| knowledge.to_string())
            .collect();
        let line = format!("Current knowledge of {target}: [{}]", rendered.join(" "));
        self.info(&line);
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.game_over {
            return None;
        }
        if self.score == self.rules.max_score() {
            Some(GameOutcome::Perfect)
        } else if self.lives == 0 {
            Some(GameOutcome::LifeLoss)
        } else {
            Some(GameOutcome::Timeout)
        }
    }

    /// The acting player's snapshot for the upcoming move.
    pub fn current_view(&self) -> RoundInfo {
        RoundInfo::project(self, self.player_turn)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn player_count(&self) -> usize {
        self.agents.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn hints(&self) -> u8 {
        self.hints
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn player_turn(&self) -> PlayerId {
        self.player_turn
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    pub fn board(&self) -> BoardState {
        self.board
    }

    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.hands.get(player.index())
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn played(&self) -> &[ResolvedCard] {
        &self.played
    }

    pub fn discarded(&self) -> &[ResolvedCard] {
        &self.discarded
    }

    pub fn hands_history(&self) -> &[Vec<Hand>] {
        &self.hands_history
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, GameOutcome, MoveError, SetupError};
    use crate::game::agent::Agent;
    use crate::game::log::NullLog;
    use crate::game::moves::Move;
    use crate::game::view::RoundInfo;
    use crate::model::card::{Card, CardFate};
    use crate::model::deck::Deck;
    use crate::model::knowledge::Hint;
    use crate::model::player::PlayerId;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use std::collections::VecDeque;

    struct Scripted {
        moves: VecDeque<Move>,
    }

    impl Scripted {
        fn new(moves: impl IntoIterator<Item = Move>) -> Box<Self> {
            Box::new(Self {
                moves: moves.into_iter().collect(),
            })
        }
    }

    impl Agent for Scripted {
        fn decide(&mut self, _view: &RoundInfo) -> Move {
            self.moves.pop_front().expect("script covers every turn")
        }
    }

    struct AlwaysDiscard;

    impl Agent for AlwaysDiscard {
        fn decide(&mut self, _view: &RoundInfo) -> Move {
            Move::Discard { position: 0 }
        }
    }

    fn scripted_game(scripts: Vec<Vec<Move>>, deck: Deck) -> Game {
        let agents: Vec<Box<dyn Agent>> = scripts.into_iter().map(|s| Scripted::new(s) as _).collect();
        Game::from_deck(agents, Box::new(NullLog), false, deck).unwrap()
    }

    /// Deal from an unshuffled full deck with two players: the back of the
    /// deck is the white suit, so player 1 receives [5W 4W 4W 3W 3W] and
    /// player 2 receives [2W 2W 1W 1W 1W].
    fn two_player_full_deck(p0: Vec<Move>, p1: Vec<Move>) -> Game {
        scripted_game(vec![p0, p1], Deck::full())
    }

    #[test]
    fn setup_deals_hands_and_counters() {
        let agents: Vec<Box<dyn Agent>> =
            vec![Box::new(AlwaysDiscard), Box::new(AlwaysDiscard), Box::new(AlwaysDiscard)];
        let game = Game::with_seed(agents, Box::new(NullLog), false, 11).unwrap();

        assert_eq!(game.player_count(), 3);
        assert_eq!(game.deck_size(), 50 - 15);
        for player_index in 0..3 {
            assert_eq!(game.hand(PlayerId::new(player_index)).unwrap().len(), 5);
        }
        assert_eq!(game.hints(), 8);
        assert_eq!(game.lives(), 3);
        assert_eq!(game.score(), 0);
        assert_eq!(game.current_turn(), 0);
        assert_eq!(game.player_turn(), PlayerId::new(0));
        assert_eq!(game.hands_history().len(), 1);
        assert!(!game.is_game_over());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn four_players_get_four_cards() {
        let agents: Vec<Box<dyn Agent>> = (0..4).map(|_| Box::new(AlwaysDiscard) as _).collect();
        let game = Game::with_seed(agents, Box::new(NullLog), false, 11).unwrap();
        assert_eq!(game.deck_size(), 50 - 16);
        for hand in game.hands() {
            assert_eq!(hand.len(), 4);
        }
    }

    #[test]
    fn player_count_out_of_bounds_is_a_setup_error() {
        let one: Vec<Box<dyn Agent>> = vec![Box::new(AlwaysDiscard)];
        assert_eq!(
            Game::with_seed(one, Box::new(NullLog), false, 1).err(),
            Some(SetupError::PlayerCount {
                actual: 1,
                min: 2,
                max: 5
            })
        );

        let six: Vec<Box<dyn Agent>> = (0..6).map(|_| Box::new(AlwaysDiscard) as _).collect();
        assert!(Game::with_seed(six, Box::new(NullLog), false, 1).is_err());
    }

    #[test]
    fn seeded_deals_are_reproducible() {
        let make = || {
            let agents: Vec<Box<dyn Agent>> =
                vec![Box::new(AlwaysDiscard), Box::new(AlwaysDiscard)];
            Game::with_seed(agents, Box::new(NullLog), false, 99).unwrap()
        };
        let game_a = make();
        let game_b = make();
        assert_eq!(game_a.hands(), game_b.hands());
    }

    #[test]
    fn correct_play_advances_board_and_score() {
        let mut game = two_player_full_deck(
            vec![Move::Hint {
                target: PlayerId::new(1),
                hint: Hint::Rank(Rank::One),
            }],
            vec![Move::Play { position: 2 }],
        );

        game.make_move().unwrap();
        assert_eq!(game.hints(), 7);

        game.make_move().unwrap();
        assert_eq!(game.score(), 1);
        assert_eq!(game.board().progress(Suit::White), 1);
        assert_eq!(game.board().score(), game.score());
        assert_eq!(game.played().len(), 1);
        assert_eq!(game.played()[0].card, Card::new(Rank::One, Suit::White));
        assert_eq!(game.played()[0].fate, CardFate::Played);
        // refill keeps the hand at full size while the deck lasts
        assert_eq!(game.hand(PlayerId::new(1)).unwrap().len(), 5);
        assert_eq!(game.deck_size(), 39);
    }

    #[test]
    fn rank_hint_marks_matching_and_non_matching_cards() {
        let mut game = two_player_full_deck(
            vec![Move::Hint {
                target: PlayerId::new(1),
                hint: Hint::Rank(Rank::One),
            }],
            vec![],
        );

        game.make_move().unwrap();

        let hand = game.hand(PlayerId::new(1)).unwrap();
        for (position, held) in hand.iter().enumerate() {
            let knowledge = held.knowledge;
            if position >= 2 {
                assert_eq!(knowledge.known_rank(), Some(Rank::One));
            } else {
                assert!(!knowledge.allows_rank(Rank::One));
                assert_eq!(knowledge.known_rank(), None);
            }
            // suit knowledge untouched by a rank hint
            assert_eq!(knowledge.known_suit(), None);
        }
    }

    #[test]
    fn misplay_costs_a_life_and_lands_in_discards() {
        let mut game = two_player_full_deck(vec![Move::Play { position: 0 }], vec![]);

        game.make_move().unwrap();
        assert_eq!(game.lives(), 2);
        assert_eq!(game.score(), 0);
        assert_eq!(game.discarded().len(), 1);
        assert_eq!(game.discarded()[0].card, Card::new(Rank::Five, Suit::White));
        assert_eq!(game.discarded()[0].fate, CardFate::Misplayed);
        assert!(game.discarded()[0].counts_as_discard());
        // the replacement draw takes the vacated position
        let refilled = game.hand(PlayerId::new(0)).unwrap().slot(0).unwrap();
        assert_eq!(refilled.card, Card::new(Rank::Five, Suit::Yellow));
        assert!(!game.is_game_over());
    }

    #[test]
    fn third_misplay_ends_the_game_as_life_loss() {
        let mut game = two_player_full_deck(
            vec![Move::Play { position: 0 }, Move::Play { position: 0 }],
            vec![Move::Play { position: 0 }],
        );

        game.make_move().unwrap(); // 5W misplay, lives 2
        game.make_move().unwrap(); // 2W misplay, lives 1
        game.make_move().unwrap(); // 5Y misplay, lives 0
        assert_eq!(game.lives(), 0);
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(GameOutcome::LifeLoss));
        assert_eq!(game.discarded().len(), 3);
    }

    #[test]
    fn discard_returns_a_hint_token_up_to_the_cap() {
        let mut game = two_player_full_deck(
            vec![
                Move::Hint {
                    target: PlayerId::new(1),
                    hint: Hint::Suit(Suit::White),
                },
                Move::Discard { position: 0 },
            ],
            vec![Move::Discard { position: 0 }],
        );

        game.make_move().unwrap();
        assert_eq!(game.hints(), 7);
        game.make_move().unwrap(); // player 2 discards, token returns
        assert_eq!(game.hints(), 8);
        game.make_move().unwrap(); // discard at the cap stays at the cap
        assert_eq!(game.hints(), 8);
        assert_eq!(game.discarded().len(), 2);
        assert_eq!(game.discarded()[0].fate, CardFate::Discarded);
    }

    #[test]
    fn hint_with_no_tokens_is_a_contract_violation() {
        let hint_each_other = |target: usize| Move::Hint {
            target: PlayerId::new(target),
            hint: Hint::Suit(Suit::White),
        };
        let mut game = two_player_full_deck(
            vec![hint_each_other(1); 5],
            vec![hint_each_other(0); 4],
        );

        for _ in 0..8 {
            game.make_move().unwrap();
        }
        assert_eq!(game.hints(), 0);
        assert_eq!(game.make_move(), Err(MoveError::NoHintsLeft));
        // the violation is not absorbed into game state
        assert_eq!(game.hints(), 0);
        assert!(!game.is_game_over());
    }

    #[test]
    fn hinting_yourself_is_a_contract_violation() {
        let mut game = two_player_full_deck(
            vec![Move::Hint {
                target: PlayerId::new(0),
                hint: Hint::Rank(Rank::One),
            }],
            vec![],
        );
        assert_eq!(
            game.make_move(),
            Err(MoveError::HintTargetIsSelf {
                target: PlayerId::new(0)
            })
        );
    }

    #[test]
    fn hinting_a_nonexistent_player_is_a_contract_violation() {
        let mut game = two_player_full_deck(
            vec![Move::Hint {
                target: PlayerId::new(5),
                hint: Hint::Rank(Rank::One),
            }],
            vec![],
        );
        assert_eq!(
            game.make_move(),
            Err(MoveError::UnknownHintTarget {
                target: PlayerId::new(5)
            })
        );
    }

    #[test]
    fn out_of_bounds_position_is_a_contract_violation() {
        let mut game = two_player_full_deck(vec![Move::Play { position: 5 }], vec![]);
        assert_eq!(
            game.make_move(),
            Err(MoveError::PositionOutOfBounds {
                position: 5,
                hand_size: 5
            })
        );
    }

    #[test]
    fn moving_after_game_over_is_rejected() {
        let mut game = two_player_full_deck(
            vec![Move::Play { position: 0 }, Move::Play { position: 0 }],
            vec![Move::Play { position: 0 }],
        );
        for _ in 0..3 {
            game.make_move().unwrap();
        }
        assert!(game.is_game_over());
        assert_eq!(game.make_move(), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn turn_counters_advance_per_round() {
        let agents: Vec<Box<dyn Agent>> =
            vec![Box::new(AlwaysDiscard), Box::new(AlwaysDiscard), Box::new(AlwaysDiscard)];
        let mut game = Game::with_seed(agents, Box::new(NullLog), false, 5).unwrap();

        game.make_move().unwrap();
        assert_eq!(game.player_turn(), PlayerId::new(1));
        assert_eq!(game.current_turn(), 0);
        game.make_move().unwrap();
        game.make_move().unwrap();
        assert_eq!(game.player_turn(), PlayerId::new(0));
        assert_eq!(game.current_turn(), 1);
    }

    #[test]
    fn history_grows_by_one_snapshot_per_resolved_move() {
        let mut game = two_player_full_deck(
            vec![Move::Discard { position: 0 }],
            vec![Move::Discard { position: 0 }],
        );
        assert_eq!(game.hands_history().len(), 1);
        game.make_move().unwrap();
        game.make_move().unwrap();
        assert_eq!(game.hands_history().len(), 3);
    }
}
