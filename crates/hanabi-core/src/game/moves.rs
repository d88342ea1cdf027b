use crate::model::knowledge::Hint;
use crate::model::player::PlayerId;
use core::fmt;

/// A player's chosen move. Each variant carries only the data that choice
/// needs, so an illegal payload shape cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Play { position: usize },
    Discard { position: usize },
    Hint { target: PlayerId, hint: Hint },
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play { position } => write!(f, "play position {position}"),
            Move::Discard { position } => write!(f, "discard position {position}"),
            Move::Hint { target, hint } => write!(f, "hint {hint} to {target}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::model::knowledge::Hint;
    use crate::model::player::PlayerId;
    use crate::model::rank::Rank;

    #[test]
    fn display_describes_each_choice() {
        assert_eq!(Move::Play { position: 2 }.to_string(), "play position 2");
        assert_eq!(
            Move::Hint {
                target: PlayerId::new(1),
                hint: Hint::Rank(Rank::Three),
            }
            .to_string(),
            "hint rank 3 to Player #2"
        );
    }
}
