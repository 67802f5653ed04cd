use serde::Serialize;

use super::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::A => Cell::A,
            Player::B => Cell::B,
        }
    }

    /// Signed label used on the host boundary: `+1` for A, `-1` for B.
    pub fn sign(self) -> i8 {
        self.to_cell().sign()
    }

    /// Inverse of [`Player::sign`]. Zero and anything else map to `None`.
    pub fn from_sign(sign: i8) -> Option<Player> {
        match sign {
            1 => Some(Player::A),
            -1 => Some(Player::B),
            _ => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::A.other(), Player::B);
        assert_eq!(Player::B.other(), Player::A);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::A.name(), "A");
        assert_eq!(Player::B.name(), "B");
    }

    #[test]
    fn test_sign_roundtrip() {
        assert_eq!(Player::A.sign(), 1);
        assert_eq!(Player::B.sign(), -1);
        assert_eq!(Player::from_sign(1), Some(Player::A));
        assert_eq!(Player::from_sign(-1), Some(Player::B));
        assert_eq!(Player::from_sign(0), None);
    }
}
