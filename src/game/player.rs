use super::board::Position;

/// Player identity. One starts on the bottom row and races toward `y = 8`;
/// Two starts on the top row and races toward `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index, also the on-wire player id.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::One),
            1 => Some(Player::Two),
            _ => None,
        }
    }

    /// The row this player must reach to win.
    pub fn goal_row(self) -> u8 {
        match self {
            Player::One => 8,
            Player::Two => 0,
        }
    }

    /// Home cell at game start.
    pub fn start_position(self) -> Position {
        match self {
            Player::One => Position::new(4, 0),
            Player::Two => Position::new(4, 8),
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_index_roundtrip() {
        assert_eq!(Player::from_index(Player::One.index()), Some(Player::One));
        assert_eq!(Player::from_index(Player::Two.index()), Some(Player::Two));
        assert_eq!(Player::from_index(2), None);
    }

    #[test]
    fn test_goal_rows_oppose_start_rows() {
        assert_eq!(Player::One.start_position().y, 0);
        assert_eq!(Player::One.goal_row(), 8);
        assert_eq!(Player::Two.start_position().y, 8);
        assert_eq!(Player::Two.goal_row(), 0);
    }
}
