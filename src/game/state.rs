use super::board::{Board, Position, Wall, BOARD_SIZE, WALLS_PER_PLAYER};
use super::player::Player;

/// One player's piece state: where the pawn stands and how many walls are
/// left to place. Wall counts only ever decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pawn {
    pub position: Position,
    pub walls_remaining: u8,
}

/// Session status. The engine only accepts actions while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Waiting,
    Playing,
    Paused,
    Finished,
}

/// A turn action: move the pawn or spend a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Position),
    PlaceWall(Wall),
}

/// An applied action, as recorded in the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub action: Action,
    /// Source cell for pawn moves; `None` for wall placements.
    pub from: Option<Position>,
}

/// Why an action was rejected. All rejections are recoverable; the caller
/// surfaces a message and the state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("game is not in progress")]
    NotPlaying,

    #[error("not this player's turn")]
    NotYourTurn,

    #[error("illegal move")]
    IllegalMove,

    #[error("illegal wall placement")]
    IllegalWall,

    #[error("no walls remaining")]
    NoWallsRemaining,
}

/// Restore point for undo. Board and pawns are plain value types, so a
/// snapshot is a structural copy, not a serialization round-trip.
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    board: Board,
    pawns: [Pawn; 2],
    current_player: Player,
    history_len: usize,
}

const MAX_UNDOS: usize = 3;

/// Full game state: board, both pawns, whose turn it is, and the move log.
///
/// All mutation goes through [`GameState::apply`], which gates on the
/// matching legality predicate. The predicates themselves are pure and may
/// be called for any player at any time (the UI queries them for highlights,
/// the AI for search).
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    pawns: [Pawn; 2],
    current_player: Player,
    status: Status,
    history: Vec<MoveRecord>,
    undo_stack: Vec<Snapshot>,
    winner: Option<Player>,
}

impl GameState {
    /// Create a fresh game: pawns on their home cells, ten walls each,
    /// empty board, waiting to start.
    pub fn new() -> Self {
        let pawn = |player: Player| Pawn {
            position: player.start_position(),
            walls_remaining: WALLS_PER_PLAYER,
        };
        GameState {
            board: Board::new(),
            pawns: [pawn(Player::One), pawn(Player::Two)],
            current_player: Player::One,
            status: Status::Waiting,
            history: Vec::new(),
            undo_stack: Vec::new(),
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pawn(&self, player: Player) -> &Pawn {
        &self.pawns[player.index()]
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn start(&mut self) {
        if self.status == Status::Waiting {
            self.status = Status::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.status == Status::Playing {
            self.status = Status::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == Status::Paused {
            self.status = Status::Playing;
        }
    }

    /// Whether either pawn stands on `pos`.
    pub fn occupied(&self, pos: Position) -> bool {
        self.pawns.iter().any(|p| p.position == pos)
    }

    /// True iff the player's pawn stands on their goal row.
    pub fn check_win(&self, player: Player) -> bool {
        self.pawn(player).position.y == player.goal_row()
    }

    /// Shortest path length from the player's pawn to their goal row.
    pub fn distance_to_goal(&self, player: Player) -> Option<u32> {
        self.board
            .distance_to_goal(self.pawn(player).position, player.goal_row())
    }

    pub fn has_path_to_goal(&self, player: Player) -> bool {
        self.board
            .has_path_to_goal(self.pawn(player).position, player.goal_row())
    }

    /// Pure legality predicate for a pawn move from the player's current
    /// cell to `to`: orthogonal step, straight jump over the opponent, or
    /// the diagonal fallback when the straight jump is obstructed.
    pub fn is_legal_move(&self, player: Player, to: Position) -> bool {
        if !to.in_bounds() || self.occupied(to) {
            return false;
        }

        let from = self.pawn(player).position;
        let dx = to.x.abs_diff(from.x);
        let dy = to.y.abs_diff(from.y);

        match (dx, dy) {
            // Orthogonal step.
            (1, 0) | (0, 1) => !self.board.is_wall_between(from, to),

            // Straight jump over an adjacent opponent pawn.
            (2, 0) | (0, 2) => {
                let mid = Position::new((from.x + to.x) / 2, (from.y + to.y) / 2);
                self.pawn(player.other()).position == mid
                    && !self.board.is_wall_between(from, mid)
                    && !self.board.is_wall_between(mid, to)
            }

            // Diagonal jump: only when the straight jump over the adjacent
            // opponent is unavailable, and only onto a cell beside them.
            (1, 1) => {
                let opp = self.pawn(player.other()).position;
                let adjacent = opp.x.abs_diff(from.x) + opp.y.abs_diff(from.y) == 1;
                if !adjacent {
                    return false;
                }
                if to.x.abs_diff(opp.x) + to.y.abs_diff(opp.y) != 1 {
                    return false;
                }
                if self.straight_jump_available(from, opp) {
                    return false;
                }
                !self.board.is_wall_between(from, opp) && !self.board.is_wall_between(opp, to)
            }

            _ => false,
        }
    }

    /// Whether the straight two-square jump over `opp` has a landing cell:
    /// on the board, unoccupied, and not wall-blocked behind the opponent.
    fn straight_jump_available(&self, from: Position, opp: Position) -> bool {
        let lx = from.x as i8 + 2 * (opp.x as i8 - from.x as i8);
        let ly = from.y as i8 + 2 * (opp.y as i8 - from.y as i8);
        if lx < 0 || lx >= BOARD_SIZE as i8 || ly < 0 || ly >= BOARD_SIZE as i8 {
            return false;
        }
        let landing = Position::new(lx as u8, ly as u8);
        !self.occupied(landing) && !self.board.is_wall_between(opp, landing)
    }

    /// Every cell the player could legally move to. Brute-force over all 81
    /// cells; the board is small enough that this beats direction-based
    /// generation on simplicity.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        let mut moves = Vec::new();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let to = Position::new(x, y);
                if self.is_legal_move(player, to) {
                    moves.push(to);
                }
            }
        }
        moves
    }

    /// Pure legality predicate for a wall placement: bounds, overlap,
    /// crossing-intersection, and the path rule. The path rule places the
    /// wall on a scratch copy and requires that both players keep a BFS
    /// path to their goal row; the real board is never touched.
    pub fn is_legal_wall(&self, wall: Wall) -> bool {
        if !self.board.wall_in_bounds(wall)
            || self.board.wall_overlaps(wall)
            || self.board.wall_intersects(wall)
        {
            return false;
        }

        let mut scratch = self.board;
        scratch.place_wall(wall);
        [Player::One, Player::Two].into_iter().all(|p| {
            scratch.has_path_to_goal(self.pawn(p).position, p.goal_row())
        })
    }

    /// Every wall placement that is currently legal. Not player-specific:
    /// the path rule already protects both players, and the wall budget is
    /// the caller's check.
    pub fn legal_walls(&self) -> Vec<Wall> {
        let mut walls = Vec::new();
        for x in 0..=7 {
            for y in 1..=8 {
                let wall = Wall::horizontal(x, y);
                if self.is_legal_wall(wall) {
                    walls.push(wall);
                }
            }
        }
        for x in 1..=8 {
            for y in 0..=7 {
                let wall = Wall::vertical(x, y);
                if self.is_legal_wall(wall) {
                    walls.push(wall);
                }
            }
        }
        walls
    }

    /// Apply an action for `player`, gated by the legality predicates.
    /// On success the turn passes to the other player, unless the move won
    /// the game, in which case the state becomes `Finished`.
    pub fn apply(&mut self, player: Player, action: Action) -> Result<(), ActionError> {
        if self.status != Status::Playing {
            return Err(ActionError::NotPlaying);
        }
        if player != self.current_player {
            return Err(ActionError::NotYourTurn);
        }

        match action {
            Action::Move(to) => {
                if !self.is_legal_move(player, to) {
                    return Err(ActionError::IllegalMove);
                }
                self.push_undo();
                let from = self.pawns[player.index()].position;
                self.pawns[player.index()].position = to;
                self.history.push(MoveRecord {
                    player,
                    action,
                    from: Some(from),
                });
                if self.check_win(player) {
                    self.status = Status::Finished;
                    self.winner = Some(player);
                } else {
                    self.current_player = player.other();
                }
            }
            Action::PlaceWall(wall) => {
                if self.pawns[player.index()].walls_remaining == 0 {
                    return Err(ActionError::NoWallsRemaining);
                }
                if !self.is_legal_wall(wall) {
                    return Err(ActionError::IllegalWall);
                }
                self.push_undo();
                self.board.place_wall(wall);
                self.pawns[player.index()].walls_remaining -= 1;
                self.history.push(MoveRecord {
                    player,
                    action,
                    from: None,
                });
                self.current_player = player.other();
            }
        }

        Ok(())
    }

    fn push_undo(&mut self) {
        if self.undo_stack.len() >= MAX_UNDOS {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(Snapshot {
            board: self.board,
            pawns: self.pawns,
            current_player: self.current_player,
            history_len: self.history.len(),
        });
    }

    /// Revert the most recent applied action. Returns false when there is
    /// nothing to undo or the game is not in progress.
    pub fn undo(&mut self) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.board = snapshot.board;
        self.pawns = snapshot.pawns;
        self.current_player = snapshot.current_player;
        self.history.truncate(snapshot.history_len);
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
