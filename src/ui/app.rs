use crate::ai::Agent;
use crate::game::{
    Action, ActionError, GameState, Orientation, Player, Position, Status, Wall, BOARD_SIZE,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// What the cursor currently selects: a destination cell or a wall anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    MovePawn,
    PlaceWall,
}

pub struct App {
    game: GameState,
    cursor: Position,
    mode: Mode,
    orientation: Orientation,
    message: Option<String>,
    /// Computer opponent seated as Player Two, if any.
    opponent: Option<Box<dyn Agent>>,
    should_quit: bool,
}

impl App {
    pub fn new(opponent: Option<Box<dyn Agent>>) -> Self {
        let mut game = GameState::new();
        game.start();
        App {
            game,
            cursor: Position::new(4, 1),
            mode: Mode::MovePawn,
            orientation: Orientation::Horizontal,
            message: None,
            opponent,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor.x > 0 {
                    self.cursor.x -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor.x < BOARD_SIZE - 1 {
                    self.cursor.x += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor.y < BOARD_SIZE - 1 {
                    self.cursor.y += 1;
                }
            }
            KeyCode::Down => {
                if self.cursor.y > 0 {
                    self.cursor.y -= 1;
                }
            }
            KeyCode::Char('w') => {
                self.mode = match self.mode {
                    Mode::MovePawn => Mode::PlaceWall,
                    Mode::PlaceWall => Mode::MovePawn,
                };
            }
            KeyCode::Char('o') => {
                self.orientation = match self.orientation {
                    Orientation::Horizontal => Orientation::Vertical,
                    Orientation::Vertical => Orientation::Horizontal,
                };
            }
            KeyCode::Char('u') => {
                self.undo();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.confirm();
            }
            KeyCode::Char('r') => {
                let opponent = self.opponent.take();
                *self = App::new(opponent);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Apply the action under the cursor for the side to move.
    fn confirm(&mut self) {
        if self.game.status() == Status::Finished {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let player = self.game.current_player();
        let action = match self.mode {
            Mode::MovePawn => Action::Move(self.cursor),
            Mode::PlaceWall => Action::PlaceWall(Wall {
                x: self.cursor.x,
                y: self.cursor.y,
                orientation: self.orientation,
            }),
        };

        match self.game.apply(player, action) {
            Ok(()) => {
                self.mode = Mode::MovePawn;
                if let Some(winner) = self.game.winner() {
                    self.message = Some(format!("{} wins!", winner.name()));
                } else {
                    self.opponent_turn();
                }
            }
            Err(ActionError::IllegalMove) => {
                self.message = Some("Can't move there!".to_string());
            }
            Err(ActionError::IllegalWall) => {
                self.message = Some("Can't place a wall there!".to_string());
            }
            Err(ActionError::NoWallsRemaining) => {
                self.message = Some("No walls left!".to_string());
            }
            Err(ActionError::NotYourTurn) | Err(ActionError::NotPlaying) => {
                self.message = Some("Not your turn!".to_string());
            }
        }
    }

    /// Let the computer opponent answer, if one is seated and it is to move.
    fn opponent_turn(&mut self) {
        let Some(agent) = self.opponent.as_mut() else {
            return;
        };
        if self.game.status() != Status::Playing || self.game.current_player() != Player::Two {
            return;
        }
        let action = agent.select_action(&self.game, Player::Two);
        if self.game.apply(Player::Two, action).is_ok() {
            if let Some(winner) = self.game.winner() {
                self.message = Some(format!("{} wins!", winner.name()));
            }
        }
    }

    fn undo(&mut self) {
        if !self.game.undo() {
            self.message = Some("Nothing to undo!".to_string());
            return;
        }
        // Against the computer, also take back the human action so the
        // human is to move again.
        if self.opponent.is_some() && self.game.current_player() == Player::Two {
            self.game.undo();
        }
        self.message = Some("Move undone.".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.cursor,
            self.mode,
            self.orientation,
            &self.message,
        );
    }
}
