use crate::game::{GameState, Orientation, Player, Position, Status, Wall, BOARD_SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::Mode;

pub fn render(
    frame: &mut Frame,
    game: &GameState,
    cursor: Position,
    mode: Mode,
    orientation: Orientation,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(19),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, cursor, mode, orientation, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, mode, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &GameState, area: ratatui::layout::Rect) {
    let current = game.current_player();
    let color = match current {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    };

    let status = if game.status() == Status::Finished {
        "Game Over".to_string()
    } else {
        format!(
            "Current: {}  |  Walls  P1: {}  P2: {}",
            current.name(),
            game.pawn(Player::One).walls_remaining,
            game.pawn(Player::Two).walls_remaining,
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Quoridor"));

    frame.render_widget(header, area);
}

/// The two cell pairs a candidate wall would separate, for the placement
/// preview overlay.
fn preview_pairs(wall: Wall) -> Vec<(Position, Position)> {
    match wall.orientation {
        Orientation::Horizontal => {
            if wall.y == 0 {
                return Vec::new();
            }
            (wall.x..=wall.x + 1)
                .filter(|&x| x < BOARD_SIZE)
                .map(|x| (Position::new(x, wall.y - 1), Position::new(x, wall.y)))
                .collect()
        }
        Orientation::Vertical => {
            if wall.x == 0 {
                return Vec::new();
            }
            (wall.y..=wall.y + 1)
                .filter(|&y| y < BOARD_SIZE)
                .map(|y| (Position::new(wall.x - 1, y), Position::new(wall.x, y)))
                .collect()
        }
    }
}

fn render_board(
    frame: &mut Frame,
    game: &GameState,
    cursor: Position,
    mode: Mode,
    orientation: Orientation,
    area: ratatui::layout::Rect,
) {
    let legal_moves = if mode == Mode::MovePawn && game.status() == Status::Playing {
        game.legal_moves(game.current_player())
    } else {
        Vec::new()
    };

    let preview = if mode == Mode::PlaceWall {
        let wall = Wall {
            x: cursor.x,
            y: cursor.y,
            orientation,
        };
        Some((preview_pairs(wall), game.is_legal_wall(wall)))
    } else {
        None
    };

    let previewed = |a: Position, b: Position| -> Option<bool> {
        preview.as_ref().and_then(|(pairs, legal)| {
            pairs
                .iter()
                .any(|&(pa, pb)| (pa, pb) == (a, b) || (pb, pa) == (a, b))
                .then_some(*legal)
        })
    };

    let mut lines = Vec::new();

    // Player Two's side renders on top, so rows count down.
    for y in (0..BOARD_SIZE).rev() {
        let mut spans = vec![Span::raw(format!(" {} ", y))];
        for x in 0..BOARD_SIZE {
            let pos = Position::new(x, y);
            spans.push(cell_span(game, pos, cursor, mode, &legal_moves));
            if x + 1 < BOARD_SIZE {
                let right = Position::new(x + 1, y);
                let span = match previewed(pos, right) {
                    Some(legal) => Span::styled("┃", preview_style(legal)),
                    None if game.board().is_wall_between(pos, right) => {
                        Span::styled("┃", Style::default().fg(Color::White))
                    }
                    None => Span::raw(" "),
                };
                spans.push(span);
            }
        }
        lines.push(Line::from(spans));

        if y > 0 {
            let mut gap = vec![Span::raw("   ")];
            for x in 0..BOARD_SIZE {
                let upper = Position::new(x, y);
                let lower = Position::new(x, y - 1);
                let span = match previewed(lower, upper) {
                    Some(legal) => Span::styled("━━━", preview_style(legal)),
                    None if game.board().is_wall_between(lower, upper) => {
                        Span::styled("━━━", Style::default().fg(Color::White))
                    }
                    None => Span::raw("   "),
                };
                gap.push(span);
                if x + 1 < BOARD_SIZE {
                    gap.push(Span::raw(" "));
                }
            }
            lines.push(Line::from(gap));
        }
    }

    // Column labels
    let mut labels = vec![Span::raw("   ")];
    for x in 0..BOARD_SIZE {
        labels.push(Span::raw(format!(" {} ", x)));
        if x + 1 < BOARD_SIZE {
            labels.push(Span::raw(" "));
        }
    }
    lines.push(Line::from(labels));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn cell_span(
    game: &GameState,
    pos: Position,
    cursor: Position,
    mode: Mode,
    legal_moves: &[Position],
) -> Span<'static> {
    let (symbol, color) = if game.pawn(Player::One).position == pos {
        (" 1 ", Color::Red)
    } else if game.pawn(Player::Two).position == pos {
        (" 2 ", Color::Yellow)
    } else if legal_moves.contains(&pos) {
        (" o ", Color::Green)
    } else {
        (" . ", Color::DarkGray)
    };

    let mut style = Style::default().fg(color);
    if mode == Mode::MovePawn && pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn preview_style(legal: bool) -> Style {
    let color = if legal { Color::Green } else { Color::Red };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, mode: Mode, area: ratatui::layout::Rect) {
    let mode_name = match mode {
        Mode::MovePawn => "Move",
        Mode::PlaceWall => "Wall",
    };
    let line1 = Line::from("Arrows: Cursor  |  Enter: Confirm  |  W: Move/Wall  |  O: Orientation");
    let line2 = Line::from(format!(
        "Mode: {}  |  U: Undo  |  R: Restart  |  Q: Quit",
        mode_name
    ));

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
