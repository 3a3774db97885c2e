use crate::error::Result;
use crate::state::GameState;
use crate::Coords;

pub const SNAKE_BODY_CHAR: char = '█';
pub const APPLE_CHAR: char = 'O';
pub const DEAD_SNAKE_CHAR: char = 'X';

/// Terminal columns used by one grid cell, so cells look roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Everything a renderer needs for one picture of the game.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub game: &'a GameState,
    pub best: u32,
    pub paused: bool,
}

impl<'a> Frame<'a> {
    pub fn new(game: &'a GameState, best: u32, paused: bool) -> Self {
        Frame { game, best, paused }
    }

    pub fn status_line(&self) -> String {
        format!("Score: {}   Best: {}", self.game.score(), self.best)
    }
}

pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Lays the board out as text rows, one row per grid line.
pub fn compose(frame: &Frame<'_>) -> Vec<String> {
    let game = frame.game;
    let grid = game.grid();
    let (w, h) = (grid.width() as usize, grid.height() as usize);
    let mut cells = vec![' '; w * h];
    let mut put = |(x, y): Coords, ch: char| cells[y as usize * w + x as usize] = ch;

    put(game.food(), APPLE_CHAR);

    let snake = game.snake();
    let (head_ch, body_ch) = if game.is_over() {
        (DEAD_SNAKE_CHAR, DEAD_SNAKE_CHAR)
    } else {
        (snake.head_char(), SNAKE_BODY_CHAR)
    };
    // Tail first so the head wins when segments overlap.
    for pos in snake.body().iter().skip(1).rev() {
        put(*pos, body_ch);
    }
    put(snake.head(), head_ch);

    cells
        .chunks(w)
        .map(|row| {
            row.iter()
                .flat_map(|ch| {
                    let fill = if *ch == SNAKE_BODY_CHAR { SNAKE_BODY_CHAR } else { ' ' };
                    std::iter::once(*ch).chain(std::iter::repeat(fill).take(CELL_WIDTH as usize - 1))
                })
                .collect()
        })
        .collect()
}

pub fn game_over_lines(frame: &Frame<'_>) -> Vec<String> {
    vec![
        "Game over!".to_string(),
        format!("Score: {}", frame.game.score()),
        format!("Best: {}", frame.best),
        String::new(),
        "Press R or Enter to play again,".to_string(),
        "or Q to quit.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::snake::{Direction, Snake};

    fn game(segments: Vec<Coords>, food: Coords) -> GameState {
        let grid = Grid::new(4, 3).unwrap();
        let snake = Snake::from_segments(segments, Some(Direction::Right)).unwrap();
        GameState::with_snake(grid, snake, food, Some(1)).unwrap()
    }

    #[test]
    fn head_is_drawn_apart_from_body() {
        let game = game(vec![(2, 1), (1, 1)], (3, 2));
        let rows = compose(&Frame::new(&game, 0, false));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "        ");
        assert_eq!(rows[1], "  ██>   ");
        assert_eq!(rows[2], "      O ");
    }

    #[test]
    fn status_line_shows_score_and_best() {
        let game = game(vec![(0, 0)], (3, 2));
        assert_eq!(Frame::new(&game, 10, false).status_line(), "Score: 0   Best: 10");
    }
}
