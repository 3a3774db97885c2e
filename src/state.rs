use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::snake::{Direction, Snake};
use crate::Coords;

pub const SPAWN_CELL: Coords = (1, 1);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    Over,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing moved: the run is over or the snake has no heading yet.
    Idle,
    Moved { head: Coords, ate: bool },
    Crashed { head: Coords },
}

/// Authoritative simulation state for one run of the game.
#[derive(Debug)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    pending: Option<Direction>,
    food: Coords,
    score: u32,
    status: Status,
    rng: StdRng,
}

impl GameState {
    /// Starts a fresh run. Without a seed the food positions come from entropy.
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        let mut state = GameState::build(grid, Snake::new(SPAWN_CELL), SPAWN_CELL, seed);
        state.restart();
        state
    }

    /// Builds a running game from an arbitrary snake and food position. Every
    /// segment and the food must lie on the grid.
    pub fn with_snake(grid: Grid, snake: Snake, food: Coords, seed: Option<u64>) -> Result<Self> {
        for pos in snake.body().iter().copied().chain(std::iter::once(food)) {
            check_on_grid(&grid, pos)?;
        }
        Ok(GameState::build(grid, snake, food, seed))
    }

    fn build(grid: Grid, snake: Snake, food: Coords, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        GameState { grid, snake, pending: None, food, score: 0, status: Status::Running, rng }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    /// Heading that will be active on the next tick.
    pub fn heading(&self) -> Option<Direction> {
        self.pending.or_else(|| self.snake.heading())
    }

    pub fn place_food(&mut self, pos: Coords) -> Result<()> {
        check_on_grid(&self.grid, pos)?;
        self.food = pos;
        Ok(())
    }

    /// Buffers a heading change for the next tick. A request for the direct
    /// opposite of the heading active on that tick is rejected.
    pub fn set_heading(&mut self, requested: Direction) -> bool {
        if self.heading() == Some(requested.opposite()) {
            return false;
        }

        self.pending = Some(requested);
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Idle;
        }

        if let Some(dir) = self.pending.take() {
            self.snake.steer(dir);
        }

        let head = match self.snake.move_step(&self.grid) {
            Some(head) => head,
            None => return TickOutcome::Idle,
        };

        let ate = head == self.food;
        if ate {
            self.score += 1;
            self.snake.grow();
            // The new spot may land on the snake or repeat the old one.
            self.food = self.grid.random_cell(&mut self.rng);
            debug!(score = self.score, food = ?self.food, "food eaten");
        }

        if self.snake.bites_itself() {
            self.status = Status::Over;
            info!(score = self.score, ?head, "game over");
            return TickOutcome::Crashed { head };
        }

        TickOutcome::Moved { head, ate }
    }

    pub fn restart(&mut self) {
        self.snake = Snake::new(SPAWN_CELL);
        self.pending = None;
        self.score = 0;
        self.status = Status::Running;
        self.food = self.grid.random_cell(&mut self.rng);
        info!(food = ?self.food, "new run");
    }
}

fn check_on_grid(grid: &Grid, pos: Coords) -> Result<()> {
    if !grid.contains(pos) {
        return Err(Error::OffGrid { pos, width: grid.width(), height: grid.height() });
    }
    Ok(())
}
