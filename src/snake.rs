use std::collections::VecDeque;

use crate::grid::Grid;
use crate::Coords;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Body is stored head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coords>,
    heading: Option<Direction>,
    target_len: usize,
}

impl Snake {
    pub fn new(pos: Coords) -> Self {
        Snake { body: VecDeque::from(vec![pos]), heading: None, target_len: 1 }
    }

    /// Builds a snake from segments listed head first. The target length is
    /// the number of segments given. Returns `None` for an empty body.
    pub fn from_segments<I>(segments: I, heading: Option<Direction>) -> Option<Self>
    where
        I: IntoIterator<Item = Coords>,
    {
        let body: VecDeque<Coords> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        let target_len = body.len();
        Some(Snake { body, heading, target_len })
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub(crate) fn steer(&mut self, direction: Direction) {
        self.heading = Some(direction);
    }

    /// Lays a new head one step along the heading and drops the tail once the
    /// body is longer than the target. Returns `None` while there is no heading.
    pub fn move_step(&mut self, grid: &Grid) -> Option<Coords> {
        let heading = self.heading?;
        let new_head = grid.step(self.head(), heading.delta());

        self.body.push_front(new_head);
        if self.body.len() > self.target_len {
            self.body.pop_back();
        }

        Some(new_head)
    }

    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|pos| *pos == head)
    }

    pub fn head_char(&self) -> char {
        match self.heading {
            Some(Up) => '^',
            Some(Down) => 'v',
            Some(Left) => '<',
            Some(Right) => '>',
            None => '@',
        }
    }
}
