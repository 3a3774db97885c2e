use rand::Rng;

use crate::error::{Error, Result};
use crate::Coords;

/// Toroidal playfield. Leaving one edge re-enters from the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(Error::InvalidGrid { width, height });
        }
        Ok(Grid { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, pos: Coords) -> bool {
        pos.0 < self.width && pos.1 < self.height
    }

    /// Moves `pos` by `delta` and wraps the result back onto the grid.
    pub fn step(&self, pos: Coords, delta: (i32, i32)) -> Coords {
        let x = (pos.0 as i32 + delta.0).rem_euclid(self.width as i32);
        let y = (pos.1 as i32 + delta.1).rem_euclid(self.height as i32);
        (x as u16, y as u16)
    }

    /// Independent uniform draws for x and y, so every cell has the same odds.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Coords {
        (rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }
}
