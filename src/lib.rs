pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod score;
pub mod snake;
pub mod state;
pub mod term;
pub mod ticker;

pub type TermInt = u16;
pub type Coords = (u16, u16);
