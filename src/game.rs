use std::thread::sleep;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::input::{action_for, Action};
use crate::render::{Frame, Renderer};
use crate::score::Scoreboard;
use crate::state::{GameState, TickOutcome};
use crate::term::TermManager;
use crate::ticker::Ticker;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    Continue,
    Redraw,
    Quit,
}

/// Single owner of everything the loop mutates: the game, the best score,
/// the tick schedule and the pause flag.
pub struct Session {
    game: GameState,
    scoreboard: Scoreboard,
    ticker: Ticker,
    paused: bool,
}

impl Session {
    pub fn new(game: GameState, scoreboard: Scoreboard, ticker: Ticker) -> Self {
        Session { game, scoreboard, ticker, paused: false }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame::new(&self.game, self.scoreboard.best(), self.paused)
    }

    pub fn handle(&mut self, action: Action) -> Control {
        match action {
            Action::Turn(dir) => {
                if !self.game.set_heading(dir) {
                    debug!(?dir, "turn would reverse the snake, ignored");
                }
                Control::Continue
            }
            Action::Restart => {
                self.game.restart();
                self.ticker.reset();
                self.paused = false;
                Control::Redraw
            }
            Action::TogglePause => {
                if self.game.is_over() {
                    return Control::Continue;
                }
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
                Control::Redraw
            }
            Action::Quit => Control::Quit,
        }
    }

    /// Runs one game step and records the score.
    pub fn step(&mut self) -> TickOutcome {
        let outcome = self.game.tick();
        if let TickOutcome::Moved { ate: true, .. } | TickOutcome::Crashed { .. } = outcome {
            self.scoreboard.record(self.game.score());
        }
        outcome
    }

    /// Counts one frame of the fixed-rate clock and steps when one is due.
    pub fn advance_frame(&mut self) -> Option<TickOutcome> {
        if self.paused || !self.ticker.frame() {
            return None;
        }
        Some(self.step())
    }
}

pub struct SnakeGame {
    term: TermManager,
    session: Session,
}

impl SnakeGame {
    pub fn new(term: TermManager, session: Session) -> Self {
        SnakeGame { term, session }
    }

    /// Sets up the terminal and plays until the player quits. The terminal
    /// is restored on every path out once setup has started.
    pub fn run(&mut self) -> Result<()> {
        self.initialize()?;
        let res = self.play();
        first_error(res, self.shutdown())
    }

    pub fn initialize(&mut self) -> Result<()> {
        let grid = *self.session.game().grid();
        self.term.ensure_fits((grid.width(), grid.height()))?;

        let res = self.term.setup().and_then(|_| self.term.clear());
        if res.is_err() {
            return first_error(res, self.shutdown());
        }
        Ok(())
    }

    /// Puts the terminal back the way it was found.
    pub fn shutdown(&mut self) -> Result<()> {
        self.term.restore()
    }

    pub fn play(&mut self) -> Result<()> {
        info!(
            step_ms = self.session.ticker().step_interval().as_millis() as u64,
            best = self.session.scoreboard().best(),
            "starting game loop"
        );
        self.term.draw(&self.session.frame())?;

        loop {
            sleep(self.session.ticker().frame_interval());

            let mut redraw = false;
            for key_ev in self.term.read_key_events_queue()? {
                if let Some(action) = action_for(&key_ev) {
                    match self.session.handle(action) {
                        Control::Quit => return Ok(()),
                        Control::Redraw => redraw = true,
                        Control::Continue => {}
                    }
                }
            }

            match self.session.advance_frame() {
                Some(TickOutcome::Idle) | None => {}
                Some(_) => redraw = true,
            }

            if redraw {
                self.term.draw(&self.session.frame())?;
            }
        }
    }
}

/// Reports the error from the work itself ahead of one from cleaning up.
fn first_error<T>(res: Result<T>, cleanup: Result<()>) -> Result<T> {
    match (res, cleanup) {
        (Err(e), Err(cleanup_err)) => {
            warn!(error = %cleanup_err, "terminal restore failed after an earlier error");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(_), Err(e)) => Err(e),
        (Ok(value), Ok(())) => Ok(value),
    }
}
