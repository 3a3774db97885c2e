use std::time::Duration;

/// Fixed-period driver: the loop sleeps one frame at a time and the game
/// advances once every `frames_per_step` frames.
#[derive(Debug, Clone)]
pub struct Ticker {
    frame: Duration,
    frames_per_step: u32,
    frames_until_step: u32,
}

impl Ticker {
    pub fn new(frame: Duration, frames_per_step: u32) -> Self {
        let frames_per_step = frames_per_step.max(1);
        Ticker { frame, frames_per_step, frames_until_step: frames_per_step }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame
    }

    pub fn step_interval(&self) -> Duration {
        self.frame * self.frames_per_step
    }

    /// Counts one frame. Returns true when a game step is due.
    pub fn frame(&mut self) -> bool {
        self.frames_until_step -= 1;
        if self.frames_until_step == 0 {
            self.frames_until_step = self.frames_per_step;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.frames_until_step = self.frames_per_step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_every_n_frames() {
        let mut ticker = Ticker::new(Duration::from_millis(10), 6);
        let fired: Vec<bool> = (0..12).map(|_| ticker.frame()).collect();
        let expected: Vec<bool> = (1..=12).map(|i| i % 6 == 0).collect();
        assert_eq!(fired, expected);
        assert_eq!(ticker.step_interval(), Duration::from_millis(60));
    }

    #[test]
    fn zero_frames_per_step_fires_every_frame() {
        let mut ticker = Ticker::new(Duration::from_millis(10), 0);
        assert!(ticker.frame());
        assert!(ticker.frame());
    }

    #[test]
    fn reset_restarts_the_countdown() {
        let mut ticker = Ticker::new(Duration::from_millis(10), 3);
        ticker.frame();
        ticker.frame();
        ticker.reset();
        assert!(!ticker.frame());
        assert!(!ticker.frame());
        assert!(ticker.frame());
    }
}
