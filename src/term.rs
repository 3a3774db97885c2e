use crate::error::{Error, Result};
use crate::render::{self, Frame, Renderer, CELL_WIDTH};
use crate::{Coords, TermInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
    borders_drawn: bool,
    board: Coords,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        let stdout = stdout();
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager {
            width,
            height,
            stdout,
            screen,
            current_msg: None,
            borders_drawn: false,
            board: (width, height),
        })
    }

    /// Board plus border plus the status line. Saturates for boards no
    /// terminal could hold.
    pub fn required_size(board: Coords) -> Coords {
        (
            board.0.saturating_mul(CELL_WIDTH).saturating_add(2),
            board.1.saturating_add(3),
        )
    }

    fn fits(have: Coords, board: Coords) -> Result<()> {
        let need = Self::required_size(board);
        if have.0 < need.0 || have.1 < need.1 {
            return Err(Error::TerminalTooSmall { have, need });
        }
        Ok(())
    }

    pub fn ensure_fits(&self, board: Coords) -> Result<()> {
        Self::fits((self.width, self.height), board)
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn draw_borders(&mut self, size: Coords) -> Result<()> {
        let (width, height) = size;
        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    pub fn show_message(&mut self, lines: &[String]) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.board.0 / 2, self.board.1 / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        // Blank rows above and below the text
        for y in [top_left.1, top_left.1 + msg_height - 1] {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, y), ' ')?;
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch)?;
            }
        }

        self.current_msg = Some(Message::new(msg_width, msg_height, top_left));
        self.flush()
    }

    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };
        let top_left = msg.top_left();

        // Put back what the message covered
        for y_diff in 0..msg.height() {
            for x_diff in 0..msg.width() {
                let (x, y) = (top_left.0 + x_diff, top_left.1 + y_diff);
                if x >= self.width || y >= self.height {
                    continue;
                }
                let ch = self.screen[self.width as usize * y as usize + x as usize];
                self.print_at_no_save((x, y), ch)?;
            }
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        if pos.0 >= self.width || pos.1 >= self.height {
            return Ok(());
        }
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        self.screen[self.width as usize * pos.1 as usize + pos.0 as usize] = ch;
        Ok(())
    }

    pub fn print_str_at(&mut self, pos: Coords, s: &str) -> Result<()> {
        for (i, ch) in s.chars().enumerate() {
            self.print_at((pos.0 + i as TermInt, pos.1), ch)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        self.borders_drawn = false;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at_no_save(&mut self, pos: Coords, ch: char) -> Result<()> {
        // Messages are overlays: leave the screen buffer alone so hiding the
        // message can restore what was underneath.
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }
}

impl Renderer for TermManager {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        let grid = frame.game.grid();
        let (outer_w, outer_h) = Self::required_size((grid.width(), grid.height()));

        if !self.borders_drawn {
            self.draw_borders((outer_w, outer_h - 1))?;
            self.borders_drawn = true;
            self.board = (outer_w, outer_h - 1);
        }

        self.hide_message()?;

        for (y, row) in render::compose(frame).iter().enumerate() {
            self.print_str_at((1, y as TermInt + 1), row)?;
        }

        let status = format!("{:<width$}", frame.status_line(), width = outer_w as usize);
        self.print_str_at((0, outer_h - 1), &status)?;

        if frame.game.is_over() {
            self.show_message(&render::game_over_lines(frame))?;
        } else if frame.paused {
            self.show_message(&[
                "Paused".to_string(),
                "Press Esc to resume".to_string(),
                "or Q to quit".to_string(),
            ])?;
        }

        self.flush()
    }
}

impl Message {
    pub fn new(width: TermInt, height: TermInt, top_left: Coords) -> Self {
        Message { width, height, top_left }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn top_left(&self) -> Coords {
        self.top_left
    }
}
