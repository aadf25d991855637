use std::io::{self, Read, Write};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::director::{Director, Heading};
use crate::grid::Grid;
use crate::input::InputReader;
use crate::stack::Stack;

/// Whether a session is still executing or has reached `@`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
}

/// A running Befunge-93 program: the grid, the stack, the instruction
/// pointer, and the I/O channels it talks through.
///
/// The session is generic over its input and output so tests can drive
/// it from in-memory buffers. Randomness for the `?` opcode comes from
/// a seeded generator, which makes runs reproducible.
pub struct Session<R, W> {
    pub grid: Grid,
    pub stack: Stack,
    pub director: Director,
    pub input: InputReader<R>,
    pub output: W,
    pub rng: SmallRng,
}

impl<R: Read, W: Write> Session<R, W> {
    pub fn new(grid: Grid, input: R, output: W, seed: u64) -> Self {
        Self {
            grid,
            stack: Stack::new(),
            director: Director::new(),
            input: InputReader::new(input),
            output,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Executes the instruction under the director and advances past it.
    ///
    /// Returns `Halted` for `@` and `Running` otherwise; I/O failures on
    /// the session's channels surface as errors. Bytes that are not
    /// instructions are skipped over.
    pub fn step(&mut self) -> io::Result<Status> {
        let op = self.grid.get(self.director.x, self.director.y);
        match op {
            b'0'..=b'9' => self.stack.push(i32::from(op - b'0')),
            b'+' => {
                let [a, b] = self.stack.pop_n();
                self.stack.push(a.wrapping_add(b));
            }
            b'-' => {
                let [a, b] = self.stack.pop_n();
                self.stack.push(a.wrapping_sub(b));
            }
            b'*' => {
                let [a, b] = self.stack.pop_n();
                self.stack.push(a.wrapping_mul(b));
            }
            b'/' => {
                let [a, b] = self.stack.pop_n();
                if b != 0 {
                    self.stack.push(a.wrapping_div(b));
                } else {
                    self.push_int_from_input()?;
                }
            }
            b'%' => {
                let [a, b] = self.stack.pop_n();
                if b != 0 {
                    self.stack.push(a.wrapping_rem(b));
                } else {
                    self.push_int_from_input()?;
                }
            }
            b'!' => {
                let [a] = self.stack.pop_n();
                self.stack.push((a == 0) as i32);
            }
            b'`' => {
                let [a, b] = self.stack.pop_n();
                self.stack.push((a > b) as i32);
            }
            b'>' => self.director.set_heading(Heading::Right),
            b'<' => self.director.set_heading(Heading::Left),
            b'^' => self.director.set_heading(Heading::Up),
            b'v' => self.director.set_heading(Heading::Down),
            b'?' => {
                let heading = Heading::random(&mut self.rng);
                self.director.set_heading(heading);
            }
            b'_' => {
                let [a] = self.stack.pop_n();
                let heading = if a != 0 { Heading::Left } else { Heading::Right };
                self.director.set_heading(heading);
            }
            b'|' => {
                let [a] = self.stack.pop_n();
                let heading = if a != 0 { Heading::Up } else { Heading::Down };
                self.director.set_heading(heading);
            }
            b'"' => self.read_string(),
            b':' => {
                let top = self.stack.peek();
                self.stack.push(top);
            }
            b'\\' => {
                let [a, b] = self.stack.pop_n();
                self.stack.push(b);
                self.stack.push(a);
            }
            b'$' => {
                self.stack.pop_n::<1>();
            }
            b'.' => {
                let [a] = self.stack.pop_n();
                write!(self.output, "{a} ")?;
                self.output.flush()?;
            }
            b',' => {
                let [a] = self.stack.pop_n();
                self.output.write_all(&[a as u8])?;
                self.output.flush()?;
            }
            b'#' => self.director.step(),
            b'g' => {
                let [x, y] = self.stack.pop_n();
                self.stack.push(i32::from(self.grid.get(x, y)));
            }
            b'p' => {
                let [value, x, y] = self.stack.pop_n();
                self.grid.put(value, x, y);
            }
            b'&' => self.push_int_from_input()?,
            b'~' => match self.input.read_byte()? {
                Some(byte) => self.stack.push(i32::from(byte)),
                None => self.director.reflect(),
            },
            b'@' => return Ok(Status::Halted),
            _ => {}
        }
        self.director.step();
        Ok(Status::Running)
    }

    /// Walks from the opening quote, pushing every byte until the next
    /// quote. Runs to completion within the step: string mode is not
    /// resumable. An unpaired quote closes on itself after one wrap of
    /// the grid, since the walk revisits its own cell.
    fn read_string(&mut self) {
        self.director.step();
        loop {
            let byte = self.grid.get(self.director.x, self.director.y);
            if byte == b'"' {
                break;
            }
            self.stack.push(i32::from(byte));
            self.director.step();
        }
    }

    /// Reads a decimal integer from input and pushes it, or reflects the
    /// director if input is exhausted.
    fn push_int_from_input(&mut self) -> io::Result<()> {
        match self.input.read_int()? {
            Some(value) => self.stack.push(value),
            None => self.director.reflect(),
        }
        Ok(())
    }

    /// Runs until the program halts. Never returns for a program with no
    /// reachable `@`; use [`Session::run_bounded`] when that matters.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == Status::Running {}
        Ok(())
    }

    /// Runs for at most `step_limit` steps, reporting whether the
    /// program halted within the bound.
    pub fn run_bounded(&mut self, step_limit: usize) -> io::Result<Status> {
        for _ in 0..step_limit {
            if self.step()? == Status::Halted {
                return Ok(Status::Halted);
            }
        }
        Ok(Status::Running)
    }
}
