use rand::Rng;

use crate::grid::{HEIGHT, WIDTH};

/// A cardinal heading for the instruction pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Right,
    Down,
    Left,
    Up,
}

impl Heading {
    /// The 180° opposite of this heading.
    pub fn reflected(self) -> Heading {
        match self {
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Up => Heading::Down,
        }
    }

    /// One of the four headings, chosen uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Heading {
        match rng.gen_range(0..4) {
            0 => Heading::Right,
            1 => Heading::Down,
            2 => Heading::Left,
            _ => Heading::Up,
        }
    }
}

/// The instruction pointer: a grid position plus a heading.
///
/// Starts at the origin heading right. Stepping wraps at the grid edges,
/// so the playfield behaves as a torus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Director {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

impl Director {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            heading: Heading::Right,
        }
    }

    /// Moves one cell along the current heading, wrapping at the edges.
    pub fn step(&mut self) {
        match self.heading {
            Heading::Right => self.x = if self.x < WIDTH - 1 { self.x + 1 } else { 0 },
            Heading::Down => self.y = if self.y < HEIGHT - 1 { self.y + 1 } else { 0 },
            Heading::Left => self.x = if self.x > 0 { self.x - 1 } else { WIDTH - 1 },
            Heading::Up => self.y = if self.y > 0 { self.y - 1 } else { HEIGHT - 1 },
        }
    }

    /// Points the director at a new heading.
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Reverses the heading: how exhausted input reports itself.
    pub fn reflect(&mut self) {
        self.heading = self.heading.reflected();
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}
