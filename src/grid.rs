/// Width of the playfield in cells.
pub const WIDTH: i32 = 80;
/// Height of the playfield in cells.
pub const HEIGHT: i32 = 25;

/// The playfield: a fixed 80×25 grid of bytes holding both the program
/// and its mutable data space.
///
/// Every cell starts as a space. The grid is a torus for the instruction
/// pointer, but a bounded window for the `g`/`p` opcodes: reads outside
/// it yield a space, and writes outside it are silently ignored.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; WIDTH as usize]; HEIGHT as usize],
}

impl Grid {
    /// Creates an empty grid, every cell a space.
    pub fn new() -> Self {
        Self {
            cells: [[b' '; WIDTH as usize]; HEIGHT as usize],
        }
    }

    /// Loads program text into a fresh grid, row by row.
    ///
    /// A newline resets the column and advances the row; it is never
    /// stored as a cell. Bytes past column `WIDTH - 1` of a row, and rows
    /// past `HEIGHT - 1`, are silently discarded. Every other byte is
    /// stored verbatim, carriage returns and tabs included.
    pub fn from_source(source: &[u8]) -> Self {
        let mut grid = Self::new();
        let mut x = 0;
        let mut y = 0;
        for &byte in source {
            if byte == b'\n' {
                x = 0;
                if y < HEIGHT {
                    y += 1;
                }
            } else if in_range(x, y) {
                grid.cells[y as usize][x as usize] = byte;
                x += 1;
            }
        }
        grid
    }

    /// Returns the byte at `(x, y)`, or a space if out of range.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        if in_range(x, y) {
            self.cells[y as usize][x as usize]
        } else {
            b' '
        }
    }

    /// Stores `value`, truncated to a byte, at `(x, y)`. Out-of-range
    /// writes are silently ignored.
    pub fn put(&mut self, value: i32, x: i32, y: i32) {
        if in_range(x, y) {
            self.cells[y as usize][x as usize] = value as u8;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns whether `(x, y)` addresses a cell of the grid.
fn in_range(x: i32, y: i32) -> bool {
    x >= 0 && x < WIDTH && y >= 0 && y < HEIGHT
}
