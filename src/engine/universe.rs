//! Packed bit-grid universe with a toroidal B3/S23 rule.
//! Each cell is one bit, so the whole default 64x64 grid fits in 512 bytes
//! and the renderer can walk the raw byte view directly.

use rand::Rng;
use thiserror::Error;

use super::{presets, Pattern, Simulation};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{width}x{height} cells do not pack into whole bytes (width * height must be divisible by 8)")]
    MisalignedDimensions { width: u32, height: u32 },
}

/// The automaton state: dimensions plus one bit per cell, row-major.
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

/// Set or clear one bit in a packed cell buffer.
#[inline]
fn write_bit(cells: &mut [u8], idx: usize, alive: bool) {
    let mask = 1u8 << (idx & 7);
    if alive {
        cells[idx >> 3] |= mask;
    } else {
        cells[idx >> 3] &= !mask;
    }
}

impl Universe {
    /// Create an all-dead universe.
    ///
    /// Rejects dimensions whose cell count is not a whole number of bytes:
    /// the packed view handed to the renderer must align exactly, with no
    /// padding byte to special-case.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        let cell_count = width as usize * height as usize;
        if cell_count % 8 != 0 {
            return Err(EngineError::MisalignedDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![0u8; cell_count / 8],
        })
    }

    #[inline]
    fn bit_index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    /// Get cell state at (row, col). Coordinates must be in range.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> bool {
        let idx = self.bit_index(row, col);
        self.cells[idx >> 3] & (1 << (idx & 7)) != 0
    }

    /// Set cell state at (row, col). Coordinates must be in range.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, alive: bool) {
        let idx = self.bit_index(row, col);
        write_bit(&mut self.cells, idx, alive);
    }

    /// Count total alive cells.
    pub fn population(&self) -> u32 {
        self.cells.iter().map(|b| b.count_ones()).sum()
    }

    /// Count the eight neighbors of (row, col) with toroidal wrapping.
    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        let mut count = 0u8;

        for dr in [self.height - 1, 0, 1] {
            for dc in [self.width - 1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let nr = (row + dr) % self.height;
                let nc = (col + dc) % self.width;
                count += self.get(nr, nc) as u8;
            }
        }

        count
    }

    /// Stamp a pattern's alive cells anchored at (row, col), wrapping
    /// toroidally at the grid edges.
    fn stamp(&mut self, pattern: &Pattern, row: u32, col: u32) {
        for &(dr, dc) in pattern.cells {
            let r = (row + dr) % self.height;
            let c = (col + dc) % self.width;
            self.set(r, c, true);
        }
    }
}

impl Simulation for Universe {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn tick(&mut self) {
        let mut next = self.cells.clone();

        for row in 0..self.height {
            for col in 0..self.width {
                let alive = self.get(row, col);
                let neighbors = self.live_neighbor_count(row, col);

                // B3/S23: born with exactly 3 neighbors, survives with 2 or 3
                let next_alive = matches!((alive, neighbors), (true, 2 | 3) | (false, 3));
                write_bit(&mut next, self.bit_index(row, col), next_alive);
            }
        }

        self.cells = next;
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        let idx = self.bit_index(row, col);
        self.cells[idx >> 3] ^= 1 << (idx & 7);
    }

    fn add_spaceship(&mut self, row: u32, col: u32) {
        self.stamp(&presets::spaceship(), row, col);
    }

    fn add_pulsar(&mut self, row: u32, col: u32) {
        self.stamp(&presets::pulsar(), row, col);
    }

    fn random_cells(&mut self) {
        let mut rng = rand::rng();
        for byte in &mut self.cells {
            // Independent coin flip per bit, ~50% density
            *byte = rng.random::<u8>();
        }
    }

    fn clear_cells(&mut self) {
        self.cells.fill(0);
    }
}
