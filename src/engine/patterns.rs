/// A stampable pattern: alive-cell offsets relative to an anchor cell.
#[derive(Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    /// (row, col) offsets of the alive cells.
    pub cells: &'static [(u32, u32)],
}

/// The fixed patterns the click modifiers stamp onto the grid.
pub mod presets {
    use super::Pattern;

    /// Glider - the smallest spaceship, travels diagonally with period 4.
    ///
    /// ```text
    /// .#.
    /// ..#
    /// ###
    /// ```
    pub fn spaceship() -> Pattern {
        Pattern {
            name: "Glider",
            cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        }
    }

    /// Pulsar - 13x13 oscillator with period 3, 48 alive cells.
    pub fn pulsar() -> Pattern {
        Pattern {
            name: "Pulsar",
            cells: &[
                // Top arm
                (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
                // Upper sides
                (2, 0), (2, 5), (2, 7), (2, 12),
                (3, 0), (3, 5), (3, 7), (3, 12),
                (4, 0), (4, 5), (4, 7), (4, 12),
                // Inner rows
                (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
                (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
                // Lower sides
                (8, 0), (8, 5), (8, 7), (8, 12),
                (9, 0), (9, 5), (9, 7), (9, 12),
                (10, 0), (10, 5), (10, 7), (10, 12),
                // Bottom arm
                (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
            ],
        }
    }
}
