mod patterns;
mod universe;

pub use patterns::{presets, Pattern};
pub use universe::{EngineError, Universe};

/// Contract between the presentation layer and the simulation engine.
///
/// The renderer and input controller only ever talk to the engine through
/// this trait, so the automaton rule and pattern shapes stay encapsulated
/// behind it.
pub trait Simulation {
    /// Grid width in cells. Fixed for the lifetime of the handle.
    fn width(&self) -> u32;

    /// Grid height in cells. Fixed for the lifetime of the handle.
    fn height(&self) -> u32;

    /// Read-only view over the packed bit-grid, `width * height / 8` bytes.
    ///
    /// Bit layout: index = row * width + col, byte = index >> 3,
    /// mask = 1 << (index & 7). The borrow is invalidated by any mutating
    /// call, which the borrow checker enforces.
    fn cells(&self) -> &[u8];

    /// Advance the automaton one generation (toroidal neighbor rule).
    fn tick(&mut self);

    /// Flip one cell's alive/dead state.
    fn toggle_cell(&mut self, row: u32, col: u32);

    /// Stamp a glider anchored at the given cell, wrapping at the edges.
    fn add_spaceship(&mut self, row: u32, col: u32);

    /// Stamp a pulsar anchored at the given cell, wrapping at the edges.
    fn add_pulsar(&mut self, row: u32, col: u32);

    /// Reinitialize every cell with a ~50% alive/dead coin flip.
    fn random_cells(&mut self);

    /// Set every cell to dead.
    fn clear_cells(&mut self);
}
