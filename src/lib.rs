// Engine layer - simulation contract and packed-bit universe
pub mod engine;

// Application layer - playback state and frame throttling
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Playback, RenderLoop};
pub use engine::{EngineError, Pattern, Simulation, Universe};
pub use input::{CanvasGeometry, InputController, InputEvent, Modifiers};
