mod render_loop;

pub use render_loop::{Playback, RenderLoop, DEFAULT_SPEED, SPEED_MAX};
