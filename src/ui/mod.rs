mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const PANEL_PADDING: f32 = 12.0;

/// Logical pixel size of one cell; the lattice adds one pixel between cells.
pub const CELL_SIZE: f32 = 8.0;

/// Vertical offset of the speed slider inside the panel.
pub const SLIDER_Y: f32 = 230.0;

/// Get the X position where the control panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn board_area_height() -> f32 {
    screen_height()
}

/// Create the panel buttons for this frame.
///
/// Rebuilt every frame so the play/pause label always reflects the current
/// playback state and the layout follows window resizes.
pub fn create_buttons(playing: bool) -> Vec<Button> {
    let x = panel_x() + PANEL_PADDING;
    let width = PANEL_WIDTH - 2.0 * PANEL_PADDING;

    vec![
        Button::new(x, 20.0, width, BUTTON_HEIGHT, if playing { "Pause" } else { "Play" }),
        Button::new(x, 66.0, width, BUTTON_HEIGHT, "Clear"),
        Button::new(x, 112.0, width, BUTTON_HEIGHT, "Random"),
        Button::new(x, 158.0, width, BUTTON_HEIGHT, "Help"),
    ]
}
