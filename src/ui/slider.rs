use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 4.0;
const KNOB_RADIUS: f32 = 7.0;

/// Discrete horizontal slider with a draggable knob.
///
/// Values run 0..=max; the knob snaps to the nearest step while dragging
/// and `update` reports only actual value changes.
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    max: u32,
    value: u32,
    dragging: bool,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, max: u32, value: u32) -> Self {
        Self {
            x,
            y,
            width,
            max,
            value: value.min(max),
            dragging: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Move the slider for responsive panel layout.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Snap a horizontal offset along the track to the nearest step.
    fn value_for_offset(width: f32, max: u32, offset: f32) -> u32 {
        let fraction = (offset / width).clamp(0.0, 1.0);
        (fraction * max as f32).round() as u32
    }

    fn knob_x(&self) -> f32 {
        self.x + self.width * self.value as f32 / self.max as f32
    }

    fn hit(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && mouse_pos.1 >= self.y - KNOB_RADIUS
            && mouse_pos.1 <= self.y + KNOB_RADIUS
    }

    /// Handle mouse input for this frame. Returns true when the value
    /// changed, so the caller can emit a single speed-change event.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) && self.hit(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }

        if !self.dragging {
            return false;
        }

        let new_value = Self::value_for_offset(self.width, self.max, mouse_pos.0 - self.x);
        if new_value != self.value {
            self.value = new_value;
            return true;
        }
        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(60, 56, 54, 255),
        );

        // Filled part of the track up to the knob
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.knob_x() - self.x,
            TRACK_HEIGHT,
            Color::from_rgba(146, 131, 116, 255),
        );

        let knob_color = if self.dragging || self.hit(mouse_pos) {
            Color::from_rgba(251, 241, 199, 255)
        } else {
            Color::from_rgba(189, 174, 147, 255)
        };
        draw_circle(self.knob_x(), self.y, KNOB_RADIUS, knob_color);
    }
}
