use crate::application::RenderLoop;
use crate::engine::Simulation;
use crate::ui::CELL_SIZE;

/// Modifier keys held during a canvas click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

/// A discrete control event, decoupled from any windowing toolkit so the
/// controller can be driven directly in tests.
#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    /// Pointer click at window coordinates, inside the board area.
    CanvasClick { x: f32, y: f32, modifiers: Modifiers },
    PlayPause,
    Random,
    Clear,
    SpeedChange { value: u32 },
    Help,
}

/// Static help message shown by the help control.
pub const HELP_TEXT: &[&str] = &[
    "The grid is a torus: cells leaving one edge",
    "re-enter on the opposite edge.",
    "",
    "Click a cell to toggle it alive or dead.",
    "Ctrl/Cmd-click stamps a glider spaceship.",
    "Shift-click stamps a pulsar.",
    "",
    "Use the slider to change the simulation speed.",
];

/// Mapping between window coordinates and the logical canvas.
///
/// The logical canvas is `(CELL_SIZE + 1) * dim + 1` pixels per axis and is
/// drawn scaled into a display rectangle inside the window; clicks go
/// through the inverse scale before being divided down to a cell.
#[derive(Clone, Copy, Debug)]
pub struct CanvasGeometry {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub display_x: f32,
    pub display_y: f32,
    pub display_width: f32,
    pub display_height: f32,
}

impl CanvasGeometry {
    /// Logical canvas size for a grid: one pixel of lattice line around
    /// each CELL_SIZE-pixel cell, plus the closing line.
    pub fn canvas_size(cols: u32, rows: u32) -> (f32, f32) {
        (
            (CELL_SIZE + 1.0) * cols as f32 + 1.0,
            (CELL_SIZE + 1.0) * rows as f32 + 1.0,
        )
    }

    /// Fit the logical canvas into an area, preserving aspect ratio and
    /// centering.
    pub fn fit(cols: u32, rows: u32, area_x: f32, area_y: f32, area_w: f32, area_h: f32) -> Self {
        let (canvas_width, canvas_height) = Self::canvas_size(cols, rows);
        let scale = (area_w / canvas_width).min(area_h / canvas_height);
        let display_width = canvas_width * scale;
        let display_height = canvas_height * scale;

        Self {
            canvas_width,
            canvas_height,
            display_x: area_x + (area_w - display_width) / 2.0,
            display_y: area_y + (area_h - display_height) / 2.0,
            display_width,
            display_height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.display_x
            && x < self.display_x + self.display_width
            && y >= self.display_y
            && y < self.display_y + self.display_height
    }

    /// Window coordinates of a logical canvas point.
    pub fn to_screen(&self, canvas_x: f32, canvas_y: f32) -> (f32, f32) {
        (
            self.display_x + canvas_x * self.display_width / self.canvas_width,
            self.display_y + canvas_y * self.display_height / self.canvas_height,
        )
    }

    /// Display pixels per logical canvas pixel.
    pub fn scale(&self) -> f32 {
        self.display_width / self.canvas_width
    }

    /// Convert a window click to a (row, col) cell, clamped into range.
    ///
    /// Clicks on the border stroke or anywhere outside the grid still land
    /// on the nearest valid cell, so callers never see an out-of-range
    /// coordinate.
    pub fn to_cell(&self, x: f32, y: f32, rows: u32, cols: u32) -> (u32, u32) {
        let scale_x = self.canvas_width / self.display_width;
        let scale_y = self.canvas_height / self.display_height;

        let canvas_x = (x - self.display_x) * scale_x;
        let canvas_y = (y - self.display_y) * scale_y;

        let row = (canvas_y / (CELL_SIZE + 1.0)).floor() as i64;
        let col = (canvas_x / (CELL_SIZE + 1.0)).floor() as i64;

        (
            row.clamp(0, rows as i64 - 1) as u32,
            col.clamp(0, cols as i64 - 1) as u32,
        )
    }
}

/// InputController maps control events to simulation mutations and playback
/// transitions. It owns the canvas geometry and the help overlay flag and
/// nothing else; all grid state stays behind the `Simulation` handle.
pub struct InputController {
    geometry: CanvasGeometry,
    help_visible: bool,
}

impl InputController {
    pub fn new(geometry: CanvasGeometry) -> Self {
        Self {
            geometry,
            help_visible: false,
        }
    }

    /// Refresh the geometry after a window resize.
    pub fn set_geometry(&mut self, geometry: CanvasGeometry) {
        self.geometry = geometry;
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Dispatch one event. Mutations are visible to the caller immediately,
    /// so the frame drawn after this call already shows the new state.
    pub fn handle(
        &mut self,
        event: InputEvent,
        sim: &mut dyn Simulation,
        render_loop: &mut RenderLoop,
    ) {
        match event {
            InputEvent::CanvasClick { x, y, modifiers } => {
                let (row, col) = self.geometry.to_cell(x, y, sim.height(), sim.width());

                // Ctrl/meta wins over shift; exactly one action per click
                if modifiers.ctrl || modifiers.meta {
                    log::debug!("stamping spaceship at ({row}, {col})");
                    sim.add_spaceship(row, col);
                } else if modifiers.shift {
                    log::debug!("stamping pulsar at ({row}, {col})");
                    sim.add_pulsar(row, col);
                } else {
                    log::debug!("toggling cell ({row}, {col})");
                    sim.toggle_cell(row, col);
                }
            }
            InputEvent::PlayPause => {
                if render_loop.is_playing() {
                    render_loop.stop();
                } else {
                    render_loop.start();
                }
            }
            InputEvent::Random => {
                log::debug!("randomizing grid");
                sim.random_cells();
            }
            InputEvent::Clear => {
                log::debug!("clearing grid");
                sim.clear_cells();
            }
            InputEvent::SpeedChange { value } => {
                render_loop.set_speed(value);
            }
            InputEvent::Help => {
                self.help_visible = !self.help_visible;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Universe;

    /// 16x16 grid drawn 1:1 at the window origin.
    fn unit_geometry() -> CanvasGeometry {
        let (w, h) = CanvasGeometry::canvas_size(16, 16);
        CanvasGeometry {
            canvas_width: w,
            canvas_height: h,
            display_x: 0.0,
            display_y: 0.0,
            display_width: w,
            display_height: h,
        }
    }

    fn setup() -> (InputController, Universe, RenderLoop) {
        (
            InputController::new(unit_geometry()),
            Universe::new(16, 16).unwrap(),
            RenderLoop::new(),
        )
    }

    /// Center of a cell in window coordinates, for the 1:1 geometry.
    fn cell_center(row: u32, col: u32) -> (f32, f32) {
        (
            col as f32 * (CELL_SIZE + 1.0) + 1.0 + CELL_SIZE / 2.0,
            row as f32 * (CELL_SIZE + 1.0) + 1.0 + CELL_SIZE / 2.0,
        )
    }

    #[test]
    fn test_click_toggles_single_cell() {
        let (mut controller, mut universe, mut render_loop) = setup();

        let (x, y) = cell_center(0, 0);
        controller.handle(
            InputEvent::CanvasClick { x, y, modifiers: Modifiers::default() },
            &mut universe,
            &mut render_loop,
        );

        // Exactly (0, 0) flipped alive, everything else dead
        assert!(universe.get(0, 0));
        assert_eq!(universe.population(), 1);
    }

    #[test]
    fn test_click_same_cell_twice_restores_dead() {
        let (mut controller, mut universe, mut render_loop) = setup();

        let (x, y) = cell_center(5, 9);
        for _ in 0..2 {
            controller.handle(
                InputEvent::CanvasClick { x, y, modifiers: Modifiers::default() },
                &mut universe,
                &mut render_loop,
            );
        }
        assert_eq!(universe.population(), 0);
    }

    #[test]
    fn test_out_of_bounds_clicks_clamp_to_grid() {
        let geometry = unit_geometry();

        assert_eq!(geometry.to_cell(-50.0, -50.0, 16, 16), (0, 0));
        assert_eq!(geometry.to_cell(10_000.0, 10_000.0, 16, 16), (15, 15));
        assert_eq!(geometry.to_cell(-1.0, 40.0, 16, 16), (4, 0));
        // The border stroke itself maps to the first cell
        assert_eq!(geometry.to_cell(0.0, 0.0, 16, 16), (0, 0));
    }

    #[test]
    fn test_scaled_display_maps_clicks_back_to_canvas() {
        // Same 16x16 canvas shown at half size, offset inside the window
        let mut geometry = unit_geometry();
        geometry.display_x = 100.0;
        geometry.display_y = 50.0;
        geometry.display_width = geometry.canvas_width / 2.0;
        geometry.display_height = geometry.canvas_height / 2.0;

        // Window point half a canvas-pixel into cell (2, 3)
        let (cx, cy) = cell_center(2, 3);
        let x = 100.0 + cx / 2.0;
        let y = 50.0 + cy / 2.0;
        assert_eq!(geometry.to_cell(x, y, 16, 16), (2, 3));
    }

    #[test]
    fn test_ctrl_click_stamps_spaceship() {
        let (mut controller, mut universe, mut render_loop) = setup();

        let (x, y) = cell_center(4, 4);
        let modifiers = Modifiers { ctrl: true, ..Default::default() };
        controller.handle(
            InputEvent::CanvasClick { x, y, modifiers },
            &mut universe,
            &mut render_loop,
        );

        assert_eq!(universe.population(), 5);
        assert!(universe.get(4, 5));
    }

    #[test]
    fn test_shift_click_stamps_pulsar() {
        let (mut controller, mut universe, mut render_loop) = setup();

        let (x, y) = cell_center(0, 0);
        let modifiers = Modifiers { shift: true, ..Default::default() };
        controller.handle(
            InputEvent::CanvasClick { x, y, modifiers },
            &mut universe,
            &mut render_loop,
        );

        assert_eq!(universe.population(), 48);
    }

    #[test]
    fn test_ctrl_takes_precedence_over_shift() {
        let (mut controller, mut universe, mut render_loop) = setup();

        let (x, y) = cell_center(4, 4);
        let modifiers = Modifiers { ctrl: true, shift: true, meta: false };
        controller.handle(
            InputEvent::CanvasClick { x, y, modifiers },
            &mut universe,
            &mut render_loop,
        );

        // Spaceship (5 cells), not pulsar (48) and not a bare toggle (1)
        assert_eq!(universe.population(), 5);
    }

    #[test]
    fn test_meta_click_stamps_spaceship() {
        let (mut controller, mut universe, mut render_loop) = setup();

        let (x, y) = cell_center(4, 4);
        let modifiers = Modifiers { meta: true, shift: true, ctrl: false };
        controller.handle(
            InputEvent::CanvasClick { x, y, modifiers },
            &mut universe,
            &mut render_loop,
        );

        assert_eq!(universe.population(), 5);
    }

    #[test]
    fn test_play_pause_round_trip() {
        let (mut controller, mut universe, mut render_loop) = setup();

        controller.handle(InputEvent::PlayPause, &mut universe, &mut render_loop);
        assert!(render_loop.is_playing());

        controller.handle(InputEvent::PlayPause, &mut universe, &mut render_loop);
        assert!(!render_loop.is_playing());
    }

    #[test]
    fn test_random_then_clear_leaves_grid_dead() {
        let (mut controller, mut universe, mut render_loop) = setup();

        controller.handle(InputEvent::Random, &mut universe, &mut render_loop);
        controller.handle(InputEvent::Clear, &mut universe, &mut render_loop);

        assert_eq!(universe.population(), 0);
        assert!(universe.cells().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_speed_change_reaches_render_loop() {
        let (mut controller, mut universe, mut render_loop) = setup();

        controller.handle(
            InputEvent::SpeedChange { value: 0 },
            &mut universe,
            &mut render_loop,
        );
        let slow = render_loop.skip_threshold();

        controller.handle(
            InputEvent::SpeedChange { value: crate::application::SPEED_MAX },
            &mut universe,
            &mut render_loop,
        );
        let fast = render_loop.skip_threshold();

        assert!(slow > fast);
        assert_eq!(fast, 0);
    }

    #[test]
    fn test_help_toggles_overlay_only() {
        let (mut controller, mut universe, mut render_loop) = setup();
        universe.toggle_cell(1, 1);

        controller.handle(InputEvent::Help, &mut universe, &mut render_loop);
        assert!(controller.help_visible());
        // No side effects on grid or playback
        assert_eq!(universe.population(), 1);
        assert!(!render_loop.is_playing());

        controller.handle(InputEvent::Help, &mut universe, &mut render_loop);
        assert!(!controller.help_visible());
    }
}
