use macroquad::prelude::*;

use crate::application::RenderLoop;
use crate::engine::Simulation;
use crate::input::{CanvasGeometry, HELP_TEXT};
use crate::ui::{panel_x, Button, Slider, CELL_SIZE, PANEL_PADDING, PANEL_WIDTH, SLIDER_Y};

fn grid_color() -> Color {
    Color::from_rgba(146, 131, 116, 255)
}

fn dead_color() -> Color {
    Color::from_rgba(40, 40, 40, 255)
}

fn alive_color() -> Color {
    Color::from_rgba(251, 241, 199, 255)
}

/// Check one cell's bit in the packed view.
///
/// Bit layout matches the engine contract: byte = idx >> 3,
/// mask = 1 << (idx & 7).
#[inline]
pub fn cell_alive(cells: &[u8], idx: usize) -> bool {
    cells[idx >> 3] & (1 << (idx & 7)) != 0
}

/// Full-board redraw: lattice lines first, then every cell rectangle.
/// No dirty tracking; the whole grid is repainted each frame.
pub fn draw_board(sim: &dyn Simulation, geometry: &CanvasGeometry) {
    draw_grid_lines(sim.width(), sim.height(), geometry);
    draw_cells(sim, geometry);
}

fn draw_grid_lines(cols: u32, rows: u32, geometry: &CanvasGeometry) {
    let pitch = CELL_SIZE + 1.0;
    let thickness = geometry.scale().max(1.0);

    for i in 0..=cols {
        let x = i as f32 * pitch + 1.0;
        let (sx, sy0) = geometry.to_screen(x, 0.0);
        let (_, sy1) = geometry.to_screen(x, geometry.canvas_height);
        draw_line(sx, sy0, sx, sy1, thickness, grid_color());
    }

    for j in 0..=rows {
        let y = j as f32 * pitch + 1.0;
        let (sx0, sy) = geometry.to_screen(0.0, y);
        let (sx1, _) = geometry.to_screen(geometry.canvas_width, y);
        draw_line(sx0, sy, sx1, sy, thickness, grid_color());
    }
}

fn draw_cells(sim: &dyn Simulation, geometry: &CanvasGeometry) {
    let width = sim.width();
    let height = sim.height();
    let cells = sim.cells();

    let pitch = CELL_SIZE + 1.0;
    let side = CELL_SIZE * geometry.scale();

    for row in 0..height {
        for col in 0..width {
            let idx = (row * width + col) as usize;
            let color = if cell_alive(cells, idx) {
                alive_color()
            } else {
                dead_color()
            };

            let (x, y) = geometry.to_screen(col as f32 * pitch + 1.0, row as f32 * pitch + 1.0);
            draw_rectangle(x, y, side, side, color);
        }
    }
}

/// Draw the right-hand control panel: buttons, speed slider and status.
pub fn draw_panel(
    buttons: &[Button],
    slider: &Slider,
    render_loop: &RenderLoop,
    generation: u64,
    population: u32,
    mouse_pos: (f32, f32),
) {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(29, 32, 33, 255),
    );

    buttons.iter().for_each(|button| button.draw(mouse_pos));

    let x = panel_x() + PANEL_PADDING;

    draw_text("Speed", x, SLIDER_Y - 14.0, 16.0, WHITE);
    slider.draw(mouse_pos);
    draw_text(
        &format!("{}", slider.value()),
        x + PANEL_WIDTH - 2.0 * PANEL_PADDING - 14.0,
        SLIDER_Y - 14.0,
        16.0,
        Color::from_rgba(180, 180, 180, 255),
    );

    let status = if render_loop.is_playing() { "Running" } else { "Paused" };
    let status_color = if render_loop.is_playing() {
        Color::from_rgba(184, 187, 38, 255)
    } else {
        Color::from_rgba(254, 128, 25, 255)
    };

    let labels = [
        ("Status:", x, 290.0, 16.0, WHITE),
        (status, x, 310.0, 16.0, status_color),
        ("Generation:", x, 345.0, 16.0, WHITE),
    ];
    labels.iter().for_each(|(text, lx, ly, size, color)| {
        draw_text(text, *lx, *ly, *size, *color);
    });

    draw_text(
        &format!("{generation}"),
        x,
        365.0,
        20.0,
        Color::from_rgba(251, 241, 199, 255),
    );
    draw_text("Population:", x, 400.0, 16.0, WHITE);
    draw_text(
        &format!("{population}"),
        x,
        420.0,
        20.0,
        Color::from_rgba(251, 241, 199, 255),
    );
}

/// Translucent help overlay across the board area.
pub fn draw_help_overlay(geometry: &CanvasGeometry) {
    draw_rectangle(
        geometry.display_x,
        geometry.display_y,
        geometry.display_width,
        geometry.display_height,
        Color::from_rgba(29, 32, 33, 230),
    );

    let mut y = geometry.display_y + 60.0;
    let x = geometry.display_x + 40.0;

    draw_text("Toroidal Game of Life", x, y, 28.0, alive_color());
    y += 40.0;

    for line in HELP_TEXT {
        draw_text(line, x, y, 18.0, Color::from_rgba(212, 190, 152, 255));
        y += 24.0;
    }
}
