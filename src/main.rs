use macroquad::prelude::*;

use toroidal_life::application::{RenderLoop, DEFAULT_SPEED, SPEED_MAX};
use toroidal_life::engine::{Simulation, Universe};
use toroidal_life::input::{CanvasGeometry, InputController, InputEvent, Modifiers};
use toroidal_life::{rendering, ui};

/// Side length of the toroidal universe in cells.
const GRID_DIM: u32 = 64;

fn window_conf() -> Conf {
    Conf {
        window_title: "Toroidal Game of Life".to_owned(),
        window_width: 780,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

/// Fit the board into everything left of the control panel.
fn board_geometry() -> CanvasGeometry {
    CanvasGeometry::fit(
        GRID_DIM,
        GRID_DIM,
        0.0,
        0.0,
        ui::board_area_width(),
        ui::board_area_height(),
    )
}

fn current_modifiers() -> Modifiers {
    Modifiers {
        ctrl: is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl),
        meta: is_key_down(KeyCode::LeftSuper) || is_key_down(KeyCode::RightSuper),
        shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut universe = match Universe::new(GRID_DIM, GRID_DIM) {
        Ok(universe) => universe,
        Err(err) => {
            log::error!("cannot create universe: {err}");
            return;
        }
    };

    let mut render_loop = RenderLoop::new();
    let mut controller = InputController::new(board_geometry());
    let mut slider = ui::Slider::new(
        ui::panel_x() + ui::PANEL_PADDING,
        ui::SLIDER_Y,
        ui::PANEL_WIDTH - 2.0 * ui::PANEL_PADDING - 24.0,
        SPEED_MAX,
        DEFAULT_SPEED,
    );
    let mut generation: u64 = 0;

    log::info!("starting {GRID_DIM}x{GRID_DIM} toroidal universe");

    loop {
        let mouse_pos = mouse_position();

        // Responsive layout: geometry and widget positions track the window
        controller.set_geometry(board_geometry());
        slider.set_position(ui::panel_x() + ui::PANEL_PADDING, ui::SLIDER_Y);

        // Buttons: play/pause, clear, random, help
        let buttons = ui::create_buttons(render_loop.is_playing());
        let clicked = buttons
            .iter()
            .enumerate()
            .find(|(_, button)| button.is_clicked(mouse_pos));
        if let Some((idx, _)) = clicked {
            let event = match idx {
                0 => InputEvent::PlayPause,
                1 => InputEvent::Clear,
                2 => InputEvent::Random,
                _ => InputEvent::Help,
            };
            controller.handle(event, &mut universe, &mut render_loop);
        }

        if slider.update(mouse_pos) {
            controller.handle(
                InputEvent::SpeedChange { value: slider.value() },
                &mut universe,
                &mut render_loop,
            );
        }

        // Clicks on the board surface; the panel lies outside the geometry
        if is_mouse_button_pressed(MouseButton::Left)
            && controller.geometry().contains(mouse_pos.0, mouse_pos.1)
        {
            controller.handle(
                InputEvent::CanvasClick {
                    x: mouse_pos.0,
                    y: mouse_pos.1,
                    modifiers: current_modifiers(),
                },
                &mut universe,
                &mut render_loop,
            );
        }

        // Step strictly before redraw, so the frame shows post-step state
        if render_loop.advance() {
            universe.tick();
            generation += 1;
        }

        clear_background(Color::from_rgba(20, 22, 23, 255));
        rendering::draw_board(&universe, controller.geometry());
        rendering::draw_panel(
            &buttons,
            &slider,
            &render_loop,
            generation,
            universe.population(),
            mouse_pos,
        );
        if controller.help_visible() {
            rendering::draw_help_overlay(controller.geometry());
        }

        next_frame().await;
    }
}
