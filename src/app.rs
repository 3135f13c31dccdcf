/*
 * Application Module
 *
 * This module defines the nannou application that hosts the simulation.
 * It owns the frame driver, forwards window events to it, and draws the
 * view the driver hands back each frame.
 *
 * nannou's window space is centred with y up; pointer positions are
 * converted to viewport coordinates (origin top-left, y down) before they
 * reach the driver.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou::winit::event::MouseButton;
use nannou_egui::Egui;
use tracing::{debug, info, warn};

use crate::debug::DebugInfo;
use crate::driver::FrameDriver;
use crate::params::SimulationConfig;
use crate::renderer;
use crate::ui;
use crate::DEFAULT_WINDOW_SIZE;

// nannou builds the model from a plain fn pointer, so the startup
// configuration is parked here by `run`
static STARTUP_CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub driver: FrameDriver,
    // Working copy edited by the control panel
    pub config: SimulationConfig,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

/// Open the window and run until it is closed.
pub fn run(config: SimulationConfig) {
    if STARTUP_CONFIG.set(config).is_err() {
        warn!("viewer already started; ignoring new startup configuration");
    }

    nannou::app(model).update(update).exit(exit).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = STARTUP_CONFIG.get().cloned().unwrap_or_default();

    // 80% of the primary monitor when it can be queried
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            ((size.width as f32 * 0.8) as u32, (size.height as f32 * 0.8) as u32)
        }
        None => DEFAULT_WINDOW_SIZE,
    };

    let window_id = app
        .new_window()
        .title("Lumina")
        .size(window_width, window_height)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_exited(mouse_exited)
        .resized(resized)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the main window");

    let window = app.window(window_id).expect("main window was just built");
    let egui = Egui::from_window(&window);
    let (width, height) = window.inner_size_points();
    drop(window);

    info!(width, height, "window opened");

    let mut driver = FrameDriver::new(config.clone());
    driver.resize(width, height);

    Model {
        driver,
        config,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    if ui::update_ui(&mut model.egui, &mut model.config, &model.debug_info) {
        if let Err(err) = model.driver.submit_config(model.config.clone()) {
            warn!(%err, "configuration rejected");
            model.config = model.driver.config().clone();
        }
    }

    if let Some(view) = model.driver.tick() {
        model.debug_info.record(&view);
    }
}

// Draw the current frame
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    match model.driver.world() {
        Some(world) => {
            let view = world.view();
            renderer::draw_scene(&draw, &view, window_rect);
            renderer::draw_watermark(&draw, window_rect);
            renderer::draw_tip(&draw, window_rect, renderer::tip_opacity(app.time));
            if view.show_debug {
                renderer::draw_debug_info(&draw, &model.debug_info, window_rect);
            }
        }
        None => {
            draw.background().color(BLACK);
        }
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(?err, "failed to draw scene");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(?err, "failed to draw controls");
    }
}

// Handle mouse movement
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let (x, y) = renderer::to_simulation(pos, app.window_rect());
    model.driver.pointer_moved(x, y);
}

// Handle mouse press; presses over the control panel belong to egui
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let (x, y) = renderer::to_simulation(app.mouse.position(), app.window_rect());
    model.driver.clicked(x, y);
}

pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.driver.pointer_left();
}

pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    debug!(width = size.x, height = size.y, "window resized");
    model.driver.resize(size.x, size.y);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

// Window closed: tear the simulation down
pub fn exit(_app: &App, mut model: Model) {
    model.driver.stop();
}
