/*
 * UI Module
 *
 * This module contains the control panel built with nannou_egui. The panel
 * edits a working copy of the configuration; the caller submits a fresh
 * value to the frame driver whenever anything changed.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{InteractionMode, SimulationConfig};
use crate::theme::Theme;

// Update the UI and return whether the configuration changed
pub fn update_ui(egui: &mut Egui, config: &mut SimulationConfig, debug_info: &DebugInfo) -> bool {
    // Take a snapshot of current parameter values for change detection
    let snapshot = config.clone();

    let ctx = egui.begin_frame();

    egui::Window::new("Lumina Controls")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            ui.label("Interaction");
            ui.horizontal(|ui| {
                for mode in InteractionMode::ALL {
                    ui.selectable_value(&mut config.interaction_mode, mode, mode.label());
                }
            });
            ui.label(config.interaction_mode.hint());

            ui.separator();

            ui.add(
                egui::Slider::new(&mut config.fish_count, SimulationConfig::fish_count_range())
                    .text("Population"),
            );
            ui.add(
                egui::Slider::new(&mut config.base_speed, SimulationConfig::base_speed_range())
                    .step_by(SimulationConfig::BASE_SPEED_STEP)
                    .text("Speed"),
            );

            ui.separator();

            ui.label("Mood");
            ui.horizontal(|ui| {
                for theme in Theme::ALL {
                    ui.selectable_value(&mut config.theme, theme, theme.label());
                }
            });

            ui.separator();

            ui.checkbox(&mut config.show_debug, "Show Debug Info");
            if config.show_debug {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Bubbles: {}", debug_info.bubbles));
            }
        });

    let changes = config.detect_changes(&snapshot);
    changes.any_changed
}
