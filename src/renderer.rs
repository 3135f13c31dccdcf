/*
 * Renderer Module
 *
 * This module draws a RenderView with nannou. The simulation works in
 * viewport coordinates (origin top-left, y down) while nannou's window is
 * centred with y up, so every position is mapped through `to_screen` and
 * every heading is negated.
 *
 * Layering, back to front: water, light rays, jellyfish, fish, bubbles,
 * watermark, click tip, debug text.
 */

use nannou::prelude::*;

use crate::bubble::Bubble;
use crate::debug::DebugInfo;
use crate::fish::Fish;
use crate::jellyfish::Jellyfish;
use crate::theme::{self, Rgba8};
use crate::world::RenderView;

// Horizontal bands used to fake the water gradient
const GRADIENT_BANDS: usize = 48;
const TENTACLE_COUNT: usize = 6;
const CURVE_SEGMENTS: usize = 12;

// The click tip stays fully visible this long, then fades out
const TIP_VISIBLE_SECS: f32 = 5.0;
const TIP_FADE_SECS: f32 = 1.0;

/// Simulation coordinates to nannou window coordinates.
pub fn to_screen(x: f32, y: f32, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + x, window_rect.top() - y)
}

/// nannou window coordinates to simulation coordinates.
pub fn to_simulation(point: Point2, window_rect: Rect) -> (f32, f32) {
    (point.x - window_rect.left(), window_rect.top() - point.y)
}

fn to_rgba(c: Rgba8) -> Srgba<u8> {
    rgba8(c.r, c.g, c.b, c.a)
}

pub fn draw_scene(draw: &Draw, view: &RenderView<'_>, window_rect: Rect) {
    draw_water(draw, view, window_rect);
    draw_light_rays(draw, view.tick, window_rect);

    for jelly in view.jellyfish {
        draw_jellyfish(draw, jelly, view.tick, window_rect);
    }
    for fish in view.fish {
        draw_fish(draw, fish, window_rect);
    }
    for bubble in view.bubbles {
        draw_bubble(draw, bubble, window_rect);
    }
}

fn draw_water(draw: &Draw, view: &RenderView<'_>, window_rect: Rect) {
    let (top, bottom) = view.theme.water_gradient();
    let band_height = window_rect.h() / GRADIENT_BANDS as f32;

    for band in 0..GRADIENT_BANDS {
        let t = band as f32 / (GRADIENT_BANDS - 1) as f32;
        let y = window_rect.top() - band_height * (band as f32 + 0.5);
        draw.rect()
            .x_y(window_rect.x(), y)
            // overlap by a pixel so no seams show
            .w_h(window_rect.w(), band_height + 1.0)
            .color(to_rgba(top.lerp(bottom, t)));
    }
}

fn draw_light_rays(draw: &Draw, tick: u64, window_rect: Rect) {
    let height = window_rect.h();
    let shift = (tick as f32 * 0.05) % 200.0;

    // (x offset, top-left, bottom-left, bottom-right, top-right) in viewport units
    let rays: [(f32, [(f32, f32); 4]); 3] = [
        (-200.0, [(0.0, 0.0), (100.0, height), (300.0, height), (200.0, 0.0)]),
        (200.0, [(0.0, 0.0), (-50.0, height), (250.0, height), (300.0, 0.0)]),
        (700.0, [(0.0, 0.0), (50.0, height), (350.0, height), (250.0, 0.0)]),
    ];

    for (offset, corners) in rays.iter() {
        let points = corners
            .iter()
            .map(|&(x, y)| to_screen(x + offset + shift, y, window_rect));
        draw.polygon().color(rgba(1.0, 1.0, 1.0, 0.06)).points(points);
    }
}

fn draw_fish(draw: &Draw, fish: &Fish, window_rect: Rect) {
    let fill = to_rgba(theme::fish_color(fish.color));
    let size = fish.size;
    let center = to_screen(fish.position.x, fish.position.y, window_rect);
    let body = draw.xy(center).rotate(-fish.angle);

    // Body
    body.ellipse().x_y(0.0, 0.0).w_h(size * 4.0, size * 2.0).color(fill);

    // Eye
    body.ellipse().x_y(size, size * 0.3).radius(size * 0.3).color(WHITE);
    body.ellipse().x_y(size + 1.0, size * 0.3).radius(size * 0.1).color(BLACK);

    // Tail
    let wag = fish.tail_phase.sin() * (PI / 8.0);
    let tail = body.x_y(-size * 1.5, 0.0).rotate(-wag);
    tail.polygon().color(fill).points([
        pt2(0.0, 0.0),
        pt2(-size * 1.5, size),
        pt2(-size * 1.5, -size),
    ]);
}

fn draw_jellyfish(draw: &Draw, jelly: &Jellyfish, tick: u64, window_rect: Rect) {
    let fill = to_rgba(theme::jellyfish_color(jelly.color));
    let size = jelly.size;
    let time = tick as f32;

    let pulse = (time * 0.005 + jelly.phase_offset).sin() * 0.05 + 1.0;
    let center = to_screen(jelly.position.x, jelly.position.y, window_rect);
    let bell = draw.xy(center).scale(pulse);

    // Dome: upper half circle closed by a cubic curve underneath
    let dome = (0..=CURVE_SEGMENTS).map(|i| {
        let angle = PI * i as f32 / CURVE_SEGMENTS as f32;
        pt2(angle.cos() * size, angle.sin() * size)
    });
    let underside = (1..CURVE_SEGMENTS).map(|i| {
        cubic(
            pt2(-size, 0.0),
            pt2(-size, -size * 0.5),
            pt2(size, -size * 0.5),
            pt2(size, 0.0),
            i as f32 / CURVE_SEGMENTS as f32,
        )
    });
    bell.polygon().color(fill).points(dome.chain(underside));

    // Tentacles
    for i in 0..TENTACLE_COUNT {
        let x = (i as f32 - TENTACLE_COUNT as f32 / 2.0 + 0.5) * (size / 2.0);
        let wave = (time * 0.01 + i as f32 + jelly.phase_offset).sin() * 10.0;
        let start = pt2(x, 0.0);
        let control = pt2(x + wave, -size * 1.5);
        let end = pt2(x - wave, -size * 3.0);

        let points = (0..=CURVE_SEGMENTS).map(|s| quadratic(start, control, end, s as f32 / CURVE_SEGMENTS as f32));
        bell.polyline().weight(2.0).points(points).color(fill);
    }
}

fn draw_bubble(draw: &Draw, bubble: &Bubble, window_rect: Rect) {
    let center = to_screen(bubble.position.x, bubble.position.y, window_rect);
    let r = bubble.radius;

    draw.ellipse().xy(center).radius(r).color(rgba(1.0, 1.0, 1.0, 0.3));
    // Shine
    draw.ellipse()
        .x_y(center.x - r * 0.3, center.y + r * 0.3)
        .radius(r * 0.2)
        .color(rgba(1.0, 1.0, 1.0, 0.6));
}

fn quadratic(a: Point2, b: Point2, c: Point2, t: f32) -> Point2 {
    let u = 1.0 - t;
    a * (u * u) + b * (2.0 * u * t) + c * (t * t)
}

fn cubic(a: Point2, b: Point2, c: Point2, d: Point2, t: f32) -> Point2 {
    let u = 1.0 - t;
    a * (u * u * u) + b * (3.0 * u * u * t) + c * (3.0 * u * t * t) + d * (t * t * t)
}

/// Opacity of the click tip `seconds` after launch.
pub fn tip_opacity(seconds: f32) -> f32 {
    (1.0 - (seconds - TIP_VISIBLE_SECS) / TIP_FADE_SECS).clamp(0.0, 1.0)
}

// Title in the bottom-left corner
pub fn draw_watermark(draw: &Draw, window_rect: Rect) {
    let margin = 24.0;
    let width = 320.0;
    let x = window_rect.left() + margin + width / 2.0;

    draw.text("LUMINA")
        .x_y(x, window_rect.bottom() + margin + 44.0)
        .w(width)
        .left_justify()
        .color(rgba(1.0, 1.0, 1.0, 0.5))
        .font_size(36);
    draw.text("INTERACTIVE GENERATIVE OCEAN")
        .x_y(x, window_rect.bottom() + margin + 8.0)
        .w(width)
        .left_justify()
        .color(rgba8(0xa5, 0xf3, 0xfc, 128))
        .font_size(12);
}

// Hint along the bottom edge, faded by `opacity`
pub fn draw_tip(draw: &Draw, window_rect: Rect, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }

    let y = window_rect.bottom() + 54.0;
    draw.rect()
        .x_y(window_rect.x(), y)
        .w_h(320.0, 44.0)
        .color(rgba(0.0, 0.0, 0.0, 0.4 * opacity));
    draw.text("Click anywhere to create bubbles!")
        .x_y(window_rect.x(), y)
        .w(300.0)
        .color(rgba(1.0, 1.0, 1.0, 0.9 * opacity))
        .font_size(14);
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let lines = debug_info.lines();
    let panel_width = 200.0;
    let panel_height = line_height * lines.len() as f32 + margin;

    // Background panel in the bottom-right corner, clear of the controls and title
    draw.rect()
        .x_y(window_rect.right() - panel_width / 2.0, window_rect.bottom() + panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.5));

    let text_x = window_rect.right() - panel_width + margin;
    let top = window_rect.bottom() + panel_height - margin;

    for (i, text) in lines.iter().enumerate() {
        draw.text(text)
            .x_y(text_x + 70.0, top - i as f32 * line_height)
            .color(WHITE)
            .font_size(14);
    }
}
