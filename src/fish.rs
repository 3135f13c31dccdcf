/*
 * Fish Module
 *
 * This module defines the Fish struct, the schooling species. Fish are
 * steered by the flocking engine (see physics.rs); this file owns the
 * per-fish pieces of that step: construction, speed limits, integration and
 * the derived animation state.
 */

use glam::Vec2;
use rand::Rng;

use crate::theme::FISH_PALETTE;
use crate::vector;

// Fish stay within [MIN_SPEED_FACTOR, MAX_SPEED_FACTOR] x cruising speed
pub const MIN_SPEED_FACTOR: f32 = 0.5;
pub const MAX_SPEED_FACTOR: f32 = 2.0;

// Tail animation advance per frame, plus speed / TAIL_SPEED_DIVISOR
const TAIL_PHASE_STEP: f32 = 0.2;
const TAIL_SPEED_DIVISOR: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: usize,
    pub size: f32,
    // Per-individual cruising speed
    pub speed: f32,
    pub angle: f32,
    pub tail_phase: f32,
}

/// Per-individual cruising speed: base speed scaled by a factor in [0.8, 1.2).
pub fn cruising_speed<R: Rng + ?Sized>(rng: &mut R, base_speed: f32) -> f32 {
    base_speed * rng.gen_range(0.8..1.2)
}

impl Fish {
    // Spawn a fish at a random spot inside a width x height viewport
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, id: u64, width: f32, height: f32, base_speed: f32) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * base_speed,
            (rng.gen::<f32>() - 0.5) * base_speed,
        );

        Self {
            id,
            position,
            velocity,
            color: rng.gen_range(0..FISH_PALETTE.len()),
            size: 4.0 + rng.gen::<f32>() * 4.0,
            speed: cruising_speed(rng, base_speed),
            angle: vector::heading(velocity),
            tail_phase: rng.gen::<f32>() * std::f32::consts::TAU,
        }
    }

    pub fn min_speed(&self) -> f32 {
        self.speed * MIN_SPEED_FACTOR
    }

    pub fn max_speed(&self) -> f32 {
        self.speed * MAX_SPEED_FACTOR
    }

    // Apply an impulse straight to the velocity
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.velocity += force;
    }

    /// Clamp the velocity magnitude into [min_speed, max_speed] and return
    /// the magnitude it had before clamping.
    ///
    /// A fish with exactly zero velocity has no direction to rescale, so it
    /// is given a random heading at minimum speed.
    pub fn limit_speed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        let speed = self.velocity.length();
        let max_speed = self.max_speed();
        let min_speed = self.min_speed();

        if speed == 0.0 {
            self.velocity = vector::random_unit(rng) * min_speed;
        } else if speed > max_speed {
            self.velocity = vector::with_length(self.velocity, speed, max_speed);
        } else if speed < min_speed {
            // Prevent stalling
            self.velocity = vector::with_length(self.velocity, speed, min_speed);
        }

        speed
    }

    /// Euler step (one frame) followed by the derived visuals.
    pub fn integrate(&mut self, speed_before_clamp: f32) {
        self.position += self.velocity;

        self.angle = vector::heading(self.velocity);
        self.tail_phase += TAIL_PHASE_STEP + speed_before_clamp / TAIL_SPEED_DIVISOR;
    }
}
