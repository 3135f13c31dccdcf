/*
 * Bubble Module
 *
 * Bubbles are the only entities created without bound: every click releases
 * a small burst that rises, wiggles, and is discarded once it passes the top
 * of the viewport.
 */

use glam::Vec2;
use rand::Rng;

use crate::vector;

// Bubbles per click
pub const BURST_SIZE: usize = 5;
// Bursts spawn inside a disc of this radius centred on the click
pub const BURST_RADIUS: f32 = 10.0;

// Wiggle: x += sin(y * WIGGLE_FREQUENCY) * WIGGLE_AMPLITUDE
pub const WIGGLE_FREQUENCY: f32 = 0.05;
pub const WIGGLE_AMPLITUDE: f32 = 0.5;

// A bubble whose y is above this line is gone
pub const EXPIRY_Y: f32 = -50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub id: u64,
    pub position: Vec2,
    // vy is negative (rising); vx is carried for renderers but not integrated
    pub velocity: Vec2,
    pub radius: f32,
    // Reserved for fade-out
    pub alpha: f32,
}

impl Bubble {
    pub fn spawn_near<R: Rng + ?Sized>(rng: &mut R, id: u64, origin: Vec2) -> Self {
        // sqrt keeps the jitter uniform over the disc
        let jitter = vector::random_unit(rng) * BURST_RADIUS * rng.gen::<f32>().sqrt();

        Self {
            id,
            position: origin + jitter,
            velocity: Vec2::new(rng.gen::<f32>() - 0.5, -1.0 - rng.gen::<f32>() * 2.0),
            radius: 2.0 + rng.gen::<f32>() * 5.0,
            alpha: 1.0,
        }
    }

    /// Rise and wiggle for one frame.
    pub fn drift(&mut self) {
        self.position.y += self.velocity.y;
        self.position.x += (self.position.y * WIGGLE_FREQUENCY).sin() * WIGGLE_AMPLITUDE;
    }

    pub fn is_expired(&self) -> bool {
        self.position.y < EXPIRY_Y
    }
}

/// Build one burst of `BURST_SIZE` bubbles around `origin`, drawing ids from
/// `next_id`.
pub fn burst<R: Rng + ?Sized>(rng: &mut R, next_id: &mut u64, origin: Vec2) -> Vec<Bubble> {
    (0..BURST_SIZE)
        .map(|_| {
            let id = *next_id;
            *next_id += 1;
            Bubble::spawn_near(rng, id, origin)
        })
        .collect()
}
