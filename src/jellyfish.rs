/*
 * Jellyfish Module
 *
 * Jellyfish drift slowly upwards with a gentle sideways sway and wrap around
 * the viewport instead of leaving it.
 */

use glam::Vec2;
use rand::Rng;

use crate::theme::JELLYFISH_PALETTE;

// Sway: x += sin(tick * SWAY_FREQUENCY + id) * SWAY_AMPLITUDE
pub const SWAY_FREQUENCY: f32 = 0.002;
pub const SWAY_AMPLITUDE: f32 = 0.2;

// How far outside the viewport a jellyfish may go before wrapping
pub const VERTICAL_WRAP_MARGIN: f32 = 100.0;
pub const HORIZONTAL_WRAP_MARGIN: f32 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Jellyfish {
    pub id: u64,
    pub position: Vec2,
    // vy is always negative: net upward drift
    pub velocity: Vec2,
    pub size: f32,
    // Desynchronises pulse and tentacle animation between individuals
    pub phase_offset: f32,
    pub color: usize,
}

impl Jellyfish {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, id: u64, width: f32, height: f32) -> Self {
        Self {
            id,
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 0.5,
                -(rng.gen::<f32>() * 0.5 + 0.2),
            ),
            size: 20.0 + rng.gen::<f32>() * 30.0,
            phase_offset: rng.gen::<f32>() * 100.0,
            color: rng.gen_range(0..JELLYFISH_PALETTE.len()),
        }
    }

    /// One frame of drift at simulation time `tick`.
    pub fn drift(&mut self, tick: u64, width: f32, height: f32) {
        self.position.y += self.velocity.y;
        self.position.x += (tick as f32 * SWAY_FREQUENCY + self.id as f32).sin() * SWAY_AMPLITUDE;

        if self.position.y < -VERTICAL_WRAP_MARGIN {
            self.position.y = height + VERTICAL_WRAP_MARGIN;
        }

        if self.position.x < -HORIZONTAL_WRAP_MARGIN {
            self.position.x = width + HORIZONTAL_WRAP_MARGIN;
        } else if self.position.x > width + HORIZONTAL_WRAP_MARGIN {
            self.position.x = -HORIZONTAL_WRAP_MARGIN;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn jelly_at(x: f32, y: f32) -> Jellyfish {
        Jellyfish {
            id: 0,
            position: Vec2::new(x, y),
            velocity: Vec2::new(0.1, -0.5),
            size: 30.0,
            phase_offset: 0.0,
            color: 0,
        }
    }

    #[test]
    fn spawned_jellyfish_always_rise() {
        let mut rng = SmallRng::seed_from_u64(3);
        for id in 0..100 {
            let jelly = Jellyfish::spawn(&mut rng, id, 800.0, 600.0);
            assert!(jelly.velocity.y <= -0.2 && jelly.velocity.y > -0.7);
            assert!(jelly.size >= 20.0 && jelly.size < 50.0);
        }
    }

    #[test]
    fn drift_rises_and_sways() {
        let mut jelly = jelly_at(400.0, 300.0);
        jelly.drift(0, 800.0, 600.0);
        // id 0 at tick 0: sin(0) = 0, no sway yet
        assert_eq!(jelly.position, Vec2::new(400.0, 299.5));

        jelly.id = 1;
        jelly.drift(0, 800.0, 600.0);
        assert!((jelly.position.x - (400.0 + 1.0f32.sin() * SWAY_AMPLITUDE)).abs() < 1e-4);
    }

    #[test]
    fn wraps_from_top_to_below_bottom() {
        let mut jelly = jelly_at(400.0, -100.0);
        jelly.drift(0, 800.0, 600.0);
        assert_eq!(jelly.position.y, 700.0);
    }

    #[test]
    fn wraps_horizontally_to_opposite_side() {
        let mut left = jelly_at(-50.5, 300.0);
        left.drift(0, 800.0, 600.0);
        assert_eq!(left.position.x, 850.0);

        let mut right = jelly_at(850.5, 300.0);
        right.drift(0, 800.0, 600.0);
        assert_eq!(right.position.x, -50.0);
    }

    #[test]
    fn velocity_is_never_modified() {
        let mut jelly = jelly_at(10.0, -99.0);
        let velocity = jelly.velocity;
        for tick in 0..500 {
            jelly.drift(tick, 800.0, 600.0);
        }
        assert_eq!(jelly.velocity, velocity);
    }
}
