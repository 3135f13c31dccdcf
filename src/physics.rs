/*
 * Physics Module
 *
 * This module is the flocking engine for the fish store. Each frame every
 * fish scans every other fish (O(n^2), the schools are small) and applies:
 * 1. Separation: push away from fish inside the protected range
 * 2. Cohesion: steer towards the average position of visible neighbours
 * 3. Alignment: match the average velocity of visible neighbours
 * 4. Cursor interaction: seek or flee the pointer depending on the mode
 * 5. Boundary turning: a soft inward nudge near the viewport edges
 * followed by speed clamping and a one-frame Euler step.
 *
 * All neighbour reads go through a snapshot taken at the start of the step,
 * so a fish never sees another fish's half-updated state.
 */

use glam::Vec2;
use rand::Rng;

use crate::fish::Fish;
use crate::params::InteractionMode;
use crate::vector;
use crate::world::Bounds;

/// Tuning for the flocking rules. Ranges are in simulation units,
/// factors are per-frame velocity gains.
#[derive(Debug, Clone, PartialEq)]
pub struct FlockingParams {
    pub visual_range: f32,
    pub protected_range: f32,
    pub avoid_factor: f32,
    pub matching_factor: f32,
    pub centering_factor: f32,
    pub turn_factor: f32,
    pub edge_margin: f32,
    pub cursor_range: f32,
    pub cursor_attract_factor: f32,
    pub cursor_repel_factor: f32,
}

impl Default for FlockingParams {
    fn default() -> Self {
        Self {
            visual_range: 80.0,
            protected_range: 20.0,
            avoid_factor: 0.05,
            matching_factor: 0.05,
            centering_factor: 0.0005,
            turn_factor: 0.2,
            edge_margin: 100.0,
            cursor_range: 250.0,
            cursor_attract_factor: 0.002,
            cursor_repel_factor: 0.05,
        }
    }
}

// Cursor gains are expressed per 100 units of normalised direction
const CURSOR_GAIN_SCALE: f32 = 100.0;

// Accumulated neighbourhood of one fish
#[derive(Debug, Default)]
struct Neighborhood {
    close: Vec2,
    position_sum: Vec2,
    velocity_sum: Vec2,
    count: usize,
}

/// Advance every fish by one frame.
pub fn update_fish<R: Rng + ?Sized>(
    fish: &mut [Fish],
    cursor: Option<Vec2>,
    mode: InteractionMode,
    bounds: Bounds,
    params: &FlockingParams,
    rng: &mut R,
) {
    // Extract positions and velocities so neighbour reads see last frame's state
    let positions: Vec<Vec2> = fish.iter().map(|f| f.position).collect();
    let velocities: Vec<Vec2> = fish.iter().map(|f| f.velocity).collect();

    // Pre-calculate squared radii
    let visual_range_sq = params.visual_range * params.visual_range;
    let protected_range_sq = params.protected_range * params.protected_range;

    for (i, f) in fish.iter_mut().enumerate() {
        let mut hood = Neighborhood::default();

        for (j, (&other_position, &other_velocity)) in positions.iter().zip(&velocities).enumerate() {
            if i == j {
                continue;
            }

            let offset = positions[i] - other_position;
            let distance_sq = offset.length_squared();

            if distance_sq < visual_range_sq {
                if distance_sq < protected_range_sq {
                    hood.close += offset;
                } else {
                    hood.position_sum += other_position;
                    hood.velocity_sum += other_velocity;
                    hood.count += 1;
                }
            }
        }

        // Separation
        f.apply_force(hood.close * params.avoid_factor);

        // Cohesion, then alignment against the already-adjusted velocity
        if hood.count > 0 {
            let n = hood.count as f32;
            let average_position = hood.position_sum / n;
            let average_velocity = hood.velocity_sum / n;

            f.apply_force((average_position - f.position) * params.centering_factor);
            let alignment = (average_velocity - f.velocity) * params.matching_factor;
            f.apply_force(alignment);
        }

        if let Some(force) = cursor_force(f.position, cursor, mode, params) {
            f.apply_force(force);
        }

        f.apply_force(edge_turn(f.position, bounds, params));

        let speed = f.limit_speed(rng);
        f.integrate(speed);
    }
}

/// Force the pointer exerts on a fish at `position`, if any.
///
/// No force is produced when the cursor is absent, out of range, the mode is
/// Idle, or the fish sits exactly on the cursor (no direction to push along).
pub fn cursor_force(
    position: Vec2,
    cursor: Option<Vec2>,
    mode: InteractionMode,
    params: &FlockingParams,
) -> Option<Vec2> {
    let cursor = cursor?;
    if vector::distance_sq(position, cursor) >= params.cursor_range * params.cursor_range {
        return None;
    }

    let away = vector::normalized(position - cursor)?;
    match mode {
        // Flee
        InteractionMode::Repel => Some(away * params.cursor_repel_factor * CURSOR_GAIN_SCALE),
        // Seek
        InteractionMode::Attract => Some(-away * params.cursor_attract_factor * CURSOR_GAIN_SCALE),
        InteractionMode::Idle => None,
    }
}

/// Inward nudge for a fish within `edge_margin` of any viewport edge.
pub fn edge_turn(position: Vec2, bounds: Bounds, params: &FlockingParams) -> Vec2 {
    let margin = params.edge_margin;
    let mut turn = Vec2::ZERO;

    if position.x < margin {
        turn.x += params.turn_factor;
    }
    if position.x > bounds.width - margin {
        turn.x -= params.turn_factor;
    }
    if position.y < margin {
        turn.y += params.turn_factor;
    }
    if position.y > bounds.height - margin {
        turn.y -= params.turn_factor;
    }

    turn
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    const BOUNDS: Bounds = Bounds { width: 800.0, height: 600.0 };

    fn fish_at(id: u64, x: f32, y: f32, vx: f32, vy: f32) -> Fish {
        Fish {
            id,
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            color: 0,
            size: 5.0,
            speed: 2.0,
            angle: 0.0,
            tail_phase: 0.0,
        }
    }

    fn step(fish: &mut [Fish], cursor: Option<Vec2>, mode: InteractionMode) {
        let mut rng = SmallRng::seed_from_u64(99);
        update_fish(fish, cursor, mode, BOUNDS, &FlockingParams::default(), &mut rng);
    }

    #[test]
    fn close_fish_push_apart() {
        let mut fish = vec![
            fish_at(0, 400.0, 300.0, 0.0, 1.5),
            fish_at(1, 410.0, 300.0, 0.0, 1.5),
        ];
        step(&mut fish, None, InteractionMode::Idle);
        assert!(fish[0].velocity.x < 0.0);
        assert!(fish[1].velocity.x > 0.0);
    }

    #[test]
    fn visible_fish_pull_together_and_align() {
        // 50 units apart: visible but outside the protected range
        let mut fish = vec![
            fish_at(0, 400.0, 300.0, 1.5, 0.0),
            fish_at(1, 400.0, 350.0, 0.0, 1.5),
        ];
        step(&mut fish, None, InteractionMode::Idle);
        // fish 0 gains +y from both cohesion and alignment
        assert!(fish[0].velocity.y > 0.0);
        // fish 1 is pulled back up (cohesion) and gains +x (alignment)
        assert!(fish[1].velocity.x > 0.0);
    }

    #[test]
    fn distant_fish_ignore_each_other() {
        let mut fish = vec![
            fish_at(0, 300.0, 300.0, 1.5, 0.0),
            fish_at(1, 500.0, 300.0, -1.5, 0.0),
        ];
        step(&mut fish, None, InteractionMode::Idle);
        assert_eq!(fish[0].velocity, Vec2::new(1.5, 0.0));
        assert_eq!(fish[1].velocity, Vec2::new(-1.5, 0.0));
    }

    #[test]
    fn attract_mode_seeks_cursor() {
        let mut fish = vec![fish_at(0, 400.0, 300.0, 0.0, 1.5)];
        step(&mut fish, Some(Vec2::new(500.0, 300.0)), InteractionMode::Attract);
        assert!((fish[0].velocity.x - 0.2).abs() < 1e-5);
    }

    #[test]
    fn repel_mode_flees_cursor() {
        let mut fish = vec![fish_at(0, 400.0, 300.0, 0.0, 1.5)];
        step(&mut fish, Some(Vec2::new(500.0, 300.0)), InteractionMode::Repel);
        assert!(fish[0].velocity.x < -1.0);
        assert!(fish[0].velocity.length() <= fish[0].max_speed() + 1e-4);
    }

    #[test]
    fn idle_mode_and_absent_cursor_apply_no_cursor_force() {
        let params = FlockingParams::default();
        let here = Vec2::new(400.0, 300.0);
        let near = Some(Vec2::new(420.0, 300.0));
        assert!(cursor_force(here, near, InteractionMode::Idle, &params).is_none());
        assert!(cursor_force(here, None, InteractionMode::Attract, &params).is_none());
        assert!(cursor_force(here, None, InteractionMode::Repel, &params).is_none());
        assert!(cursor_force(here, Some(Vec2::new(700.0, 300.0)), InteractionMode::Repel, &params).is_none());
        // sitting on the cursor yields no direction rather than NaN
        assert!(cursor_force(here, Some(here), InteractionMode::Repel, &params).is_none());
    }

    #[test]
    fn absent_cursor_matches_idle_mode() {
        let mut rng = SmallRng::seed_from_u64(21);
        let school: Vec<Fish> = (0..40).map(|id| Fish::spawn(&mut rng, id, 800.0, 600.0, 2.0)).collect();

        let mut absent = school.clone();
        step(&mut absent, None, InteractionMode::Attract);

        let mut idle = school.clone();
        step(&mut idle, Some(Vec2::new(400.0, 300.0)), InteractionMode::Idle);

        assert_eq!(absent, idle);
    }

    #[test]
    fn edges_turn_fish_inwards() {
        let params = FlockingParams::default();
        assert_eq!(edge_turn(Vec2::new(50.0, 300.0), BOUNDS, &params), Vec2::new(0.2, 0.0));
        assert_eq!(edge_turn(Vec2::new(750.0, 550.0), BOUNDS, &params), Vec2::new(-0.2, -0.2));
        assert_eq!(edge_turn(Vec2::new(400.0, 300.0), BOUNDS, &params), Vec2::ZERO);
    }

    #[test]
    fn speeds_stay_in_band_after_a_step() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut school: Vec<Fish> = (0..120).map(|id| Fish::spawn(&mut rng, id, 800.0, 600.0, 2.0)).collect();
        // crowd half of them into one spot to provoke strong separation
        for f in school.iter_mut().take(60) {
            f.position = Vec2::new(400.0 + f.position.x * 0.01, 300.0 + f.position.y * 0.01);
        }
        for mode in InteractionMode::ALL {
            step(&mut school, Some(Vec2::new(400.0, 300.0)), mode);
            for f in &school {
                let speed = f.velocity.length();
                assert!(speed >= f.min_speed() - 1e-4, "fish {} too slow: {speed}", f.id);
                assert!(speed <= f.max_speed() + 1e-4, "fish {} too fast: {speed}", f.id);
            }
        }
    }

    #[test]
    fn stacked_fish_do_not_produce_nan() {
        let mut fish = vec![
            fish_at(0, 400.0, 300.0, 0.0, 0.0),
            fish_at(1, 400.0, 300.0, 0.0, 0.0),
        ];
        step(&mut fish, Some(Vec2::new(400.0, 300.0)), InteractionMode::Repel);
        for f in &fish {
            assert!(f.velocity.is_finite() && f.position.is_finite());
            assert!((f.velocity.length() - f.min_speed()).abs() < 1e-4);
        }
    }

    #[test]
    fn facing_follows_velocity() {
        let mut fish = vec![fish_at(0, 400.0, 300.0, 0.0, -1.5)];
        step(&mut fish, None, InteractionMode::Idle);
        assert!((fish[0].angle + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(fish[0].position, Vec2::new(400.0, 298.5));
    }
}
