/*
 * Population Module
 *
 * Builds the initial stores and keeps the fish store in line with the
 * configured population and speed while the simulation runs. Survivors are
 * never reset: only their cruising speed is resampled, so a slider change
 * does not make the school jump.
 */

use rand::Rng;

use crate::fish::{cruising_speed, Fish};
use crate::jellyfish::Jellyfish;
use crate::world::Bounds;

// Population changes this small are ignored to avoid thrashing on every slider tick
pub const RESIZE_HYSTERESIS: usize = 5;

/// What a reconciliation pass did to the store size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    Unchanged,
    Grew { added: usize },
    Shrank { removed: usize },
}

pub fn populate_fish<R: Rng + ?Sized>(
    count: usize,
    base_speed: f32,
    bounds: Bounds,
    next_id: &mut u64,
    rng: &mut R,
) -> Vec<Fish> {
    (0..count)
        .map(|_| {
            let id = take_id(next_id);
            Fish::spawn(rng, id, bounds.width, bounds.height, base_speed)
        })
        .collect()
}

pub fn populate_jellyfish<R: Rng + ?Sized>(
    count: usize,
    bounds: Bounds,
    next_id: &mut u64,
    rng: &mut R,
) -> Vec<Jellyfish> {
    (0..count)
        .map(|_| {
            let id = take_id(next_id);
            Jellyfish::spawn(rng, id, bounds.width, bounds.height)
        })
        .collect()
}

/// Grow or shrink the fish store towards `desired` (only when it is more than
/// `RESIZE_HYSTERESIS` away), then resample every fish's cruising speed from
/// `base_speed`.
///
/// New fish are appended with fresh ids; shrinking drops the tail, so the
/// most recently added fish go first.
pub fn reconcile_fish<R: Rng + ?Sized>(
    fish: &mut Vec<Fish>,
    desired: usize,
    base_speed: f32,
    bounds: Bounds,
    next_id: &mut u64,
    rng: &mut R,
) -> Resize {
    let current = fish.len();

    let resize = if current.abs_diff(desired) <= RESIZE_HYSTERESIS {
        Resize::Unchanged
    } else if desired > current {
        let added = desired - current;
        fish.extend(populate_fish(added, base_speed, bounds, next_id, rng));
        Resize::Grew { added }
    } else {
        fish.truncate(desired);
        Resize::Shrank { removed: current - desired }
    };

    // Update base speeds for the whole school, not just newcomers
    for f in fish.iter_mut() {
        f.speed = cruising_speed(rng, base_speed);
    }

    resize
}

fn take_id(next_id: &mut u64) -> u64 {
    let id = *next_id;
    *next_id += 1;
    id
}
