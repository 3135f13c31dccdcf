/*
 * Drift Module
 *
 * Per-frame updates for the passive species: jellyfish (upward drift,
 * sideways sway, toroidal wrap) and bubbles (rise, wiggle, expiry).
 */

use crate::bubble::Bubble;
use crate::jellyfish::Jellyfish;
use crate::world::Bounds;

pub fn update_jellyfish(jellyfish: &mut [Jellyfish], tick: u64, bounds: Bounds) {
    for jelly in jellyfish {
        jelly.drift(tick, bounds.width, bounds.height);
    }
}

/// Move every bubble and drop the ones that rose past the top in the same
/// pass. Survivors keep their relative order. Returns how many were removed.
pub fn update_bubbles(bubbles: &mut Vec<Bubble>) -> usize {
    let before = bubbles.len();
    bubbles.retain_mut(|bubble| {
        bubble.drift();
        !bubble.is_expired()
    });
    before - bubbles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn bubble(id: u64, y: f32) -> Bubble {
        Bubble {
            id,
            position: Vec2::new(100.0, y),
            velocity: Vec2::new(0.0, -1.0),
            radius: 3.0,
            alpha: 1.0,
        }
    }

    #[test]
    fn expired_bubbles_are_removed_and_survivors_keep_order() {
        let mut bubbles = vec![bubble(0, -60.0), bubble(1, 200.0), bubble(2, -49.5), bubble(3, -40.0), bubble(4, 10.0)];
        let removed = update_bubbles(&mut bubbles);

        // -60 -> -61 and -49.5 -> -50.5 are gone; -40 -> -41 survives
        assert_eq!(removed, 2);
        let ids: Vec<u64> = bubbles.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(bubbles.iter().all(|b| b.position.y >= -50.0));
    }

    #[test]
    fn empty_store_is_fine() {
        let mut bubbles = Vec::new();
        assert_eq!(update_bubbles(&mut bubbles), 0);
    }

    #[test]
    fn jellyfish_wrap_within_the_same_step() {
        let mut jellyfish = vec![Jellyfish {
            id: 0,
            position: Vec2::new(400.0, -100.0),
            velocity: Vec2::new(0.0, -0.3),
            size: 25.0,
            phase_offset: 0.0,
            color: 0,
        }];
        update_jellyfish(&mut jellyfish, 0, Bounds::new(800.0, 600.0));
        assert_eq!(jellyfish[0].position.y, 700.0);
    }
}
