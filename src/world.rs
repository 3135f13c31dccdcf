/*
 * World Module
 *
 * The World owns every entity store plus the inputs the engines read each
 * frame: cursor, elapsed ticks, the live configuration and the viewport
 * bounds. Nothing else holds a mutable reference to the stores; renderers
 * get a read-only RenderView once per tick.
 */

use glam::Vec2;
use rand::{rngs::SmallRng, SeedableRng};
use tracing::{debug, info, trace};

use crate::bubble::{self, Bubble};
use crate::drift;
use crate::fish::Fish;
use crate::jellyfish::Jellyfish;
use crate::params::{ConfigChanges, SimulationConfig, MAX_POPULATION};
use crate::physics::{self, FlockingParams};
use crate::population;
use crate::theme::Theme;

/// Viewport dimensions in simulation units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Usable only when both sides are positive and finite
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Read-only snapshot of the stores handed to a renderer once per tick.
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub fish: &'a [Fish],
    pub jellyfish: &'a [Jellyfish],
    pub bubbles: &'a [Bubble],
    pub tick: u64,
    pub bounds: Bounds,
    pub theme: Theme,
    pub show_debug: bool,
}

pub struct World {
    pub(crate) fish: Vec<Fish>,
    pub(crate) jellyfish: Vec<Jellyfish>,
    pub(crate) bubbles: Vec<Bubble>,
    pub(crate) cursor: Option<Vec2>,
    pub(crate) tick: u64,
    pub(crate) config: SimulationConfig,
    pub(crate) bounds: Bounds,
    pub(crate) flocking: FlockingParams,
    pub(crate) rng: SmallRng,
    next_fish_id: u64,
    next_jellyfish_id: u64,
    next_bubble_id: u64,
}

impl World {
    /// Build a world with its initial populations inside `bounds`.
    pub fn new(config: SimulationConfig, bounds: Bounds) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut world = Self {
            fish: Vec::new(),
            jellyfish: Vec::new(),
            bubbles: Vec::new(),
            cursor: None,
            tick: 0,
            config,
            bounds,
            flocking: FlockingParams::default(),
            rng,
            next_fish_id: 0,
            next_jellyfish_id: 0,
            next_bubble_id: 0,
        };
        world.populate_empty_stores();
        world
    }

    pub fn fish(&self) -> &[Fish] {
        &self.fish
    }

    pub fn jellyfish(&self) -> &[Jellyfish] {
        &self.jellyfish
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn flocking_params(&self) -> &FlockingParams {
        &self.flocking
    }

    /// Cursor target in viewport coordinates, or None for "no influence".
    pub fn set_cursor(&mut self, cursor: Option<Vec2>) {
        self.cursor = cursor;
    }

    /// Release a burst of bubbles at `origin`. Returns how many were added.
    pub fn spawn_burst(&mut self, origin: Vec2) -> usize {
        let burst = bubble::burst(&mut self.rng, &mut self.next_bubble_id, origin);
        let added = burst.len();
        self.bubbles.extend(burst);
        trace!(x = origin.x, y = origin.y, added, "bubble burst");
        added
    }

    /// Replace the configuration snapshot, reconciling the fish store when
    /// population size or speed changed.
    pub fn apply_config(&mut self, config: SimulationConfig) -> ConfigChanges {
        let changes = config.detect_changes(&self.config);
        self.config = config;

        if changes.needs_reconcile() {
            let before = self.fish.len();
            let outcome = population::reconcile_fish(
                &mut self.fish,
                self.config.fish_count.min(MAX_POPULATION),
                self.config.base_speed,
                self.bounds,
                &mut self.next_fish_id,
                &mut self.rng,
            );
            debug!(
                ?outcome,
                before,
                after = self.fish.len(),
                desired = self.config.fish_count,
                base_speed = self.config.base_speed,
                "reconciled fish population"
            );
        } else if changes.any_changed {
            debug!(?changes, "configuration replaced");
        }

        changes
    }

    /// Track new viewport dimensions. Populations are only rebuilt when a
    /// store is empty.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        info!(width = bounds.width, height = bounds.height, "viewport resized");
        self.bounds = bounds;
        self.populate_empty_stores();
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        physics::update_fish(
            &mut self.fish,
            self.cursor,
            self.config.interaction_mode,
            self.bounds,
            &self.flocking,
            &mut self.rng,
        );
        drift::update_jellyfish(&mut self.jellyfish, self.tick, self.bounds);
        drift::update_bubbles(&mut self.bubbles);
        self.tick += 1;
    }

    pub fn view(&self) -> RenderView<'_> {
        RenderView {
            fish: &self.fish,
            jellyfish: &self.jellyfish,
            bubbles: &self.bubbles,
            tick: self.tick,
            bounds: self.bounds,
            theme: self.config.theme,
            show_debug: self.config.show_debug,
        }
    }

    fn populate_empty_stores(&mut self) {
        if self.fish.is_empty() {
            self.fish = population::populate_fish(
                self.config.fish_count.min(MAX_POPULATION),
                self.config.base_speed,
                self.bounds,
                &mut self.next_fish_id,
                &mut self.rng,
            );
        }
        if self.jellyfish.is_empty() {
            self.jellyfish = population::populate_jellyfish(
                self.config.jellyfish_count.min(MAX_POPULATION),
                self.bounds,
                &mut self.next_jellyfish_id,
                &mut self.rng,
            );
        }
    }
}
