/*
 * Frame Driver Module
 *
 * The frame driver is the single entry point a host calls into: it owns the
 * World while running, buffers configuration and pointer input between
 * ticks, and advances the simulation exactly one frame per `tick()`.
 *
 * States:
 * - Stopped: no viewport yet (or torn down); no stores exist
 * - Running: bounds known and populations built
 */

use glam::Vec2;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::input::{self, InputQueue};
use crate::params::SimulationConfig;
use crate::world::{Bounds, RenderView, World};

pub enum DriverState {
    Stopped,
    Running(Box<World>),
}

pub struct FrameDriver {
    state: DriverState,
    // Latest accepted configuration
    config: SimulationConfig,
    // Replacement waiting for the next tick
    pending_config: Option<SimulationConfig>,
    inputs: InputQueue,
}

impl FrameDriver {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            state: DriverState::Stopped,
            config,
            pending_config: None,
            inputs: InputQueue::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running(_))
    }

    pub fn state(&self) -> &DriverState {
        &self.state
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn world(&self) -> Option<&World> {
        match &self.state {
            DriverState::Running(world) => Some(world),
            DriverState::Stopped => None,
        }
    }

    /// Replace the configuration snapshot. The running world picks it up at
    /// the start of the next tick; an invalid config is rejected whole.
    pub fn submit_config(&mut self, config: SimulationConfig) -> Result<(), ConfigError> {
        config.validate()?;
        debug!(?config, "configuration submitted");
        self.config = config.clone();
        if self.is_running() {
            self.pending_config = Some(config);
        }
        Ok(())
    }

    /// New viewport dimensions. The first valid size starts the simulation.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = Bounds::new(width, height);
        if !bounds.is_valid() {
            debug!(width, height, "ignoring unusable viewport size");
            return;
        }

        if let DriverState::Running(world) = &mut self.state {
            world.resize(bounds);
            return;
        }

        let world = World::new(self.config.clone(), bounds);
        info!(
            width,
            height,
            fish = world.fish().len(),
            jellyfish = world.jellyfish().len(),
            "simulation started"
        );
        self.pending_config = None;
        self.state = DriverState::Running(Box::new(world));
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.inputs.pointer_moved(Vec2::new(x, y));
    }

    pub fn pointer_left(&mut self) {
        self.inputs.pointer_left();
    }

    pub fn clicked(&mut self, x: f32, y: f32) {
        self.inputs.clicked(Vec2::new(x, y));
    }

    /// Advance one frame: apply any pending config, ingest input, run the
    /// engines, and hand back a read-only view. Does nothing while stopped.
    pub fn tick(&mut self) -> Option<RenderView<'_>> {
        let DriverState::Running(world) = &mut self.state else {
            return None;
        };

        if let Some(config) = self.pending_config.take() {
            world.apply_config(config);
        }

        input::ingest(world, self.inputs.drain());
        world.step();

        Some(world.view())
    }

    /// Tear down: every store is discarded along with any queued input.
    pub fn stop(&mut self) {
        if let DriverState::Running(world) = &self.state {
            info!(ticks = world.tick(), "simulation stopped");
        }
        self.state = DriverState::Stopped;
        self.pending_config = None;
        self.inputs.clear();
    }
}
