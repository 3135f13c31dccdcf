/*
 * Lumina - Module Definitions
 *
 * An interactive generative ocean: a school of fish flocking around the
 * pointer, jellyfish drifting upward, and bubbles released by clicks.
 *
 * The simulation core (everything outside the `viewer` feature) is plain
 * data plus per-frame update functions; the viewer is a nannou app that
 * draws it and feeds it pointer and configuration input.
 */

// Re-export key components for easier access
pub use bubble::Bubble;
pub use debug::DebugInfo;
pub use driver::{DriverState, FrameDriver};
pub use error::ConfigError;
pub use fish::Fish;
pub use glam::Vec2;
pub use jellyfish::Jellyfish;
pub use params::{InteractionMode, SimulationConfig};
pub use physics::FlockingParams;
pub use theme::Theme;
pub use world::{Bounds, RenderView, World};

// Define modules
pub mod bubble;
pub mod debug;
pub mod drift;
pub mod driver;
pub mod error;
pub mod fish;
pub mod input;
pub mod jellyfish;
pub mod params;
pub mod physics;
pub mod population;
pub mod theme;
pub mod vector;
pub mod world;

#[cfg(feature = "viewer")]
pub mod app;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod ui;

// Window size used when the monitor size is unknown
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (1280, 800);
