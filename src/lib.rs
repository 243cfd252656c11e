//! Procedural chase-light engine.
//!
//! A [`SpawnEngine`](engine::SpawnEngine) owns one or more closed B-spline
//! paths, each with a cursor that loops around it. Once per frame the host
//! advances the cursors and lets them raise the brightness of every
//! [`Fixture`](fixture::Fixture) within the activation radius.

pub mod config;
pub mod engine;
pub mod error;
pub mod fixture;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use config::{LiveParams, SpawnConfig};
pub use engine::{PathBounds, PathCursor, PathId, SpawnEngine};
pub use error::{ChaseError, Result};
pub use fixture::{Fixture, Light};
