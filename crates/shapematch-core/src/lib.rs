//! Shape-matching rigid body particle simulation core.
//!
//! A single deformable-but-shape-preserving body made of lattice particles:
//! each step the particles move freely under gravity, collide with a static
//! boundary, and are then corrected toward the closest rigid transform
//! (rotation + translation) of their rest configuration. Rendering and
//! windowing live in the host; this crate only owns the particle state and
//! exposes position snapshots.

pub mod boundary;
pub mod collision;
pub mod config;
pub mod integrator;
pub mod particle;
pub mod shape_matching;
pub mod snapshot;
pub mod solver;

pub use boundary::{Boundary, HalfSpace};
pub use config::{ConfigError, ResponseConfig, SimConfig};
pub use particle::ParticleSet;
pub use snapshot::RenderParticle;
pub use solver::Solver;
