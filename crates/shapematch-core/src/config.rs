use glam::{Quat, Vec3};
use thiserror::Error;

use crate::boundary::Boundary;

/// Collision response policy (see module docs on `collision::response`).
#[derive(Clone, Copy, Debug)]
pub enum ResponseConfig {
    /// Soft constraint: a force proportional to penetration depth is fed
    /// into the next integration step. Does not guarantee non-penetration.
    Penalty { stiffness: f32 },
    /// Velocity reflection with restitution-like normal attenuation and
    /// Coulomb-style tangential friction, applied immediately.
    Impulse {
        /// `mu_n` in `[0, 1]`: fraction of inbound normal speed kept
        /// (reversed) after impact.
        normal_restitution: f32,
        /// `mu_t >= 0`: Coulomb friction coefficient for the tangential
        /// velocity attenuation.
        tangential_friction: f32,
        /// Project penetrating particles back to the padded surface.
        push_out: bool,
    },
}

pub struct SimConfig {
    pub particle_count: usize,
    /// Lattice spacing between adjacent particles.
    pub spacing: f32,
    /// Side length of the lattice cube.
    pub cube_extent: f32,
    /// Lattice origin (position of particle 0 before the initial pose).
    pub origin: Vec3,
    /// Rigid translation applied to the whole body before rest capture.
    pub initial_translation: Vec3,
    /// Optional rigid rotation about the centroid, applied before rest
    /// capture.
    pub initial_rotation: Option<Quat>,
    /// Uniform initial velocity for all particles.
    pub initial_velocity: Vec3,
    pub gravity: Vec3,
    pub dt: f32,
    pub response: ResponseConfig,
    pub boundary: Boundary,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: 968,
            spacing: 0.02,
            cube_extent: 0.2,
            origin: Vec3::ZERO,
            initial_translation: Vec3::new(0.0, 0.5, 0.0),
            initial_rotation: None,
            initial_velocity: Vec3::ZERO,
            gravity: Vec3::new(0.0, -9.8, 0.0),
            dt: 1.0e-3,
            response: ResponseConfig::Impulse {
                normal_restitution: 0.4,
                tangential_friction: 0.2,
                push_out: true,
            },
            boundary: Boundary::ground(),
        }
    }
}

impl SimConfig {
    /// Reject configurations the simulation cannot be constructed from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if !(self.spacing > 0.0) {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if !(self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        match self.response {
            ResponseConfig::Penalty { stiffness } => {
                if !(stiffness >= 0.0) {
                    return Err(ConfigError::InvalidStiffness(stiffness));
                }
            }
            ResponseConfig::Impulse {
                normal_restitution,
                tangential_friction,
                ..
            } => {
                if !(0.0..=1.0).contains(&normal_restitution) {
                    return Err(ConfigError::InvalidRestitution(normal_restitution));
                }
                if !(tangential_friction >= 0.0) {
                    return Err(ConfigError::InvalidFriction(tangential_friction));
                }
            }
        }
        for (i, plane) in self.boundary.planes.iter().enumerate() {
            // A zero normal turns NaN under normalization in HalfSpace::new
            if !plane.normal.is_finite() || !plane.offset.is_finite() {
                return Err(ConfigError::InvalidBoundaryPlane(i));
            }
        }
        if !(self.boundary.padding >= 0.0) {
            return Err(ConfigError::InvalidPadding(self.boundary.padding));
        }
        Ok(())
    }
}

/// Construction-time configuration rejection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be positive")]
    ZeroParticles,
    #[error("lattice spacing must be positive, got {0}")]
    InvalidSpacing(f32),
    #[error("time step must be positive, got {0}")]
    InvalidTimeStep(f32),
    #[error("penalty stiffness must be non-negative, got {0}")]
    InvalidStiffness(f32),
    #[error("normal restitution must be in [0, 1], got {0}")]
    InvalidRestitution(f32),
    #[error("friction coefficient must be non-negative, got {0}")]
    InvalidFriction(f32),
    #[error("boundary padding must be non-negative, got {0}")]
    InvalidPadding(f32),
    #[error("boundary plane {0} has a non-finite normal or offset")]
    InvalidBoundaryPlane(usize),
}
