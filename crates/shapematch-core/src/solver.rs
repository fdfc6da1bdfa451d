use glam::Vec3;

use crate::collision::{apply_impulse, apply_penalty, detect};
use crate::config::{ConfigError, ResponseConfig, SimConfig};
use crate::integrator::integrate;
use crate::particle::ParticleSet;
use crate::shape_matching::{match_shape, RestShape};
use crate::snapshot::RenderParticle;

/// Owns the particle state and runs the per-step pipeline:
/// integrate, detect, and on any collision respond then re-impose
/// rigidity by shape matching.
pub struct Solver {
    pub particles: ParticleSet,
    pub config: SimConfig,
    rest_shape: RestShape,
    /// Pending penalty forces, consumed by the next integration.
    penalty_forces: Vec<Vec3>,
    render_buffer: Vec<RenderParticle>,
    paused: bool,
}

impl Solver {
    /// Validate the configuration, lay out the lattice, apply the initial
    /// pose, and capture the rest shape.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut particles = ParticleSet::lattice(
            config.particle_count,
            config.spacing,
            config.cube_extent,
            config.origin,
        );
        particles.translate(config.initial_translation);
        if let Some(rotation) = config.initial_rotation {
            particles.rotate_about_centroid(rotation);
        }
        particles.velocity.fill(config.initial_velocity);
        particles.capture_rest_shape();
        let rest_shape = RestShape::from_radius_vectors(&particles.rest_radius);

        let count = particles.count;
        Ok(Self {
            particles,
            config,
            rest_shape,
            penalty_forces: vec![Vec3::ZERO; count],
            render_buffer: vec![RenderParticle::ZERO; count],
            paused: false,
        })
    }

    /// Advance the simulation by one fixed `dt`. No-op while paused.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }
        let dt = self.config.dt;

        self.particles.reset_collision_flags();

        integrate(
            &mut self.particles,
            dt,
            self.config.gravity,
            &self.penalty_forces,
        );
        self.penalty_forces.fill(Vec3::ZERO);

        let any_collided = detect(&mut self.particles, &self.config.boundary);
        if any_collided {
            match self.config.response {
                ResponseConfig::Penalty { stiffness } => apply_penalty(
                    &self.particles,
                    &self.config.boundary,
                    stiffness,
                    &mut self.penalty_forces,
                ),
                ResponseConfig::Impulse {
                    normal_restitution,
                    tangential_friction,
                    push_out,
                } => apply_impulse(
                    &mut self.particles,
                    &self.config.boundary,
                    normal_restitution,
                    tangential_friction,
                    push_out,
                ),
            }
            match_shape(&self.rest_shape, &mut self.particles, dt);
        }

        self.debug_check_finite();
    }

    /// Run `n` substeps back to back. Hosts typically batch several
    /// substeps per rendered frame.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Read-only position snapshot, index-aligned with particle identity.
    pub fn positions(&self) -> &[Vec3] {
        &self.particles.position
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fill and return the Pod render buffer, positions and velocities
    /// scaled uniformly into the host's scene space.
    pub fn render_snapshot(&mut self, scale: f32) -> &[RenderParticle] {
        let radius = 0.5 * self.config.spacing * scale;
        for i in 0..self.particles.count {
            self.render_buffer[i] = RenderParticle {
                position: (self.particles.position[i] * scale).to_array(),
                radius,
                velocity: (self.particles.velocity[i] * scale).to_array(),
                _pad: 0.0,
            };
        }
        &self.render_buffer
    }

    #[cfg(debug_assertions)]
    fn debug_check_finite(&self) {
        for i in 0..self.particles.count {
            debug_assert!(
                self.particles.position[i].is_finite() && self.particles.velocity[i].is_finite(),
                "non-finite particle state at index {i}"
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_finite(&self) {}
}
