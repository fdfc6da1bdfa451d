use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::particle::ParticleSet;

/// Semi-implicit Euler: `v += dt * (gravity + external)`, then
/// `p += dt * v`, for every particle (uniform unit mass).
///
/// Runs unconditionally at the start of each step; collision state is not
/// consulted here. `external` must be index-aligned with the particles.
pub fn integrate(particles: &mut ParticleSet, dt: f32, gravity: Vec3, external: &[Vec3]) {
    debug_assert_eq!(external.len(), particles.count);

    #[cfg(feature = "parallel")]
    {
        particles
            .position
            .par_iter_mut()
            .zip(particles.velocity.par_iter_mut())
            .zip(external.par_iter())
            .for_each(|((pos, vel), force)| {
                *vel += (gravity + *force) * dt;
                *pos += *vel * dt;
            });
    }

    #[cfg(not(feature = "parallel"))]
    for i in 0..particles.count {
        particles.velocity[i] += (gravity + external[i]) * dt;
        particles.position[i] += particles.velocity[i] * dt;
    }
}
