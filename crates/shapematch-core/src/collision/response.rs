//! Collision response policies.
//!
//! Two interchangeable strategies, selected by [`ResponseConfig`]:
//! a penalty force proportional to penetration depth (soft, fed into the
//! next integration), and an immediate impulse-style velocity reflection
//! with Coulomb friction. Only particles flagged by detection are touched.
//!
//! [`ResponseConfig`]: crate::config::ResponseConfig

use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::boundary::Boundary;
use crate::particle::ParticleSet;

/// Guards the tangential-speed division in the friction attenuation.
const FRICTION_EPS: f32 = 1.0e-5;

/// Accumulate `stiffness * |phi| * normal` into `forces` for every flagged
/// particle penetrating a plane by depth `phi`.
///
/// The buffer is consumed by the next `integrate` call, so the push-back
/// acts one step delayed.
pub fn apply_penalty(
    particles: &ParticleSet,
    boundary: &Boundary,
    stiffness: f32,
    forces: &mut [Vec3],
) {
    debug_assert_eq!(forces.len(), particles.count);
    let padding = boundary.padding;
    for i in 0..particles.count {
        if !particles.collided[i] {
            continue;
        }
        for plane in &boundary.planes {
            let phi = plane.signed_distance(particles.position[i]) - padding;
            if phi < 0.0 {
                forces[i] += plane.normal * (stiffness * -phi);
            }
        }
    }
}

/// Reflect the velocity of every flagged particle moving into a violated
/// plane.
///
/// The velocity splits into a normal part `vn` and tangential part `vt`.
/// The normal part reverses scaled by `mu_n`; the tangential part shrinks
/// by `a = max(0, 1 - mu_t * (1 + mu_n) * |vn| / (|vt| + eps))`, a Coulomb
/// friction attenuation. With `push_out` set, penetrating particles are
/// also projected back to the padded surface.
pub fn apply_impulse(
    particles: &mut ParticleSet,
    boundary: &Boundary,
    mu_n: f32,
    mu_t: f32,
    push_out: bool,
) {
    let padding = boundary.padding;
    let planes = &boundary.planes;

    let respond = |pos: &mut Vec3, vel: &mut Vec3| {
        for plane in planes {
            let phi = plane.signed_distance(*pos) - padding;
            if phi >= 0.0 {
                continue;
            }
            let vn_scalar = vel.dot(plane.normal);
            if vn_scalar < 0.0 {
                let vn = plane.normal * vn_scalar;
                let vt = *vel - vn;
                let attenuation =
                    (1.0 - mu_t * (1.0 + mu_n) * vn.length() / (vt.length() + FRICTION_EPS))
                        .max(0.0);
                *vel = vn * -mu_n + vt * attenuation;
            }
            if push_out {
                *pos -= plane.normal * phi;
            }
        }
    };

    #[cfg(feature = "parallel")]
    {
        particles
            .position
            .par_iter_mut()
            .zip(particles.velocity.par_iter_mut())
            .zip(particles.collided.par_iter())
            .for_each(|((pos, vel), &collided)| {
                if collided {
                    respond(pos, vel);
                }
            });
    }

    #[cfg(not(feature = "parallel"))]
    for i in 0..particles.count {
        if particles.collided[i] {
            respond(&mut particles.position[i], &mut particles.velocity[i]);
        }
    }
}
