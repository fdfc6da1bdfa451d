//! Best-fit rigid correction via shape matching.
//!
//! Each step that needs correction, the body's current positions are
//! related to its rest shape by the rotation minimizing the summed squared
//! deviation, extracted from the cross-covariance matrix by polar
//! decomposition. Positions snap to the matched rigid pose and velocities
//! are updated consistently with the snap.
//!
//! Reference: "Meshless Deformations Based on Shape Matching", Mueller et
//! al., 2005

use glam::{Mat3, Vec3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::particle::ParticleSet;

/// Determinant threshold below which a matrix counts as singular.
const SINGULAR_DET: f32 = 1.0e-9;

/// Immutable per-body data derived from the captured radius vectors.
pub struct RestShape {
    /// Inverse of `Aqq = sum(q_i * q_i^T)`; `None` when the rest shape is
    /// degenerate (all particles collinear or coplanar) and the inverse
    /// would be ill-conditioned.
    inv_rest_covariance: Option<Mat3>,
}

impl RestShape {
    /// Precompute the rest-shape covariance from the captured radius
    /// vectors. Call once, after `ParticleSet::capture_rest_shape`.
    pub fn from_radius_vectors(rest_radius: &[Vec3]) -> Self {
        let mut aqq = Mat3::ZERO;
        for &q in rest_radius {
            aqq += mat3_outer(q, q);
        }
        let inv_rest_covariance = if aqq.determinant().abs() < SINGULAR_DET {
            None
        } else {
            Some(aqq.inverse())
        };
        Self { inv_rest_covariance }
    }

    /// True when the rest shape spans all three dimensions.
    pub fn is_well_conditioned(&self) -> bool {
        self.inv_rest_covariance.is_some()
    }
}

/// Snap all particles to the best-fit rigid transform of the rest shape.
///
/// Computes the current centroid `c` and cross-covariance
/// `Apq = sum((p_i - c) * q_i^T)`, extracts the rotation `R` from
/// `Apq * Aqq^-1` by polar decomposition, then moves every particle to
/// `c + R * q_i` with the velocity updated as `(goal - old) / dt`.
///
/// Matching is idempotent: positions already forming a rigid transform of
/// the rest shape are left in place with zero velocity change.
pub fn match_shape(rest: &RestShape, particles: &mut ParticleSet, dt: f32) {
    let c = particles.centroid();

    // Deterministic serial reduction, also under the parallel feature.
    let mut apq = Mat3::ZERO;
    for i in 0..particles.count {
        apq += mat3_outer(particles.position[i] - c, particles.rest_radius[i]);
    }

    // Degenerate rest shapes skip the Aqq term; the polar factor of Apq
    // alone is still the closest rotation.
    let a = match rest.inv_rest_covariance {
        Some(inv) => apq * inv,
        None => apq,
    };
    let r = polar_decomposition(a);

    #[cfg(feature = "parallel")]
    {
        particles
            .position
            .par_iter_mut()
            .zip(particles.velocity.par_iter_mut())
            .zip(particles.rest_radius.par_iter())
            .for_each(|((pos, vel), &q)| {
                let goal = c + r * q;
                *vel = (goal - *pos) / dt;
                *pos = goal;
            });
    }

    #[cfg(not(feature = "parallel"))]
    for i in 0..particles.count {
        let goal = c + r * particles.rest_radius[i];
        particles.velocity[i] = (goal - particles.position[i]) / dt;
        particles.position[i] = goal;
    }
}

/// Outer product of two `Vec3`: returns a `Mat3` where M = a * b^T.
fn mat3_outer(a: Vec3, b: Vec3) -> Mat3 {
    Mat3::from_cols(a * b.x, a * b.y, a * b.z)
}

/// Iterative polar decomposition: extract the rotation from A = R * S.
///
/// Iterates `R_{k+1} = 0.5 * (R_k + R_k^{-T})` until the update falls
/// below 1e-6 (at most 32 iterations), converging to the orthonormal
/// factor closest to `A` in Frobenius norm. Singular or reflecting inputs
/// return identity rather than a non-rotation.
pub fn polar_decomposition(a: Mat3) -> Mat3 {
    let mut r = a;
    for _ in 0..32 {
        if r.determinant().abs() < 1.0e-10 {
            return Mat3::IDENTITY;
        }
        let next = (r + r.inverse().transpose()) * 0.5;
        let delta = max_abs_element(next - r);
        r = next;
        if delta < 1.0e-6 {
            break;
        }
    }
    // A reflection (det -1) is not a valid rigid correction.
    if r.determinant() < 0.0 {
        return Mat3::IDENTITY;
    }
    r
}

fn max_abs_element(m: Mat3) -> f32 {
    m.x_axis
        .abs()
        .max_element()
        .max(m.y_axis.abs().max_element())
        .max(m.z_axis.abs().max_element())
}
