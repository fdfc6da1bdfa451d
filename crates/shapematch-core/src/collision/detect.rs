#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::boundary::Boundary;
use crate::particle::ParticleSet;

/// Test every particle against the boundary planes.
///
/// A particle is collided when its signed distance to any plane drops
/// below the boundary padding. Detection is stateless: flags are derived
/// entirely from current positions, so this must re-run every step even
/// when the previous step already corrected the body. Returns whether any
/// particle collided.
pub fn detect(particles: &mut ParticleSet, boundary: &Boundary) -> bool {
    let padding = boundary.padding;
    let planes = &boundary.planes;

    #[cfg(feature = "parallel")]
    {
        particles
            .collided
            .par_iter_mut()
            .zip(particles.position.par_iter())
            .for_each(|(flag, pos)| {
                *flag = planes.iter().any(|pl| pl.signed_distance(*pos) < padding);
            });
    }

    #[cfg(not(feature = "parallel"))]
    for i in 0..particles.count {
        particles.collided[i] = planes
            .iter()
            .any(|pl| pl.signed_distance(particles.position[i]) < padding);
    }

    particles.collided.iter().any(|&c| c)
}
