use glam::{DVec3, Quat, Vec3};

/// SoA particle storage for a single rigid body.
pub struct ParticleSet {
    pub count: usize,
    pub position: Vec<Vec3>,
    pub velocity: Vec<Vec3>,
    /// Position relative to the body centroid at the reference pose.
    /// Captured once by [`capture_rest_shape`](Self::capture_rest_shape)
    /// and immutable afterwards; defines the body shape.
    pub rest_radius: Vec<Vec3>,
    /// Per-step boundary violation flag, rebuilt by collision detection.
    pub collided: Vec<bool>,
}

impl ParticleSet {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec3::ZERO; count],
            velocity: vec![Vec3::ZERO; count],
            rest_radius: vec![Vec3::ZERO; count],
            collided: vec![false; count],
        }
    }

    /// Lay particles on a cubic lattice starting at `origin`.
    ///
    /// Particles fill horizontal layers row-major: `per_row` particles per
    /// row, `per_row^2` per layer, where `per_row = floor(extent/spacing)+1`.
    /// Lattice axes map (col, layer, row) to (x, y, z).
    pub fn lattice(count: usize, spacing: f32, cube_extent: f32, origin: Vec3) -> Self {
        let mut particles = Self::new(count);
        let per_row = (cube_extent / spacing) as usize + 1;
        let per_floor = per_row * per_row;
        for i in 0..count {
            let floor = i / per_floor;
            let row = (i % per_floor) / per_row;
            let col = (i % per_floor) % per_row;
            particles.position[i] =
                origin + Vec3::new(col as f32, floor as f32, row as f32) * spacing;
        }
        particles
    }

    /// Mean of current positions.
    pub fn centroid(&self) -> Vec3 {
        let mut sum = Vec3::ZERO;
        for &p in &self.position {
            sum += p;
        }
        sum / self.count as f32
    }

    /// Rigidly translate all particles.
    pub fn translate(&mut self, delta: Vec3) {
        for p in &mut self.position {
            *p += delta;
        }
    }

    /// Rigidly rotate all particles about their current centroid.
    pub fn rotate_about_centroid(&mut self, rotation: Quat) {
        let c = self.centroid();
        for p in &mut self.position {
            *p = c + rotation * (*p - c);
        }
    }

    /// Capture the rest shape: store each particle's offset from the
    /// current centroid into `rest_radius`.
    ///
    /// Must be called exactly once, after any initial pose adjustment and
    /// before the first shape-matching step. The captured radius vectors
    /// sum to zero.
    ///
    /// The centroid is accumulated in f64: at ~1000 particles a naive f32
    /// sum carries enough rounding error that the radius vectors visibly
    /// fail to cancel.
    pub fn capture_rest_shape(&mut self) {
        let mut sum = DVec3::ZERO;
        for &p in &self.position {
            sum += p.as_dvec3();
        }
        let c = sum / self.count as f64;
        for i in 0..self.count {
            self.rest_radius[i] = (self.position[i].as_dvec3() - c).as_vec3();
        }
    }

    /// Clear all per-step collision flags.
    pub fn reset_collision_flags(&mut self) {
        self.collided.fill(false);
    }
}
