use glam::Vec3;

/// A static half-space: points with `normal . p - offset >= 0` are outside
/// the solid region.
#[derive(Clone, Copy, Debug)]
pub struct HalfSpace {
    /// Unit normal pointing away from the solid side.
    pub normal: Vec3,
    /// Distance from the origin along the normal.
    pub offset: f32,
}

impl HalfSpace {
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self {
            normal: normal.normalize(),
            offset,
        }
    }

    /// Signed distance from `point` to the plane; negative means the point
    /// has penetrated the solid side.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.offset
    }
}

/// Static boundary geometry: a small set of half-space planes plus a
/// detection padding applied uniformly to all of them.
#[derive(Clone, Debug)]
pub struct Boundary {
    pub planes: Vec<HalfSpace>,
    /// Particles closer to a plane than this distance count as collided.
    pub padding: f32,
}

impl Boundary {
    /// A single ground plane at `y = 0`.
    pub fn ground() -> Self {
        Self {
            planes: vec![HalfSpace::new(Vec3::Y, 0.0)],
            padding: 0.0,
        }
    }

    /// Six inward-facing planes of an axis-aligned box.
    pub fn aabb(min: Vec3, max: Vec3) -> Self {
        Self {
            planes: vec![
                HalfSpace::new(Vec3::X, min.x),
                HalfSpace::new(-Vec3::X, -max.x),
                HalfSpace::new(Vec3::Y, min.y),
                HalfSpace::new(-Vec3::Y, -max.y),
                HalfSpace::new(Vec3::Z, min.z),
                HalfSpace::new(-Vec3::Z, -max.z),
            ],
            padding: 0.0,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}
