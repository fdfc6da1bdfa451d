/// GPU-compatible particle snapshot: 32 bytes, directly uploadable by a
/// rendering host.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderParticle {
    pub position: [f32; 3], // 12 bytes
    pub radius: f32,        //  4 bytes
    pub velocity: [f32; 3], // 12 bytes
    pub _pad: f32,          //  4 bytes
}

impl RenderParticle {
    pub const ZERO: Self = Self {
        position: [0.0; 3],
        radius: 0.0,
        velocity: [0.0; 3],
        _pad: 0.0,
    };
}
