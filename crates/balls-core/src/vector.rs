//! In-place helpers on top of `glam::Vec3`.
//!
//! Balls hold their positional state as plain `Vec3` values and mutate them
//! every tick; this trait names the handful of in-place updates the
//! integrator and the hosts rely on.

pub use glam::Vec3 as Vector3;

pub trait Vector3Ext {
    fn set(&mut self, x: f32, y: f32, z: f32);
    fn add_x(&mut self, dx: f32);
    fn add_y(&mut self, dy: f32);
    fn add_z(&mut self, dz: f32);
    /// Euclidean distance in the xy plane, ignoring z.
    fn planar_distance(&self, other: &Self) -> f32;
}

impl Vector3Ext for Vector3 {
    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    #[inline]
    fn add_x(&mut self, dx: f32) {
        self.x += dx;
    }

    #[inline]
    fn add_y(&mut self, dy: f32) {
        self.y += dy;
    }

    #[inline]
    fn add_z(&mut self, dz: f32) {
        self.z += dz;
    }

    #[inline]
    fn planar_distance(&self, other: &Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
