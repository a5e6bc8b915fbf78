//! 3D transformation matrices, rotation state, and spin control
use nalgebra::{Matrix4, Vector3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// User-adjustable continuous rotation rate, applied once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Spin {
    speed: f32,
    paused: bool,
}

impl Spin {
    pub const DEFAULT_SPEED: f32 = 0.01;
    pub const MAX_SPEED: f32 = 0.2;
    pub const SPEED_STEP: f32 = 0.005;

    pub fn new(speed: f32) -> Self {
        Self {
            speed: speed.clamp(0.0, Self::MAX_SPEED),
            paused: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Change the spin rate, staying within `0.0..=MAX_SPEED`.
    pub fn adjust(&mut self, delta: f32) {
        self.speed = (self.speed + delta).clamp(0.0, Self::MAX_SPEED);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance a rotation state by one frame of spin about the Y axis.
    pub fn apply(&self, rotation: &mut RotationState) {
        if !self.paused {
            rotation.rotate(0.0, self.speed, 0.0);
        }
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from a rotation state
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        // Apply rotations in order: Z, Y, X
        rz * ry * rx
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Rotation about an arbitrary pivot point instead of the origin.
    pub fn rotation_about(rotation: &RotationState, pivot: &nalgebra::Point3<f32>) -> Matrix4<f32> {
        Self::translation_matrix(pivot.x, pivot.y, pivot.z)
            * Self::rotation_matrix(rotation)
            * Self::translation_matrix(-pivot.x, -pivot.y, -pivot.z)
    }
}
