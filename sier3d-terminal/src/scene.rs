//! Scene container owning the renderable fractal shapes
use nalgebra::{Matrix4, Point3};
use sier3d_core::{fractal, geometry, FractalError, Mesh, RotationState, Transform};

/// Owns the current fractal configuration and the flat list of renderable
/// tetrahedron meshes derived from it.
///
/// The shape list is only ever replaced wholesale: a depth change builds the
/// complete new list first, then swaps it in, so a renderer holding `shapes()`
/// between frames always sees exactly `4^level` shapes.
pub struct Scene {
    level: u32,
    size: f32,
    shapes: Vec<Mesh>,
    center: Point3<f32>,
}

impl Scene {
    /// Deepest level the interactive controls reach. Shape count grows as
    /// `4^level`; 4^6 = 4096 tetrahedra is already past what a character
    /// grid resolves.
    pub const MAX_LEVEL: u32 = 6;

    pub fn new(level: u32, size: f32) -> Result<Self, FractalError> {
        let mut scene = Self {
            level: level.min(Self::MAX_LEVEL),
            size,
            shapes: Vec::new(),
            center: geometry::centroid(size),
        };
        scene.rebuild()?;
        Ok(scene)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Rotation pivot: the centroid of the full figure.
    pub fn center(&self) -> Point3<f32> {
        self.center
    }

    pub fn shapes(&self) -> &[Mesh] {
        &self.shapes
    }

    /// Model matrix spinning the whole figure about its centroid.
    pub fn model_matrix(&self, rotation: &RotationState) -> Matrix4<f32> {
        Transform::rotation_about(rotation, &self.center)
    }

    /// Change the recursion depth, clamped to `0..=MAX_LEVEL`. Returns
    /// whether the scene actually changed; unchanged levels skip the rebuild.
    pub fn set_level(&mut self, level: u32) -> Result<bool, FractalError> {
        let level = level.min(Self::MAX_LEVEL);
        if level == self.level {
            return Ok(false);
        }
        self.level = level;
        self.rebuild()?;
        Ok(true)
    }

    pub fn raise_level(&mut self) -> Result<bool, FractalError> {
        self.set_level(self.level.saturating_add(1))
    }

    pub fn lower_level(&mut self) -> Result<bool, FractalError> {
        self.set_level(self.level.saturating_sub(1))
    }

    /// Regenerate every shape from a fresh generator call and install the
    /// new list in a single swap.
    fn rebuild(&mut self) -> Result<(), FractalError> {
        let placements = fractal::generate(self.level, self.size)?;
        let shapes: Vec<Mesh> = placements.iter().map(Mesh::from_placement).collect();
        log::info!(
            "scene rebuilt: level {} -> {} tetrahedra",
            self.level,
            shapes.len()
        );
        self.shapes = shapes;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_count_tracks_level() {
        let mut scene = Scene::new(0, 2.0).unwrap();
        assert_eq!(scene.shapes().len(), 1);

        assert!(scene.set_level(3).unwrap());
        assert_eq!(scene.shapes().len(), 64);

        assert!(scene.lower_level().unwrap());
        assert_eq!(scene.shapes().len(), 16);
    }

    #[test]
    fn level_is_clamped() {
        let mut scene = Scene::new(99, 1.0).unwrap();
        assert_eq!(scene.level(), Scene::MAX_LEVEL);

        // Raising past the cap is a no-op, not an error.
        assert!(!scene.raise_level().unwrap());
        assert_eq!(scene.level(), Scene::MAX_LEVEL);

        scene.set_level(0).unwrap();
        assert!(!scene.lower_level().unwrap());
        assert_eq!(scene.level(), 0);
    }

    #[test]
    fn unchanged_level_skips_rebuild() {
        let mut scene = Scene::new(2, 1.0).unwrap();
        assert!(!scene.set_level(2).unwrap());
    }

    #[test]
    fn rejects_invalid_size() {
        assert!(Scene::new(1, 0.0).is_err());
        assert!(Scene::new(1, -2.0).is_err());
    }

    #[test]
    fn every_shape_is_a_tetrahedron() {
        let scene = Scene::new(2, 1.0).unwrap();
        for shape in scene.shapes() {
            assert_eq!(shape.triangles.len(), 4);
        }
    }

    #[test]
    fn centroid_stays_fixed_under_the_model_matrix() {
        let scene = Scene::new(1, 2.0).unwrap();
        let rotation = RotationState::new(0.7, 0.2, 1.3);
        let model = scene.model_matrix(&rotation);
        let moved = model.transform_point(&scene.center());
        assert!((moved - scene.center()).norm() < 1e-5);
    }
}
