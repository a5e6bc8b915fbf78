//! Recursive Sierpinski tetrahedron generation
use nalgebra::Point3;
use thiserror::Error;

use crate::geometry::corner_offsets;

/// One leaf tetrahedron of the fractal: edge length plus the position of its
/// reference vertex (not its centroid).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Point3<f32>,
    pub size: f32,
}

/// Argument errors raised before any subdivision happens.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FractalError {
    #[error("tetrahedron size must be a positive finite number, got {0}")]
    InvalidSize(f32),
}

/// Generate the leaf tetrahedra of a Sierpinski fractal anchored at the
/// coordinate-space origin.
///
/// See [`generate_from`] for the full contract.
pub fn generate(level: u32, size: f32) -> Result<Vec<Placement>, FractalError> {
    generate_from(level, size, Point3::origin())
}

/// Generate the leaf tetrahedra of a Sierpinski fractal anchored at `origin`.
///
/// At level 0 the result is a single placement at `origin` with edge `size`.
/// Each further level splits the figure into four half-size copies at the
/// corners of a regular tetrahedron, so the result holds exactly `4^level`
/// placements of edge `size / 2^level`, in a fixed corner order.
///
/// The function is pure: identical arguments reproduce identical output, and
/// nothing is shared between calls.
pub fn generate_from(
    level: u32,
    size: f32,
    origin: Point3<f32>,
) -> Result<Vec<Placement>, FractalError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(FractalError::InvalidSize(size));
    }

    // Capacity hint overflows past level 31; let the vec grow in that case.
    let mut leaves = Vec::with_capacity(4usize.checked_pow(level).unwrap_or(0));
    subdivide(level, size, origin, &mut leaves);
    Ok(leaves)
}

fn subdivide(level: u32, size: f32, origin: Point3<f32>, leaves: &mut Vec<Placement>) {
    if level == 0 {
        leaves.push(Placement {
            position: origin,
            size,
        });
        return;
    }

    let half = size / 2.0;
    for offset in corner_offsets(half) {
        subdivide(level - 1, half, origin + offset, leaves);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{SQRT_3, SQRT_6};

    #[test]
    fn level_zero_is_a_single_leaf() {
        let origin = Point3::new(1.0, 2.0, 3.0);
        let leaves = generate_from(0, 1.5, origin).unwrap();
        assert_eq!(
            leaves,
            vec![Placement {
                position: origin,
                size: 1.5
            }]
        );
    }

    #[test]
    fn leaf_count_is_four_to_the_level() {
        for level in 0..=4 {
            let leaves = generate(level, 2.0).unwrap();
            assert_eq!(leaves.len(), 4usize.pow(level));
        }
    }

    #[test]
    fn leaf_size_halves_per_level() {
        for level in 0..=4 {
            let expected = 2.0 / 2f32.powi(level as i32);
            for leaf in generate(level, 2.0).unwrap() {
                assert!((leaf.size - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn repeat_calls_are_identical() {
        let a = generate(3, 1.0).unwrap();
        let b = generate(3, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sub_origins_are_equidistant_at_half_size() {
        let size = 2.0;
        let origin = Point3::new(0.5, -1.0, 2.0);
        let sub_origins: Vec<Point3<f32>> = corner_offsets(size / 2.0)
            .iter()
            .map(|offset| origin + offset)
            .collect();

        for i in 0..4 {
            for j in (i + 1)..4 {
                let d = (sub_origins[i] - sub_origins[j]).norm();
                assert!((d - size / 2.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn one_level_equals_four_stitched_subproblems() {
        let origin = Point3::new(0.1, 0.2, 0.3);
        let whole = generate_from(2, 2.0, origin).unwrap();

        let mut stitched = Vec::new();
        for offset in corner_offsets(1.0) {
            stitched.extend(generate_from(1, 1.0, origin + offset).unwrap());
        }

        assert_eq!(whole, stitched);
    }

    #[test]
    fn rejects_non_positive_size() {
        assert_eq!(generate(2, 0.0), Err(FractalError::InvalidSize(0.0)));
        assert_eq!(generate(2, -1.0), Err(FractalError::InvalidSize(-1.0)));
        assert!(generate(1, f32::NAN).is_err());
        assert!(generate(1, f32::INFINITY).is_err());
    }

    #[test]
    fn first_subdivision_lands_on_known_corners() {
        let leaves = generate(1, 2.0).unwrap();
        let expected = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, SQRT_3 / 2.0, 0.0),
            Point3::new(0.5, SQRT_3 / 6.0, SQRT_6 / 3.0),
        ];

        assert_eq!(leaves.len(), 4);
        for (leaf, corner) in leaves.iter().zip(expected) {
            assert!((leaf.position - corner).norm() < 1e-6);
            assert!((leaf.size - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn two_subdivisions_quarter_the_size() {
        let leaves = generate(2, 1.0).unwrap();
        assert_eq!(leaves.len(), 16);
        for leaf in &leaves {
            assert!((leaf.size - 0.25).abs() < 1e-6);
        }
    }
}
