//! # Vertex Normals
//!
//! Area-weighted normal accumulation for meshes without analytic normals.
//!
//! Each triangle contributes its unnormalized cross product to all three of
//! its vertices, so larger faces weigh more. Vertices shared between faces
//! end up smooth-shaded; duplicated (unwelded) vertices stay faceted.

use glam::DVec3;

/// Computes one unit normal per vertex by accumulating face normals.
///
/// A vertex whose accumulated normal is zero (no incident triangles, or
/// only degenerate ones) keeps `DVec3::ZERO`. Triangles with an index
/// outside `positions` are skipped.
///
/// # Arguments
///
/// * `positions` - Vertex positions
/// * `triangles` - Triangle indices into `positions`
///
/// # Example
///
/// ```rust
/// use primitive_mesh::normals::accumulate_normals;
/// use glam::DVec3;
///
/// let positions = [DVec3::ZERO, DVec3::X, DVec3::Y];
/// let normals = accumulate_normals(&positions, &[[0, 1, 2]]);
/// assert_eq!(normals, vec![DVec3::Z; 3]);
/// ```
pub fn accumulate_normals(positions: &[DVec3], triangles: &[[u32; 3]]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; positions.len()];

    for tri in triangles {
        let [i0, i1, i2] = tri.map(|i| i as usize);
        let (Some(&v0), Some(&v1), Some(&v2)) =
            (positions.get(i0), positions.get(i1), positions.get(i2))
        else {
            continue;
        };

        let normal = (v1 - v0).cross(v2 - v0);

        normals[i0] += normal;
        normals[i1] += normal;
        normals[i2] += normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_quad_normals() {
        let positions = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let normals = accumulate_normals(&positions, &[[0, 1, 2], [0, 2, 3]]);
        for n in normals {
            assert_relative_eq!(n.z, 1.0);
        }
    }

    #[test]
    fn test_shared_vertex_is_averaged() {
        // Two faces meeting at a right angle along the X axis
        let positions = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ];
        let normals = accumulate_normals(&positions, &[[0, 1, 2], [0, 3, 1]]);
        let expected = DVec3::new(0.0, 1.0, 1.0).normalize();
        assert_relative_eq!(normals[0].y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(normals[0].z, expected.z, epsilon = 1e-12);
        assert_relative_eq!(normals[2].z, 1.0);
        assert_relative_eq!(normals[3].y, 1.0);
    }

    #[test]
    fn test_unreferenced_vertex_keeps_zero() {
        let positions = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::ONE];
        let normals = accumulate_normals(&positions, &[[0, 1, 2]]);
        assert_eq!(normals[3], DVec3::ZERO);
    }

    #[test]
    fn test_out_of_range_triangle_is_skipped() {
        let positions = [DVec3::ZERO, DVec3::X, DVec3::Y];
        let normals = accumulate_normals(&positions, &[[0, 1, 2], [0, 1, 7]]);
        assert_eq!(normals, vec![DVec3::Z; 3]);
    }

    #[test]
    fn test_degenerate_triangle_contributes_nothing() {
        let positions = [DVec3::ZERO, DVec3::X, DVec3::X * 2.0];
        let normals = accumulate_normals(&positions, &[[0, 1, 2]]);
        assert!(normals.iter().all(|n| *n == DVec3::ZERO));
    }
}
