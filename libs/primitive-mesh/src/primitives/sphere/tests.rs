use super::*;
use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn sphere(radius: f64, width: u32, height: u32) -> SphereParams {
    SphereParams {
        radius,
        width_segments: width,
        height_segments: height,
        ..Default::default()
    }
}

#[test]
fn test_sphere_counts() {
    let mesh = create_sphere(&sphere(1.0, 12, 6)).unwrap();
    assert_eq!(mesh.vertex_count(), 13 * 7);
    assert_eq!(mesh.triangle_count(), 2 * 12 * (6 - 1));
    assert!(mesh.validate());
}

#[test]
fn test_sphere_pole_rows_are_fans() {
    let width = 10;
    let height = 5;
    let mesh = create_sphere(&sphere(2.0, width, height)).unwrap();
    let grid = IndexedGrid::new(0, width, height).unwrap();

    let row_of = |index: u32| index / grid.stride();
    let mut per_row = vec![0usize; height as usize];
    for tri in mesh.triangles() {
        // Every triangle spans exactly two adjacent rows
        let lowest = tri.iter().map(|&i| row_of(i)).min().unwrap();
        per_row[lowest as usize] += 1;
    }

    assert_eq!(per_row[0], width as usize);
    assert_eq!(per_row[height as usize - 1], width as usize);
    for count in &per_row[1..height as usize - 1] {
        assert_eq!(*count, 2 * width as usize);
    }
    assert_eq!(mesh.degenerate_triangle_count(), 0);
}

#[test]
fn test_sphere_pole_test_is_exact() {
    // Close to, but not exactly at, the poles: regular quads everywhere
    let params = SphereParams {
        theta_start: 1e-3,
        theta_length: PI - 2e-3,
        ..sphere(1.0, 8, 4)
    };
    let mesh = create_sphere(&params).unwrap();
    assert_eq!(mesh.triangle_count(), 2 * 8 * 4);
}

#[test]
fn test_sphere_vertices_on_surface() {
    let radius = 3.0;
    let mesh = create_sphere(&sphere(radius, 16, 8)).unwrap();
    for p in mesh.positions() {
        assert_relative_eq!(p.length(), radius, epsilon = 1e-12);
    }
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(max.y, radius);
    assert_relative_eq!(min.y, -radius);
}

#[test]
fn test_sphere_faces_point_outward() {
    let mesh = create_sphere(&sphere(1.0, 16, 8)).unwrap();
    for i in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(i);
        let centroid = (mesh.position(a) + mesh.position(b) + mesh.position(c)) / 3.0;
        assert!(
            mesh.face_normal(i).dot(centroid) > 0.0,
            "triangle {} faces inward",
            i
        );
    }
}

#[test]
fn test_sphere_normals_are_radial() {
    let width = 32;
    let height = 16;
    let mesh = create_sphere(&sphere(1.0, width, height)).unwrap();
    let stride = (width + 1) as usize;
    // Skip the pole rows, whose coincident vertices each see only part of the fan
    for (i, (p, n)) in mesh.positions().iter().zip(mesh.normals()).enumerate() {
        let row = i / stride;
        if row == 0 || row == height as usize {
            continue;
        }
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert!(n.dot(*p) > 0.98, "vertex {} normal not radial", i);
    }
}

#[test]
fn test_sphere_uvs() {
    let mesh = create_sphere(&sphere(1.0, 4, 2)).unwrap();
    assert_eq!(mesh.uvs()[0], DVec2::new(0.0, 1.0));
    assert_eq!(mesh.uvs()[4], DVec2::new(1.0, 1.0));
    assert_eq!(mesh.uvs()[7], DVec2::new(0.5, 0.5));
    assert_eq!(mesh.uvs()[14], DVec2::new(1.0, 0.0));
}

#[test]
fn test_sphere_seam_is_duplicated() {
    let width = 6;
    let mesh = create_sphere(&sphere(1.0, width, 3)).unwrap();
    let stride = width as usize + 1;
    for row in 0..4 {
        let first = mesh.positions()[row * stride];
        let last = mesh.positions()[row * stride + width as usize];
        assert_relative_eq!(first.x, last.x, epsilon = 1e-12);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-12);
        assert_relative_eq!(first.z, last.z, epsilon = 1e-12);
    }
}

#[test]
fn test_upper_hemisphere() {
    let params = SphereParams {
        theta_length: FRAC_PI_2,
        ..sphere(1.0, 8, 4)
    };
    let mesh = create_sphere(&params).unwrap();
    // Only the north pole collapses
    assert_eq!(mesh.triangle_count(), 8 + 2 * 8 * 3);
    let (min, _) = mesh.bounding_box();
    assert!(min.y > -1e-12);
}

#[test]
fn test_sphere_longitude_patch() {
    let params = SphereParams {
        phi_length: TAU / 4.0,
        ..sphere(1.0, 4, 4)
    };
    let mesh = create_sphere(&params).unwrap();
    assert_eq!(mesh.vertex_count(), 25);
    assert!(mesh.validate());
}

#[test]
fn test_sphere_invalid_parameters() {
    assert!(create_sphere(&sphere(1.0, 0, 4)).is_err());
    assert!(create_sphere(&sphere(1.0, 8, 0)).is_err());
    assert!(create_sphere(&sphere(-1.0, 8, 4)).is_err());

    let params = SphereParams {
        theta_length: f64::NAN,
        ..Default::default()
    };
    let err = create_sphere(&params).unwrap_err();
    assert_eq!(err.parameter_name(), Some("theta_length"));
}

#[test]
fn test_single_segment_sphere() {
    let mesh = create_sphere(&sphere(1.0, 1, 1)).unwrap();
    assert_eq!(mesh.vertex_count(), 2 * 2);
    // Both rows are poles: one collapsed triangle for the only cell
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.degenerate_triangle_count(), 1);
    assert!(mesh.validate());
}

#[test]
fn test_single_stack_sphere() {
    let width = 6;
    let mesh = create_sphere(&sphere(1.0, width, 1)).unwrap();
    assert_eq!(mesh.vertex_count(), (width as usize + 1) * 2);
    assert_eq!(mesh.triangle_count(), width as usize);
    assert_eq!(mesh.degenerate_triangle_count(), width as usize);
}

#[test]
fn test_single_slice_sphere() {
    let height = 4;
    let mesh = create_sphere(&sphere(1.0, 1, height)).unwrap();
    assert_eq!(mesh.vertex_count(), 2 * (height as usize + 1));
    // Pole rows fan, the two interior rows split their cell
    assert_eq!(mesh.triangle_count(), 1 + 2 + 2 + 1);
    assert!(mesh.validate());

    // The seam columns coincide, so nothing has area
    assert_eq!(mesh.degenerate_triangle_count(), mesh.triangle_count());
}

#[test]
fn test_two_slice_sphere_is_flat() {
    let mesh = create_sphere(&sphere(1.0, 2, 4)).unwrap();
    assert_eq!(mesh.vertex_count(), 3 * 5);
    assert_eq!(mesh.triangle_count(), 2 * 2 * 3);
    // phi in {0, pi, 2pi}: every vertex lies in the z = 0 plane
    for p in mesh.positions() {
        assert!(p.z.abs() < 1e-12);
    }
}

#[test]
fn test_tiny_sphere_is_not_degenerate() {
    let mesh = create_sphere(&sphere(1e-7, 12, 6)).unwrap();
    assert!(mesh.triangle_area(0) < 1e-12);
    assert_eq!(mesh.degenerate_triangle_count(), 0);
}
