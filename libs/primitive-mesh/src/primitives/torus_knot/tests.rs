use super::*;
use approx::assert_relative_eq;
use config::constants::UNIT_NORMAL_TOLERANCE;

fn knot(p: u32, q: u32) -> TorusKnotParams {
    TorusKnotParams {
        radius: 2.0,
        tube: 0.4,
        radial_segments: 96,
        tubular_segments: 12,
        p,
        q,
        height_scale: 1.0,
    }
}

#[test]
fn test_torus_knot_counts() {
    let mesh = create_torus_knot(&knot(2, 3)).unwrap();
    assert_eq!(mesh.vertex_count(), 96 * 12);
    assert_eq!(mesh.triangle_count(), 2 * 96 * 12);
    assert!(mesh.validate());
}

#[test]
fn test_torus_knot_indices_wrap() {
    let mesh = create_torus_knot(&knot(2, 3)).unwrap();
    // Every vertex is shared by exactly six triangles on a closed tube
    let mut uses = vec![0usize; mesh.vertex_count()];
    for &i in mesh.indices_u32().iter() {
        uses[i as usize] += 1;
    }
    assert!(uses.iter().all(|&n| n == 6));
}

#[test]
fn test_torus_knot_normals_are_unit() {
    for (p, q) in [(2, 3), (3, 2), (1, 1), (5, 7)] {
        let mesh = create_torus_knot(&knot(p, q)).unwrap();
        for n in mesh.normals() {
            assert!(
                (n.length() - 1.0).abs() < UNIT_NORMAL_TOLERANCE,
                "({}, {}) normal {:?}",
                p,
                q,
                n
            );
        }
    }
}

#[test]
fn test_torus_knot_vertices_at_tube_distance() {
    let params = knot(2, 3);
    let mesh = create_torus_knot(&params).unwrap();
    let tubular = params.tubular_segments as usize;
    for (k, position) in mesh.positions().iter().enumerate() {
        let i = k / tubular;
        let u = i as f64 / params.radial_segments as f64 * params.p as f64 * FULL_TURN;
        let center = params.curve_point(u);
        assert_relative_eq!((*position - center).length(), params.tube, epsilon = 1e-9);
    }
}

#[test]
fn test_torus_knot_faces_agree_with_normals() {
    let mesh = create_torus_knot(&knot(2, 3)).unwrap();
    for i in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(i);
        let vertex_normal =
            mesh.normals()[a as usize] + mesh.normals()[b as usize] + mesh.normals()[c as usize];
        assert!(
            mesh.face_normal(i).dot(vertex_normal) > 0.0,
            "triangle {} faces into the tube",
            i
        );
    }
}

#[test]
fn test_torus_knot_curve() {
    let params = knot(2, 3);
    // u = 0: (1.5 * radius, 0, 0)
    let start = params.curve_point(0.0);
    assert_relative_eq!(start.x, 3.0 * params.radius / 2.0);
    assert_relative_eq!(start.y, 0.0);
    assert_relative_eq!(start.z, 0.0);

    // The curve closes after p full turns
    let end = params.curve_point(params.p as f64 * FULL_TURN);
    assert_relative_eq!(start.x, end.x, epsilon = 1e-9);
    assert_relative_eq!(start.y, end.y, epsilon = 1e-9);
    assert_relative_eq!(start.z, end.z, epsilon = 1e-9);
}

#[test]
fn test_torus_knot_height_scale() {
    let flat = TorusKnotParams {
        height_scale: 0.0,
        ..knot(2, 3)
    };
    for k in 0..32 {
        assert_eq!(flat.curve_point(k as f64 * 0.3).z, 0.0);
    }

    let tall = TorusKnotParams {
        height_scale: 2.0,
        tube: 0.0,
        ..knot(2, 3)
    };
    let mesh = create_torus_knot(&tall).unwrap();
    let (min, max) = mesh.bounding_box();
    assert!(max.z <= tall.radius + 1e-9);
    assert!(min.z >= -tall.radius - 1e-9);
    assert!(max.z > 0.9 * tall.radius);
}

#[test]
fn test_torus_knot_uvs() {
    let mesh = create_torus_knot(&knot(2, 3)).unwrap();
    assert_eq!(mesh.uvs()[0], DVec2::new(0.0, 0.0));
    assert_eq!(mesh.uvs()[1], DVec2::new(0.0, 1.0 / 12.0));
    assert_eq!(mesh.uvs()[12], DVec2::new(1.0 / 96.0, 0.0));
}

#[test]
fn test_trefoil_constructor() {
    let params = TorusKnotParams::trefoil(1.0, 0.25);
    assert_eq!((params.p, params.q), (2, 3));
    assert_eq!(params.height_scale, 1.0);
    assert_eq!(TorusKnotParams::default().p, 2);
}

#[test]
fn test_torus_knot_zero_radius_is_degenerate() {
    let params = TorusKnotParams {
        radius: 0.0,
        ..knot(2, 3)
    };
    assert!(matches!(
        create_torus_knot(&params),
        Err(MeshError::DegenerateGeometry { .. })
    ));
}

#[test]
fn test_torus_knot_invalid_parameters() {
    assert!(create_torus_knot(&knot(0, 3)).is_err());
    assert!(create_torus_knot(&knot(2, 0)).is_err());
    assert!(create_torus_knot(&knot(2, 3).with_segments(2, 8)).is_err());
    assert!(create_torus_knot(&knot(2, 3).with_segments(8, 2)).is_err());
}
