use flow_rex::{
    LineSetRecord, MeshRecord, PointListRecord, RexError, TrackRecord,
    resources::mesh::{
        build_image_plane_geometry, build_line_set_geometry, build_mesh_geometry,
        build_point_geometry, build_track_geometry,
    },
};

mod common;

use crate::common::test_utils::{assert_vec3_eq, colored_triangle, textured_quad, triangle_mesh};

#[test]
fn plain_mesh_has_positions_normals_and_indices_only() {
    let geometry = build_mesh_geometry(&triangle_mesh(1)).unwrap();

    assert_eq!(geometry.vertex_count(), 3);
    assert_eq!(geometry.triangle_count(), 1);
    assert_eq!(
        geometry.positions,
        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
    );
    assert!(geometry.colors.is_none());
    assert!(geometry.uvs.is_none());
    assert!(!geometry.has_vertex_colors());
    assert_eq!(geometry.normals.as_ref().map(Vec::len), Some(9));
    for i in 0..3 {
        assert_vec3_eq(geometry.normal(i).unwrap(), [0.0, 0.0, 1.0]);
    }
}

#[test]
fn attributes_are_copied_verbatim() {
    let quad = textured_quad(2, 7);
    let geometry = build_mesh_geometry(&quad).unwrap();

    assert_eq!(
        geometry.uvs,
        Some(vec![0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0])
    );
    assert_eq!(geometry.indices, Some(vec![0, 1, 2, 0, 2, 3]));
    assert_eq!(geometry.position(2), Some([1.0, 1.0, 0.0]));
    assert_eq!(geometry.position(4), None);

    let colored = build_mesh_geometry(&colored_triangle(3, 0)).unwrap();
    assert!(colored.has_vertex_colors());
    assert_eq!(
        colored.colors,
        Some(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    );
}

#[test]
fn index_order_is_preserved() {
    let mesh = MeshRecord {
        triangles: vec![[2, 1, 0], [0, 2, 1]],
        ..triangle_mesh(4)
    };
    let geometry = build_mesh_geometry(&mesh).unwrap();

    assert_eq!(geometry.indices, Some(vec![2, 1, 0, 0, 2, 1]));
    // clockwise from +Z, so the normal flips
    assert_vec3_eq(geometry.normal(1).unwrap(), [0.0, 0.0, -1.0]);
}

#[test]
fn out_of_range_index_is_fatal() {
    let mesh = MeshRecord {
        triangles: vec![[0, 1, 2], [1, 2, 3]],
        ..triangle_mesh(5)
    };

    assert_eq!(
        build_mesh_geometry(&mesh),
        Err(RexError::TriangleIndexOutOfRange {
            mesh_id: 5,
            triangle: 1,
            index: 3,
            vertex_count: 3,
        })
    );
}

#[test]
fn attribute_length_mismatch_is_fatal() {
    let mesh = MeshRecord {
        colors: vec![[1.0, 1.0, 1.0]],
        ..triangle_mesh(6)
    };

    assert_eq!(
        build_mesh_geometry(&mesh),
        Err(RexError::AttributeLength {
            record_id: 6,
            attribute: "colors",
            actual: 1,
            expected: 3,
        })
    );
}

#[test]
fn empty_mesh_builds_empty_buffer() {
    let geometry = build_mesh_geometry(&MeshRecord::default()).unwrap();

    assert_eq!(geometry.vertex_count(), 0);
    assert_eq!(geometry.triangle_count(), 0);
    assert_eq!(geometry.indices, Some(Vec::new()));
}

#[test]
fn point_list_without_colors() {
    let points = PointListRecord {
        id: 1,
        points: vec![[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]],
        colors: Vec::new(),
    };
    let geometry = build_point_geometry(&points).unwrap();

    assert_eq!(geometry.positions, vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
    assert!(geometry.colors.is_none());
    assert!(geometry.normals.is_none());
    assert!(geometry.indices.is_none());
}

#[test]
fn point_list_with_colors() {
    let points = PointListRecord {
        id: 1,
        points: vec![[0.0, 0.0, 0.0]],
        colors: vec![[0.2, 0.4, 0.6]],
    };
    let geometry = build_point_geometry(&points).unwrap();

    assert_eq!(geometry.colors, Some(vec![0.2, 0.4, 0.6]));
}

#[test]
fn point_colors_must_match_points() {
    let points = PointListRecord {
        id: 8,
        points: vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
        colors: vec![[0.2, 0.4, 0.6]],
    };

    assert!(matches!(
        build_point_geometry(&points),
        Err(RexError::AttributeLength { record_id: 8, .. })
    ));
}

#[test]
fn polylines_keep_point_order() {
    let points = vec![[3.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
    let track = build_track_geometry(&TrackRecord {
        id: 1,
        points: points.clone(),
    });
    let line_set = build_line_set_geometry(&LineSetRecord {
        id: 2,
        points,
        ..Default::default()
    });

    assert_eq!(track.positions, vec![3.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
    assert_eq!(track.positions, line_set.positions);
    assert!(track.indices.is_none());
    assert!(line_set.colors.is_none());
}

#[test]
fn image_plane_is_centered_and_faces_plus_z() {
    let geometry = build_image_plane_geometry(0.4, 0.2);

    assert_eq!(geometry.vertex_count(), 4);
    assert_eq!(geometry.triangle_count(), 2);
    assert_vec3_eq(geometry.position(0).unwrap(), [-0.2, -0.1, 0.0]);
    assert_vec3_eq(geometry.position(2).unwrap(), [0.2, 0.1, 0.0]);
    for i in 0..4 {
        assert_vec3_eq(geometry.normal(i).unwrap(), [0.0, 0.0, 1.0]);
    }
    // top left corner samples the first image row
    let uvs = geometry.uvs.as_ref().unwrap();
    assert_eq!(&uvs[6..8], &[0.0, 0.0]);
}

#[test]
fn byte_views_cover_whole_arrays() {
    let geometry = build_mesh_geometry(&textured_quad(1, 0)).unwrap();

    assert_eq!(geometry.position_bytes().len(), 12 * 4);
    assert_eq!(geometry.uv_bytes().map(<[u8]>::len), Some(8 * 4));
    assert_eq!(geometry.normal_bytes().map(<[u8]>::len), Some(12 * 4));
    assert_eq!(geometry.index_bytes().map(<[u8]>::len), Some(6 * 4));
    assert!(geometry.color_bytes().is_none());

    let first = f32::from_ne_bytes(geometry.position_bytes()[12..16].try_into().unwrap());
    assert_eq!(first, 1.0);
}
