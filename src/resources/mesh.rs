use crate::{
    data_structures::{
        geometry::{GeometryBuffer, flatten},
        records::{LineSetRecord, MeshRecord, PointListRecord, TrackRecord},
    },
    error::Result,
    resources::normals::compute_smooth_normals,
};

/**
 * Converts a REX mesh into flat buffers.
 *
 * REX files don't come with normals, so smooth normals are always calculated from the
 * triangle topology. Colors and uvs are only present in the buffer if the record had them,
 * a renderer uses the presence of colors to switch to vertex color shading.
 */
pub fn build_mesh_geometry(mesh: &MeshRecord) -> Result<GeometryBuffer> {
    mesh.validate()?;

    let normals = compute_smooth_normals(&mesh.coords, &mesh.triangles);

    Ok(GeometryBuffer {
        positions: flatten(&mesh.coords),
        colors: non_empty(&mesh.colors),
        uvs: non_empty(&mesh.tex_coords),
        normals: Some(flatten(&normals)),
        indices: Some(mesh.triangles.iter().flatten().copied().collect()),
    })
}

/// Positions and optional colours, nothing else. Points need no topology.
pub fn build_point_geometry(points: &PointListRecord) -> Result<GeometryBuffer> {
    points.validate()?;
    Ok(GeometryBuffer {
        positions: flatten(&points.points),
        colors: non_empty(&points.colors),
        ..Default::default()
    })
}

/// Positions in recording order. The order is the order of the line strip.
pub fn build_track_geometry(track: &TrackRecord) -> GeometryBuffer {
    GeometryBuffer {
        positions: flatten(&track.points),
        ..Default::default()
    }
}

pub fn build_line_set_geometry(line_set: &LineSetRecord) -> GeometryBuffer {
    GeometryBuffer {
        positions: flatten(&line_set.points),
        ..Default::default()
    }
}

/**
 * A `width` x `height` quad in the XY plane facing +Z, centered at the origin.
 *
 * UV (0, 0) is the top left corner so the first image row ends up at the top.
 */
pub fn build_image_plane_geometry(width: f32, height: f32) -> GeometryBuffer {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let coords = [[-hw, -hh, 0.0], [hw, -hh, 0.0], [hw, hh, 0.0], [-hw, hh, 0.0]];
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
    let triangles = [[0, 1, 2], [0, 2, 3]];
    let normals = compute_smooth_normals(&coords, &triangles);

    GeometryBuffer {
        positions: flatten(&coords),
        colors: None,
        uvs: Some(flatten(&uvs)),
        normals: Some(flatten(&normals)),
        indices: Some(triangles.iter().flatten().copied().collect()),
    }
}

fn non_empty<const N: usize>(items: &[[f32; N]]) -> Option<Vec<f32>> {
    if items.is_empty() {
        None
    } else {
        Some(flatten(items))
    }
}
