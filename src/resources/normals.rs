//! Smooth per-vertex normals.

use cgmath::{InnerSpace, Vector3, Zero};

/// Compute one smooth normal per vertex of an indexed triangle list.
///
/// Every triangle contributes a unit normal to each of its three corners, taken
/// from the two edges leaving that corner. A vertex normal is the mean of its
/// contributions, renormalized. Degenerate corners contribute the zero vector.
/// A vertex without any non-degenerate contribution ends up with `NaN`
/// components.
///
/// All indices must be smaller than `positions.len()`.
pub fn compute_smooth_normals(positions: &[[f32; 3]], triangles: &[[u32; 3]]) -> Vec<[f32; 3]> {
    let mut sums = vec![Vector3::<f32>::zero(); positions.len()];
    let mut triangles_included = vec![0u32; positions.len()];

    for &[i0, i1, i2] in triangles {
        let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
        let v0: Vector3<f32> = positions[i0].into();
        let v1: Vector3<f32> = positions[i1].into();
        let v2: Vector3<f32> = positions[i2].into();

        // Each corner uses the edges radiating from it
        sums[i0] += corner_normal(v0, v1, v2);
        sums[i1] += corner_normal(v1, v2, v0);
        sums[i2] += corner_normal(v2, v0, v1);

        triangles_included[i0] += 1;
        triangles_included[i1] += 1;
        triangles_included[i2] += 1;
    }

    sums.into_iter()
        .zip(triangles_included)
        .map(|(sum, n)| {
            let mean = sum / n as f32;
            // normalize() divides by the magnitude, zero yields NaN on purpose
            mean.normalize().into()
        })
        .collect()
}

fn corner_normal(corner: Vector3<f32>, next: Vector3<f32>, prev: Vector3<f32>) -> Vector3<f32> {
    let normal = (next - corner).cross(prev - corner);
    if normal.magnitude2() > 0.0 {
        normal.normalize()
    } else {
        Vector3::zero()
    }
}
