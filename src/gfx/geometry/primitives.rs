//! Primitive shape generation

use super::GeometryData;

/// Generates a unit cube centered at the origin
///
/// Vertices run from -0.5 to 0.5 on all axes, four per face so each face
/// gets a flat outward normal.
pub fn unit_cube() -> GeometryData {
    let positions = vec![
        // Front face (+Z)
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
        // Back face (-Z)
        [-0.5, -0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [0.5, 0.5, -0.5],
        [0.5, -0.5, -0.5],
        // Left face (-X)
        [-0.5, -0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, 0.5, -0.5],
        // Right face (+X)
        [0.5, -0.5, 0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [0.5, 0.5, 0.5],
        // Top face (+Y)
        [-0.5, 0.5, 0.5],
        [0.5, 0.5, 0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        // Bottom face (-Y)
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, -0.5, 0.5],
        [-0.5, -0.5, 0.5],
    ];

    let mut normals = Vec::with_capacity(24);
    for face_normal in [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ] {
        normals.extend(std::iter::repeat(face_normal).take(4));
    }

    // Two counter-clockwise triangles per face
    let indices = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base + 2, base + 3, base]
        })
        .collect();

    GeometryData {
        positions,
        normals,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_expected_counts() {
        let cube = unit_cube();
        assert_eq!(cube.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.normals.len(), cube.positions.len());
    }

    #[test]
    fn cube_normals_are_unit_axis_vectors() {
        let cube = unit_cube();
        for normal in &cube.normals {
            let length_sq: f32 = normal.iter().map(|c| c * c).sum();
            assert_eq!(length_sq, 1.0);
        }
    }

    #[test]
    fn cube_indices_stay_in_range() {
        let cube = unit_cube();
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertex_count()));
    }
}
