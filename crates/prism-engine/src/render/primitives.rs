//! Geometry shared by the demos, in normalized device or model units.

use super::vertex::{ColorVertex, NormalVertex, PositionVertex};

/// Two side-by-side triangles in NDC, drawn with separate pipelines.
pub const LEFT_TRIANGLE: [PositionVertex; 3] = [
    PositionVertex::new(-0.9, -0.5, 0.0),  // left
    PositionVertex::new(0.0, -0.5, 0.0),   // right
    PositionVertex::new(-0.45, 0.5, 0.0),  // top
];

pub const RIGHT_TRIANGLE: [PositionVertex; 3] = [
    PositionVertex::new(0.0, -0.5, 0.0),  // left
    PositionVertex::new(0.9, -0.5, 0.0),  // right
    PositionVertex::new(0.45, 0.5, 0.0),  // top
];

/// Rectangle from four corners; see [`QUAD_INDICES`].
pub const QUAD_VERTICES: [PositionVertex; 4] = [
    PositionVertex::new(0.5, 0.5, 0.0),   // top right
    PositionVertex::new(0.5, -0.5, 0.0),  // bottom right
    PositionVertex::new(-0.5, -0.5, 0.0), // bottom left
    PositionVertex::new(-0.5, 0.5, 0.0),  // top left
];

pub const QUAD_INDICES: [u16; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

/// Red/green/blue corners, interpolated across the face.
pub const COLORED_TRIANGLE: [ColorVertex; 3] = [
    ColorVertex { position: [0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0] },
    ColorVertex { position: [-0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0] },
    ColorVertex { position: [0.0, 0.5, 0.0], color: [0.0, 0.0, 1.0] },
];

// Face order: -Z, +Z, -X, +X, -Y, +Y. Two triangles per face.
const CUBE_FACES: [([f32; 3], [[f32; 3]; 6]); 6] = [
    ([0.0, 0.0, -1.0], [
        [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5],
        [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5],
    ]),
    ([0.0, 0.0, 1.0], [
        [-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5],
        [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, -0.5, 0.5],
    ]),
    ([-1.0, 0.0, 0.0], [
        [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5],
        [-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5],
    ]),
    ([1.0, 0.0, 0.0], [
        [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5],
    ]),
    ([0.0, -1.0, 0.0], [
        [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5], [-0.5, -0.5, -0.5],
    ]),
    ([0.0, 1.0, 0.0], [
        [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5],
        [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5],
    ]),
];

/// Unit cube centered on the origin, 36 vertices with face normals.
pub fn cube_with_normals() -> Vec<NormalVertex> {
    CUBE_FACES
        .iter()
        .flat_map(|(normal, corners)| {
            corners.iter().map(move |&position| NormalVertex {
                position,
                normal: *normal,
            })
        })
        .collect()
}

/// Unit cube positions only (lamp, unlit scenes).
pub fn cube() -> Vec<PositionVertex> {
    CUBE_FACES
        .iter()
        .flat_map(|(_, corners)| corners.iter().map(|&position| PositionVertex { position }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn cube_has_36_vertices() {
        assert_eq!(cube().len(), 36);
        assert_eq!(cube_with_normals().len(), 36);
    }

    #[test]
    fn cube_normals_point_out_of_their_face() {
        for v in cube_with_normals() {
            let p = Vec3::from_array(v.position);
            let n = Vec3::from_array(v.normal);
            assert_eq!(n.length(), 1.0);
            // Every corner of a face sits at +0.5 along that face's normal.
            assert_eq!(p.dot(n), 0.5);
        }
    }

    #[test]
    fn quad_indices_reference_all_corners() {
        for i in 0..QUAD_VERTICES.len() as u16 {
            assert!(QUAD_INDICES.contains(&i));
        }
    }

    #[test]
    fn triangles_share_an_edge_vertex() {
        assert_eq!(LEFT_TRIANGLE[1], RIGHT_TRIANGLE[0]);
    }
}
