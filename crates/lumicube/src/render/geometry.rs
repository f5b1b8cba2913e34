//! # Geometry — The Cube Mesh
//!
//! A cube has 8 corners, but lighting needs a normal per face, so each face
//! gets its own 4 vertices (24 total) sharing that face's normal. Two
//! triangles per face give 36 `u16` indices.
//!
//! The vertex order below is fixed: face order is front, back, left, right,
//! top, bottom, and every face is indexed as `(0, 1, 2)`, `(0, 2, 3)` relative
//! to its first vertex. Front, back, left and right wind counter-clockwise
//! seen from outside; top and bottom wind clockwise. The pipeline therefore
//! draws without back-face culling.
//!
//! The cube spans `[-1, 1]` on every axis.

use super::vertex::CubeVertex;

const fn v(position: [f32; 3], normal: [f32; 3]) -> CubeVertex {
    CubeVertex { position, normal }
}

/// The 24 cube vertices, 4 per face.
pub const VERTICES: [CubeVertex; 24] = [
    // Front
    v([-1.0, -1.0, 1.0], [0.0, 0.0, 1.0]),
    v([1.0, -1.0, 1.0], [0.0, 0.0, 1.0]),
    v([1.0, 1.0, 1.0], [0.0, 0.0, 1.0]),
    v([-1.0, 1.0, 1.0], [0.0, 0.0, 1.0]),
    // Back
    v([-1.0, -1.0, -1.0], [0.0, 0.0, -1.0]),
    v([-1.0, 1.0, -1.0], [0.0, 0.0, -1.0]),
    v([1.0, 1.0, -1.0], [0.0, 0.0, -1.0]),
    v([1.0, -1.0, -1.0], [0.0, 0.0, -1.0]),
    // Left
    v([-1.0, -1.0, -1.0], [-1.0, 0.0, 0.0]),
    v([-1.0, -1.0, 1.0], [-1.0, 0.0, 0.0]),
    v([-1.0, 1.0, 1.0], [-1.0, 0.0, 0.0]),
    v([-1.0, 1.0, -1.0], [-1.0, 0.0, 0.0]),
    // Right
    v([1.0, -1.0, -1.0], [1.0, 0.0, 0.0]),
    v([1.0, 1.0, -1.0], [1.0, 0.0, 0.0]),
    v([1.0, 1.0, 1.0], [1.0, 0.0, 0.0]),
    v([1.0, -1.0, 1.0], [1.0, 0.0, 0.0]),
    // Top
    v([-1.0, 1.0, -1.0], [0.0, 1.0, 0.0]),
    v([1.0, 1.0, -1.0], [0.0, 1.0, 0.0]),
    v([1.0, 1.0, 1.0], [0.0, 1.0, 0.0]),
    v([-1.0, 1.0, 1.0], [0.0, 1.0, 0.0]),
    // Bottom
    v([-1.0, -1.0, -1.0], [0.0, -1.0, 0.0]),
    v([-1.0, -1.0, 1.0], [0.0, -1.0, 0.0]),
    v([1.0, -1.0, 1.0], [0.0, -1.0, 0.0]),
    v([1.0, -1.0, -1.0], [0.0, -1.0, 0.0]),
];

/// Two triangles per face, 6 faces.
pub const INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // back
    8, 9, 10, 8, 10, 11, // left
    12, 13, 14, 12, 14, 15, // right
    16, 17, 18, 16, 18, 19, // top
    20, 21, 22, 20, 22, 23, // bottom
];

/// Number of indices drawn per frame.
pub const INDEX_COUNT: u32 = INDICES.len() as u32;
