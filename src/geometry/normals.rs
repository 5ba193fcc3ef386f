// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! Per-vertex smooth normal accumulation
//!
//! Every vertex normal becomes the normalized, unweighted sum of the face
//! normals of the triangles referencing it. The accumulation is deliberately
//! unweighted (no area or angle weighting), which biases normals toward
//! vertices with many small adjacent faces; that matches the source geometry
//! semantics and callers depend on it.

use super::Mesh;
use nalgebra::Vector3;

/// Accumulated sums at or below this magnitude collapse to the zero vector.
pub const NORMAL_EPSILON: f64 = 1e-6;

/// Set every vertex's `normal` to the tolerance-normalized average of the
/// face normals of all triangles referencing it.
///
/// Face normals are read-only inputs here. A vertex with no incident
/// triangles, or whose incident face normals cancel exactly, ends up with the
/// zero vector rather than an error.
pub fn compute_vertex_normals(mesh: &mut Mesh) {
    for vertex in &mut mesh.vertices {
        vertex.normal = Vector3::zeros();
    }

    for triangle in &mesh.triangles {
        let face_normal = triangle.face_normal;
        for &index in &triangle.indices {
            mesh.vertices[index].normal += face_normal;
        }
    }

    for vertex in &mut mesh.vertices {
        if vertex.normal.norm() > NORMAL_EPSILON {
            vertex.normal = vertex.normal.normalize();
        } else {
            vertex.normal = Vector3::zeros();
        }
    }
}
