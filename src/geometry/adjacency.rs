// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! Edge-based triangle adjacency
//!
//! Two triangles are adjacent when they share an edge, i.e. both endpoint
//! vertex indices in the current index space. Adjacency is keyed on vertex
//! indices, not positions, so it must be computed after deduplication and
//! re-run from scratch after any mutation that renumbers vertices or changes
//! the triangle list.

use super::Mesh;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Unordered pair of vertex indices, stored as (min, max) so both directions
/// of an edge compare and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub v0: usize,
    pub v1: usize,
}

impl Edge {
    pub fn new(v0: usize, v1: usize) -> Self {
        if v0 < v1 {
            Self { v0, v1 }
        } else {
            Self { v0: v1, v1: v0 }
        }
    }
}

/// Map every canonicalized edge to the triangles containing it, in
/// triangle-list scan order.
pub(crate) fn build_edge_map(mesh: &Mesh) -> AHashMap<Edge, Vec<usize>> {
    let mut edge_map: AHashMap<Edge, Vec<usize>> =
        AHashMap::with_capacity(mesh.triangles.len() * 3 / 2);

    for (index, triangle) in mesh.triangles.iter().enumerate() {
        for (a, b) in triangle.edges() {
            edge_map.entry(Edge::new(a, b)).or_default().push(index);
        }
    }

    edge_map
}

/// For every triangle and each of its three edges, record the index of a
/// triangle sharing that edge, or `None` when no other triangle does.
///
/// On a closed manifold mesh every edge has exactly two incident triangles
/// and the result is symmetric. When more than two triangles share an edge,
/// the first other triangle in scan order wins for each slot; adjacency is
/// then neither symmetric nor a complete picture of the local topology,
/// which is accepted rather than treated as an error.
pub fn compute_adjacency(mesh: &mut Mesh) {
    let edge_map = build_edge_map(mesh);

    for index in 0..mesh.triangles.len() {
        let edges = mesh.triangles[index].edges();
        for (slot, (a, b)) in edges.into_iter().enumerate() {
            let incident = &edge_map[&Edge::new(a, b)];
            mesh.triangles[index].adjacency[slot] =
                incident.iter().copied().find(|&other| other != index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Triangle, Vertex};
    use nalgebra::{Point3, Vector3};

    fn vertex_fan(mesh: &mut Mesh, count: usize) {
        for i in 0..count {
            mesh.add_vertex(Vertex::at(Point3::new(i as f64, 0.0, 0.0)));
        }
    }

    #[test]
    fn test_edge_canonical_order() {
        assert_eq!(Edge::new(5, 2), Edge::new(2, 5));
        assert_eq!(Edge::new(2, 5).v0, 2);
    }

    #[test]
    fn test_lone_triangle_has_no_neighbors() {
        let mut mesh = Mesh::new();
        vertex_fan(&mut mesh, 3);
        mesh.add_triangle(Triangle::new([0, 1, 2], Vector3::zeros()));

        compute_adjacency(&mut mesh);

        assert_eq!(mesh.triangles[0].adjacency, [None; 3]);
    }

    #[test]
    fn test_shared_edge_links_both_triangles() {
        let mut mesh = Mesh::new();
        vertex_fan(&mut mesh, 4);
        // Edge (0,2) is shared: slot 2 of the first triangle, slot 0 of the
        // second.
        mesh.add_triangle(Triangle::new([0, 1, 2], Vector3::zeros()));
        mesh.add_triangle(Triangle::new([2, 0, 3], Vector3::zeros()));

        compute_adjacency(&mut mesh);

        assert_eq!(mesh.triangles[0].adjacency, [None, None, Some(1)]);
        assert_eq!(mesh.triangles[1].adjacency, [Some(0), None, None]);
    }

    #[test]
    fn test_non_manifold_edge_picks_first_other() {
        // Three triangles hanging off the same edge (0,1).
        let mut mesh = Mesh::new();
        vertex_fan(&mut mesh, 5);
        mesh.add_triangle(Triangle::new([0, 1, 2], Vector3::zeros()));
        mesh.add_triangle(Triangle::new([0, 1, 3], Vector3::zeros()));
        mesh.add_triangle(Triangle::new([0, 1, 4], Vector3::zeros()));

        compute_adjacency(&mut mesh);

        // Everyone except triangle 0 resolves the shared edge to triangle 0;
        // triangle 0 resolves it to triangle 1.
        assert_eq!(mesh.triangles[0].adjacency[0], Some(1));
        assert_eq!(mesh.triangles[1].adjacency[0], Some(0));
        assert_eq!(mesh.triangles[2].adjacency[0], Some(0));
    }

    #[test]
    fn test_rerun_overwrites_stale_slots() {
        let mut mesh = Mesh::new();
        vertex_fan(&mut mesh, 4);
        mesh.add_triangle(Triangle::new([0, 1, 2], Vector3::zeros()));
        mesh.add_triangle(Triangle::new([2, 0, 3], Vector3::zeros()));
        compute_adjacency(&mut mesh);

        mesh.triangles.pop();
        compute_adjacency(&mut mesh);

        assert_eq!(mesh.triangles[0].adjacency, [None; 3]);
    }
}
