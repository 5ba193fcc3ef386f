// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! Read-only topology queries over a processed mesh

use super::adjacency::build_edge_map;
use super::Mesh;
use serde::{Deserialize, Serialize};

/// Per-triangle count of populated adjacency slots, in triangle store order.
///
/// Pure read over whatever the adjacency slots currently hold: called before
/// [`compute_adjacency`](super::compute_adjacency) has run it reports on
/// stale or empty slots, which is the caller's responsibility to avoid.
pub fn neighbor_counts(mesh: &Mesh) -> Vec<usize> {
    mesh.triangles
        .iter()
        .map(|t| t.adjacency.iter().filter(|slot| slot.is_some()).count())
        .collect()
}

/// Summary of a mesh's edge topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyReport {
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Distinct undirected edges.
    pub edge_count: usize,
    /// Edges incident to exactly one triangle.
    pub boundary_edge_count: usize,
    /// Every edge shared by at most 2 triangles.
    pub is_manifold: bool,
    /// Every edge shared by exactly 2 triangles.
    pub is_closed: bool,
    /// `neighbor_histogram[n]` = number of triangles with n neighbors.
    pub neighbor_histogram: [usize; 4],
}

/// Validation pass layered on top of the adjacency data. The pipeline itself
/// never rejects non-manifold input; callers wanting detection read it here.
pub fn topology_report(mesh: &Mesh) -> TopologyReport {
    let edge_map = build_edge_map(mesh);

    let boundary_edge_count = edge_map.values().filter(|tris| tris.len() == 1).count();
    let is_manifold = edge_map.values().all(|tris| tris.len() <= 2);
    let is_closed = !mesh.triangles.is_empty() && edge_map.values().all(|tris| tris.len() == 2);

    let mut neighbor_histogram = [0usize; 4];
    for count in neighbor_counts(mesh) {
        neighbor_histogram[count] += 1;
    }

    TopologyReport {
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        edge_count: edge_map.len(),
        boundary_edge_count,
        is_manifold,
        is_closed,
        neighbor_histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{compute_adjacency, Primitive, Triangle, Vertex};
    use nalgebra::{Point3, Vector3};

    #[test]
    fn test_neighbor_counts_before_adjacency_are_zero() {
        let mesh = Primitive::cube(Vector3::new(1.0, 1.0, 1.0), false).to_mesh();
        assert!(neighbor_counts(&mesh).iter().all(|&n| n == 0));
    }

    #[test]
    fn test_welded_cube_is_closed_with_three_neighbors_each() {
        let mut mesh = Primitive::cube(Vector3::new(2.0, 2.0, 2.0), true).to_mesh();
        crate::geometry::deduplicate_vertices(&mut mesh);
        compute_adjacency(&mut mesh);

        let counts = neighbor_counts(&mesh);
        assert_eq!(counts.len(), 12);
        assert!(counts.iter().all(|&n| n == 3));

        let report = topology_report(&mesh);
        assert!(report.is_manifold);
        assert!(report.is_closed);
        assert_eq!(report.edge_count, 18);
        assert_eq!(report.boundary_edge_count, 0);
        assert_eq!(report.neighbor_histogram, [0, 0, 0, 12]);
    }

    #[test]
    fn test_open_fan_reports_boundary_edges() {
        let mut mesh = Mesh::new();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ] {
            mesh.add_vertex(Vertex::at(p));
        }
        let n = Vector3::new(0.0, 0.0, 1.0);
        mesh.add_triangle(Triangle::new([0, 1, 2], n));
        mesh.add_triangle(Triangle::new([0, 2, 3], n));
        compute_adjacency(&mut mesh);

        let report = topology_report(&mesh);
        assert!(report.is_manifold);
        assert!(!report.is_closed);
        assert_eq!(report.edge_count, 5);
        assert_eq!(report.boundary_edge_count, 4);
        assert_eq!(report.neighbor_histogram, [0, 2, 0, 0]);
    }

    #[test]
    fn test_neighbor_counts_bounded() {
        let mut mesh = Primitive::sphere(1.0, 16).to_mesh();
        crate::geometry::deduplicate_vertices(&mut mesh);
        compute_adjacency(&mut mesh);
        assert!(neighbor_counts(&mesh).iter().all(|&n| n <= 3));
    }

    #[test]
    fn test_empty_mesh_is_not_closed() {
        let report = topology_report(&Mesh::new());
        assert!(report.is_manifold);
        assert!(!report.is_closed);
        assert_eq!(report.edge_count, 0);
    }
}
