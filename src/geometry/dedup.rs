// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! Tolerance-based vertex deduplication
//!
//! Two vertices are the same vertex when each position coordinate differs by
//! less than [`POSITION_EPSILON`]. Positions are looked up through a key
//! quantized to the epsilon grid, so hash bucket membership is consistent
//! with the tolerance comparison; the 26 neighboring cells are probed as well
//! to catch matches that straddle a grid boundary.

use super::{Mesh, Vertex};
use ahash::AHashMap;
use nalgebra::Point3;

/// Per-coordinate tolerance under which two positions are one vertex.
pub const POSITION_EPSILON: f64 = 1e-6;

/// Position quantized to the epsilon grid, usable as a hash key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GridKey {
    x: i64,
    y: i64,
    z: i64,
}

impl GridKey {
    fn from_position(p: &Point3<f64>) -> Self {
        let q = |c: f64| (c / POSITION_EPSILON).round() as i64;
        Self {
            x: q(p.x),
            y: q(p.y),
            z: q(p.z),
        }
    }

    fn offset(&self, dx: i64, dy: i64, dz: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

fn positions_match(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    (a.x - b.x).abs() < POSITION_EPSILON
        && (a.y - b.y).abs() < POSITION_EPSILON
        && (a.z - b.z).abs() < POSITION_EPSILON
}

/// Replace the mesh's vertex list with one containing only distinct positions
/// (first-occurrence order preserved) and rewrite every triangle's indices to
/// reference the new list. Returns the number of vertices removed.
///
/// Triangle count never changes. An empty mesh is a no-op. Running it twice
/// yields the same vertex list as running it once.
pub fn deduplicate_vertices(mesh: &mut Mesh) -> usize {
    if mesh.vertices.is_empty() {
        return 0;
    }

    let original_count = mesh.vertices.len();
    let mut new_vertices: Vec<Vertex> = Vec::with_capacity(original_count);
    let mut remap = Vec::with_capacity(original_count);
    let mut index_by_cell: AHashMap<GridKey, usize> = AHashMap::with_capacity(original_count);

    for vertex in &mesh.vertices {
        let key = GridKey::from_position(&vertex.position);
        let mut target = None;

        // A within-tolerance match can sit in the home cell or any of the 26
        // cells around it when the position straddles a grid boundary.
        'probe: for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(&existing) = index_by_cell.get(&key.offset(dx, dy, dz)) {
                        let kept = &new_vertices[existing];
                        if positions_match(&vertex.position, &kept.position) {
                            target = Some(existing);
                            break 'probe;
                        }
                    }
                }
            }
        }

        let new_index = match target {
            Some(existing) => existing,
            None => {
                let new_index = new_vertices.len();
                new_vertices.push(*vertex);
                index_by_cell.insert(key, new_index);
                new_index
            }
        };
        remap.push(new_index);
    }

    // Rewrite triangle indices through the remap table. An index beyond the
    // table is a precondition violation; the slice indexing panics loudly.
    for triangle in &mut mesh.triangles {
        for slot in &mut triangle.indices {
            *slot = remap[*slot];
        }
    }

    mesh.vertices = new_vertices;
    original_count - mesh.vertices.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Triangle, Vertex};
    use nalgebra::{Point3, Vector3};

    fn quad_with_duplicates() -> Mesh {
        // Two triangles of a unit quad, each carrying its own copy of the
        // shared diagonal vertices.
        let mut mesh = Mesh::new();
        let n = Vector3::new(0.0, 0.0, 1.0);
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        for p in positions {
            mesh.add_vertex(Vertex::at(p));
        }
        mesh.add_triangle(Triangle::new([0, 1, 2], n));
        mesh.add_triangle(Triangle::new([3, 4, 5], n));
        mesh
    }

    #[test]
    fn test_welds_duplicate_positions() {
        let mut mesh = quad_with_duplicates();
        let removed = deduplicate_vertices(&mut mesh);

        assert_eq!(removed, 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        // First-occurrence order: both triangles now share indices 0 and 2.
        assert_eq!(mesh.triangles[0].indices, [0, 1, 2]);
        assert_eq!(mesh.triangles[1].indices, [0, 2, 3]);
    }

    #[test]
    fn test_preserves_referenced_positions() {
        let mut mesh = quad_with_duplicates();
        let originals: Vec<[Point3<f64>; 3]> = mesh
            .triangles
            .iter()
            .map(|t| t.indices.map(|i| mesh.vertices[i].position))
            .collect();

        deduplicate_vertices(&mut mesh);

        for (tri, before) in mesh.triangles.iter().zip(&originals) {
            for (slot, expected) in tri.indices.iter().zip(before) {
                let got = mesh.vertices[*slot].position;
                assert!(positions_match(&got, expected));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let mut mesh = quad_with_duplicates();
        deduplicate_vertices(&mut mesh);
        let positions: Vec<Point3<f64>> =
            mesh.vertices.iter().map(|v| v.position).collect();

        let removed_again = deduplicate_vertices(&mut mesh);

        assert_eq!(removed_again, 0);
        assert_eq!(mesh.vertex_count(), positions.len());
        for (v, p) in mesh.vertices.iter().zip(&positions) {
            assert_eq!(v.position, *p);
        }
    }

    #[test]
    fn test_merges_within_tolerance() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::at(Point3::new(0.5, 0.5, 0.5)));
        // Inside the tolerance of the first vertex, possibly in a
        // neighboring grid cell.
        mesh.add_vertex(Vertex::at(Point3::new(0.5 + 4.0e-7, 0.5 - 4.0e-7, 0.5)));

        let removed = deduplicate_vertices(&mut mesh);

        assert_eq!(removed, 1);
        assert_eq!(mesh.vertices[0].position, Point3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_keeps_distinct_positions() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::at(Point3::new(0.0, 0.0, 0.0)));
        mesh.add_vertex(Vertex::at(Point3::new(1.0e-5, 0.0, 0.0)));

        assert_eq!(deduplicate_vertices(&mut mesh), 0);
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn test_empty_mesh_is_noop() {
        let mut mesh = Mesh::new();
        assert_eq!(deduplicate_vertices(&mut mesh), 0);
        assert!(mesh.is_empty());
    }
}
