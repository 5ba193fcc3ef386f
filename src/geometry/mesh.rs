// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! Mesh storage: vertices, triangles, and basic counts

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Vertex with position and a derived smooth normal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f64>,
    /// Derived data, owned by the normal accumulation stage.
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }

    /// Vertex with a zero normal, the state of freshly loaded geometry.
    pub fn at(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: Vector3::zeros(),
        }
    }
}

/// Triangle defined by three vertex indices, a face normal carried from the
/// source geometry, and per-edge adjacency filled in by the adjacency stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
    /// Set at construction from source data; never recomputed by the pipeline.
    pub face_normal: Vector3<f64>,
    /// Slot `k` is the neighbor across edge `(indices[k], indices[(k+1)%3])`,
    /// or `None` when no other triangle shares that edge.
    pub adjacency: [Option<usize>; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3], face_normal: Vector3<f64>) -> Self {
        Self {
            indices,
            face_normal,
            adjacency: [None; 3],
        }
    }

    /// The three directed edges in slot order: (v0,v1), (v1,v2), (v2,v0).
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.indices;
        [(a, b), (b, c), (c, a)]
    }
}

/// Triangular mesh store.
///
/// Triangle order is stable and meaningful: it is the enumeration order used
/// by adjacency and topology queries. Vertex order is stable but renumbered
/// by deduplication. Every triangle index must be in range for the current
/// vertex list; restoring that invariant after a vertex-list mutation is the
/// mutating stage's job, and an out-of-range index anywhere else is a
/// contract violation that panics rather than being clamped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        debug_assert!(
            triangle.indices.iter().all(|&i| i < self.vertices.len()),
            "triangle references vertex index out of range"
        );
        self.triangles.push(triangle);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.triangles.is_empty()
    }

    /// Drop all vertices and triangles, keeping allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
    }
}
