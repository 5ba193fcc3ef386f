// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! The topology pipeline
//!
//! Runs the three mutating stages over one exclusively borrowed mesh in the
//! only order that is meaningful: deduplicate first (adjacency and smooth
//! normals are keyed on the post-weld index space), then accumulate vertex
//! normals, then rebuild adjacency. Everything is single-threaded and
//! synchronous; the exclusive borrow is the whole locking discipline.

use crate::geometry::{compute_adjacency, compute_vertex_normals, deduplicate_vertices, Mesh};
use serde::{Deserialize, Serialize};

/// What one pipeline run did to the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Vertex count before deduplication.
    pub vertices_before: usize,
    /// Vertices removed by welding.
    pub vertices_welded: usize,
    /// Vertex count after deduplication.
    pub vertex_count: usize,
    /// Unchanged by any stage.
    pub triangle_count: usize,
}

/// Run deduplication, normal accumulation and adjacency reconstruction, in
/// that order, mutating the mesh in place.
pub fn process(mesh: &mut Mesh) -> PipelineReport {
    let vertices_before = mesh.vertex_count();

    let vertices_welded = deduplicate_vertices(mesh);
    compute_vertex_normals(mesh);
    compute_adjacency(mesh);

    PipelineReport {
        vertices_before,
        vertices_welded,
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
    }
}
