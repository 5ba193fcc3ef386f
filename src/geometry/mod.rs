// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! Geometry module - mesh storage and the topology pipeline stages

mod adjacency;
mod dedup;
mod mesh;
mod normals;
mod primitives;
mod topology;

pub use adjacency::{compute_adjacency, Edge};
pub use dedup::{deduplicate_vertices, POSITION_EPSILON};
pub use mesh::{Mesh, Triangle, Vertex};
pub use normals::{compute_vertex_normals, NORMAL_EPSILON};
pub use primitives::Primitive;
pub use topology::{neighbor_counts, topology_report, TopologyReport};
