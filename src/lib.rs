// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! Meshtopo
//!
//! Triangle-mesh topology pipeline. Takes raw indexed geometry (duplicated
//! vertex positions, independent per-facet normals, no connectivity) and
//! produces a canonical mesh: welded vertices, smooth per-vertex normals and
//! explicit edge-based triangle adjacency, plus read-only topology queries
//! over the result.

pub mod cli;
pub mod geometry;
pub mod io;
pub mod pipeline;

pub use geometry::{Mesh, Triangle, Vertex};
pub use io::load_stl;
pub use pipeline::{process, PipelineReport};

use anyhow::Result;
use std::path::Path;

/// Load an STL file and run the full pipeline over it.
pub fn process_file(path: impl AsRef<Path>) -> Result<(Mesh, PipelineReport)> {
    let mut mesh = io::load_stl(path)?;
    let report = pipeline::process(&mut mesh);
    Ok((mesh, report))
}
