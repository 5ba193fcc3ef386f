// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! STL loader
//!
//! Emits raw facet soup: three fresh vertices plus one triangle per facet,
//! with the facet normal taken from the file. No welding, no connectivity;
//! that is the pipeline's job.

use crate::geometry::{Mesh, Triangle, Vertex};
use nalgebra::{Point3, Vector3};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Why an STL file could not be loaded.
#[derive(Debug, Error)]
pub enum StlLoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: std::io::Error,
    },
}

/// Load an ASCII or binary STL file into a raw mesh.
///
/// A facet whose stored normal is near zero (some exporters write zeroed
/// normals) gets a normal computed from its vertex positions instead; that is
/// a loader concern, the pipeline itself never derives face normals.
pub fn load_stl(path: impl AsRef<Path>) -> Result<Mesh, StlLoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let mut file = File::open(path).map_err(|source| StlLoadError::Open {
        path: display.clone(),
        source,
    })?;

    let stl = stl_io::read_stl(&mut file).map_err(|source| StlLoadError::Parse {
        path: display,
        source,
    })?;

    let mut mesh = Mesh::with_capacity(stl.faces.len() * 3, stl.faces.len());

    for face in &stl.faces {
        let positions = face.vertices.map(|i| {
            let v = &stl.vertices[i];
            Point3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2]))
        });

        let mut normal = Vector3::new(
            f64::from(face.normal[0]),
            f64::from(face.normal[1]),
            f64::from(face.normal[2]),
        );
        if normal.norm() < 1e-12 {
            normal = fallback_normal(&positions);
        }

        let indices = positions.map(|p| mesh.add_vertex(Vertex::at(p)));
        mesh.add_triangle(Triangle::new(indices, normal));
    }

    Ok(mesh)
}

fn fallback_normal(positions: &[Point3<f64>; 3]) -> Vector3<f64> {
    let normal = (positions[1] - positions[0]).cross(&(positions[2] - positions[0]));
    let len = normal.norm();
    if len > 1e-12 {
        normal / len
    } else {
        // Degenerate facet; a zero face normal contributes nothing downstream.
        Vector3::zeros()
    }
}
