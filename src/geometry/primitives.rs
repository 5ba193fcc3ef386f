// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! Facet-soup primitive generators
//!
//! Every triangle gets its own three vertices and a precomputed face normal,
//! the same raw texture an STL facet stream has. That gives the pipeline real
//! deduplication work, which is what tests, benches and the demo path want.

use super::{Mesh, Triangle, Vertex};
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Test and demo geometry
pub enum Primitive {
    Cube { size: Vector3<f64>, center: bool },
    Sphere { r: f64, segments: u32 },
}

impl Primitive {
    pub fn cube(size: Vector3<f64>, center: bool) -> Self {
        Self::Cube { size, center }
    }

    pub fn sphere(r: f64, segments: u32) -> Self {
        let segments = if segments >= 3 { segments } else { 16 };
        Self::Sphere { r, segments }
    }

    pub fn to_mesh(&self) -> Mesh {
        match self {
            Self::Cube { size, center } => generate_cube_mesh(*size, *center),
            Self::Sphere { r, segments } => generate_sphere_mesh(*r, *segments),
        }
    }
}

/// Append one facet: three fresh vertices plus a triangle carrying `normal`.
fn push_facet(mesh: &mut Mesh, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>, normal: Vector3<f64>) {
    let v0 = mesh.add_vertex(Vertex::at(a));
    let v1 = mesh.add_vertex(Vertex::at(b));
    let v2 = mesh.add_vertex(Vertex::at(c));
    mesh.add_triangle(Triangle::new([v0, v1, v2], normal));
}

fn generate_cube_mesh(size: Vector3<f64>, center: bool) -> Mesh {
    let mut mesh = Mesh::with_capacity(36, 12);

    let (min_x, max_x) = if center {
        (-size.x / 2.0, size.x / 2.0)
    } else {
        (0.0, size.x)
    };
    let (min_y, max_y) = if center {
        (-size.y / 2.0, size.y / 2.0)
    } else {
        (0.0, size.y)
    };
    let (min_z, max_z) = if center {
        (-size.z / 2.0, size.z / 2.0)
    } else {
        (0.0, size.z)
    };

    // 8 corners of the cube
    let corners = [
        Point3::new(min_x, min_y, min_z),
        Point3::new(max_x, min_y, min_z),
        Point3::new(max_x, max_y, min_z),
        Point3::new(min_x, max_y, min_z),
        Point3::new(min_x, min_y, max_z),
        Point3::new(max_x, min_y, max_z),
        Point3::new(max_x, max_y, max_z),
        Point3::new(min_x, max_y, max_z),
    ];

    // 6 faces, two facets each, with outward normals
    let faces = [
        // Front (z+)
        ([4, 5, 6], Vector3::new(0.0, 0.0, 1.0)),
        ([4, 6, 7], Vector3::new(0.0, 0.0, 1.0)),
        // Back (z-)
        ([1, 0, 3], Vector3::new(0.0, 0.0, -1.0)),
        ([1, 3, 2], Vector3::new(0.0, 0.0, -1.0)),
        // Right (x+)
        ([5, 1, 2], Vector3::new(1.0, 0.0, 0.0)),
        ([5, 2, 6], Vector3::new(1.0, 0.0, 0.0)),
        // Left (x-)
        ([0, 4, 7], Vector3::new(-1.0, 0.0, 0.0)),
        ([0, 7, 3], Vector3::new(-1.0, 0.0, 0.0)),
        // Top (y+)
        ([7, 6, 2], Vector3::new(0.0, 1.0, 0.0)),
        ([7, 2, 3], Vector3::new(0.0, 1.0, 0.0)),
        // Bottom (y-)
        ([0, 1, 5], Vector3::new(0.0, -1.0, 0.0)),
        ([0, 5, 4], Vector3::new(0.0, -1.0, 0.0)),
    ];

    for (indices, normal) in faces {
        push_facet(
            &mut mesh,
            corners[indices[0]],
            corners[indices[1]],
            corners[indices[2]],
            normal,
        );
    }

    mesh
}

fn generate_sphere_mesh(radius: f64, segments: u32) -> Mesh {
    let mut mesh = Mesh::new();
    let stacks = segments;
    let slices = segments;

    let point_at = |i: u32, j: u32| -> Point3<f64> {
        let phi = PI * i as f64 / stacks as f64;
        let theta = 2.0 * PI * j as f64 / slices as f64;
        let r = radius * phi.sin();
        Point3::new(r * theta.cos(), radius * phi.cos(), r * theta.sin())
    };

    for i in 0..stacks {
        for j in 0..slices {
            let a = point_at(i, j);
            let b = point_at(i + 1, j);
            let c = point_at(i + 1, j + 1);
            let d = point_at(i, j + 1);

            // Quads collapse to single triangles at the poles.
            if i > 0 {
                let normal = facet_normal(a, b, d);
                push_facet(&mut mesh, a, b, d, normal);
            }
            if i + 1 < stacks {
                let normal = facet_normal(b, c, d);
                push_facet(&mut mesh, b, c, d, normal);
            }
        }
    }

    mesh
}

fn facet_normal(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Vector3<f64> {
    let normal = (b - a).cross(&(c - a));
    let len = normal.norm();
    if len > 1e-12 {
        normal / len
    } else {
        Vector3::zeros()
    }
}
