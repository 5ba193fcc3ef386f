// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! I/O module - loading source geometry into the mesh store

mod stl;

pub use stl::{load_stl, StlLoadError};
