// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! CLI subsystem for Meshtopo

pub mod reporter;

pub use reporter::Reporter;
