// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! CLI output reporter with colored formatting

use crate::geometry::TopologyReport;
use crate::pipeline::PipelineReport;
use colored::*;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report what the pipeline did and what topology came out.
    pub fn report_inspection(file: &str, pipeline: Option<&PipelineReport>, topo: &TopologyReport) {
        println!("\n{}", "━".repeat(72).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{}", "━".repeat(72).bright_black());

        if let Some(report) = pipeline {
            println!("\n{}", "Pipeline:".bold());
            println!(
                "  {} {} -> {} ({} welded)",
                "Vertices:".bright_black(),
                report.vertices_before,
                report.vertex_count,
                report.vertices_welded,
            );
            println!(
                "  {} {}",
                "Triangles:".bright_black(),
                report.triangle_count
            );
        }

        println!("\n{}", "Topology:".bold());
        println!("  {} {}", "Vertices:".bright_black(), topo.vertex_count);
        println!("  {} {}", "Triangles:".bright_black(), topo.triangle_count);
        println!("  {} {}", "Edges:".bright_black(), topo.edge_count);
        println!(
            "  {} {}",
            "Boundary edges:".bright_black(),
            topo.boundary_edge_count
        );

        Self::print_flag("Manifold", topo.is_manifold);
        Self::print_flag("Closed", topo.is_closed);

        println!("\n{}", "Neighbors per triangle:".bold());
        for (n, &count) in topo.neighbor_histogram.iter().enumerate() {
            if count > 0 {
                println!("  {} {}", format!("{} neighbors:", n).bright_black(), count);
            }
        }
        println!();
    }

    fn print_flag(label: &str, value: bool) {
        if value {
            println!("  {} {}", format!("{}:", label).bright_black(), "yes".green());
        } else {
            println!("  {} {}", format!("{}:", label).bright_black(), "no".yellow());
        }
    }
}
