// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Meshtopo Developers

//! Meshtopo CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use meshtopo::cli::Reporter;
use meshtopo::geometry::{topology_report, Primitive};
use meshtopo::{io, pipeline};
use nalgebra::Vector3;
use serde_json::json;

#[derive(Parser)]
#[command(name = "meshtopo")]
#[command(about = "Triangle-mesh topology inspector - weld, normals, adjacency", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an STL file, run the topology pipeline and report the result
    Inspect {
        /// Input STL file (ASCII or binary)
        input: String,

        /// Report the raw mesh without running the pipeline
        #[arg(long)]
        raw: bool,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Run the pipeline over a generated demo mesh (no input file needed)
    Demo {
        /// Demo shape: cube or sphere
        #[arg(default_value = "cube")]
        shape: String,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { input, raw, json } => {
            let mut mesh = io::load_stl(&input)?;
            let report = if raw {
                None
            } else {
                Some(pipeline::process(&mut mesh))
            };
            let topo = topology_report(&mesh);

            if json {
                let out = json!({
                    "file": input,
                    "pipeline": report,
                    "topology": topo,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                Reporter::report_inspection(&input, report.as_ref(), &topo);
            }
        }

        Commands::Demo { shape, json } => {
            let mut mesh = match shape.as_str() {
                "cube" => Primitive::cube(Vector3::new(10.0, 10.0, 10.0), true).to_mesh(),
                "sphere" => Primitive::sphere(5.0, 32).to_mesh(),
                other => anyhow::bail!("unknown demo shape: {}", other),
            };
            let report = pipeline::process(&mut mesh);
            let topo = topology_report(&mesh);

            if json {
                let out = json!({
                    "shape": shape,
                    "pipeline": report,
                    "topology": topo,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                Reporter::report_inspection(&shape, Some(&report), &topo);
            }
        }
    }

    Ok(())
}
