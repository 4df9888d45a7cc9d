// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Curriflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Curriflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Curriflow CLI entrypoint.
//!
//! Reads curriculum documents and prints the routed prerequisite diagram of each as JSON on
//! stdout. Logging goes to stderr and is controlled through `RUST_LOG`.

use std::error::Error;
use std::path::{Path, PathBuf};

use curriflow::layout::{orchestrate_with, PrerequisiteDiagram};
use curriflow::model::{document_schema, load_document, DocumentError};
use curriflow::policy::DiagramPolicies;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--pretty] [--no-rects] <curriculum.json>...\n  {program} --schema [--pretty]\n\nEach file is routed independently; several files are processed in parallel and printed as a\nJSON array in argument order.\n\n--no-rects omits the node rectangles from the output.\n--schema prints the JSON schema of the input document and exits.\n\nSet RUST_LOG (e.g. RUST_LOG=curriflow=debug) for routing diagnostics on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    pretty: bool,
    schema: bool,
    no_rects: bool,
    files: Vec<PathBuf>,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--pretty" => {
                if options.pretty {
                    return Err(());
                }
                options.pretty = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--no-rects" => {
                if options.no_rects {
                    return Err(());
                }
                options.no_rects = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => options.files.push(PathBuf::from(arg)),
        }
    }

    if options.schema {
        if !options.files.is_empty() || options.no_rects {
            return Err(());
        }
    } else if options.files.is_empty() {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn route_file(path: &Path) -> Result<PrerequisiteDiagram, DocumentError> {
    let loaded = load_document(path)?;
    tracing::debug!(
        path = %path.display(),
        nodes = loaded.curriculum.nodes().len(),
        "curriculum loaded"
    );
    let policies = DiagramPolicies::with_highlight(&loaded.highlight);
    Ok(orchestrate_with(&loaded.curriculum, &loaded.config, policies))
}

fn diagram_value(
    diagram: &PrerequisiteDiagram,
    no_rects: bool,
) -> Result<serde_json::Value, serde_json::Error> {
    let mut value = serde_json::to_value(diagram)?;
    if no_rects {
        if let Some(object) = value.as_object_mut() {
            object.remove("nodes");
        }
    }
    Ok(value)
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<(), serde_json::Error> {
    let text =
        if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    println!("{text}");
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "curriflow".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        if options.schema {
            print_json(&document_schema(), options.pretty)?;
            return Ok(());
        }

        let diagrams = options.files.par_iter().map(|path| route_file(path)).collect::<Vec<_>>();

        let mut values = Vec::with_capacity(diagrams.len());
        for diagram in diagrams {
            values.push(diagram_value(&diagram?, options.no_rects)?);
        }

        let output = if values.len() == 1 {
            values.remove(0)
        } else {
            serde_json::Value::Array(values)
        };
        print_json(&output, options.pretty)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("curriflow: {err}");
        std::process::exit(1);
    }
}
