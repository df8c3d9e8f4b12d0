//! CLI tool for panegrid - lays out a grid description and outputs JSON
//!
//! Usage:
//!   panegrid_cli <grid.json>                          # Viewport 0,0,800,600 to stdout
//!   panegrid_cli <grid.json> --viewport 0,120,400,300 # Custom viewport
//!   panegrid_cli <grid.json> --zoom 1.5 -o out.json   # Zoomed, to a file

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use panegrid::error::{PanegridError, Result};
use panegrid::{snapshot_model, GridModel, Rect};

const USAGE: &str =
    "Usage: panegrid_cli <grid.json> [--viewport x,y,w,h] [--zoom scale] [-o output.json]";

fn parse_viewport(value: &str) -> Option<Rect> {
    let parts: Vec<f32> = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [x, y, width, height] => Some(Rect::new(*x, *y, *width, *height)),
        _ => None,
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some(input_path) = args.get(1) else {
        return Err(USAGE.into());
    };
    let mut rect = Rect::new(0.0, 0.0, 800.0, 600.0);
    let mut zoom = 1.0_f32;
    let mut output_path: Option<&String> = None;

    let mut options = args.iter().skip(2);
    while let Some(option) = options.next() {
        let value = options
            .next()
            .ok_or_else(|| PanegridError::Other(format!("Missing value for {option}\n{USAGE}")))?;
        match option.as_str() {
            "--viewport" => {
                rect = parse_viewport(value)
                    .ok_or_else(|| PanegridError::Other(format!("Invalid viewport: {value}")))?;
            }
            "--zoom" => {
                zoom = value
                    .parse()
                    .map_err(|_| PanegridError::Other(format!("Invalid zoom: {value}")))?;
            }
            "-o" => output_path = Some(value),
            other => return Err(format!("Unknown option {other}\n{USAGE}").into()),
        }
    }

    // Load and lay out
    let model = GridModel::from_file(input_path)?;
    let snapshot = snapshot_model(model, rect, zoom);
    let output = serde_json::to_string_pretty(&snapshot)?;

    // Output
    match output_path {
        Some(path) => {
            fs::write(path, &output)?;
            eprintln!("Written: {} ({} elements)", path, snapshot.elements.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("panegrid_cli: {e}");
        std::process::exit(1);
    }
}
