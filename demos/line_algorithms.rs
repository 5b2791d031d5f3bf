//! Line Rasterization Example
//!
//! Rasterizes one segment with all three line algorithms, prints their
//! traces and terminal previews, and saves a grid rendering of each to PNG.
//!
//! Run with: `cargo run --example line_algorithms [x0 y0 x1 y1]`

use rasterviz::output::PngEncoder;
use rasterviz::prelude::*;

fn main() {
    println!("Line Rasterization Example");
    println!("==========================\n");

    // Step 1: Pick a segment (CLI coordinates, or a default crossing the origin)
    let line = segment_from_args().unwrap_or_else(|| Line::from_coords(-7, -3, 7, 3));
    println!("Step 1: Segment {} -> {}", line.start, line.end);

    let algorithms = [
        Rasterizer::StepByStep(line),
        Rasterizer::Dda(line),
        Rasterizer::Bresenham(line),
    ];

    // Step 2: Rasterize with each algorithm
    println!("\nStep 2: Rasterizing...");
    for algorithm in algorithms {
        let raster = algorithm.rasterize().expect("Failed to rasterize");
        println!("  {}: {} cells", algorithm.name(), raster.len());
    }

    // Step 3: Print the traces
    println!("\nStep 3: Traces...\n");
    for algorithm in algorithms {
        let trace = algorithm.trace().expect("Failed to trace");
        println!("{trace}");
    }

    // Step 4: Terminal previews
    println!("Step 4: Terminal previews...\n");
    for algorithm in algorithms {
        let raster = algorithm.rasterize().expect("Failed to rasterize");
        let preview = TerminalEncoder::new().axes(true).encode(&raster);
        println!("{}:", algorithm.name());
        print!("{preview}");
        println!();
    }

    // Step 5: Save a grid rendering of each algorithm
    println!("Step 5: Saving PNG renderings...");
    let canvas = GridCanvas::new(800, 800, 20).expect("Failed to create canvas");
    for algorithm in algorithms {
        let raster = algorithm.rasterize().expect("Failed to rasterize");
        let fb = canvas.render(&raster).expect("Failed to render");

        let output_path = format!("{}.png", algorithm.name().replace('-', "_"));
        PngEncoder::write_to_file(&fb, &output_path).expect("Failed to write PNG");
        println!("  Saved to: {}", output_path);
    }

    println!("\nLine renderings successfully generated!");
}

/// Read `x0 y0 x1 y1` from the command line, if all four are given.
fn segment_from_args() -> Option<Line> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        return None;
    }

    let mut coords = [0_i32; 4];
    for (slot, arg) in coords.iter_mut().zip(&args) {
        match arg.parse() {
            Ok(value) => *slot = value,
            Err(_) => {
                eprintln!("Ignoring non-integer coordinate {arg:?}; using the default segment");
                return None;
            }
        }
    }

    Some(Line::from_coords(coords[0], coords[1], coords[2], coords[3]))
}
