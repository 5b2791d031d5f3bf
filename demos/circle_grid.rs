//! Circle Rasterization Example
//!
//! Rasterizes a family of concentric circles with the midpoint algorithm,
//! previews the smallest in the terminal, and layers them all onto one
//! grid rendering saved to PNG.
//!
//! Run with: `cargo run --example circle_grid`

use rasterviz::output::{PngEncoder, TerminalEncoder};
use rasterviz::prelude::*;

fn main() {
    println!("Circle Rasterization Example");
    println!("============================\n");

    // Step 1: Rasterize concentric circles
    println!("Step 1: Rasterizing circles...");
    let radii = [3, 6, 9, 12];
    let mut rasters = Vec::with_capacity(radii.len());
    for radius in radii {
        let raster =
            midpoint_circle(Circle::from_coords(0, 0, radius)).expect("Failed to rasterize");
        println!(
            "  radius {:2}: {} cells ({} unique)",
            radius,
            raster.len(),
            raster.deduplicated().len()
        );
        rasters.push(raster);
    }

    // Step 2: Terminal preview of the smallest circle
    println!("\nStep 2: Terminal preview (radius 3):\n");
    let preview = TerminalEncoder::new().axes(true).encode(&rasters[0]);
    print!("{preview}");

    // Step 3: Trace of the smallest circle
    println!("\nStep 3: Trace (radius 3):\n");
    let trace = Rasterizer::Circle(Circle::from_coords(0, 0, 3))
        .trace()
        .expect("Failed to trace");
    print!("{trace}");

    // Step 4: Layer every circle onto one canvas
    println!("\nStep 4: Saving PNG rendering...");
    let canvas = GridCanvas::new(800, 800, 20).expect("Failed to create canvas");
    let largest = rasters.last().expect("Radii list is non-empty");
    let mut fb = canvas.render(largest).expect("Failed to render");
    for raster in &rasters[..rasters.len() - 1] {
        canvas.fill_raster(&mut fb, raster, Rgba::DARK_GRAY);
    }

    let output_path = "circle_grid.png";
    PngEncoder::write_to_file(&fb, output_path).expect("Failed to write PNG");
    println!("  Saved to: {}", output_path);

    println!("\nCircle renderings successfully generated!");
}
