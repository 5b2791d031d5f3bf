//! End-to-end pipeline tests.
//!
//! Exercise the full path from segment and circle inputs through
//! rasterization, trace formatting, grid rendering, and PNG encoding.
//!
//! Run: cargo test --test pipeline_test

// Allow common test patterns
#![allow(clippy::unwrap_used)]

use rasterviz::prelude::*;

// ============================================================================
// RASTERIZATION AND TRACES
// ============================================================================

#[test]
fn test_every_algorithm_rasterizes_and_traces() {
    let line = Line::from_coords(0, 0, 6, 3);
    let circle = Circle::from_coords(0, 0, 4);

    let algorithms = [
        Rasterizer::StepByStep(line),
        Rasterizer::Dda(line),
        Rasterizer::Bresenham(line),
        Rasterizer::Circle(circle),
    ];

    for algorithm in algorithms {
        let raster = algorithm
            .rasterize()
            .expect("rasterization should succeed");
        assert!(
            !raster.is_empty(),
            "{} produced an empty raster",
            algorithm.name()
        );

        let trace = algorithm.trace().expect("trace should succeed");
        assert!(
            trace.starts_with(&format!("{}:\n", algorithm.name())),
            "trace missing header for {}",
            algorithm.name()
        );
        assert_eq!(
            trace.matches("point (").count(),
            raster.len(),
            "{} trace line count mismatch",
            algorithm.name()
        );
    }
}

#[test]
fn test_line_algorithms_agree_on_counts_and_endpoints() {
    let line = Line::from_coords(-3, 7, 11, -2);
    let expected_len = 15; // max(|dx|, |dy|) + 1

    let dda_raster = Rasterizer::Dda(line)
        .rasterize()
        .expect("rasterization should succeed");
    let bres_raster = Rasterizer::Bresenham(line)
        .rasterize()
        .expect("rasterization should succeed");
    let step_raster = Rasterizer::StepByStep(line)
        .rasterize()
        .expect("rasterization should succeed");

    assert_eq!(dda_raster.len(), expected_len);
    assert_eq!(bres_raster.len(), expected_len);
    assert_eq!(step_raster.len(), expected_len);

    // DDA and Bresenham walk from start to end.
    assert_eq!(dda_raster.first(), Some(line.start));
    assert_eq!(dda_raster.last(), Some(line.end));
    assert_eq!(bres_raster.first(), Some(line.start));
    assert_eq!(bres_raster.last(), Some(line.end));

    // Step-by-step normalizes both axes and walks the mirrored segment
    // from the low corner upward.
    assert_eq!(step_raster.first(), Some(Point::new(-3, -2)));
}

#[test]
fn test_dda_trace_text() {
    let trace = Rasterizer::Dda(Line::from_coords(0, 0, 2, 2))
        .trace()
        .expect("trace should succeed");
    assert_eq!(trace, "dda:\npoint (0, 0)\npoint (1, 1)\npoint (2, 2)\n");
}

#[test]
fn test_circle_trace_includes_all_reflections() {
    let trace = Rasterizer::Circle(Circle::from_coords(0, 0, 0))
        .trace()
        .expect("trace should succeed");
    let expected = format!("circle bresenham:\n{}", "point (0, 0)\n".repeat(8));
    assert_eq!(trace, expected);
}

// ============================================================================
// RENDERING AND ENCODING
// ============================================================================

#[test]
fn test_line_renders_to_decodable_png() {
    let raster = Rasterizer::Bresenham(Line::from_coords(-10, -5, 10, 5))
        .rasterize()
        .expect("rasterization should succeed");
    let canvas = GridCanvas::new(400, 400, 20).expect("canvas creation should succeed");
    let fb = canvas.render(&raster).expect("render should succeed");

    let bytes = PngEncoder::to_bytes(&fb).expect("PNG encoding should succeed");
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let decoder = png::Decoder::new(&bytes[..]);
    let mut reader = decoder.read_info().expect("PNG header should parse");
    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels).expect("PNG frame should decode");

    assert_eq!(info.width, 400);
    assert_eq!(info.height, 400);
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(&pixels[..info.buffer_size()], fb.pixels());
}

#[test]
fn test_rendered_cells_survive_png_round_trip() {
    let raster = Rasterizer::Circle(Circle::from_coords(0, 0, 3))
        .rasterize()
        .expect("rasterization should succeed");
    let canvas = GridCanvas::new(200, 200, 10).expect("canvas creation should succeed");
    let fb = canvas.render(&raster).expect("render should succeed");

    let bytes = PngEncoder::to_bytes(&fb).expect("PNG encoding should succeed");
    let decoder = png::Decoder::new(&bytes[..]);
    let mut reader = decoder.read_info().expect("PNG header should parse");
    let mut pixels = vec![0; reader.output_buffer_size()];
    reader.next_frame(&mut pixels).expect("PNG frame should decode");

    // Cell (3, 0) is on the circle: origin (100, 100), cell size 10, so the
    // cell covers x 130..140, y 90..100. Sample its interior pixel.
    let theme = GridTheme::default();
    let index = ((95 * 200 + 135) * 4) as usize;
    let sample = Rgba::new(
        pixels[index],
        pixels[index + 1],
        pixels[index + 2],
        pixels[index + 3],
    );
    assert_eq!(sample, theme.cell);
}

#[test]
fn test_write_to_file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir creation should succeed");
    let path = dir.path().join("segment.png");

    let raster = Rasterizer::StepByStep(Line::from_coords(0, 0, 8, 3))
        .rasterize()
        .expect("rasterization should succeed");
    let canvas = GridCanvas::new(240, 240, 12).expect("canvas creation should succeed");
    let fb = canvas.render(&raster).expect("render should succeed");
    PngEncoder::write_to_file(&fb, &path).expect("PNG write should succeed");

    let bytes = std::fs::read(&path).expect("file read should succeed");
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[test]
fn test_terminal_preview_matches_raster_extent() {
    let raster = Rasterizer::Circle(Circle::from_coords(0, 0, 2))
        .rasterize()
        .expect("rasterization should succeed");
    let text = TerminalEncoder::new().encode(&raster);

    // Extent is -2..=2 on both axes: five rows of five glyphs.
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| line.chars().count() == 5));
    assert_eq!(text.matches('#').count(), raster.deduplicated().len());
}

// ============================================================================
// ERROR PATHS
// ============================================================================

#[test]
fn test_negative_radius_fails_before_rendering() {
    let result = Rasterizer::Circle(Circle::from_coords(0, 0, -3)).rasterize();
    assert!(matches!(result, Err(Error::InvalidRadius { radius: -3 })));
}

#[test]
fn test_canvas_rejects_degenerate_surfaces() {
    assert!(matches!(
        GridCanvas::new(0, 200, 10),
        Err(Error::InvalidDimensions {
            width: 0,
            height: 200
        })
    ));
    assert!(matches!(
        GridCanvas::new(200, 200, 0),
        Err(Error::InvalidCellSize { cell_size: 0 })
    ));
}
