//! Textual traces of rasterization runs.
//!
//! The trace is the log a user reads alongside the painted grid: an
//! algorithm-name header followed by one line per emitted cell, in emission
//! order.

use crate::raster::Raster;
use std::fmt::Write as FmtWrite;

/// Render a raster as a human-readable trace.
///
/// The output is `"<name>:\n"` followed by `"point (<x>, <y>)\n"` for every
/// emitted point. Duplicate emissions appear as duplicate lines.
#[must_use]
pub fn format_trace(name: &str, raster: &Raster) -> String {
    // Header plus roughly 16 bytes per point line.
    let mut out = String::with_capacity(name.len() + 2 + raster.len() * 16);
    out.push_str(name);
    out.push_str(":\n");
    for point in raster.iter() {
        let _ = writeln!(out, "point {point}");
    }
    out
}
