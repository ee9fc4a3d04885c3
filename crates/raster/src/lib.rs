//! SVG rasterization backend.
//!
//! Converts rendered section markup (SVG) into pixel bitmaps for the
//! document exporter. The output is always flattened onto an opaque white
//! background because the destination document format has no alpha channel.

mod svg;

pub use svg::SvgRasterizer;

// Font database re-export so callers share resvg's fontdb version.
pub use resvg::usvg::fontdb;

/// Resolution multiplier applied when rasterizing for export.
///
/// 2x keeps text legible once the bitmap is scaled down to page width.
pub const DEFAULT_OVERSAMPLE: f32 = 2.0;
