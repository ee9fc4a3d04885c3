use folio_traits::{RasterError, RasterSnapshot};
use resvg::usvg::fontdb;
use std::fmt;
use std::sync::Arc;

/// Rasterizes SVG markup into RGBA snapshots.
///
/// The font database is loaded once and shared across rasterizations; the
/// rasterizer itself is cheap to clone.
#[derive(Clone)]
pub struct SvgRasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl fmt::Debug for SvgRasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgRasterizer")
            .field("fonts", &self.fontdb.len())
            .finish()
    }
}

impl SvgRasterizer {
    /// Create a rasterizer using the system font collection.
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        log::debug!("svg rasterizer loaded {} font faces", db.len());
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Create a rasterizer with a pre-populated font database.
    pub fn with_fonts(fontdb: Arc<fontdb::Database>) -> Self {
        Self { fontdb }
    }

    /// Rasterize `svg` into a bitmap scaled by `oversample`.
    ///
    /// The pixmap is filled with opaque white before rendering, so the
    /// snapshot never carries transparency regardless of the markup's own
    /// background.
    pub fn rasterize(&self, svg: &str, oversample: f32) -> Result<RasterSnapshot, RasterError> {
        if !oversample.is_finite() || oversample <= 0.0 {
            return Err(RasterError::InvalidDimensions(format!(
                "oversample factor {oversample} is not positive"
            )));
        }

        let opts = resvg::usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };

        let tree = resvg::usvg::Tree::from_str(svg, &opts)
            .map_err(|e| RasterError::Draw(format!("SVG parse failed: {e}")))?;
        let size = tree.size();

        let width = (size.width() * oversample).ceil() as u32;
        let height = (size.height() * oversample).ceil() as u32;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            RasterError::Draw(format!("failed to allocate {width}x{height} pixmap"))
        })?;

        // Destination format has no alpha channel; flatten onto white.
        pixmap.fill(resvg::tiny_skia::Color::WHITE);

        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(oversample, oversample),
            &mut pixmap.as_mut(),
        );

        RasterSnapshot::new(width, height, pixmap.take())
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="150">
        <rect x="40" y="40" width="20" height="20" fill="#ff0000"/>
    </svg>"##;

    fn rasterizer() -> SvgRasterizer {
        // Tests draw shapes only, so an empty font database is fine and
        // avoids depending on the host's installed fonts.
        SvgRasterizer::with_fonts(Arc::new(fontdb::Database::new()))
    }

    #[test]
    fn test_rasterize_applies_oversample_factor() {
        let snapshot = rasterizer().rasterize(RED_SQUARE, 2.0).unwrap();
        assert_eq!(snapshot.width(), 200);
        assert_eq!(snapshot.height(), 300);
    }

    #[test]
    fn test_background_is_forced_opaque_white() {
        let snapshot = rasterizer().rasterize(RED_SQUARE, 1.0).unwrap();
        // Corner is outside the red square.
        assert_eq!(snapshot.pixel(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_shapes_are_drawn() {
        let snapshot = rasterizer().rasterize(RED_SQUARE, 1.0).unwrap();
        let [r, g, b, a] = snapshot.pixel(50, 50).unwrap();
        assert_eq!((r, g, b, a), (255, 0, 0, 255));
    }

    #[test]
    fn test_malformed_svg_fails_draw() {
        let result = rasterizer().rasterize("<svg", 1.0);
        assert!(matches!(result, Err(RasterError::Draw(_))));
    }

    #[test]
    fn test_non_positive_oversample_rejected() {
        let result = rasterizer().rasterize(RED_SQUARE, 0.0);
        assert!(matches!(result, Err(RasterError::InvalidDimensions(_))));
    }
}
