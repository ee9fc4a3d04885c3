use folio_raster::SvgRasterizer;
use folio_traits::{ContentRoot, RasterError, RasterSnapshot};
use folio_types::Section;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A mounted section view backed by SVG markup.
///
/// The markup is complete at construction time, so the root is fully laid
/// out before it is ever handed to the exporter; there are no pending
/// asynchronous loads to wait for. Navigating away detaches the root;
/// stale handles then fail to rasterize instead of capturing a dead view.
pub struct SvgContentRoot {
    section: Section,
    svg: String,
    backend: SvgRasterizer,
    attached: AtomicBool,
}

impl fmt::Debug for SvgContentRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgContentRoot")
            .field("section", &self.section)
            .field("markup_bytes", &self.svg.len())
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl SvgContentRoot {
    pub fn new(section: Section, svg: String, backend: SvgRasterizer) -> Arc<Self> {
        Arc::new(Self {
            section,
            svg,
            backend,
            attached: AtomicBool::new(true),
        })
    }

    /// Detach this root from the view tree, invalidating all handles to it.
    pub(crate) fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }

    pub fn markup(&self) -> &str {
        &self.svg
    }
}

impl ContentRoot for SvgContentRoot {
    fn section(&self) -> Section {
        self.section
    }

    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    fn rasterize(&self, oversample: f32) -> Result<RasterSnapshot, RasterError> {
        if !self.is_attached() {
            return Err(RasterError::Detached);
        }
        self.backend.rasterize(&self.svg, oversample)
    }

    fn name(&self) -> &'static str {
        "SvgContentRoot"
    }
}
