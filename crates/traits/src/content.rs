//! ContentRoot traits for abstracting the rendered view subtree.
//!
//! These traits let the document exporter read the currently mounted view
//! without being tied to a concrete rendering environment: the exporter is
//! handed a provider of "the current renderable root, or none" and can be
//! unit-tested against fakes.

use folio_types::Section;
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for rasterization of a content root.
#[derive(Error, Debug, Clone)]
pub enum RasterError {
    #[error("content root is detached from the view tree")]
    Detached,

    #[error("invalid raster dimensions: {0}")]
    InvalidDimensions(String),

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("resource failed to load: {0}")]
    Resource(String),
}

/// An in-memory RGBA bitmap spanning the full rendered height of a view.
///
/// Produced by rasterization, consumed within a single export operation and
/// then discarded. Pixels are row-major RGBA8 over an opaque background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterSnapshot {
    /// Create a snapshot from raw RGBA8 pixel data.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` if either dimension is zero
    /// or the pixel buffer length does not match `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions(format!(
                "{}x{}",
                width, height
            )));
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RasterError::InvalidDimensions(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A snapshot filled with opaque white, useful for tests and fakes.
    pub fn blank(width: u32, height: u32) -> Result<Self, RasterError> {
        Self::new(width, height, vec![255; width as usize * height as usize * 4])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA value at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }
}

/// A handle to a currently mounted, fully laid-out view subtree.
///
/// The handle is only valid while its section is mounted; navigating away
/// detaches it, after which `rasterize` fails. Implementations must not
/// return from the constructor until the view is fully laid out (no pending
/// asynchronous resource loads); the exporter has no visibility into
/// resource loading and treats the root as ready.
pub trait ContentRoot: Send + Sync + Debug {
    /// The section this root renders.
    fn section(&self) -> Section;

    /// Whether the root is still mounted in the live view tree.
    fn is_attached(&self) -> bool;

    /// Rasterize the subtree into a single bitmap.
    ///
    /// # Arguments
    ///
    /// * `oversample` - Resolution multiplier over the view's natural size
    ///   (2.0 preserves text legibility in the exported document).
    ///
    /// # Errors
    ///
    /// `RasterError::Detached` if the root is no longer mounted, or a
    /// drawing/resource error. Failures are terminal; they are not retried.
    fn rasterize(&self, oversample: f32) -> Result<RasterSnapshot, RasterError>;

    /// Returns a human-readable name for this root (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A provider of the current renderable root, or none.
///
/// This is the injected capability the exporter reads instead of reaching
/// into a concrete view layer.
pub trait ContentRootProvider: Send + Sync + Debug {
    /// The currently exportable content root, if one is mounted.
    fn current_root(&self) -> Option<Arc<dyn ContentRoot>>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A content root backed by a pre-rendered snapshot.
///
/// The simplest root implementation: rasterization returns the stored
/// snapshot (assumed to already be at the desired resolution). Works in any
/// environment and is the standard fake for exporter tests.
#[derive(Debug)]
pub struct InMemoryContentRoot {
    section: Section,
    snapshot: RasterSnapshot,
    attached: AtomicBool,
}

impl InMemoryContentRoot {
    pub fn new(section: Section, snapshot: RasterSnapshot) -> Self {
        Self {
            section,
            snapshot,
            attached: AtomicBool::new(true),
        }
    }

    /// Detach the root, invalidating any outstanding handles.
    pub fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }
}

impl ContentRoot for InMemoryContentRoot {
    fn section(&self) -> Section {
        self.section
    }

    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    fn rasterize(&self, _oversample: f32) -> Result<RasterSnapshot, RasterError> {
        if !self.is_attached() {
            return Err(RasterError::Detached);
        }
        Ok(self.snapshot.clone())
    }

    fn name(&self) -> &'static str {
        "InMemoryContentRoot"
    }
}

/// An in-memory provider holding at most one root, settable at any time.
#[derive(Debug, Default)]
pub struct InMemoryContentRootProvider {
    root: RwLock<Option<Arc<dyn ContentRoot>>>,
}

impl InMemoryContentRootProvider {
    pub fn new() -> Self {
        Self {
            root: RwLock::new(None),
        }
    }

    /// Replace the current root. Returns the previous root, if any.
    ///
    /// Returns `None` without replacing if the internal lock is poisoned.
    pub fn set(&self, root: Arc<dyn ContentRoot>) -> Option<Arc<dyn ContentRoot>> {
        self.root.write().ok()?.replace(root)
    }

    /// Clear the current root, returning it if one was set.
    pub fn clear(&self) -> Option<Arc<dyn ContentRoot>> {
        self.root.write().ok()?.take()
    }
}

impl ContentRootProvider for InMemoryContentRootProvider {
    fn current_root(&self) -> Option<Arc<dyn ContentRoot>> {
        self.root.read().ok()?.clone()
    }

    fn name(&self) -> &'static str {
        "InMemoryContentRootProvider"
    }
}
