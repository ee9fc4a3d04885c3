use folio_traits::RasterError;
use thiserror::Error;

/// The error taxonomy for one export invocation. Every variant is terminal
/// for that invocation: nothing is retried and no partial output is emitted.
#[derive(Error, Debug)]
pub enum ExportError {
    /// No content root is mounted, or the handle is detached.
    #[error("no exportable content: the resume view is not mounted")]
    ContentUnavailable,

    /// An export job is already running; concurrent calls are rejected,
    /// not queued.
    #[error("an export is already in progress")]
    Busy,

    /// Rasterizing the view subtree failed (drawing or resource error).
    #[error("rasterization failed: {0}")]
    Rasterization(#[from] RasterError),

    /// Pagination or PDF encoding failed.
    #[error("document assembly failed: {0}")]
    DocumentAssembly(String),
}
