//! Paginated PDF export of rasterized view content.
//!
//! The exporter reads the currently mounted view through an injected
//! `ContentRootProvider`, rasterizes it into a single tall bitmap, and
//! assembles a multi-page PDF by placing the full image on each page with a
//! successively shifted vertical offset. The page geometry clips each band,
//! no pixel data is cropped.

mod error;
mod exporter;
mod pagination;
mod pdf;

pub use error::ExportError;
pub use exporter::{
    DocumentExporter, ExportOptions, ExportedDocument, JobState, resume_file_name,
};
pub use pagination::{PagePlan, plan_pages};
