//! # folio
//!
//! A personal portfolio site engine: a static profile rendered as a set of
//! navigable sections (home, about, projects, resume, contact) with a
//! paginated PDF export of the resume view.
//!
//! This crate is the integration layer. The member crates do the work:
//! - `folio-types`: section identifiers, page geometry, the profile model
//! - `folio-traits`: content-root abstractions the exporter is tested against
//! - `folio-raster`: SVG-to-bitmap rasterization
//! - `folio-view`: section views and the navigation controller
//! - `folio-export`: pagination and PDF assembly with the busy guard

use folio_raster::SvgRasterizer;
use std::sync::Arc;
use thiserror::Error;

// Re-export foundation crates
pub use folio_traits as traits;
pub use folio_types as types;

// Re-export commonly used types
pub use folio_export::{
    DocumentExporter, ExportError, ExportOptions, ExportedDocument, JobState, resume_file_name,
};
pub use folio_raster::{DEFAULT_OVERSAMPLE, fontdb};
pub use folio_types::{PageSize, Profile, Section, SectionParseError};
pub use folio_view::{NavState, ViewController};

/// The one failure message shown to users, regardless of which specific
/// export error occurred. Specifics go to the log only.
pub const EXPORT_FAILURE_NOTICE: &str = "Sorry, the resume PDF could not be generated. \
    Please use your viewer's print-to-PDF function as a fallback.";

/// The main error enum for high-level portfolio operations.
#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Profile parsing error: {0}")]
    Profile(#[from] serde_json::Error),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
    #[error("navigation is locked while an export is in progress")]
    NavigationLocked,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Semantic state of the download trigger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Enabled; a click starts an export.
    Idle,
    /// Disabled while a job is in flight.
    Running,
}

impl TriggerState {
    pub fn label(self) -> &'static str {
        match self {
            TriggerState::Idle => "Download Resume",
            TriggerState::Running => "Generating\u{2026}",
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, TriggerState::Idle)
    }
}

/// Builder for a wired-up [`PortfolioApp`].
#[derive(Default)]
pub struct PortfolioBuilder {
    profile: Option<Profile>,
    page_size: PageSize,
    oversample: Option<f32>,
    fontdb: Option<Arc<fontdb::Database>>,
}

impl PortfolioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Load the profile from a JSON document.
    pub fn with_profile_json(mut self, json: &str) -> Result<Self, PortfolioError> {
        self.profile = Some(serde_json::from_str(json)?);
        Ok(self)
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_oversample(mut self, oversample: f32) -> Self {
        self.oversample = Some(oversample);
        self
    }

    /// Use a pre-populated font database instead of system font discovery.
    pub fn with_font_database(mut self, fontdb: Arc<fontdb::Database>) -> Self {
        self.fontdb = Some(fontdb);
        self
    }

    pub fn build(self) -> Result<PortfolioApp, PortfolioError> {
        let profile = Arc::new(
            self.profile
                .ok_or_else(|| PortfolioError::Config("no profile was provided".to_string()))?,
        );
        let backend = match self.fontdb {
            Some(fontdb) => SvgRasterizer::with_fonts(fontdb),
            None => SvgRasterizer::new(),
        };
        let view = Arc::new(ViewController::new(profile.clone(), backend));

        let mut options = ExportOptions::new(profile.name.clone());
        options.page_size = self.page_size;
        options.oversample = self.oversample.unwrap_or(DEFAULT_OVERSAMPLE);
        let exporter = DocumentExporter::new(view.clone(), options);

        Ok(PortfolioApp {
            profile,
            view,
            exporter,
        })
    }
}

/// The assembled site: navigation plus the resume export trigger.
pub struct PortfolioApp {
    profile: Arc<Profile>,
    view: Arc<ViewController>,
    exporter: DocumentExporter,
}

impl PortfolioApp {
    pub fn builder() -> PortfolioBuilder {
        PortfolioBuilder::new()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Navigate to a section. Refused while an export is in flight, since
    /// unmounting the view under a running capture is a precondition
    /// violation of the exporter.
    pub fn select(&self, section: Section) -> Result<(), PortfolioError> {
        if self.exporter.is_busy() {
            log::warn!("navigation to '{section}' refused: export in progress");
            return Err(PortfolioError::NavigationLocked);
        }
        self.view.select(section);
        Ok(())
    }

    pub fn current(&self) -> Section {
        self.view.current()
    }

    /// State of the download control, derived from the export job state.
    pub fn trigger_state(&self) -> TriggerState {
        if self.exporter.is_busy() {
            TriggerState::Running
        } else {
            TriggerState::Idle
        }
    }

    /// Run the resume export. The resume section must be the current view.
    pub fn download_resume(&self) -> Result<ExportedDocument, PortfolioError> {
        Ok(self.exporter.export()?)
    }

    /// Last known export job state, for diagnostics.
    pub fn export_state(&self) -> JobState {
        self.exporter.state()
    }
}
