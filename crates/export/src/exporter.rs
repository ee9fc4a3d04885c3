use crate::error::ExportError;
use crate::pdf;
use folio_traits::ContentRootProvider;
use folio_types::PageSize;
use std::fmt;
use std::sync::{Arc, Mutex};

/// The lifecycle of the current (or most recent) export job.
///
/// A tagged state rather than a bare boolean so the trigger surface can
/// distinguish "never ran" from "last run failed". Only `Running` blocks a
/// new job; both terminal states permit a fresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Idle,
    Running,
    Completed { pages: usize },
    Failed,
}

impl JobState {
    pub fn is_running(self) -> bool {
        matches!(self, JobState::Running)
    }
}

/// Settings for one exporter instance.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// The subject's display name, used for the document title and the
    /// deterministic file name.
    pub subject_name: String,
    pub page_size: PageSize,
    /// Resolution multiplier passed to rasterization.
    pub oversample: f32,
}

impl ExportOptions {
    pub fn new(subject_name: impl Into<String>) -> Self {
        Self {
            subject_name: subject_name.into(),
            page_size: PageSize::default(),
            oversample: 2.0,
        }
    }
}

/// The finished export artifact, ready for the host's download mechanism.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl ExportedDocument {
    pub fn mime_type(&self) -> &'static str {
        "application/pdf"
    }
}

/// Deterministic artifact name: whitespace runs in the subject name become
/// single underscores, e.g. "Subject Name" -> "Subject_Name_Resume.pdf".
pub fn resume_file_name(subject_name: &str) -> String {
    let joined = subject_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{joined}_Resume.pdf")
}

/// Exports the currently mounted resume view as a paginated PDF.
///
/// At most one job runs at a time per exporter: the guard is set
/// synchronously before any fallible work and restored to a terminal state
/// on every exit path, so a re-entrant call observes `Busy` and a later
/// retry after failure is not blocked.
pub struct DocumentExporter {
    provider: Arc<dyn ContentRootProvider>,
    options: ExportOptions,
    state: Mutex<JobState>,
}

impl fmt::Debug for DocumentExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentExporter")
            .field("provider", &self.provider.name())
            .field("state", &self.state())
            .finish()
    }
}

impl DocumentExporter {
    pub fn new(provider: Arc<dyn ContentRootProvider>, options: ExportOptions) -> Self {
        Self {
            provider,
            options,
            state: Mutex::new(JobState::Idle),
        }
    }

    /// The current job state. Poisoning counts as `Failed`.
    pub fn state(&self) -> JobState {
        self.state
            .lock()
            .map(|guard| *guard)
            .unwrap_or(JobState::Failed)
    }

    pub fn is_busy(&self) -> bool {
        self.state().is_running()
    }

    /// Run one export job.
    ///
    /// # Errors
    ///
    /// * `Busy` - another job is in flight; the call is rejected, not queued.
    /// * `ContentUnavailable` - no attached resume view to capture.
    /// * `Rasterization` - the view could not be drawn into a bitmap.
    /// * `DocumentAssembly` - pagination or PDF encoding failed.
    pub fn export(&self) -> Result<ExportedDocument, ExportError> {
        self.begin()?;
        let result = self.run();
        match &result {
            Ok(doc) => {
                log::info!(
                    "export finished: {} ({} pages, {} bytes)",
                    doc.file_name,
                    doc.page_count,
                    doc.bytes.len()
                );
                self.settle(JobState::Completed {
                    pages: doc.page_count,
                });
            }
            Err(err) => {
                log::error!("export failed: {err}");
                self.settle(JobState::Failed);
            }
        }
        result
    }

    /// Claim the busy guard, rejecting re-entrant calls.
    fn begin(&self) -> Result<(), ExportError> {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if state.is_running() {
            return Err(ExportError::Busy);
        }
        *state = JobState::Running;
        Ok(())
    }

    fn settle(&self, terminal: JobState) {
        debug_assert!(!terminal.is_running());
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *state = terminal;
    }

    fn run(&self) -> Result<ExportedDocument, ExportError> {
        let root = self
            .provider
            .current_root()
            .ok_or(ExportError::ContentUnavailable)?;
        if !root.is_attached() {
            return Err(ExportError::ContentUnavailable);
        }

        log::debug!(
            "exporting '{}' root at {}x oversampling",
            root.section(),
            self.options.oversample
        );
        let snapshot = root.rasterize(self.options.oversample)?;

        let (bytes, page_count) =
            pdf::assemble(&snapshot, self.options.page_size, &self.options.subject_name)?;

        Ok(ExportedDocument {
            file_name: resume_file_name(&self.options.subject_name),
            bytes,
            page_count,
        })
    }
}
