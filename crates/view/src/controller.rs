use crate::markup::section_markup;
use crate::root::SvgContentRoot;
use folio_raster::SvgRasterizer;
use folio_traits::{ContentRoot, ContentRootProvider};
use folio_types::{Profile, Section};
use std::fmt;
use std::sync::{Arc, RwLock};

/// Navigation state as an explicit value with a pure selection function,
/// rather than ambient mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
}

impl NavState {
    /// Select a section. The set is closed, so every request is valid and
    /// the result is simply the requested section becoming active.
    pub fn navigate(self, target: Section) -> NavState {
        NavState { active: target }
    }
}

struct Mounted {
    nav: NavState,
    root: Option<Arc<SvgContentRoot>>,
}

/// Owns the single piece of navigation state and the currently mounted view.
///
/// Exactly one section's view is mounted at any time. Selecting a section
/// detaches the previous root (invalidating outstanding handles) and mounts
/// a fresh one built from the profile. The controller is the exporter's
/// `ContentRootProvider`: it exposes the mounted root only while the resume
/// section is active, so exports from any other section see no content.
pub struct ViewController {
    profile: Arc<Profile>,
    backend: SvgRasterizer,
    inner: RwLock<Mounted>,
}

impl fmt::Debug for ViewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewController")
            .field("active", &self.current())
            .finish()
    }
}

impl ViewController {
    /// Create a controller with `Home` active, mirroring process start.
    pub fn new(profile: Arc<Profile>, backend: SvgRasterizer) -> Self {
        let controller = Self {
            profile,
            backend,
            inner: RwLock::new(Mounted {
                nav: NavState::default(),
                root: None,
            }),
        };
        controller.select(Section::default());
        controller
    }

    /// Make `target` the active section, remounting the view.
    pub fn select(&self, target: Section) {
        let svg = section_markup(&self.profile, target);
        let root = SvgContentRoot::new(target, svg, self.backend.clone());

        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        if let Some(old) = inner.root.take() {
            old.detach();
        }
        inner.nav = inner.nav.navigate(target);
        inner.root = Some(root);
        log::debug!("view controller mounted section '{target}'");
    }

    /// The currently active section identifier.
    pub fn current(&self) -> Section {
        self.inner
            .read()
            .map(|inner| inner.nav.active)
            .unwrap_or_default()
    }

    /// The currently mounted view root, whatever section it renders.
    pub fn mounted_root(&self) -> Option<Arc<SvgContentRoot>> {
        self.inner.read().ok()?.root.clone()
    }
}

impl ContentRootProvider for ViewController {
    /// The exportable root. Only the resume view is exportable; any other
    /// active section yields `None` and the exporter reports no content.
    fn current_root(&self) -> Option<Arc<dyn ContentRoot>> {
        let inner = self.inner.read().ok()?;
        if inner.nav.active != Section::Resume {
            return None;
        }
        inner
            .root
            .clone()
            .map(|root| root as Arc<dyn ContentRoot>)
    }

    fn name(&self) -> &'static str {
        "ViewController"
    }
}
