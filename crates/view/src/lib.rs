//! Section views and navigation state.
//!
//! This crate is the site's view layer:
//! - `markup`: renders profile content into per-section SVG views
//! - `SvgContentRoot`: a mounted view subtree that can be rasterized
//! - `ViewController`: owns the active-section state, mounts exactly one
//!   section at a time, and serves as the exporter's content-root provider

mod controller;
mod root;
pub mod markup;

pub use controller::{NavState, ViewController};
pub use root::SvgContentRoot;
