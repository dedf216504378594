//! Preview modal UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: content-type probe and redirect resolution
//! - view_model.rs: PreviewVm with RwSignals and the open flows
//! - view.rs: PreviewModal component

mod model;
mod view;
mod view_model;

pub use view::PreviewModal;
pub use view_model::{use_preview, PreviewVm};
