//! Transient notification banners
//!
//! Structure:
//! - queue.rs: pure banner queue (push / hide / remove)
//! - service.rs: FlashService context with timer-driven auto-hide
//! - view.rs: FlashHost component and adoption of server-rendered banners

mod queue;
mod service;
mod view;

pub use queue::{Flash, FlashKind, FlashQueue};
pub use service::{use_flash, FlashService};
pub use view::{adopt_server_flashes, FlashHost};
