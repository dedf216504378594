//! Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: query API call
//! - view_model.rs: ChatVm with RwSignals and the send flow
//! - view.rs: ChatPanel component
//! - message.rs: MessageBubble and its file action bar

mod message;
mod model;
mod view;
mod view_model;

pub use view::ChatPanel;
pub use view_model::{use_chat, ChatVm};
