pub mod a001_source_file;
pub mod a002_chat;
pub mod a003_preview;
pub mod a004_session;
