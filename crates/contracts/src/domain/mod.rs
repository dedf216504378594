pub mod a001_source_file;
pub mod a002_chat_query;
pub mod a003_session;
pub mod common;
