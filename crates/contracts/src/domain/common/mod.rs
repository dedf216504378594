//! Common types and traits for all endpoint contracts

pub mod server_reply;

pub use server_reply::ServerReply;
