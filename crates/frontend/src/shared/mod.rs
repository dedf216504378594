pub mod api_utils;
pub mod config;
pub mod dom;
pub mod error;
pub mod flash;
pub mod http;
pub mod icons;
