//! Wire contracts shared by the document chat client.
//!
//! Every endpoint the client consumes has its request/response DTOs here,
//! next to the path constant it is posted to.

pub mod domain;
pub mod enums;
