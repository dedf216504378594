pub mod file_kind;

pub use file_kind::FileKind;
