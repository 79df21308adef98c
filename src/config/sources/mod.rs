//! Configuration sources, each adding itself to a builder.

pub mod environment;
pub mod global_file;
pub mod workspace_file;
