//! Process environment (standard streams and terminal detection)

mod environment;

pub use environment::Environment;
