mod config;

pub use config::{ConfigCreationError, NamespaceConfig};
