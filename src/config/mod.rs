//! Configuration model for jrun.
//!
//! This module defines the Config struct persisted as `~/.jrun/config.json`
//! and the layered loading rules: an explicit `--config` path wins over the
//! persisted store, which wins over `JAVA_HOME`/`MAVEN_HOME` environment
//! defaults. Command-line overrides are applied afterwards as a pure merge
//! on top of the immutable base record.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
pub use operations::{default_config_path, load_config};
