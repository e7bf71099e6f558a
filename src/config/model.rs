//! Config struct definition and accessors.

use serde::{Deserialize, Serialize};

/// Configuration for jrun.
///
/// This struct represents the contents of `~/.jrun/config.json`.
/// Unknown fields in the JSON are ignored for forward compatibility, and
/// every field has a default so partial files load cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JDK installation directory; `{java_home}/bin/java` must exist to run.
    pub java_home: String,

    /// Maven installation directory; `{maven_home}/bin/mvn` must exist.
    pub maven_home: String,

    /// Optional path to a Maven settings.xml, passed via `-s` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven_settings: Option<String>,

    /// JVM arguments used when `--jvm-args` is not given.
    pub default_jvm_args: Vec<String>,

    /// Maven arguments used when `--maven-args` is not given.
    pub default_maven_args: Vec<String>,
}

impl Config {
    /// The configured settings path, treating an empty string as unset.
    pub fn maven_settings(&self) -> Option<&str> {
        self.maven_settings.as_deref().filter(|s| !s.is_empty())
    }
}
