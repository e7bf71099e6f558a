//! Invocation building and execution for jrun.
//!
//! Assembles the final argument vector for run and test mode and executes it
//! synchronously as a child process. Argument ordering is deterministic and
//! the override precedence is shared by both modes: an explicit per-call
//! argument wins over a configuration default, which wins over nothing.

use crate::classpath;
use crate::config::Config;
use crate::error::{JrunError, Result};
use crate::exit_codes;
use crate::resolver::CanonicalIdentifier;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A fully assembled child-process invocation.
///
/// Built fresh per call, executed once, never reused.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Executable to launch.
    pub program: PathBuf,
    /// Arguments in their final order.
    pub args: Vec<String>,
    /// Working directory: always the project root.
    pub working_dir: PathBuf,
    /// Extra environment variables for the child.
    pub env: Vec<(String, String)>,
}

impl Invocation {
    /// The full command line as a display string, for audit output.
    pub fn command_line(&self) -> String {
        let mut pieces = vec![self.program.display().to_string()];
        pieces.extend(self.args.iter().cloned());
        pieces.join(" ")
    }

    /// Execute synchronously and return the child's exit code unchanged.
    ///
    /// A launch fault (executable missing, permission denied) is an error;
    /// a non-zero child exit is not.
    pub fn execute(&self) -> Result<i32> {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(&self.working_dir);
        for (key, value) in &self.env {
            command.env(key, value);
        }

        let status = command.status().map_err(|e| {
            JrunError::LaunchError(format!(
                "failed to execute '{}': {}\n\
                 Fix: check that the configured home directory is correct.",
                self.program.display(),
                e
            ))
        })?;

        // A signal-terminated child has no exit code; report a plain failure.
        Ok(status.code().unwrap_or(exit_codes::FAILURE))
    }
}

/// Path to the java executable under a JDK home directory.
pub fn java_executable(java_home: &Path) -> PathBuf {
    let binary = if cfg!(windows) { "java.exe" } else { "java" };
    java_home.join("bin").join(binary)
}

/// Build the run-mode invocation:
/// `java [jvm args] -cp <classpath> <class> [program args]`.
pub fn build_run(
    config: &Config,
    identifier: &CanonicalIdentifier,
    classpath: &str,
    project_root: &Path,
    jvm_args: Option<&str>,
    program_args: Option<&str>,
) -> Result<Invocation> {
    let mut args = Vec::new();

    match jvm_args {
        Some(raw) => args.extend(split_args(raw, "JVM arguments")?),
        None => args.extend(config.default_jvm_args.iter().cloned()),
    }

    args.push("-cp".to_string());
    args.push(classpath.to_string());
    args.push(identifier.class_name.clone());

    if let Some(raw) = program_args {
        args.extend(split_args(raw, "program arguments")?);
    }

    Ok(Invocation {
        program: java_executable(Path::new(&config.java_home)),
        args,
        working_dir: project_root.to_path_buf(),
        env: Vec::new(),
    })
}

/// Build the test-mode invocation:
/// `mvn test [-s <settings>] -Dtest=<selector> [maven args]`.
///
/// `JAVA_HOME` is exported to the child when configured, so Maven compiles
/// and runs tests with the same JDK the run mode would use.
pub fn build_test(
    config: &Config,
    identifier: &CanonicalIdentifier,
    project_root: &Path,
    maven_args: Option<&str>,
) -> Result<Invocation> {
    let mut args = vec!["test".to_string()];

    if let Some(settings) = config.maven_settings() {
        args.push("-s".to_string());
        args.push(settings.to_string());
    }

    args.push(format!("-Dtest={}", identifier.selector()));

    match maven_args {
        Some(raw) => args.extend(split_args(raw, "Maven arguments")?),
        None => args.extend(config.default_maven_args.iter().cloned()),
    }

    let mut env = Vec::new();
    if !config.java_home.is_empty() {
        env.push(("JAVA_HOME".to_string(), config.java_home.clone()));
    }

    Ok(Invocation {
        program: classpath::maven_executable(Path::new(&config.maven_home)),
        args,
        working_dir: project_root.to_path_buf(),
        env,
    })
}

/// Split a user-supplied argument string into argv entries.
fn split_args(raw: &str, what: &str) -> Result<Vec<String>> {
    shell_words::split(raw).map_err(|e| {
        JrunError::UserError(format!(
            "failed to parse {} '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            what, raw, e
        ))
    })
}
