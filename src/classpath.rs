//! Maven classpath retrieval for jrun.
//!
//! Runs `mvn dependency:build-classpath -DincludeScope=runtime` in the
//! project root and scrapes the classpath out of Maven's human-oriented
//! output. The scraping lives behind `parse_classpath_output` (raw text in,
//! classpath out) so the strategies can change without touching callers.
//!
//! Every failure mode here degrades instead of failing the invocation: a
//! missing mvn binary, a non-zero Maven exit, or unparsable output all yield
//! an empty classpath and a warning, and the caller proceeds with whatever
//! remains (typically just `target/classes`).

use crate::project;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Platform path-list separator used inside classpath strings.
pub const CLASSPATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Line printed by the maven-dependency-plugin directly before the classpath.
const CLASSPATH_MARKER: &str = "[INFO] Dependencies classpath:";

/// Path to the mvn executable under a Maven home directory.
pub fn maven_executable(maven_home: &Path) -> PathBuf {
    let binary = if cfg!(windows) { "mvn.cmd" } else { "mvn" };
    maven_home.join("bin").join(binary)
}

/// Query Maven for the runtime-scope dependency classpath.
///
/// Returns an empty string on any failure (launch fault, non-zero exit,
/// unparsable output) after printing a warning to stderr. Maven's output is
/// parsed even when it exits non-zero, since partial output may still carry
/// the classpath line.
pub fn dependency_classpath(
    maven_home: &Path,
    maven_settings: Option<&str>,
    project_root: &Path,
) -> String {
    let mvn = maven_executable(maven_home);

    let mut command = Command::new(&mvn);
    command
        .args(["dependency:build-classpath", "-DincludeScope=runtime"])
        .current_dir(project_root);
    if let Some(settings) = maven_settings {
        command.args(["-s", settings]);
    }

    match command.output() {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            match parse_classpath_output(&stdout) {
                Some(classpath) => classpath,
                None => {
                    eprintln!(
                        "Warning: no classpath found in mvn output, continuing without dependencies"
                    );
                    String::new()
                }
            }
        }
        Err(e) => {
            eprintln!("Warning: failed to run '{}': {}", mvn.display(), e);
            String::new()
        }
    }
}

/// Extract the classpath line from raw Maven output.
///
/// Two strategies, tried in order:
/// 1. The trimmed line immediately following the `Dependencies classpath:`
///    announcement.
/// 2. The first line that is not a bracketed `[INFO]`/`[WARNING]` diagnostic
///    and contains the path-list separator.
pub fn parse_classpath_output(output: &str) -> Option<String> {
    let lines: Vec<&str> = output.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if line.contains(CLASSPATH_MARKER) && i + 1 < lines.len() {
            return Some(lines[i + 1].trim().to_string());
        }
    }

    lines
        .iter()
        .find(|line| {
            !line.is_empty() && !line.starts_with('[') && line.contains(CLASSPATH_SEPARATOR)
        })
        .map(|line| line.trim().to_string())
}

/// Prepend the project's compiled-output directory to a classpath.
///
/// `target/classes` always comes first (followed by the separator) when it
/// exists on disk, regardless of what Maven returned.
pub fn with_local_classes(project_root: &Path, classpath: &str) -> String {
    let classes = project::compiled_classes_dir(project_root);
    if classes.exists() {
        format!("{}{}{}", classes.display(), CLASSPATH_SEPARATOR, classpath)
    } else {
        classpath.to_string()
    }
}
