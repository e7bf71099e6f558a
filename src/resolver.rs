//! Identifier resolution for jrun.
//!
//! Converts a user-supplied `.java` file path or dotted class name into the
//! canonical identifier the JVM and Maven expect, preserving an optional
//! `#method` suffix for single-test selection. Resolution is pure and total:
//! malformed paths still resolve via the fallback rule, never an error.

use std::fmt;

/// Java source file extension recognized on inputs.
const SOURCE_EXTENSION: &str = ".java";

/// Path segment that marks the conventional source root.
const SOURCE_ROOT_SEGMENT: &str = "src";

/// A resolved class identifier with an optional member (test method) suffix.
///
/// Immutable once produced. `class_name` is the dotted form
/// (e.g. `com.example.Main`); `method` is the part after `#`, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalIdentifier {
    pub class_name: String,
    pub method: Option<String>,
}

impl CanonicalIdentifier {
    /// The selector string used for Maven's `-Dtest=` filter:
    /// `class#method` when a method is present, otherwise just the class.
    pub fn selector(&self) -> String {
        match &self.method {
            Some(method) => format!("{}#{}", self.class_name, method),
            None => self.class_name.clone(),
        }
    }
}

impl fmt::Display for CanonicalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// Resolve an input string into a canonical identifier.
///
/// The input is either a dotted class name (returned verbatim) or a path to
/// a `.java` file, each optionally suffixed with `#method`.
///
/// Path resolution follows the standard Maven source layout: segments after
/// `src/main/java` or `src/test/java` form the class name. A `src` segment
/// without that convention keeps everything after `src`. With no `src`
/// segment at all, the extension is stripped and separators become dots.
pub fn resolve(input: &str) -> CanonicalIdentifier {
    let (class_part, method) = match input.split_once('#') {
        Some((class_part, method)) => (class_part, Some(method.to_string())),
        None => (input, None),
    };

    CanonicalIdentifier {
        class_name: class_name_from(class_part),
        method,
    }
}

fn class_name_from(input: &str) -> String {
    if !input.ends_with(SOURCE_EXTENSION) {
        // Already a dotted name; idempotent.
        return input.to_string();
    }

    // Split on both separators so Windows-style inputs resolve anywhere.
    let segments: Vec<&str> = input.split(['/', '\\']).collect();

    // Only an exact segment match counts; "mysrc" must not anchor the search.
    if let Some(src_idx) = segments.iter().position(|s| *s == SOURCE_ROOT_SEGMENT) {
        let conventional = src_idx + 2 < segments.len()
            && matches!(segments[src_idx + 1], "main" | "test")
            && segments[src_idx + 2] == "java";
        let start = if conventional { src_idx + 3 } else { src_idx + 1 };
        return join_class_segments(&segments[start..]);
    }

    // No source root marker: strip the extension and dot-join every segment.
    let stripped = input.strip_suffix(SOURCE_EXTENSION).unwrap_or(input);
    stripped.replace(['/', '\\'], ".")
}

/// Join path segments with `.`, stripping the source extension from the last.
fn join_class_segments(segments: &[&str]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i + 1 == segments.len() {
                segment.strip_suffix(SOURCE_EXTENSION).unwrap_or(segment)
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}
