//! Exit code constants for the jrun CLI.
//!
//! Jrun only distinguishes two outcomes of its own:
//! - 0: Success
//! - 1: Internal failure (bad config, no project root, launch fault)
//!
//! When a child process (java or mvn) runs, its exit code is propagated
//! verbatim as jrun's exit code and these constants do not apply.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Internal failure: bad arguments, unusable config, no project root found,
/// or the child process could not be launched.
pub const FAILURE: i32 = 1;
