//! Command implementations for jrun.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Command handlers return the process exit code to emit;
//! for `run` and `test` that is the child process's own exit code.

mod config_cmd;
mod run;

use crate::cli::{Command, ConfigAction, ConfigCommand};
use crate::error::{JrunError, Result};
use std::env;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Test(args) => test::cmd_test(args),
        Command::Config(config_cmd) => dispatch_config(config_cmd),
    }
}

/// Dispatch config subcommands.
fn dispatch_config(config_cmd: ConfigCommand) -> Result<i32> {
    match config_cmd.action {
        ConfigAction::Show(args) => config_cmd::cmd_show(args),
    }
}

/// The directory the project-root walk starts from: an explicit
/// `--project-dir` when given, otherwise the current working directory.
///
/// A relative `--project-dir` is anchored at the current working directory,
/// so the upward walk can continue past the relative prefix into real
/// filesystem ancestors.
fn starting_dir(project_dir: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| {
        JrunError::UserError(format!("failed to get current working directory: {}", e))
    })?;

    Ok(match project_dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_project;

    #[test]
    fn starting_dir_prefers_explicit_project_dir() {
        let dir = starting_dir(Some(PathBuf::from("/work/app"))).unwrap();
        assert_eq!(dir, PathBuf::from("/work/app"));
    }

    #[test]
    fn starting_dir_defaults_to_cwd() {
        let dir = starting_dir(None).unwrap();
        assert!(dir.is_absolute());
    }

    #[test]
    fn starting_dir_anchors_relative_project_dir_at_cwd() {
        let temp_dir = create_test_project();
        let _guard = crate::test_support::DirGuard::new(temp_dir.path());

        let dir = starting_dir(Some(PathBuf::from("src/main"))).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("src/main"));
    }

    #[test]
    fn relative_project_dir_still_finds_ancestor_root() {
        let temp_dir = create_test_project();
        let _guard = crate::test_support::DirGuard::new(temp_dir.path());

        // The marker sits two levels above the relative start directory.
        let start = starting_dir(Some(PathBuf::from("src/main"))).unwrap();
        let root = crate::project::find_project_root(&start).unwrap();
        assert_eq!(
            root.canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn dispatch_routes_config_show() {
        let temp_dir = create_test_project();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"java_home": "/opt/jdk"}"#).unwrap();

        let cli = <crate::cli::Cli as clap::Parser>::try_parse_from([
            "jrun",
            "config",
            "show",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .unwrap();

        let code = dispatch(cli.command).unwrap();
        assert_eq!(code, crate::exit_codes::SUCCESS);
    }
}
