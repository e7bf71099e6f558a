//! The `run` command: execute a Java main class with the Maven classpath.

use crate::classpath;
use crate::cli::RunArgs;
use crate::config;
use crate::error::Result;
use crate::invocation;
use crate::project;
use crate::resolver;
use std::path::Path;

/// Resolve the class, locate the project root, retrieve the classpath, and
/// run `java`. Returns the child's exit code unchanged.
pub fn cmd_run(args: RunArgs) -> Result<i32> {
    let config = config::load_config(args.config.as_deref())?
        .with_overrides(args.java_home.as_deref(), args.maven_settings.as_deref());
    config.ensure_java_home()?;
    config.ensure_maven_home()?;

    let identifier = resolver::resolve(&args.class);

    let start = super::starting_dir(args.project_dir)?;
    let project_root = project::find_project_root(&start)?;

    let dependency_classpath = classpath::dependency_classpath(
        Path::new(&config.maven_home),
        config.maven_settings(),
        &project_root,
    );
    let classpath = classpath::with_local_classes(&project_root, &dependency_classpath);

    let invocation = invocation::build_run(
        &config,
        &identifier,
        &classpath,
        &project_root,
        args.jvm_args.as_deref(),
        args.args.as_deref(),
    )?;

    println!("Running: {}", identifier.class_name);
    println!("Command: {}", invocation.command_line());
    println!("{}", "-".repeat(80));

    invocation.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JrunError;
    use crate::test_support::{create_test_project, write_config};
    use tempfile::TempDir;

    fn run_args(class: &str, config: &Path, project_dir: &Path) -> RunArgs {
        RunArgs {
            class: class.to_string(),
            config: Some(config.to_path_buf()),
            java_home: None,
            maven_settings: None,
            args: None,
            jvm_args: None,
            project_dir: Some(project_dir.to_path_buf()),
        }
    }

    #[test]
    fn fails_cleanly_without_project_root() {
        let temp_dir = TempDir::new().unwrap(); // no pom.xml
        let config_path = write_config(
            temp_dir.path(),
            r#"{"java_home": "/opt/jdk", "maven_home": "/opt/maven"}"#,
        );

        let result = cmd_run(run_args("com.example.Main", &config_path, temp_dir.path()));
        assert!(matches!(result, Err(JrunError::ProjectRootError(_))));
    }

    #[test]
    fn fails_cleanly_without_java_home() {
        let temp_dir = create_test_project();
        let config_path = write_config(temp_dir.path(), r#"{"maven_home": "/opt/maven"}"#);

        let result = cmd_run(run_args("com.example.Main", &config_path, temp_dir.path()));
        assert!(matches!(result, Err(JrunError::ConfigError(_))));
    }

    #[test]
    fn java_home_override_beats_config() {
        let temp_dir = create_test_project();
        // Config has no java_home at all; the override alone must satisfy it.
        let config_path = write_config(temp_dir.path(), r#"{"maven_home": "/opt/maven"}"#);

        let mut args = run_args("com.example.Main", &config_path, temp_dir.path());
        args.java_home = Some("/no/such/jdk".to_string());

        // Passes config validation, then fails at launch since the JDK and
        // Maven paths are fake. Classpath retrieval degrades along the way.
        let result = cmd_run(args);
        assert!(matches!(result, Err(JrunError::LaunchError(_))));
    }

    #[cfg(unix)]
    #[test]
    fn runs_fake_java_and_propagates_exit_code() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = create_test_project();

        // Fake JDK whose java exits 7 so propagation is observable.
        let java_home = temp_dir.path().join("jdk");
        let bin = java_home.join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let java = bin.join("java");
        std::fs::write(&java, "#!/bin/sh\nexit 7\n").unwrap();
        std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755)).unwrap();

        let config_json = format!(
            r#"{{"java_home": "{}", "maven_home": "{}"}}"#,
            java_home.display(),
            temp_dir.path().join("no-maven").display()
        );
        let config_path = write_config(temp_dir.path(), &config_json);

        let code = cmd_run(run_args("com.example.Main", &config_path, temp_dir.path())).unwrap();
        assert_eq!(code, 7);
    }
}
