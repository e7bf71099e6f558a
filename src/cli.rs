//! CLI argument parsing for jrun.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Jrun: run Java classes and Maven tests from anywhere inside a Maven project.
///
/// Accepts fully-qualified class names or source file paths, finds the
/// enclosing project root by walking up to the nearest pom.xml, and builds
/// the java/mvn command line with the project's resolved classpath.
#[derive(Parser, Debug)]
#[command(name = "jrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for jrun.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a Java main class with the project's Maven classpath.
    ///
    /// Accepts a fully-qualified class name (com.example.Main) or a source
    /// file path (src/main/java/com/example/Main.java).
    Run(RunArgs),

    /// Run a test class or a single test method through Maven.
    ///
    /// Accepts a class name or source file path, optionally suffixed with
    /// #method to select one test method (com.example.MyTest#testFoo).
    Test(TestArgs),

    /// Configuration inspection commands.
    Config(ConfigCommand),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Fully-qualified class name or source file path.
    pub class: String,

    /// Path to an alternate config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Java home directory (overrides the configured value).
    #[arg(long)]
    pub java_home: Option<String>,

    /// Maven settings.xml path (overrides the configured value).
    #[arg(long)]
    pub maven_settings: Option<String>,

    /// Program arguments passed to the main class.
    #[arg(long, allow_hyphen_values = true)]
    pub args: Option<String>,

    /// JVM arguments (overrides configured defaults).
    #[arg(long, allow_hyphen_values = true)]
    pub jvm_args: Option<String>,

    /// Project directory (default: walk up from the current directory).
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}

/// Arguments for the `test` command.
#[derive(Parser, Debug)]
pub struct TestArgs {
    /// Test class or method, as a name or source file path
    /// (e.g. com.example.MyTest or com.example.MyTest#testFoo).
    pub test: String,

    /// Path to an alternate config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Java home directory (overrides the configured value).
    #[arg(long)]
    pub java_home: Option<String>,

    /// Maven settings.xml path (overrides the configured value).
    #[arg(long)]
    pub maven_settings: Option<String>,

    /// Additional Maven arguments (overrides configured defaults).
    #[arg(long, allow_hyphen_values = true)]
    pub maven_args: Option<String>,

    /// Project directory (default: walk up from the current directory).
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}

/// Config subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Available config actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as JSON.
    Show(ConfigShowArgs),
}

/// Arguments for the `config show` command.
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Path to an alternate config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
