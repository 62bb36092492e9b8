//! External module initialization (`go mod init`)

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::config::InitSettings;
use crate::error::GenerateError;

/// Establishes build metadata for a freshly written project
pub trait ModuleInitializer {
    /// Initialize `module_name` with `project_root` as working directory
    ///
    /// Returns the tool's captured output on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be run or reports failure.
    fn init_module(&self, project_root: &Path, module_name: &str) -> Result<String, GenerateError>;
}

/// Pick the initializer described by the `[init]` configuration section
///
/// A disabled section yields [`SkipInitializer`].
#[must_use]
pub fn initializer_for(settings: &InitSettings) -> Box<dyn ModuleInitializer> {
    if settings.enabled {
        Box::new(CommandInitializer::from_settings(settings))
    } else {
        Box::new(SkipInitializer)
    }
}

/// Leaves the project without module metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipInitializer;

impl ModuleInitializer for SkipInitializer {
    fn init_module(
        &self,
        project_root: &Path,
        module_name: &str,
    ) -> Result<String, GenerateError> {
        info!(module = module_name, root = %project_root.display(), "module init disabled");
        Ok(String::new())
    }
}

/// Runs an external program and waits for it to exit
///
/// The module name is appended after the configured arguments. There is no
/// timeout; a hung program hangs the run.
///
/// Output is captured as all of stdout followed by all of stderr. The two
/// streams are not interleaved in the order the program wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInitializer {
    program: String,
    args: Vec<String>,
}

impl CommandInitializer {
    /// Create an initializer for `program` with leading `args`
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `go mod init`
    #[must_use]
    pub fn go() -> Self {
        Self::new("go", ["mod", "init"])
    }

    /// Build from the `[init]` configuration section
    #[must_use]
    pub fn from_settings(settings: &InitSettings) -> Self {
        Self::new(settings.program.clone(), settings.args.iter().cloned())
    }

    /// Command line as shown in messages
    #[must_use]
    pub fn command_line(&self, module_name: &str) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain(std::iter::once(module_name))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for CommandInitializer {
    fn default() -> Self {
        Self::go()
    }
}

impl ModuleInitializer for CommandInitializer {
    fn init_module(
        &self,
        project_root: &Path,
        module_name: &str,
    ) -> Result<String, GenerateError> {
        let command = self.command_line(module_name);
        debug!(%command, cwd = %project_root.display(), "running module init");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(module_name)
            .current_dir(project_root)
            .output()
            .map_err(|source| GenerateError::CommandUnavailable {
                program: self.program.clone(),
                source,
            })?;

        let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
        captured.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(GenerateError::ExternalCommandFailed {
                command,
                output: captured,
            });
        }

        info!(%command, "module initialized");
        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_go_command_line() {
        assert_eq!(CommandInitializer::go().command_line("demo"), "go mod init demo");
    }

    #[test]
    fn test_from_settings() {
        let settings = InitSettings {
            program: "tinygo".to_string(),
            args: vec!["mod".to_string(), "init".to_string()],
            enabled: true,
        };
        assert_eq!(
            CommandInitializer::from_settings(&settings).command_line("demo"),
            "tinygo mod init demo"
        );
    }

    #[test]
    fn test_missing_program() {
        let temp = TempDir::new().unwrap();
        let init = CommandInitializer::new("fiber-gen-no-such-program", Vec::<String>::new());

        let err = init.init_module(temp.path(), "demo").unwrap_err();
        assert!(matches!(err, GenerateError::CommandUnavailable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_success_captures_output() {
        let temp = TempDir::new().unwrap();
        let init = CommandInitializer::new("sh", ["-c", "echo \"init $1\"; echo note >&2", "sh"]);

        let output = init.init_module(temp.path(), "demo").unwrap();
        assert_eq!(output, "init demo\nnote\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_project_root() {
        let temp = TempDir::new().unwrap();
        let init = CommandInitializer::new("sh", ["-c", "touch \"$1.marker\"", "sh"]);

        init.init_module(temp.path(), "demo").unwrap();
        assert!(temp.path().join("demo.marker").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_carries_output() {
        let temp = TempDir::new().unwrap();
        let init =
            CommandInitializer::new("sh", ["-c", "echo \"bad module $1\" >&2; exit 3", "sh"]);

        let err = init.init_module(temp.path(), "demo").unwrap_err();
        match err {
            GenerateError::ExternalCommandFailed { command, output } => {
                assert!(command.ends_with(" demo"));
                assert_eq!(output, "bad module demo\n");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skip_initializer_runs_nothing() {
        let temp = TempDir::new().unwrap();
        let output = SkipInitializer.init_module(temp.path(), "demo").unwrap();

        assert!(output.is_empty());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_disabled_settings_skip_command() {
        let temp = TempDir::new().unwrap();
        let settings = InitSettings {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "touch ran.marker".to_string(), "sh".to_string()],
            enabled: false,
        };

        initializer_for(&settings).init_module(temp.path(), "demo").unwrap();
        assert!(!temp.path().join("ran.marker").exists());

        let enabled = InitSettings { enabled: true, ..settings };
        initializer_for(&enabled).init_module(temp.path(), "demo").unwrap();
        assert!(temp.path().join("ran.marker").exists());
    }
}
