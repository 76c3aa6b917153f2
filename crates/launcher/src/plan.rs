use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use log::debug;
use snafu::OptionExt;

use crate::{
    config::LauncherConfig,
    error::{LaunchError, MissingScriptSnafu, NoParentDirectorySnafu},
};

/// A fully resolved request to start the companion script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessLaunchSpec {
    pub interpreter: String,
    pub flags: Vec<String>,
    pub script_flag: String,
    pub script_path: PathBuf,
    pub working_dir: PathBuf,
    pub hide_window: bool,
}

impl ProcessLaunchSpec {
    /// Arguments in order, one element per argument, unquoted.
    pub fn args(&self) -> Vec<OsString> {
        self.flags
            .iter()
            .map(OsString::from)
            .chain([
                OsString::from(&self.script_flag),
                self.script_path.clone().into_os_string(),
            ])
            .collect()
    }

    /// The whole argument string as the interpreter receives it on Windows.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.flags.len() + 2);
        for flag in self.flags.iter().chain([&self.script_flag]) {
            if needs_quotes(flag) {
                parts.push(quote_argument(flag));
            } else {
                parts.push(flag.clone());
            }
        }
        // The script path is always quoted, spaces or not.
        parts.push(quote_argument(&self.script_path.to_string_lossy()));
        parts.join(" ")
    }
}

fn needs_quotes(arg: &str) -> bool {
    arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || c == '"')
}

/// Wrap `arg` in double quotes following the Windows command-line parsing rules: a quote inside the argument is
/// escaped with a backslash, and any run of backslashes that ends up in front of a quote is doubled.
pub fn quote_argument(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');

    let mut backslashes = 0usize;
    for c in arg.chars() {
        if c == '\\' {
            backslashes += 1;
            continue;
        }

        let escaped_backslashes = if c == '"' {
            backslashes * 2 + 1
        } else {
            backslashes
        };
        quoted.extend(std::iter::repeat_n('\\', escaped_backslashes));
        quoted.push(c);
        backslashes = 0;
    }

    quoted.extend(std::iter::repeat_n('\\', backslashes * 2));
    quoted.push('"');
    quoted
}

/// Work out what would be started for the executable at `executable_path`. Does not touch the filesystem.
pub fn plan_launch(
    executable_path: &Path,
    config: &LauncherConfig,
) -> Result<ProcessLaunchSpec, LaunchError> {
    let working_dir = executable_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .context(NoParentDirectorySnafu {
            path: executable_path,
        })?;

    Ok(ProcessLaunchSpec {
        interpreter: config.interpreter.clone(),
        flags: config.flags.clone(),
        script_flag: config.script_flag.clone(),
        script_path: working_dir.join(&config.script_name),
        working_dir: working_dir.to_path_buf(),
        hide_window: config.hide_window,
    })
}

/// [`plan_launch`], plus a check that the companion script is actually there.
pub fn resolve_launch_plan(
    executable_path: &Path,
    config: &LauncherConfig,
) -> Result<ProcessLaunchSpec, LaunchError> {
    let spec = plan_launch(executable_path, config)?;
    debug!("Looking for companion script at {}", spec.script_path.display());

    if !spec.script_path.is_file() {
        return MissingScriptSnafu {
            path: spec.script_path,
        }
        .fail();
    }

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exe_in(dir: &str) -> PathBuf {
        Path::new(dir).join("ai-hub-launcher.exe")
    }

    #[test]
    fn quotes_plain_path() {
        assert_eq!(
            quote_argument(r"C:\AI Hub\Main.ps1"),
            r#""C:\AI Hub\Main.ps1""#
        );
    }

    #[test]
    fn quotes_embedded_quote_and_trailing_backslash() {
        assert_eq!(quote_argument(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote_argument(r"C:\dir\"), r#""C:\dir\\""#);
        assert_eq!(quote_argument(r#"a\"b"#), r#""a\\\"b""#);
        assert_eq!(quote_argument(""), r#""""#);
    }

    #[test]
    fn plan_uses_executable_directory() {
        let exe = exe_in("/opt/ai-hub");
        let spec = plan_launch(&exe, &LauncherConfig::default()).unwrap();

        assert_eq!(spec.working_dir, Path::new("/opt/ai-hub"));
        assert_eq!(spec.script_path, Path::new("/opt/ai-hub").join("Main.ps1"));
        assert_eq!(spec.interpreter, "powershell.exe");
        assert!(spec.hide_window);
    }

    #[test]
    fn command_line_has_every_flag() {
        let exe = exe_in("/opt/ai-hub");
        let spec = plan_launch(&exe, &LauncherConfig::default()).unwrap();

        let expected = format!(
            "-ExecutionPolicy Bypass -NoProfile -WindowStyle Hidden -File \"{}\"",
            spec.script_path.display()
        );
        assert_eq!(spec.command_line(), expected);
    }

    #[test]
    fn command_line_keeps_spaces_inside_quotes() {
        let exe = exe_in("/home/user/My Apps/AI Hub");
        let spec = plan_launch(&exe, &LauncherConfig::default()).unwrap();
        let command_line = spec.command_line();

        for flag in [
            "-ExecutionPolicy Bypass",
            "-NoProfile",
            "-WindowStyle Hidden",
            "-File",
        ] {
            assert!(command_line.contains(flag), "missing {flag} in {command_line}");
        }
        assert!(command_line.ends_with(&format!("\"{}\"", spec.script_path.display())));
    }

    #[test]
    fn args_are_unquoted() {
        let exe = exe_in("/srv/AI Hub");
        let spec = plan_launch(&exe, &LauncherConfig::default()).unwrap();
        let args = spec.args();

        assert_eq!(args.len(), 7);
        assert_eq!(args[5], "-File");
        assert_eq!(args[6], spec.script_path.as_os_str());
    }

    #[test]
    fn custom_config_flows_into_plan() {
        let config = LauncherConfig::default()
            .with_script_name("Start.ps1")
            .with_interpreter("pwsh")
            .with_flags(["-NoLogo"])
            .with_hide_window(false);
        let spec = plan_launch(&exe_in("/opt/tool"), &config).unwrap();

        assert_eq!(spec.interpreter, "pwsh");
        assert_eq!(spec.script_path, Path::new("/opt/tool").join("Start.ps1"));
        assert!(!spec.hide_window);
        assert!(spec.command_line().starts_with("-NoLogo -File \""));
    }

    #[test]
    fn bare_file_name_has_no_directory() {
        let err = plan_launch(Path::new("ai-hub-launcher.exe"), &LauncherConfig::default())
            .unwrap_err();
        assert!(matches!(err, LaunchError::NoParentDirectory { .. }));
    }

    #[test]
    fn missing_script_reports_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("ai-hub-launcher.exe");

        match resolve_launch_plan(&exe, &LauncherConfig::default()) {
            Err(LaunchError::MissingScript { path }) => {
                assert_eq!(path, dir.path().join("Main.ps1"));
            }
            other => panic!("expected missing script, got {other:?}"),
        }
    }

    #[test]
    fn directory_named_like_script_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Main.ps1")).unwrap();
        let exe = dir.path().join("ai-hub-launcher.exe");

        let err = resolve_launch_plan(&exe, &LauncherConfig::default()).unwrap_err();
        assert!(matches!(err, LaunchError::MissingScript { .. }));
    }
}
