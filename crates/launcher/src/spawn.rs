use std::process::{Child, Command, Stdio};

use log::debug;

use crate::plan::ProcessLaunchSpec;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

/// Turns a [`ProcessLaunchSpec`] into a running child process.
pub trait Spawner {
    /// Whatever the spawner hands back to identify the child.
    type Handle;

    fn spawn(&mut self, spec: &ProcessLaunchSpec) -> std::io::Result<Self::Handle>;
}

/// Starts the interpreter directly through [`Command`], with no shell in between.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl SystemSpawner {
    pub fn command(spec: &ProcessLaunchSpec) -> Command {
        let mut command = Command::new(&spec.interpreter);
        command
            .current_dir(&spec.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;

            // Passed verbatim so the script path keeps exactly the quoting we rendered.
            command.raw_arg(spec.command_line());
            if spec.hide_window {
                command.creation_flags(CREATE_NO_WINDOW);
            }
        }

        #[cfg(not(windows))]
        command.args(spec.args());

        command
    }
}

impl Spawner for SystemSpawner {
    type Handle = Child;

    fn spawn(&mut self, spec: &ProcessLaunchSpec) -> std::io::Result<Child> {
        debug!(
            "Spawning {} {} in {}",
            spec.interpreter,
            spec.command_line(),
            spec.working_dir.display()
        );
        Self::command(spec).spawn()
    }
}
