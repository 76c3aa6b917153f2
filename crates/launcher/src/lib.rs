//! Starts the companion PowerShell script that lives next to the launcher executable, without a console window.
//! Failures are shown to the user as a modal error dialog; nothing is ever reported through the exit code.

use std::path::Path;

use log::{info, warn};
use snafu::ResultExt;

pub mod config;
pub mod dialog;
pub mod error;
pub mod plan;
pub mod spawn;

pub use config::LauncherConfig;
pub use dialog::{DialogContent, MessageBoxPresenter, Presenter};
pub use error::LaunchError;
pub use plan::{ProcessLaunchSpec, plan_launch, quote_argument, resolve_launch_plan};
pub use spawn::{Spawner, SystemSpawner};

/// A child that was successfully asked to start. The launcher never waits on it.
#[derive(Debug)]
pub struct Started<H> {
    pub spec: ProcessLaunchSpec,
    pub handle: H,
}

/// Resolve the companion script for `executable_path` and hand it to `spawner` exactly once.
pub fn launch<S: Spawner>(
    executable_path: &Path,
    config: &LauncherConfig,
    spawner: &mut S,
) -> Result<Started<S::Handle>, LaunchError> {
    let spec = resolve_launch_plan(executable_path, config)?;
    let handle = spawner.spawn(&spec).context(error::SpawnSnafu {
        interpreter: spec.interpreter.as_str(),
    })?;
    info!("Started {}", spec.script_path.display());

    Ok(Started { spec, handle })
}

/// Show `error` to the user.
pub fn report<P: Presenter>(error: &LaunchError, config: &LauncherConfig, presenter: &mut P) {
    warn!("Launch failed: {error}");
    presenter.show_error(&DialogContent::for_error(error, config));
}

/// The whole launcher: find ourselves, start the script, and report whatever went wrong.
pub fn run<S: Spawner, P: Presenter>(
    config: &LauncherConfig,
    spawner: &mut S,
    presenter: &mut P,
) -> Option<S::Handle> {
    let result = std::env::current_exe()
        .context(error::CurrentExeSnafu)
        .and_then(|executable_path| launch(&executable_path, config, spawner));

    match result {
        Ok(started) => Some(started.handle),
        Err(e) => {
            report(&e, config, presenter);
            None
        }
    }
}
