use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LaunchError {
    #[snafu(display("Could not locate the launcher executable: {source}"))]
    CurrentExe { source: std::io::Error },

    #[snafu(display("Executable path has no parent directory: {}", path.display()))]
    NoParentDirectory { path: PathBuf },

    #[snafu(display("Companion script not found: {}", path.display()))]
    MissingScript { path: PathBuf },

    #[snafu(display("Error starting {interpreter}: {source}"))]
    Spawn {
        interpreter: String,
        source: std::io::Error,
    },
}

impl LaunchError {
    /// The missing script is the one failure the launcher expects; everything else is critical.
    pub fn is_critical(&self) -> bool {
        !matches!(self, Self::MissingScript { .. })
    }
}
