use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Output file written, or config file created
/// - `Failure` (1): Usage problem (missing paths, config file already exists)
/// - `Error` (2): Command failed (input not found, I/O error, invalid config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command could not run as invoked.
    Failure,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
