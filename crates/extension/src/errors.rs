use eqsys_host::TargetPath;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtensionError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtensionError {
    /// The external target path did not resolve. The registration is skipped;
    /// other registrations proceed independently.
    #[error("failed to resolve extension target {path}")]
    TargetResolution { path: TargetPath },
}
